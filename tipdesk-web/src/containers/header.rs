use i18nrs::yew::use_translation;
use wasm_bindgen::prelude::*;
use yew::prelude::*;
use yew_router::prelude::Link;
use yewdux::prelude::use_selector;

use crate::components::{
    language_selector::LanguageSelector, nav_item::NavItem, theme_switcher::ThemeSwitcher,
    user_dropdown::UserDropdown,
};
use crate::routes::MainRoute;
use crate::store::{AppState, SessionStatus};

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = console)]
    fn log(s: &str);
}

#[derive(Properties, PartialEq)]
pub struct HeaderProps {
    #[prop_or_default]
    pub current_route: Option<MainRoute>,
    #[prop_or_default]
    pub nav_routes: Option<Vec<MainRoute>>,
    #[prop_or_default]
    pub on_logout: Option<Callback<()>>,
}

#[function_component(Header)]
pub fn header(props: &HeaderProps) -> Html {
    let (i18n, ..) = use_translation();
    let status = use_selector(|state: &AppState| state.auth.status);
    let is_authenticated = *status == SessionStatus::NotExpired;

    let render_routes = |routes: &[MainRoute]| -> Html {
        html! {
            { for routes.iter().map(|route| html! {
                <NavItem
                    current_route={props.current_route.clone()}
                    route={route.clone()}
                />
            }) }
        }
    };

    html! {
        <nav class="navbar justify-between bg-base-300">
            <a class="btn btn-ghost text-lg">
                <Link<MainRoute> to={MainRoute::Home} classes="text-lg">
                    {i18n.t("app.title")}
                </Link<MainRoute>>
            </a>
            <div class="dropdown dropdown-end sm:hidden">
                <button class="btn btn-soft">
                <i class="fa-solid fa-bars text-lg"></i>
                </button>
                <ul
                tabindex="0"
                class="dropdown-content menu z-[1] bg-base-200 p-6 rounded-box shadow w-56 gap-2"
                >
                {
                    props
                        .nav_routes
                        .as_ref()
                        .map_or_else(|| html! {}, |routes| render_routes(routes))
                }
                </ul>
            </div>
            <ul class="hidden menu sm:menu-horizontal">
                {
                    props
                        .nav_routes
                        .as_ref()
                        .map_or_else(|| html! {}, |routes| render_routes(routes))
                }
            </ul>
            <div class="hidden sm:flex">
                <LanguageSelector />
                <ThemeSwitcher />
                {
                    if is_authenticated {
                        html! { <UserDropdown on_logout={props.on_logout.clone()} /> }
                    } else {
                        html! {
                            <Link<MainRoute> to={MainRoute::Login} classes="btn btn-primary btn-sm">
                                {i18n.t("header.login")}
                            </Link<MainRoute>>
                        }
                    }
                }
            </div>
            <div class="sm:hidden flex items-center gap-2">
                {
                    if is_authenticated {
                        html! { <UserDropdown on_logout={props.on_logout.clone()} /> }
                    } else {
                        html! {
                            <Link<MainRoute> to={MainRoute::Login} classes="btn btn-ghost btn-sm">
                                <i class="fa-solid fa-right-to-bracket text-lg"></i>
                            </Link<MainRoute>>
                        }
                    }
                }
            </div>
        </nav>
    }
}
