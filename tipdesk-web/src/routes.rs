use strum::{EnumIter, IntoEnumIterator};
use wasm_bindgen::prelude::*;
use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::prelude::use_selector;

use crate::containers::Layout;
use crate::pages::{
    EmployersPage, ErrorPage, LoginPage, MapPage, SettingsPage, TransactionDetailPage,
    TransactionsPage, WithdrawalsPage,
};
use crate::store::{AppState, SessionStatus};

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = console)]
    fn log(s: &str);
}

/// The main routes
#[derive(Debug, Clone, PartialEq, Routable, EnumIter)]
pub enum MainRoute {
    #[at("/")]
    Home,
    #[at("/login")]
    Login,
    #[at("/admin/employers")]
    Employers,
    #[at("/admin/withdrawals")]
    Withdrawals,
    #[at("/admin/transactions")]
    Transactions,
    #[at("/admin/transactions/:id")]
    TransactionDetail { id: i64 },
    #[at("/admin/map")]
    Map,
    #[at("/admin/settings")]
    Settings,
    #[not_found]
    #[at("/404")]
    NotFound,
}

/// Routes shown in the sidebar navigation.
pub fn nav_routes() -> Vec<MainRoute> {
    MainRoute::iter()
        .filter(|route| {
            !matches!(
                route,
                MainRoute::Home
                    | MainRoute::Login
                    | MainRoute::TransactionDetail { .. }
                    | MainRoute::NotFound
            )
        })
        .collect()
}

/// Landing route for the redirect target held in the auth slice.
pub fn landing_route(to: &str) -> MainRoute {
    match to {
        "/admin/withdrawals" => MainRoute::Withdrawals,
        _ => MainRoute::Employers,
    }
}

#[derive(Properties, PartialEq)]
pub struct MainRouteViewProps {
    pub route: MainRoute,
    pub on_logout: Callback<()>,
}

#[function_component(MainRouteView)]
fn main_route_view(props: &MainRouteViewProps) -> Html {
    let auth = use_selector(|state: &AppState| std::rc::Rc::clone(&state.auth));
    let is_authenticated = auth.status == SessionStatus::NotExpired;
    let on_logout = props.on_logout.clone();

    let page = |route: MainRoute, content: Html| {
        let logout_cb = on_logout.clone();
        html! {
            <Layout nav_routes={nav_routes()} current_route={route} on_logout={Some(logout_cb)}>
                {content}
            </Layout>
        }
    };

    match props.route.clone() {
        MainRoute::Login => {
            if is_authenticated {
                html! { <Redirect<MainRoute> to={landing_route(&auth.to)} /> }
            } else {
                html! { <LoginPage /> }
            }
        }
        MainRoute::Home => {
            if is_authenticated {
                html! { <Redirect<MainRoute> to={landing_route(&auth.to)} /> }
            } else {
                html! { <Redirect<MainRoute> to={MainRoute::Login} /> }
            }
        }
        route if !is_authenticated => {
            log(std::format!("Unauthenticated access to {route:?}, redirecting").as_str());
            html! { <Redirect<MainRoute> to={MainRoute::Login} /> }
        }
        MainRoute::Employers => page(MainRoute::Employers, html! { <EmployersPage /> }),
        MainRoute::Withdrawals => page(MainRoute::Withdrawals, html! { <WithdrawalsPage /> }),
        MainRoute::Transactions => page(MainRoute::Transactions, html! { <TransactionsPage /> }),
        MainRoute::TransactionDetail { id } => page(
            MainRoute::TransactionDetail { id },
            html! { <TransactionDetailPage {id} /> },
        ),
        MainRoute::Map => page(MainRoute::Map, html! { <MapPage /> }),
        MainRoute::Settings => page(MainRoute::Settings, html! { <SettingsPage /> }),
        MainRoute::NotFound => page(MainRoute::NotFound, html! { <ErrorPage /> }),
    }
}

/// Switch function for the main routes.
pub fn switch_with_logout(route: MainRoute, on_logout: Callback<()>) -> Html {
    log(std::format!("Switching to main route: {route:?}").as_str());
    html! { <MainRouteView {route} {on_logout} /> }
}
