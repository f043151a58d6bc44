use i18nrs::yew::use_translation;
use yew::prelude::*;
use yew_router::Routable;
use yew_router::hooks::use_navigator;
use yewdux::prelude::use_selector;

use crate::routes::MainRoute;
use crate::session;
use crate::store::{Action, AppState, AuthAction, app_dispatch};

#[derive(yew::Properties, PartialEq)]
pub struct UserDropdownProps {
    #[prop_or_default]
    pub on_logout: Option<Callback<()>>,
}

#[function_component(UserDropdown)]
pub fn user_dropdown(props: &UserDropdownProps) -> Html {
    let navigator = use_navigator().unwrap();
    let (i18n, ..) = use_translation();
    let kind = use_selector(|state: &AppState| state.auth.kind);
    let Some(kind) = *kind else {
        return html! {};
    };

    let account_label = match kind {
        2 => i18n.t("account.withdrawal_desk"),
        _ => i18n.t("account.employer"),
    };

    let settings_button = {
        let settings_navigator = navigator.clone();
        let onclick = Callback::from(move |event: yew::MouseEvent| {
            event.prevent_default();
            settings_navigator.push(&MainRoute::Settings);
        });
        html! {
            <li><a {onclick}>{i18n.t("sidebar.settings")}</a></li>
        }
    };

    let logout_button = {
        let navigator = navigator;
        let on_logout = props.on_logout.clone();
        let onclick = Callback::from(move |event: yew::MouseEvent| {
            event.prevent_default();
            session::clear();
            app_dispatch().apply(Action::Auth(AuthAction::LoggedOut {
                to: MainRoute::Login.to_path(),
            }));
            if let Some(callback) = &on_logout {
                callback.emit(());
            }
            navigator.push(&MainRoute::Login);
        });
        html! {
            <li><a {onclick}>{i18n.t("header.logout")}</a></li>
        }
    };

    html! {
        <div class="dropdown dropdown-end">
            <div tabindex="0" role="button" class="btn btn-ghost btn-circle mb-1">
                <i class="fa-solid fa-user text-lg"></i>
            </div>
            <ul tabIndex={0} class="dropdown-content z-[1] menu p-2 shadow bg-base-200 rounded-box w-52">
                <li class="px-2 py-1 text-left">
                    <div class="text-sm font-semibold text-base-content">{ account_label }</div>
                </li>
                <div class="divider my-0"></div>
                {settings_button}
                <div class="divider my-0"></div>
                {logout_button}
            </ul>
        </div>
    }
}
