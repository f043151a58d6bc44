use i18nrs::yew::use_translation;
use reqwest::StatusCode;
use tipdesk_shared::models::LoginRequest;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::hooks::use_navigator;

use crate::api::ApiClient;
use crate::routes::landing_route;
use crate::session::{self, StoredSession};
use crate::store::{Action, AuthAction, app_dispatch, redirect_target};

/// Translation key for a failed login attempt. A missing status means
/// the request never reached the server.
fn login_error_key(status: Option<StatusCode>) -> &'static str {
    match status {
        None => "login.error.network",
        Some(StatusCode::UNAUTHORIZED) => "login.error.invalid",
        Some(_) => "login.error.failed",
    }
}

#[function_component(LoginPage)]
pub fn login_page() -> Html {
    let (i18n, ..) = use_translation();
    let email = use_state(String::new);
    let password = use_state(String::new);
    let error = use_state(|| None::<&'static str>);
    let loading = use_state(|| false);
    let navigator = use_navigator();

    let onsubmit = {
        let email_handle = email.clone();
        let password_handle = password.clone();
        let error_handle = error.clone();
        let loading_handle = loading.clone();
        let navigator = navigator;
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            let email_value = (*email_handle).clone();
            let password_value = (*password_handle).clone();
            loading_handle.set(true);
            error_handle.set(None);
            let loading_ref = loading_handle.clone();
            let error_ref = error_handle.clone();
            let navigator_handle = navigator.clone();
            spawn_local(async move {
                let client = ApiClient::shared();
                let request = LoginRequest {
                    email: email_value,
                    password: password_value,
                };
                match client.login(&request).await {
                    Ok(response) => {
                        session::store(&StoredSession {
                            token: response.token.clone(),
                            kind: response.kind,
                        });
                        app_dispatch().apply(Action::Auth(AuthAction::LoggedIn {
                            token: response.token,
                            kind: response.kind,
                        }));
                        if let Some(ref nav) = navigator_handle {
                            nav.push(&landing_route(redirect_target(response.kind)));
                        }
                    }
                    Err(err) => {
                        error_ref.set(Some(login_error_key(err.status())));
                    }
                }
                loading_ref.set(false);
            });
        })
    };

    let on_email_change = {
        let email = email.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                email.set(input.value());
            }
        })
    };

    let on_password_change = {
        let password = password.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                password.set(input.value());
            }
        })
    };

    let is_busy = *loading;
    let disable_submit = (*email).is_empty() || (*password).is_empty() || is_busy;

    html! {
        <div class="flex items-center justify-center min-h-screen bg-base-200">
            <div class="card w-full max-w-md shadow-lg bg-base-100">
                <form class="card-body" onsubmit={onsubmit}>
                    <h2 class="card-title text-2xl">{ i18n.t("login.title") }</h2>
                    if let Some(key) = *error {
                        <div class="alert alert-error">
                            <span>{ i18n.t(key) }</span>
                        </div>
                    }
                    <div class="form-control">
                        <label class="label" for="email">
                            <span class="label-text">{ i18n.t("login.email") }</span>
                        </label>
                        <input
                            id="email"
                            class="input input-bordered"
                            type="email"
                            required=true
                            value={(*email).clone()}
                            oninput={on_email_change}
                        />
                    </div>
                    <div class="form-control">
                        <label class="label" for="password">
                            <span class="label-text">{ i18n.t("login.password") }</span>
                        </label>
                        <input
                            id="password"
                            class="input input-bordered"
                            type="password"
                            required=true
                            value={(*password).clone()}
                            oninput={on_password_change}
                        />
                    </div>
                    <div class="form-control mt-6">
                        <button class="btn btn-primary" type="submit" disabled={disable_submit}>
                            {
                                if is_busy {
                                    i18n.t("login.submitting")
                                } else {
                                    i18n.t("login.submit")
                                }
                            }
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}
