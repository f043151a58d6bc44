use i18nrs::yew::use_translation;
use web_sys::HtmlInputElement;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yewdux::prelude::use_selector;

use crate::api::ApiClient;
use crate::components::Loading;
use crate::store::{Action, AppState, PropertiesAction, app_dispatch};

/// Container listing for the employer's properties. Unlike the
/// transaction pages this one goes through the shared store, so the
/// listing survives navigation within the session.
#[function_component(EmployersPage)]
pub fn employers_page() -> Html {
    let (i18n, ..) = use_translation();
    let properties = use_selector(|state: &AppState| std::rc::Rc::clone(&state.properties));

    use_effect_with((), move |()| {
        app_dispatch().apply(Action::Properties(PropertiesAction::FetchStarted));
        spawn_local(async move {
            let dispatch = app_dispatch();
            match ApiClient::shared().containers().await {
                Ok(containers) => {
                    dispatch.apply(Action::Properties(PropertiesAction::ContainersLoaded(containers)));
                }
                Err(err) => {
                    dispatch.apply(Action::Properties(PropertiesAction::FetchFailed(err.to_string())));
                }
            }
            match ApiClient::shared().tech_users().await {
                Ok(users) => {
                    dispatch.apply(Action::Properties(PropertiesAction::TechUsersLoaded(users)));
                }
                Err(err) => {
                    dispatch.apply(Action::Properties(PropertiesAction::FetchFailed(err.to_string())));
                }
            }
        });
        || ()
    });

    let selected_tech = use_state(|| None::<i64>);

    let on_select_tech = {
        let selected_tech = selected_tech.clone();
        Callback::from(move |user_id: i64| {
            selected_tech.set(Some(user_id));
            spawn_local(async move {
                let dispatch = app_dispatch();
                match ApiClient::shared().tech_containers(user_id).await {
                    Ok(containers) => {
                        dispatch.apply(Action::Properties(PropertiesAction::TechContainersLoaded(
                            containers,
                        )));
                    }
                    Err(err) => {
                        dispatch
                            .apply(Action::Properties(PropertiesAction::FetchFailed(err.to_string())));
                    }
                }
            });
        })
    };

    let on_search = {
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                let terms: Vec<String> = input
                    .value()
                    .split_whitespace()
                    .map(ToString::to_string)
                    .collect();
                app_dispatch()
                    .apply(Action::Properties(PropertiesAction::SearchChanged(terms)));
            }
        })
    };

    let visible_containers: Vec<_> = properties
        .containers
        .iter()
        .filter(|container| {
            properties.search_terms.is_empty()
                || properties.search_terms.iter().any(|term| {
                    container
                        .name
                        .to_lowercase()
                        .contains(&term.to_lowercase())
                })
        })
        .cloned()
        .collect();

    html! {
        <div class="p-4 space-y-6">
            <h1 class="text-2xl font-bold">{ i18n.t("employers.title") }</h1>
            if let Some(message) = &properties.error {
                <div class="alert alert-error">
                    <span>{ message.clone() }</span>
                </div>
            }
            <input
                class="input input-bordered w-full max-w-md"
                placeholder={i18n.t("employers.search")}
                oninput={on_search}
            />
            if properties.loading {
                <Loading />
            } else {
                <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6">
                    { for visible_containers.iter().map(|container| html! {
                        <div class="card bg-base-200 shadow-xl" key={container.id}>
                            <div class="card-body">
                                <h2 class="card-title">{ container.name.clone() }</h2>
                                <p>{ container.property.clone().unwrap_or_else(|| "—".to_string()) }</p>
                                <div class="card-actions justify-end">
                                    {
                                        if container.active {
                                            html! { <span class="badge badge-success">{ i18n.t("employers.active") }</span> }
                                        } else {
                                            html! { <span class="badge badge-ghost">{ i18n.t("employers.inactive") }</span> }
                                        }
                                    }
                                </div>
                            </div>
                        </div>
                    }) }
                </div>
                <div class="stats shadow">
                    <div class="stat">
                        <div class="stat-title">{ i18n.t("employers.technicians") }</div>
                        <div class="stat-value">{ properties.tech_users.len() }</div>
                    </div>
                    <div class="stat">
                        <div class="stat-title">{ i18n.t("employers.containers") }</div>
                        <div class="stat-value">{ properties.containers.len() }</div>
                    </div>
                </div>
                <h2 class="text-xl font-semibold">{ i18n.t("employers.technicians") }</h2>
                <div class="flex flex-wrap gap-2">
                    { for properties.tech_users.iter().map(|user| {
                        let on_select = on_select_tech.clone();
                        let user_id = user.id;
                        let is_selected = *selected_tech == Some(user_id);
                        html! {
                            <button
                                key={user.id}
                                class={if is_selected { "btn btn-primary btn-sm" } else { "btn btn-outline btn-sm" }}
                                onclick={Callback::from(move |_| on_select.emit(user_id))}
                            >
                                { user.name.clone() }
                            </button>
                        }
                    }) }
                </div>
                if selected_tech.is_some() {
                    <ul class="menu bg-base-200 rounded-box w-full max-w-md">
                        { for properties.tech_containers.iter().map(|container| html! {
                            <li key={container.id}><span>{ container.name.clone() }</span></li>
                        }) }
                    </ul>
                }
            }
        </div>
    }
}
