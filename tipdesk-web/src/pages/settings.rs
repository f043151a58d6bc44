use i18nrs::yew::use_translation;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yewdux::prelude::use_selector;

use crate::api::ApiClient;
use crate::store::{Action, AppState, SettingsAction, app_dispatch};

#[function_component(SettingsPage)]
pub fn settings_page() -> Html {
    let (i18n, ..) = use_translation();
    let auto_assign = use_selector(|state: &AppState| state.settings.auto_assign_delivery);
    let error = use_state(|| None::<String>);
    let saving = use_state(|| false);

    // Hydrate the toggle from the API on first render.
    use_effect_with((), move |()| {
        spawn_local(async move {
            if let Ok(setting) = ApiClient::shared().auto_assign().await {
                app_dispatch()
                    .apply(Action::Settings(SettingsAction::AutoAssignToggled(setting.enabled)));
            }
        });
        || ()
    });

    let on_toggle = {
        let error = error.clone();
        let saving = saving.clone();
        Callback::from(move |event: Event| {
            let Some(input) = event.target_dyn_into::<HtmlInputElement>() else {
                return;
            };
            let enabled = input.checked();
            let previous = !enabled;
            // Optimistic flip; reverted if the save fails.
            app_dispatch()
                .apply(Action::Settings(SettingsAction::AutoAssignToggled(enabled)));
            saving.set(true);
            error.set(None);
            let saving = saving.clone();
            let error = error.clone();
            spawn_local(async move {
                if let Err(err) = ApiClient::shared().set_auto_assign(enabled).await {
                    app_dispatch()
                        .apply(Action::Settings(SettingsAction::AutoAssignToggled(previous)));
                    error.set(Some(err.to_string()));
                }
                saving.set(false);
            });
        })
    };

    html! {
        <div class="p-4 space-y-6">
            <h1 class="text-2xl font-bold">{ i18n.t("settings.title") }</h1>
            if let Some(message) = &*error {
                <div class="alert alert-error">
                    <span>{ message.clone() }</span>
                </div>
            }
            <div class="form-control w-fit">
                <label class="label cursor-pointer gap-4">
                    <span class="label-text">{ i18n.t("settings.auto_assign") }</span>
                    <input
                        type="checkbox"
                        class="toggle toggle-primary"
                        checked={*auto_assign}
                        disabled={*saving}
                        onchange={on_toggle}
                    />
                </label>
                <p class="text-sm text-base-content/70">
                    { i18n.t("settings.auto_assign_hint") }
                </p>
            </div>
        </div>
    }
}
