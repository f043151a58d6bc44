use i18nrs::yew::use_translation;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yewdux::prelude::use_selector;

use crate::geocode;
use crate::store::{Action, AppState, MapAction, MapCoordinate, PropertiesAction, app_dispatch};

/// Location picker for property placement. The coordinate is owned by
/// the map slice; the resolved address lands in the properties slice.
#[function_component(MapPage)]
pub fn map_page() -> Html {
    let (i18n, ..) = use_translation();
    let coordinate = use_selector(|state: &AppState| state.map.coordinate);
    let address = use_selector(|state: &AppState| state.properties.map_address.clone());
    let lat_input = use_state(|| coordinate.lat.to_string());
    let lng_input = use_state(|| coordinate.lng.to_string());
    let resolving = use_state(|| false);
    let error = use_state(|| None::<String>);

    let on_lat_change = {
        let lat_input = lat_input.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                lat_input.set(input.value());
            }
        })
    };

    let on_lng_change = {
        let lng_input = lng_input.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                lng_input.set(input.value());
            }
        })
    };

    let on_apply = {
        let lat_input = lat_input.clone();
        let lng_input = lng_input.clone();
        let resolving = resolving.clone();
        let error = error.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            let (Ok(lat), Ok(lng)) = (lat_input.parse::<f64>(), lng_input.parse::<f64>()) else {
                error.set(Some("Coordinates must be numeric".to_string()));
                return;
            };
            error.set(None);
            let coordinate = MapCoordinate { lat, lng };
            app_dispatch().apply(Action::Map(MapAction::Moved(coordinate)));

            resolving.set(true);
            let resolving = resolving.clone();
            let error = error.clone();
            spawn_local(async move {
                match geocode::reverse_geocode(coordinate).await {
                    Ok(display_name) => {
                        app_dispatch()
                            .apply(Action::Properties(PropertiesAction::AddressResolved(display_name)));
                    }
                    Err(err) => error.set(Some(err.to_string())),
                }
                resolving.set(false);
            });
        })
    };

    html! {
        <div class="p-4 space-y-6">
            <h1 class="text-2xl font-bold">{ i18n.t("map.title") }</h1>
            if let Some(message) = &*error {
                <div class="alert alert-error">
                    <span>{ message.clone() }</span>
                </div>
            }
            <form class="flex flex-wrap items-end gap-4" onsubmit={on_apply}>
                <div class="form-control">
                    <label class="label" for="lat">
                        <span class="label-text">{ i18n.t("map.latitude") }</span>
                    </label>
                    <input
                        id="lat"
                        class="input input-bordered"
                        value={(*lat_input).clone()}
                        oninput={on_lat_change}
                    />
                </div>
                <div class="form-control">
                    <label class="label" for="lng">
                        <span class="label-text">{ i18n.t("map.longitude") }</span>
                    </label>
                    <input
                        id="lng"
                        class="input input-bordered"
                        value={(*lng_input).clone()}
                        oninput={on_lng_change}
                    />
                </div>
                <button class="btn btn-primary" type="submit" disabled={*resolving}>
                    { if *resolving { i18n.t("map.resolving") } else { i18n.t("map.apply") } }
                </button>
            </form>
            <div class="stats shadow">
                <div class="stat">
                    <div class="stat-title">{ i18n.t("map.coordinate") }</div>
                    <div class="stat-value text-lg font-mono">
                        { format!("{:.5}, {:.5}", coordinate.lat, coordinate.lng) }
                    </div>
                    <div class="stat-desc">
                        {
                            if address.is_empty() {
                                i18n.t("map.no_address")
                            } else {
                                (*address).clone()
                            }
                        }
                    </div>
                </div>
            </div>
        </div>
    }
}
