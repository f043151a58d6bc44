use wasm_bindgen::prelude::*;
use yew::{Callback, Html, function_component, html, use_effect_with, use_state};
use yew_router::prelude::*;

use crate::components::Loading;
use crate::routes::MainRoute;
use crate::session;
use crate::store::{Action, AuthAction, app_dispatch};

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = console)]
    fn log(s: &str);
}

#[function_component(App)]
pub fn app() -> Html {
    let restored = use_state(|| false);

    // Restore a persisted session before the first routed render, so a
    // reload does not bounce through the login screen.
    {
        let restored = restored.clone();
        use_effect_with((), move |()| {
            if let Some(stored) = session::load() {
                app_dispatch().apply(Action::Auth(AuthAction::LoggedIn {
                    token: stored.token,
                    kind: stored.kind,
                }));
            }
            restored.set(true);
            || ()
        });
    }

    let logout_callback = Callback::from(|()| {
        session::clear();
    });

    if !*restored {
        return html! { <Loading /> };
    }

    html! {
        <BrowserRouter>
            <Switch<MainRoute> render={move |route| crate::routes::switch_with_logout(route, logout_callback.clone())} />
        </BrowserRouter>
    }
}
