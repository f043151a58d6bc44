//! Application state tree and its reducers.
//!
//! The store is a single [`AppState`] with one slice per domain. Every
//! dispatched [`Action`] fans out to every domain reducer; a reducer
//! that does not recognize the action hands its slice back untouched,
//! pointer-identical, so selectors on other slices never re-render.

pub(crate) mod auth;
pub(crate) mod map;
pub(crate) mod properties;
pub(crate) mod settings;

use std::rc::Rc;

use yewdux::prelude::*;

pub use auth::{AuthAction, AuthState, SessionStatus, redirect_target};
pub use map::{MapAction, MapCoordinate, MapState};
pub use properties::{PropertiesAction, PropertiesState};
pub use settings::{SettingsAction, SettingsState};

/// The whole application state, keyed by domain.
#[derive(Debug, Default, Clone, PartialEq, Store)]
pub struct AppState {
    pub auth: Rc<AuthState>,
    pub map: Rc<MapState>,
    pub properties: Rc<PropertiesState>,
    pub settings: Rc<SettingsState>,
}

#[cfg(not(target_arch = "wasm32"))]
thread_local! {
    static STORE_CONTEXT: yewdux::Context = yewdux::Context::new();
}

/// Dispatch bound to the application store.
///
/// Browser builds use the global context, which is the same one the
/// yewdux hooks fall back to; other targets get a thread-local context,
/// so the call sites compile and behave identically under native tests.
#[must_use]
pub fn app_dispatch() -> Dispatch<AppState> {
    #[cfg(target_arch = "wasm32")]
    {
        Dispatch::global()
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        STORE_CONTEXT.with(|cx| Dispatch::new(cx))
    }
}

/// Root action type. Domain reducers match on their own variant and
/// ignore the rest, so the compiler keeps the action set closed.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    Auth(AuthAction),
    Map(MapAction),
    Properties(PropertiesAction),
    Settings(SettingsAction),
}

impl Reducer<AppState> for Action {
    fn apply(self, state: Rc<AppState>) -> Rc<AppState> {
        let next = AppState {
            auth: auth::reduce(Rc::clone(&state.auth), &self),
            map: map::reduce(Rc::clone(&state.map), &self),
            properties: properties::reduce(Rc::clone(&state.properties), &self),
            settings: settings::reduce(Rc::clone(&state.settings), &self),
        };
        if next == *state { state } else { Rc::new(next) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tipdesk_shared::models::Container;

    fn dispatch(state: Rc<AppState>, action: Action) -> Rc<AppState> {
        action.apply(state)
    }

    /// A property action must leave every other slice pointer-identical.
    #[test]
    fn test_property_success_touches_only_properties_slice() {
        let initial = Rc::new(AppState::default());
        let containers = vec![Container {
            id: 1,
            name: "Lobby stand".to_string(),
            property: None,
            active: true,
        }];

        let next = dispatch(
            Rc::clone(&initial),
            Action::Properties(PropertiesAction::ContainersLoaded(containers)),
        );

        assert!(!Rc::ptr_eq(&initial.properties, &next.properties));
        assert!(Rc::ptr_eq(&initial.auth, &next.auth));
        assert!(Rc::ptr_eq(&initial.map, &next.map));
        assert!(Rc::ptr_eq(&initial.settings, &next.settings));
    }

    #[test]
    fn test_auth_action_touches_only_auth_slice() {
        let initial = Rc::new(AppState::default());

        let next = dispatch(
            Rc::clone(&initial),
            Action::Auth(AuthAction::LoggedIn {
                token: "t1".to_string(),
                kind: 1,
            }),
        );

        assert!(!Rc::ptr_eq(&initial.auth, &next.auth));
        assert!(Rc::ptr_eq(&initial.map, &next.map));
        assert!(Rc::ptr_eq(&initial.properties, &next.properties));
        assert!(Rc::ptr_eq(&initial.settings, &next.settings));
    }

    /// The dispatch accessor must reach a live store on every target.
    #[test]
    fn test_app_dispatch_reaches_the_store_off_browser() {
        let dispatch = app_dispatch();
        assert!(!dispatch.get().settings.auto_assign_delivery);

        dispatch.apply(Action::Settings(SettingsAction::AutoAssignToggled(true)));

        assert!(app_dispatch().get().settings.auto_assign_delivery);
    }

    /// A dispatch that changes nothing must hand back the same root.
    #[test]
    fn test_noop_dispatch_preserves_root_identity() {
        let initial = Rc::new(AppState::default());

        // Expiring a session that was never logged in still flips the
        // status, so use a genuinely state-preserving action instead.
        let toggled = dispatch(
            Rc::clone(&initial),
            Action::Settings(SettingsAction::AutoAssignToggled(false)),
        );

        assert!(Rc::ptr_eq(&initial, &toggled));
    }
}
