use std::rc::Rc;

use super::Action;

/// Where the session currently stands.
///
/// The machine is deliberately unguarded: any status can move to any
/// other through the corresponding action, matching how the API and the
/// UI drive it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionStatus {
    /// No token held.
    #[default]
    NotLogged,
    /// Token held and believed valid.
    NotExpired,
    /// Token still held but rejected by the API; re-authentication
    /// required before the next request carries a valid token.
    Expired,
}

/// Authentication slice. A token is held exactly while the status is
/// `NotExpired` or `Expired`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthState {
    pub id_token: Option<String>,
    /// Account kind from the login payload: 1 = employer back-office,
    /// 2 = withdrawal desk.
    pub kind: Option<i32>,
    pub status: SessionStatus,
    /// Landing route for the current account kind.
    pub to: String,
}

impl Default for AuthState {
    fn default() -> Self {
        Self {
            id_token: None,
            kind: None,
            status: SessionStatus::NotLogged,
            to: "/".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthAction {
    /// Credentials accepted, token issued.
    LoggedIn { token: String, kind: i32 },
    /// The API answered 401 on a non-login request.
    SessionExpired,
    /// The held token was re-validated out of band.
    SessionRevalidated,
    /// Explicit logout with a redirect target for the login screen.
    LoggedOut { to: String },
}

/// Landing route for an account kind.
#[must_use]
pub fn redirect_target(kind: i32) -> &'static str {
    match kind {
        2 => "/admin/withdrawals",
        _ => "/admin/employers",
    }
}

pub(super) fn reduce(state: Rc<AuthState>, action: &Action) -> Rc<AuthState> {
    let Action::Auth(action) = action else {
        return state;
    };
    match action {
        AuthAction::LoggedIn { token, kind } => Rc::new(AuthState {
            id_token: Some(token.clone()),
            kind: Some(*kind),
            status: SessionStatus::NotExpired,
            to: redirect_target(*kind).to_string(),
        }),
        AuthAction::SessionExpired => {
            // Idempotent: repeated 401s while already expired are no-ops.
            if state.status == SessionStatus::Expired {
                state
            } else {
                Rc::new(AuthState {
                    status: SessionStatus::Expired,
                    ..(*state).clone()
                })
            }
        }
        AuthAction::SessionRevalidated => Rc::new(AuthState {
            status: SessionStatus::NotExpired,
            ..(*state).clone()
        }),
        AuthAction::LoggedOut { to } => Rc::new(AuthState {
            id_token: None,
            kind: None,
            status: SessionStatus::NotLogged,
            to: to.clone(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{MapAction, MapCoordinate};

    fn reduce_auth(state: Rc<AuthState>, action: AuthAction) -> Rc<AuthState> {
        reduce(state, &Action::Auth(action))
    }

    #[test]
    fn test_login_employer_kind() {
        let state = reduce_auth(
            Rc::new(AuthState::default()),
            AuthAction::LoggedIn {
                token: "t1".to_string(),
                kind: 1,
            },
        );

        assert_eq!(state.id_token.as_deref(), Some("t1"));
        assert_eq!(state.kind, Some(1));
        assert_eq!(state.status, SessionStatus::NotExpired);
        assert_eq!(state.to, "/admin/employers");
    }

    #[test]
    fn test_login_withdrawal_kind() {
        let state = reduce_auth(
            Rc::new(AuthState::default()),
            AuthAction::LoggedIn {
                token: "t1".to_string(),
                kind: 2,
            },
        );

        assert_eq!(state.to, "/admin/withdrawals");
    }

    #[test]
    fn test_expire_is_idempotent() {
        let logged_in = reduce_auth(
            Rc::new(AuthState::default()),
            AuthAction::LoggedIn {
                token: "t1".to_string(),
                kind: 1,
            },
        );

        let expired = reduce_auth(logged_in, AuthAction::SessionExpired);
        assert_eq!(expired.status, SessionStatus::Expired);
        // The token survives expiry, pending re-authentication.
        assert_eq!(expired.id_token.as_deref(), Some("t1"));

        let expired_again = reduce_auth(Rc::clone(&expired), AuthAction::SessionExpired);
        assert!(Rc::ptr_eq(&expired, &expired_again));
    }

    #[test]
    fn test_logout_clears_token_and_sets_target() {
        let logged_in = reduce_auth(
            Rc::new(AuthState::default()),
            AuthAction::LoggedIn {
                token: "t1".to_string(),
                kind: 1,
            },
        );

        let logged_out = reduce_auth(
            logged_in,
            AuthAction::LoggedOut {
                to: "/login".to_string(),
            },
        );

        assert!(logged_out.id_token.is_none());
        assert!(logged_out.kind.is_none());
        assert_eq!(logged_out.status, SessionStatus::NotLogged);
        assert_eq!(logged_out.to, "/login");
    }

    #[test]
    fn test_revalidation_restores_not_expired() {
        let expired = Rc::new(AuthState {
            id_token: Some("t1".to_string()),
            kind: Some(1),
            status: SessionStatus::Expired,
            to: "/admin/employers".to_string(),
        });

        let revalidated = reduce_auth(expired, AuthAction::SessionRevalidated);
        assert_eq!(revalidated.status, SessionStatus::NotExpired);
        assert_eq!(revalidated.id_token.as_deref(), Some("t1"));
    }

    /// Actions for other domains leave the slice pointer-identical.
    #[test]
    fn test_foreign_action_is_identity() {
        let state = Rc::new(AuthState::default());
        let next = reduce(
            Rc::clone(&state),
            &Action::Map(MapAction::Moved(MapCoordinate {
                lat: 48.8566,
                lng: 2.3522,
            })),
        );

        assert!(Rc::ptr_eq(&state, &next));
    }
}
