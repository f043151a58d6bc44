use std::rc::Rc;

use tipdesk_shared::models::{Container, TechUser};

use super::Action;

/// Property/container slice: the employer's installed tip containers,
/// the technicians servicing them, and the resolved picker address.
///
/// `loading` is true exactly between a `FetchStarted` and the next
/// settling action. Overlapping fetches are fenced at the view layer;
/// the slice itself keeps no request bookkeeping.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PropertiesState {
    pub loading: bool,
    pub containers: Vec<Container>,
    pub error: Option<String>,
    pub tech_users: Vec<TechUser>,
    pub tech_containers: Vec<Container>,
    pub search_terms: Vec<String>,
    /// Reverse-geocoded address for the picked coordinate. The
    /// coordinate itself lives in the map slice only.
    pub map_address: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum PropertiesAction {
    FetchStarted,
    ContainersLoaded(Vec<Container>),
    TechUsersLoaded(Vec<TechUser>),
    TechContainersLoaded(Vec<Container>),
    FetchFailed(String),
    SearchChanged(Vec<String>),
    AddressResolved(String),
}

pub(super) fn reduce(state: Rc<PropertiesState>, action: &Action) -> Rc<PropertiesState> {
    let Action::Properties(action) = action else {
        return state;
    };
    let next = match action {
        PropertiesAction::FetchStarted => PropertiesState {
            loading: true,
            error: None,
            ..(*state).clone()
        },
        PropertiesAction::ContainersLoaded(containers) => PropertiesState {
            loading: false,
            containers: containers.clone(),
            error: None,
            ..(*state).clone()
        },
        PropertiesAction::TechUsersLoaded(users) => PropertiesState {
            loading: false,
            tech_users: users.clone(),
            error: None,
            ..(*state).clone()
        },
        PropertiesAction::TechContainersLoaded(containers) => PropertiesState {
            loading: false,
            tech_containers: containers.clone(),
            error: None,
            ..(*state).clone()
        },
        PropertiesAction::FetchFailed(message) => PropertiesState {
            loading: false,
            error: Some(message.clone()),
            ..(*state).clone()
        },
        PropertiesAction::SearchChanged(terms) => PropertiesState {
            search_terms: terms.clone(),
            ..(*state).clone()
        },
        PropertiesAction::AddressResolved(address) => PropertiesState {
            map_address: address.clone(),
            ..(*state).clone()
        },
    };
    if next == *state { state } else { Rc::new(next) }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::SettingsAction;

    fn container(id: i64) -> Container {
        Container {
            id,
            name: format!("Stand {id}"),
            property: None,
            active: true,
        }
    }

    #[test]
    fn test_loading_spans_start_to_settle() {
        let state = Rc::new(PropertiesState::default());

        let started = reduce(state, &Action::Properties(PropertiesAction::FetchStarted));
        assert!(started.loading);

        let settled = reduce(
            started,
            &Action::Properties(PropertiesAction::ContainersLoaded(vec![container(1)])),
        );
        assert!(!settled.loading);
        assert_eq!(settled.containers.len(), 1);
        assert!(settled.error.is_none());
    }

    #[test]
    fn test_failure_records_message_and_clears_loading() {
        let state = Rc::new(PropertiesState {
            loading: true,
            ..PropertiesState::default()
        });

        let failed = reduce(
            state,
            &Action::Properties(PropertiesAction::FetchFailed("boom".to_string())),
        );

        assert!(!failed.loading);
        assert_eq!(failed.error.as_deref(), Some("boom"));
    }

    #[test]
    fn test_address_resolution_keeps_listings() {
        let state = Rc::new(PropertiesState {
            containers: vec![container(1)],
            ..PropertiesState::default()
        });

        let resolved = reduce(
            state,
            &Action::Properties(PropertiesAction::AddressResolved(
                "Rue de Rivoli, Paris, France".to_string(),
            )),
        );

        assert_eq!(resolved.map_address, "Rue de Rivoli, Paris, France");
        assert_eq!(resolved.containers.len(), 1);
    }

    #[test]
    fn test_tech_containers_land_in_their_own_field() {
        let state = Rc::new(PropertiesState {
            containers: vec![container(1)],
            ..PropertiesState::default()
        });

        let loaded = reduce(
            state,
            &Action::Properties(PropertiesAction::TechContainersLoaded(vec![
                container(2),
                container(3),
            ])),
        );

        assert_eq!(loaded.tech_containers.len(), 2);
        // The employer-wide listing is untouched.
        assert_eq!(loaded.containers.len(), 1);
    }

    #[test]
    fn test_foreign_action_is_identity() {
        let state = Rc::new(PropertiesState::default());
        let next = reduce(
            Rc::clone(&state),
            &Action::Settings(SettingsAction::AutoAssignToggled(true)),
        );

        assert!(Rc::ptr_eq(&state, &next));
    }
}
