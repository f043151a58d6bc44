use std::rc::Rc;

use super::Action;

/// Employer-level settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SettingsState {
    /// Route new deliveries to technicians automatically.
    pub auto_assign_delivery: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingsAction {
    AutoAssignToggled(bool),
}

pub(super) fn reduce(state: Rc<SettingsState>, action: &Action) -> Rc<SettingsState> {
    let Action::Settings(action) = action else {
        return state;
    };
    match *action {
        SettingsAction::AutoAssignToggled(enabled) => {
            if state.auto_assign_delivery == enabled {
                state
            } else {
                Rc::new(SettingsState {
                    auto_assign_delivery: enabled,
                })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::AuthAction;

    #[test]
    fn test_toggle() {
        let state = Rc::new(SettingsState::default());
        let enabled = reduce(
            state,
            &Action::Settings(SettingsAction::AutoAssignToggled(true)),
        );

        assert!(enabled.auto_assign_delivery);
    }

    #[test]
    fn test_toggle_to_same_value_is_identity() {
        let state = Rc::new(SettingsState::default());
        let next = reduce(
            Rc::clone(&state),
            &Action::Settings(SettingsAction::AutoAssignToggled(false)),
        );

        assert!(Rc::ptr_eq(&state, &next));
    }

    #[test]
    fn test_foreign_action_is_identity() {
        let state = Rc::new(SettingsState::default());
        let next = reduce(Rc::clone(&state), &Action::Auth(AuthAction::SessionExpired));

        assert!(Rc::ptr_eq(&state, &next));
    }
}
