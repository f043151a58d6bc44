use std::rc::Rc;

use super::Action;

/// A point on the map. The map slice is the single owner of the
/// picked coordinate; other domains read it through selectors.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MapCoordinate {
    pub lat: f64,
    pub lng: f64,
}

impl Default for MapCoordinate {
    // Paris city centre, where the pilot properties are.
    fn default() -> Self {
        Self {
            lat: 48.8566,
            lng: 2.3522,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct MapState {
    pub coordinate: MapCoordinate,
}

#[derive(Debug, Clone, PartialEq)]
pub enum MapAction {
    /// The picker marker moved.
    Moved(MapCoordinate),
}

pub(super) fn reduce(state: Rc<MapState>, action: &Action) -> Rc<MapState> {
    let Action::Map(action) = action else {
        return state;
    };
    match action {
        MapAction::Moved(coordinate) => {
            if state.coordinate == *coordinate {
                state
            } else {
                Rc::new(MapState {
                    coordinate: *coordinate,
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
    fn test_move_updates_coordinate() {
        let state = Rc::new(MapState::default());
        let moved = reduce(
            state,
            &Action::Map(MapAction::Moved(MapCoordinate {
                lat: 45.764,
                lng: 4.8357,
            })),
        );

        assert_eq!(moved.coordinate.lat, 45.764);
        assert_eq!(moved.coordinate.lng, 4.8357);
    }

    #[test]
    fn test_move_to_same_coordinate_is_identity() {
        let state = Rc::new(MapState::default());
        let moved = reduce(
            Rc::clone(&state),
            &Action::Map(MapAction::Moved(MapCoordinate::default())),
        );

        assert!(Rc::ptr_eq(&state, &moved));
    }

    #[test]
    fn test_foreign_action_is_identity() {
        let state = Rc::new(MapState::default());
        let next = reduce(Rc::clone(&state), &Action::Auth(AuthAction::SessionExpired));

        assert!(Rc::ptr_eq(&state, &next));
    }
}
