//! Tests for utility state selection.

#[cfg(test)]
mod tests {
    use super::super::utility::*;
    use crate::ai::{BehaviorKind, BehaviorState};

    #[test]
    fn test_highest_score_wins() {
        assert_eq!(select_state(&[10.0, 20.0, 5.0]), Some(1));
        assert_eq!(select_state(&[10.0, 0.0, 0.0]), Some(0));
    }

    #[test]
    fn test_nothing_viable_keeps_current() {
        assert_eq!(select_state(&[0.0, 0.0, 0.0]), None);
        assert_eq!(select_state(&[-5.0, -1.0, -20.0]), None);
        assert_eq!(select_state(&[]), None);
    }

    #[test]
    fn test_tie_goes_to_first_in_roster() {
        assert_eq!(select_state(&[5.0, 20.0, 20.0]), Some(1));
        assert_eq!(select_state(&[7.0, 7.0, 7.0]), Some(0));
    }

    #[test]
    fn test_unavailable_sentinel_never_wins() {
        assert_eq!(select_state(&[UNAVAILABLE_SCORE, 3.0]), Some(1));
        assert_eq!(select_state(&[UNAVAILABLE_SCORE; 3]), None);
    }

    #[test]
    fn test_default_roster() {
        let machine = UtilityStateMachine::default();

        let kinds: Vec<BehaviorKind> = machine.roster().iter().map(BehaviorState::kind).collect();
        assert_eq!(
            kinds,
            vec![BehaviorKind::Patrol, BehaviorKind::Chase, BehaviorKind::Flee]
        );
        assert_eq!(machine.current_kind(), Some(BehaviorKind::Patrol));
        assert_eq!(machine.previous_kind(), None);
    }

    #[test]
    fn test_empty_roster_rejected() {
        assert!(UtilityStateMachine::with_roster(Vec::new()).is_none());

        let machine = UtilityStateMachine::with_roster(vec![BehaviorState::Flee])
            .expect("non-empty roster");
        assert_eq!(machine.current_kind(), Some(BehaviorKind::Flee));
    }
}
