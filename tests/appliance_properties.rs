//! Property tests for the appliance state model over arbitrary command sequences.

use microwave_simulator::{ApplianceState, Command, Phase};
use proptest::prelude::*;

fn any_command() -> impl Strategy<Value = Command> {
    prop_oneof![
        Just(Command::OpenDoor),
        Just(Command::CloseDoor),
        Just(Command::StartCooking),
        Just(Command::StopCooking),
    ]
}

/// Reach an arbitrary state by replaying a random command history.
fn any_state() -> impl Strategy<Value = ApplianceState> {
    proptest::collection::vec(any_command(), 0..16).prop_map(|history| {
        let mut state = ApplianceState::new();
        for command in history {
            state.apply(command);
        }
        state
    })
}

proptest! {
    #[test]
    fn open_door_always_opens(start in any_state()) {
        let mut state = start;
        state.open_door();
        prop_assert!(state.door_open());
        prop_assert_eq!(state.is_cooking(), start.is_cooking());
    }

    #[test]
    fn close_door_always_closes(start in any_state()) {
        let mut state = start;
        state.close_door();
        prop_assert!(!state.door_open());
        prop_assert_eq!(state.is_cooking(), start.is_cooking());
    }

    #[test]
    fn stop_cooking_always_stops(start in any_state()) {
        let mut state = start;
        state.stop_cooking();
        prop_assert!(!state.is_cooking());
        prop_assert_eq!(state.door_open(), start.door_open());
    }

    #[test]
    fn start_cooking_depends_only_on_door(start in any_state()) {
        let mut state = start;
        state.start_cooking();
        if start.door_open() {
            prop_assert_eq!(state, start);
        } else {
            prop_assert!(state.is_cooking());
            prop_assert!(!state.door_open());
        }
    }

    #[test]
    fn every_command_is_idempotent(start in any_state(), command in any_command()) {
        let mut once = start;
        once.apply(command);
        let mut twice = once;
        twice.apply(command);
        prop_assert_eq!(once, twice);
    }

    /// Cooking with the door open is only reachable by opening the door mid-cook.
    #[test]
    fn cooking_open_requires_open_after_start(history in proptest::collection::vec(any_command(), 1..24)) {
        let (&last, earlier) = history.split_last().unwrap();
        let mut previous = ApplianceState::new();
        for &command in earlier {
            previous.apply(command);
        }
        let mut state = previous;
        state.apply(last);

        if state.phase() == Phase::CookingOpen {
            let cooking_before = previous.is_cooking();
            prop_assert!(
                (last == Command::OpenDoor && cooking_before) || previous.phase() == Phase::CookingOpen,
                "reached cooking+open via {:?} from {:?}", last, previous.phase()
            );
        }
    }
}

#[test]
fn scenario_open_start_close_stays_idle() {
    let mut state = ApplianceState::new();
    state.open_door();
    state.start_cooking();
    state.close_door();
    assert!(!state.door_open());
    assert!(!state.is_cooking());
}

#[test]
fn scenario_close_start_cooks() {
    let mut state = ApplianceState::new();
    state.close_door();
    state.start_cooking();
    assert!(!state.door_open());
    assert!(state.is_cooking());
}

#[test]
fn scenario_close_start_open_keeps_cooking() {
    let mut state = ApplianceState::new();
    state.close_door();
    state.start_cooking();
    state.open_door();
    assert!(state.door_open());
    assert!(state.is_cooking());
}
