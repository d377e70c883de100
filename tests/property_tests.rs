//! Property-based tests for the state machine.
//!
//! These tests use proptest to drive machines through random operation
//! sequences and check that history behaves like two stacks.

use proptest::prelude::*;
use retrace::core::StateId;
use retrace::machine::{FiniteStateMachine, FsmError};
use retrace::machine_config;

const STATES: [&str; 3] = ["idle", "running", "paused"];
const EVENTS: [&str; 5] = ["start", "stop", "pause", "resume", "eject"];

fn player() -> FiniteStateMachine {
    let config = machine_config! {
        initial: idle,
        idle { start => running },
        running { stop => idle, pause => paused },
        paused { resume => running, stop => idle },
    };
    FiniteStateMachine::new(config).unwrap()
}

#[derive(Clone, Debug)]
enum Op {
    Change(&'static str),
    Trigger(&'static str),
    Undo,
    Redo,
}

prop_compose! {
    fn arbitrary_state()(index in 0..STATES.len()) -> &'static str {
        STATES[index]
    }
}

prop_compose! {
    fn arbitrary_event()(index in 0..EVENTS.len()) -> &'static str {
        EVENTS[index]
    }
}

fn arbitrary_op() -> impl Strategy<Value = Op> {
    prop_oneof![
        arbitrary_state().prop_map(Op::Change),
        Just(Op::Change("missing")),
        arbitrary_event().prop_map(Op::Trigger),
        Just(Op::Undo),
        Just(Op::Redo),
    ]
}

/// Apply successful jumps and triggers, returning the states left behind.
fn drive(fsm: &mut FiniteStateMachine, moves: &[Op]) -> Vec<StateId> {
    let mut visited = Vec::new();
    for op in moves {
        let before = fsm.state().clone();
        let result = match op {
            Op::Change(target) => fsm.change_state(target),
            Op::Trigger(event) => fsm.trigger(event),
            Op::Undo | Op::Redo => continue,
        };
        if result.is_ok() {
            visited.push(before);
        }
    }
    visited
}

proptest! {
    #[test]
    fn undo_unwinds_every_change_in_reverse(
        moves in prop::collection::vec(arbitrary_op(), 0..20)
    ) {
        let mut fsm = player();
        let visited = drive(&mut fsm, &moves);

        for expected in visited.iter().rev() {
            prop_assert!(fsm.undo());
            prop_assert_eq!(fsm.state(), expected);
        }

        prop_assert!(!fsm.undo());
        prop_assert_eq!(fsm.state(), "idle");
    }

    #[test]
    fn redo_replays_everything_undone(
        moves in prop::collection::vec(arbitrary_op(), 0..20)
    ) {
        let mut fsm = player();
        drive(&mut fsm, &moves);
        let end = fsm.state().clone();

        let mut undone = 0;
        while fsm.undo() {
            undone += 1;
        }
        for _ in 0..undone {
            prop_assert!(fsm.redo());
        }

        prop_assert!(!fsm.redo());
        prop_assert_eq!(fsm.state(), &end);
    }

    #[test]
    fn failed_operations_change_nothing(
        moves in prop::collection::vec(arbitrary_op(), 0..20),
        event in arbitrary_event(),
    ) {
        let mut fsm = player();
        drive(&mut fsm, &moves);
        let before = fsm.clone();

        if let Err(error) = fsm.trigger(event) {
            let is_invalid_event = matches!(error, FsmError::InvalidEvent { .. });
            prop_assert!(is_invalid_event);
            prop_assert_eq!(fsm.state(), before.state());
            prop_assert_eq!(fsm.history(), before.history());
        }

        let result = fsm.change_state("missing");
        let is_unknown_state = matches!(result, Err(FsmError::UnknownState { .. }));
        prop_assert!(is_unknown_state);
    }

    #[test]
    fn any_change_after_undo_invalidates_redo(
        moves in prop::collection::vec(arbitrary_op(), 1..20),
        target in arbitrary_state(),
    ) {
        let mut fsm = player();
        for op in &moves {
            match op {
                Op::Change(state) => { let _ = fsm.change_state(state); }
                Op::Trigger(event) => { let _ = fsm.trigger(event); }
                Op::Undo => { fsm.undo(); }
                Op::Redo => { fsm.redo(); }
            }
        }

        fsm.undo();
        fsm.change_state(target).unwrap();

        prop_assert!(!fsm.redo());
        prop_assert_eq!(fsm.state(), target);
    }

    #[test]
    fn reset_always_returns_to_initial(
        moves in prop::collection::vec(arbitrary_op(), 0..20)
    ) {
        let mut fsm = player();
        for op in &moves {
            match op {
                Op::Change(state) => { let _ = fsm.change_state(state); }
                Op::Trigger(event) => { let _ = fsm.trigger(event); }
                Op::Undo => { fsm.undo(); }
                Op::Redo => { fsm.redo(); }
            }
        }

        fsm.reset();

        prop_assert_eq!(fsm.state(), "idle");
        prop_assert!(!fsm.undo());
        prop_assert!(!fsm.redo());
    }

    #[test]
    fn states_for_event_match_transition_tables(event in arbitrary_event()) {
        let fsm = player();
        let expected: Vec<&StateId> = fsm
            .config()
            .states
            .iter()
            .filter(|(_, definition)| definition.transitions.contains_key(event))
            .map(|(id, _)| id)
            .collect();

        prop_assert_eq!(fsm.states(Some(event)), expected);
    }
}

#[test]
fn states_without_event_lists_each_state_once() {
    let fsm = player();
    assert_eq!(fsm.states(None), STATES.to_vec());
}

#[test]
fn eject_is_not_handled_anywhere() {
    let fsm = player();
    assert!(fsm.states(Some("eject")).is_empty());
}
