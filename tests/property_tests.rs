//! Property-based tests for the transition engine.
//!
//! These tests use proptest to verify properties hold across
//! many randomly generated action sequences and tables.

use handover::core::{State, Target};
use handover::engine::StateMachine;
use handover::{state_data, MachineError};
use proptest::prelude::*;
use std::cell::RefCell;
use std::rc::Rc;

#[derive(Clone, Default, Debug, PartialEq)]
struct Tally {
    entries: u32,
}

type Hooks = Rc<RefCell<Vec<String>>>;

struct Counting {
    label: String,
    data: Tally,
    hooks: Hooks,
}

impl State<Tally> for Counting {
    state_data!(data: Tally);

    fn describe(&self) -> &str {
        &self.label
    }

    fn validate(&self, _candidate: &Tally) -> bool {
        self.hooks.borrow_mut().push(format!("{}.validate", self.label));
        true
    }

    fn before_leave(&mut self) {
        self.hooks.borrow_mut().push(format!("{}.before_leave", self.label));
    }

    fn after_enter(&mut self) {
        self.data.entries += 1;
        self.hooks.borrow_mut().push(format!("{}.after_enter", self.label));
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
enum Signal {
    Advance,
    Hold,
}

const NAMES: [&str; 4] = ["S0", "S1", "S2", "S3"];

fn ring(hooks: &Hooks) -> StateMachine<Signal, Tally> {
    let mut machine = StateMachine::new();
    for name in NAMES {
        machine
            .register_state(
                name,
                Counting {
                    label: name.to_string(),
                    data: Tally::default(),
                    hooks: Rc::clone(hooks),
                },
            )
            .unwrap();
    }
    for (i, name) in NAMES.iter().enumerate() {
        machine.add_transition(Signal::Advance, *name, NAMES[(i + 1) % NAMES.len()]);
        if i % 2 == 0 {
            machine.add_transition(Signal::Hold, *name, Target::No);
        } else {
            machine.add_transition(Signal::Hold, *name, *name);
        }
    }
    machine
}

prop_compose! {
    fn arbitrary_signal()(advance in any::<bool>()) -> Signal {
        if advance { Signal::Advance } else { Signal::Hold }
    }
}

proptest! {
    #[test]
    fn not_ready_before_start(signals in prop::collection::vec(arbitrary_signal(), 1..10)) {
        let hooks = Hooks::default();
        let mut machine = ring(&hooks);
        for signal in &signals {
            prop_assert_eq!(machine.handle_action(signal), Err(MachineError::NotReady));
        }
        prop_assert!(hooks.borrow().is_empty());
    }

    #[test]
    fn position_tracks_advance_count(
        start in 0..4usize,
        signals in prop::collection::vec(arbitrary_signal(), 0..40)
    ) {
        let hooks = Hooks::default();
        let mut machine = ring(&hooks);
        machine.set_starting_state(NAMES[start]).unwrap();

        let mut expected = start;
        for signal in &signals {
            let moved = machine.handle_action(signal).unwrap();
            prop_assert_eq!(moved, *signal == Signal::Advance);
            if moved {
                expected = (expected + 1) % NAMES.len();
            }
            prop_assert_eq!(machine.current_state_name().unwrap(), NAMES[expected]);
        }
    }

    #[test]
    fn no_ops_never_touch_state_or_hooks(start in 0..4usize, repeats in 1..50usize) {
        let hooks = Hooks::default();
        let mut machine = ring(&hooks);
        machine.set_starting_state(NAMES[start]).unwrap();
        let before = machine.get_current_state().unwrap().get_data();

        for _ in 0..repeats {
            prop_assert_eq!(machine.handle_action(&Signal::Hold), Ok(false));
        }

        prop_assert_eq!(machine.current_state_name().unwrap(), NAMES[start]);
        prop_assert_eq!(machine.get_current_state().unwrap().get_data(), before);
        prop_assert!(hooks.borrow().is_empty());
    }

    #[test]
    fn every_move_runs_three_hooks_in_order(advances in 1..20usize) {
        let hooks = Hooks::default();
        let mut machine = ring(&hooks);
        machine.set_starting_state("S0").unwrap();

        for step in 0..advances {
            hooks.borrow_mut().clear();
            machine.handle_action(&Signal::Advance).unwrap();

            let from = NAMES[step % NAMES.len()];
            let to = NAMES[(step + 1) % NAMES.len()];
            let expected = vec![
                format!("{from}.before_leave"),
                format!("{to}.validate"),
                format!("{to}.after_enter"),
            ];
            prop_assert_eq!(&*hooks.borrow(), &expected);
        }
    }

    #[test]
    fn data_pack_is_carried_across_moves(advances in 0..30u32) {
        let hooks = Hooks::default();
        let mut machine = ring(&hooks);
        machine.set_starting_state("S0").unwrap();

        for _ in 0..advances {
            machine.handle_action(&Signal::Advance).unwrap();
        }

        let data = machine.get_current_state().unwrap().get_data();
        prop_assert_eq!(data.entries, advances);
    }

    #[test]
    fn first_declaration_always_wins(extra in prop::collection::vec(0..4usize, 1..6)) {
        let hooks = Hooks::default();
        let mut machine = ring(&hooks);
        for target in extra {
            machine.add_transition(Signal::Advance, "S0", NAMES[target]);
        }
        machine.set_starting_state("S0").unwrap();

        machine.handle_action(&Signal::Advance).unwrap();
        prop_assert_eq!(machine.current_state_name().unwrap(), "S1");
    }
}
