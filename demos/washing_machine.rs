//! Washing Machine
//!
//! This example drives a small washing machine through its buttons.
//!
//! Key concepts:
//! - States share a data pack that is copied on every transition
//! - `before_leave`/`after_enter` hooks adjust the data around a move
//! - Validators veto data the incoming state cannot accept
//! - Every (button, state) pair is declared, including the ones that do nothing
//!
//! Run with: cargo run --example washing_machine

use handover::core::{State, Target};
use handover::engine::StateMachine;
use handover::state_data;
use std::process::ExitCode;

#[derive(Clone, Default, Debug)]
struct WashingData {
    water_in_drum: bool,
}

const IDLE: &str = "IDLE";
const WASHING: &str = "WASHING";
const DRYING: &str = "DRYING";

#[derive(Default)]
struct Idle {
    data: WashingData,
}

impl State<WashingData> for Idle {
    state_data!(data: WashingData);

    fn describe(&self) -> &str {
        IDLE
    }

    fn validate(&self, candidate: &WashingData) -> bool {
        !candidate.water_in_drum
    }
}

struct Washing {
    data: WashingData,
    cycles: u32,
}

impl Washing {
    fn new(cycles: u32) -> Self {
        Self {
            data: WashingData::default(),
            cycles,
        }
    }
}

impl State<WashingData> for Washing {
    state_data!(data: WashingData);

    fn describe(&self) -> &str {
        WASHING
    }

    fn before_leave(&mut self) {
        // drain before the next state sees the data
        self.data.water_in_drum = false;
    }

    fn after_enter(&mut self) {
        self.data.water_in_drum = true;
        println!("  filling drum for {} cycle(s)", self.cycles);
    }
}

#[derive(Default)]
struct Drying {
    data: WashingData,
}

impl State<WashingData> for Drying {
    state_data!(data: WashingData);

    fn describe(&self) -> &str {
        DRYING
    }

    fn validate(&self, candidate: &WashingData) -> bool {
        !candidate.water_in_drum
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
enum WashingAction {
    WashPressed,
    DryPressed,
    FinishPressed,
}

fn main() -> ExitCode {
    println!("=== Washing Machine Example ===\n");

    let mut machine = StateMachine::<WashingAction, WashingData>::new();

    let registered = [
        machine.register_default::<Idle>(IDLE),
        machine.register_with(WASHING, || Washing::new(2)),
        machine.register_default::<Drying>(DRYING),
    ];
    if let Some(Err(e)) = registered.into_iter().find(Result::is_err) {
        eprintln!("{e}");
        return ExitCode::FAILURE;
    }

    use WashingAction::*;
    machine.add_transition(WashPressed, IDLE, WASHING);
    machine.add_transition(WashPressed, WASHING, Target::No);
    machine.add_transition(WashPressed, DRYING, Target::No);

    machine.add_transition(DryPressed, IDLE, DRYING);
    machine.add_transition(DryPressed, WASHING, Target::No);
    machine.add_transition(DryPressed, DRYING, Target::No);

    machine.add_transition(FinishPressed, IDLE, Target::No);
    machine.add_transition(FinishPressed, WASHING, IDLE);
    machine.add_transition(FinishPressed, DRYING, IDLE);

    if let Err(e) = machine.set_starting_state(IDLE) {
        eprintln!("{e}");
        return ExitCode::FAILURE;
    }

    println!("Audit passed: {}", machine.audit().is_success());
    if let Ok(state) = machine.get_current_state() {
        println!("Starting in state: {}", state.describe());
    }

    let presses = [WashPressed, FinishPressed, DryPressed, FinishPressed];
    for action in &presses {
        match machine.handle_action(action) {
            Ok(moved) => {
                let name = machine.current_state_name().unwrap_or("?");
                println!("{action:?} -> {name} (moved: {moved})");
            }
            Err(e) => {
                eprintln!("{e}");
                return ExitCode::FAILURE;
            }
        }
    }

    println!("\n=== Example Complete ===");
    ExitCode::SUCCESS
}
