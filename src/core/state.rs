//! Core State trait for state machine states.
//!
//! A state is a behavioral unit the machine drives: it owns its own copy of
//! the machine's data pack and exposes hooks that run around transitions.
//! No transition logic lives here.

use std::fmt::Debug;
use std::hash::Hash;

/// Payload shared across all states of one machine.
///
/// The data pack is copied on every transition, never aliased. Each state
/// holds its own independent value.
pub trait DataPack: Clone + Default + Debug + 'static {}

impl<T> DataPack for T where T: Clone + Default + Debug + 'static {}

/// Caller-defined symbol that may trigger a transition.
///
/// `Debug` is used to render the action in errors and log events.
pub trait Action: Eq + Hash + Clone + Debug {}

impl<T> Action for T where T: Eq + Hash + Clone + Debug {}

/// Trait for state machine states.
///
/// Implementers supply a description and storage for the data pack (see
/// [`state_data!`](crate::state_data)); validation and hooks default to
/// accepting everything and doing nothing.
///
/// # Hook order
///
/// For a committed transition `from -> to` the machine calls, in order:
///
/// 1. `from.before_leave()`
/// 2. `to.validate(&from.get_data())`
/// 3. `to.set_data(..)`, then `to.after_enter()`
///
/// # Example
///
/// ```rust
/// use handover::core::State;
/// use handover::state_data;
///
/// #[derive(Clone, Default, Debug)]
/// struct Drum {
///     water: bool,
/// }
///
/// #[derive(Default)]
/// struct Drying {
///     data: Drum,
/// }
///
/// impl State<Drum> for Drying {
///     state_data!(data: Drum);
///
///     fn describe(&self) -> &str {
///         "DRYING"
///     }
///
///     fn validate(&self, candidate: &Drum) -> bool {
///         !candidate.water
///     }
/// }
///
/// let drying = Drying::default();
/// assert!(drying.validate(&Drum { water: false }));
/// assert!(!drying.validate(&Drum { water: true }));
/// ```
pub trait State<D: DataPack> {
    /// Human-readable identity used for diagnostics.
    ///
    /// This is not a lookup key; states are addressed by the name they were
    /// registered under.
    fn describe(&self) -> &str;

    /// Borrow the data pack this state currently holds.
    fn data(&self) -> &D;

    /// Mutably borrow the data pack this state currently holds.
    fn data_mut(&mut self) -> &mut D;

    /// Copy of the held data pack.
    fn get_data(&self) -> D {
        self.data().clone()
    }

    /// Replace the held data pack.
    fn set_data(&mut self, data: D) {
        *self.data_mut() = data;
    }

    /// Decide whether `candidate` is acceptable data for entering this state.
    ///
    /// Called on the incoming state with the outgoing state's data. Must be
    /// a pure predicate. Returning `false` aborts the transition.
    fn validate(&self, candidate: &D) -> bool {
        let _ = candidate;
        true
    }

    /// Runs on the outgoing state right before its data is captured.
    ///
    /// Typical use is a last-moment `set_data` to hand context to the next
    /// state.
    fn before_leave(&mut self) {}

    /// Runs on the incoming state after it became current and received the
    /// outgoing data.
    fn after_enter(&mut self) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state_data;

    #[derive(Clone, Default, Debug, PartialEq)]
    struct Counter {
        value: u32,
    }

    #[derive(Default)]
    struct Plain {
        data: Counter,
    }

    impl State<Counter> for Plain {
        state_data!(data: Counter);

        fn describe(&self) -> &str {
            "Plain"
        }
    }

    #[derive(Default)]
    struct Picky {
        data: Counter,
        left: usize,
    }

    impl State<Counter> for Picky {
        state_data!(data: Counter);

        fn describe(&self) -> &str {
            "Picky"
        }

        fn validate(&self, candidate: &Counter) -> bool {
            candidate.value % 2 == 0
        }

        fn before_leave(&mut self) {
            self.left += 1;
            self.data.value += 10;
        }
    }

    #[test]
    fn default_validate_accepts_anything() {
        let state = Plain::default();
        assert!(state.validate(&Counter { value: 7 }));
        assert!(state.validate(&Counter::default()));
    }

    #[test]
    fn get_data_returns_independent_copy() {
        let mut state = Plain::default();
        let mut copy = state.get_data();
        copy.value = 42;

        assert_eq!(state.data().value, 0);

        state.set_data(copy.clone());
        assert_eq!(state.get_data(), copy);
    }

    #[test]
    fn default_hooks_leave_data_untouched() {
        let mut state = Plain::default();
        state.set_data(Counter { value: 3 });
        state.before_leave();
        state.after_enter();
        assert_eq!(state.data().value, 3);
    }

    #[test]
    fn overridden_hooks_and_validator_apply() {
        let mut state = Picky::default();
        assert!(state.validate(&Counter { value: 4 }));
        assert!(!state.validate(&Counter { value: 5 }));

        state.before_leave();
        assert_eq!(state.left, 1);
        assert_eq!(state.get_data().value, 10);
    }

    #[test]
    fn describe_is_stable() {
        let state = Picky::default();
        assert_eq!(state.describe(), state.describe());
        assert_eq!(state.describe(), "Picky");
    }
}
