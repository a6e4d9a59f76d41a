//! Eager inspection of a machine's transition table.
//!
//! Handling resolves state names lazily, so a misconfigured table only
//! fails when the affected action arrives. [`StateMachine::audit`] walks the
//! whole table up front and uses Stillwater's `Validation` to report every
//! issue in one pass instead of stopping at the first.
//!
//! # Example
//!
//! ```rust
//! use handover::audit::TableIssue;
//! use handover::core::{State, Target};
//! use handover::engine::StateMachine;
//! use handover::state_data;
//! use stillwater::validation::Validation;
//!
//! #[derive(Clone, Default, Debug)]
//! struct Empty;
//!
//! #[derive(Default)]
//! struct Plain {
//!     data: Empty,
//! }
//!
//! impl State<Empty> for Plain {
//!     state_data!(data: Empty);
//!     fn describe(&self) -> &str { "Plain" }
//! }
//!
//! #[derive(Clone, Debug, PartialEq, Eq, Hash)]
//! enum Go { On }
//!
//! let mut machine = StateMachine::<Go, Empty>::new();
//! machine.register_default::<Plain>("A").unwrap();
//! machine.add_transition(Go::On, "A", "Missing");
//!
//! match machine.audit() {
//!     Validation::Failure(issues) => {
//!         assert!(issues.iter().any(|i| matches!(i, TableIssue::UnknownTarget { .. })));
//!     }
//!     Validation::Success(_) => panic!("expected issues"),
//! }
//! ```

mod issues;

pub use issues::TableIssue;

use crate::core::{Action, DataPack, Target};
use crate::engine::StateMachine;
use std::collections::HashSet;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;
use tracing::debug;

/// Outcome of an audit: success, or every issue found.
pub type AuditResult = Validation<(), NonEmptyVec<TableIssue>>;

impl<A: Action, D: DataPack> StateMachine<A, D> {
    /// Check the transition table against the registry.
    ///
    /// Reports declarations from or to unregistered states, declarations
    /// shadowed by an earlier one for the same `(action, from)`, and
    /// registered states with no declaration for an action the table knows.
    pub fn audit(&self) -> AuditResult {
        let registry = self.registry();
        let table = self.table();
        let mut checks: Vec<AuditResult> = Vec::new();

        for action in table.actions() {
            let action_name = format!("{action:?}");
            let mut declared = HashSet::new();

            for record in table.bucket(action).unwrap_or_default() {
                if !declared.insert(record.from.as_str()) {
                    checks.push(Validation::fail(TableIssue::ShadowedDeclaration {
                        action: action_name.clone(),
                        from: record.from.clone(),
                    }));
                    continue;
                }

                if !registry.contains(&record.from) {
                    checks.push(Validation::fail(TableIssue::UnknownSource {
                        action: action_name.clone(),
                        from: record.from.clone(),
                    }));
                }

                if let Target::State(to) = &record.to {
                    if !registry.contains(to) {
                        checks.push(Validation::fail(TableIssue::UnknownTarget {
                            action: action_name.clone(),
                            from: record.from.clone(),
                            to: to.clone(),
                        }));
                    }
                }
            }

            for state in registry.names() {
                if !declared.contains(state) {
                    checks.push(Validation::fail(TableIssue::MissingDeclaration {
                        action: action_name.clone(),
                        state: state.to_string(),
                    }));
                }
            }
        }

        debug!(machine = %self.config().label, issues = checks.len(), "audited transition table");
        Validation::all_vec(checks).map(|_| ())
    }
}
