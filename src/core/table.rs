//! Append-only transition table.

use super::state::Action;
use super::transition::{Target, TransitionRecord};
use std::collections::HashMap;

/// Mapping from action to the ordered list of `(from, to)` declarations.
///
/// Declaration order is preserved within a bucket; lookups take the first
/// record matching the source state, so later duplicates are unreachable.
#[derive(Clone, Debug)]
pub struct TransitionTable<A: Action> {
    buckets: HashMap<A, Vec<TransitionRecord>>,
}

impl<A: Action> Default for TransitionTable<A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A: Action> TransitionTable<A> {
    /// Create an empty table.
    pub fn new() -> Self {
        Self {
            buckets: HashMap::new(),
        }
    }

    /// Append a record under `action`'s bucket.
    ///
    /// Names are not checked against any registry here.
    pub fn add(&mut self, action: A, from: impl Into<String>, to: impl Into<Target>) {
        self.buckets
            .entry(action)
            .or_default()
            .push(TransitionRecord::new(from, to));
    }

    /// All records declared for `action`, in declaration order.
    ///
    /// Returns `None` when the action is unknown to the table.
    pub fn bucket(&self, action: &A) -> Option<&[TransitionRecord]> {
        self.buckets
            .get(action)
            .map(Vec::as_slice)
            .filter(|records| !records.is_empty())
    }

    /// First record for `action` whose source is `from`.
    pub fn lookup(&self, action: &A, from: &str) -> Option<&TransitionRecord> {
        self.bucket(action)?
            .iter()
            .find(|record| record.from == from)
    }

    /// Total number of records across all actions.
    pub fn len(&self) -> usize {
        self.buckets.values().map(Vec::len).sum()
    }

    /// Whether nothing has been declared.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Actions that have at least one record.
    pub fn actions(&self) -> impl Iterator<Item = &A> {
        self.buckets
            .iter()
            .filter(|(_, records)| !records.is_empty())
            .map(|(action, _)| action)
    }

    /// Every `(action, record)` pair. Bucket order is unspecified; records
    /// within a bucket keep declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&A, &TransitionRecord)> {
        self.buckets
            .iter()
            .flat_map(|(action, records)| records.iter().map(move |record| (action, record)))
    }
}
