//! Bounded, newest-first record of evaluation snapshots.

use std::collections::VecDeque;
use std::fmt::{Display, Formatter};

use log::debug;

use crate::eval::EvaluationRequest;
use crate::gate::GateKind;
use crate::table::{Bit, Cell};

/// Default number of snapshots kept by a [`HistoryLog`].
pub const HISTORY_CAPACITY: usize = 5;

/// A recorded evaluation.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct HistoryEntry {
    pub gate: GateKind,
    pub a: bool,
    pub b: bool,
    pub result: bool,
    pub timestamp: String,
}

impl HistoryEntry {
    /// Builds an entry from raw parts.
    ///
    /// `result` is stored as given and is not checked against `gate`, `a` and `b`;
    /// use [`HistoryEntry::snapshot`] to record an actual evaluation.
    pub fn new(gate: GateKind, a: bool, b: bool, result: bool, timestamp: impl Into<String>) -> Self {
        Self {
            gate,
            a,
            b,
            result,
            timestamp: timestamp.into(),
        }
    }

    /// Evaluates `request` and records it under `timestamp`.
    pub fn snapshot(request: EvaluationRequest, timestamp: impl Into<String>) -> Self {
        Self::new(request.gate, request.a, request.b, request.eval(), timestamp)
    }
}

impl Display for HistoryEntry {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let b = if self.gate.is_unary() {
            Cell::Unused
        } else {
            Cell::from(self.b)
        };
        write!(
            f,
            "{} {} A:{} B:{} -> {}",
            self.timestamp,
            self.gate,
            Bit::from(self.a),
            b,
            Bit::from(self.result)
        )
    }
}

#[derive(Debug, Clone)]
pub struct HistoryLog {
    /// Newest entry at the front.
    entries: VecDeque<HistoryEntry>,
    capacity: usize,
}

impl Default for HistoryLog {
    fn default() -> Self {
        HistoryLog::with_capacity(HISTORY_CAPACITY)
    }
}

impl HistoryLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty log holding at most `capacity` entries.
    ///
    /// # Panics
    ///
    /// Panics if `capacity == 0`.
    pub fn with_capacity(capacity: usize) -> Self {
        assert!(capacity > 0, "History capacity must be >= 1");
        Self {
            entries: VecDeque::with_capacity(capacity + 1),
            capacity,
        }
    }
}

impl HistoryLog {
    /// Records `entry` as the newest one, dropping the oldest entries beyond capacity.
    pub fn push(&mut self, entry: HistoryEntry) {
        debug!("push(entry = {})", entry);
        self.entries.push_front(entry);
        while self.entries.len() > self.capacity {
            if let Some(evicted) = self.entries.pop_back() {
                debug!("push: evicted {}", evicted);
            }
        }
    }

    /// Entries, newest first.
    pub fn entries(&self) -> impl ExactSizeIterator<Item = &HistoryEntry> + DoubleEndedIterator + '_ {
        self.entries.iter()
    }

    pub fn get(&self, index: usize) -> Option<&HistoryEntry> {
        self.entries.get(index)
    }

    pub fn latest(&self) -> Option<&HistoryEntry> {
        self.entries.front()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn clear(&mut self) {
        debug!("clear() with {} entries", self.entries.len());
        self.entries.clear();
    }
}
