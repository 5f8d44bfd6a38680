use log::debug;

use crate::eval::EvaluationRequest;
use crate::gate::GateKind;
use crate::history::{HistoryEntry, HistoryLog};

/// Session state of the interactive simulator: two input signals, the selected gate,
/// and the snapshot history.
///
/// Input B keeps its value while NOT is selected and is still passed to the evaluator;
/// NOT never reads it.
#[derive(Debug, Clone)]
pub struct Simulator {
    gate: GateKind,
    a: bool,
    b: bool,
    history: HistoryLog,
}

impl Default for Simulator {
    fn default() -> Self {
        Self::with_history(HistoryLog::default())
    }
}

// Constructors
impl Simulator {
    /// Both inputs low, AND selected.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_history_capacity(capacity: usize) -> Self {
        Self::with_history(HistoryLog::with_capacity(capacity))
    }

    fn with_history(history: HistoryLog) -> Self {
        Self {
            gate: GateKind::And,
            a: false,
            b: false,
            history,
        }
    }
}

// Getters
impl Simulator {
    pub fn gate(&self) -> GateKind {
        self.gate
    }

    pub fn input_a(&self) -> bool {
        self.a
    }

    pub fn input_b(&self) -> bool {
        self.b
    }

    /// Whether input B is read by the selected gate.
    pub fn input_b_enabled(&self) -> bool {
        !self.gate.is_unary()
    }

    pub fn request(&self) -> EvaluationRequest {
        EvaluationRequest::new(self.gate, self.a, self.b)
    }

    /// Live output of the selected gate.
    pub fn output(&self) -> bool {
        self.request().eval()
    }

    pub fn history(&self) -> &HistoryLog {
        &self.history
    }
}

// Setters
impl Simulator {
    pub fn select_gate(&mut self, gate: GateKind) {
        debug!("select_gate({})", gate);
        self.gate = gate;
    }

    pub fn set_input_a(&mut self, value: bool) {
        self.a = value;
    }

    pub fn set_input_b(&mut self, value: bool) {
        self.b = value;
    }

    pub fn toggle_input_a(&mut self) {
        self.a = !self.a;
    }

    pub fn toggle_input_b(&mut self) {
        self.b = !self.b;
    }
}

impl Simulator {
    /// Records the current evaluation in the history and returns the output.
    pub fn snapshot(&mut self, timestamp: impl Into<String>) -> bool {
        let entry = HistoryEntry::snapshot(self.request(), timestamp);
        let result = entry.result;
        self.history.push(entry);
        result
    }

    pub fn clear_history(&mut self) {
        self.history.clear();
    }
}
