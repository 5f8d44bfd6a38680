use log::debug;

use crate::error::GateError;
use crate::gate::GateKind;

/// Applies `gate` to the inputs `a` and `b`.
///
/// For [`GateKind::Not`] the second input is ignored, whatever its value.
pub fn evaluate(gate: GateKind, a: bool, b: bool) -> bool {
    match gate {
        GateKind::And => a && b,
        GateKind::Or => a || b,
        GateKind::Xor => a != b,
        GateKind::Nand => !(a && b),
        GateKind::Nor => !(a || b),
        GateKind::Not => !a,
    }
}

/// Same as [`evaluate`], but takes the gate by identifier.
///
/// Fails with [`GateError::InvalidGateKind`] for anything outside the six known gates.
pub fn evaluate_named(name: &str, a: bool, b: bool) -> Result<bool, GateError> {
    let gate: GateKind = name.parse()?;
    debug!("evaluate_named(name = {:?}) -> {}", name, gate);
    Ok(evaluate(gate, a, b))
}

/// A single gate application with its inputs.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct EvaluationRequest {
    pub gate: GateKind,
    pub a: bool,
    pub b: bool,
}

// Constructors
impl EvaluationRequest {
    pub const fn new(gate: GateKind, a: bool, b: bool) -> Self {
        Self { gate, a, b }
    }

    /// Request for a unary gate; `b` is fixed to `false`.
    pub const fn unary(gate: GateKind, a: bool) -> Self {
        Self::new(gate, a, false)
    }
}

impl EvaluationRequest {
    pub fn eval(&self) -> bool {
        evaluate(self.gate, self.a, self.b)
    }
}
