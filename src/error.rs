use std::fmt::{Display, Formatter};

/// Error type for gate lookups.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum GateError {
    /// Gate identifier outside of AND, OR, XOR, NAND, NOR, NOT.
    InvalidGateKind(String),
}

impl Display for GateError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            GateError::InvalidGateKind(name) => write!(f, "Invalid gate kind: {:?}", name),
        }
    }
}

impl std::error::Error for GateError {}
