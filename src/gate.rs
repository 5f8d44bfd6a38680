use std::fmt::{Display, Formatter};
use std::str::FromStr;

use crate::error::GateError;

/// One of the six primitive gates.
///
/// `Not` is the only unary gate; all others take two inputs.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum GateKind {
    And,
    Or,
    Xor,
    Nand,
    Nor,
    Not,
}

impl GateKind {
    /// All gates, in the order they are presented to the user.
    pub const ALL: [GateKind; 6] = [
        GateKind::And,
        GateKind::Or,
        GateKind::Xor,
        GateKind::Nand,
        GateKind::Nor,
        GateKind::Not,
    ];
}

// Getters
impl GateKind {
    /// Number of inputs the gate reads.
    pub const fn arity(self) -> usize {
        match self {
            GateKind::Not => 1,
            _ => 2,
        }
    }

    pub const fn is_unary(self) -> bool {
        self.arity() == 1
    }

    /// Canonical upper-case identifier, e.g. `"NAND"`.
    pub const fn name(self) -> &'static str {
        match self {
            GateKind::And => "AND",
            GateKind::Or => "OR",
            GateKind::Xor => "XOR",
            GateKind::Nand => "NAND",
            GateKind::Nor => "NOR",
            GateKind::Not => "NOT",
        }
    }

    /// Operation blurb shown alongside the live simulator.
    pub const fn summary(self) -> &'static str {
        match self {
            GateKind::And => "The output is HIGH (1) only if both the first and second inputs are HIGH (1).",
            GateKind::Or => "The output is HIGH (1) if either the first input or the second input is HIGH (1).",
            GateKind::Xor => "The output is HIGH (1) if the inputs are different, and LOW (0) if they are the same.",
            GateKind::Nand => "A NOT-AND operation. The output is LOW (0) only if both inputs are HIGH (1).",
            GateKind::Nor => "A NOT-OR operation. The output is HIGH (1) only if both inputs are LOW (0).",
            GateKind::Not => "The output is the opposite of the input. Also known as an Inverter.",
        }
    }
}

impl FromStr for GateKind {
    type Err = GateError;

    /// Parses a gate identifier, ignoring ASCII case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        GateKind::ALL
            .into_iter()
            .find(|gate| gate.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| GateError::InvalidGateKind(s.to_string()))
    }
}

impl Display for GateKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Presentation label for a signal level.
pub const fn signal_label(value: bool) -> &'static str {
    if value {
        "SIGNAL_HIGH"
    } else {
        "SIGNAL_LOW"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use test_log::test;

    #[test]
    fn test_arity() {
        for gate in GateKind::ALL {
            if gate == GateKind::Not {
                assert_eq!(gate.arity(), 1);
                assert!(gate.is_unary());
            } else {
                assert_eq!(gate.arity(), 2);
                assert!(!gate.is_unary());
            }
        }
    }

    #[test]
    fn test_parse_names() {
        for gate in GateKind::ALL {
            assert_eq!(gate.name().parse::<GateKind>(), Ok(gate));
            assert_eq!(gate.to_string(), gate.name());
        }
        assert_eq!("nand".parse::<GateKind>(), Ok(GateKind::Nand));
        assert_eq!("Xor".parse::<GateKind>(), Ok(GateKind::Xor));
    }

    #[test]
    fn test_parse_invalid() {
        assert_eq!(
            "XNOR".parse::<GateKind>(),
            Err(GateError::InvalidGateKind("XNOR".to_string()))
        );
        assert!("".parse::<GateKind>().is_err());
        assert!(" AND".parse::<GateKind>().is_err());
    }

    #[test]
    fn test_signal_label() {
        assert_eq!(signal_label(true), "SIGNAL_HIGH");
        assert_eq!(signal_label(false), "SIGNAL_LOW");
    }
}
