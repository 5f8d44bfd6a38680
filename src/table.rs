//! Reference truth tables for the primitive gates.
//!
//! Binary gates enumerate `(a, b)` in the order `(0,0), (0,1), (1,0), (1,1)`.
//! The unary NOT gate enumerates `a = 0, 1` and marks the unused second column with `-`.

use std::fmt::{Display, Formatter};

use log::debug;

use crate::error::GateError;
use crate::eval::evaluate;
use crate::gate::GateKind;

/// A binary digit in a truth table.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Bit {
    Zero,
    One,
}

impl Bit {
    pub const fn value(self) -> bool {
        matches!(self, Bit::One)
    }
}

impl From<bool> for Bit {
    fn from(b: bool) -> Self {
        if b {
            Bit::One
        } else {
            Bit::Zero
        }
    }
}

impl From<Bit> for bool {
    fn from(bit: Bit) -> Self {
        bit.value()
    }
}

impl Display for Bit {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Bit::Zero => write!(f, "0"),
            Bit::One => write!(f, "1"),
        }
    }
}

/// Content of an input column: a digit, or nothing for an input the gate does not read.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Cell {
    Bit(Bit),
    Unused,
}

impl From<bool> for Cell {
    fn from(b: bool) -> Self {
        Cell::Bit(Bit::from(b))
    }
}

impl Display for Cell {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Cell::Bit(bit) => Display::fmt(bit, f),
            Cell::Unused => write!(f, "-"),
        }
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct TruthTableRow {
    pub a: Bit,
    pub b: Cell,
    pub result: Bit,
}

impl TruthTableRow {
    pub fn new(a: impl Into<Bit>, b: impl Into<Cell>, result: impl Into<Bit>) -> Self {
        Self {
            a: a.into(),
            b: b.into(),
            result: result.into(),
        }
    }
}

impl Display for TruthTableRow {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} {}", self.a, self.b, self.result)
    }
}

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct TruthTable {
    pub gate: GateKind,
    pub description: &'static str,
    pub rows: Vec<TruthTableRow>,
}

impl TruthTable {
    /// Reference tag, e.g. `REF:LOGIC_XOR`.
    pub fn tag(&self) -> String {
        format!("REF:LOGIC_{}", self.gate.name())
    }
}

impl Display for TruthTable {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{} [{}]", self.gate, self.tag())?;
        writeln!(f, "{}", self.description)?;
        write!(f, "A B RES")?;
        for row in self.rows.iter() {
            write!(f, "\n{}", row)?;
        }
        Ok(())
    }
}

/// Short reference text for a gate's truth table.
pub const fn description(gate: GateKind) -> &'static str {
    match gate {
        GateKind::And => "Output is 1 only if both inputs are 1.",
        GateKind::Or => "Output is 1 if at least one input is 1.",
        GateKind::Xor => "Output is 1 if inputs are different.",
        GateKind::Nand => "Opposite of AND. Output is 0 only if both inputs are 1.",
        GateKind::Nor => "Opposite of OR. Output is 1 only if both inputs are 0.",
        GateKind::Not => "Inverts the input. Only takes one input.",
    }
}

/// Builds the truth table of `gate`.
pub fn table_for(gate: GateKind) -> TruthTable {
    debug!("table_for(gate = {})", gate);

    let rows: Vec<TruthTableRow> = if gate.is_unary() {
        [false, true]
            .into_iter()
            .map(|a| TruthTableRow::new(a, Cell::Unused, evaluate(gate, a, false)))
            .collect()
    } else {
        [(false, false), (false, true), (true, false), (true, true)]
            .into_iter()
            .map(|(a, b)| TruthTableRow::new(a, b, evaluate(gate, a, b)))
            .collect()
    };

    TruthTable {
        gate,
        description: description(gate),
        rows,
    }
}

/// Same as [`table_for`], but takes the gate by identifier.
pub fn table_for_named(name: &str) -> Result<TruthTable, GateError> {
    let gate: GateKind = name.parse()?;
    debug!("table_for_named(name = {:?}) -> {}", name, gate);
    Ok(table_for(gate))
}

/// Truth tables of all gates, in [`GateKind::ALL`] order.
pub fn all_tables() -> Vec<TruthTable> {
    GateKind::ALL.into_iter().map(table_for).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    use test_log::test;

    fn digits(table: &TruthTable) -> Vec<String> {
        table.rows.iter().map(|row| row.to_string()).collect()
    }

    #[test]
    fn test_row_counts() {
        for gate in GateKind::ALL {
            let table = table_for(gate);
            let expected = if gate == GateKind::Not { 2 } else { 4 };
            assert_eq!(table.rows.len(), expected, "gate = {}", gate);
        }
    }

    #[test]
    fn test_table_or() {
        let table = table_for(GateKind::Or);
        assert_eq!(
            table.rows,
            vec![
                TruthTableRow::new(false, false, false),
                TruthTableRow::new(false, true, true),
                TruthTableRow::new(true, false, true),
                TruthTableRow::new(true, true, true),
            ]
        );
        assert_eq!(table.description, "Output is 1 if at least one input is 1.");
    }

    #[test]
    fn test_table_not() {
        let table = table_for(GateKind::Not);
        assert_eq!(
            table.rows,
            vec![
                TruthTableRow::new(Bit::Zero, Cell::Unused, Bit::One),
                TruthTableRow::new(Bit::One, Cell::Unused, Bit::Zero),
            ]
        );
        assert_eq!(digits(&table), ["0 - 1", "1 - 0"]);
    }

    #[test]
    fn test_golden_tables() {
        let golden: [(GateKind, [&str; 4]); 5] = [
            (GateKind::And, ["0 0 0", "0 1 0", "1 0 0", "1 1 1"]),
            (GateKind::Or, ["0 0 0", "0 1 1", "1 0 1", "1 1 1"]),
            (GateKind::Xor, ["0 0 0", "0 1 1", "1 0 1", "1 1 0"]),
            (GateKind::Nand, ["0 0 1", "0 1 1", "1 0 1", "1 1 0"]),
            (GateKind::Nor, ["0 0 1", "0 1 0", "1 0 0", "1 1 0"]),
        ];
        for (gate, expected) in golden {
            assert_eq!(digits(&table_for(gate)), expected, "gate = {}", gate);
        }
    }

    #[test]
    fn test_table_repeatable() {
        for gate in GateKind::ALL {
            assert_eq!(table_for(gate), table_for(gate));
        }
    }

    #[test]
    fn test_table_display() {
        let table = table_for(GateKind::Not);
        assert_eq!(table.tag(), "REF:LOGIC_NOT");
        assert_eq!(
            table.to_string(),
            "NOT [REF:LOGIC_NOT]\nInverts the input. Only takes one input.\nA B RES\n0 - 1\n1 - 0"
        );
    }

    #[test]
    fn test_all_tables_order() {
        let gates: Vec<GateKind> = all_tables().iter().map(|t| t.gate).collect();
        assert_eq!(gates, GateKind::ALL);
    }

    #[test]
    fn test_table_for_named() {
        assert_eq!(table_for_named("xor").map(|t| t.gate), Ok(GateKind::Xor));
        assert!(table_for_named("MUX").is_err());
    }

    #[test]
    fn test_bit_bool_conversion() {
        for b in [false, true] {
            assert_eq!(bool::from(Bit::from(b)), b);
        }
        assert!(bool::from(Bit::One));
        assert!(!bool::from(Bit::Zero));
    }
}
