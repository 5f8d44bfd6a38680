//! # logic-lab: primitive logic gates
//!
//! **`logic-lab`** is the evaluation core of an interactive logic gate simulator.
//! It knows six gates (AND, OR, XOR, NAND, NOR, NOT), produces their reference truth tables,
//! and keeps a short history of evaluation snapshots.
//!
//! ## Basic Usage
//!
//! ```rust
//! use logic_lab::eval::{evaluate, EvaluationRequest};
//! use logic_lab::gate::GateKind;
//! use logic_lab::history::{HistoryEntry, HistoryLog};
//! use logic_lab::table::table_for;
//!
//! // Evaluate a gate directly
//! assert!(evaluate(GateKind::Xor, true, false));
//!
//! // NOT ignores the second input
//! assert_eq!(evaluate(GateKind::Not, true, true), evaluate(GateKind::Not, true, false));
//!
//! // Reference table, in (0,0), (0,1), (1,0), (1,1) order
//! let table = table_for(GateKind::Or);
//! assert_eq!(table.rows.len(), 4);
//!
//! // Snapshots are kept newest first, at most 5 of them
//! let mut log = HistoryLog::default();
//! log.push(HistoryEntry::snapshot(EvaluationRequest::new(GateKind::And, true, true), "12:00:00"));
//! assert_eq!(log.latest().map(|e| e.result), Some(true));
//! ```
//!
//! ## Core Components
//!
//! - **[`eval`]**: Gate evaluation.
//! - **[`table`]**: Truth table generation.
//! - **[`history`]**: The bounded snapshot log.
//! - **[`simulator`]**: Session state tying the above together.
//!
//! Gate identifiers coming from outside (e.g. `"NAND"`) are parsed into [`gate::GateKind`];
//! anything else is rejected with [`error::GateError::InvalidGateKind`].

pub mod error;
pub mod eval;
pub mod gate;
pub mod history;
pub mod simulator;
pub mod table;
