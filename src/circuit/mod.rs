//! Circuit representation, index assignment and validation.
//!
//! This module turns the flat list of [`ElementRecord`](crate::netlist::ElementRecord)s
//! into a [`Circuit`]: every node gets a [`NodeId`] (ground is always 0) and
//! every voltage source gets a [`BranchId`] for its current unknown.

mod graph;
mod index;
mod types;
mod validate;

pub use graph::{Circuit, Element};
pub use index::{AuxiliaryEntry, AuxiliaryIndexMap, NodeIndexMap, GROUND_NAME};
pub use types::*;
pub use validate::validate_unique_names;
