//! Error types for the DcSpice solver.
//!
//! This module provides a unified error type [`DcSpiceError`] covering every
//! failure of the pipeline: reading the netlist file, validating its contents,
//! and solving the assembled system. Each variant belongs to exactly one
//! [`ErrorKind`], which is what callers should branch on.

use thiserror::Error;

/// Result type alias using [`DcSpiceError`].
pub type Result<T> = std::result::Result<T, DcSpiceError>;

/// Coarse classification of every [`DcSpiceError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The netlist file could not be opened or read.
    FileAccess,
    /// The netlist text is not a valid circuit description.
    MalformedCircuit,
    /// The circuit is well-formed but has no (finite) DC solution.
    NoSolution,
}

/// Unified error type for all DcSpice operations.
#[derive(Error, Debug)]
pub enum DcSpiceError {
    // ============ I/O Errors ============
    /// Error reading circuit file
    #[error("Failed to read circuit file '{path}': {source}")]
    FileReadError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    // ============ Netlist Errors ============
    /// No `.circuit` marker in the file
    #[error("Malformed circuit file: no '.circuit' marker")]
    MissingCircuitBlock,

    /// No `.end` marker in the file
    #[error("Malformed circuit file: no '.end' marker")]
    MissingEndMarker,

    /// A block marker appears more than once
    #[error("Malformed circuit file: marker '{marker}' repeated at line {line}")]
    DuplicateMarker { marker: String, line: usize },

    /// `.end` precedes `.circuit`
    #[error("Malformed circuit file: '.end' at line {end_line} precedes '.circuit' at line {circuit_line}")]
    MisorderedMarkers { circuit_line: usize, end_line: usize },

    /// Element line with too few fields
    #[error("Malformed circuit file: element '{name}' at line {line} is missing its {field}")]
    MissingField {
        name: String,
        line: usize,
        field: &'static str,
    },

    /// Value field that is not a finite number
    #[error("Malformed circuit file: invalid value '{text}' for element '{name}' at line {line}")]
    InvalidValue {
        name: String,
        line: usize,
        text: String,
    },

    /// Non-comment text after the value field
    #[error("Malformed circuit file: unexpected token '{token}' after element '{name}' at line {line}")]
    TrailingTokens {
        name: String,
        line: usize,
        token: String,
    },

    /// Element prefix other than R, I or V
    #[error("Only V, I, R elements are permitted (got '{name}' at line {line})")]
    UnknownElementType { name: String, line: usize },

    // ============ Circuit Validation Errors ============
    /// Missing ground node
    #[error("Malformed circuit file: circuit has no ground node 'GND'")]
    MissingGround,

    /// Duplicate element name
    #[error("Malformed circuit file: duplicate element name '{name}'")]
    DuplicateElement { name: String },

    // ============ Solver Errors ============
    /// Matrix is singular and cannot be solved
    #[error("Circuit error: no solution (singular matrix - floating node or conflicting voltage sources)")]
    SingularMatrix,

    /// A voltage source current exceeded the blow-up bound
    #[error("Circuit error: no solution (current through '{source_name}' blew up to {value:.2e})")]
    CurrentOverflow { source_name: String, value: f64 },

    /// The solver produced an infinite or NaN entry
    #[error("Circuit error: no solution (non-finite value for '{unknown}')")]
    NonFiniteSolution { unknown: String },
}

impl DcSpiceError {
    /// The kind of failure, for callers that need to branch on it.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::FileReadError { .. } => ErrorKind::FileAccess,
            Self::MissingCircuitBlock
            | Self::MissingEndMarker
            | Self::DuplicateMarker { .. }
            | Self::MisorderedMarkers { .. }
            | Self::MissingField { .. }
            | Self::InvalidValue { .. }
            | Self::TrailingTokens { .. }
            | Self::UnknownElementType { .. }
            | Self::MissingGround
            | Self::DuplicateElement { .. } => ErrorKind::MalformedCircuit,
            Self::SingularMatrix
            | Self::CurrentOverflow { .. }
            | Self::NonFiniteSolution { .. } => ErrorKind::NoSolution,
        }
    }

    /// Create a missing field error
    pub fn missing_field(name: impl Into<String>, line: usize, field: &'static str) -> Self {
        Self::MissingField {
            name: name.into(),
            line,
            field,
        }
    }

    /// Create an invalid value error
    pub fn invalid_value(name: impl Into<String>, line: usize, text: impl Into<String>) -> Self {
        Self::InvalidValue {
            name: name.into(),
            line,
            text: text.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kinds() {
        let io = DcSpiceError::FileReadError {
            path: "x.ckt".to_string(),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
        };
        assert_eq!(io.kind(), ErrorKind::FileAccess);
        assert_eq!(DcSpiceError::MissingGround.kind(), ErrorKind::MalformedCircuit);
        assert_eq!(
            DcSpiceError::missing_field("R1", 3, "value").kind(),
            ErrorKind::MalformedCircuit
        );
        assert_eq!(DcSpiceError::SingularMatrix.kind(), ErrorKind::NoSolution);
    }

    #[test]
    fn test_messages_name_the_element() {
        let err = DcSpiceError::invalid_value("R7", 4, "ten");
        let msg = err.to_string();
        assert!(msg.contains("R7"));
        assert!(msg.contains("ten"));
        assert!(msg.contains("line 4"));
    }
}
