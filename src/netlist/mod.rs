//! Netlist reader for DC operating point decks.
//!
//! The format is a stripped-down SPICE deck. Only the lines between a single
//! `.circuit` / `.end` pair are read; everything else is ignored.
//!
//! # Grammar Overview
//!
//! ```text
//! deck        = { ignored } ".circuit" { line } ".end" { ignored }
//! line        = comment | element | empty
//! comment     = '#' { any_char }
//! element     = name node node ["dc"] value [comment]
//!
//! name        = ('R' | 'I' | 'V') { non_space }
//! node        = non_space+            (one node must be "GND")
//! value       = number [unit_suffix]
//! unit_suffix = 'p' | 'n' | 'u' | 'm' | 'k' | 'K' | 'M' | 'G'
//! ```
//!
//! # Element Types
//!
//! | Type | Description | Syntax |
//! |------|-------------|--------|
//! | R | Resistor | `R<name> <a> <b> <ohms>` |
//! | I | Current Source | `I<name> <a> <b> [dc] <amps>` (flows a to b) |
//! | V | Voltage Source | `V<name> <a> <b> [dc] <volts>` (V(a) - V(b)) |
//!
//! # Example
//!
//! ```text
//! # Voltage divider
//! .circuit
//! V1  in   GND  dc 10
//! R1  in   out  1k
//! R2  out  GND  1k   # load
//! .end
//! ```

mod extract;
mod lexer;
mod record;

pub use extract::{extract_block, SourceLine, CIRCUIT_MARKER, END_MARKER};
pub use lexer::{parse_value, tokenize_line, Token, TokenKind};
pub use record::{parse_record, ElementKind, ElementRecord};

use std::path::Path;

use crate::error::{DcSpiceError, Result};

/// Parse netlist text into its ordered element records.
pub fn parse(input: &str) -> Result<Vec<ElementRecord>> {
    let lines = extract_block(input)?;
    let mut records = Vec::with_capacity(lines.len());
    for line in lines {
        if let Some(record) = parse_record(line.number, line.text)? {
            records.push(record);
        }
    }
    log::debug!("parsed {} element records", records.len());
    Ok(records)
}

/// Parse a netlist file.
pub fn parse_file(path: &Path) -> Result<Vec<ElementRecord>> {
    let content = std::fs::read_to_string(path).map_err(|e| DcSpiceError::FileReadError {
        path: path.display().to_string(),
        source: e,
    })?;
    parse(&content)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn test_parse_deck() {
        let input = "\
title line is ignored
.circuit
V1 in GND dc 10
# commented-out element
R1 in out 1k
R2 out GND 1k # load
.end
";
        let records = parse(input).unwrap();
        assert_eq!(records.len(), 3);
        assert_eq!(records[0].kind, ElementKind::VoltageSource);
        assert_eq!(records[1].line, 5);
        assert_eq!(records[2].name, "R2");
    }

    #[test]
    fn test_parse_file_missing() {
        let path = std::env::temp_dir().join("dcspice_core_no_such_netlist.ckt");
        let err = parse_file(&path).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::FileAccess);
    }
}
