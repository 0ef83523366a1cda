//! `.circuit` ... `.end` block extraction.

use crate::error::{DcSpiceError, Result};

/// Marker opening the element block.
pub const CIRCUIT_MARKER: &str = ".circuit";

/// Marker closing the element block.
pub const END_MARKER: &str = ".end";

/// A raw line from inside the circuit block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourceLine<'a> {
    /// Line number (1-indexed)
    pub number: usize,
    /// Line text, untrimmed
    pub text: &'a str,
}

/// Return the lines strictly between the `.circuit` and `.end` markers.
///
/// Each marker must appear exactly once, `.circuit` first. Content outside
/// the block is ignored.
pub fn extract_block(input: &str) -> Result<Vec<SourceLine<'_>>> {
    let mut circuit_line: Option<usize> = None;
    let mut end_line: Option<usize> = None;

    for (idx, text) in input.lines().enumerate() {
        let number = idx + 1;
        let slot = match text.split_whitespace().next() {
            Some(CIRCUIT_MARKER) => &mut circuit_line,
            Some(END_MARKER) => &mut end_line,
            _ => continue,
        };
        if slot.is_some() {
            return Err(DcSpiceError::DuplicateMarker {
                marker: text.trim().to_string(),
                line: number,
            });
        }
        *slot = Some(number);
    }

    let circuit_line = circuit_line.ok_or(DcSpiceError::MissingCircuitBlock)?;
    let end_line = end_line.ok_or(DcSpiceError::MissingEndMarker)?;
    if end_line < circuit_line {
        return Err(DcSpiceError::MisorderedMarkers {
            circuit_line,
            end_line,
        });
    }

    log::debug!(
        "circuit block spans lines {}..{}",
        circuit_line + 1,
        end_line
    );

    Ok(input
        .lines()
        .enumerate()
        .skip(circuit_line)
        .take(end_line - circuit_line - 1)
        .map(|(idx, text)| SourceLine {
            number: idx + 1,
            text,
        })
        .collect())
}
