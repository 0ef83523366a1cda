//! Circuit validation.

use std::collections::HashSet;

use crate::error::{DcSpiceError, Result};
use crate::netlist::ElementRecord;

/// Reject netlists where two elements share a name.
///
/// The first repeated name in record order is reported.
pub fn validate_unique_names(records: &[ElementRecord]) -> Result<()> {
    let mut seen = HashSet::with_capacity(records.len());
    for record in records {
        if !seen.insert(record.name.as_str()) {
            return Err(DcSpiceError::DuplicateElement {
                name: record.name.clone(),
            });
        }
    }
    Ok(())
}
