//! Element records produced from netlist lines.

use std::fmt;

use super::lexer::{parse_value, tokenize_line, TokenKind};
use crate::error::{DcSpiceError, Result};

/// Element types supported by the netlist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementKind {
    /// Resistor, value in ohms
    Resistor,
    /// Independent current source, value in amps
    CurrentSource,
    /// Independent voltage source, value in volts
    VoltageSource,
}

impl ElementKind {
    /// Parse an element type from the first character of its name.
    pub fn from_prefix(prefix: char) -> Option<Self> {
        match prefix {
            'R' => Some(Self::Resistor),
            'I' => Some(Self::CurrentSource),
            'V' => Some(Self::VoltageSource),
            _ => None,
        }
    }

    /// Whether the element is an independent source (and may carry `dc`).
    pub fn is_source(&self) -> bool {
        matches!(self, Self::CurrentSource | Self::VoltageSource)
    }
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Resistor => "resistor",
            Self::CurrentSource => "current source",
            Self::VoltageSource => "voltage source",
        };
        f.write_str(name)
    }
}

/// One element line of the netlist.
///
/// Current and voltage drop are both taken from `node_a` towards `node_b`.
#[derive(Debug, Clone, PartialEq)]
pub struct ElementRecord {
    /// Element type, derived from the name prefix
    pub kind: ElementKind,
    /// Unique element name
    pub name: String,
    /// First terminal
    pub node_a: String,
    /// Second terminal
    pub node_b: String,
    /// Ohms, amps or volts depending on `kind`
    pub value: f64,
    /// Source line number for error reporting
    pub line: usize,
}

impl ElementRecord {
    /// Both terminal names, in order.
    pub fn terminals(&self) -> [&str; 2] {
        [&self.node_a, &self.node_b]
    }
}

/// Parse a single line from inside the `.circuit` block.
///
/// Returns `Ok(None)` for blank lines and whole-line comments.
pub fn parse_record(line: usize, text: &str) -> Result<Option<ElementRecord>> {
    let tokens = tokenize_line(text);
    let mut words = tokens.iter();

    let name = match words.next() {
        Some(tok) if tok.kind == TokenKind::Word => tok.text,
        _ => return Ok(None),
    };

    let kind = name
        .chars()
        .next()
        .and_then(ElementKind::from_prefix)
        .ok_or_else(|| DcSpiceError::UnknownElementType {
            name: name.to_string(),
            line,
        })?;

    let mut next_word = |field: &'static str| match words.next() {
        Some(tok) if tok.kind == TokenKind::Word => Ok(tok.text),
        _ => Err(DcSpiceError::missing_field(name, line, field)),
    };

    let node_a = next_word("first node")?;
    let node_b = next_word("second node")?;
    let mut value_text = next_word("value")?;
    if kind.is_source() && value_text.eq_ignore_ascii_case("dc") {
        value_text = next_word("value")?;
    }

    let value =
        parse_value(value_text).ok_or_else(|| DcSpiceError::invalid_value(name, line, value_text))?;

    if let Some(tok) = words.next() {
        if tok.kind != TokenKind::Comment {
            return Err(DcSpiceError::TrailingTokens {
                name: name.to_string(),
                line,
                token: tok.text.to_string(),
            });
        }
    }

    Ok(Some(ElementRecord {
        kind,
        name: name.to_string(),
        node_a: node_a.to_string(),
        node_b: node_b.to_string(),
        value,
        line,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    fn parse_one(text: &str) -> ElementRecord {
        parse_record(1, text).unwrap().unwrap()
    }

    #[test]
    fn test_parse_resistor() {
        let r = parse_one("R1 in out 10k");
        assert_eq!(r.kind, ElementKind::Resistor);
        assert_eq!(r.name, "R1");
        assert_eq!(r.terminals(), ["in", "out"]);
        assert_eq!(r.value, 10_000.0);
    }

    #[test]
    fn test_parse_source_with_dc_keyword() {
        let v = parse_one("V1 n1 GND dc 5");
        assert_eq!(v.kind, ElementKind::VoltageSource);
        assert_eq!(v.value, 5.0);

        let i = parse_one("I1 GND n1 DC 2m # bias");
        assert_eq!(i.kind, ElementKind::CurrentSource);
        assert!((i.value - 2e-3).abs() < 1e-15);
    }

    #[test]
    fn test_dc_keyword_not_a_resistor_value() {
        let err = parse_record(2, "R1 a b dc 5").unwrap_err();
        assert!(matches!(err, DcSpiceError::InvalidValue { ref text, .. } if text == "dc"));
    }

    #[test]
    fn test_comment_after_value() {
        let r = parse_one("R2 a GND 1 # load");
        assert_eq!(r.value, 1.0);
        let r = parse_one("R3 a GND 1 #load");
        assert_eq!(r.value, 1.0);
    }

    #[test]
    fn test_trailing_garbage() {
        let err = parse_record(7, "R1 a GND 10 extra").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MalformedCircuit);
        assert!(matches!(err, DcSpiceError::TrailingTokens { line: 7, ref token, .. } if token == "extra"));
    }

    #[test]
    fn test_unknown_prefix() {
        let err = parse_record(3, "C1 a GND 1u").unwrap_err();
        assert!(matches!(err, DcSpiceError::UnknownElementType { line: 3, .. }));
    }

    #[test]
    fn test_missing_fields() {
        let err = parse_record(1, "R1 a GND").unwrap_err();
        assert!(matches!(err, DcSpiceError::MissingField { field: "value", .. }));
        let err = parse_record(1, "V1 a GND dc").unwrap_err();
        assert!(matches!(err, DcSpiceError::MissingField { field: "value", .. }));
        let err = parse_record(1, "I1 a # nothing else").unwrap_err();
        assert!(matches!(err, DcSpiceError::MissingField { field: "second node", .. }));
    }

    #[test]
    fn test_skips_blank_and_comment_lines() {
        assert_eq!(parse_record(1, "").unwrap(), None);
        assert_eq!(parse_record(1, "   ").unwrap(), None);
        assert_eq!(parse_record(1, "# R1 a b 1").unwrap(), None);
    }
}
