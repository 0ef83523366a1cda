//! Line tokenizer and value parsing for netlist text.

/// A whitespace-delimited token from a single netlist line.
#[derive(Debug, Clone, PartialEq)]
pub struct Token<'a> {
    /// The kind of token
    pub kind: TokenKind,
    /// The token's text (for comments, everything up to end of line)
    pub text: &'a str,
    /// Column number (1-indexed)
    pub column: usize,
}

/// Token types on a netlist line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// Element name, node name, keyword or value
    Word,
    /// A `#` comment running to end of line
    Comment,
}

/// Split a line into word tokens, folding everything from the first
/// `#`-prefixed token onwards into a single comment token.
pub fn tokenize_line(line: &str) -> Vec<Token<'_>> {
    let mut tokens = Vec::new();
    let mut chars = line.char_indices().peekable();

    while let Some(&(start, ch)) = chars.peek() {
        if ch.is_whitespace() {
            chars.next();
            continue;
        }

        if ch == '#' {
            tokens.push(Token {
                kind: TokenKind::Comment,
                text: line[start..].trim_end(),
                column: start + 1,
            });
            break;
        }

        let mut end = line.len();
        while let Some(&(pos, c)) = chars.peek() {
            if c.is_whitespace() {
                end = pos;
                break;
            }
            chars.next();
        }

        tokens.push(Token {
            kind: TokenKind::Word,
            text: &line[start..end],
            column: start + 1,
        });
    }

    tokens
}

/// Parse a number string with optional unit suffix.
///
/// Returns `None` for anything that does not denote a finite value.
pub fn parse_value(text: &str) -> Option<f64> {
    let text = text.trim();
    let last = text.chars().last()?;

    let multiplier = match last {
        'p' => 1e-12,
        'n' => 1e-9,
        'u' | 'µ' => 1e-6,
        'm' => 1e-3,
        'k' | 'K' => 1e3,
        'M' => 1e6,
        'G' => 1e9,
        _ => 1.0,
    };
    let num_str = if multiplier != 1.0 {
        &text[..text.len() - last.len_utf8()]
    } else {
        text
    };

    num_str
        .parse::<f64>()
        .ok()
        .map(|v| v * multiplier)
        .filter(|v| v.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: Option<f64>, b: Option<f64>) -> bool {
        match (a, b) {
            (Some(x), Some(y)) => (x - y).abs() < x.abs() * 1e-10 + 1e-15,
            (None, None) => true,
            _ => false,
        }
    }

    #[test]
    fn test_parse_value() {
        assert!(approx_eq(parse_value("10k"), Some(10_000.0)));
        assert!(approx_eq(parse_value("100n"), Some(100e-9)));
        assert!(approx_eq(parse_value("4.7u"), Some(4.7e-6)));
        assert!(approx_eq(parse_value("1M"), Some(1_000_000.0)));
        assert!(approx_eq(parse_value("2.2"), Some(2.2)));
        assert!(approx_eq(parse_value("1e-9"), Some(1e-9)));
        assert!(approx_eq(parse_value("-0.5"), Some(-0.5)));
        assert!(approx_eq(parse_value("0"), Some(0.0)));
    }

    #[test]
    fn test_parse_value_rejects_garbage() {
        assert_eq!(parse_value(""), None);
        assert_eq!(parse_value("k"), None);
        assert_eq!(parse_value("ten"), None);
        assert_eq!(parse_value("inf"), None);
        assert_eq!(parse_value("NaN"), None);
        assert_eq!(parse_value("1e400"), None);
    }

    #[test]
    fn test_tokenize_basic() {
        let tokens = tokenize_line("R1  in\tout 10k");
        let texts: Vec<&str> = tokens.iter().map(|t| t.text).collect();
        assert_eq!(texts, vec!["R1", "in", "out", "10k"]);
        assert!(tokens.iter().all(|t| t.kind == TokenKind::Word));
        assert_eq!(tokens[1].column, 5);
    }

    #[test]
    fn test_tokenize_comment() {
        let tokens = tokenize_line("V1 n1 GND 5 # supply rail  ");
        assert_eq!(tokens.len(), 5);
        assert_eq!(tokens[4].kind, TokenKind::Comment);
        assert_eq!(tokens[4].text, "# supply rail");
    }

    #[test]
    fn test_tokenize_blank() {
        assert!(tokenize_line("   \t ").is_empty());
    }
}
