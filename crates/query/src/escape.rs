//! SPARQL literal escaping
//!
//! Every string that reaches query text goes through [`string_literal`]. The
//! graph store endpoint has no parameter binding for GET queries, so escaping
//! is the only thing standing between search input and the query grammar.

/// Render `value` as a double-quoted SPARQL string literal (`STRING_LITERAL2`)
pub fn string_literal(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('"');
    for c in value.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\'' => out.push_str("\\'"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '\u{08}' => out.push_str("\\b"),
            '\u{0C}' => out.push_str("\\f"),
            other => out.push(other),
        }
    }
    out.push('"');
    out
}

/// Render a finite number as a SPARQL numeric literal
///
/// `Debug` formatting always keeps a fractional part or an exponent
/// (`140.0`, `1e21`), both of which the SPARQL grammar accepts.
pub fn numeric_literal(value: f64) -> String {
    format!("{value:?}")
}
