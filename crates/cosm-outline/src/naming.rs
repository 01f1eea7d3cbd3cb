// this_file: crates/cosm-outline/src/naming.rs

//! Glyph naming: bitmap file stem to character.
//!
//! Most stems are the character itself (`a.png` is `a`). Characters that a
//! filename cannot hold, and uppercase letters that a case-insensitive
//! filesystem cannot tell apart from lowercase, are written as the escape
//! marker plus one character: `_a` is `A`, `_.` is `.`, `_\` is `/`.

use cosm_core::{EscapeTable, NameError, Result};

/// Resolve a file stem to the character it draws.
pub fn resolve(stem: &str, escapes: &EscapeTable) -> Result<char> {
    let mut chars = stem.chars();
    let first = chars.next().ok_or(NameError::Empty)?;
    let second = chars.next();
    let rest = chars.next();

    match (second, rest) {
        (None, _) => Ok(first),
        (Some(escaped), None) if first == escapes.marker => unescape(escaped, escapes),
        (Some(_), _) if first == escapes.marker => {
            Err(NameError::InvalidEscape(stem.to_string()).into())
        }
        (Some(_), _) => Err(NameError::MultipleCharacters(stem.to_string()).into()),
    }
}

fn unescape(escaped: char, escapes: &EscapeTable) -> Result<char> {
    if let Some(ch) = escapes.substitute(escaped) {
        return Ok(ch);
    }

    let mut upper = escaped.to_uppercase();
    match (upper.next(), upper.next()) {
        (Some(ch), None) => Ok(ch),
        _ => Err(NameError::NoUppercase(escaped).into()),
    }
}
