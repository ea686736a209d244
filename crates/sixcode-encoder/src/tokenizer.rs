//! Greedy decomposition of a string into symbol table entries.

use sixcode_core::{Error, Result};

use crate::table::SymbolTable;

/// `""`
pub const EMPTY_STRING: &str = "[]+[]";

/// Concatenation of table expressions spelling `s`.
///
/// At each position the longest key that prefixes the rest of the input
/// wins. This is not optimal (a long match can force expensive pieces
/// later) but it is what every caller's output lengths are tuned against.
pub fn str_lookup(table: &SymbolTable, s: &str) -> Result<String> {
    if s.is_empty() {
        return Ok(EMPTY_STRING.to_string());
    }

    let mut result = String::new();
    let mut rest = s;
    while !rest.is_empty() {
        let mut best: Option<(&str, &str)> = None;
        for (key, expr) in table.iter() {
            if key.len() > best.map_or(0, |(k, _)| k.len()) && rest.starts_with(key) {
                best = Some((key, expr));
            }
        }

        let (key, expr) = best.ok_or_else(|| Error::UnknownPrefix { remaining: rest.to_string() })?;
        if !result.is_empty() {
            result.push('+');
        }
        result.push_str(expr);
        rest = &rest[key.len()..];
    }
    Ok(result)
}
