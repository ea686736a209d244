//! Symbol table: known values and the shortest expression found for each.

use std::collections::{BTreeSet, HashMap};

use crate::number::uint;

/// An expression together with the string the runtime evaluates it to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Literal {
    pub expr: String,
    pub value: String,
}

impl Literal {
    pub fn new(expr: impl Into<String>, value: impl Into<String>) -> Self {
        Self { expr: expr.into(), value: value.into() }
    }
}

/// Value → shortest known expression.
///
/// Entries keep insertion order; an entry is only ever replaced by a
/// strictly shorter expression.
#[derive(Debug, Clone, Default)]
pub struct SymbolTable {
    entries: Vec<(String, String)>,
    index: HashMap<String, usize>,
}

impl SymbolTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `expr` for `key` unless a shorter or equally long one is known.
    /// Returns whether the table changed.
    pub fn update(&mut self, key: &str, expr: String) -> bool {
        match self.index.get(key) {
            Some(&i) => {
                if self.entries[i].1.len() > expr.len() {
                    self.entries[i].1 = expr;
                    true
                } else {
                    false
                }
            }
            None => {
                self.index.insert(key.to_string(), self.entries.len());
                self.entries.push((key.to_string(), expr));
                true
            }
        }
    }

    /// Register a literal and every character of its value.
    pub fn add(&mut self, literal: &Literal) {
        // a leading unary plus would merge with a preceding `+`
        let whole = if literal.expr.starts_with('+') {
            format!("({})", literal.expr)
        } else {
            literal.expr.clone()
        };
        self.update(&literal.value, whole);

        for (i, c) in literal.value.chars().enumerate() {
            let mut buf = [0u8; 4];
            self.update(c.encode_utf8(&mut buf), format!("({})[{}]", literal.expr, uint(i)));
        }
    }

    pub fn extend<'a>(&mut self, literals: impl IntoIterator<Item = &'a Literal>) {
        for literal in literals {
            self.add(literal);
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.index.get(key).map(|&i| self.entries[i].1.as_str())
    }

    pub fn contains(&self, key: &str) -> bool {
        self.index.contains_key(key)
    }

    pub fn contains_char(&self, c: char) -> bool {
        let mut buf = [0u8; 4];
        self.contains(c.encode_utf8(&mut buf))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// (value, expression) pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Current entries as literals, for sweeps that add to the table while
    /// walking it.
    pub fn snapshot(&self) -> Vec<Literal> {
        self.entries
            .iter()
            .map(|(value, expr)| Literal::new(expr.clone(), value.clone()))
            .collect()
    }

    /// Every character that has its own entry.
    pub fn alphabet(&self) -> BTreeSet<char> {
        self.entries
            .iter()
            .filter_map(|(k, _)| {
                let mut chars = k.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => Some(c),
                    _ => None,
                }
            })
            .collect()
    }
}
