//! String encoding strategies the dispatcher chooses between.

use std::sync::Arc;

use sixcode_core::{Result, StrategyKind};

use crate::array::ArrayEncoder;
use crate::bootstrap::Codebook;
use crate::number::{uint, uint_string};
use crate::unique::{generate_unique_mapping, Occurrences};

/// One way of turning a string into an expression that evaluates to it.
pub trait StringEncoder: Send + Sync {
    fn name(&self) -> &'static str;
    fn can_encode(&self, s: &str) -> bool;
    fn encode(&self, s: &str) -> Result<String>;
}

/// Build the strategy named by `kind` over `codebook`.
pub fn strategy(kind: StrategyKind, codebook: Arc<Codebook>) -> Box<dyn StringEncoder> {
    match kind {
        StrategyKind::CodePoint => Box::new(CodePointEncoder::new(codebook)),
        StrategyKind::Lookup => Box::new(LookupEncoder::new(codebook)),
    }
}

// ============================================================================
// Lookup
// ============================================================================

/// Spells the distinct characters once through the symbol table and picks
/// them out by index with `charAt`.
pub struct LookupEncoder {
    codebook: Arc<Codebook>,
}

impl LookupEncoder {
    pub fn new(codebook: Arc<Codebook>) -> Self {
        Self { codebook }
    }
}

impl StringEncoder for LookupEncoder {
    fn name(&self) -> &'static str {
        StrategyKind::Lookup.name()
    }

    fn can_encode(&self, s: &str) -> bool {
        s.chars().all(|c| self.codebook.table().contains_char(c))
    }

    fn encode(&self, s: &str) -> Result<String> {
        let words = self.codebook.words();
        let occurrences: Occurrences<char> = s.chars().collect();
        let mapping = generate_unique_mapping(&occurrences);

        let unique: String = mapping.values.iter().collect();
        let unique = self.codebook.lookup(&unique)?;
        let chars: Vec<char> = s.chars().collect();
        let indices = ArrayEncoder::new(words).encode(&mapping.indices(&chars));

        let optimized = format!(
            "{}[{}](([]+[])[{}][{}]({}))[{}]([])",
            indices, words.map, words.char_at, words.bind, unique, words.join
        );
        let direct = self.codebook.lookup(s)?;

        Ok(if optimized.len() < direct.len() { optimized } else { direct })
    }
}

// ============================================================================
// Code point
// ============================================================================

/// Rebuilds the string from its code points at run time.
///
/// A lone BMP character becomes a string literal with an escape sequence;
/// anything else goes through `String.fromCodePoint`.
pub struct CodePointEncoder {
    codebook: Arc<Codebook>,
}

impl CodePointEncoder {
    pub fn new(codebook: Arc<Codebook>) -> Self {
        Self { codebook }
    }

    fn escaped(&self, code_point: u32) -> Result<String> {
        let words = self.codebook.words();
        let escape = if code_point < 0xff {
            format!("\\x{:02x}", code_point)
        } else {
            format!("\\u{:04x}", code_point)
        };
        Ok(format!(
            "{}({}+{}+{})()",
            words.function,
            words.return_quote,
            self.codebook.lookup(&escape)?,
            words.quote
        ))
    }

    /// `a,b,c` as one string: the array form joined with commas.
    pub(crate) fn joined(&self, code_points: &[usize]) -> String {
        let words = self.codebook.words();
        format!(
            "{}[{}]({})",
            ArrayEncoder::new(words).encode(code_points),
            words.join,
            words.comma
        )
    }

    /// `a,b,c` as one string: each number concatenated after a comma.
    /// The first operand is parenthesized so it cannot merge with the `+`
    /// that precedes it.
    pub(crate) fn listed(&self, code_points: &[usize]) -> String {
        let comma = &self.codebook.words().comma;
        let mut listed = code_points
            .first()
            .map_or_else(String::new, |&first| format!("({})", uint_string(first)));
        for &code_point in code_points.iter().skip(1) {
            listed.push_str(&format!("+{}+({})", comma, uint(code_point)));
        }
        listed
    }

    fn from_code_points(&self, code_points: &[usize]) -> String {
        let words = self.codebook.words();
        let joined = self.joined(code_points);
        let listed = self.listed(code_points);
        let arguments = if joined.len() < listed.len() { joined } else { listed };
        format!(
            "{}({}+{}+{})()",
            words.function, words.return_from_code_point, arguments, words.close_paren
        )
    }
}

impl StringEncoder for CodePointEncoder {
    fn name(&self) -> &'static str {
        StrategyKind::CodePoint.name()
    }

    fn can_encode(&self, _s: &str) -> bool {
        true
    }

    fn encode(&self, s: &str) -> Result<String> {
        let mut chars = s.chars();
        if let (Some(c), None) = (chars.next(), chars.next()) {
            if (c as u32) <= 0xffff {
                return self.escaped(c as u32);
            }
        }

        let code_points: Vec<usize> = s.chars().map(|c| c as usize).collect();
        Ok(self.from_code_points(&code_points))
    }
}
