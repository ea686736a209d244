//! Arrays of unsigned integers.
//!
//! The baseline concatenates every element with `false` in between and
//! splits the resulting string on `false`. When values repeat, the distinct
//! values are encoded once and the array is rebuilt by mapping an index
//! array through `[].at` bound to them.

use crate::bootstrap::Words;
use crate::number::{uint, uint_string};
use crate::unique::{generate_unique_mapping, Occurrences};

pub struct ArrayEncoder<'a> {
    words: &'a Words,
}

impl<'a> ArrayEncoder<'a> {
    pub fn new(words: &'a Words) -> Self {
        Self { words }
    }

    /// Shortest known expression for `values`. The elements of the
    /// resulting array are decimal strings.
    pub fn encode(&self, values: &[usize]) -> String {
        let baseline = self.baseline(values);
        self.optimize(values, baseline)
    }

    /// Like [`encode`](Self::encode), but `None` as soon as the baseline
    /// alone is longer than `budget`.
    pub fn encode_within(&self, values: &[usize], budget: usize) -> Option<String> {
        let baseline = self.baseline(values);
        if baseline.len() > budget {
            return None;
        }
        Some(self.optimize(values, baseline))
    }

    /// `(a+![]+(b)+![]+(c))[split](![])`
    pub fn baseline(&self, values: &[usize]) -> String {
        let mut joined = values.first().map_or_else(String::new, |&first| uint_string(first));
        for &value in values.iter().skip(1) {
            joined.push_str("+![]+(");
            joined.push_str(&uint(value));
            joined.push(')');
        }
        format!("({})[{}](![])", joined, self.words.split)
    }

    fn optimize(&self, values: &[usize], baseline: String) -> String {
        let occurrences: Occurrences<usize> = values.iter().copied().collect();
        if !occurrences.has_duplicates() {
            return baseline;
        }

        let mapping = generate_unique_mapping(&occurrences);
        let suffix = format!(
            "[{}]([][{}][{}]({}))",
            self.words.map,
            self.words.at,
            self.words.bind,
            self.encode(&mapping.values)
        );
        if suffix.len() >= baseline.len() {
            return baseline;
        }

        let indices = mapping.indices(values);
        match self.encode_within(&indices, baseline.len() - suffix.len()) {
            Some(prefix) => prefix + &suffix,
            None => baseline,
        }
    }
}
