//! Deduplication of a multiset into a unique list and an index map.

use std::collections::HashMap;
use std::hash::Hash;

use crate::number::uint;

/// Occurrence counts, ordered by first occurrence.
#[derive(Debug, Clone)]
pub struct Occurrences<T> {
    counts: Vec<(T, usize)>,
    position: HashMap<T, usize>,
}

impl<T: Clone + Eq + Hash> Occurrences<T> {
    pub fn new() -> Self {
        Self { counts: Vec::new(), position: HashMap::new() }
    }

    pub fn add(&mut self, item: T) {
        match self.position.get(&item) {
            Some(&i) => self.counts[i].1 += 1,
            None => {
                self.position.insert(item.clone(), self.counts.len());
                self.counts.push((item, 1));
            }
        }
    }

    /// Whether any item was seen more than once.
    pub fn has_duplicates(&self) -> bool {
        self.counts.iter().any(|(_, n)| *n > 1)
    }

    pub fn iter(&self) -> impl Iterator<Item = &(T, usize)> {
        self.counts.iter()
    }
}

impl<T: Clone + Eq + Hash> Default for Occurrences<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone + Eq + Hash> FromIterator<T> for Occurrences<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut occurrences = Self::new();
        for item in iter {
            occurrences.add(item);
        }
        occurrences
    }
}

/// Distinct values laid out so the most frequent ones sit at the slots
/// with the cheapest index expressions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UniqueMapping<T: Eq + Hash> {
    pub values: Vec<T>,
    pub index: HashMap<T, usize>,
}

impl<T: Eq + Hash> UniqueMapping<T> {
    /// Slot of every item of `items`. Panics on an item the mapping was not built from.
    pub fn indices<'a>(&self, items: impl IntoIterator<Item = &'a T>) -> Vec<usize>
    where
        T: 'a,
    {
        items.into_iter().map(|item| self.index[item]).collect()
    }
}

/// Pair frequency ranks with slots ordered by the length of their index
/// expression. Stable on ties, so the result depends only on the counts
/// and their first-occurrence order.
pub fn generate_unique_mapping<T: Clone + Eq + Hash>(occurrences: &Occurrences<T>) -> UniqueMapping<T> {
    let mut ranked: Vec<&(T, usize)> = occurrences.iter().collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1));

    let mut slots: Vec<usize> = (0..ranked.len()).collect();
    slots.sort_by_key(|&slot| uint(slot).len());

    let mut values: Vec<Option<T>> = vec![None; ranked.len()];
    let mut index = HashMap::with_capacity(ranked.len());
    for (rank, (value, _)) in ranked.into_iter().enumerate() {
        values[slots[rank]] = Some(value.clone());
        index.insert(value.clone(), slots[rank]);
    }

    UniqueMapping {
        values: values.into_iter().flatten().collect(),
        index,
    }
}
