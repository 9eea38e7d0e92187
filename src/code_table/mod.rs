use std::{borrow::Borrow, collections::{BTreeMap, btree_map}, hash::Hash};

use crate::{bitstreams::BitString, error::{HuffmanError, Result}, frequency::FrequencyTable};

pub mod text;
pub mod store;

/// A prefix-free mapping from symbols to non-empty codewords.
///
/// Tables are built once (by [`crate::huffman::build_code`], by parsing, or
/// from code lengths) and never modified afterwards, so a table can be shared
/// freely between encoders and decoders.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CodeTable<S: Ord> {
    codes: BTreeMap<S, BitString>,
}

impl<S: Ord> CodeTable<S> {
    /// Callers guarantee the codes are non-empty and prefix-free.
    pub(crate) fn from_map_unchecked(codes: BTreeMap<S, BitString>) -> Self {
        debug_assert!(codes.values().all(|code| !code.is_empty()));
        Self { codes }
    }

    /// Builds a table from explicit `(symbol, code)` pairs, checking that
    /// the result is a valid prefix code.
    pub fn from_entries<I>(entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = (S, BitString)>,
    {
        let mut codes = BTreeMap::new();

        for (symbol, code) in entries {
            if code.is_empty() {
                return Err(HuffmanError::InvalidInput("empty codeword".to_string()));
            }
            if codes.insert(symbol, code).is_some() {
                return Err(HuffmanError::InvalidInput("duplicate symbol".to_string()));
            }
        }

        let table = Self { codes };
        if let Some((prefix, code)) = table.prefix_conflict() {
            return Err(HuffmanError::InvalidInput(format!("code {} is a prefix of {}", prefix, code)));
        }
        Ok(table)
    }

    #[inline(always)]
    pub fn get<Q>(&self, symbol: &Q) -> Option<&BitString>
    where
        S: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.codes.get(symbol)
    }

    pub fn contains<Q>(&self, symbol: &Q) -> bool
    where
        S: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.codes.contains_key(symbol)
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    /// Entries in symbol order.
    pub fn iter(&self) -> btree_map::Iter<'_, S, BitString> {
        self.codes.iter()
    }

    /// Entries ordered by code length, then by symbol. This is the order in
    /// which tables are written out.
    pub fn canonical_entries(&self) -> Vec<(&S, &BitString)> {
        let mut entries: Vec<_> = self.codes.iter().collect();
        entries.sort_by(|first, second| first.1.len().cmp(&second.1.len()).then_with(|| first.0.cmp(second.0)));
        entries
    }

    pub fn max_code_len(&self) -> usize {
        self.codes.values().map(BitString::len).max().unwrap_or(0)
    }

    pub fn is_prefix_free(&self) -> bool {
        self.prefix_conflict().is_none()
    }

    /// Returns a pair of codes where the first is a prefix of the second.
    pub(crate) fn prefix_conflict(&self) -> Option<(&BitString, &BitString)> {
        let mut sorted: Vec<&BitString> = self.codes.values().collect();
        sorted.sort();

        // After sorting, a code that prefixes any other code prefixes its successor.
        sorted.windows(2).find(|w| w[0].is_prefix_of(w[1])).map(|w| (w[0], w[1]))
    }

    /// `sum(frequency * code length)` over the symbols of `freq`, i.e. the
    /// size in bits of a message with these frequencies. Symbols missing from
    /// the table are ignored.
    ///
    /// Counted in `u128`: a `u64` frequency times a code length always fits,
    /// and so does the sum, since the code lengths together fit in memory.
    pub fn weighted_length(&self, freq: &FrequencyTable<S>) -> u128
    where
        S: Hash,
    {
        freq.iter()
            .filter_map(|(symbol, &count)| self.codes.get(symbol).map(|code| count as u128 * code.len() as u128))
            .sum()
    }
}

impl<S: Ord + Clone> CodeTable<S> {
    pub fn code_lengths(&self) -> BTreeMap<S, usize> {
        self.codes.iter().map(|(symbol, code)| (symbol.clone(), code.len())).collect()
    }
}

impl<'a, S: Ord> IntoIterator for &'a CodeTable<S> {
    type Item = (&'a S, &'a BitString);
    type IntoIter = btree_map::Iter<'a, S, BitString>;

    fn into_iter(self) -> Self::IntoIter {
        self.codes.iter()
    }
}
