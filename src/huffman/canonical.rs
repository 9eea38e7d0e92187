use std::collections::BTreeMap;

use crate::{bitstreams::BitString, code_table::CodeTable, error::{HuffmanError, Result}};

/// Assigns canonical codewords: symbols sorted by (length, symbol) receive
/// consecutive binary values, shifted left whenever the length grows.
/// Returns `None` if the lengths violate Kraft's inequality.
fn assign_canonical<S: Ord>(mut lengths: Vec<(S, usize)>) -> Option<BTreeMap<S, BitString>> {
    lengths.sort_by(|first, second| first.1.cmp(&second.1).then_with(|| first.0.cmp(&second.0)));

    let mut codes = BTreeMap::new();
    let mut curr_code = BitString::new();

    for (i, (symbol, len)) in lengths.into_iter().enumerate() {
        if i > 0 && !curr_code.increment() {
            return None;
        }
        curr_code.extend(std::iter::repeat(false).take(len - curr_code.len()));
        codes.insert(symbol, curr_code.clone());
    }

    Some(codes)
}

impl<S: Ord + Clone> CodeTable<S> {
    /// Builds the canonical code for a symbol -> code length table.
    ///
    /// Fails with [`HuffmanError::InvalidInput`] if the table is empty, a
    /// length is zero, a symbol repeats, or the lengths cannot form a prefix
    /// code (`sum(2^-len) > 1`).
    pub fn from_code_lengths<I>(lengths: I) -> Result<Self>
    where
        I: IntoIterator<Item = (S, usize)>,
    {
        let lengths: Vec<(S, usize)> = lengths.into_iter().collect();

        if lengths.is_empty() {
            return Err(HuffmanError::InvalidInput("cannot build a code from an empty length table".to_string()));
        }
        if lengths.iter().any(|&(_, len)| len == 0) {
            return Err(HuffmanError::InvalidInput("code lengths must be positive".to_string()));
        }

        let count = lengths.len();
        let codes = assign_canonical(lengths)
            .ok_or_else(|| HuffmanError::InvalidInput("code lengths violate Kraft's inequality".to_string()))?;
        if codes.len() != count {
            return Err(HuffmanError::InvalidInput("duplicate symbol".to_string()));
        }

        Ok(CodeTable::from_map_unchecked(codes))
    }

    /// The canonical code with the same code lengths as this table. Encoded
    /// sizes are unchanged, and the result can be rebuilt from
    /// [`CodeTable::code_lengths`] alone.
    pub fn to_canonical(&self) -> CodeTable<S> {
        let codes = assign_canonical(self.code_lengths().into_iter().collect())
            .expect("prefix codes satisfy Kraft's inequality");
        CodeTable::from_map_unchecked(codes)
    }
}
