use std::{cmp::{Ordering, Reverse}, collections::{BTreeMap, BinaryHeap}, hash::Hash};

use crate::{bitstreams::BitString, code_table::CodeTable, error::{HuffmanError, Result}, frequency::{count_frequencies, FrequencyTable}};

pub mod canonical;

/// A node of the merge queue: its cumulative weight, the smallest symbol
/// beneath it (which breaks weight ties) and the (symbol, partial code)
/// pairs beneath it.
///
/// Partial codes grow from the leaf towards the root, so they are stored
/// reversed and flipped once the last merge is done.
struct HeapNode<S> {
    weight: u64,
    key: S,
    pairs: Vec<(S, BitString)>,
}

impl<S: Ord + Clone> HeapNode<S> {
    fn leaf(symbol: S, weight: u64) -> Self {
        Self { weight, key: symbol.clone(), pairs: vec![(symbol, BitString::new())] }
    }

    /// `lo` goes under the `0` branch, `hi` under the `1` branch.
    fn merge(lo: Self, hi: Self) -> Result<Self> {
        let weight = lo.weight.checked_add(hi.weight)
            .ok_or_else(|| HuffmanError::InvalidInput("total frequency overflows u64".to_string()))?;
        let key = lo.key.min(hi.key);

        let mut pairs = lo.pairs;
        for (_, code) in pairs.iter_mut() {
            code.push(false);
        }
        let split = pairs.len();
        pairs.extend(hi.pairs);
        for (_, code) in pairs[split..].iter_mut() {
            code.push(true);
        }

        Ok(Self { weight, key, pairs })
    }

    fn into_table(self) -> CodeTable<S> {
        let codes: BTreeMap<S, BitString> = self.pairs.into_iter()
            .map(|(symbol, mut code)| {
                if code.is_empty() {
                    // A lone symbol still needs one bit to be decodable.
                    code.push(false);
                }
                code.reverse();
                (symbol, code)
            })
            .collect();

        CodeTable::from_map_unchecked(codes)
    }
}

// Nodes in the queue hold disjoint symbol sets, so their keys never tie and
// the order is total.
impl<S: Ord> Ord for HeapNode<S> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.weight.cmp(&other.weight).then_with(|| self.key.cmp(&other.key))
    }
}

impl<S: Ord> PartialOrd for HeapNode<S> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<S: Ord> Eq for HeapNode<S> {}

impl<S: Ord> PartialEq for HeapNode<S> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

/// Builds an optimal prefix code for `freq`.
///
/// Nodes are popped in `(weight, smallest symbol)` order, so the result
/// depends only on the contents of `freq`, never on the iteration order of
/// the map.
///
/// Fails with [`HuffmanError::InvalidInput`] if `freq` is empty.
pub fn build_code<S>(freq: &FrequencyTable<S>) -> Result<CodeTable<S>>
where
    S: Ord + Hash + Clone,
{
    let mut freq_tree = BinaryHeap::with_capacity(freq.len());
    for (symbol, &weight) in freq.iter() {
        freq_tree.push(Reverse(HeapNode::leaf(symbol.clone(), weight)));
    }

    while let Some(Reverse(lo)) = freq_tree.pop() {
        let Some(Reverse(hi)) = freq_tree.pop() else {
            return Ok(lo.into_table());
        };

        freq_tree.push(Reverse(HeapNode::merge(lo, hi)?));
    }

    Err(HuffmanError::InvalidInput("cannot build a code from an empty frequency table".to_string()))
}

/// Counts `symbols` and builds the code for them in one go.
pub fn huffman_code<S, I>(symbols: I) -> Result<CodeTable<S>>
where
    S: Ord + Hash + Clone,
    I: IntoIterator<Item = S>,
{
    build_code(&count_frequencies(symbols))
}
