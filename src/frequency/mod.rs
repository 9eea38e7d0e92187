use std::{collections::HashMap, hash::Hash};

/// Number of occurrences of each distinct symbol.
pub type FrequencyTable<S> = HashMap<S, u64>;

pub fn count_frequencies<S, I>(symbols: I) -> FrequencyTable<S>
where
    S: Eq + Hash,
    I: IntoIterator<Item = S>,
{
    let mut freq_map = FrequencyTable::new();
    accumulate_frequencies(&mut freq_map, symbols);
    freq_map
}

/// Adds the occurrences in `symbols` to an existing table, so that a corpus
/// can be counted one document at a time.
pub fn accumulate_frequencies<S, I>(freq_map: &mut FrequencyTable<S>, symbols: I)
where
    S: Eq + Hash,
    I: IntoIterator<Item = S>,
{
    for x in symbols {
        freq_map.entry(x).and_modify(|freq| *freq += 1).or_insert(1);
    }
}
