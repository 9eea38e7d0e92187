use std::{collections::HashMap, fmt::{Display, Write}};

use crate::{bitstreams::BitString, code_table::CodeTable, error::{HuffmanError, Result}};

/// Reads symbols back by matching growing prefixes of the input against the
/// inverted code table.
///
/// Because the table is prefix-free, the first exact match is the only
/// possible one, so a symbol is emitted as soon as its code is complete.
/// A candidate that grows past the longest code cannot match anything.
#[derive(Clone, Debug)]
pub struct Decoder<S> {
    codes: HashMap<BitString, S>,
    max_len: usize,
}

impl<S: Clone> Decoder<S> {
    pub fn new(table: &CodeTable<S>) -> Self
    where
        S: Ord,
    {
        let codes = table.iter().map(|(symbol, code)| (code.clone(), symbol.clone())).collect();
        Self { codes, max_len: table.max_code_len() }
    }

    /// Calls `emit` for each decoded symbol, in order.
    fn scan<F>(&self, bits: &BitString, mut emit: F) -> Result<()>
    where
        F: FnMut(&S),
    {
        let mut candidate = BitString::with_capacity(self.max_len);
        let mut start = 0;

        for (i, bit) in bits.iter().enumerate() {
            candidate.push(bit);

            if let Some(symbol) = self.codes.get(&candidate) {
                emit(symbol);
                candidate.clear();
                start = i + 1;
            } else if candidate.len() >= self.max_len {
                return Err(HuffmanError::UnknownCode { position: start });
            }
        }

        if !candidate.is_empty() {
            return Err(HuffmanError::TruncatedInput { position: start, dangling: candidate.len() });
        }

        Ok(())
    }

    pub fn decode(&self, bits: &BitString) -> Result<Vec<S>> {
        let mut out = Vec::new();
        self.scan(bits, |symbol| out.push(symbol.clone()))?;
        Ok(out)
    }

    /// Decodes into text, writing `separator` between consecutive symbols.
    pub fn decode_with_separator(&self, bits: &BitString, separator: &str) -> Result<String>
    where
        S: Display,
    {
        let mut out = String::new();
        let mut first = true;

        self.scan(bits, |symbol| {
            if !first {
                out.push_str(separator);
            }
            first = false;
            // Writing to a String cannot fail.
            let _ = write!(out, "{}", symbol);
        })?;

        Ok(out)
    }
}

pub fn decode<S: Ord + Clone>(bits: &BitString, table: &CodeTable<S>) -> Result<Vec<S>> {
    Decoder::new(table).decode(bits)
}

pub fn decode_with_separator<S>(bits: &BitString, table: &CodeTable<S>, separator: &str) -> Result<String>
where
    S: Ord + Clone + Display,
{
    Decoder::new(table).decode_with_separator(bits, separator)
}
