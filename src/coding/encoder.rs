use std::{borrow::Borrow, fmt::Debug};

use crate::{bitstreams::BitString, code_table::CodeTable, error::{HuffmanError, Result}};

/// Writes symbols with a borrowed code table.
pub struct Encoder<'a, S: Ord> {
    table: &'a CodeTable<S>,
    written_symbols: usize,
}

impl<'a, S: Ord + Debug> Encoder<'a, S> {
    pub fn new(table: &'a CodeTable<S>) -> Self {
        Self { table, written_symbols: 0 }
    }

    /// Number of symbols written by this encoder so far.
    pub fn written_symbols(&self) -> usize {
        self.written_symbols
    }

    /// Appends the code of `symbol` to `out` and returns its length.
    #[inline(always)]
    pub fn write_next(&mut self, symbol: &S, out: &mut BitString) -> Result<usize> {
        let code = self.table.get(symbol).ok_or_else(|| HuffmanError::UnknownSymbol {
            symbol: format!("{:?}", symbol),
            position: self.written_symbols,
        })?;

        out.extend_from(code);
        self.written_symbols += 1;
        Ok(code.len())
    }

    /// Concatenates the codes of `symbols`, failing on the first one missing
    /// from the table.
    pub fn encode<I, B>(&mut self, symbols: I) -> Result<BitString>
    where
        I: IntoIterator<Item = B>,
        B: Borrow<S>,
    {
        let mut out = BitString::new();
        for symbol in symbols {
            self.write_next(symbol.borrow(), &mut out)?;
        }
        Ok(out)
    }
}

pub fn encode<S, I, B>(symbols: I, table: &CodeTable<S>) -> Result<BitString>
where
    S: Ord + Debug,
    I: IntoIterator<Item = B>,
    B: Borrow<S>,
{
    Encoder::new(table).encode(symbols)
}
