use std::{fmt, str::FromStr};

use serde::{Serialize, Deserialize};
use thiserror::Error;

use crate::error::{HuffmanError, Result};

/// An ordered sequence of bits, printed and parsed as a string of `'0'`/`'1'`.
///
/// Used both for single codewords and for whole encoded messages. Ordering is
/// lexicographic with `0 < 1`, the same as comparing the textual forms.
#[derive(Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct BitString {
    bits: Vec<bool>,
}

impl BitString {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self { bits: Vec::with_capacity(capacity) }
    }

    /// The `len` low bits of `value`, most significant first.
    pub fn from_value(value: u64, len: usize) -> Self {
        assert!(len <= 64, "Cannot take {} bits from an integer", len);
        (0..len).rev().map(|i| (value >> i) & 1 == 1).collect()
    }

    #[inline(always)]
    pub fn len(&self) -> usize {
        self.bits.len()
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    #[inline(always)]
    pub fn push(&mut self, bit: bool) {
        self.bits.push(bit);
    }

    #[inline(always)]
    pub fn extend_from(&mut self, other: &BitString) {
        self.bits.extend_from_slice(&other.bits);
    }

    #[inline(always)]
    pub fn clear(&mut self) {
        self.bits.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = bool> + '_ {
        self.bits.iter().copied()
    }

    pub fn is_prefix_of(&self, other: &BitString) -> bool {
        other.bits.starts_with(&self.bits)
    }

    pub(crate) fn reverse(&mut self) {
        self.bits.reverse();
    }

    /// Adds one to the bits read as a binary number, keeping the length.
    /// Returns `false` (leaving all zeros) when the value overflows.
    pub(crate) fn increment(&mut self) -> bool {
        for bit in self.bits.iter_mut().rev() {
            *bit = !*bit;
            if *bit {
                return true;
            }
        }
        false
    }

    /// Packs the bits into bytes, most significant bit first.
    pub fn pack(&self) -> PackedBits {
        let mut writer = BinaryWriterBuilder::new();
        for chunk in self.bits.chunks(64) {
            let word = chunk.iter().fold(0u64, |acc, &bit| (acc << 1) | bit as u64);
            writer.push_bits(word, chunk.len() as u64);
        }
        writer.build()
    }
}

impl fmt::Display for BitString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &bit in self.bits.iter() {
            f.write_str(if bit { "1" } else { "0" })?;
        }
        Ok(())
    }
}

impl fmt::Debug for BitString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BitString(\"{}\")", self)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unexpected character {found:?} at index {index}, expected '0' or '1'")]
pub struct ParseBitStringError {
    pub index: usize,
    pub found: char,
}

impl FromStr for BitString {
    type Err = ParseBitStringError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let mut bits = BitString::with_capacity(s.len());
        for (index, c) in s.chars().enumerate() {
            match c {
                '0' => bits.push(false),
                '1' => bits.push(true),
                found => return Err(ParseBitStringError { index, found }),
            }
        }
        Ok(bits)
    }
}

impl FromIterator<bool> for BitString {
    fn from_iter<I: IntoIterator<Item = bool>>(iter: I) -> Self {
        Self { bits: iter.into_iter().collect() }
    }
}

impl Extend<bool> for BitString {
    fn extend<I: IntoIterator<Item = bool>>(&mut self, iter: I) {
        self.bits.extend(iter);
    }
}

/// A bit string packed into bytes. `len` is the number of meaningful bits,
/// the padding of the last byte is zero.
#[derive(Clone, Eq, PartialEq, Serialize, Deserialize, Debug)]
pub struct PackedBits {
    pub len: usize,
    pub bytes: Box<[u8]>,
}

impl PackedBits {
    pub fn unpack(&self) -> Result<BitString> {
        if self.len > self.bytes.len() * 8 {
            return Err(HuffmanError::TruncatedInput {
                position: self.bytes.len() * 8,
                dangling: self.len - self.bytes.len() * 8,
            });
        }

        let mut reader = BinaryReader::new(self.bytes.clone(), self.len);
        let mut bits = BitString::with_capacity(self.len);
        while reader.remaining() > 0 {
            let len = reader.remaining().min(64);
            let Some(word) = reader.read_int(len as u64) else {
                break;
            };
            bits.extend_from(&BitString::from_value(word, len));
        }
        Ok(bits)
    }
}

pub struct BinaryWriterBuilder {
    os: Vec<u8>,
    pub written_bits: usize,
    current: u64,
    free: usize,
}

impl Default for BinaryWriterBuilder {
    fn default() -> Self {
        BinaryWriterBuilder {
            os: Vec::default(),
            written_bits: 0,
            current: 0,
            free: 8,
        }
    }
}

impl BinaryWriterBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn build(mut self) -> PackedBits {
        if self.free < 8 {
            self.write(self.current);
        }

        PackedBits {
            len: self.written_bits,
            bytes: self.os.into_boxed_slice(),
        }
    }

    #[inline(always)]
    fn write(&mut self, b: u64) {
        self.os.push(b as u8);
    }

    #[inline(always)]
    fn write_in_current(&mut self, b: u64, len: u64) -> u64 {
        self.free -= len as usize;
        self.current |= (b & ((1 << len) - 1)) << self.free;

        if self.free == 0 {
            self.write(self.current);
            self.free = 8;
            self.current = 0;
        }

        self.written_bits += len as usize;
        len
    }

    /// Writes the `len` low bits of `x`, most significant first.
    pub fn push_bits(&mut self, x: u64, len: u64) -> u64 {
        assert!(len <= 64, "Cannot write {} bits from an integer", len);

        let mut remaining = len;
        while remaining > 0 {
            let take = remaining.min(self.free as u64);
            remaining -= take;
            self.write_in_current(x >> remaining, take);
        }

        len
    }
}

#[derive(Clone, Eq, PartialEq, Debug)]
pub struct BinaryReader {
    is: Box<[u8]>,
    position: usize,
    pub read_bits: usize,
    limit: usize,
    current: u64,
    fill: usize,
}

impl BinaryReader {
    /// A reader over the first `limit` bits of `input_stream`.
    pub fn new(input_stream: Box<[u8]>, limit: usize) -> Self {
        let limit = limit.min(input_stream.len() * 8);
        BinaryReader {
            is: input_stream,
            position: 0,
            read_bits: 0,
            limit,
            current: 0,
            fill: 0,
        }
    }

    #[inline(always)]
    pub fn remaining(&self) -> usize {
        self.limit - self.read_bits
    }

    #[inline(always)]
    pub fn read_bit(&mut self) -> Option<bool> {
        if self.read_bits >= self.limit {
            return None;
        }

        if self.fill == 0 {
            self.current = self.is[self.position] as u64;
            self.position += 1;
            self.fill = 8;
        }

        self.fill -= 1;
        self.read_bits += 1;
        Some((self.current >> self.fill) & 1 == 1)
    }

    /// Reads `len` bits as an integer, most significant first.
    pub fn read_int(&mut self, len: u64) -> Option<u64> {
        assert!(len <= 64, "Cannot read {} bits into an integer", len);

        if (len as usize) > self.remaining() {
            return None;
        }

        let mut x = 0;
        for _ in 0..len {
            x = (x << 1) | self.read_bit()? as u64;
        }
        Some(x)
    }
}

#[cfg(test)]
mod tests;
