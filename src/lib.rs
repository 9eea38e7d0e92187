//! Huffman prefix codes over arbitrary symbols.
//!
//! Count the symbols of a training sequence, build a code table from the
//! counts, then encode and decode sequences with it:
//!
//! ```
//! use huffman_rust::{build_code, count_frequencies, decode_with_separator, encode};
//!
//! let text = "hello world";
//! let table = build_code(&count_frequencies(text.chars()))?;
//! let bits = encode(text.chars(), &table)?;
//!
//! assert_eq!(bits.len(), 32);
//! assert_eq!(decode_with_separator(&bits, &table, "")?, text);
//! # Ok::<(), huffman_rust::HuffmanError>(())
//! ```

pub mod error;
pub mod bitstreams;
pub mod frequency;
pub mod huffman;
pub mod code_table;
pub mod coding;
pub mod tokens;
pub mod properties;
pub mod report;

pub use error::{HuffmanError, Result};
pub use bitstreams::{BitString, PackedBits};
pub use frequency::{accumulate_frequencies, count_frequencies, FrequencyTable};
pub use huffman::{build_code, huffman_code};
pub use code_table::{CodeTable, store::{CodeTableStore, FileStore, TableFormat}, text::{deserialize_code_table, serialize_code_table}};
pub use coding::{decode, decode_with_separator, encode, Decoder, Encoder};
pub use tokens::Tokenizer;
