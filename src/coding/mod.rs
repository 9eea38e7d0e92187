pub mod encoder;
pub mod decoder;

pub use encoder::{encode, Encoder};
pub use decoder::{decode, decode_with_separator, Decoder};
