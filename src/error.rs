use thiserror::Error;

#[derive(Debug, Error)]
pub enum HuffmanError {
    /// The frequency table (or length table) cannot produce a code.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("symbol {symbol} at position {position} is not in the code table")]
    UnknownSymbol { symbol: String, position: usize },

    /// No code matched within the longest code length, starting at bit `position`.
    #[error("no code matches the bits starting at offset {position}")]
    UnknownCode { position: usize },

    /// The input ended in the middle of a code.
    #[error("input truncated: {dangling} unmatched bit(s) starting at offset {position}")]
    TruncatedInput { position: usize, dangling: usize },

    #[error("malformed code table at line {line}: {reason}")]
    Format { line: usize, reason: String },

    #[error("invalid properties: {0}")]
    Properties(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("bincode error: {0}")]
    Bincode(#[from] bincode::Error),
}

pub type Result<T> = std::result::Result<T, HuffmanError>;
