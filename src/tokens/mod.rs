use std::{fmt::{self, Display}, str::FromStr};

use serde::{Serialize, Deserialize};

use crate::error::HuffmanError;

/// How a text is cut into symbols before counting and encoding.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
pub enum Tokenizer {
    /// One symbol per character
    #[default]
    Chars,
    /// Words split on single spaces, with each space kept as its own symbol
    Words,
    /// Whitespace-separated tokens (e.g. `12-40-255` pixel triplets)
    Whitespace,
}

impl Tokenizer {
    pub fn tokenize(&self, text: &str) -> Vec<String> {
        match self {
            Tokenizer::Chars => text.chars().map(String::from).collect(),
            Tokenizer::Words => {
                let mut tokens = Vec::new();
                for (i, word) in text.split(' ').enumerate() {
                    if i > 0 {
                        tokens.push(" ".to_string());
                    }
                    tokens.push(word.to_string());
                }
                tokens
            }
            Tokenizer::Whitespace => text.split_whitespace().map(String::from).collect(),
        }
    }

    /// The separator that turns decoded tokens back into text.
    pub fn separator(&self) -> &'static str {
        match self {
            Tokenizer::Chars | Tokenizer::Words => "",
            Tokenizer::Whitespace => " ",
        }
    }
}

impl FromStr for Tokenizer {
    type Err = HuffmanError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "chars" => Ok(Tokenizer::Chars),
            "words" => Ok(Tokenizer::Words),
            "whitespace" => Ok(Tokenizer::Whitespace),
            other => Err(HuffmanError::Properties(format!("unknown tokenizer {}", other))),
        }
    }
}

impl Display for Tokenizer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Tokenizer::Chars => write!(f, "chars"),
            Tokenizer::Words => write!(f, "words"),
            Tokenizer::Whitespace => write!(f, "whitespace"),
        }
    }
}
