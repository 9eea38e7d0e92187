use std::fmt::{self, Display};

use serde::{Serialize, Deserialize};

/// Size summary of one compression run. Sizes are in bits; the original
/// size counts 8 bits per byte of UTF-8 input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompressionReport {
    pub symbols: usize,
    pub distinct_symbols: usize,
    pub original_bits: usize,
    pub encoded_bits: usize,
    pub ratio: f64,
    pub elapsed_ns: u64,
}

impl CompressionReport {
    pub fn new(symbols: usize, distinct_symbols: usize, original_bits: usize, encoded_bits: usize, elapsed_ns: u64) -> Self {
        Self {
            symbols,
            distinct_symbols,
            original_bits,
            encoded_bits,
            ratio: compression_ratio(original_bits, encoded_bits),
            elapsed_ns,
        }
    }
}

impl Display for CompressionReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "symbols: {} ({} distinct)", self.symbols, self.distinct_symbols)?;
        writeln!(f, "original length (bits): {}", self.original_bits)?;
        writeln!(f, "encoded length (bits): {}", self.encoded_bits)?;
        writeln!(f, "compression ratio: {:.2}%", self.ratio * 100.0)?;
        write!(f, "encoded in {}ns", self.elapsed_ns)
    }
}

/// `encoded / original`, or 0 for an empty input.
pub fn compression_ratio(original_bits: usize, encoded_bits: usize) -> f64 {
    if original_bits == 0 {
        return 0.0;
    }
    encoded_bits as f64 / original_bits as f64
}

#[test]
fn test_compression_ratio() {
    assert_eq!(compression_ratio(0, 10), 0.0);
    assert_eq!(compression_ratio(88, 32), 32.0 / 88.0);
    assert_eq!(compression_ratio(8, 8), 1.0);
}

#[test]
fn test_report_json() {
    let report = CompressionReport::new(11, 8, 88, 32, 1500);

    let json = serde_json::to_value(&report).unwrap();

    assert_eq!(json["encoded_bits"], 32);
    assert_eq!(json["distinct_symbols"], 8);
    assert!(report.to_string().contains("compression ratio: 36.36%"));
}
