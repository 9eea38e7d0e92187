//! The line-oriented code table format: one `<symbol>: <code>` per line,
//! UTF-8, no header and no escaping.
//!
//! Lines are split on the *last* `": "`, so symbols may contain colons (or
//! the delimiter itself) since codes never do. Symbols containing a line
//! break cannot be written in this format.

use std::{collections::BTreeMap, fmt::{Display, Write}, str::FromStr};

use crate::{bitstreams::BitString, error::{HuffmanError, Result}};

use super::CodeTable;

pub const DELIMITER: &str = ": ";

/// Writes the table in canonical order (code length, then symbol), so equal
/// tables always serialize to the same bytes.
pub fn serialize_code_table<S>(table: &CodeTable<S>) -> Result<String>
where
    S: Ord + Display,
{
    let mut out = String::new();

    for (line, (symbol, code)) in table.canonical_entries().into_iter().enumerate() {
        let symbol = symbol.to_string();
        if symbol.contains(|c: char| c == '\n' || c == '\r') {
            return Err(HuffmanError::Format {
                line: line + 1,
                reason: format!("symbol {:?} contains a line break", symbol),
            });
        }

        // Writing to a String cannot fail.
        let _ = writeln!(out, "{}{}{}", symbol, DELIMITER, code);
    }

    Ok(out)
}

pub fn deserialize_code_table<S>(text: &str) -> Result<CodeTable<S>>
where
    S: Ord + FromStr,
{
    let mut codes = BTreeMap::new();
    let mut lines = BTreeMap::new();

    for (i, raw_line) in text.lines().enumerate() {
        let line = i + 1;
        let malformed = |reason: String| HuffmanError::Format { line, reason };

        let (symbol_text, code_text) = raw_line
            .rsplit_once(DELIMITER)
            .ok_or_else(|| malformed(format!("missing {:?} delimiter", DELIMITER)))?;

        if code_text.is_empty() {
            return Err(malformed("empty code".to_string()));
        }

        let code: BitString = code_text.parse().map_err(|e| malformed(format!("bad code: {}", e)))?;
        let symbol: S = symbol_text
            .parse()
            .map_err(|_| malformed(format!("cannot parse symbol {:?}", symbol_text)))?;

        if codes.insert(symbol, code.clone()).is_some() {
            return Err(malformed(format!("duplicate symbol {:?}", symbol_text)));
        }
        lines.insert(code, line);
    }

    let table = CodeTable::from_map_unchecked(codes);

    if let Some((prefix, code)) = table.prefix_conflict() {
        return Err(HuffmanError::Format {
            line: lines.get(code).copied().unwrap_or(0),
            reason: format!("code {} has the code {} as a prefix", code, prefix),
        });
    }

    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::huffman::huffman_code;

    #[test]
    fn test_serialize_hello_world() {
        let table = huffman_code("hello world".chars()).unwrap();

        let text = serialize_code_table(&table).unwrap();

        assert_eq!(text, "l: 10\no: 00\nr: 010\nw: 011\n : 1100\nd: 1101\ne: 1110\nh: 1111\n");
    }

    #[test]
    fn test_round_trip_chars() {
        let table = huffman_code("the quick brown fox: jumps over the lazy dog".chars()).unwrap();

        let text = serialize_code_table(&table).unwrap();
        let parsed: CodeTable<char> = deserialize_code_table(&text).unwrap();

        assert_eq!(parsed, table);
    }

    #[test]
    fn test_round_trip_delimiter_symbols() {
        let symbols = vec![":", ": ", "a: b", " ", "", "x"].into_iter().map(String::from);
        let table = huffman_code(symbols).unwrap();

        let text = serialize_code_table(&table).unwrap();
        let parsed: CodeTable<String> = deserialize_code_table(&text).unwrap();

        assert_eq!(parsed, table);
    }

    #[test]
    fn test_serialize_rejects_line_breaks() {
        let table = huffman_code(vec!["a".to_string(), "b\nc".to_string()]).unwrap();

        assert!(matches!(serialize_code_table(&table), Err(HuffmanError::Format { .. })));
    }

    #[test]
    fn test_windows_line_endings() {
        let parsed: CodeTable<char> = deserialize_code_table("a: 0\r\nb: 1\r\n").unwrap();

        assert_eq!(parsed.get(&'b').unwrap().to_string(), "1");
    }

    #[test]
    fn test_empty_text_is_empty_table() {
        let parsed: CodeTable<char> = deserialize_code_table("").unwrap();

        assert!(parsed.is_empty());
    }

    fn format_error_line(text: &str) -> usize {
        match deserialize_code_table::<String>(text) {
            Err(HuffmanError::Format { line, .. }) => line,
            other => panic!("expected a format error, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_delimiter() {
        assert_eq!(format_error_line("a: 0\nb 1\n"), 2);
        assert_eq!(format_error_line("a: 0\n\nb: 1\n"), 2);
    }

    #[test]
    fn test_empty_code() {
        assert_eq!(format_error_line("a: \n"), 1);
    }

    #[test]
    fn test_bad_code_characters() {
        assert_eq!(format_error_line("a: 0\nb: 12\n"), 2);
    }

    #[test]
    fn test_duplicate_symbol() {
        assert_eq!(format_error_line("a: 0\nb: 10\na: 11\n"), 3);
    }

    #[test]
    fn test_prefix_conflict() {
        assert_eq!(format_error_line("a: 0\nb: 1\nc: 10\n"), 3);
    }

    #[test]
    fn test_unparsable_symbol() {
        assert!(matches!(
            deserialize_code_table::<char>("ab: 0\n"),
            Err(HuffmanError::Format { line: 1, .. })
        ));
    }
}
