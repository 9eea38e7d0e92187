use std::{collections::HashMap, fs::File, io::BufReader, path::{Path, PathBuf}};

use crate::{code_table::store::TableFormat, error::{HuffmanError, Result}, tokens::Tokenizer};

/// Settings shared by the command-line tools, read from a Java-style
/// `.properties` file. Every key is optional.
///
/// ```text
/// tokenizer=words
/// format=text
/// table=data/huffman_code_text.data
/// separator=
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Properties {
    pub tokenizer: Tokenizer,
    pub format: TableFormat,
    pub table: Option<PathBuf>,
    /// Overrides the tokenizer's separator when decoding.
    pub separator: Option<String>,
}

impl Properties {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path.as_ref())?;
        let map = java_properties::read(BufReader::new(file))
            .map_err(|e| HuffmanError::Properties(format!("{}: {}", path.as_ref().display(), e)))?;

        Self::try_from(map)
    }

    /// Replaces the settings given explicitly on the command line.
    pub fn apply_overrides(
        &mut self,
        tokenizer: Option<Tokenizer>,
        format: Option<TableFormat>,
        table: Option<PathBuf>,
        separator: Option<String>,
    ) {
        if let Some(tokenizer) = tokenizer {
            self.tokenizer = tokenizer;
        }
        if let Some(format) = format {
            self.format = format;
        }
        if table.is_some() {
            self.table = table;
        }
        if separator.is_some() {
            self.separator = separator;
        }
    }

    /// The separator to use when decoding.
    pub fn separator(&self) -> &str {
        self.separator.as_deref().unwrap_or(self.tokenizer.separator())
    }
}

impl TryFrom<HashMap<String, String>> for Properties {
    type Error = HuffmanError;

    fn try_from(value: HashMap<String, String>) -> Result<Self> {
        let mut props = Properties::default();

        if let Some(tokenizer) = value.get("tokenizer") {
            props.tokenizer = tokenizer.parse()?;
        }
        if let Some(format) = value.get("format") {
            props.format = format.parse()?;
        }
        if let Some(table) = value.get("table") {
            if !table.trim().is_empty() {
                props.table = Some(PathBuf::from(table.trim()));
            }
        }
        if let Some(separator) = value.get("separator") {
            props.separator = Some(separator.clone());
        }

        Ok(props)
    }
}

impl From<Properties> for String {
    fn from(val: Properties) -> Self {
        let mut s = String::new();

        s.push_str("#Huffman code properties\n");
        s.push_str(&format!("tokenizer={}\n", val.tokenizer));
        s.push_str(&format!("format={}\n", val.format));
        if let Some(table) = val.table {
            s.push_str(&format!("table={}\n", table.display()));
        }
        if let Some(separator) = val.separator {
            s.push_str(&format!("separator={}\n", separator));
        }

        s
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;

    #[test]
    fn test_defaults() {
        let props = Properties::try_from(HashMap::new()).unwrap();

        assert_eq!(props, Properties::default());
        assert_eq!(props.separator(), "");
    }

    #[test]
    fn test_parse_map() {
        let map = HashMap::from([
            ("tokenizer".to_string(), "whitespace".to_string()),
            ("format".to_string(), "binary".to_string()),
            ("table".to_string(), "pixels.bin".to_string()),
        ]);

        let props = Properties::try_from(map).unwrap();

        assert_eq!(props.tokenizer, Tokenizer::Whitespace);
        assert_eq!(props.format, TableFormat::Binary);
        assert_eq!(props.table, Some(PathBuf::from("pixels.bin")));
        assert_eq!(props.separator(), " ");
    }

    #[test]
    fn test_overrides() {
        let mut props = Properties {
            tokenizer: Tokenizer::Words,
            table: Some(PathBuf::from("from_file.data")),
            ..Default::default()
        };

        props.apply_overrides(None, Some(TableFormat::Binary), None, Some(",".to_string()));

        assert_eq!(props.tokenizer, Tokenizer::Words);
        assert_eq!(props.format, TableFormat::Binary);
        assert_eq!(props.table, Some(PathBuf::from("from_file.data")));
        assert_eq!(props.separator(), ",");
    }

    #[test]
    fn test_bad_value() {
        let map = HashMap::from([("format".to_string(), "xml".to_string())]);

        assert!(matches!(Properties::try_from(map), Err(HuffmanError::Properties(_))));
    }

    #[test]
    fn test_load_file_written_by_to_string() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("huffman.properties");

        let props = Properties {
            tokenizer: Tokenizer::Words,
            format: TableFormat::Text,
            table: Some(PathBuf::from("data/words.data")),
            separator: Some("|".to_string()),
        };
        fs::write(&path, String::from(props.clone())).unwrap();

        assert_eq!(Properties::load(&path).unwrap(), props);
    }
}
