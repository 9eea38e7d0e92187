use std::{fmt::{self, Display}, fs::File, io::{BufReader, BufWriter, Read, Write}, path::{Path, PathBuf}, str::FromStr};

use log::debug;
use serde::{Serialize, Deserialize, de::DeserializeOwned};

use crate::{bitstreams::BitString, error::{HuffmanError, Result}};

use super::{CodeTable, text::{deserialize_code_table, serialize_code_table}};

/// Somewhere a code table can be saved to and loaded back from. Training and
/// compression code receive a store instead of assuming a file location.
pub trait CodeTableStore<S: Ord> {
    fn save(&self, table: &CodeTable<S>) -> Result<()>;
    fn load(&self) -> Result<CodeTable<S>>;
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
pub enum TableFormat {
    /// `<symbol>: <code>` lines
    #[default]
    Text,
    /// bincode-encoded entries, safe for any symbol
    Binary,
}

impl FromStr for TableFormat {
    type Err = HuffmanError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "text" => Ok(TableFormat::Text),
            "binary" => Ok(TableFormat::Binary),
            other => Err(HuffmanError::Properties(format!("unknown table format {}", other))),
        }
    }
}

impl Display for TableFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TableFormat::Text => write!(f, "text"),
            TableFormat::Binary => write!(f, "binary"),
        }
    }
}

/// Keeps a code table in a single file.
#[derive(Clone, Debug)]
pub struct FileStore {
    path: PathBuf,
    format: TableFormat,
}

impl FileStore {
    pub fn new<P: AsRef<Path>>(path: P, format: TableFormat) -> Self {
        Self { path: path.as_ref().to_path_buf(), format }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn format(&self) -> TableFormat {
        self.format
    }
}

impl<S> CodeTableStore<S> for FileStore
where
    S: Ord + Display + FromStr + Serialize + DeserializeOwned,
{
    fn save(&self, table: &CodeTable<S>) -> Result<()> {
        // Encode first so a table that cannot be written leaves the file untouched.
        let bytes = match self.format {
            TableFormat::Text => serialize_code_table(table)?.into_bytes(),
            TableFormat::Binary => bincode::serialize(&table.canonical_entries())?,
        };

        let mut writer = BufWriter::new(File::create(&self.path)?);
        writer.write_all(&bytes)?;
        writer.flush()?;
        debug!("Stored {} codes to {} ({})", table.len(), self.path.display(), self.format);
        Ok(())
    }

    fn load(&self) -> Result<CodeTable<S>> {
        let mut reader = BufReader::new(File::open(&self.path)?);

        let table = match self.format {
            TableFormat::Text => {
                let mut text = String::new();
                reader.read_to_string(&mut text)?;
                deserialize_code_table(&text)?
            }
            TableFormat::Binary => {
                let entries: Vec<(S, BitString)> = bincode::deserialize_from(&mut reader)?;
                CodeTable::from_entries(entries)?
            }
        };

        debug!("Loaded {} codes from {} ({})", table.len(), self.path.display(), self.format);
        Ok(table)
    }
}
