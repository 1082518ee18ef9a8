use crate::error::{BumpError, Result};
use log::debug;
use plist::{Dictionary, Value};
use std::io::Cursor;
use std::path::Path;

const BINARY_MAGIC: &[u8] = b"bplist";

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum PlistFormat {
    Xml,
    Binary,
}

impl PlistFormat {
    pub fn detect(bytes: &[u8]) -> Self {
        if bytes.starts_with(BINARY_MAGIC) {
            PlistFormat::Binary
        } else {
            PlistFormat::Xml
        }
    }
}

/// The decoded root dictionary of a single plist file.
#[derive(Debug, Clone, PartialEq)]
pub struct PlistSnapshot {
    pub format: PlistFormat,
    pub dictionary: Dictionary,
}

impl PlistSnapshot {
    pub fn new(format: PlistFormat, dictionary: Dictionary) -> Self {
        Self { format, dictionary }
    }

    pub fn read(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let bytes = std::fs::read(path).map_err(|source| BumpError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::decode(path, &bytes)
    }

    /// `path` is only used to label errors.
    pub fn decode(path: &Path, bytes: &[u8]) -> Result<Self> {
        let format = PlistFormat::detect(bytes);
        debug!("Decoding '{}' as {:?} plist", path.display(), format);
        let value = Value::from_reader(Cursor::new(bytes)).map_err(|source| BumpError::Decode {
            path: path.to_path_buf(),
            source,
        })?;
        let dictionary = value
            .into_dictionary()
            .ok_or_else(|| BumpError::NotADictionary(path.to_path_buf()))?;
        Ok(Self { format, dictionary })
    }

    pub fn encode(&self, path: &Path) -> Result<Vec<u8>> {
        let mut buf = Vec::new();
        let value = Value::Dictionary(self.dictionary.clone());
        let encoded = match self.format {
            PlistFormat::Xml => value.to_writer_xml(&mut buf),
            PlistFormat::Binary => value.to_writer_binary(&mut buf),
        };
        encoded.map_err(|source| BumpError::Encode {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(buf)
    }

    /// Encodes fully before touching the file so a failed encode leaves it intact.
    pub fn write(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let bytes = self.encode(path)?;
        std::fs::write(path, bytes).map_err(|source| BumpError::Write {
            path: path.to_path_buf(),
            source,
        })?;
        debug!("Wrote '{}'", path.display());
        Ok(())
    }

    pub fn get_string(&self, key: &str) -> Option<&str> {
        self.dictionary.get(key).and_then(Value::as_string)
    }

    pub fn set_string(&mut self, key: &str, value: impl Into<String>) {
        self.dictionary.insert(key.to_string(), Value::String(value.into()));
    }
}
