pub mod crack;
pub mod decrypt;
pub mod encrypt;
pub mod keygen;

pub use crack::*;
pub use decrypt::*;
pub use encrypt::*;
pub use keygen::*;

use crate::cipher::ShiftCipher;
use crate::error::{CipherError, Result};
use crate::key::KeyFile;
use std::io::Read;
use std::path::{Path, PathBuf};

/// Where the shift comes from. An explicit shift wins over a key file.
#[derive(Debug, Clone, Default)]
pub struct KeySource {
    pub shift: Option<i64>,
    pub key: Option<PathBuf>,
}

impl KeySource {
    pub fn resolve(&self) -> Result<ShiftCipher> {
        match (self.shift, &self.key) {
            (Some(shift), key) => {
                if let Some(path) = key {
                    log::warn!("Both --shift and --key given; ignoring {}", path.display());
                }
                Ok(ShiftCipher::new(shift))
            }
            (None, Some(path)) => {
                log::debug!("Loading key from {}", path.display());
                Ok(KeyFile::load(path)?.cipher())
            }
            (None, None) => Err(CipherError::ShiftRequired),
        }
    }
}

/// Read the whole input file, or stdin when no path is given
pub fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) => {
            log::debug!("Reading input from {}", path.display());
            Ok(std::fs::read_to_string(path)?)
        }
        None => {
            log::debug!("Reading input from stdin");
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
    }
}

/// Write `text` to `path`, or return it for printing when no path is given
pub fn write_output(path: Option<&Path>, text: &str) -> Result<Option<String>> {
    match path {
        Some(path) => {
            std::fs::write(path, text)?;
            log::info!("Wrote {} bytes to {}", text.len(), path.display());
            Ok(None)
        }
        None => Ok(Some(text.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_resolve_requires_shift_or_key() {
        let source = KeySource::default();
        assert!(matches!(source.resolve(), Err(CipherError::ShiftRequired)));
    }

    #[test]
    fn test_resolve_prefers_explicit_shift() {
        let dir = tempdir().unwrap();
        let key_path = dir.path().join("key.json");
        KeyFile::new(9).save(&key_path).unwrap();

        let source = KeySource {
            shift: Some(2),
            key: Some(key_path.clone()),
        };
        assert_eq!(source.resolve().unwrap().offset(), 2);

        let source = KeySource {
            shift: None,
            key: Some(key_path),
        };
        assert_eq!(source.resolve().unwrap().offset(), 9);
    }

    #[test]
    fn test_write_output_to_file_or_back() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("out.txt");

        assert_eq!(write_output(Some(&path), "ABC").unwrap(), None);
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "ABC");
        assert_eq!(write_output(None, "ABC").unwrap(), Some("ABC".to_string()));
    }
}
