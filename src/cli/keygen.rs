use crate::error::Result;
use crate::key::KeyFile;
use std::path::PathBuf;

/// Options for the keygen command
#[derive(Debug, Clone, Default)]
pub struct KeygenOptions {
    /// Key file to create; JSON is returned for printing when absent
    pub output: Option<PathBuf>,
    /// Use this shift instead of a random one
    pub shift: Option<i64>,
}

pub fn run_keygen(options: &KeygenOptions) -> Result<Option<String>> {
    let key = match options.shift {
        Some(shift) => KeyFile::new(shift),
        None => KeyFile::random(),
    };

    match &options.output {
        Some(path) => {
            key.save(path)?;
            log::info!("Saved key to {}", path.display());
            Ok(None)
        }
        None => Ok(Some(key.to_json()?)),
    }
}
