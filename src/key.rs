use crate::cipher::ShiftCipher;
use crate::error::{CipherError, Result};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// On-disk key: `{"shift": <integer>}`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct KeyFile {
    pub shift: i64,
}

impl KeyFile {
    pub fn new(shift: i64) -> Self {
        Self { shift }
    }

    /// Pick a shift uniformly from `1..=25`, so the key never encrypts to the plaintext
    pub fn random() -> Self {
        Self::new(rand::thread_rng().gen_range(1..=25))
    }

    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        serde_json::from_str(&contents).map_err(|e| {
            CipherError::InvalidKeyFile(format!("{}: {}", path.display(), e))
        })
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        std::fs::write(path, self.to_json()?)?;
        Ok(())
    }

    pub fn to_json(&self) -> Result<String> {
        let mut json = serde_json::to_string_pretty(self)?;
        json.push('\n');
        Ok(json)
    }

    pub fn cipher(&self) -> ShiftCipher {
        ShiftCipher::new(self.shift)
    }
}

/// Parse a shift given either as an integer (`3`, `-1`, `+27`)
/// or as a single key letter (`D` or `d` = 3).
pub fn parse_shift(s: &str) -> Result<i64> {
    let s = s.trim();
    let mut chars = s.chars();
    if let (Some(c), None) = (chars.next(), chars.next()) {
        if c.is_ascii_alphabetic() {
            return Ok((c.to_ascii_uppercase() as u8 - b'A') as i64);
        }
    }

    s.parse::<i64>()
        .map_err(|e| CipherError::InvalidShift(format!("{:?}: {}", s, e)))
}
