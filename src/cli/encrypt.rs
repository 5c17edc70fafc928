use crate::cipher::Cipher;
use crate::cli::{read_input, write_output, KeySource};
use crate::error::Result;
use std::path::PathBuf;

/// Options for the encrypt command
#[derive(Debug, Clone, Default)]
pub struct EncryptOptions {
    pub key: KeySource,
    /// Plaintext file; stdin when absent
    pub input: Option<PathBuf>,
    /// Ciphertext file; returned for printing when absent
    pub output: Option<PathBuf>,
}

/// Encrypt the input. Returns the ciphertext unless it was written to a file.
pub fn run_encrypt(options: &EncryptOptions) -> Result<Option<String>> {
    let cipher = options.key.resolve()?;
    let plain_text = read_input(options.input.as_deref())?;

    let cipher_text = cipher.encrypt(&plain_text);
    log::info!(
        "Encrypted {} chars into {} letters with rotation {}",
        plain_text.chars().count(),
        cipher_text.len(),
        cipher.rotation()
    );

    write_output(options.output.as_deref(), &cipher_text)
}
