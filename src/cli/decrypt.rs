use crate::cipher::Cipher;
use crate::cli::{read_input, write_output, KeySource};
use crate::error::Result;
use std::path::PathBuf;

/// Options for the decrypt command
#[derive(Debug, Clone, Default)]
pub struct DecryptOptions {
    pub key: KeySource,
    pub input: Option<PathBuf>,
    pub output: Option<PathBuf>,
    /// Reject ciphertext containing anything but `A-Z`
    pub strict: bool,
}

/// Decrypt the input. Trailing line endings are dropped first; nothing else is normalized.
pub fn run_decrypt(options: &DecryptOptions) -> Result<Option<String>> {
    let cipher = options.key.resolve()?;
    let input = read_input(options.input.as_deref())?;
    let cipher_text = input.trim_end_matches(&['\r', '\n'][..]);

    let plain_text = if options.strict {
        cipher.decrypt_strict(cipher_text)?
    } else {
        if cipher_text.chars().any(|c| !c.is_ascii_uppercase()) {
            log::warn!("Ciphertext is not normalized; non A-Z characters are passed through");
        }
        cipher.decrypt(cipher_text)
    };
    log::info!("Decrypted {} chars with rotation {}", plain_text.len(), cipher.rotation());

    write_output(options.output.as_deref(), &plain_text)
}
