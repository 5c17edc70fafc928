use crate::error::{CipherError, Result};
use crate::text::{encrypt_raw, normalize, rotation, ALPHABET_LEN};

/// A reversible text transformation
pub trait Cipher {
    fn encrypt(&self, plain_text: &str) -> String;
    fn decrypt(&self, cipher_text: &str) -> String;
}

/// Monoalphabetic cipher rotating every letter by a fixed offset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ShiftCipher {
    offset: i64,
}

impl ShiftCipher {
    /// Any offset is accepted; only `offset mod 26` matters
    pub fn new(offset: i64) -> Self {
        Self { offset }
    }

    pub fn offset(&self) -> i64 {
        self.offset
    }

    /// Effective rotation in `0..26`
    pub fn rotation(&self) -> u8 {
        rotation(self.offset)
    }

    /// Cipher whose encryption undoes this one on normalized text
    pub fn inverse(&self) -> Self {
        Self::new(-(self.offset % ALPHABET_LEN))
    }

    /// Like [`Cipher::decrypt`], but rejects anything outside `A..=Z`
    /// instead of passing it through.
    pub fn decrypt_strict(&self, cipher_text: &str) -> Result<String> {
        if let Some((position, found)) = cipher_text
            .chars()
            .enumerate()
            .find(|(_, c)| !c.is_ascii_uppercase())
        {
            return Err(CipherError::InvalidCiphertext { position, found });
        }
        Ok(self.decrypt(cipher_text))
    }
}

impl Cipher for ShiftCipher {
    fn encrypt(&self, plain_text: &str) -> String {
        encrypt_raw(&normalize(plain_text), self.offset)
    }

    /// Ciphertext is expected to be normalized already; it is not re-normalized
    fn decrypt(&self, cipher_text: &str) -> String {
        encrypt_raw(cipher_text, -(self.offset % ALPHABET_LEN))
    }
}
