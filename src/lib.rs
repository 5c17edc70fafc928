//! Caesar - fixed-shift substitution cipher
//!
//! Every ASCII letter is rotated by a fixed offset around the 26-letter
//! alphabet. Encryption first normalizes the plaintext (drops everything that
//! is not a letter and uppercases the rest); decryption applies the inverse
//! rotation to ciphertext that is assumed to be normalized already.
//!
//! This offers no security: there are only 26 keys, and [`analysis::crack`]
//! recovers the shift from letter frequencies.
//!
//! ## Example
//!
//! ```
//! use caesar::{Cipher, ShiftCipher};
//!
//! let cipher = ShiftCipher::new(1);
//! assert_eq!(cipher.encrypt("Hello World!"), "IFMMPXPSME");
//! assert_eq!(cipher.decrypt("IFMMPXPSME"), "HELLOWORLD");
//! ```

pub mod analysis;
pub mod cipher;
pub mod cli;
pub mod error;
pub mod key;
pub mod text;

pub use cipher::{Cipher, ShiftCipher};
pub use error::{CipherError, Result};
pub use key::KeyFile;
pub use text::{encrypt_raw, normalize, shift_char};
