use thiserror::Error;

#[derive(Error, Debug)]
pub enum CipherError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid ciphertext: {found:?} at position {position}. Expected uppercase A-Z only")]
    InvalidCiphertext { position: usize, found: char },

    #[error("Invalid key file: {0}")]
    InvalidKeyFile(String),

    #[error("Invalid shift: {0}")]
    InvalidShift(String),

    #[error("Input contains no letters to analyze")]
    NoLetters,

    #[error("Shift required: pass --shift or --key")]
    ShiftRequired,
}

pub type Result<T> = std::result::Result<T, CipherError>;
