//! Frequency analysis against English text.
//!
//! With only 26 possible keys a shift cipher falls to exhaustive search. Every
//! rotation is tried and scored by the chi-square distance between the
//! resulting letter distribution and typical English.

use crate::error::{CipherError, Result};
use crate::text::{encrypt_raw, normalize};
use serde::Serialize;

/// Relative letter frequencies of English text, A through Z
pub const ENGLISH_FREQUENCIES: [f64; 26] = [
    0.08167, 0.01492, 0.02782, 0.04253, 0.12702, 0.02228, 0.02015, 0.06094, 0.06966, 0.00153,
    0.00772, 0.04025, 0.02406, 0.06749, 0.07507, 0.01929, 0.00095, 0.05987, 0.06327, 0.09056,
    0.02758, 0.00978, 0.02360, 0.00150, 0.01974, 0.00074,
];

/// A decryption attempt with one particular shift
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Candidate {
    /// Shift the ciphertext was assumed to be encrypted with, in `0..26`
    pub shift: u8,
    pub plaintext: String,
    /// Chi-square distance to English; lower is better
    pub score: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct CrackReport {
    pub letters: usize,
    pub index_of_coincidence: f64,
    pub candidates: Vec<Candidate>,
}

/// Count ASCII letters, case-insensitively
pub fn letter_frequencies(text: &str) -> [u64; 26] {
    let mut counts = [0u64; 26];
    for c in text.chars().filter(char::is_ascii_alphabetic) {
        counts[(c.to_ascii_uppercase() as u8 - b'A') as usize] += 1;
    }
    counts
}

/// Chi-square goodness of fit against [`ENGLISH_FREQUENCIES`]
pub fn chi_square(counts: &[u64; 26]) -> f64 {
    let total: u64 = counts.iter().sum();
    if total == 0 {
        return 0.0;
    }

    counts
        .iter()
        .zip(ENGLISH_FREQUENCIES.iter())
        .map(|(&observed, &frequency)| {
            let expected = total as f64 * frequency;
            let diff = observed as f64 - expected;
            diff * diff / expected
        })
        .sum()
}

/// Probability that two letters drawn without replacement are equal.
/// English sits near 0.066, uniform noise near 0.038. A shift cipher leaves it unchanged.
pub fn index_of_coincidence(counts: &[u64; 26]) -> f64 {
    let total: u64 = counts.iter().sum();
    if total < 2 {
        return 0.0;
    }

    let pairs: u64 = counts.iter().map(|&n| n * n.saturating_sub(1)).sum();
    pairs as f64 / (total * (total - 1)) as f64
}

/// Try all 26 shifts, best fit first
pub fn crack(cipher_text: &str) -> Result<Vec<Candidate>> {
    let normalized = normalize(cipher_text);
    if normalized.is_empty() {
        return Err(CipherError::NoLetters);
    }

    let counts = letter_frequencies(&normalized);
    let mut candidates: Vec<Candidate> = (0u8..26)
        .map(|shift| {
            // Plaintext letter i was ciphertext letter i + shift
            let mut rotated = [0u64; 26];
            for (i, slot) in rotated.iter_mut().enumerate() {
                *slot = counts[(i + shift as usize) % 26];
            }
            Candidate {
                shift,
                plaintext: encrypt_raw(&normalized, -(shift as i64)),
                score: chi_square(&rotated),
            }
        })
        .collect();

    candidates.sort_by(|a, b| a.score.total_cmp(&b.score).then(a.shift.cmp(&b.shift)));
    Ok(candidates)
}

/// Crack `cipher_text` and keep the `top` best candidates
pub fn crack_report(cipher_text: &str, top: usize) -> Result<CrackReport> {
    let mut candidates = crack(cipher_text)?;
    candidates.truncate(top);

    let counts = letter_frequencies(cipher_text);
    Ok(CrackReport {
        letters: counts.iter().sum::<u64>() as usize,
        index_of_coincidence: index_of_coincidence(&counts),
        candidates,
    })
}
