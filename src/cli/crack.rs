use crate::analysis::{crack_report, CrackReport};
use crate::cli::read_input;
use crate::error::Result;
use std::path::PathBuf;

/// Options for the crack command
#[derive(Debug, Clone)]
pub struct CrackOptions {
    pub input: Option<PathBuf>,
    /// Number of candidates to report
    pub top: usize,
    pub json: bool,
}

impl Default for CrackOptions {
    fn default() -> Self {
        Self {
            input: None,
            top: 3,
            json: false,
        }
    }
}

/// Brute-force the shift of a ciphertext and render the best candidates
pub fn run_crack(options: &CrackOptions) -> Result<String> {
    let cipher_text = read_input(options.input.as_deref())?;
    let report = crack_report(&cipher_text, options.top)?;
    log::debug!(
        "Ranked 26 shifts over {} letters, IoC {:.4}",
        report.letters,
        report.index_of_coincidence
    );

    if options.json {
        let mut json = serde_json::to_string_pretty(&report)?;
        json.push('\n');
        Ok(json)
    } else {
        Ok(format_report(&report))
    }
}

fn format_report(report: &CrackReport) -> String {
    let mut output = String::new();

    output.push_str("Shift Cipher Cryptanalysis\n");
    output.push_str("==========================\n\n");
    output.push_str(&format!("Letters analyzed: {}\n", report.letters));
    output.push_str(&format!(
        "Index of coincidence: {:.4} ({})\n\n",
        report.index_of_coincidence,
        interpret_ioc(report.index_of_coincidence)
    ));

    output.push_str("Candidates (lower chi-square is better):\n");
    for (rank, candidate) in report.candidates.iter().enumerate() {
        output.push_str(&format!(
            "  {}. shift {:>2}  chi2 {:>10.2}  {}\n",
            rank + 1,
            candidate.shift,
            candidate.score,
            preview(&candidate.plaintext, 60)
        ));
    }

    output
}

fn interpret_ioc(ic: f64) -> &'static str {
    if ic > 0.055 {
        "language-like"
    } else if ic > 0.045 {
        "inconclusive"
    } else {
        "random-looking"
    }
}

fn preview(text: &str, width: usize) -> String {
    if text.len() <= width {
        text.to_string()
    } else {
        format!("{}...", &text[..width])
    }
}
