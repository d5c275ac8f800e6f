//! Chi-squared letter-frequency analysis
//!
//! This module finds the most likely single-letter (Caesar) key for one column
//! of ciphertext:
//! - Letter histogram (26 bins)
//! - Each of the 26 shifts is tried by re-indexing the histogram
//! - Chi-squared statistic: X² = Σ((observed - expected)² / expected)
//! - Lowest statistic wins; ties keep the alphabetically first letter

use serde::{Deserialize, Serialize};

use crate::text::{letter_histogram, ColumnStream};
use crate::types::{letter_at, ALPHABET_LEN};

/// Relative frequency of each letter A..Z in English prose
pub const ENGLISH_FREQUENCIES: [f64; ALPHABET_LEN] = [
    0.08167, 0.01492, 0.02782, 0.04253, 0.12702, 0.02228, 0.02015, 0.06094, // A-H
    0.06966, 0.00153, 0.00772, 0.04025, 0.02406, 0.06749, 0.07507, 0.01929, // I-P
    0.00095, 0.05987, 0.06327, 0.09056, 0.02758, 0.00978, 0.02360, 0.00150, // Q-X
    0.01974, 0.00074, // Y-Z
];

/// Chi-squared score of one candidate key letter
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ShiftScore {
    pub key_char: char,
    pub chi_squared: f64,
}

/// Outcome of scanning one column over all 26 shifts
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// Letter with the lowest chi-squared statistic
    pub best_key_char: char,
    /// All 26 candidates, ascending by score
    pub chi_squared_scores: Vec<ShiftScore>,
}

impl AnalysisResult {
    /// Score of the winning candidate
    pub fn best_score(&self) -> f64 {
        self.chi_squared_scores
            .first()
            .map(|s| s.chi_squared)
            .unwrap_or(f64::INFINITY)
    }

    /// The `n` best candidates
    pub fn top(&self, n: usize) -> &[ShiftScore] {
        &self.chi_squared_scores[..n.min(self.chi_squared_scores.len())]
    }

    /// Score of a specific key letter
    pub fn score_for(&self, key_char: char) -> Option<f64> {
        let key_char = key_char.to_ascii_uppercase();
        self.chi_squared_scores
            .iter()
            .find(|s| s.key_char == key_char)
            .map(|s| s.chi_squared)
    }
}

/// Chi-squared statistic of a column decrypted with `shift`
///
/// Decrypting with shift `k` maps ciphertext letter `c + k` to plaintext `c`,
/// so the observed count of plaintext `c` is the histogram bin at `c + k`.
/// Returns infinity for an empty column.
pub fn chi_squared(histogram: &[u32; ALPHABET_LEN], shift: usize) -> f64 {
    let total: u32 = histogram.iter().sum();
    if total == 0 {
        return f64::INFINITY;
    }

    let n = total as f64;
    let mut chi = 0.0f64;

    for (plain, &frequency) in ENGLISH_FREQUENCIES.iter().enumerate() {
        let expected = n * frequency;
        let observed = histogram[(plain + shift) % ALPHABET_LEN] as f64;
        let diff = observed - expected;
        chi += diff * diff / expected;
    }

    chi
}

/// Score all 26 shifts of a letter histogram
pub fn score_histogram(histogram: &[u32; ALPHABET_LEN]) -> AnalysisResult {
    let mut best_shift = 0usize;
    let mut best_score = f64::INFINITY;
    let mut scores = Vec::with_capacity(ALPHABET_LEN);

    for shift in 0..ALPHABET_LEN {
        let chi = chi_squared(histogram, shift);
        if chi < best_score {
            best_score = chi;
            best_shift = shift;
        }
        scores.push(ShiftScore {
            key_char: char::from(letter_at(shift)),
            chi_squared: chi,
        });
    }

    // stable: equal scores stay in A..Z order
    scores.sort_by(|a, b| a.chi_squared.total_cmp(&b.chi_squared));

    AnalysisResult {
        best_key_char: char::from(letter_at(best_shift)),
        chi_squared_scores: scores,
    }
}

/// Find the most likely Caesar key letter for a normalized column.
/// Bytes outside A..Z are not counted.
pub fn score_column(column: &str) -> AnalysisResult {
    score_histogram(&letter_histogram(column.bytes()))
}

/// Same as [`score_column`] over a borrowed column view
pub fn score_stream(column: &ColumnStream<'_>) -> AnalysisResult {
    score_histogram(&column.histogram())
}
