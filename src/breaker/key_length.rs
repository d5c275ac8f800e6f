use rayon::prelude::*;

use crate::coincidence::average_ic;
use crate::error::AnalysisWarning;
use crate::text::NormalizedText;
use crate::types::AnalysisConfig;

/// Average IC per candidate key length, for lengths `1..=max_length()`
#[derive(Debug, Clone, PartialEq, Default)]
pub struct KeyLengthScores {
    scores: Vec<f64>,
}

impl KeyLengthScores {
    /// Score every candidate length in parallel; results keep ascending order
    pub fn compute(text: &NormalizedText, max_length: usize) -> Self {
        let scores = (1..=max_length)
            .into_par_iter()
            .map(|key_length| average_ic(text, key_length))
            .collect();
        Self { scores }
    }

    /// Average IC of a candidate length, if it was scored
    pub fn get(&self, key_length: usize) -> Option<f64> {
        key_length
            .checked_sub(1)
            .and_then(|i| self.scores.get(i))
            .copied()
    }

    /// Largest candidate length scored
    pub fn max_length(&self) -> usize {
        self.scores.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }

    /// `(key_length, average_ic)` pairs in ascending length order
    pub fn iter(&self) -> impl Iterator<Item = (usize, f64)> + '_ {
        self.scores.iter().enumerate().map(|(i, &ic)| (i + 1, ic))
    }

    /// Length whose average IC is closest to `reference`; the shortest wins ties
    pub fn closest_to(&self, reference: f64) -> Option<usize> {
        let mut best: Option<(usize, f64)> = None;
        for (key_length, ic) in self.iter() {
            let distance = (ic - reference).abs();
            match best {
                Some((_, best_distance)) if distance >= best_distance => {}
                _ => best = Some((key_length, distance)),
            }
        }
        best.map(|(key_length, _)| key_length)
    }
}

/// Outcome of key-length estimation
#[derive(Debug, Clone, PartialEq)]
pub struct KeyLengthEstimate {
    /// Final estimate, after divisor correction
    pub key_length: usize,
    /// Candidate closest to the reference IC, before divisor correction
    pub best_scoring_length: usize,
    pub scores: KeyLengthScores,
    pub warning: Option<AnalysisWarning>,
}

impl KeyLengthEstimate {
    /// True when divisor correction replaced the best scoring length
    pub fn divisor_corrected(&self) -> bool {
        self.key_length != self.best_scoring_length
    }
}

/// Divisors of `n` that are at least 2 and smaller than `n`, ascending
pub fn proper_divisors(n: usize) -> Vec<usize> {
    (2..n).filter(|d| n % d == 0).collect()
}

/// Largest key length the text can support: `min(letters / min_column_length,
/// max_key_length)`. May be 0 for short texts.
pub fn max_key_length(letters: usize, config: &AnalysisConfig) -> usize {
    (letters / config.min_column_length.max(1)).min(config.max_key_length)
}

/// Pick `(best_scoring_length, key_length)` from a score table
pub fn select_key_length(scores: &KeyLengthScores, config: &AnalysisConfig) -> (usize, usize) {
    let best_scoring_length = scores.closest_to(config.reference_ic).unwrap_or(1);

    let threshold = config.divisor_threshold();
    let key_length = proper_divisors(best_scoring_length)
        .into_iter()
        .find(|&d| scores.get(d).unwrap_or(0.0) > threshold)
        .unwrap_or(best_scoring_length);

    (best_scoring_length, key_length)
}

/// Estimate the key length of a normalized ciphertext
///
/// 1. Score candidate lengths `1..=max` by average column IC.
/// 2. Keep the length closest to the reference IC.
/// 3. Prefer its smallest proper divisor whose own IC clears the threshold,
///    since multiples of the true length also produce single-shift columns.
pub fn estimate_key_length(text: &NormalizedText, config: &AnalysisConfig) -> KeyLengthEstimate {
    let mut max_length = max_key_length(text.len(), config);
    let mut warning = None;

    if max_length < 1 {
        warning = Some(AnalysisWarning::ShortCiphertext {
            letters: text.len(),
            min_column_length: config.min_column_length,
        });
        max_length = 1;
    }

    let scores = KeyLengthScores::compute(text, max_length);
    let (best_scoring_length, key_length) = select_key_length(&scores, config);

    KeyLengthEstimate {
        key_length,
        best_scoring_length,
        scores,
        warning,
    }
}
