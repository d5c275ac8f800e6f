//! Vigenère key recovery
//!
//! Normalize -> estimate key length -> recover one key letter per column ->
//! decrypt. Every stage is a pure computation, so repeated calls on the same
//! input always produce the same result.

pub mod key_length;

use rayon::prelude::*;

use crate::cipher::VigenereKey;
use crate::error::{AnalysisWarning, CipherError, Result};
use crate::frequency::{score_stream, AnalysisResult};
use crate::text::NormalizedText;
use crate::types::AnalysisConfig;

pub use key_length::{
    estimate_key_length, proper_divisors, select_key_length, KeyLengthEstimate, KeyLengthScores,
};

/// Progress update emitted while breaking a cipher
#[derive(Debug, Clone, PartialEq)]
pub enum BreakProgress {
    /// Key-length analysis started
    AnalyzingKeyLength { letters: usize },
    /// Key length chosen
    KeyLengthFound {
        key_length: usize,
        warning: Option<AnalysisWarning>,
    },
    /// Key letters recovered
    KeyFound { key: String },
    /// Final decryption started
    Decrypting,
}

/// Key letters recovered column by column
#[derive(Debug, Clone, PartialEq)]
pub struct RecoveredKey {
    pub key: String,
    /// Frequency scan of each column, in column order
    pub columns: Vec<AnalysisResult>,
}

impl RecoveredKey {
    pub fn len(&self) -> usize {
        self.key.len()
    }

    pub fn is_empty(&self) -> bool {
        self.key.is_empty()
    }
}

/// Result of a full break
#[derive(Debug, Clone, PartialEq)]
pub struct BreakResult {
    pub key: String,
    pub plaintext: String,
    pub estimate: KeyLengthEstimate,
    pub columns: Vec<AnalysisResult>,
    /// Letters left after normalization
    pub letters: usize,
}

impl BreakResult {
    pub fn key_length(&self) -> usize {
        self.key.len()
    }

    pub fn warning(&self) -> Option<&AnalysisWarning> {
        self.estimate.warning.as_ref()
    }
}

/// Breaks Vigenère ciphertext without the key
#[derive(Debug, Clone, Default)]
pub struct VigenereBreaker {
    config: AnalysisConfig,
}

impl VigenereBreaker {
    pub fn new(config: AnalysisConfig) -> Self {
        // Configure global thread pool if requested
        if config.num_threads > 0 {
            let _ = rayon::ThreadPoolBuilder::new()
                .num_threads(config.num_threads)
                .build_global();
        }

        Self { config }
    }

    pub fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    /// Largest candidate key length for a text of `letters` letters
    pub fn max_key_length(&self, letters: usize) -> usize {
        key_length::max_key_length(letters, &self.config)
    }

    pub fn estimate_key_length(&self, text: &NormalizedText) -> KeyLengthEstimate {
        estimate_key_length(text, &self.config)
    }

    /// Run the frequency scan on each of the `key_length` columns
    pub fn recover_key(&self, text: &NormalizedText, key_length: usize) -> RecoveredKey {
        let columns: Vec<AnalysisResult> = text
            .columns(key_length)
            .par_iter()
            .map(score_stream)
            .collect();
        let key = columns.iter().map(|c| c.best_key_char).collect();

        RecoveredKey { key, columns }
    }

    /// Break a raw ciphertext
    pub fn break_cipher(&self, ciphertext: &str) -> Result<BreakResult> {
        self.break_with_progress(ciphertext, |_| {})
    }

    /// Break a raw ciphertext, reporting each stage to `progress`
    pub fn break_with_progress<F>(&self, ciphertext: &str, mut progress: F) -> Result<BreakResult>
    where
        F: FnMut(&BreakProgress),
    {
        let text = NormalizedText::new(ciphertext);
        if text.is_empty() {
            return Err(CipherError::EmptyInput);
        }

        progress(&BreakProgress::AnalyzingKeyLength {
            letters: text.len(),
        });
        let estimate = self.estimate_key_length(&text);
        progress(&BreakProgress::KeyLengthFound {
            key_length: estimate.key_length,
            warning: estimate.warning.clone(),
        });

        let recovered = self.recover_key(&text, estimate.key_length);
        progress(&BreakProgress::KeyFound {
            key: recovered.key.clone(),
        });

        progress(&BreakProgress::Decrypting);
        let key = VigenereKey::parse(&recovered.key)?;
        let plaintext = key.decrypt(&text);

        Ok(BreakResult {
            key: recovered.key,
            plaintext,
            estimate,
            columns: recovered.columns,
            letters: text.len(),
        })
    }
}

/// Break a ciphertext with the default configuration
pub fn break_cipher(ciphertext: &str) -> Result<BreakResult> {
    VigenereBreaker::default().break_cipher(ciphertext)
}
