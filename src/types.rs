use crate::error::{CipherError, Result};

/// The 26-letter uppercase Latin alphabet all cipher arithmetic works over
pub const ALPHABET: &[u8; 26] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Number of symbols in [`ALPHABET`]
pub const ALPHABET_LEN: usize = 26;

/// Expected Index of Coincidence of English prose
pub const ENGLISH_IC: f64 = 0.065;

/// Index of Coincidence of uniformly random letters (1/26)
pub const RANDOM_IC: f64 = 1.0 / ALPHABET_LEN as f64;

/// Index (0..25) of an uppercase letter byte, `None` for anything else
#[inline]
pub fn letter_index(byte: u8) -> Option<usize> {
    if byte.is_ascii_uppercase() {
        Some((byte - b'A') as usize)
    } else {
        None
    }
}

/// Uppercase letter for an index, reduced mod 26
#[inline]
pub fn letter_at(index: usize) -> u8 {
    ALPHABET[index % ALPHABET_LEN]
}

/// Key-length analysis configuration
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisConfig {
    /// Minimum letters per column for the statistics to be trusted
    pub min_column_length: usize,

    /// Absolute ceiling on candidate key lengths
    pub max_key_length: usize,

    /// Reference IC the candidate averages are compared against
    pub reference_ic: f64,

    /// A divisor of the best length is preferred when its IC exceeds
    /// `reference_ic - divisor_tolerance`
    pub divisor_tolerance: f64,

    /// Number of threads (0 = auto)
    pub num_threads: usize,

    /// Candidates kept per column in reports
    pub top_candidates: usize,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            min_column_length: 50,
            max_key_length: 50,
            reference_ic: ENGLISH_IC,
            divisor_tolerance: 0.01,
            num_threads: 0,
            top_candidates: 3,
        }
    }
}

impl AnalysisConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.min_column_length == 0 {
            return Err(CipherError::Config(
                "min-column-length must be greater than 0".to_string(),
            ));
        }

        if self.max_key_length == 0 {
            return Err(CipherError::Config(
                "max-key-length must be greater than 0".to_string(),
            ));
        }

        if !(self.reference_ic > 0.0 && self.reference_ic < 1.0) {
            return Err(CipherError::Config(format!(
                "reference IC ({}) must lie between 0 and 1",
                self.reference_ic
            )));
        }

        if self.divisor_tolerance < 0.0 {
            return Err(CipherError::Config(format!(
                "divisor tolerance ({}) cannot be negative",
                self.divisor_tolerance
            )));
        }

        Ok(())
    }

    /// IC a divisor of the best candidate has to exceed to replace it
    pub fn divisor_threshold(&self) -> f64 {
        self.reference_ic - self.divisor_tolerance
    }
}
