//! Vigenère cipher tool and breaker
//!
//! This library encrypts, decrypts and breaks Vigenère ciphertext:
//! - Alphabet-only normalization (A-Z, uppercase)
//! - Key-length estimation from the average Index of Coincidence, with
//!   divisor correction and a Caesar fallback for short texts
//! - Per-column key recovery by chi-squared matching against English letter frequencies
//! - Parallel candidate scoring using rayon
//! - JSON reports and text diagnostics of every break

pub mod breaker;
pub mod cipher;
pub mod cli;
pub mod coincidence;
pub mod commands;
pub mod console;
pub mod error;
pub mod file_service;
pub mod frequency;
pub mod report;
pub mod text;
pub mod types;

// Re-export commonly used types
pub use types::{AnalysisConfig, ALPHABET, ALPHABET_LEN, ENGLISH_IC, RANDOM_IC};
pub use text::{normalize, ColumnStream, NormalizedText};
pub use cipher::{decrypt, encrypt, CipherMode, VigenereKey};
pub use frequency::{score_column, AnalysisResult, ShiftScore, ENGLISH_FREQUENCIES};
pub use coincidence::{average_ic, index_of_coincidence};
pub use breaker::{
    break_cipher, BreakProgress, BreakResult, KeyLengthEstimate, KeyLengthScores, RecoveredKey,
    VigenereBreaker,
};
pub use report::BreakReport;
pub use error::{AnalysisWarning, CipherError, Result};
