//! Break report generation
//!
//! Turns a [`BreakResult`] into a serializable report (JSON) and a plain-text
//! diagnostic summary: every candidate key length with its average IC, and
//! the best shift candidates of every column.

use chrono::Local;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::fmt::Write as _;
use std::path::Path;

use crate::breaker::BreakResult;
use crate::error::{CipherError, Result};
use crate::file_service::write_text;
use crate::frequency::ShiftScore;
use crate::types::ENGLISH_IC;

/// Complete report of one break
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BreakReport {
    pub metadata: ReportMetadata,
    /// Recovered key
    pub key: String,
    /// Final key length
    pub key_length: usize,
    /// Length closest to the reference IC before divisor correction
    pub best_scoring_length: usize,
    /// Every candidate length that was scored
    pub key_length_scores: Vec<KeyLengthScoreEntry>,
    /// Best candidates per column
    pub columns: Vec<ColumnReport>,
    /// Advisory messages
    pub warnings: Vec<String>,
}

/// Report metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportMetadata {
    /// Report generation timestamp
    pub timestamp: String,
    /// Tool name and version
    pub tool_name: String,
    pub version: String,
    /// Source of the ciphertext, if it came from a file
    pub input_path: Option<String>,
    /// SHA-256 of the raw ciphertext
    pub input_sha256: String,
    /// Letters left after normalization
    pub letters_analyzed: usize,
}

/// Average IC of one candidate key length
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeyLengthScoreEntry {
    pub key_length: usize,
    pub average_ic: f64,
    /// Absolute distance to the reference IC
    pub distance: f64,
}

/// Frequency scan summary for one column
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ColumnReport {
    pub column: usize,
    pub best_key_char: char,
    pub top_candidates: Vec<ShiftScore>,
}

/// Hex SHA-256 digest of `data`
pub fn sha256_hex(data: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(data);
    format!("{:x}", hasher.finalize())
}

impl BreakReport {
    /// Build a report; `reference_ic` is what the key-length distances are measured against
    pub fn from_result(
        result: &BreakResult,
        raw_input: &str,
        input_path: Option<&Path>,
        top_n: usize,
        reference_ic: f64,
    ) -> Self {
        let metadata = ReportMetadata {
            timestamp: Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
            tool_name: env!("CARGO_PKG_NAME").to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            input_path: input_path.map(|p| p.display().to_string()),
            input_sha256: sha256_hex(raw_input.as_bytes()),
            letters_analyzed: result.letters,
        };

        let key_length_scores = result
            .estimate
            .scores
            .iter()
            .map(|(key_length, average_ic)| KeyLengthScoreEntry {
                key_length,
                average_ic,
                distance: (average_ic - reference_ic).abs(),
            })
            .collect();

        let columns = result
            .columns
            .iter()
            .enumerate()
            .map(|(column, analysis)| ColumnReport {
                column,
                best_key_char: analysis.best_key_char,
                top_candidates: analysis.top(top_n).to_vec(),
            })
            .collect();

        let warnings = result.warning().map(|w| vec![w.to_string()]).unwrap_or_default();

        Self {
            metadata,
            key: result.key.clone(),
            key_length: result.key_length(),
            best_scoring_length: result.estimate.best_scoring_length,
            key_length_scores,
            columns,
            warnings,
        }
    }

    /// Build a report measured against the English reference IC
    pub fn new(result: &BreakResult, raw_input: &str, input_path: Option<&Path>, top_n: usize) -> Self {
        Self::from_result(result, raw_input, input_path, top_n, ENGLISH_IC)
    }

    /// Render as pretty-printed JSON
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|err| CipherError::Serialization(err.to_string()))
    }

    /// Parse a report previously produced by [`BreakReport::to_json`]
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|err| CipherError::Serialization(err.to_string()))
    }

    /// Write the JSON report to `path`
    pub fn save_json(&self, path: &Path) -> Result<()> {
        write_text(path, &self.to_json()?)
    }

    /// Text table of key-length scores and per-column candidates
    pub fn render_summary(&self) -> String {
        let mut out = String::new();

        let _ = writeln!(out, "Key length analysis ({} letters):", self.metadata.letters_analyzed);
        for entry in &self.key_length_scores {
            let marker = if entry.key_length == self.key_length {
                " <- selected"
            } else if entry.key_length == self.best_scoring_length {
                " <- closest IC"
            } else {
                ""
            };
            let _ = writeln!(
                out,
                "  {:3} | IC {:.5} | distance {:.5}{}",
                entry.key_length, entry.average_ic, entry.distance, marker
            );
        }

        let _ = writeln!(out, "Column candidates:");
        for column in &self.columns {
            let candidates: Vec<String> = column
                .top_candidates
                .iter()
                .map(|s| format!("{} ({:.2})", s.key_char, s.chi_squared))
                .collect();
            let _ = writeln!(
                out,
                "  {:3} | {} | {}",
                column.column,
                column.best_key_char,
                candidates.join(", ")
            );
        }

        let _ = writeln!(out, "Key: {}", self.key);
        out
    }
}
