//! File-level operations shared by the command line and the interactive console

use std::path::Path;

use crate::breaker::{BreakProgress, BreakResult, VigenereBreaker};
use crate::cipher::{transform, CipherMode};
use crate::error::Result;
use crate::file_service::{read_text, write_text};
use crate::report::BreakReport;

/// Encrypt or decrypt `input` into `output`; returns the number of letters written
pub fn run_cipher(mode: CipherMode, input: &Path, output: &Path, key: &str) -> Result<usize> {
    let text = read_text(input)?;
    let result = transform(&text, key, mode)?;
    write_text(output, &result)?;
    Ok(result.len())
}

/// Where to put the outcome of a break
#[derive(Debug, Clone, Copy)]
pub struct BreakTargets<'a> {
    pub output: &'a Path,
    /// Optional JSON report destination
    pub report: Option<&'a Path>,
    /// Candidates per column kept in the report
    pub top_n: usize,
}

/// Break the ciphertext in `input`, writing the plaintext and, optionally, a report.
/// `progress` sees every stage of the break.
pub fn run_break<F>(
    breaker: &VigenereBreaker,
    input: &Path,
    targets: BreakTargets<'_>,
    progress: F,
) -> Result<(BreakResult, BreakReport)>
where
    F: FnMut(&BreakProgress),
{
    let ciphertext = read_text(input)?;
    let result = breaker.break_with_progress(&ciphertext, progress)?;
    let report = BreakReport::from_result(
        &result,
        &ciphertext,
        Some(input),
        targets.top_n,
        breaker.config().reference_ic,
    );

    write_text(targets.output, &result.plaintext)?;
    if let Some(report_path) = targets.report {
        report.save_json(report_path)?;
    }

    Ok((result, report))
}

/// Console line for a progress update
pub fn describe_progress(progress: &BreakProgress) -> String {
    match progress {
        BreakProgress::AnalyzingKeyLength { letters } => {
            format!("Analyzing key length ({} letters)...", letters)
        }
        BreakProgress::KeyLengthFound { key_length, .. } => {
            format!("Most likely key length found: {}", key_length)
        }
        BreakProgress::KeyFound { key } => format!("Key found: {}", key),
        BreakProgress::Decrypting => "Final decryption...".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cipher::encrypt;
    use crate::error::CipherError;
    use std::fs;
    use std::path::PathBuf;
    use std::time::{SystemTime, UNIX_EPOCH};

    const PASSAGE: &str = "Cryptography, or cryptology, is the practice and study of techniques \
        for secure communication in the presence of third parties called adversaries. More \
        generally, cryptography is about constructing and analyzing protocols that prevent \
        third parties or the public from reading private messages. Modern cryptography exists \
        at the intersection of the disciplines of mathematics, computer science, information \
        security, and electrical engineering.";

    fn temp_dir() -> PathBuf {
        let mut dir = std::env::temp_dir();
        let unique = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_nanos();
        dir.push(format!("vigenere_commands_{unique}"));
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn test_encrypt_then_decrypt_files() {
        let dir = temp_dir();
        let plain = dir.join("plain.txt");
        let cipher = dir.join("cipher.txt");
        let back = dir.join("back.txt");
        fs::write(&plain, "Hello, World!").unwrap();

        let written = run_cipher(CipherMode::Encrypt, &plain, &cipher, "KEY").unwrap();
        assert_eq!(written, 10);
        assert_eq!(fs::read_to_string(&cipher).unwrap(), "RIJVSUYVJN");

        run_cipher(CipherMode::Decrypt, &cipher, &back, "key").unwrap();
        assert_eq!(fs::read_to_string(&back).unwrap(), "HELLOWORLD");
    }

    #[test]
    fn test_invalid_key_writes_nothing() {
        let dir = temp_dir();
        let plain = dir.join("plain.txt");
        let out = dir.join("out.txt");
        fs::write(&plain, "text").unwrap();

        let result = run_cipher(CipherMode::Encrypt, &plain, &out, "123");
        assert!(matches!(result, Err(CipherError::InvalidKey)));
        assert!(!out.exists());
    }

    #[test]
    fn test_break_file_with_report() {
        let dir = temp_dir();
        let input = dir.join("cipher.txt");
        let output = dir.join("plain.txt");
        let report_path = dir.join("report.json");
        fs::write(&input, encrypt(PASSAGE, "CRYPTO").unwrap()).unwrap();

        let mut lines = Vec::new();
        let targets = BreakTargets {
            output: &output,
            report: Some(&report_path),
            top_n: 3,
        };
        let (result, report) = run_break(&VigenereBreaker::default(), &input, targets, |p| {
            lines.push(describe_progress(p))
        })
        .unwrap();

        assert_eq!(result.key, "CRYPTO");
        assert_eq!(report.key, "CRYPTO");
        assert_eq!(fs::read_to_string(&output).unwrap(), result.plaintext);
        assert!(fs::read_to_string(&report_path).unwrap().contains("CRYPTO"));
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[1], "Most likely key length found: 6");
        assert_eq!(lines[2], "Key found: CRYPTO");
    }

    #[test]
    fn test_break_missing_file() {
        let dir = temp_dir();
        let output = dir.join("out.txt");
        let targets = BreakTargets {
            output: &output,
            report: None,
            top_n: 3,
        };
        let result = run_break(&VigenereBreaker::default(), &dir.join("nope.txt"), targets, |_| {});
        assert!(matches!(result, Err(CipherError::FileNotFound(_))));
    }

    #[test]
    fn test_break_empty_file() {
        let dir = temp_dir();
        let input = dir.join("empty.txt");
        fs::write(&input, "1234 ...").unwrap();
        let output = dir.join("out.txt");
        let targets = BreakTargets {
            output: &output,
            report: None,
            top_n: 3,
        };
        let result = run_break(&VigenereBreaker::default(), &input, targets, |_| {});
        assert!(matches!(result, Err(CipherError::EmptyInput)));
    }
}
