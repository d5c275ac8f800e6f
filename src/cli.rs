use clap::{Args as ClapArgs, Parser, Subcommand};
use std::path::PathBuf;

use crate::cipher::CipherMode;
use crate::text::normalize;
use crate::types::AnalysisConfig;

/// Vigenère cipher tool
/// Encrypts, decrypts and breaks Vigenère ciphertext without the key
#[derive(Parser, Debug, Clone)]
#[command(name = "vigenere-breaker")]
#[command(version)]
#[command(about = "Vigenère cipher tool: encrypt, decrypt and break without the key", long_about = None)]
pub struct Args {
    /// Action to run; the interactive menu starts when omitted
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Encrypt a file with a keyword
    Encrypt(CipherArgs),
    /// Decrypt a file with a keyword
    Decrypt(CipherArgs),
    /// Recover the key and plaintext of an encrypted file
    Break(BreakArgs),
    /// Start the interactive menu
    Interactive,
}

#[derive(ClapArgs, Debug, Clone)]
pub struct CipherArgs {
    /// Source file
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Destination file
    #[arg(short = 'o', long = "output")]
    pub output: PathBuf,

    /// Keyword (only letters are used)
    #[arg(short = 'k', long = "key")]
    pub key: String,
}

#[derive(ClapArgs, Debug, Clone)]
pub struct BreakArgs {
    /// Encrypted file
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Destination file for the recovered plaintext
    #[arg(short = 'o', long = "output")]
    pub output: PathBuf,

    /// Also write a JSON analysis report
    #[arg(long = "report")]
    pub report: Option<PathBuf>,

    /// Candidates per column shown in summaries and reports
    #[arg(long = "top", default_value = "3")]
    pub top: usize,

    /// Print the key-length score table and column candidates
    #[arg(long = "show-scores")]
    pub show_scores: bool,

    /// Largest key length to test
    #[arg(long = "max-key-length", default_value = "50")]
    pub max_key_length: usize,

    /// Minimum letters per column for a key length to be tested
    #[arg(long = "min-column-length", default_value = "50")]
    pub min_column_length: usize,

    /// Worker threads (0 = auto)
    #[arg(long = "threads", default_value = "0")]
    pub threads: usize,
}

impl BreakArgs {
    /// Analysis configuration described by these arguments
    pub fn analysis_config(&self) -> AnalysisConfig {
        AnalysisConfig {
            min_column_length: self.min_column_length,
            max_key_length: self.max_key_length,
            num_threads: self.threads,
            top_candidates: self.top,
            ..Default::default()
        }
    }
}

impl Command {
    /// Cipher direction for encrypt/decrypt commands
    pub fn cipher_mode(&self) -> Option<CipherMode> {
        match self {
            Command::Encrypt(_) => Some(CipherMode::Encrypt),
            Command::Decrypt(_) => Some(CipherMode::Decrypt),
            _ => None,
        }
    }
}

impl Args {
    /// Validate the arguments
    pub fn validate(&self) -> Result<(), String> {
        match &self.command {
            Some(Command::Encrypt(args)) | Some(Command::Decrypt(args)) => {
                if args.input.as_os_str().is_empty() {
                    return Err("Input path cannot be empty".to_string());
                }
                if args.output.as_os_str().is_empty() {
                    return Err("Output path cannot be empty".to_string());
                }
                if normalize(&args.key).is_empty() {
                    return Err("Key must contain at least one letter".to_string());
                }
                Ok(())
            }
            Some(Command::Break(args)) => {
                if args.input.as_os_str().is_empty() {
                    return Err("Input path cannot be empty".to_string());
                }
                if args.output.as_os_str().is_empty() {
                    return Err("Output path cannot be empty".to_string());
                }
                if args.top == 0 || args.top > 26 {
                    return Err(format!("top ({}) must be between 1 and 26", args.top));
                }
                args.analysis_config().validate().map_err(|e| e.to_string())
            }
            Some(Command::Interactive) | None => Ok(()),
        }
    }
}
