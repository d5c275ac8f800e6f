use anyhow::Context;
use clap::Parser;
use std::io;

use vigenere_breaker::cli::{Args, BreakArgs, CipherArgs, Command};
use vigenere_breaker::commands::{describe_progress, run_break, run_cipher, BreakTargets};
use vigenere_breaker::console::Console;
use vigenere_breaker::{AnalysisConfig, BreakProgress, CipherMode, VigenereBreaker};

fn main() {
    if let Err(e) = run() {
        eprintln!("[ERROR] {:#}", e);
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    // Parse command line arguments
    let args = Args::parse();

    // Validate arguments
    if let Err(e) = args.validate() {
        eprintln!("Invalid arguments: {}", e);
        std::process::exit(1);
    }

    match args.command {
        Some(Command::Encrypt(cipher)) => run_cipher_command(CipherMode::Encrypt, &cipher),
        Some(Command::Decrypt(cipher)) => run_cipher_command(CipherMode::Decrypt, &cipher),
        Some(Command::Break(break_args)) => run_break_command(&break_args),
        Some(Command::Interactive) | None => run_interactive(),
    }
}

fn run_cipher_command(mode: CipherMode, args: &CipherArgs) -> anyhow::Result<()> {
    let letters = run_cipher(mode, &args.input, &args.output, &args.key)
        .with_context(|| format!("Failed to {} {}", mode, args.input.display()))?;

    println!(
        "{} letters written to {} ({}ed with a {}-letter key)",
        letters,
        args.output.display(),
        mode,
        vigenere_breaker::normalize(&args.key).len()
    );
    Ok(())
}

fn run_break_command(args: &BreakArgs) -> anyhow::Result<()> {
    let config = args.analysis_config();

    println!("Vigenere Breaker v{}", env!("CARGO_PKG_VERSION"));
    println!("{}", "=".repeat(60));
    println!("  Input:              {}", args.input.display());
    println!("  Output:             {}", args.output.display());
    if let Some(report) = &args.report {
        println!("  Report:             {}", report.display());
    }
    println!("  Max key length:     {}", config.max_key_length);
    println!("  Min column length:  {}", config.min_column_length);
    println!();

    let breaker = VigenereBreaker::new(config);
    let targets = BreakTargets {
        output: &args.output,
        report: args.report.as_deref(),
        top_n: args.top,
    };

    let (result, report) = run_break(&breaker, &args.input, targets, |progress| {
        println!("{}", describe_progress(progress));
        if let BreakProgress::KeyLengthFound {
            warning: Some(warning),
            ..
        } = progress
        {
            eprintln!("[WARN] {}", warning);
        }
    })
    .with_context(|| format!("Failed to break {}", args.input.display()))?;

    if args.show_scores {
        println!();
        print!("{}", report.render_summary());
    }

    println!();
    println!("Key:        {}", result.key);
    println!("Key length: {}", result.key_length());
    println!("Plaintext saved to: {}", args.output.display());
    Ok(())
}

fn run_interactive() -> anyhow::Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut console = Console::new(
        stdin.lock(),
        stdout.lock(),
        VigenereBreaker::new(AnalysisConfig::default()),
    );
    console.run().context("Console session failed")?;
    Ok(())
}
