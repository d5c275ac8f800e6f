//! Interactive menu
//!
//! Menu choices:
//! - 1: Encrypt a file
//! - 2: Decrypt a file
//! - 3: Break a cipher
//! - 4: Exit
//!
//! The console is generic over its input and output streams so a whole session
//! can be scripted.

use crossterm::style::Stylize;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use crate::breaker::{BreakProgress, VigenereBreaker};
use crate::cipher::CipherMode;
use crate::commands::{describe_progress, run_break, run_cipher, BreakTargets};

/// Closed set of menu actions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    Encrypt,
    Decrypt,
    Break,
    Exit,
}

impl MenuAction {
    pub const ALL: [MenuAction; 4] = [
        MenuAction::Encrypt,
        MenuAction::Decrypt,
        MenuAction::Break,
        MenuAction::Exit,
    ];

    /// Parse a menu choice ("1".."4")
    pub fn from_choice(choice: &str) -> Option<Self> {
        match choice.trim() {
            "1" => Some(MenuAction::Encrypt),
            "2" => Some(MenuAction::Decrypt),
            "3" => Some(MenuAction::Break),
            "4" => Some(MenuAction::Exit),
            _ => None,
        }
    }

    pub fn choice(self) -> &'static str {
        match self {
            MenuAction::Encrypt => "1",
            MenuAction::Decrypt => "2",
            MenuAction::Break => "3",
            MenuAction::Exit => "4",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            MenuAction::Encrypt => "Encrypt a file",
            MenuAction::Decrypt => "Decrypt a file",
            MenuAction::Break => "Break a cipher",
            MenuAction::Exit => "Exit",
        }
    }
}

/// Menu-driven console session
pub struct Console<R, W> {
    input: R,
    output: W,
    breaker: VigenereBreaker,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W, breaker: VigenereBreaker) -> Self {
        Self {
            input,
            output,
            breaker,
        }
    }

    /// Run until the user exits or input ends
    pub fn run(&mut self) -> io::Result<()> {
        loop {
            self.print_menu()?;
            let Some(choice) = self.read_line()? else {
                writeln!(self.output)?;
                return Ok(());
            };

            match MenuAction::from_choice(&choice) {
                Some(MenuAction::Exit) => {
                    writeln!(self.output, "Exiting the program.")?;
                    return Ok(());
                }
                Some(action) => self.dispatch(action)?,
                None => writeln!(
                    self.output,
                    "Invalid input. Please choose an option from 1 to {}.",
                    MenuAction::ALL.len()
                )?,
            }

            writeln!(self.output, "\nPress Enter to continue...")?;
            self.output.flush()?;
            if self.read_line()?.is_none() {
                return Ok(());
            }
        }
    }

    fn dispatch(&mut self, action: MenuAction) -> io::Result<()> {
        match action {
            MenuAction::Encrypt => self.handle_cipher(CipherMode::Encrypt),
            MenuAction::Decrypt => self.handle_cipher(CipherMode::Decrypt),
            MenuAction::Break => self.handle_break(),
            MenuAction::Exit => Ok(()),
        }
    }

    fn print_menu(&mut self) -> io::Result<()> {
        writeln!(self.output, "\n{}", "--- Vigenere Cipher Tool ---".bold().cyan())?;
        for action in MenuAction::ALL {
            writeln!(self.output, "{}. {}", action.choice(), action.label())?;
        }
        write!(self.output, "Select an action: ")?;
        self.output.flush()
    }

    /// Next line without its line ending; `None` at end of input
    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let trimmed = line.trim_end_matches(['\r', '\n']).len();
        line.truncate(trimmed);
        Ok(Some(line))
    }

    fn prompt(&mut self, text: &str) -> io::Result<Option<String>> {
        write!(self.output, "{}", text)?;
        self.output.flush()?;
        self.read_line()
    }

    /// Ask until an existing path is given; blank input cancels
    fn prompt_existing_path(&mut self, text: &str) -> io::Result<Option<PathBuf>> {
        loop {
            let Some(path) = self.prompt(text)? else {
                return Ok(None);
            };

            if path.trim().is_empty() {
                writeln!(self.output, "Operation cancelled by user.")?;
                return Ok(None);
            }

            let path = PathBuf::from(path.trim());
            if path.exists() {
                return Ok(Some(path));
            }

            writeln!(
                self.output,
                "File not found at the specified path. Please try again or press Enter to cancel."
            )?;
        }
    }

    /// Ask for a destination; blank input aborts
    fn prompt_output_path(&mut self) -> io::Result<Option<PathBuf>> {
        let Some(path) = self.prompt("Enter the path to save the result: ")? else {
            return Ok(None);
        };

        if path.trim().is_empty() {
            writeln!(self.output, "Output path cannot be empty. Operation aborted.")?;
            return Ok(None);
        }

        Ok(Some(PathBuf::from(path.trim())))
    }

    fn handle_cipher(&mut self, mode: CipherMode) -> io::Result<()> {
        let (title, source_prompt, done) = match mode {
            CipherMode::Encrypt => (
                "--- File Encryption ---",
                "Enter the path to the source file: ",
                "File encrypted successfully and saved to",
            ),
            CipherMode::Decrypt => (
                "--- File Decryption ---",
                "Enter the path to the encrypted file: ",
                "File decrypted successfully and saved to",
            ),
        };
        writeln!(self.output, "\n{}", title.bold())?;

        let Some(input) = self.prompt_existing_path(source_prompt)? else {
            return Ok(());
        };
        let Some(output) = self.prompt_output_path()? else {
            return Ok(());
        };
        let Some(key) = self.prompt("Enter the keyword: ")? else {
            return Ok(());
        };

        match run_cipher(mode, &input, &output, &key) {
            Ok(_) => writeln!(self.output, "{}: {}", done, output.display()),
            Err(e) => writeln!(self.output, "{} {}", "[ERROR]".red(), e),
        }
    }

    fn handle_break(&mut self) -> io::Result<()> {
        writeln!(self.output, "\n{}", "--- Break Vigenere Cipher ---".bold())?;
        writeln!(
            self.output,
            "Note: The analyzer will search for keys up to {} characters long \
             (fewer for short texts).",
            self.breaker.config().max_key_length
        )?;

        let Some(input) = self.prompt_existing_path("Enter the path to the encrypted file: ")? else {
            return Ok(());
        };
        let Some(output) = self.prompt_output_path()? else {
            return Ok(());
        };

        let targets = BreakTargets {
            output: &output,
            report: None,
            top_n: self.breaker.config().top_candidates,
        };
        let sink = &mut self.output;
        let mut write_error: Option<io::Error> = None;
        let outcome = run_break(&self.breaker, &input, targets, |progress| {
            if write_error.is_some() {
                return;
            }
            if let Err(e) = write_progress(sink, progress) {
                write_error = Some(e);
            }
        });
        if let Some(e) = write_error {
            return Err(e);
        }

        match outcome {
            Ok(_) => writeln!(
                self.output,
                "Cipher broken successfully and result saved to: {}",
                output.display()
            ),
            Err(e) => writeln!(self.output, "{} {}", "[ERROR]".red(), e),
        }
    }

    /// Consume the console and return its output stream
    pub fn into_output(self) -> W {
        self.output
    }
}

fn write_progress<W: Write>(sink: &mut W, progress: &BreakProgress) -> io::Result<()> {
    writeln!(sink, "{}", describe_progress(progress))?;
    if let BreakProgress::KeyLengthFound {
        warning: Some(warning),
        ..
    } = progress
    {
        writeln!(sink, "{} {}", "[WARN]".yellow(), warning)?;
    }
    Ok(())
}
