//! Validated input prompter: ask until the answer belongs to an allowed
//! set, case-insensitively. The only suspension point in the program
//! besides dataset I/O.

use crate::errors::{AppError, AppResult};
use std::io::{self, BufRead, Write};

pub struct Prompter {
    error_template: String,
}

impl Prompter {
    pub fn new(error_template: &str) -> Self {
        Self {
            error_template: error_template.to_string(),
        }
    }

    /// Repeat "display prompt, read one line, normalize, test membership"
    /// until the normalized value is in `allowed`, then return it.
    /// Never returns a non-member.
    pub fn ask(&self, allowed: &[&str], prompt: &str) -> AppResult<String> {
        let stdin = io::stdin();
        let mut lock = stdin.lock();
        self.ask_from(&mut lock, allowed, prompt)
    }

    /// Reader-generic body of `ask`, so the retry loop is testable with a
    /// Cursor instead of a live terminal.
    pub fn ask_from<R: BufRead>(
        &self,
        reader: &mut R,
        allowed: &[&str],
        prompt: &str,
    ) -> AppResult<String> {
        loop {
            println!("{prompt}");
            io::stdout().flush().ok();

            let mut line = String::new();
            let n = reader.read_line(&mut line)?;
            if n == 0 {
                return Err(AppError::Io(io::Error::new(
                    io::ErrorKind::UnexpectedEof,
                    "input closed while waiting for an answer",
                )));
            }

            let raw = line.trim_end_matches(['\r', '\n']);
            let normalized = raw.trim().to_lowercase();
            if allowed.contains(&normalized.as_str()) {
                return Ok(normalized);
            }

            println!("{}", self.error_template.replacen("{}", raw, 1));
        }
    }
}
