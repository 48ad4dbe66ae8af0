//! # Console
//!
//! Operator-facing text I/O: status lines, the build-version prompt and the
//! overwrite confirmation. Generic over reader and writer so tests can
//! script the answers.

use std::io::{self, BufRead, Write};
use std::path::Path;

use ovt_publish::ConfirmOverwrite;
use ovt_validate::{Finding, FindingLevel};

pub struct Console<R, W> {
    input: R,
    output: W,
}

impl Console<io::StdinLock<'static>, io::Stdout> {
    /// Console bound to the process's stdin and stdout.
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    pub fn line(&mut self, text: impl AsRef<str>) -> io::Result<()> {
        writeln!(self.output, "{}", text.as_ref())
    }

    pub fn finding(&mut self, level: FindingLevel, message: impl Into<String>) -> io::Result<()> {
        let finding = Finding {
            level,
            message: message.into(),
        };
        writeln!(self.output, "{finding}")
    }

    pub fn ok(&mut self, message: impl Into<String>) -> io::Result<()> {
        self.finding(FindingLevel::Ok, message)
    }

    pub fn fail(&mut self, message: impl Into<String>) -> io::Result<()> {
        self.finding(FindingLevel::Fail, message)
    }

    pub fn warn(&mut self, message: impl Into<String>) -> io::Result<()> {
        self.finding(FindingLevel::Warn, message)
    }

    /// Ask until a non-empty answer is given.
    ///
    /// # Errors
    ///
    /// `UnexpectedEof` if input ends first.
    pub fn ask(&mut self, question: &str) -> io::Result<String> {
        loop {
            write!(self.output, "{question}: ")?;
            self.output.flush()?;
            let mut answer = String::new();
            if self.input.read_line(&mut answer)? == 0 {
                return Err(io::Error::new(
                    io::ErrorKind::UnexpectedEof,
                    format!("no answer to '{question}'"),
                ));
            }
            let answer = answer.trim();
            if !answer.is_empty() {
                return Ok(answer.to_string());
            }
        }
    }

    /// Yes/no question defaulting to no. End of input counts as no.
    pub fn confirm(&mut self, question: &str) -> io::Result<bool> {
        loop {
            write!(self.output, "{question} [y/N]: ")?;
            self.output.flush()?;
            let mut answer = String::new();
            if self.input.read_line(&mut answer)? == 0 {
                writeln!(self.output)?;
                return Ok(false);
            }
            match answer.trim().to_ascii_lowercase().as_str() {
                "y" | "yes" => return Ok(true),
                "" | "n" | "no" => return Ok(false),
                _ => writeln!(self.output, "Error: invalid input")?,
            }
        }
    }

    pub fn banner(&mut self, lines: &[&str]) -> io::Result<()> {
        writeln!(self.output)?;
        writeln!(self.output)?;
        writeln!(self.output, "   **********      ")?;
        writeln!(self.output)?;
        for line in lines {
            writeln!(self.output, "  {line}")?;
        }
        writeln!(self.output)?;
        writeln!(self.output, "   **********      ")?;
        writeln!(self.output)?;
        writeln!(self.output)
    }
}

impl<R: BufRead, W: Write> ConfirmOverwrite for Console<R, W> {
    fn confirm_overwrite(&mut self, path: &Path) -> io::Result<bool> {
        self.confirm(&format!(
            "The specification file {} exists, are you sure you want to continue?",
            path.display()
        ))
    }
}
