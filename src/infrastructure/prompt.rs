//! Interactive menu used when figmd runs without a subcommand

use crate::domain::{ExtensionSet, RewriteRequest};
use crate::error::{FigmdError, Result};
use crate::infrastructure::DocumentStore;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

/// Text menu reading answers from `input` and printing questions to `output`.
pub struct Prompt<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompt<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Prompt { input, output }
    }

    /// Ask for a mode and its paths, returning the request to execute.
    ///
    /// Fails with `InvalidChoice` for an unknown mode and with `NotFound`
    /// when `store` has no such directory. A missing file is left to the
    /// service that executes the request.
    pub fn ask_request(&mut self, store: &impl DocumentStore) -> Result<RewriteRequest> {
        writeln!(self.output, "figmd - convert {{{{<figure>}}}} shortcodes to markdown images")?;
        writeln!(self.output, "{}", "=".repeat(50))?;

        let choice = self.ask(
            "Choose a mode:\n1. Rewrite a single file\n2. Rewrite a directory\nEnter choice (1/2): ",
        )?;

        match choice.as_str() {
            "1" => {
                let path = PathBuf::from(self.ask("File path: ")?);
                Ok(RewriteRequest::file(path))
            }
            "2" => {
                let answer = self.ask("Directory path (blank for current directory): ")?;
                let root = if answer.is_empty() {
                    PathBuf::from(".")
                } else {
                    PathBuf::from(answer)
                };
                if !store.exists(&root) {
                    return Err(FigmdError::NotFound(root));
                }

                let question = format!(
                    "Extensions to process (default: {}): ",
                    ExtensionSet::default()
                );
                let extensions = ExtensionSet::parse(&self.ask(&question)?);
                Ok(RewriteRequest::directory(root, extensions))
            }
            other => Err(FigmdError::InvalidChoice(other.to_string())),
        }
    }

    fn ask(&mut self, question: &str) -> Result<String> {
        write!(self.output, "{}", question)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(FigmdError::Io(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "input closed before an answer was given",
            )));
        }

        Ok(line.trim().to_string())
    }
}
