//! Diagnostic channel and yes/no confirmation.
//!
//! All notices and questions go to one writer (stderr for the CLI), answers
//! are read from one reader (stdin for the CLI). Both are injectable so the
//! rename flow can be driven from tests.

use std::io::{self, BufRead, Stderr, StdinLock, Write};

use crate::error::{Error, Result};

/// A yes/no question, asked until the answer is `y` or `n`.
pub struct YesNoPrompt {
    pub question: String,
}

impl YesNoPrompt {
    pub fn new(question: impl Into<String>) -> Self {
        Self {
            question: question.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reply {
    Yes,
    No,
}

/// Case-insensitive; anything but a lone `y` or `n` is rejected.
pub fn parse_reply(line: &str) -> Option<Reply> {
    match line.trim().to_lowercase().as_str() {
        "y" => Some(Reply::Yes),
        "n" => Some(Reply::No),
        _ => None,
    }
}

pub struct PromptEngine<R, W> {
    input: R,
    output: W,
}

impl PromptEngine<StdinLock<'static>, Stderr> {
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stderr())
    }
}

impl<R: BufRead, W: Write> PromptEngine<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Print one line of diagnostics.
    pub fn message(&mut self, msg: &str) {
        writeln!(self.output, "{}", msg).ok();
    }

    /// Ask until a valid answer arrives. End of input is an error, never a yes.
    pub fn yes_no(&mut self, prompt: &YesNoPrompt) -> Result<bool> {
        loop {
            write!(self.output, "{} [y/n] ", prompt.question).ok();
            self.output.flush().ok();

            let mut line = String::new();
            let read = self
                .input
                .read_line(&mut line)
                .map_err(|e| Error::internal_io(e.to_string(), Some("read answer".to_string())))?;
            if read == 0 {
                return Err(Error::prompt_input_closed());
            }

            match parse_reply(&line) {
                Some(reply) => return Ok(reply == Reply::Yes),
                None => self.message("Please answer `y' or `n'."),
            }
        }
    }

    pub fn into_output(self) -> W {
        self.output
    }
}
