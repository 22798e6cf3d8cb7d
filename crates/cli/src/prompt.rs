//! Yes/no prompting on a line-oriented terminal.

use std::io::{self, BufRead, Write};

use relink_core::confirm::is_affirmative;

/// Asks questions on `output` and reads one answer line from `input`.
///
/// End of input counts as "no".
pub struct TerminalPrompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> TerminalPrompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn confirm(&mut self, question: &str) -> io::Result<bool> {
        writeln!(self.output, " {question} (yes/no) [no]:")?;
        write!(self.output, " > ")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            writeln!(self.output)?;
            return Ok(false);
        }
        Ok(is_affirmative(&line))
    }
}
