use anyhow::Context;
use std::io::{BufRead, Write};

/// Line-oriented question/answer over any reader and writer pair.
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Print `label` without a newline and read one line of input.
    /// End of input counts as an empty answer.
    pub fn ask(&mut self, label: &str) -> anyhow::Result<String> {
        write!(self.output, "{}", label).context("writing prompt")?;
        self.output.flush().context("flushing prompt")?;

        let mut line = String::new();
        self.input.read_line(&mut line).context("reading input")?;

        let answer = line.trim_end_matches(['\r', '\n']);
        Ok(answer.to_string())
    }

    /// Ask a yes/no question; only `y` (any case) counts as yes.
    pub fn confirm(&mut self, label: &str) -> anyhow::Result<bool> {
        let answer = self.ask(label)?;
        Ok(answer.trim().eq_ignore_ascii_case("y"))
    }
}
