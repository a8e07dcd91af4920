//! Line-oriented prompting over any reader/writer pair

use std::io::{BufRead, Write};

use crate::error::{CliError, ValidationError};

pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn output(&mut self) -> &mut W {
        &mut self.output
    }

    pub fn into_inner(self) -> (R, W) {
        (self.input, self.output)
    }

    /// Print `question` and read one line without its line ending.
    ///
    /// Returns `Ok(None)` at end of input.
    pub fn ask(&mut self, question: &str) -> Result<Option<String>, CliError> {
        write!(self.output, "{question}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let trimmed_len = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed_len);
        Ok(Some(line))
    }

    /// Like `ask`, but end of input is an error
    pub fn answer(&mut self, question: &str) -> Result<String, CliError> {
        self.ask(question)?.ok_or(CliError::InputClosed)
    }

    /// Ask until `validate` accepts the answer, printing each rejection
    pub fn ask_valid<T, F>(&mut self, question: &str, validate: F) -> Result<T, CliError>
    where
        F: Fn(&str) -> Result<T, ValidationError>,
    {
        loop {
            let line = self.answer(question)?;
            match validate(&line) {
                Ok(value) => return Ok(value),
                Err(e) => writeln!(self.output, "Invalid input: {e}")?,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn prompter(input: &str) -> Prompter<Cursor<Vec<u8>>, Vec<u8>> {
        Prompter::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    fn printed(p: Prompter<Cursor<Vec<u8>>, Vec<u8>>) -> String {
        String::from_utf8(p.into_inner().1).unwrap()
    }

    #[test]
    fn test_ask_strips_line_endings() {
        let mut p = prompter("first\r\nsecond\n");
        assert_eq!(p.ask("? ").unwrap().as_deref(), Some("first"));
        assert_eq!(p.ask("? ").unwrap().as_deref(), Some("second"));
        assert_eq!(p.ask("? ").unwrap(), None);
        assert_eq!(printed(p), "? ? ? ");
    }

    #[test]
    fn test_answer_at_eof() {
        let mut p = prompter("");
        assert!(matches!(p.answer("? "), Err(CliError::InputClosed)));
    }

    #[test]
    fn test_ask_valid_reprompts() {
        let mut p = prompter("abc\n150\n42\n");
        let value = p.ask_valid("Score: ", crate::validate::score).unwrap();
        assert_eq!(value, 42);

        let out = printed(p);
        assert_eq!(out.matches("Score: ").count(), 3);
        assert!(out.contains("Invalid input: Score must be a whole number."));
        assert!(out.contains("Invalid input: Score must be between 0 and 100."));
    }
}
