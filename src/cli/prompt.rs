use std::{
    fmt::Display,
    io::{BufRead, Write},
    str::FromStr,
};

use log::debug;

use crate::{Result, WorkLogError};

/// Line-oriented question/answer exchange over any reader and writer
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn output(&self) -> &W {
        &self.output
    }

    /// Prints one line
    pub fn say(&mut self, line: impl Display) -> Result<()> {
        writeln!(self.output, "{}", line)?;
        Ok(())
    }

    /// Prints `question` and returns the trimmed answer.
    ///
    /// Fails with [`WorkLogError::InputClosed`] once the input is exhausted.
    pub fn ask(&mut self, question: &str) -> Result<String> {
        write!(self.output, "{}", question)?;
        self.output.flush()?;

        let mut answer = String::new();
        if self.input.read_line(&mut answer)? == 0 {
            debug!("Input closed while waiting for: {}", question.trim());
            return Err(WorkLogError::InputClosed);
        }
        Ok(answer.trim().to_string())
    }

    /// Repeats `question` until `parse` accepts the answer. The message of an
    /// `InvalidInput` error is shown before asking again; other errors are
    /// returned.
    pub fn ask_with<T, F>(&mut self, question: &str, parse: F) -> Result<T>
    where
        F: Fn(&str) -> Result<T>,
    {
        loop {
            let answer = self.ask(question)?;
            match parse(&answer) {
                Ok(value) => return Ok(value),
                Err(WorkLogError::InvalidInput { message }) => self.say(message)?,
                Err(e) => return Err(e),
            }
        }
    }

    /// Yes/no question where anything but "y" or "yes" means no
    pub fn confirm(&mut self, question: &str) -> Result<bool> {
        let answer = self.ask(question)?.to_lowercase();
        Ok(answer == "y" || answer == "yes")
    }

    /// Asks until the answer parses as one of the options of `C`
    pub fn choose<C>(&mut self, question: &str) -> Result<C>
    where
        C: FromStr<Err = WorkLogError>,
    {
        self.ask_with(question, |answer| answer.parse::<C>())
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;
    use crate::{parse_minutes, MainChoice};

    fn prompter(script: &str) -> Prompter<Cursor<Vec<u8>>, Vec<u8>> {
        Prompter::new(Cursor::new(script.as_bytes().to_vec()), Vec::new())
    }

    fn printed(prompter: &Prompter<Cursor<Vec<u8>>, Vec<u8>>) -> String {
        String::from_utf8_lossy(prompter.output()).into_owned()
    }

    #[test]
    fn invalid_answers_repeat_the_question() {
        let mut prompter = prompter("five\n\n23\n");
        assert_eq!(prompter.ask_with("Minutes: ", parse_minutes).unwrap(), 23);

        let output = printed(&prompter);
        assert_eq!(output.matches("Minutes: ").count(), 3);
        assert!(output.contains("'five' is not a valid number of minutes"));
    }

    #[test]
    fn closed_input_is_reported() {
        let mut prompter = prompter("");
        assert!(matches!(prompter.ask("Name: "), Err(WorkLogError::InputClosed)));
    }

    #[test]
    fn confirm_defaults_to_no() {
        let mut prompter = prompter("Y\n\nyes\nnope\n");
        assert!(prompter.confirm("? ").unwrap());
        assert!(!prompter.confirm("? ").unwrap());
        assert!(prompter.confirm("? ").unwrap());
        assert!(!prompter.confirm("? ").unwrap());
    }

    #[test]
    fn choose_skips_unknown_letters() {
        let mut prompter = prompter("l\nq\n");
        assert_eq!(prompter.choose::<MainChoice>("> ").unwrap(), MainChoice::Quit);
        assert!(printed(&prompter).contains("'l' is not a valid option."));
    }
}
