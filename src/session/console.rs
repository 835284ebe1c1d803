use std::io::{BufRead, BufReader, Write};
use crate::core::library::LibraryResult;

pub const CHOICE_PROMPT: &str = "Enter your choice: ";

// Choice is the outcome of reading a numbered menu selection
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Choice {
    Number(i64),
    Invalid,
    EndOfInput,
}

// Console wraps the interactive line based input and the output the user sees.
pub struct Console {
    input: Box<dyn BufRead + Send>,
    output: Box<dyn Write + Send>,
}

impl Console {
    pub fn new(input: Box<dyn BufRead + Send>, output: Box<dyn Write + Send>) -> Self {
        Self {
            input,
            output,
        }
    }

    pub fn stdio() -> Self {
        Console::new(Box::new(BufReader::new(std::io::stdin())), Box::new(std::io::stdout()))
    }

    pub fn println(&mut self, message: &str) -> LibraryResult<()> {
        writeln!(self.output, "{}", message)?;
        self.output.flush()?;
        Ok(())
    }

    pub fn print(&mut self, message: &str) -> LibraryResult<()> {
        write!(self.output, "{}", message)?;
        self.output.flush()?;
        Ok(())
    }

    // Reads one line without its line terminator, None once input is exhausted.
    // Bytes that are not valid utf-8 are replaced so a garbled line still parses.
    pub fn read_line(&mut self) -> LibraryResult<Option<String>> {
        let mut buf = Vec::new();
        if self.input.read_until(b'\n', &mut buf)? == 0 {
            return Ok(None);
        }
        let mut line = String::from_utf8_lossy(&buf).into_owned();
        let len = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(len);
        Ok(Some(line))
    }

    pub fn prompt(&mut self, message: &str) -> LibraryResult<Option<String>> {
        self.print(message)?;
        self.read_line()
    }

    // Prompts for a menu number. Blank lines are skipped while waiting for a number.
    pub fn read_choice(&mut self) -> LibraryResult<Choice> {
        self.print(CHOICE_PROMPT)?;
        loop {
            match self.read_line()? {
                None => return Ok(Choice::EndOfInput),
                Some(line) if line.trim().is_empty() => continue,
                Some(line) => {
                    return Ok(parse_number(line.as_str()).map_or(Choice::Invalid, Choice::Number));
                }
            }
        }
    }
}

pub fn parse_number(line: &str) -> Option<i64> {
    line.trim().parse::<i64>().ok()
}
