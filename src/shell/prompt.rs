use std::io;
use std::io::{BufRead, ErrorKind, Write};

// Prompter reads one trimmed answer per line. End of input surfaces as an
// UnexpectedEof error so the menu loop can unwind from any depth.
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
        }
    }

    pub fn say(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.output, "{}", text)
    }

    pub fn ask(&mut self, label: &str) -> io::Result<String> {
        write!(self.output, "{}", label)?;
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(io::Error::new(ErrorKind::UnexpectedEof, "input closed"));
        }
        Ok(line.trim().to_string())
    }

    pub fn required(&mut self, label: &str) -> io::Result<String> {
        loop {
            let answer = self.ask(label)?;
            if !answer.is_empty() {
                return Ok(answer);
            }
            self.say("Input cannot be empty. Please try again.")?;
        }
    }

    // empty answer means "not provided"
    pub fn optional(&mut self, label: &str) -> io::Result<Option<String>> {
        Ok(Some(self.ask(label)?).filter(|answer| !answer.is_empty()))
    }

    pub fn number(&mut self, label: &str) -> io::Result<i64> {
        loop {
            match self.required(label)?.parse::<i64>() {
                Ok(n) => return Ok(n),
                Err(_) => self.say("Invalid input. Please enter a whole number.")?,
            }
        }
    }

    pub fn optional_number(&mut self, label: &str) -> io::Result<Option<i64>> {
        match self.optional(label)? {
            None => Ok(None),
            Some(answer) => match answer.parse::<i64>() {
                Ok(n) => Ok(Some(n)),
                Err(_) => {
                    self.say("Invalid quantity. Skipping quantity update.")?;
                    Ok(None)
                }
            },
        }
    }

    pub fn into_output(self) -> W {
        self.output
    }
}
