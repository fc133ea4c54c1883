//! Interactive input

use std::io;
use std::io::BufRead;
use std::io::Write;

/// Source of answers to interactive questions
pub trait InputSource {
    /// Ask a question and read a single line as answer
    ///
    /// The answer is trimmed, end of input gives an empty answer
    fn ask(&mut self, question: &str) -> io::Result<String>;
}

/// Console input, questions go to stdout and answers come from stdin
pub struct Console<R, W> {
    reader: R,
    writer: W,
}

impl Console<io::StdinLock<'static>, io::Stdout> {
    /// Console connected to the terminal of the process
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R, W> Console<R, W>
where
    R: BufRead,
    W: Write,
{
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }
}

impl<R, W> InputSource for Console<R, W>
where
    R: BufRead,
    W: Write,
{
    fn ask(&mut self, question: &str) -> io::Result<String> {
        writeln!(self.writer, "{question}")?;
        self.writer.flush()?;

        let mut answer = String::new();
        self.reader.read_line(&mut answer)?;

        Ok(answer.trim().to_string())
    }
}
