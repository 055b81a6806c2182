//! The input/output boundary between the walker and the user.

use std::collections::VecDeque;
use std::io::{self, BufRead, BufReader, Stdin, Stdout, Write};

use crate::sentinel::QUIT;

/// Line-oriented input and output for a walk.
///
/// Implementations must translate end of input and interruptions into the
/// `::QUIT` token, and must not emit a line identical to the one emitted
/// right before it.
pub trait Stream {
    /// Block until one line of input is available.
    fn read(&mut self) -> String;

    /// Show one line to the user.
    fn write(&mut self, text: &str) -> io::Result<()>;
}

/// Suppresses a line identical to the previously emitted one.
#[derive(Debug, Clone, Default)]
pub struct RepeatFilter {
    last: Option<String>,
}

impl RepeatFilter {
    /// Create an empty filter.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if `text` should be emitted, and remembers it.
    pub fn admit(&mut self, text: &str) -> bool {
        if self.last.as_deref() == Some(text) {
            return false;
        }
        self.last = Some(text.to_string());
        true
    }
}

/// Interactive stream over a line reader and a writer.
pub struct ConsoleStream<R, W> {
    input: R,
    output: W,
    prompt: String,
    filter: RepeatFilter,
}

impl ConsoleStream<BufReader<Stdin>, Stdout> {
    /// A console bound to the process's standard input and output.
    pub fn stdio() -> Self {
        Self::new(BufReader::new(io::stdin()), io::stdout())
    }
}

impl<R: BufRead, W: Write> ConsoleStream<R, W> {
    /// Create a console over the given reader and writer.
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            prompt: ">> ".to_string(),
            filter: RepeatFilter::new(),
        }
    }

    /// Set the prompt printed before each read.
    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = prompt.into();
        self
    }

    /// Consume the console and return its writer.
    pub fn into_output(self) -> W {
        self.output
    }
}

impl<R: BufRead, W: Write> Stream for ConsoleStream<R, W> {
    fn read(&mut self) -> String {
        if write!(self.output, "{}", self.prompt)
            .and_then(|()| self.output.flush())
            .is_err()
        {
            return QUIT.to_string();
        }

        let mut line = String::new();
        match self.input.read_line(&mut line) {
            Ok(0) | Err(_) => QUIT.to_string(),
            Ok(_) => line.trim_end_matches(['\r', '\n']).to_string(),
        }
    }

    fn write(&mut self, text: &str) -> io::Result<()> {
        if !self.filter.admit(text) {
            return Ok(());
        }
        writeln!(self.output, "{text}")?;
        self.output.flush()
    }
}

/// A stream fed from a fixed list of inputs, recording what is written.
///
/// Once the inputs are exhausted every read returns `::QUIT`.
#[derive(Debug, Clone, Default)]
pub struct ScriptedStream {
    inputs: VecDeque<String>,
    written: Vec<String>,
    reads: usize,
    filter: RepeatFilter,
}

impl ScriptedStream {
    /// Create a stream that answers reads with `inputs`, in order.
    pub fn new<I, S>(inputs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            inputs: inputs.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    /// Lines emitted so far.
    pub fn written(&self) -> &[String] {
        &self.written
    }

    /// Number of reads performed so far.
    pub fn reads(&self) -> usize {
        self.reads
    }
}

impl Stream for ScriptedStream {
    fn read(&mut self) -> String {
        self.reads += 1;
        self.inputs.pop_front().unwrap_or_else(|| QUIT.to_string())
    }

    fn write(&mut self, text: &str) -> io::Result<()> {
        if self.filter.admit(text) {
            self.written.push(text.to_string());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    #[test]
    fn repeat_filter_suppresses_only_consecutive_duplicates() {
        let mut filter = RepeatFilter::new();
        assert!(filter.admit("Hello"));
        assert!(!filter.admit("Hello"));
        assert!(filter.admit("World"));
        assert!(filter.admit("Hello"));
    }

    #[test]
    fn console_writes_lines_once() {
        let mut console = ConsoleStream::new(Cursor::new(Vec::new()), Vec::new());
        console.write("Hello").unwrap();
        console.write("Hello").unwrap();
        console.write("Bye").unwrap();

        let output = String::from_utf8(console.into_output()).unwrap();
        assert_eq!(output, "Hello\nBye\n");
    }

    #[test]
    fn console_reads_lines_then_quits_at_eof() {
        let mut console = ConsoleStream::new(Cursor::new(b"go\r\nstay\n".to_vec()), Vec::new());
        assert_eq!(console.read(), "go");
        assert_eq!(console.read(), "stay");
        assert_eq!(console.read(), QUIT);

        let output = String::from_utf8(console.into_output()).unwrap();
        assert_eq!(output, ">> >> >> ");
    }

    #[test]
    fn console_custom_prompt() {
        let mut console =
            ConsoleStream::new(Cursor::new(b"x\n".to_vec()), Vec::new()).with_prompt("? ");
        console.read();
        assert_eq!(String::from_utf8(console.into_output()).unwrap(), "? ");
    }

    #[test]
    fn scripted_stream_records_and_quits() {
        let mut stream = ScriptedStream::new(["a"]);
        assert_eq!(stream.read(), "a");
        assert_eq!(stream.read(), QUIT);
        assert_eq!(stream.reads(), 2);

        stream.write("Hello").unwrap();
        stream.write("Hello").unwrap();
        assert_eq!(stream.written(), ["Hello"]);
    }
}
