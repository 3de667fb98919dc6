//! # Terminal I/O
//!
//! Line-oriented prompts and messages over any `BufRead` / `Write` pair.
//! The binary wraps stdin/stdout; tests use a `Cursor` and a `Vec<u8>`.
//!
//! ## Message Severities
//! ```text
//! [SUCCESS] ...   clears the screen first
//! [ERROR]   ...   clears the screen first
//! [WARNING] ...   printed in place (keeps the invoice/table visible)
//! ```
//! Clearing is skipped when `clear_screen` is off.

use std::io::{BufRead, Write};
use std::str::FromStr;

use crate::error::{CommandError, ConsoleError, ConsoleResult};

/// ANSI: erase display, cursor home.
const CLEAR_SEQUENCE: &str = "\x1b[2J\x1b[H";

const UNREADABLE_INPUT: &str = "Invalid input! Please enter plain text.";

pub const RULE: &str = "================================================================";
pub const THIN_RULE: &str = "----------------------------------------------------------------";

/// Prompt/response wrapper around the terminal.
pub struct Console<R, W> {
    input: R,
    output: W,
    clear_screen: bool,
    pause: bool,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W, clear_screen: bool, pause: bool) -> Self {
        Console {
            input,
            output,
            clear_screen,
            pause,
        }
    }

    /// Gives back the output sink.
    #[cfg(test)]
    pub fn into_output(self) -> W {
        self.output
    }

    // -------------------------------------------------------------------------
    // Input
    // -------------------------------------------------------------------------

    /// Reads one line without its terminator.
    ///
    /// Returns `Closed` at end of input. Bytes that are not UTF-8 are an
    /// input-format error; the rest of the stream stays readable.
    pub fn read_line(&mut self) -> ConsoleResult<String> {
        self.output.flush()?;

        let mut buf = Vec::new();
        if self.input.read_until(b'\n', &mut buf)? == 0 {
            return Err(ConsoleError::Closed);
        }

        while matches!(buf.last(), Some(b'\n' | b'\r')) {
            buf.pop();
        }
        String::from_utf8(buf).map_err(|_| CommandError::input_format(UNREADABLE_INPUT).into())
    }

    /// Prints `label` and reads a text answer (may be empty).
    pub fn prompt(&mut self, label: &str) -> ConsoleResult<String> {
        write!(self.output, "{}", label)?;
        self.read_line()
    }

    /// Prints `label` and parses the answer.
    ///
    /// An unparsable answer becomes an input-format error carrying
    /// `format_error`.
    pub fn prompt_parsed<T: FromStr>(&mut self, label: &str, format_error: &str) -> ConsoleResult<T> {
        let line = self.prompt(label)?;
        line.trim()
            .parse()
            .map_err(|_| CommandError::input_format(format_error).into())
    }

    /// Prints `label` and reads a whole number.
    pub fn prompt_i64(&mut self, label: &str, format_error: &str) -> ConsoleResult<i64> {
        self.prompt_parsed(label, format_error)
    }

    /// Prints `label` and reads a finite decimal.
    pub fn prompt_f64(&mut self, label: &str, format_error: &str) -> ConsoleResult<f64> {
        let value: f64 = self.prompt_parsed(label, format_error)?;
        if !value.is_finite() {
            return Err(CommandError::input_format(format_error).into());
        }
        Ok(value)
    }

    // -------------------------------------------------------------------------
    // Output
    // -------------------------------------------------------------------------

    pub fn clear(&mut self) -> ConsoleResult<()> {
        if self.clear_screen {
            write!(self.output, "{}", CLEAR_SEQUENCE)?;
        }
        Ok(())
    }

    /// Starts a new screen: clear, then a boxed title.
    pub fn screen(&mut self, title: &str) -> ConsoleResult<()> {
        self.clear()?;
        self.header(title)
    }

    pub fn header(&mut self, title: &str) -> ConsoleResult<()> {
        write!(self.output, "\n{}\n  {}\n{}\n", RULE, title, RULE)?;
        Ok(())
    }

    pub fn line(&mut self, text: &str) -> ConsoleResult<()> {
        writeln!(self.output, "{}", text)?;
        Ok(())
    }

    /// Writes pre-rendered text as is.
    pub fn block(&mut self, text: &str) -> ConsoleResult<()> {
        write!(self.output, "{}", text)?;
        Ok(())
    }

    pub fn success(&mut self, message: &str) -> ConsoleResult<()> {
        self.clear()?;
        writeln!(self.output, "\n[SUCCESS] {}", message)?;
        Ok(())
    }

    pub fn error(&mut self, message: &str) -> ConsoleResult<()> {
        self.clear()?;
        writeln!(self.output, "\n[ERROR] {}", message)?;
        Ok(())
    }

    pub fn warning(&mut self, message: &str) -> ConsoleResult<()> {
        writeln!(self.output, "\n[WARNING] {}", message)?;
        Ok(())
    }

    /// Waits for Enter unless pausing is disabled.
    pub fn pause(&mut self) -> ConsoleResult<()> {
        if !self.pause {
            return Ok(());
        }

        write!(self.output, "\nPress Enter to continue...")?;
        self.read_line().map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn console(input: &str) -> Console<Cursor<Vec<u8>>, Vec<u8>> {
        Console::new(Cursor::new(input.as_bytes().to_vec()), Vec::new(), false, false)
    }

    fn transcript(console: Console<Cursor<Vec<u8>>, Vec<u8>>) -> String {
        String::from_utf8(console.into_output()).unwrap()
    }

    #[test]
    fn test_read_line_strips_terminators() {
        let mut c = console("Laptop\r\nMouse\n");
        assert_eq!(c.read_line().unwrap(), "Laptop");
        assert_eq!(c.read_line().unwrap(), "Mouse");
        assert!(matches!(c.read_line(), Err(ConsoleError::Closed)));
    }

    #[test]
    fn test_non_utf8_line_is_input_error() {
        let mut c = Console::new(Cursor::new(b"\xff\xfe\r\nMouse\n".to_vec()), Vec::new(), false, false);

        match c.read_line() {
            Err(ConsoleError::Command(e)) => {
                assert_eq!(e.code, crate::error::ErrorCode::InputFormat);
                assert_eq!(e.message, UNREADABLE_INPUT);
            }
            other => panic!("unexpected: {:?}", other),
        }
        assert_eq!(c.read_line().unwrap(), "Mouse");
    }

    #[test]
    fn test_prompt_numbers() {
        let mut c = console(" 42 \nabc\n12.5\nNaN\n");

        assert_eq!(c.prompt_i64("Enter ID: ", "bad id").unwrap(), 42);

        match c.prompt_i64("Enter ID: ", "bad id") {
            Err(ConsoleError::Command(e)) => assert_eq!(e.message, "bad id"),
            other => panic!("unexpected: {:?}", other),
        }

        assert_eq!(c.prompt_f64("Enter Price: $", "bad price").unwrap(), 12.5);
        assert!(c.prompt_f64("Enter Price: $", "bad price").is_err());

        assert!(transcript(c).starts_with("Enter ID: Enter ID: "));
    }

    #[test]
    fn test_messages_and_clear() {
        let mut c = Console::new(Cursor::new(Vec::new()), Vec::new(), true, false);
        c.success("Saved").unwrap();
        c.warning("Careful").unwrap();

        let out = transcript(c);
        assert!(out.starts_with(CLEAR_SEQUENCE));
        assert!(out.contains("\n[SUCCESS] Saved\n"));
        assert!(out.contains("\n[WARNING] Careful\n"));
        assert_eq!(out.matches(CLEAR_SEQUENCE).count(), 1);
    }

    #[test]
    fn test_pause_disabled_reads_nothing() {
        let mut c = console("next\n");
        c.pause().unwrap();
        assert_eq!(c.read_line().unwrap(), "next");
    }

    #[test]
    fn test_pause_enabled_consumes_a_line() {
        let mut c = Console::new(Cursor::new(b"\nnext\n".to_vec()), Vec::new(), false, true);
        c.pause().unwrap();
        assert_eq!(c.read_line().unwrap(), "next");
        assert!(transcript(c).contains("Press Enter to continue..."));
    }
}
