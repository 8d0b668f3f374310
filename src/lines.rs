//! Line-oriented reading with line numbers.

use std::io::{self, BufRead};

/// One input line with its terminator stripped.
#[derive(Debug, Clone, Copy)]
pub struct Line<'a> {
    /// 1-based line number.
    pub number: usize,
    /// Line content without `\n` or `\r\n`.
    pub text: &'a str,
    /// Whether the line ended with a newline (false only for a final
    /// unterminated line).
    pub terminated: bool,
}

/// Reads a [`BufRead`] one line at a time, reusing a single buffer.
pub struct LineSource<R> {
    reader: R,
    buf: String,
    line: usize,
}

impl<R: BufRead> LineSource<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            buf: String::new(),
            line: 0,
        }
    }

    /// Returns the next line, or `None` at end of stream.
    pub fn next_line(&mut self) -> io::Result<Option<Line<'_>>> {
        self.buf.clear();
        if self.reader.read_line(&mut self.buf)? == 0 {
            return Ok(None);
        }
        self.line += 1;

        let terminated = self.buf.ends_with('\n');
        let text = self.buf.strip_suffix('\n').unwrap_or(self.buf.as_str());
        let text = text.strip_suffix('\r').unwrap_or(text);

        Ok(Some(Line {
            number: self.line,
            text,
            terminated,
        }))
    }

    /// Number of lines read so far.
    pub fn line_number(&self) -> usize {
        self.line
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numbers_and_terminators() {
        let mut src = LineSource::new("a b\r\nc\nd".as_bytes());

        let l = src.next_line().unwrap().unwrap();
        assert_eq!((l.number, l.text, l.terminated), (1, "a b", true));

        let l = src.next_line().unwrap().unwrap();
        assert_eq!((l.number, l.text, l.terminated), (2, "c", true));

        let l = src.next_line().unwrap().unwrap();
        assert_eq!((l.number, l.text, l.terminated), (3, "d", false));

        assert!(src.next_line().unwrap().is_none());
        assert_eq!(src.line_number(), 3);
    }

    #[test]
    fn test_invalid_utf8_is_read_error() {
        let bytes: &[u8] = &[0xff, 0xfe, b'\n'];
        let mut src = LineSource::new(bytes);
        assert!(src.next_line().is_err());
    }
}
