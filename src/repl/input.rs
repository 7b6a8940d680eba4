use std::io::{self, BufRead, Write};

/// Write a prompt without a trailing newline and flush it
///
/// # Errors
///
/// Returns any error from the underlying writer.
pub fn prompt<W: Write>(out: &mut W, text: &str) -> io::Result<()> {
    write!(out, "{text}")?;
    out.flush()
}

/// Read one line without its line ending. Returns `Ok(None)` at end of input.
///
/// Bytes that are not valid UTF-8 become U+FFFD instead of failing the read.
///
/// # Errors
///
/// Returns any error from the underlying reader.
pub fn read_line<R: BufRead>(input: &mut R) -> io::Result<Option<String>> {
    let mut bytes = Vec::new();
    if input.read_until(b'\n', &mut bytes)? == 0 {
        return Ok(None);
    }
    let mut line = String::from_utf8_lossy(&bytes).into_owned();
    let trimmed = line.trim_end_matches(['\n', '\r']).len();
    line.truncate(trimmed);
    Ok(Some(line))
}

/// Reads whitespace-separated tokens across line boundaries
pub struct Scanner<R> {
    rdr: R,
    buf: String,
    pos: usize,
}

impl<R: BufRead> Scanner<R> {
    pub fn new(rdr: R) -> Self {
        Self {
            rdr,
            buf: String::new(),
            pos: 0,
        }
    }

    /// Refills the internal line buffer. Returns `Ok(true)` if data read, `Ok(false)` on EOF.
    fn fill_line(&mut self) -> io::Result<bool> {
        self.pos = 0;
        match read_line(&mut self.rdr)? {
            Some(line) => {
                self.buf = line;
                Ok(true)
            }
            None => {
                self.buf.clear();
                Ok(false)
            }
        }
    }

    /// Next token, or `Ok(None)` once the input is exhausted
    ///
    /// # Errors
    ///
    /// Returns any error from the underlying reader.
    pub fn next_token(&mut self) -> io::Result<Option<String>> {
        loop {
            let rest = &self.buf[self.pos..];
            let trimmed = rest.trim_start();
            self.pos += rest.len() - trimmed.len();

            if trimmed.is_empty() {
                if !self.fill_line()? {
                    return Ok(None);
                }
                continue;
            }

            let len = trimmed
                .find(char::is_whitespace)
                .unwrap_or(trimmed.len());
            let token = trimmed[..len].to_string();
            self.pos += len;
            return Ok(Some(token));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scanner_spans_lines() {
        let mut scanner = Scanner::new("  5 4\n\n   r\n7\n".as_bytes());
        let mut tokens = Vec::new();
        while let Some(token) = scanner.next_token().unwrap() {
            tokens.push(token);
        }
        assert_eq!(tokens, vec!["5", "4", "r", "7"]);
    }

    #[test]
    fn test_scanner_eof_without_newline() {
        let mut scanner = Scanner::new("RGBY".as_bytes());
        assert_eq!(scanner.next_token().unwrap().as_deref(), Some("RGBY"));
        assert_eq!(scanner.next_token().unwrap(), None);
    }

    #[test]
    fn test_read_line_strips_line_ending() {
        let mut input = "libraries\r\nquit".as_bytes();
        assert_eq!(read_line(&mut input).unwrap().as_deref(), Some("libraries"));
        assert_eq!(read_line(&mut input).unwrap().as_deref(), Some("quit"));
        assert_eq!(read_line(&mut input).unwrap(), None);
    }

    #[test]
    fn test_read_line_replaces_invalid_utf8() {
        let mut input: &[u8] = b"\xff\xfe\nquit\n";
        assert_eq!(
            read_line(&mut input).unwrap().as_deref(),
            Some("\u{FFFD}\u{FFFD}")
        );
        assert_eq!(read_line(&mut input).unwrap().as_deref(), Some("quit"));
    }

    #[test]
    fn test_scanner_skips_past_invalid_utf8() {
        let mut scanner = Scanner::new(&b"\xff 5\n4\n"[..]);
        assert_eq!(scanner.next_token().unwrap().as_deref(), Some("\u{FFFD}"));
        assert_eq!(scanner.next_token().unwrap().as_deref(), Some("5"));
        assert_eq!(scanner.next_token().unwrap().as_deref(), Some("4"));
    }

    #[test]
    fn test_prompt_has_no_newline() {
        let mut out = Vec::new();
        prompt(&mut out, "lib> ").unwrap();
        assert_eq!(out, b"lib> ");
    }
}
