//! Character sources feeding the lexer.
//!
//! The lexer never sees a whole buffer; it pulls one code point at a time
//! from a [`CharSource`]. Two sources are provided: [`StrSource`] for text
//! already in memory and [`ReaderSource`] for anything implementing
//! [`std::io::Read`], decoded as UTF-8 on the fly.

use std::io::{self, BufReader, Read};

/// A sequential supplier of characters.
///
/// `next_char` returns `None` once the input is exhausted. Implementations
/// must keep returning `None` after that point.
pub trait CharSource {
    /// Returns the next character, or `None` at end of input.
    fn next_char(&mut self) -> Option<char>;
}

/// Characters from an in-memory string.
///
/// # Example
///
/// ```
/// use collc_lex::source::{CharSource, StrSource};
///
/// let mut source = StrSource::new("ab");
/// assert_eq!(source.next_char(), Some('a'));
/// assert_eq!(source.next_char(), Some('b'));
/// assert_eq!(source.next_char(), None);
/// ```
pub struct StrSource<'a> {
    chars: std::str::Chars<'a>,
}

impl<'a> StrSource<'a> {
    /// Creates a source over `text`.
    pub fn new(text: &'a str) -> Self {
        Self { chars: text.chars() }
    }
}

impl CharSource for StrSource<'_> {
    #[inline]
    fn next_char(&mut self) -> Option<char> {
        self.chars.next()
    }
}

/// Characters decoded from a byte stream.
///
/// Read failures and malformed UTF-8 end the stream: they are logged and
/// reported to the lexer as plain end of input.
///
/// # Example
///
/// ```
/// use collc_lex::source::{CharSource, ReaderSource};
///
/// let mut source = ReaderSource::new("é!".as_bytes());
/// assert_eq!(source.next_char(), Some('é'));
/// assert_eq!(source.next_char(), Some('!'));
/// assert_eq!(source.next_char(), None);
/// ```
pub struct ReaderSource<R> {
    reader: BufReader<R>,
    exhausted: bool,
}

impl<R: Read> ReaderSource<R> {
    /// Wraps `reader` in a buffered UTF-8 decoder.
    pub fn new(reader: R) -> Self {
        Self {
            reader: BufReader::new(reader),
            exhausted: false,
        }
    }

    /// Reads a single byte, retrying on `Interrupted`.
    fn read_byte(&mut self) -> io::Result<Option<u8>> {
        let mut buf = [0u8; 1];
        loop {
            match self.reader.read(&mut buf) {
                Ok(0) => return Ok(None),
                Ok(_) => return Ok(Some(buf[0])),
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            }
        }
    }

    fn decode(&mut self) -> io::Result<Option<char>> {
        let Some(lead) = self.read_byte()? else {
            return Ok(None);
        };

        let width = utf8_width(lead).ok_or_else(|| invalid_utf8(lead))?;
        let mut buf = [lead, 0, 0, 0];
        for slot in buf.iter_mut().take(width).skip(1) {
            *slot = self
                .read_byte()?
                .ok_or_else(|| io::Error::new(io::ErrorKind::UnexpectedEof, "truncated UTF-8 sequence"))?;
        }

        std::str::from_utf8(&buf[..width])
            .ok()
            .and_then(|s| s.chars().next())
            .map(Some)
            .ok_or_else(|| invalid_utf8(lead))
    }
}

impl<R: Read> CharSource for ReaderSource<R> {
    fn next_char(&mut self) -> Option<char> {
        if self.exhausted {
            return None;
        }

        match self.decode() {
            Ok(Some(c)) => Some(c),
            Ok(None) => {
                self.exhausted = true;
                None
            },
            Err(e) => {
                tracing::warn!(error = %e, "character source failed, treating as end of input");
                self.exhausted = true;
                None
            },
        }
    }
}

/// Number of bytes in the UTF-8 sequence introduced by `lead`.
fn utf8_width(lead: u8) -> Option<usize> {
    match lead {
        0x00..=0x7F => Some(1),
        0xC2..=0xDF => Some(2),
        0xE0..=0xEF => Some(3),
        0xF0..=0xF4 => Some(4),
        _ => None,
    }
}

fn invalid_utf8(lead: u8) -> io::Error {
    io::Error::new(
        io::ErrorKind::InvalidData,
        format!("invalid UTF-8 sequence starting with byte 0x{:02X}", lead),
    )
}
