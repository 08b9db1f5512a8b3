//! Primitives for lexing SVG attribute values

use error::Error;
mod number;

pub mod error;

/// A parser containing state for the active lexing of an SVG value
pub struct Parser<'input> {
    input: &'input str,
    cursor: usize,
}

impl<'input> Parser<'input> {
    /// Create a new parser with the input
    pub fn new(input: &'input str) -> Self {
        Self { input, cursor: 0 }
    }

    /// Returns the current byte position in the input being read
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Try reading the next character
    ///
    /// # Errors
    ///
    /// If the input has ended
    pub fn read(&mut self) -> Result<char, Error> {
        let current = self.current()?;
        self.cursor += current.len_utf8();
        Ok(current)
    }

    /// Go to the next character without reading
    pub fn advance(&mut self) {
        if let Ok(current) = self.current() {
            self.cursor += current.len_utf8();
        }
    }

    /// Try parsing a portion of the input, reverting to the original state if failed
    ///
    /// # Errors
    ///
    /// If the attempted parsing fails
    pub fn try_parse<T, E, F: FnOnce(&mut Self) -> Result<T, E>>(&mut self, f: F) -> Result<T, E> {
        let cursor = self.cursor;
        let result = f(self);
        if result.is_err() {
            self.cursor = cursor;
        }
        result
    }

    /// Get remaining slice of input
    pub fn slice(&self) -> &'input str {
        &self.input[self.cursor..]
    }

    /// Get slice from start position to current position
    pub fn slice_from(&self, start: usize) -> &'input str {
        let end = self.cursor.min(self.input.len());
        &self.input[start..end]
    }

    /// Get the length of the remaining input
    pub fn len(&self) -> usize {
        self.input.len() - self.cursor
    }

    /// Returns whether the remaining input is empty
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Gets the current character of the input
    ///
    /// # Errors
    ///
    /// If reached the end of input
    pub fn current(&self) -> Result<char, Error> {
        self.slice().chars().next().ok_or(Error::EndOfInput)
    }

    /// Move the cursor forward while the characters match the given predicate
    ///
    /// Returns the skipped content as a slice
    pub fn take_matches<F: FnMut(char) -> bool>(&mut self, f: F) -> &'input str {
        let cursor = self.cursor();
        self.skip_matches(f);
        self.slice_from(cursor)
    }

    /// Moves the cursor forward the number of matching characters
    pub fn skip_matches<F: FnMut(char) -> bool>(&mut self, pat: F) {
        let trim = self.slice().trim_start_matches(pat).len();
        self.cursor += self.len() - trim;
    }

    /// Moves the cursor forward the number of whitespace characters
    pub fn skip_whitespace(&mut self) {
        self.skip_matches(char::is_whitespace);
    }

    /// Asserts the end of the input was reached
    ///
    /// # Errors
    ///
    /// When the cursor is prior to the end of the string
    pub fn expect_done(&self) -> Result<(), Error> {
        if self.cursor < self.input.len() {
            Err(Error::ExpectedDone)
        } else {
            Ok(())
        }
    }
}

/// A trait for things that can be lexed from attribute values.
pub trait Parse<'input>: Sized {
    /// Parse this value using an existing parser.
    ///
    /// # Errors
    /// If parsing fails
    fn parse(input: &mut Parser<'input>) -> Result<Self, Error>;

    /// Parse a value from a string, allowing surrounding whitespace
    ///
    /// # Errors
    /// If parsing fails or there is trailing content
    fn parse_string(input: &'input str) -> Result<Self, Error> {
        let parser = &mut Parser::new(input);
        parser.skip_whitespace();
        let result = Self::parse(parser)?;
        parser.skip_whitespace();
        parser.expect_done()?;
        Ok(result)
    }
}

#[test]
fn take_matches() {
    let mut parser = Parser::new("12ab");
    assert_eq!(parser.take_matches(|char| char.is_ascii_digit()), "12");
    assert_eq!(parser.cursor(), 2);
    assert_eq!(parser.read(), Ok('a'));
    assert_eq!(parser.slice(), "b");
    parser.advance();
    assert!(parser.is_empty());
    assert_eq!(parser.current(), Err(Error::EndOfInput));
}

#[test]
fn try_parse_rewinds() {
    let mut parser = Parser::new("abc");
    let result: Result<(), Error> = parser.try_parse(|parser| {
        parser.advance();
        parser.advance();
        Err(Error::InvalidNumber)
    });
    assert!(result.is_err());
    assert_eq!(parser.cursor(), 0);
}
