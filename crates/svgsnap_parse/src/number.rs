//! Lexing for number values
//!
//! Numbers follow `[-+]?(\d+\.?\d*|\.\d+)([eE][-+]?\d+)?`. Adjacent numbers need no separator,
//! so `1.5.5-2` reads as `1.5`, `.5`, and `-2`.
use crate::{error::Error, Parse, Parser};

impl<'input> Parse<'input> for f64 {
    fn parse(input: &mut Parser<'input>) -> Result<Self, Error> {
        input.try_parse(|input| {
            let cursor = input.cursor();
            if let Ok('-' | '+') = input.current() {
                input.advance();
            }
            let integer = input.take_matches(|char| char.is_ascii_digit());
            if let Ok('.') = input.current() {
                input.advance();
                let fraction = input.take_matches(|char| char.is_ascii_digit());
                if integer.is_empty() && fraction.is_empty() {
                    return Err(Error::InvalidNumber);
                }
            } else if integer.is_empty() {
                return Err(Error::InvalidNumber);
            }

            // a dangling exponent marker belongs to whatever follows
            let _ = input.try_parse(|input| {
                let Ok('e' | 'E') = input.read() else {
                    return Err(Error::InvalidNumber);
                };
                if let Ok('-' | '+') = input.current() {
                    input.advance();
                }
                if input.take_matches(|char| char.is_ascii_digit()).is_empty() {
                    return Err(Error::InvalidNumber);
                }
                Ok(())
            });

            input
                .slice_from(cursor)
                .parse()
                .map_err(|_| Error::InvalidNumber)
        })
    }
}

#[test]
fn float() {
    use pretty_assertions::assert_eq;

    assert_eq!(f64::parse_string("0"), Ok(0.0));
    assert_eq!(f64::parse_string("1"), Ok(1.0));
    assert_eq!(f64::parse_string("-1"), Ok(-1.0));
    assert_eq!(f64::parse_string(" -1 "), Ok(-1.0));
    assert_eq!(f64::parse_string(".4"), Ok(0.4));
    assert_eq!(f64::parse_string("-.4"), Ok(-0.4));
    assert_eq!(f64::parse_string("+10"), Ok(10.0));
    assert_eq!(f64::parse_string("1e2"), Ok(100.0));
    assert_eq!(f64::parse_string("1e+2"), Ok(100.0));
    assert_eq!(f64::parse_string("1E2"), Ok(100.0));
    assert_eq!(f64::parse_string("1e-2"), Ok(0.01));
    assert_eq!(f64::parse_string("0."), Ok(0.0));
    assert_eq!(f64::parse_string("1.3e-2"), Ok(0.013));

    assert_eq!(f64::parse_string("1e"), Err(Error::ExpectedDone));
    assert_eq!(f64::parse_string("1e-"), Err(Error::ExpectedDone));
    assert_eq!(f64::parse_string("-.4text"), Err(Error::ExpectedDone));
    assert_eq!(f64::parse_string("-.01 4"), Err(Error::ExpectedDone));
    assert_eq!(f64::parse_string("q"), Err(Error::InvalidNumber));
    assert_eq!(f64::parse_string(""), Err(Error::InvalidNumber));
    assert_eq!(f64::parse_string("-"), Err(Error::InvalidNumber));
    assert_eq!(f64::parse_string("+"), Err(Error::InvalidNumber));
    assert_eq!(f64::parse_string("."), Err(Error::InvalidNumber));
    assert_eq!(f64::parse_string("--1"), Err(Error::InvalidNumber));
}

#[test]
fn concatenated() {
    use pretty_assertions::assert_eq;

    let mut parser = Parser::new("1.5.5-2e1e");
    assert_eq!(f64::parse(&mut parser), Ok(1.5));
    assert_eq!(f64::parse(&mut parser), Ok(0.5));
    assert_eq!(f64::parse(&mut parser), Ok(-20.0));
    assert_eq!(parser.slice(), "e");
    assert_eq!(f64::parse(&mut parser), Err(Error::InvalidNumber));
    assert_eq!(parser.slice(), "e", "failed parse should not consume input");
}
