//! Splits path data into command tokens
use svgsnap_parse::{Parse as _, Parser};

use crate::command::{Token, ID};

/// Splits path data into a token for each command letter.
///
/// The numbers between one command letter and the next become the arguments of that command.
/// Anything that can't be read as a number is skipped, as is anything before the first command.
/// Tokenizing never fails, so malformed arguments are left to be caught when converting.
pub fn tokenize(definition: &str) -> Vec<Token> {
    let mut input = Parser::new(definition);
    let mut tokens = vec![];

    skip_to_command(&mut input);
    while let Ok(char) = input.read() {
        let Ok(id) = ID::try_from(char) else {
            // only command letters stop `skip_to_command`
            continue;
        };
        tokens.push(Token {
            id,
            args: read_args(&mut input),
        });
    }
    tokens
}

fn is_command(char: char) -> bool {
    ID::try_from(char).is_ok()
}

fn skip_to_command(input: &mut Parser) {
    input.skip_matches(|char| !is_command(char));
}

fn read_args(input: &mut Parser) -> Vec<f64> {
    let mut args = vec![];
    loop {
        match input.current() {
            Err(_) => break,
            Ok(char) if is_command(char) => break,
            Ok(_) => {}
        }
        if let Ok(number) = f64::parse(input) {
            args.push(number);
        } else {
            input.advance();
        }
    }
    args
}

#[test]
fn tokenize_commands() {
    use pretty_assertions::assert_eq;

    assert_eq!(
        tokenize("M 10,50 l1-2.5.5e1z"),
        vec![
            Token {
                id: ID::MoveTo,
                args: vec![10.0, 50.0]
            },
            Token {
                id: ID::LineBy,
                args: vec![1.0, -2.5, 5.0]
            },
            Token {
                id: ID::ClosePath,
                args: vec![]
            },
        ]
    );
}

#[test]
fn tokenize_skips_junk() {
    use pretty_assertions::assert_eq;

    // leading text is ignored and unknown characters are skipped
    assert_eq!(
        tokenize("junk 1 2 M 1 x 2 , ;3"),
        vec![Token {
            id: ID::MoveTo,
            args: vec![1.0, 2.0, 3.0]
        }]
    );
    // a dangling exponent is not a command and not a number
    assert_eq!(
        tokenize("L1e 2"),
        vec![Token {
            id: ID::LineTo,
            args: vec![1.0, 2.0]
        }]
    );
    assert_eq!(tokenize("A 1 1 0 0 1 5 5")[0].id, ID::ArcTo);
}

#[test]
fn tokenize_empty() {
    assert!(tokenize("").is_empty());
    assert!(tokenize("   \n\t").is_empty());
}
