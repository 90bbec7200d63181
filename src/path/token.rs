use crate::error::{ParseError, ParseErrorKind};
use geo::Coord;
use std::str::SplitWhitespace;

/// Drawing command markers accepted in a boundary path
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    MoveTo,
    LineTo,
    ClosePath,
}

impl Command {
    /// Classify a single-letter marker
    ///
    /// Close-path is case-insensitive in SVG, so both `Z` and `z` map to it.
    /// Relative `m`/`l` and curve commands are not accepted.
    pub fn from_marker(marker: &str) -> Option<Command> {
        match marker {
            "M" => Some(Command::MoveTo),
            "L" => Some(Command::LineTo),
            "Z" | "z" => Some(Command::ClosePath),
            _ => None,
        }
    }
}

/// One lexed path token
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Token {
    Command(Command),
    Coordinate(Coord<f64>),
}

/// Lazy lexer over a whitespace-separated boundary path
pub struct Tokens<'a> {
    inner: std::iter::Enumerate<SplitWhitespace<'a>>,
}

impl<'a> Tokens<'a> {
    pub fn new(path: &'a str) -> Self {
        Self {
            inner: path.split_whitespace().enumerate(),
        }
    }
}

impl Iterator for Tokens<'_> {
    type Item = Result<Token, ParseError>;

    fn next(&mut self) -> Option<Self::Item> {
        let (index, raw) = self.inner.next()?;
        Some(lex_token(raw, index))
    }
}

/// Lex an entire path, failing on the first malformed token
pub fn lex(path: &str) -> Result<Vec<Token>, ParseError> {
    Tokens::new(path).collect()
}

fn lex_token(raw: &str, index: usize) -> Result<Token, ParseError> {
    if !raw.contains(',') {
        if raw.chars().count() == 1 && !raw.chars().all(|c| c.is_ascii_digit()) {
            return Command::from_marker(raw)
                .map(Token::Command)
                .ok_or_else(|| ParseError::new(raw, index, ParseErrorKind::UnknownCommand));
        }
        // A lone number is a pair missing its second half
        let kind = match raw.parse::<f64>() {
            Ok(_) => ParseErrorKind::ComponentCount(1),
            Err(_) => ParseErrorKind::InvalidNumber,
        };
        return Err(ParseError::new(raw, index, kind));
    }

    let parts: Vec<&str> = raw.split(',').collect();
    if parts.len() != 2 {
        return Err(ParseError::new(
            raw,
            index,
            ParseErrorKind::ComponentCount(parts.len()),
        ));
    }

    let x = parse_component(parts[0], raw, index)?;
    let y = parse_component(parts[1], raw, index)?;
    Ok(Token::Coordinate(geo::coord! { x: x, y: y }))
}

fn parse_component(text: &str, raw: &str, index: usize) -> Result<f64, ParseError> {
    let value: f64 = text
        .parse()
        .map_err(|_| ParseError::new(raw, index, ParseErrorKind::InvalidNumber))?;
    if !value.is_finite() {
        return Err(ParseError::new(raw, index, ParseErrorKind::NonFinite));
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lex_commands_and_pairs() {
        let tokens = lex("M 1.5,2 L -3,4e1 z").unwrap();
        assert_eq!(
            tokens,
            vec![
                Token::Command(Command::MoveTo),
                Token::Coordinate(geo::coord! { x: 1.5, y: 2.0 }),
                Token::Command(Command::LineTo),
                Token::Coordinate(geo::coord! { x: -3.0, y: 40.0 }),
                Token::Command(Command::ClosePath),
            ]
        );
    }

    #[test]
    fn test_lex_empty() {
        assert!(lex("").unwrap().is_empty());
        assert!(lex("   \n\t ").unwrap().is_empty());
    }

    #[test]
    fn test_unknown_command() {
        let err = lex("M 1,1 Q 2,2").unwrap_err();
        assert_eq!(err.kind, ParseErrorKind::UnknownCommand);
        assert_eq!(err.token, "Q");
        assert_eq!(err.index, 2);
    }

    #[test]
    fn test_relative_commands_rejected() {
        assert_eq!(
            lex("m 1,1").unwrap_err().kind,
            ParseErrorKind::UnknownCommand
        );
        assert_eq!(
            lex("M 1,1 l 2,2").unwrap_err().kind,
            ParseErrorKind::UnknownCommand
        );
    }

    #[test]
    fn test_invalid_number() {
        let err = lex("M 12.5,abc").unwrap_err();
        assert_eq!(err.kind, ParseErrorKind::InvalidNumber);
        assert_eq!(err.token, "12.5,abc");
        assert_eq!(err.index, 1);

        assert_eq!(lex("1,").unwrap_err().kind, ParseErrorKind::InvalidNumber);
    }

    #[test]
    fn test_component_count() {
        assert_eq!(
            lex("1,2,3").unwrap_err().kind,
            ParseErrorKind::ComponentCount(3)
        );
        assert_eq!(
            lex("M 42.0").unwrap_err().kind,
            ParseErrorKind::ComponentCount(1)
        );
        assert_eq!(
            lex("7").unwrap_err().kind,
            ParseErrorKind::ComponentCount(1)
        );
        assert_eq!(lex("ML").unwrap_err().kind, ParseErrorKind::InvalidNumber);
    }

    #[test]
    fn test_non_finite_rejected() {
        assert_eq!(lex("inf,1").unwrap_err().kind, ParseErrorKind::NonFinite);
        assert_eq!(lex("1,NaN").unwrap_err().kind, ParseErrorKind::NonFinite);
    }

    #[test]
    fn test_tokens_is_lazy() {
        let mut tokens = Tokens::new("M 1,1 ? 2,2");
        assert!(matches!(tokens.next(), Some(Ok(Token::Command(Command::MoveTo)))));
        assert!(matches!(tokens.next(), Some(Ok(Token::Coordinate(_)))));
        assert!(matches!(
            tokens.next(),
            Some(Err(ParseError { kind: ParseErrorKind::UnknownCommand, index: 2, .. }))
        ));
        assert!(matches!(tokens.next(), Some(Ok(Token::Coordinate(_)))));
        assert!(tokens.next().is_none());
    }

    #[test]
    fn test_single_symbol_is_unknown_command() {
        for symbol in ["?", "é", "-", "."] {
            let err = lex(symbol).unwrap_err();
            assert_eq!(err.kind, ParseErrorKind::UnknownCommand, "symbol {symbol:?}");
        }
    }
}
