//! A small arithmetic evaluator for the calculator section.
//!
//! Input is restricted to digits, the four operators, parentheses, the
//! decimal point and spaces; anything else is rejected before parsing.
//! Accepted input is evaluated by a recursive-descent parser over `f64`
//! with standard operator precedence.

use thiserror::Error;

pub const ALLOWED_CHARS: &str = "0123456789+-/*(). ";

#[derive(Error, Debug, Clone, PartialEq)]
pub enum CalcError {
    #[error("character {0:?} is not allowed (allowed: 0123456789+-/*(). )")]
    DisallowedChar(char),

    #[error("unexpected character {0:?}")]
    UnexpectedChar(char),

    #[error("unexpected end of expression")]
    UnexpectedEnd,

    #[error("invalid number {0:?}")]
    InvalidNumber(String),

    #[error("division by zero")]
    DivisionByZero,
}

/// Evaluate an arithmetic expression.
pub fn eval(input: &str) -> Result<f64, CalcError> {
    if let Some(bad) = input.chars().find(|c| !ALLOWED_CHARS.contains(*c)) {
        return Err(CalcError::DisallowedChar(bad));
    }

    let mut parser = Parser::new(input);
    let value = parser.expression()?;
    parser.skip_spaces();
    match parser.peek() {
        None => Ok(value),
        Some(c) => Err(CalcError::UnexpectedChar(c)),
    }
}

struct Parser<'a> {
    chars: std::iter::Peekable<std::str::Chars<'a>>,
}

impl<'a> Parser<'a> {
    fn new(input: &'a str) -> Self {
        Self {
            chars: input.chars().peekable(),
        }
    }

    fn peek(&mut self) -> Option<char> {
        self.chars.peek().copied()
    }

    fn bump(&mut self) {
        self.chars.next();
    }

    fn skip_spaces(&mut self) {
        while self.peek() == Some(' ') {
            self.bump();
        }
    }

    // expression := term (('+' | '-') term)*
    fn expression(&mut self) -> Result<f64, CalcError> {
        let mut value = self.term()?;
        loop {
            self.skip_spaces();
            match self.peek() {
                Some('+') => {
                    self.bump();
                    value += self.term()?;
                }
                Some('-') => {
                    self.bump();
                    value -= self.term()?;
                }
                _ => return Ok(value),
            }
        }
    }

    // term := factor (('*' | '/') factor)*
    fn term(&mut self) -> Result<f64, CalcError> {
        let mut value = self.factor()?;
        loop {
            self.skip_spaces();
            match self.peek() {
                Some('*') => {
                    self.bump();
                    value *= self.factor()?;
                }
                Some('/') => {
                    self.bump();
                    let divisor = self.factor()?;
                    if divisor == 0.0 {
                        return Err(CalcError::DivisionByZero);
                    }
                    value /= divisor;
                }
                _ => return Ok(value),
            }
        }
    }

    // factor := '(' expression ')' | ('+' | '-') factor | number
    fn factor(&mut self) -> Result<f64, CalcError> {
        self.skip_spaces();
        match self.peek() {
            Some('(') => {
                self.bump();
                let value = self.expression()?;
                self.skip_spaces();
                match self.peek() {
                    Some(')') => {
                        self.bump();
                        Ok(value)
                    }
                    Some(c) => Err(CalcError::UnexpectedChar(c)),
                    None => Err(CalcError::UnexpectedEnd),
                }
            }
            Some('+') => {
                self.bump();
                self.factor()
            }
            Some('-') => {
                self.bump();
                Ok(-self.factor()?)
            }
            Some(c) if c.is_ascii_digit() || c == '.' => self.number(),
            Some(c) => Err(CalcError::UnexpectedChar(c)),
            None => Err(CalcError::UnexpectedEnd),
        }
    }

    fn number(&mut self) -> Result<f64, CalcError> {
        let mut raw = String::new();
        while let Some(c) = self.peek() {
            if c.is_ascii_digit() || c == '.' {
                raw.push(c);
                self.bump();
            } else {
                break;
            }
        }
        raw.parse::<f64>()
            .map_err(|_| CalcError::InvalidNumber(raw))
    }
}
