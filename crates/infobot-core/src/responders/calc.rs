//! Arithmetic responder.
//!
//! Expressions are evaluated by a dedicated tokenizer + recursive-descent
//! parser restricted to numeric literals and `+ - * / ( )`. A character
//! allow-list alone is not a safety boundary, so nothing here delegates to a
//! general-purpose evaluator; the grammar rejects everything else at parse
//! time.

use std::fmt;

use crate::domain::Query;

const ALLOWED_CHARS: &str = "0123456789+-*/(). ";

const INVALID_EXPRESSION: &str =
    "❌ Invalid expression. Use only numbers and basic operators (+, -, *, /)";

pub(super) fn respond(query: &Query) -> String {
    let expr = query
        .normalized
        .replace("calculate", "")
        .replace('=', "")
        .trim()
        .to_string();

    if !expr.chars().all(|c| ALLOWED_CHARS.contains(c)) {
        return INVALID_EXPRESSION.to_string();
    }

    match evaluate(&expr) {
        Ok(value) => format!(
            "🧮 *Calculation Result*\n\n*Expression:* `{expr}`\n*Result:* `{}`",
            format_number(value)
        ),
        Err(e) => format!("❌ Calculation error: {e}"),
    }
}

#[derive(Clone, Debug, PartialEq)]
pub(super) enum EvalError {
    UnexpectedChar(char),
    UnexpectedEnd,
    UnexpectedToken(String),
    UnbalancedParen,
    BadNumber(String),
    DivisionByZero,
}

impl fmt::Display for EvalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnexpectedChar(c) => write!(f, "unexpected character '{c}'"),
            Self::UnexpectedEnd => write!(f, "expression ended unexpectedly"),
            Self::UnexpectedToken(t) => write!(f, "unexpected '{t}'"),
            Self::UnbalancedParen => write!(f, "unbalanced parentheses"),
            Self::BadNumber(n) => write!(f, "malformed number '{n}'"),
            Self::DivisionByZero => write!(f, "division by zero"),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
enum Token {
    Number(f64),
    Plus,
    Minus,
    Star,
    Slash,
    LParen,
    RParen,
}

impl Token {
    fn describe(&self) -> String {
        match self {
            Token::Number(n) => format_number(*n),
            Token::Plus => "+".to_string(),
            Token::Minus => "-".to_string(),
            Token::Star => "*".to_string(),
            Token::Slash => "/".to_string(),
            Token::LParen => "(".to_string(),
            Token::RParen => ")".to_string(),
        }
    }
}

fn tokenize(expr: &str) -> Result<Vec<Token>, EvalError> {
    let mut tokens = Vec::new();
    let mut chars = expr.chars().peekable();

    while let Some(&c) = chars.peek() {
        match c {
            ' ' => {
                chars.next();
            }
            '+' => {
                chars.next();
                tokens.push(Token::Plus);
            }
            '-' => {
                chars.next();
                tokens.push(Token::Minus);
            }
            '*' => {
                chars.next();
                tokens.push(Token::Star);
            }
            '/' => {
                chars.next();
                tokens.push(Token::Slash);
            }
            '(' => {
                chars.next();
                tokens.push(Token::LParen);
            }
            ')' => {
                chars.next();
                tokens.push(Token::RParen);
            }
            '0'..='9' | '.' => {
                let mut lit = String::new();
                while let Some(&d) = chars.peek() {
                    if d.is_ascii_digit() || d == '.' {
                        lit.push(d);
                        chars.next();
                    } else {
                        break;
                    }
                }
                let value = lit
                    .parse::<f64>()
                    .map_err(|_| EvalError::BadNumber(lit.clone()))?;
                tokens.push(Token::Number(value));
            }
            other => return Err(EvalError::UnexpectedChar(other)),
        }
    }

    Ok(tokens)
}

struct Parser {
    tokens: Vec<Token>,
    pos: usize,
}

impl Parser {
    fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.pos)
    }

    fn next(&mut self) -> Option<Token> {
        let t = self.tokens.get(self.pos).cloned();
        if t.is_some() {
            self.pos += 1;
        }
        t
    }

    // expr := term (('+' | '-') term)*
    fn expr(&mut self) -> Result<f64, EvalError> {
        let mut acc = self.term()?;
        while let Some(op) = self.peek() {
            match op {
                Token::Plus => {
                    self.next();
                    acc += self.term()?;
                }
                Token::Minus => {
                    self.next();
                    acc -= self.term()?;
                }
                _ => break,
            }
        }
        Ok(acc)
    }

    // term := factor (('*' | '/') factor)*
    fn term(&mut self) -> Result<f64, EvalError> {
        let mut acc = self.factor()?;
        while let Some(op) = self.peek() {
            match op {
                Token::Star => {
                    self.next();
                    acc *= self.factor()?;
                }
                Token::Slash => {
                    self.next();
                    let rhs = self.factor()?;
                    if rhs == 0.0 {
                        return Err(EvalError::DivisionByZero);
                    }
                    acc /= rhs;
                }
                _ => break,
            }
        }
        Ok(acc)
    }

    // factor := ('+' | '-') factor | number | '(' expr ')'
    fn factor(&mut self) -> Result<f64, EvalError> {
        match self.next() {
            Some(Token::Plus) => self.factor(),
            Some(Token::Minus) => Ok(-self.factor()?),
            Some(Token::Number(n)) => Ok(n),
            Some(Token::LParen) => {
                let inner = self.expr()?;
                match self.next() {
                    Some(Token::RParen) => Ok(inner),
                    _ => Err(EvalError::UnbalancedParen),
                }
            }
            Some(other) => Err(EvalError::UnexpectedToken(other.describe())),
            None => Err(EvalError::UnexpectedEnd),
        }
    }
}

pub(super) fn evaluate(expr: &str) -> Result<f64, EvalError> {
    let tokens = tokenize(expr)?;
    let mut parser = Parser { tokens, pos: 0 };
    let value = parser.expr()?;

    match parser.next() {
        None => Ok(value),
        Some(Token::RParen) => Err(EvalError::UnbalancedParen),
        Some(other) => Err(EvalError::UnexpectedToken(other.describe())),
    }
}

/// Integral results render without a fractional part; everything else uses
/// the shortest float representation.
fn format_number(v: f64) -> String {
    if v.is_finite() && v.fract() == 0.0 && v.abs() < 1e15 {
        format!("{}", v as i64)
    } else {
        format!("{v}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reply(text: &str) -> String {
        respond(&Query::new(text))
    }

    #[test]
    fn two_plus_two_is_four() {
        let r = reply("2 + 2");
        assert!(r.contains("*Result:* `4`"), "got: {r}");
    }

    #[test]
    fn precedence_and_parentheses() {
        assert_eq!(evaluate("2 + 3 * 4"), Ok(14.0));
        assert_eq!(evaluate("(2 + 3) * 4"), Ok(20.0));
        assert_eq!(evaluate("10 - 4 - 3"), Ok(3.0));
        assert_eq!(evaluate("-3 + 5"), Ok(2.0));
        assert_eq!(evaluate("2 * -3"), Ok(-6.0));
    }

    #[test]
    fn division_yields_fractional_quotients() {
        assert_eq!(evaluate("7 / 2"), Ok(3.5));
        let r = reply("calculate 7 / 2");
        assert!(r.contains("`3.5`"), "got: {r}");
    }

    #[test]
    fn division_by_zero_is_reported_not_propagated() {
        let r = reply("10 / 0");
        assert_eq!(r, "❌ Calculation error: division by zero");
    }

    #[test]
    fn disallowed_characters_are_rejected_up_front() {
        assert_eq!(reply("2+2; rm"), INVALID_EXPRESSION);
        assert_eq!(reply("calculate 2**2 x"), INVALID_EXPRESSION);
    }

    #[test]
    fn allow_listed_but_malformed_input_reports_a_parse_error() {
        let r = reply("(1 + 2");
        assert_eq!(r, "❌ Calculation error: unbalanced parentheses");

        let r = reply("1 + 2)");
        assert_eq!(r, "❌ Calculation error: unbalanced parentheses");

        let r = reply("calculate 1.2.3");
        assert_eq!(r, "❌ Calculation error: malformed number '1.2.3'");
    }

    #[test]
    fn calculate_and_equals_are_stripped_from_the_expression() {
        let r = reply("calculate 6 * 7 =");
        assert!(r.contains("*Expression:* `6 * 7`"), "got: {r}");
        assert!(r.contains("`42`"), "got: {r}");
    }

    #[test]
    fn integral_floats_render_without_decimal_point() {
        assert_eq!(format_number(4.0), "4");
        assert_eq!(format_number(-12.0), "-12");
        assert_eq!(format_number(3.5), "3.5");
    }
}
