//! Arithmetic on chat messages like "12 * (3 + 4)".
//!
//! Only digits, `+ - * / ( ) .` and spaces are accepted. Integer arithmetic
//! stays integral, `/` always produces a float, `//` floors and `**` raises
//! to a power. Floats print in shortest round-trip form with a two-digit
//! exponent ("1e+16"), and whole floats keep their ".0".

use std::sync::LazyLock;

use regex::Regex;

static ALLOWED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9+\-*/(). ]+$").expect("calculator charset regex"));

#[derive(Debug, Clone, Copy, PartialEq)]
enum Number {
    Int(i64),
    Float(f64),
}

impl Number {
    fn as_f64(self) -> f64 {
        match self {
            Self::Int(i) => i as f64,
            Self::Float(f) => f,
        }
    }

    fn is_zero(self) -> bool {
        match self {
            Self::Int(i) => i == 0,
            Self::Float(f) => f == 0.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
enum Token {
    Num(Number),
    Plus,
    Minus,
    Star,
    Slash,
    DoubleSlash,
    Power,
    LParen,
    RParen,
}

fn tokenize(input: &str) -> Option<Vec<Token>> {
    let chars: Vec<char> = input.chars().collect();
    let mut tokens = Vec::new();
    let mut i = 0;
    while i < chars.len() {
        let c = chars[i];
        match c {
            ' ' => i += 1,
            '+' => {
                tokens.push(Token::Plus);
                i += 1;
            }
            '-' => {
                tokens.push(Token::Minus);
                i += 1;
            }
            '*' if chars.get(i + 1) == Some(&'*') => {
                tokens.push(Token::Power);
                i += 2;
            }
            '*' => {
                tokens.push(Token::Star);
                i += 1;
            }
            '/' if chars.get(i + 1) == Some(&'/') => {
                tokens.push(Token::DoubleSlash);
                i += 2;
            }
            '/' => {
                tokens.push(Token::Slash);
                i += 1;
            }
            '(' => {
                tokens.push(Token::LParen);
                i += 1;
            }
            ')' => {
                tokens.push(Token::RParen);
                i += 1;
            }
            '0'..='9' | '.' => {
                let start = i;
                while i < chars.len() && (chars[i].is_ascii_digit() || chars[i] == '.') {
                    i += 1;
                }
                let literal: String = chars[start..i].iter().collect();
                tokens.push(Token::Num(parse_literal(&literal)?));
            }
            _ => return None,
        }
    }
    Some(tokens)
}

fn parse_literal(literal: &str) -> Option<Number> {
    match literal.matches('.').count() {
        0 => {
            // "007" is a syntax error; "0" and "000" are fine.
            if literal.len() > 1 && literal.starts_with('0') && literal.chars().any(|c| c != '0') {
                return None;
            }
            literal.parse().ok().map(Number::Int)
        }
        1 if literal != "." => literal.parse().ok().map(Number::Float),
        _ => None,
    }
}

/// Deepest nesting of parentheses, unary signs and powers accepted.
const MAX_DEPTH: usize = 100;

struct Parser {
    tokens: Vec<Token>,
    pos: usize,
    depth: usize,
}

impl Parser {
    fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.pos)
    }

    fn next(&mut self) -> Option<Token> {
        let tok = self.tokens.get(self.pos).cloned();
        self.pos += 1;
        tok
    }

    fn expr(&mut self) -> Option<Number> {
        let mut acc = self.term()?;
        while let Some(op) = self.peek() {
            let op = op.clone();
            if !matches!(op, Token::Plus | Token::Minus) {
                break;
            }
            self.pos += 1;
            let rhs = self.term()?;
            acc = binary(&op, acc, rhs)?;
        }
        Some(acc)
    }

    fn term(&mut self) -> Option<Number> {
        let mut acc = self.factor()?;
        while let Some(op) = self.peek() {
            let op = op.clone();
            if !matches!(op, Token::Star | Token::Slash | Token::DoubleSlash) {
                break;
            }
            self.pos += 1;
            let rhs = self.factor()?;
            acc = binary(&op, acc, rhs)?;
        }
        Some(acc)
    }

    /// Every nested construct passes through here, so this bounds the
    /// recursion.
    fn factor(&mut self) -> Option<Number> {
        if self.depth >= MAX_DEPTH {
            return None;
        }
        self.depth += 1;
        let value = self.unary();
        self.depth -= 1;
        value
    }

    fn unary(&mut self) -> Option<Number> {
        match self.peek() {
            Some(Token::Plus) => {
                self.pos += 1;
                self.factor()
            }
            Some(Token::Minus) => {
                self.pos += 1;
                match self.factor()? {
                    Number::Int(i) => i.checked_neg().map(Number::Int),
                    Number::Float(f) => Some(Number::Float(-f)),
                }
            }
            _ => self.power(),
        }
    }

    fn power(&mut self) -> Option<Number> {
        let base = self.atom()?;
        if self.peek() == Some(&Token::Power) {
            self.pos += 1;
            // Right-associative, and the exponent may carry a sign.
            let exponent = self.factor()?;
            return binary(&Token::Power, base, exponent);
        }
        Some(base)
    }

    fn atom(&mut self) -> Option<Number> {
        match self.next()? {
            Token::Num(n) => Some(n),
            Token::LParen => {
                let inner = self.expr()?;
                match self.next()? {
                    Token::RParen => Some(inner),
                    _ => None,
                }
            }
            _ => None,
        }
    }
}

fn binary(op: &Token, lhs: Number, rhs: Number) -> Option<Number> {
    use Number::{Float, Int};
    let result = match (op, lhs, rhs) {
        (Token::Plus, Int(a), Int(b)) => Int(a.checked_add(b)?),
        (Token::Minus, Int(a), Int(b)) => Int(a.checked_sub(b)?),
        (Token::Star, Int(a), Int(b)) => Int(a.checked_mul(b)?),
        (Token::Plus, a, b) => Float(a.as_f64() + b.as_f64()),
        (Token::Minus, a, b) => Float(a.as_f64() - b.as_f64()),
        (Token::Star, a, b) => Float(a.as_f64() * b.as_f64()),
        (Token::Slash, a, b) => {
            if b.is_zero() {
                return None;
            }
            Float(a.as_f64() / b.as_f64())
        }
        (Token::DoubleSlash, a, b) => {
            if b.is_zero() {
                return None;
            }
            match (a, b) {
                (Int(a), Int(b)) => Int(a.checked_div_euclid(b).map(|q| {
                    // Euclidean division rounds toward -inf only for positive
                    // divisors; fix up the negative-divisor case.
                    if b < 0 && a.rem_euclid(b) != 0 { q - 1 } else { q }
                })?),
                (a, b) => Float((a.as_f64() / b.as_f64()).floor()),
            }
        }
        (Token::Power, Int(a), Int(b)) if b >= 0 => {
            Int(a.checked_pow(u32::try_from(b).ok()?)?)
        }
        (Token::Power, a, b) => {
            if a.is_zero() && b.as_f64() < 0.0 {
                return None;
            }
            let value = a.as_f64().powf(b.as_f64());
            if value.is_nan() || value.is_infinite() {
                return None;
            }
            Float(value)
        }
        _ => return None,
    };
    Some(result)
}

fn format_float(value: f64) -> String {
    pad_exponent(&format!("{value:?}"))
}

/// "1e16" -> "1e+16", "1e-5" -> "1e-05".
fn pad_exponent(debug: &str) -> String {
    let Some((mantissa, exponent)) = debug.split_once('e') else {
        return debug.to_string();
    };
    let (sign, digits) = match exponent.strip_prefix('-') {
        Some(d) => ('-', d),
        None => ('+', exponent),
    };
    format!("{mantissa}e{sign}{digits:0>2}")
}

/// Evaluate `expression`, returning the printed result, or `None` if it is
/// not plain arithmetic or cannot be evaluated.
pub fn evaluate(expression: &str) -> Option<String> {
    if !ALLOWED.is_match(expression) {
        return None;
    }
    let tokens = tokenize(expression)?;
    let mut parser = Parser {
        tokens,
        pos: 0,
        depth: 0,
    };
    let value = parser.expr()?;
    if parser.pos != parser.tokens.len() {
        return None;
    }
    Some(match value {
        Number::Int(i) => i.to_string(),
        Number::Float(f) => format_float(f),
    })
}
