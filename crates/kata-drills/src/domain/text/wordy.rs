//! Word-math problem parser
//!
//! Evaluates questions such as "What is 5 plus 13 divided by 3?" strictly
//! left to right, ignoring the usual operator precedence.

use thiserror::Error;

const QUESTION_PREFIX: &str = "What is";

/// Word problem errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WordyError {
    /// A word that is neither a number nor a supported operation
    #[error("unknown operation")]
    UnknownOperation,
    /// Operands and operations in an invalid order, or nothing to evaluate
    #[error("syntax error")]
    SyntaxError,
    /// Division with a zero divisor
    #[error("division by zero")]
    DivisionByZero,
    /// Operand or intermediate result outside the i64 range
    #[error("arithmetic overflow")]
    Overflow,
}

/// Supported binary operations
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operation {
    Plus,
    Minus,
    Multiply,
    Divide,
}

impl Operation {
    /// Apply the operation with overflow and zero-divisor checks
    ///
    /// Division truncates toward zero.
    pub fn apply(self, lhs: i64, rhs: i64) -> Result<i64, WordyError> {
        match self {
            Self::Plus => lhs.checked_add(rhs).ok_or(WordyError::Overflow),
            Self::Minus => lhs.checked_sub(rhs).ok_or(WordyError::Overflow),
            Self::Multiply => lhs.checked_mul(rhs).ok_or(WordyError::Overflow),
            Self::Divide if rhs == 0 => Err(WordyError::DivisionByZero),
            Self::Divide => lhs.checked_div(rhs).ok_or(WordyError::Overflow),
        }
    }
}

/// Lexical token of a word problem
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Token<'a> {
    Number(i64),
    Op(Operation),
    Word(&'a str),
}

/// Split a problem body into tokens
///
/// Two-word operations ("multiplied by", "divided by") become a single token.
pub fn tokenize(body: &str) -> Result<Vec<Token<'_>>, WordyError> {
    let mut tokens = Vec::new();
    let mut words = body.split_whitespace().peekable();

    while let Some(word) = words.next() {
        let token = match word {
            "plus" => Token::Op(Operation::Plus),
            "minus" => Token::Op(Operation::Minus),
            "multiplied" | "divided" if words.peek() == Some(&"by") => {
                words.next();
                if word == "multiplied" {
                    Token::Op(Operation::Multiply)
                } else {
                    Token::Op(Operation::Divide)
                }
            }
            _ if looks_numeric(word) => {
                Token::Number(word.parse().map_err(|_| WordyError::Overflow)?)
            }
            _ => Token::Word(word),
        };
        tokens.push(token);
    }

    Ok(tokens)
}

fn looks_numeric(word: &str) -> bool {
    let digits = word.strip_prefix('-').unwrap_or(word);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}

/// Answer a "What is ...?" word problem
pub fn answer(question: &str) -> Result<i64, WordyError> {
    let body = question
        .trim()
        .strip_prefix(QUESTION_PREFIX)
        .ok_or(WordyError::UnknownOperation)?;
    let body = body.trim_end().strip_suffix('?').unwrap_or(body);

    let tokens = tokenize(body)?;
    if tokens.iter().any(|t| matches!(t, Token::Word(_))) {
        return Err(WordyError::UnknownOperation);
    }

    let mut tokens = tokens.into_iter();
    let mut acc = match tokens.next() {
        Some(Token::Number(n)) => n,
        _ => return Err(WordyError::SyntaxError),
    };

    while let Some(token) = tokens.next() {
        let Token::Op(op) = token else {
            return Err(WordyError::SyntaxError);
        };
        let Some(Token::Number(rhs)) = tokens.next() else {
            return Err(WordyError::SyntaxError);
        };
        acc = op.apply(acc, rhs)?;
    }

    Ok(acc)
}
