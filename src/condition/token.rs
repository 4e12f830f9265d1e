// SPDX-License-Identifier: MIT

//! Lexical tokens for predicate expressions

use serde::Serialize;
use std::fmt;

/// A single lexical unit of a predicate expression
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", content = "text", rename_all = "snake_case")]
pub enum Token {
    /// `(`
    LeftParen,
    /// `)`
    RightParen,
    /// Prefix negation `!`
    Not,
    /// Binary operator
    Infix(InfixOp),
    /// Raw numeral, parsed when a comparison consumes it
    Number(String),
    /// Variable reference, always `v` followed by at least one character
    Identifier(String),
    /// Boolean leaf. A scanned word is `true` only when spelled exactly
    /// `true`, so stray words such as `ve` print as `false`.
    Bool(bool),
}

/// Binary operators. No precedence is defined among them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum InfixOp {
    /// ==
    Eq,
    /// >
    Gt,
    /// <
    Lt,
    /// &&
    And,
    /// ||
    Or,
}

impl Token {
    /// Numbers and identifiers can stand on either side of a numeric comparison
    pub fn is_operand(&self) -> bool {
        matches!(self, Token::Number(_) | Token::Identifier(_))
    }
}

impl InfixOp {
    /// Operators allowed between two boolean leaves
    pub fn is_boolean(self) -> bool {
        matches!(self, InfixOp::Eq | InfixOp::And | InfixOp::Or)
    }
}

impl fmt::Display for InfixOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InfixOp::Eq => write!(f, "=="),
            InfixOp::Gt => write!(f, ">"),
            InfixOp::Lt => write!(f, "<"),
            InfixOp::And => write!(f, "&&"),
            InfixOp::Or => write!(f, "||"),
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::LeftParen => write!(f, "("),
            Token::RightParen => write!(f, ")"),
            Token::Not => write!(f, "!"),
            Token::Infix(op) => write!(f, "{}", op),
            Token::Number(text) | Token::Identifier(text) => write!(f, "{}", text),
            Token::Bool(b) => write!(f, "{}", b),
        }
    }
}
