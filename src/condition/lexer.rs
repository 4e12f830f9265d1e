// SPDX-License-Identifier: MIT

//! Character-level scanner for predicate expressions
//!
//! Scans expressions like:
//! - `v0 == 1`
//! - `(v0 == 2 || v1 > 10)`
//! - `!v4 && (v5 == true)`
//!
//! The scanner never fails. Characters outside the accepted alphabet are
//! dropped, and a pending buffer that matches no rule is discarded.

use super::token::{InfixOp, Token};

/// Convert an expression string into its token sequence
pub fn tokenize(input: &str) -> Vec<Token> {
    let mut lexer = Lexer::default();
    for c in input.chars() {
        lexer.feed(c);
    }
    lexer.finish()
}

#[derive(Default)]
struct Lexer {
    tokens: Vec<Token>,
    buffer: String,
}

impl Lexer {
    fn feed(&mut self, c: char) {
        if c.is_ascii_digit() || c == '.' {
            self.buffer.push(c);
        } else if self.buffer.is_empty() {
            self.start(c);
        } else {
            self.close(c);
        }
    }

    /// Single-character tokens are emitted right away, prefixes of longer
    /// tokens start the buffer.
    fn start(&mut self, c: char) {
        match c {
            '!' => self.tokens.push(Token::Not),
            '(' => self.tokens.push(Token::LeftParen),
            ')' => self.tokens.push(Token::RightParen),
            // >= and <= are not operators
            '>' => self.tokens.push(Token::Infix(InfixOp::Gt)),
            '<' => self.tokens.push(Token::Infix(InfixOp::Lt)),
            '&' | '|' | '=' | 'v' | '-' | 't' | 'f' => self.buffer.push(c),
            _ => {}
        }
    }

    /// Classify the pending buffer now that `next` has arrived.
    fn close(&mut self, next: char) {
        let last = self.buffer.chars().last();

        if last.is_some_and(|l| l.is_ascii_digit()) && next == ')' {
            let operand = operand(&self.buffer);
            self.tokens.push(operand);
            self.tokens.push(Token::RightParen);
        } else if is_identifier(&self.buffer) {
            self.tokens.push(Token::Identifier(self.buffer.clone()));
        } else if last == Some('|') {
            self.tokens.push(Token::Infix(InfixOp::Or));
        } else if last == Some('&') && next == '&' {
            self.tokens.push(Token::Infix(InfixOp::And));
        } else if last == Some('=') && next == '=' {
            self.tokens.push(Token::Infix(InfixOp::Eq));
        } else if next == 'e' {
            self.buffer.push(next);
            self.tokens.push(Token::Bool(self.buffer == "true"));
        } else if next == ' ' {
            self.tokens.push(Token::Number(self.buffer.clone()));
        } else if self.buffer.starts_with('t') || self.buffer.starts_with('f') {
            // still spelling out a boolean literal
            self.buffer.push(next);
            return;
        }

        self.buffer.clear();
    }

    fn finish(mut self) -> Vec<Token> {
        if !self.buffer.is_empty() {
            let operand = operand(&self.buffer);
            self.tokens.push(operand);
        }
        self.tokens
    }
}

fn is_identifier(text: &str) -> bool {
    text.starts_with('v') && text.len() >= 2
}

fn operand(text: &str) -> Token {
    if is_identifier(text) {
        Token::Identifier(text.to_string())
    } else {
        Token::Number(text.to_string())
    }
}
