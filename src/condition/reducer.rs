// SPDX-License-Identifier: MIT

//! Shift-reduce engine over a flat token buffer
//!
//! Tokens are shifted onto the buffer one at a time and the tail of the
//! buffer is collapsed into boolean leaves. No tree is built and the
//! grammar is never validated: an expression that does not collapse to a
//! single `true` evaluates to `false`.

use super::token::{InfixOp, Token};
use crate::bindings::ValueEnvironment;
use crate::error::EvalError;

/// One collapse of the buffer tail, resolved and ready to apply
#[derive(Debug, Clone, Copy, PartialEq)]
enum Reduction {
    /// `operand op operand`
    Compare { op: InfixOp, left: f32, right: f32 },
    /// `bool op bool`
    Combine { op: InfixOp, left: bool, right: bool },
    /// `! bool`
    Negate(bool),
    /// identifier bound to `"true"` or `"false"`
    Dereference(bool),
}

/// Token buffer for a single evaluation
pub struct Reducer<'a, E: ValueEnvironment + ?Sized> {
    values: &'a E,
    buffer: Vec<Token>,
}

impl<'a, E: ValueEnvironment + ?Sized> Reducer<'a, E> {
    pub fn new(values: &'a E) -> Self {
        Self {
            values,
            buffer: Vec::new(),
        }
    }

    /// Current buffer contents
    pub fn buffer(&self) -> &[Token] {
        &self.buffer
    }

    /// Push the next token and attempt one reduction.
    ///
    /// A `)` is never buffered: the tail is reduced once and the nearest
    /// `(` to its left is removed.
    pub fn shift(&mut self, token: Token) -> Result<(), EvalError> {
        let closing = token == Token::RightParen;
        if !closing {
            self.buffer.push(token);
        }

        self.reduce()?;

        if closing {
            self.close_bracket();
        }
        Ok(())
    }

    /// Perform at most one reduction on the buffer tail.
    ///
    /// Returns whether a rule fired. Rules are tried in order: numeric
    /// comparison, boolean combination, negation, variable dereference.
    pub fn reduce(&mut self) -> Result<bool, EvalError> {
        match self.next_reduction()? {
            Some(reduction) => {
                self.apply(reduction);
                log::trace!("{:?} -> {}", reduction, render(&self.buffer));
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Drain the buffer and report the truth value.
    ///
    /// Stops as soon as one token remains or no rule fires anymore.
    pub fn finish(mut self) -> Result<bool, EvalError> {
        while self.buffer.len() > 1 {
            if !self.reduce()? {
                log::debug!("Buffer did not reduce: {}", render(&self.buffer));
                break;
            }
        }
        Ok(matches!(self.buffer.as_slice(), [Token::Bool(true)]))
    }

    fn next_reduction(&self) -> Result<Option<Reduction>, EvalError> {
        let reduction = match self.buffer.as_slice() {
            [.., left, Token::Infix(op), right] if left.is_operand() && right.is_operand() => {
                Some(Reduction::Compare {
                    op: *op,
                    left: self.resolve(left)?,
                    right: self.resolve(right)?,
                })
            }
            [.., Token::Bool(left), Token::Infix(op), Token::Bool(right)] if op.is_boolean() => {
                Some(Reduction::Combine {
                    op: *op,
                    left: *left,
                    right: *right,
                })
            }
            [.., Token::Not, Token::Bool(value)] => Some(Reduction::Negate(*value)),
            [.., Token::Identifier(name)] => match self.lookup(name)? {
                "true" => Some(Reduction::Dereference(true)),
                "false" => Some(Reduction::Dereference(false)),
                _ => None,
            },
            _ => None,
        };
        Ok(reduction)
    }

    fn apply(&mut self, reduction: Reduction) {
        let (consumed, result) = match reduction {
            Reduction::Compare { op, left, right } => {
                let result = match op {
                    InfixOp::Eq => Some(left == right),
                    InfixOp::Gt => Some(left > right),
                    InfixOp::Lt => Some(left < right),
                    // operands are dropped without a result
                    InfixOp::And | InfixOp::Or => None,
                };
                (3, result)
            }
            Reduction::Combine { op, left, right } => {
                let result = match op {
                    InfixOp::And => Some(left && right),
                    InfixOp::Or => Some(left || right),
                    InfixOp::Eq => Some(left == right),
                    // excluded by `InfixOp::is_boolean`
                    InfixOp::Gt | InfixOp::Lt => None,
                };
                (3, result)
            }
            Reduction::Negate(value) => (2, Some(!value)),
            Reduction::Dereference(value) => (1, Some(value)),
        };

        self.buffer.truncate(self.buffer.len() - consumed);
        if let Some(value) = result {
            self.buffer.push(Token::Bool(value));
        }
    }

    fn close_bracket(&mut self) {
        if let Some(pos) = self.buffer.iter().rposition(|t| *t == Token::LeftParen) {
            self.buffer.remove(pos);
        }
    }

    fn lookup(&self, name: &str) -> Result<&'a str, EvalError> {
        let values: &'a E = self.values;
        values.lookup(name).ok_or_else(|| EvalError::unbound(name))
    }

    /// Operands compare in single precision, so `-15.000000001 == -15`.
    fn resolve(&self, token: &Token) -> Result<f32, EvalError> {
        match token {
            Token::Number(text) => text
                .parse()
                .map_err(|_| EvalError::MalformedNumber(text.clone())),
            Token::Identifier(name) => {
                let value = self.lookup(name)?;
                value
                    .trim()
                    .parse()
                    .map_err(|_| EvalError::non_numeric(name.as_str(), value))
            }
            other => Err(EvalError::MalformedNumber(other.to_string())),
        }
    }
}

fn render(buffer: &[Token]) -> String {
    buffer
        .iter()
        .map(|t| t.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}
