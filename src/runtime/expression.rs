use crate::language::{
    stream::{Cursor, TokenStream},
    token::TokenKind,
};
use crate::runtime::{
    environment::Environment,
    error::{RuntimeError, RuntimeResult},
};

/// Deepest `(` nesting an expression may use before it is rejected.
pub const MAX_DEPTH: usize = 256;

/// Result of evaluating one expression.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Evaluation {
    pub value: f64,
    /// True when the outermost operator is a comparison.
    pub is_boolean: bool,
    /// First token after the expression.
    pub cursor: Cursor,
}

/// Evaluates `unary op unary` expressions straight off the token stream.
///
/// A parenthesized expression consumes its own closing `)`, so nested
/// operands like `( ( a + 1 ) * 2 )` need no help from the caller.
pub struct Evaluator<'a> {
    stream: &'a TokenStream,
    env: &'a Environment,
}

impl<'a> Evaluator<'a> {
    pub fn new(stream: &'a TokenStream, env: &'a Environment) -> Self {
        Self { stream, env }
    }

    pub fn evaluate(&self, start: Cursor) -> RuntimeResult<Evaluation> {
        self.evaluate_at(start, 0)
    }

    fn evaluate_at(&self, start: Cursor, depth: usize) -> RuntimeResult<Evaluation> {
        let parenthesized = self.stream.kind(start) == Some(TokenKind::LParen);
        let cursor = if parenthesized { start + 1 } else { start };

        let (left, cursor) = self.unary(cursor, depth)?;
        let op = match self.stream.kind(cursor) {
            Some(TokenKind::Operator(op)) => op,
            _ => {
                return Err(RuntimeError::ExpectedOperator {
                    found: self.stream.describe(cursor),
                    span: self.stream.span_at(cursor),
                })
            }
        };
        let (right, mut cursor) = self.unary(cursor + 1, depth)?;

        if parenthesized {
            if self.stream.kind(cursor) != Some(TokenKind::RParen) {
                return Err(RuntimeError::MissingCloseParen {
                    found: self.stream.describe(cursor),
                    span: self.stream.span_at(cursor),
                });
            }
            cursor += 1;
        }

        Ok(Evaluation {
            value: op.apply(left, right),
            is_boolean: op.is_comparison(),
            cursor,
        })
    }

    fn unary(&self, cursor: Cursor, depth: usize) -> RuntimeResult<(f64, Cursor)> {
        let token = self.stream.get(cursor);
        match token.map(|t| t.kind) {
            Some(TokenKind::Identifier(id)) => {
                let span = self.stream.span_at(cursor);
                Ok((self.env.lookup(id, self.stream, span)?, cursor + 1))
            }
            Some(TokenKind::Number(value)) => Ok((value, cursor + 1)),
            Some(TokenKind::LParen) if depth < MAX_DEPTH => {
                let inner = self.evaluate_at(cursor, depth + 1)?;
                Ok((inner.value, inner.cursor))
            }
            _ => Err(RuntimeError::ExpectedUnary {
                found: self.stream.describe(cursor),
                span: self.stream.span_at(cursor),
            }),
        }
    }
}
