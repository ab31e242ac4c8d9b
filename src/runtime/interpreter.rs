use crate::language::{
    ident::IdentId,
    preprocess::{LabelIndex, Preprocessed},
    span::Span,
    stream::{Cursor, TokenStream},
    token::TokenKind,
};
use crate::runtime::{
    environment::Environment,
    error::{RuntimeError, RuntimeResult},
    expression::Evaluator,
};
use log::{info, trace};
use std::time::{Duration, Instant};

/// Final state of a successful run.
#[derive(Clone, Debug, PartialEq)]
pub struct Outcome {
    /// Declared variables in declaration order.
    pub variables: Vec<(String, f64)>,
    /// Wall-clock time spent in the run loop.
    pub elapsed: Duration,
}

impl Outcome {
    pub fn value(&self, name: &str) -> Option<f64> {
        self.variables
            .iter()
            .find(|(var, _)| var == name)
            .map(|(_, value)| *value)
    }
}

/// Executes a token stream in place. Control flow is a cursor into the
/// stream; `IF` bodies that were entered are tracked by `nesting` so a
/// closing `FI` can be told apart from a stray one.
pub struct Interpreter<'p> {
    stream: &'p TokenStream,
    labels: &'p LabelIndex,
    env: Environment,
    cursor: Cursor,
    nesting: usize,
    pending: Option<(IdentId, Span)>,
}

impl<'p> Interpreter<'p> {
    pub fn new(stream: &'p TokenStream, preprocessed: &'p Preprocessed) -> Self {
        Self {
            stream,
            labels: &preprocessed.labels,
            env: Environment::with_capacity(preprocessed.declared_vars),
            cursor: 0,
            nesting: 0,
            pending: None,
        }
    }

    pub fn run(mut self) -> RuntimeResult<Outcome> {
        self.declare_variables()?;

        let started = Instant::now();
        while self.cursor < self.stream.len() {
            self.cursor = self.step(self.cursor)?;
        }
        let elapsed = started.elapsed();
        info!("interpreting took {:?}", elapsed);

        Ok(self.into_outcome(elapsed))
    }

    fn into_outcome(self, elapsed: Duration) -> Outcome {
        let variables = self
            .env
            .iter()
            .map(|(id, value)| (self.stream.name(id).to_string(), value))
            .collect();
        Outcome { variables, elapsed }
    }

    fn declare_variables(&mut self) -> RuntimeResult<()> {
        while self.stream.kind(self.cursor) == Some(TokenKind::Def) {
            let next = self.cursor + 1;
            let id = match self.stream.kind(next) {
                Some(TokenKind::Identifier(id)) => id,
                _ => return Err(self.unexpected(next, Some("an identifier after DEF"))),
            };
            self.env.declare(id, self.stream, self.stream.span_at(next))?;
            trace!(
                "declared `{}` (var #{}/{})",
                self.stream.name(id),
                self.env.len(),
                self.env.capacity()
            );
            self.cursor += 2;
        }
        Ok(())
    }

    /// Executes the token at `cursor` and returns where to continue.
    fn step(&mut self, cursor: Cursor) -> RuntimeResult<Cursor> {
        let kind = match self.stream.kind(cursor) {
            Some(kind) => kind,
            None => return Ok(cursor),
        };
        match kind {
            TokenKind::Identifier(id) => {
                self.pending = Some((id, self.stream.span_at(cursor)));
                Ok(cursor + 1)
            }
            TokenKind::Assign => self.exec_assign(cursor),
            TokenKind::Label => {
                if self.nesting > 0 {
                    return Err(RuntimeError::LabelInsideConditional {
                        span: self.stream.span_at(cursor),
                    });
                }
                Ok(cursor + 2)
            }
            TokenKind::Goto => self.exec_goto(cursor),
            TokenKind::If => self.exec_if(cursor),
            TokenKind::Fi if self.nesting > 0 => {
                self.nesting -= 1;
                trace!("fi [nested: {}]", self.nesting);
                Ok(cursor + 1)
            }
            _ => Err(self.unexpected(cursor, None)),
        }
    }

    fn exec_assign(&mut self, cursor: Cursor) -> RuntimeResult<Cursor> {
        let (target, target_span) = self
            .pending
            .ok_or_else(|| self.unexpected(cursor, Some("an identifier before `=`")))?;

        let next = cursor + 1;
        let (value, resume) = match self.stream.kind(next) {
            Some(TokenKind::Number(value)) => (value, next + 1),
            Some(TokenKind::Identifier(id)) => {
                let value = self.env.lookup(id, self.stream, self.stream.span_at(next))?;
                (value, next + 1)
            }
            Some(TokenKind::LParen) => {
                let eval = Evaluator::new(self.stream, &self.env).evaluate(next)?;
                (eval.value, eval.cursor)
            }
            _ => {
                return Err(RuntimeError::ExpectedUnary {
                    found: self.stream.describe(next),
                    span: self.stream.span_at(next),
                })
            }
        };

        self.env.assign(target, value, self.stream, target_span)?;
        trace!("set {} = {}", self.stream.name(target), value);
        Ok(resume)
    }

    fn exec_goto(&mut self, cursor: Cursor) -> RuntimeResult<Cursor> {
        let next = cursor + 1;
        let resume = match self.stream.kind(next) {
            Some(TokenKind::Identifier(id)) => self.labels.resolve(id),
            _ => None,
        };
        let resume = resume.ok_or_else(|| RuntimeError::UnknownLabel {
            name: self.stream.describe(next),
            span: self.stream.span_at(next),
        })?;
        trace!("goto {} -> token {}", self.stream.describe(next), resume);
        self.nesting = 0;
        Ok(resume)
    }

    fn exec_if(&mut self, cursor: Cursor) -> RuntimeResult<Cursor> {
        let eval = Evaluator::new(self.stream, &self.env).evaluate(cursor + 1)?;
        if self.stream.kind(eval.cursor) != Some(TokenKind::Then) {
            return Err(self.unexpected(eval.cursor, Some("THEN after the IF condition")));
        }
        if !eval.is_boolean {
            let span = Span::new(
                self.stream.span_at(cursor + 1).start,
                self.stream.span_at(eval.cursor - 1).end,
            );
            return Err(RuntimeError::ExpectedBooleanExpression { span });
        }
        trace!("if {}", eval.value);

        if eval.value == 0.0 {
            Ok(self.skip_block(eval.cursor))
        } else {
            self.nesting += 1;
            Ok(eval.cursor + 1)
        }
    }

    /// Returns the token after the `FI` matching the `IF` whose `THEN` is
    /// at `then`. Running off the end yields the stream length.
    fn skip_block(&self, then: Cursor) -> Cursor {
        let mut depth = 1usize;
        let mut cursor = then;
        while depth > 0 {
            cursor += 1;
            match self.stream.kind(cursor) {
                Some(TokenKind::If) => depth += 1,
                Some(TokenKind::Fi) => depth -= 1,
                Some(_) => {}
                None => return cursor,
            }
        }
        cursor + 1
    }

    fn unexpected(&self, cursor: Cursor, expected: Option<&'static str>) -> RuntimeError {
        RuntimeError::UnexpectedToken {
            found: self.stream.describe(cursor),
            expected,
            span: self.stream.span_at(cursor),
        }
    }
}
