use crate::language::{errors::SyntaxError, span::Span};
use crate::runtime::error::RuntimeError;
use std::{fmt, path::PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Syntax(#[from] SyntaxError),
    #[error(transparent)]
    Runtime(#[from] RuntimeError),
    #[error("Failed to access {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Flat classification of every failure a run can end with.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    UnknownSymbol,
    DuplicateLabel,
    MissingLabelTarget,
    DuplicateVariable,
    TooManyVariables,
    UnboundVariable,
    ExpectedUnary,
    ExpectedOperator,
    MissingCloseParen,
    UnknownLabel,
    ExpectedBooleanExpression,
    LabelInsideConditional,
    UnexpectedToken,
    NotNullTerminated,
    InvalidUtf8,
}

impl Error {
    /// `None` for loader I/O failures.
    pub fn kind(&self) -> Option<ErrorKind> {
        match self {
            Error::Syntax(err) => Some(err.kind()),
            Error::Runtime(err) => Some(err.kind()),
            Error::Io { .. } => None,
        }
    }

    pub fn span(&self) -> Option<Span> {
        match self {
            Error::Syntax(err) => err.span(),
            Error::Runtime(err) => Some(err.span()),
            Error::Io { .. } => None,
        }
    }

    pub fn label(&self) -> String {
        match self {
            Error::Syntax(err) => err.label(),
            Error::Runtime(err) => err.label(),
            Error::Io { .. } => String::new(),
        }
    }

    pub fn help(&self) -> Option<String> {
        match self {
            Error::Syntax(err) => err.help(),
            Error::Runtime(err) => err.help(),
            Error::Io { .. } => None,
        }
    }
}

impl SyntaxError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            SyntaxError::NotNullTerminated => ErrorKind::NotNullTerminated,
            SyntaxError::InvalidUtf8 { .. } => ErrorKind::InvalidUtf8,
            SyntaxError::UnknownSymbol { .. } => ErrorKind::UnknownSymbol,
            SyntaxError::DuplicateLabel { .. } => ErrorKind::DuplicateLabel,
            SyntaxError::MissingLabelTarget { .. } => ErrorKind::MissingLabelTarget,
        }
    }
}

impl RuntimeError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            RuntimeError::DuplicateVariable { .. } => ErrorKind::DuplicateVariable,
            RuntimeError::TooManyVariables { .. } => ErrorKind::TooManyVariables,
            RuntimeError::UnboundVariable { .. } => ErrorKind::UnboundVariable,
            RuntimeError::ExpectedUnary { .. } => ErrorKind::ExpectedUnary,
            RuntimeError::ExpectedOperator { .. } => ErrorKind::ExpectedOperator,
            RuntimeError::MissingCloseParen { .. } => ErrorKind::MissingCloseParen,
            RuntimeError::UnknownLabel { .. } => ErrorKind::UnknownLabel,
            RuntimeError::ExpectedBooleanExpression { .. } => ErrorKind::ExpectedBooleanExpression,
            RuntimeError::LabelInsideConditional { .. } => ErrorKind::LabelInsideConditional,
            RuntimeError::UnexpectedToken { .. } => ErrorKind::UnexpectedToken,
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}
