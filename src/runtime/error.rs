use crate::language::span::Span;
use thiserror::Error;

pub type RuntimeResult<T> = Result<T, RuntimeError>;

#[derive(Clone, Debug, Error, PartialEq)]
pub enum RuntimeError {
    #[error("Redeclaration of variable `{name}`")]
    DuplicateVariable { name: String, span: Span },
    #[error("Cannot declare `{name}`: all {capacity} variable slots are in use")]
    TooManyVariables {
        name: String,
        capacity: usize,
        span: Span,
    },
    #[error("Unknown variable `{name}`")]
    UnboundVariable { name: String, span: Span },
    #[error("Expected identifier, number or `(` in expression, found `{found}`")]
    ExpectedUnary { found: String, span: Span },
    #[error("Expected operator in expression, found `{found}`")]
    ExpectedOperator { found: String, span: Span },
    #[error("Missing `)`, found `{found}`")]
    MissingCloseParen { found: String, span: Span },
    #[error("Unknown label `{name}`")]
    UnknownLabel { name: String, span: Span },
    #[error("Expected boolean expression")]
    ExpectedBooleanExpression { span: Span },
    #[error("Unexpected label inside conditional block")]
    LabelInsideConditional { span: Span },
    #[error("Unknown or unexpected token `{found}`")]
    UnexpectedToken {
        found: String,
        expected: Option<&'static str>,
        span: Span,
    },
}

impl RuntimeError {
    pub fn span(&self) -> Span {
        match self {
            RuntimeError::DuplicateVariable { span, .. }
            | RuntimeError::TooManyVariables { span, .. }
            | RuntimeError::UnboundVariable { span, .. }
            | RuntimeError::ExpectedUnary { span, .. }
            | RuntimeError::ExpectedOperator { span, .. }
            | RuntimeError::MissingCloseParen { span, .. }
            | RuntimeError::UnknownLabel { span, .. }
            | RuntimeError::ExpectedBooleanExpression { span }
            | RuntimeError::LabelInsideConditional { span }
            | RuntimeError::UnexpectedToken { span, .. } => *span,
        }
    }

    pub fn label(&self) -> String {
        match self {
            RuntimeError::DuplicateVariable { .. } => "declared again here".into(),
            RuntimeError::TooManyVariables { .. } => "no slot left for this declaration".into(),
            RuntimeError::UnboundVariable { .. } => "not declared with DEF".into(),
            RuntimeError::ExpectedUnary { .. } => "expected operand".into(),
            RuntimeError::ExpectedOperator { .. } => "expected operator".into(),
            RuntimeError::MissingCloseParen { .. } => "expected `)`".into(),
            RuntimeError::UnknownLabel { .. } => "no label with this name".into(),
            RuntimeError::ExpectedBooleanExpression { .. } => "condition is not a comparison".into(),
            RuntimeError::LabelInsideConditional { .. } => "label inside IF block".into(),
            RuntimeError::UnexpectedToken {
                expected: Some(expected),
                ..
            } => format!("expected {expected}"),
            RuntimeError::UnexpectedToken { expected: None, .. } => "unexpected here".into(),
        }
    }

    pub fn help(&self) -> Option<String> {
        match self {
            RuntimeError::UnboundVariable { name, .. } => {
                Some(format!("Declare it at the top of the program: DEF {name}"))
            }
            RuntimeError::ExpectedBooleanExpression { .. } => {
                Some("IF conditions use one of < > <= >= ==".into())
            }
            RuntimeError::MissingCloseParen { .. } | RuntimeError::ExpectedOperator { .. } => {
                Some("Expressions have the form ( <operand> <operator> <operand> )".into())
            }
            RuntimeError::LabelInsideConditional { .. } => {
                Some("Move the label outside of the IF ... FI block".into())
            }
            _ => None,
        }
    }
}
