use crate::language::span::Span;
use miette::SourceSpan;
use thiserror::Error;

pub type SyntaxResult<T> = Result<T, SyntaxError>;

/// Failures raised before execution starts: loading, tokenizing and
/// label indexing.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum SyntaxError {
    #[error("Source buffer is not null terminated")]
    NotNullTerminated,
    #[error("Source is not valid UTF-8")]
    InvalidUtf8 { span: Span },
    #[error("Unknown symbol `{text}`")]
    UnknownSymbol { text: String, span: Span },
    #[error("Redeclaration of label `{name}`")]
    DuplicateLabel {
        name: String,
        span: Span,
        first: Span,
    },
    #[error("Label marker is not followed by an identifier")]
    MissingLabelTarget { span: Span },
}

impl SyntaxError {
    pub fn span(&self) -> Option<Span> {
        match self {
            SyntaxError::NotNullTerminated => None,
            SyntaxError::InvalidUtf8 { span }
            | SyntaxError::UnknownSymbol { span, .. }
            | SyntaxError::DuplicateLabel { span, .. }
            | SyntaxError::MissingLabelTarget { span } => Some(*span),
        }
    }

    pub fn label(&self) -> String {
        match self {
            SyntaxError::NotNullTerminated => "buffer ends here".into(),
            SyntaxError::InvalidUtf8 { .. } => "invalid byte sequence starts here".into(),
            SyntaxError::UnknownSymbol { .. } => "not a keyword, label, number or identifier".into(),
            SyntaxError::DuplicateLabel { .. } => "label declared again here".into(),
            SyntaxError::MissingLabelTarget { .. } => "expected an identifier after this".into(),
        }
    }

    pub fn help(&self) -> Option<String> {
        match self {
            SyntaxError::UnknownSymbol { .. } => Some(
                "Identifiers start with a letter; numbers start with a digit; labels start with `:`"
                    .into(),
            ),
            SyntaxError::DuplicateLabel { first, .. } => Some(format!(
                "The label was first declared at byte {}",
                first.start
            )),
            SyntaxError::MissingLabelTarget { .. } => Some("Syntax: :<name>".into()),
            SyntaxError::NotNullTerminated | SyntaxError::InvalidUtf8 { .. } => None,
        }
    }

    pub fn to_source_span(&self) -> SourceSpan {
        self.span().unwrap_or_default().into()
    }
}
