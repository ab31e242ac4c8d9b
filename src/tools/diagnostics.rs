use crate::error::Error;
use crate::language::source::SourceBuffer;
use miette::{Diagnostic, NamedSource, Report, SourceSpan};
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error, Diagnostic, Clone)]
#[error("{message}")]
pub struct ProgramDiagnostic {
    #[source_code]
    src: NamedSource<String>,
    #[label("{label}")]
    span: SourceSpan,
    #[help]
    help: Option<String>,
    message: String,
    label: String,
}

impl ProgramDiagnostic {
    /// `None` when the error has no position in the program text.
    pub fn from_error(source: &SourceBuffer, err: &Error) -> Option<Self> {
        let span = err.span()?;
        Some(Self {
            src: NamedSource::new(source.name(), source.program().to_string()),
            span: span.into(),
            help: err.help(),
            message: match err.kind() {
                Some(kind) => format!("{kind}: {err}"),
                None => err.to_string(),
            },
            label: err.label(),
        })
    }
}

pub fn emit_error(source: &SourceBuffer, err: &Error) {
    match ProgramDiagnostic::from_error(source, err) {
        Some(diagnostic) => eprintln!("{:?}", Report::new(diagnostic)),
        None => eprintln!("ERR: {}", err),
    }
}

pub fn report_io_error(path: &Path, error: &std::io::Error) {
    eprintln!("Failed to access {}: {}", path.display(), error);
}
