use crate::language::{
    errors::{SyntaxError, SyntaxResult},
    ident::IdentId,
    span::Span,
    stream::{Cursor, TokenStream},
    token::TokenKind,
};
use log::debug;
use std::collections::HashMap;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LabelEntry {
    /// First token after the label's identifier.
    pub resume: Cursor,
    pub span: Span,
}

/// Jump targets keyed by identifier handle.
#[derive(Clone, Debug, Default)]
pub struct LabelIndex {
    entries: HashMap<IdentId, LabelEntry>,
}

impl LabelIndex {
    pub fn resolve(&self, id: IdentId) -> Option<Cursor> {
        self.entries.get(&id).map(|entry| entry.resume)
    }

    pub fn get(&self, id: IdentId) -> Option<&LabelEntry> {
        self.entries.get(&id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// What the engine needs to know about a program before running it.
#[derive(Clone, Debug, Default)]
pub struct Preprocessed {
    pub labels: LabelIndex,
    /// Number of `DEF` tokens anywhere in the stream; the variable table
    /// capacity.
    pub declared_vars: usize,
}

pub fn preprocess(stream: &TokenStream) -> SyntaxResult<Preprocessed> {
    let mut labels = LabelIndex::default();
    let mut declared_vars = 0;

    for (cursor, token) in stream.tokens().iter().enumerate() {
        match token.kind {
            TokenKind::Label => {
                let target = cursor + 1;
                let id = match stream.kind(target) {
                    Some(TokenKind::Identifier(id)) => id,
                    _ => return Err(SyntaxError::MissingLabelTarget { span: token.span }),
                };
                let span = stream.span_at(target);
                if let Some(first) = labels.get(id) {
                    return Err(SyntaxError::DuplicateLabel {
                        name: stream.name(id).to_string(),
                        span,
                        first: first.span,
                    });
                }
                debug!("label `{}` resumes at token {}", stream.name(id), target + 1);
                labels.entries.insert(
                    id,
                    LabelEntry {
                        resume: target + 1,
                        span,
                    },
                );
            }
            TokenKind::Def => declared_vars += 1,
            _ => {}
        }
    }

    debug!(
        "indexed {} labels, {} variable slots",
        labels.len(),
        declared_vars
    );
    Ok(Preprocessed {
        labels,
        declared_vars,
    })
}
