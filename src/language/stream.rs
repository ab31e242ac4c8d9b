use crate::language::{
    ident::{IdentId, IdentifierTable},
    span::Span,
    token::{Token, TokenKind},
};

/// Index of a token in a [`TokenStream`]; the interpreter's program counter.
pub type Cursor = usize;

/// The tokenizer's output: tokens in source order plus the identifier
/// table their handles point into.
#[derive(Clone, Debug, Default)]
pub struct TokenStream {
    tokens: Vec<Token>,
    identifiers: IdentifierTable,
    source_len: usize,
}

impl TokenStream {
    pub fn new(tokens: Vec<Token>, identifiers: IdentifierTable, source_len: usize) -> Self {
        Self {
            tokens,
            identifiers,
            source_len,
        }
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub fn get(&self, cursor: Cursor) -> Option<&Token> {
        self.tokens.get(cursor)
    }

    pub fn kind(&self, cursor: Cursor) -> Option<TokenKind> {
        self.tokens.get(cursor).map(|token| token.kind)
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn identifiers(&self) -> &IdentifierTable {
        &self.identifiers
    }

    pub fn name(&self, id: IdentId) -> &str {
        self.identifiers.name(id)
    }

    /// Span of the token at `cursor`, or a zero-width span after the last
    /// token when the cursor has run off the end.
    pub fn span_at(&self, cursor: Cursor) -> Span {
        match self.tokens.get(cursor) {
            Some(token) => token.span,
            None => match self.tokens.last() {
                Some(last) => Span::point(last.span.end),
                None => Span::point(self.source_len),
            },
        }
    }

    /// Human readable form of the token at `cursor` for error messages.
    pub fn describe(&self, cursor: Cursor) -> String {
        match self.tokens.get(cursor) {
            Some(token) => self.spell(&token.kind),
            None => "end of input".into(),
        }
    }

    pub fn spell(&self, kind: &TokenKind) -> String {
        match kind {
            TokenKind::Identifier(id) => self.name(*id).to_string(),
            TokenKind::Number(value) => render_number(*value),
            other => other.keyword().unwrap_or_default().to_string(),
        }
    }

    /// Renders the stream back into source text that tokenizes to the same
    /// kinds and identifier names.
    pub fn render(&self) -> String {
        self.tokens
            .iter()
            .map(|token| self.spell(&token.kind))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

fn render_number(value: f64) -> String {
    if value.is_infinite() {
        // overflowing literal; reads back as infinity
        "1e999".into()
    } else {
        value.to_string()
    }
}
