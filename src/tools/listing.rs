use crate::language::{stream::TokenStream, token::TokenKind};
use std::fmt::Write;

/// Numbered dump of a token stream, one token per line.
pub fn token_listing(stream: &TokenStream) -> String {
    let mut out = String::new();
    for (index, token) in stream.tokens().iter().enumerate() {
        let _ = write!(out, "[{:3}] {:>5}..{:<5} ", index + 1, token.span.start, token.span.end);
        let _ = match token.kind {
            TokenKind::Identifier(id) => writeln!(out, "IDENT  {} ({})", stream.name(id), id),
            TokenKind::Number(value) => writeln!(out, "NUMBER {:?}", value),
            TokenKind::Label => writeln!(out, "LABEL"),
            other => writeln!(out, "{}", other.keyword().unwrap_or_default()),
        };
    }
    out
}
