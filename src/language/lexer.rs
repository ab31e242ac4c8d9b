use crate::language::{
    errors::{SyntaxError, SyntaxResult},
    ident::IdentifierTable,
    source::SourceBuffer,
    span::Span,
    stream::TokenStream,
    token::{Token, TokenKind},
};
use log::debug;
use nom::{
    bytes::complete::{take_till1, take_while},
    character::complete::{char, digit0, digit1, one_of},
    combinator::{opt, recognize, rest},
    sequence::{pair, preceded, tuple},
    IResult,
};

pub fn tokenize(source: &SourceBuffer) -> SyntaxResult<TokenStream> {
    tokenize_str(source.program())
}

/// Tokenizes `program`, stopping at the first NUL if there is one.
pub fn tokenize_str(program: &str) -> SyntaxResult<TokenStream> {
    let lexer = Lexer::new(program);
    let stream = lexer.run()?;
    debug!(
        "tokenized {} tokens, {} unique identifiers",
        stream.len(),
        stream.identifiers().len()
    );
    Ok(stream)
}

fn is_whitespace(c: char) -> bool {
    c == ' ' || c == '\n'
}

fn is_delimiter(c: char) -> bool {
    is_whitespace(c) || c == '\0'
}

/// Accepts `[`, `\`, `]`, `^`, `_` and backtick along with the letters.
fn is_identifier_start(c: char) -> bool {
    ('A'..='z').contains(&c)
}

pub fn parse_whitespace(input: &str) -> IResult<&str, &str> {
    take_while(is_whitespace)(input)
}

pub fn parse_word(input: &str) -> IResult<&str, &str> {
    take_till1(is_delimiter)(input)
}

pub fn parse_label_marker(input: &str) -> IResult<&str, &str> {
    preceded(char(':'), rest)(input)
}

/// Longest numeric prefix of a word, in the shape `atof` would read.
pub fn parse_number_prefix(input: &str) -> IResult<&str, &str> {
    recognize(tuple((
        digit1,
        opt(pair(char('.'), digit0)),
        opt(tuple((one_of("eE"), opt(one_of("+-")), digit1))),
    )))(input)
}

struct Lexer<'a> {
    src: &'a str,
    remaining: &'a str,
    tokens: Vec<Token>,
    identifiers: IdentifierTable,
}

impl<'a> Lexer<'a> {
    fn new(src: &'a str) -> Self {
        Self {
            src,
            remaining: src,
            tokens: Vec::new(),
            identifiers: IdentifierTable::new(),
        }
    }

    fn offset(&self) -> usize {
        self.src.len() - self.remaining.len()
    }

    fn run(mut self) -> SyntaxResult<TokenStream> {
        loop {
            if let Ok((after, _)) = parse_whitespace(self.remaining) {
                self.remaining = after;
            }
            let start = self.offset();
            let (after, word) = match parse_word(self.remaining) {
                Ok(parsed) => parsed,
                // empty input or a terminator
                Err(_) => break,
            };
            self.remaining = after;
            self.classify(word, start)?;
        }
        let source_len = self.offset();
        Ok(TokenStream::new(self.tokens, self.identifiers, source_len))
    }

    fn push_token(&mut self, kind: TokenKind, start: usize, end: usize) {
        self.tokens.push(Token {
            kind,
            span: Span::new(start, end),
        });
    }

    fn classify(&mut self, word: &str, start: usize) -> SyntaxResult<()> {
        let end = start + word.len();
        if let Some(kind) = TokenKind::from_word(word) {
            self.push_token(kind, start, end);
            return Ok(());
        }

        if let Ok((_, name)) = parse_label_marker(word) {
            self.push_token(TokenKind::Label, start, start + 1);
            if name.is_empty() {
                return Ok(());
            }
            // identifiers never share a spelling with the vocabulary
            if !name.starts_with(is_identifier_start) || TokenKind::from_word(name).is_some() {
                return Err(unknown_symbol(word, start, end));
            }
            self.push_identifier(name, start + 1, end);
            return Ok(());
        }

        if word.starts_with(|c: char| c.is_ascii_digit()) {
            let value = parse_number_prefix(word)
                .ok()
                .and_then(|(_, digits)| digits.parse::<f64>().ok())
                .ok_or_else(|| unknown_symbol(word, start, end))?;
            self.push_token(TokenKind::Number(value), start, end);
            return Ok(());
        }

        if word.starts_with(is_identifier_start) {
            self.push_identifier(word, start, end);
            return Ok(());
        }

        Err(unknown_symbol(word, start, end))
    }

    fn push_identifier(&mut self, name: &str, start: usize, end: usize) {
        let id = self.identifiers.intern(name);
        self.push_token(TokenKind::Identifier(id), start, end);
    }
}

fn unknown_symbol(word: &str, start: usize, end: usize) -> SyntaxError {
    SyntaxError::UnknownSymbol {
        text: word.to_string(),
        span: Span::new(start, end),
    }
}
