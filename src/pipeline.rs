use crate::error::Error;
use crate::language::{
    lexer::tokenize,
    preprocess::{preprocess, Preprocessed},
    source::SourceBuffer,
    stream::TokenStream,
};
use crate::runtime::{Interpreter, Outcome};
use log::info;
use std::path::Path;

/// A tokenized and preprocessed program, ready to run.
#[derive(Clone, Debug)]
pub struct Compiled {
    pub stream: TokenStream,
    pub preprocessed: Preprocessed,
}

impl Compiled {
    pub fn run(&self) -> Result<Outcome, Error> {
        Ok(Interpreter::new(&self.stream, &self.preprocessed).run()?)
    }
}

pub fn load(path: &Path) -> Result<SourceBuffer, Error> {
    SourceBuffer::from_file(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Tokenizes and preprocesses without executing anything.
pub fn compile(source: &SourceBuffer) -> Result<Compiled, Error> {
    info!("starting lexer for {}", source.name());
    let stream = tokenize(source)?;
    let preprocessed = preprocess(&stream)?;
    Ok(Compiled {
        stream,
        preprocessed,
    })
}

pub fn run_source(source: &SourceBuffer) -> Result<Outcome, Error> {
    compile(source)?.run()
}

pub fn run_str(text: &str) -> Result<Outcome, Error> {
    run_source(&SourceBuffer::from_text("<inline>", text))
}
