pub mod errors;
pub mod ident;
pub mod lexer;
pub mod preprocess;
pub mod source;
pub mod span;
pub mod stream;
pub mod token;
