pub mod environment;
pub mod error;
pub mod expression;
pub mod interpreter;

pub use interpreter::{Interpreter, Outcome};

#[cfg(test)]
mod tests;
