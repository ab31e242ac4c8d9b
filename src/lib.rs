#![allow(clippy::collapsible_if)]

pub mod config;
pub mod error;
pub mod language;
pub mod pipeline;
pub mod runtime;
pub mod tools;

pub use error::{Error, ErrorKind};
pub use pipeline::{compile, load, run_source, run_str};
pub use runtime::Outcome;
