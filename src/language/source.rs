use crate::language::{
    errors::{SyntaxError, SyntaxResult},
    span::Span,
};
use std::{fs, io, path::Path};

pub const TERMINATOR: u8 = b'\0';

/// An immutable, NUL-terminated program text together with the name it
/// is reported under.
#[derive(Clone, Debug)]
pub struct SourceBuffer {
    name: String,
    text: String,
}

impl SourceBuffer {
    /// Wraps raw bytes that must already carry their terminator and be
    /// valid UTF-8.
    pub fn new(name: impl Into<String>, bytes: Vec<u8>) -> SyntaxResult<Self> {
        if bytes.last() != Some(&TERMINATOR) {
            return Err(SyntaxError::NotNullTerminated);
        }
        let text = String::from_utf8(bytes).map_err(|err| SyntaxError::InvalidUtf8 {
            span: Span::point(err.utf8_error().valid_up_to()),
        })?;
        Ok(Self {
            name: name.into(),
            text,
        })
    }

    pub fn from_text(name: impl Into<String>, text: &str) -> Self {
        let mut text = text.to_string();
        text.push(TERMINATOR as char);
        Self {
            name: name.into(),
            text,
        }
    }

    /// Reads a program from disk, appending the terminator. Files that are
    /// not UTF-8 fail with [`io::ErrorKind::InvalidData`].
    pub fn from_file(path: &Path) -> io::Result<Self> {
        let mut bytes = fs::read(path)?;
        bytes.push(TERMINATOR);
        let text =
            String::from_utf8(bytes).map_err(|err| io::Error::new(io::ErrorKind::InvalidData, err))?;
        Ok(Self {
            name: path.display().to_string(),
            text,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The whole buffer, terminator included.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Text up to, not including, the first terminator.
    pub fn program(&self) -> &str {
        match self.text.find(TERMINATOR as char) {
            Some(end) => &self.text[..end],
            None => &self.text,
        }
    }
}
