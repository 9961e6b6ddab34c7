//! Program container for SVM bytecode.
//!
//! A program is nothing more than an owned, read-only byte sequence of
//! encoded instructions. There is no header, magic, or on-disk framing;
//! persistence is the concern of whatever embeds the codec.

use serde::{Deserialize, Serialize};

/// An in-memory SVM byte program
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Program {
    /// Encoded instructions, back to back, no padding
    pub code: Vec<u8>,
}

impl Program {
    /// Create an empty program
    pub fn new() -> Self {
        Program { code: Vec::new() }
    }

    /// Wrap an existing byte sequence
    pub fn from_bytes(code: Vec<u8>) -> Self {
        Program { code }
    }

    /// Program length in bytes
    #[inline]
    pub fn len(&self) -> usize {
        self.code.len()
    }

    /// True if the program contains no bytes
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.code.is_empty()
    }

    /// Borrow the raw bytes
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.code
    }
}

impl From<Vec<u8>> for Program {
    fn from(code: Vec<u8>) -> Self {
        Program { code }
    }
}
