//! Typed addresses for the three machine address spaces.
//!
//! An address is always an index, never a raw machine pointer, and the
//! newtypes keep indices into different stores from being mixed up: a
//! `StackAddr` indexes the operand stack frame, a `ProgramAddr` indexes
//! the program byte slice, and a `SymbolAddr` indexes an external symbol
//! table. `HeapAddr` exists for runtime embedders only and never appears
//! on the wire.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Offset into the current stack frame (16-bit, 2 bytes LE on the wire)
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct StackAddr(pub u16);

/// Byte offset into the program (pinned to 8 bytes LE on the wire)
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct ProgramAddr(pub u64);

/// Index into an external symbol table (pinned to 8 bytes LE on the wire)
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct SymbolAddr(pub u64);

/// Index into a runtime heap. Runtime-only; this never appears in encoded
/// programs and has no wire width.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct HeapAddr(pub usize);

impl StackAddr {
    /// Convert to an index into the stack frame
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl ProgramAddr {
    /// Convert to a byte index into the program
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl SymbolAddr {
    /// Convert to an index into the symbol table
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl HeapAddr {
    /// Convert to an index into the heap
    #[inline]
    pub const fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for StackAddr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Display for ProgramAddr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Display for SymbolAddr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Display for HeapAddr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u16> for StackAddr {
    fn from(value: u16) -> Self {
        StackAddr(value)
    }
}

impl From<u64> for ProgramAddr {
    fn from(value: u64) -> Self {
        ProgramAddr(value)
    }
}

impl From<u64> for SymbolAddr {
    fn from(value: u64) -> Self {
        SymbolAddr(value)
    }
}
