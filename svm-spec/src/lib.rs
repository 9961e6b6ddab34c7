//! # SVM Instruction Set Specification
//!
//! Shared definition of the SVM instruction set: the opcode enumeration,
//! the typed address spaces, the per-opcode instruction records, and the
//! binary wire format.
//!
//! ## Key properties
//! - One-byte opcodes with stable, non-dense numeric values; gaps are
//!   reserved and decode as `Invalid`
//! - Variable-width instructions: opcode byte followed by the operand
//!   fields in declaration order, little-endian, no padding
//! - Stack addresses are 16-bit; program and symbol addresses are pinned
//!   to 64 bits on the wire
//! - Lowercase ASCII mnemonics, assembled case-insensitively

pub mod opcode;
pub mod address;
pub mod instruction;
pub mod encoding;
pub mod program;

pub use opcode::{OpCode, OpCodeFamily};
pub use address::{HeapAddr, ProgramAddr, StackAddr, SymbolAddr};
pub use instruction::Instruction;
pub use encoding::OperandKind;
pub use program::Program;
