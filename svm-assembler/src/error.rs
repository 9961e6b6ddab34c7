//! # Error Types for the SVM Assembler

use thiserror::Error;

/// Assembler error types
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AssemblerError {
    /// Invalid syntax
    #[error("Syntax error at line {line}: {message}")]
    SyntaxError { line: usize, message: String },

    /// Unknown mnemonic
    #[error("Unknown mnemonic at line {line}: {mnemonic}")]
    UnknownMnemonic { line: usize, mnemonic: String },

    /// Wrong number of operands for an instruction
    #[error("{mnemonic} at line {line} takes {expected} operands, found {found}")]
    WrongOperandCount {
        line: usize,
        mnemonic: &'static str,
        expected: usize,
        found: usize,
    },

    /// Operand does not fit its address space
    #[error("Operand out of range at line {line}: {value} (max {max})")]
    OperandRange { line: usize, value: u64, max: u64 },
}

/// Result type for assembler operations
pub type Result<T> = std::result::Result<T, AssemblerError>;
