//! # SVM Disassembler
//!
//! Decode SVM bytecode into typed instruction records and render it back
//! as human-readable assembly.
//!
//! Decoding never fails in the `Result` sense: a reserved opcode byte
//! decodes to `Instruction::Invalid` (one byte consumed, decoding
//! continues), and a program that ends mid-operand decodes to
//! `Instruction::Bad` (the stream ends). Both are ordinary values; the
//! caller decides whether to continue.
//!
//! ## Example
//!
//! ```rust
//! use svm_spec::Program;
//! use svm_disassembler::disassemble;
//!
//! let program = Program::from_bytes(vec![0x01, 0x09]); // nop, pop
//! let asm = disassemble(&program);
//! assert!(asm.contains("nop"));
//! ```

pub mod decoder;
pub mod stream;
pub mod formatter;
pub mod disassembler;

pub use decoder::decode_one;
pub use stream::ProgramStream;
pub use formatter::format;
pub use disassembler::disassemble;
