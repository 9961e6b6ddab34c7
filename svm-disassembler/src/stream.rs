//! Streaming decoder over an owned program.
//!
//! `ProgramStream` wraps a [`Program`] and a program-counter cursor and
//! yields instructions one at a time. It is lazy and restartable:
//! [`ProgramStream::load`] swaps in a new program and rewinds the cursor.
//! No heap allocation happens per step; the program bytes are the sole
//! buffer.
//!
//! A [`Instruction::Bad`] result ends the stream: the failing read
//! consumes the truncated tail, so the cursor lands at the end of the
//! program and [`ProgramStream::empty`] reports true.

use crate::decoder::decode_one;
use svm_spec::{Instruction, Program};

/// Lazy, restartable instruction stream over a byte program
#[derive(Clone, Debug, Default)]
pub struct ProgramStream {
    program: Program,
    pc: usize,
    current: Option<Instruction>,
}

impl ProgramStream {
    /// Create a stream positioned at the start of `program`
    pub fn new(program: Program) -> Self {
        ProgramStream {
            program,
            pc: 0,
            current: None,
        }
    }

    /// True iff the program counter has reached or passed the end of the
    /// loaded program
    #[inline]
    pub fn empty(&self) -> bool {
        self.pc >= self.program.len()
    }

    /// Decode one instruction at the current position, store it as
    /// current, and advance the program counter by the consumed bytes.
    ///
    /// After a `Bad` result the remaining tail counts as consumed and the
    /// stream is empty.
    pub fn advance(&mut self) -> Instruction {
        let (instruction, consumed) = decode_one(&self.program.code[self.pc..]);
        match instruction {
            Instruction::Bad { .. } => self.pc = self.program.len(),
            _ => self.pc += consumed,
        }
        self.current = Some(instruction);
        instruction
    }

    /// Replace the program and rewind the cursor to zero
    pub fn load(&mut self, program: Program) {
        self.program = program;
        self.pc = 0;
        self.current = None;
    }

    /// The byte position immediately after the most recently decoded
    /// instruction (0 before any decode)
    #[inline]
    pub fn program_counter(&self) -> usize {
        self.pc
    }

    /// The most recently decoded instruction, if any
    #[inline]
    pub fn current(&self) -> Option<Instruction> {
        self.current
    }

    /// Borrow the loaded program
    #[inline]
    pub fn program(&self) -> &Program {
        &self.program
    }
}
