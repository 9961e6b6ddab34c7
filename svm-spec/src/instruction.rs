//! SVM instruction records.
//!
//! One variant per opcode, carrying that opcode's typed operand fields in
//! declaration order, plus the two decoder outcomes that have no wire
//! form of their own: `Invalid` (reserved opcode byte) and `Bad` (the
//! program ended mid-operand).
//!
//! Instructions are totally ordered by opcode tag first (see the manual
//! `Ord` impl: a `Bad` sorts by the opcode it failed on, not by its
//! position in this declaration); two instructions are equal iff tag and
//! all operand fields are equal.

use crate::address::{ProgramAddr, StackAddr, SymbolAddr};
use crate::opcode::OpCode;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// A decoded SVM instruction
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Instruction {
    /// The opcode byte was reserved; one byte was consumed
    Invalid,

    // Control
    NoOp,

    // Memory
    Load { target: StackAddr, source_ptr: StackAddr },
    Store { target_ptr: StackAddr, source: StackAddr },

    // Stack
    Push { source: StackAddr },
    Pop,

    // Branch
    Jal { target: ProgramAddr },
    Jnn { target: ProgramAddr, subject: StackAddr },
    Jnz { target: ProgramAddr, subject: StackAddr },

    // Unary
    Lneg { result: ProgramAddr, subject: StackAddr },
    Numneg { result: ProgramAddr, subject: StackAddr },
    Inc { result: ProgramAddr, subject: StackAddr },
    Dec { result: ProgramAddr, subject: StackAddr },
    Bwneg { result: ProgramAddr, subject: StackAddr },

    // Binary
    And { result: StackAddr, a: StackAddr, b: StackAddr },
    Or { result: StackAddr, a: StackAddr, b: StackAddr },
    Xor { result: StackAddr, a: StackAddr, b: StackAddr },
    Add { sum: StackAddr, a: StackAddr, b: StackAddr },
    Sub { diff: StackAddr, minuend: StackAddr, subtrahend: StackAddr },
    Mul { product: StackAddr, multiplicand: StackAddr, multiplier: StackAddr },
    Div { quotient: StackAddr, dividend: StackAddr, divisor: StackAddr },
    Mod { remainder: StackAddr, dividend: StackAddr, divisor: StackAddr },
    Shl { result: StackAddr, subject: StackAddr, shift: StackAddr },
    Shr { result: StackAddr, subject: StackAddr, shift: StackAddr },
    Ushr { result: StackAddr, subject: StackAddr, shift: StackAddr },

    // Trap
    Trap { exception_type: SymbolAddr, handler: ProgramAddr },
    Emit { exception_ptr: StackAddr },

    // Diagnostics
    Print,
    Err { message_ptr: StackAddr },
    Crash,

    /// The program ran out of bytes while reading operands of a
    /// recognised opcode. `expected` is the opcode's declared operand
    /// count, `found` the number of operands completely read.
    Bad { opcode: OpCode, expected: u8, found: u8 },
}

impl Instruction {
    /// The opcode this instruction decodes from.
    ///
    /// `Bad` reports the opcode whose operands were truncated; `Invalid`
    /// reports the reserved opcode.
    pub fn opcode(&self) -> OpCode {
        match self {
            Instruction::Invalid => OpCode::Invalid,
            Instruction::NoOp => OpCode::NoOp,
            Instruction::Load { .. } => OpCode::Load,
            Instruction::Store { .. } => OpCode::Store,
            Instruction::Push { .. } => OpCode::Push,
            Instruction::Pop => OpCode::Pop,
            Instruction::Jal { .. } => OpCode::Jal,
            Instruction::Jnn { .. } => OpCode::Jnn,
            Instruction::Jnz { .. } => OpCode::Jnz,
            Instruction::Lneg { .. } => OpCode::Lneg,
            Instruction::Numneg { .. } => OpCode::Numneg,
            Instruction::Inc { .. } => OpCode::Inc,
            Instruction::Dec { .. } => OpCode::Dec,
            Instruction::Bwneg { .. } => OpCode::Bwneg,
            Instruction::And { .. } => OpCode::And,
            Instruction::Or { .. } => OpCode::Or,
            Instruction::Xor { .. } => OpCode::Xor,
            Instruction::Add { .. } => OpCode::Add,
            Instruction::Sub { .. } => OpCode::Sub,
            Instruction::Mul { .. } => OpCode::Mul,
            Instruction::Div { .. } => OpCode::Div,
            Instruction::Mod { .. } => OpCode::Mod,
            Instruction::Shl { .. } => OpCode::Shl,
            Instruction::Shr { .. } => OpCode::Shr,
            Instruction::Ushr { .. } => OpCode::Ushr,
            Instruction::Trap { .. } => OpCode::Trap,
            Instruction::Emit { .. } => OpCode::Emit,
            Instruction::Print => OpCode::Print,
            Instruction::Err { .. } => OpCode::Err,
            Instruction::Crash => OpCode::Crash,
            Instruction::Bad { opcode, .. } => *opcode,
        }
    }

    /// Encoded length in bytes of this instruction's wire form.
    ///
    /// `Invalid` occupies one byte; `Bad` has no wire form and reports
    /// the single opcode byte it would re-emit.
    pub fn wire_len(&self) -> usize {
        match self {
            Instruction::Invalid | Instruction::Bad { .. } => 1,
            other => other.opcode().wire_len(),
        }
    }

    /// True for the two decoder failure values
    #[inline]
    pub fn is_failure(&self) -> bool {
        matches!(self, Instruction::Invalid | Instruction::Bad { .. })
    }

    /// Sort key: opcode byte first, then a marker separating `Bad` from
    /// the well-formed instruction of the same opcode, then the operand
    /// fields in declaration order (for `Bad`, its two counts).
    fn sort_key(&self) -> (u8, bool, [u64; 3]) {
        let (bad, fields) = match *self {
            Instruction::Invalid
            | Instruction::NoOp
            | Instruction::Pop
            | Instruction::Print
            | Instruction::Crash => (false, [0, 0, 0]),

            Instruction::Push { source } => (false, [source.0 as u64, 0, 0]),
            Instruction::Emit { exception_ptr } => (false, [exception_ptr.0 as u64, 0, 0]),
            Instruction::Err { message_ptr } => (false, [message_ptr.0 as u64, 0, 0]),

            Instruction::Load { target, source_ptr } => {
                (false, [target.0 as u64, source_ptr.0 as u64, 0])
            }
            Instruction::Store { target_ptr, source } => {
                (false, [target_ptr.0 as u64, source.0 as u64, 0])
            }

            Instruction::Jal { target } => (false, [target.0, 0, 0]),

            Instruction::Jnn { target, subject } | Instruction::Jnz { target, subject } => {
                (false, [target.0, subject.0 as u64, 0])
            }

            Instruction::Lneg { result, subject }
            | Instruction::Numneg { result, subject }
            | Instruction::Inc { result, subject }
            | Instruction::Dec { result, subject }
            | Instruction::Bwneg { result, subject } => {
                (false, [result.0, subject.0 as u64, 0])
            }

            Instruction::And { result, a, b }
            | Instruction::Or { result, a, b }
            | Instruction::Xor { result, a, b } => {
                (false, [result.0 as u64, a.0 as u64, b.0 as u64])
            }
            Instruction::Add { sum, a, b } => (false, [sum.0 as u64, a.0 as u64, b.0 as u64]),
            Instruction::Sub {
                diff,
                minuend,
                subtrahend,
            } => (false, [diff.0 as u64, minuend.0 as u64, subtrahend.0 as u64]),
            Instruction::Mul {
                product,
                multiplicand,
                multiplier,
            } => (
                false,
                [product.0 as u64, multiplicand.0 as u64, multiplier.0 as u64],
            ),
            Instruction::Div {
                quotient,
                dividend,
                divisor,
            } => (false, [quotient.0 as u64, dividend.0 as u64, divisor.0 as u64]),
            Instruction::Mod {
                remainder,
                dividend,
                divisor,
            } => (
                false,
                [remainder.0 as u64, dividend.0 as u64, divisor.0 as u64],
            ),
            Instruction::Shl {
                result,
                subject,
                shift,
            }
            | Instruction::Shr {
                result,
                subject,
                shift,
            }
            | Instruction::Ushr {
                result,
                subject,
                shift,
            } => (false, [result.0 as u64, subject.0 as u64, shift.0 as u64]),

            Instruction::Trap {
                exception_type,
                handler,
            } => (false, [exception_type.0, handler.0, 0]),

            Instruction::Bad {
                expected, found, ..
            } => (true, [expected as u64, found as u64, 0]),
        };
        (self.opcode().to_u8(), bad, fields)
    }
}

impl PartialOrd for Instruction {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Instruction {
    fn cmp(&self, other: &Self) -> Ordering {
        self.sort_key().cmp(&other.sort_key())
    }
}
