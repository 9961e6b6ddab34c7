//! Single-instruction decoder for SVM bytecode.
//!
//! Decodes one instruction from the front of a byte slice and reports how
//! many bytes it consumed. Decoding is deterministic and byte-exact: this
//! is the inverse of the encoder in svm-assembler.
//!
//! ## Wire format
//!
//! ```text
//! [opcode:1][operand ...]
//! ```
//!
//! Operand fields follow the opcode in declaration order, little-endian:
//! `StackAddr` is 2 bytes, `ProgramAddr` and `SymbolAddr` are 8 bytes.
//!
//! Failure is expressed in the returned value, never as an `Err`:
//! - a reserved opcode byte yields `Invalid` with 1 byte consumed;
//! - a program that ends mid-operand yields `Bad { opcode, expected,
//!   found }`, where the counts are whole operands and the consumed bytes
//!   cover only the operands that were completely read.

use svm_spec::encoding::{read_program_addr, read_stack_addr, read_symbol_addr};
use svm_spec::{Instruction, OpCode, ProgramAddr, StackAddr, SymbolAddr};

/// Decode one instruction from the front of `program`.
///
/// Returns the decoded instruction and the number of bytes consumed. An
/// empty slice yields `Bad { Invalid, 0, 0 }` with nothing consumed.
pub fn decode_one(program: &[u8]) -> (Instruction, usize) {
    let Some(&opcode_byte) = program.first() else {
        return (
            Instruction::Bad {
                opcode: OpCode::Invalid,
                expected: 0,
                found: 0,
            },
            0,
        );
    };
    let opcode = OpCode::from_byte(opcode_byte);
    let rest = &program[1..];

    match opcode {
        OpCode::Invalid => (Instruction::Invalid, 1),

        // ========== Nullary ==========
        OpCode::NoOp => (Instruction::NoOp, 1),
        OpCode::Pop => (Instruction::Pop, 1),
        OpCode::Print => (Instruction::Print, 1),
        OpCode::Crash => (Instruction::Crash, 1),

        // ========== Single StackAddr ==========
        OpCode::Push => decode_stack(opcode, rest, |source| Instruction::Push { source }),
        OpCode::Emit => decode_stack(opcode, rest, |exception_ptr| Instruction::Emit {
            exception_ptr,
        }),
        OpCode::Err => decode_stack(opcode, rest, |message_ptr| Instruction::Err { message_ptr }),

        // ========== StackAddr pair ==========
        OpCode::Load => decode_stack_pair(opcode, rest, |target, source_ptr| Instruction::Load {
            target,
            source_ptr,
        }),
        OpCode::Store => decode_stack_pair(opcode, rest, |target_ptr, source| Instruction::Store {
            target_ptr,
            source,
        }),

        // ========== Single ProgramAddr ==========
        OpCode::Jal => decode_program(opcode, rest, |target| Instruction::Jal { target }),

        // ========== ProgramAddr + StackAddr ==========
        OpCode::Jnn => decode_program_stack(opcode, rest, |target, subject| Instruction::Jnn {
            target,
            subject,
        }),
        OpCode::Jnz => decode_program_stack(opcode, rest, |target, subject| Instruction::Jnz {
            target,
            subject,
        }),
        OpCode::Lneg => decode_program_stack(opcode, rest, |result, subject| Instruction::Lneg {
            result,
            subject,
        }),
        OpCode::Numneg => {
            decode_program_stack(opcode, rest, |result, subject| Instruction::Numneg {
                result,
                subject,
            })
        }
        OpCode::Inc => decode_program_stack(opcode, rest, |result, subject| Instruction::Inc {
            result,
            subject,
        }),
        OpCode::Dec => decode_program_stack(opcode, rest, |result, subject| Instruction::Dec {
            result,
            subject,
        }),
        OpCode::Bwneg => decode_program_stack(opcode, rest, |result, subject| Instruction::Bwneg {
            result,
            subject,
        }),

        // ========== StackAddr triple ==========
        OpCode::And => decode_stack_triple(opcode, rest, |result, a, b| Instruction::And {
            result,
            a,
            b,
        }),
        OpCode::Or => {
            decode_stack_triple(opcode, rest, |result, a, b| Instruction::Or { result, a, b })
        }
        OpCode::Xor => decode_stack_triple(opcode, rest, |result, a, b| Instruction::Xor {
            result,
            a,
            b,
        }),
        OpCode::Add => {
            decode_stack_triple(opcode, rest, |sum, a, b| Instruction::Add { sum, a, b })
        }
        OpCode::Sub => decode_stack_triple(opcode, rest, |diff, minuend, subtrahend| {
            Instruction::Sub {
                diff,
                minuend,
                subtrahend,
            }
        }),
        OpCode::Mul => decode_stack_triple(opcode, rest, |product, multiplicand, multiplier| {
            Instruction::Mul {
                product,
                multiplicand,
                multiplier,
            }
        }),
        OpCode::Div => decode_stack_triple(opcode, rest, |quotient, dividend, divisor| {
            Instruction::Div {
                quotient,
                dividend,
                divisor,
            }
        }),
        OpCode::Mod => decode_stack_triple(opcode, rest, |remainder, dividend, divisor| {
            Instruction::Mod {
                remainder,
                dividend,
                divisor,
            }
        }),
        OpCode::Shl => decode_stack_triple(opcode, rest, |result, subject, shift| {
            Instruction::Shl {
                result,
                subject,
                shift,
            }
        }),
        OpCode::Shr => decode_stack_triple(opcode, rest, |result, subject, shift| {
            Instruction::Shr {
                result,
                subject,
                shift,
            }
        }),
        OpCode::Ushr => decode_stack_triple(opcode, rest, |result, subject, shift| {
            Instruction::Ushr {
                result,
                subject,
                shift,
            }
        }),

        // ========== SymbolAddr + ProgramAddr ==========
        OpCode::Trap => {
            decode_symbol_program(opcode, rest, |exception_type, handler| Instruction::Trap {
                exception_type,
                handler,
            })
        }
    }
}

/// Truncation outcome for `opcode` after `found` complete operands
fn bad(opcode: OpCode, found: u8) -> Instruction {
    Instruction::Bad {
        opcode,
        expected: opcode.operand_count(),
        found,
    }
}

/// Decode a single-`StackAddr` instruction
fn decode_stack<F>(opcode: OpCode, rest: &[u8], constructor: F) -> (Instruction, usize)
where
    F: FnOnce(StackAddr) -> Instruction,
{
    match read_stack_addr(rest, 0) {
        Some(addr) => (constructor(addr), 3),
        None => (bad(opcode, 0), 1),
    }
}

/// Decode a `StackAddr`, `StackAddr` instruction
fn decode_stack_pair<F>(opcode: OpCode, rest: &[u8], constructor: F) -> (Instruction, usize)
where
    F: FnOnce(StackAddr, StackAddr) -> Instruction,
{
    let Some(first) = read_stack_addr(rest, 0) else {
        return (bad(opcode, 0), 1);
    };
    let Some(second) = read_stack_addr(rest, 2) else {
        return (bad(opcode, 1), 3);
    };
    (constructor(first, second), 5)
}

/// Decode a single-`ProgramAddr` instruction
fn decode_program<F>(opcode: OpCode, rest: &[u8], constructor: F) -> (Instruction, usize)
where
    F: FnOnce(ProgramAddr) -> Instruction,
{
    match read_program_addr(rest, 0) {
        Some(addr) => (constructor(addr), 9),
        None => (bad(opcode, 0), 1),
    }
}

/// Decode a `ProgramAddr`, `StackAddr` instruction
fn decode_program_stack<F>(opcode: OpCode, rest: &[u8], constructor: F) -> (Instruction, usize)
where
    F: FnOnce(ProgramAddr, StackAddr) -> Instruction,
{
    let Some(first) = read_program_addr(rest, 0) else {
        return (bad(opcode, 0), 1);
    };
    let Some(second) = read_stack_addr(rest, 8) else {
        return (bad(opcode, 1), 9);
    };
    (constructor(first, second), 11)
}

/// Decode a `StackAddr`, `StackAddr`, `StackAddr` instruction
fn decode_stack_triple<F>(opcode: OpCode, rest: &[u8], constructor: F) -> (Instruction, usize)
where
    F: FnOnce(StackAddr, StackAddr, StackAddr) -> Instruction,
{
    let Some(first) = read_stack_addr(rest, 0) else {
        return (bad(opcode, 0), 1);
    };
    let Some(second) = read_stack_addr(rest, 2) else {
        return (bad(opcode, 1), 3);
    };
    let Some(third) = read_stack_addr(rest, 4) else {
        return (bad(opcode, 2), 5);
    };
    (constructor(first, second, third), 7)
}

/// Decode a `SymbolAddr`, `ProgramAddr` instruction
fn decode_symbol_program<F>(opcode: OpCode, rest: &[u8], constructor: F) -> (Instruction, usize)
where
    F: FnOnce(SymbolAddr, ProgramAddr) -> Instruction,
{
    let Some(first) = read_symbol_addr(rest, 0) else {
        return (bad(opcode, 0), 1);
    };
    let Some(second) = read_program_addr(rest, 8) else {
        return (bad(opcode, 1), 9);
    };
    (constructor(first, second), 17)
}
