//! Instruction encoding to SVM wire bytes.
//!
//! The exact inverse of the decoder in svm-disassembler: one opcode byte
//! followed by the operand fields in declaration order, little-endian.
//! `decode(encode(x)) == x` holds for every representable instruction.
//!
//! `Invalid` encodes as the reserved byte `0x00`. `Bad` has no wire form
//! of its own (it only arises from decoding a truncated program) and
//! encodes as its bare opcode byte.

use svm_spec::encoding::{push_program_addr, push_stack_addr, push_symbol_addr};
use svm_spec::Instruction;

/// Encode an instruction into a fresh byte vector
pub fn encode(instr: &Instruction) -> Vec<u8> {
    let mut out = Vec::with_capacity(instr.wire_len());
    encode_into(instr, &mut out);
    out
}

/// Append an instruction's wire form to `out`
pub fn encode_into(instr: &Instruction, out: &mut Vec<u8>) {
    out.push(instr.opcode().to_u8());

    match *instr {
        Instruction::Invalid
        | Instruction::NoOp
        | Instruction::Pop
        | Instruction::Print
        | Instruction::Crash
        | Instruction::Bad { .. } => {}

        Instruction::Push { source } => push_stack_addr(out, source),
        Instruction::Emit { exception_ptr } => push_stack_addr(out, exception_ptr),
        Instruction::Err { message_ptr } => push_stack_addr(out, message_ptr),

        Instruction::Load { target, source_ptr } => {
            push_stack_addr(out, target);
            push_stack_addr(out, source_ptr);
        }
        Instruction::Store { target_ptr, source } => {
            push_stack_addr(out, target_ptr);
            push_stack_addr(out, source);
        }

        Instruction::Jal { target } => push_program_addr(out, target),

        Instruction::Jnn { target, subject } | Instruction::Jnz { target, subject } => {
            push_program_addr(out, target);
            push_stack_addr(out, subject);
        }

        Instruction::Lneg { result, subject }
        | Instruction::Numneg { result, subject }
        | Instruction::Inc { result, subject }
        | Instruction::Dec { result, subject }
        | Instruction::Bwneg { result, subject } => {
            push_program_addr(out, result);
            push_stack_addr(out, subject);
        }

        Instruction::And { result, a, b }
        | Instruction::Or { result, a, b }
        | Instruction::Xor { result, a, b } => {
            push_stack_addr(out, result);
            push_stack_addr(out, a);
            push_stack_addr(out, b);
        }
        Instruction::Add { sum, a, b } => {
            push_stack_addr(out, sum);
            push_stack_addr(out, a);
            push_stack_addr(out, b);
        }
        Instruction::Sub {
            diff,
            minuend,
            subtrahend,
        } => {
            push_stack_addr(out, diff);
            push_stack_addr(out, minuend);
            push_stack_addr(out, subtrahend);
        }
        Instruction::Mul {
            product,
            multiplicand,
            multiplier,
        } => {
            push_stack_addr(out, product);
            push_stack_addr(out, multiplicand);
            push_stack_addr(out, multiplier);
        }
        Instruction::Div {
            quotient,
            dividend,
            divisor,
        } => {
            push_stack_addr(out, quotient);
            push_stack_addr(out, dividend);
            push_stack_addr(out, divisor);
        }
        Instruction::Mod {
            remainder,
            dividend,
            divisor,
        } => {
            push_stack_addr(out, remainder);
            push_stack_addr(out, dividend);
            push_stack_addr(out, divisor);
        }
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
        } => {
            push_stack_addr(out, result);
            push_stack_addr(out, subject);
            push_stack_addr(out, shift);
        }

        Instruction::Trap {
            exception_type,
            handler,
        } => {
            push_symbol_addr(out, exception_type);
            push_program_addr(out, handler);
        }
    }
}
