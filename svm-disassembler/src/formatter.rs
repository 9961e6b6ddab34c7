//! Instruction formatting to assembly text.

use svm_spec::Instruction;

/// Format an instruction as assembly text: the mnemonic followed by its
/// operands in declaration order, comma-separated, in decimal.
///
/// The two decoder failure values render as commented diagnostics so a
/// listing stays one-line-per-instruction.
pub fn format(instr: &Instruction) -> String {
    match instr {
        Instruction::Invalid => "; invalid opcode".to_string(),
        Instruction::Bad {
            opcode,
            expected,
            found,
        } => format!(
            "; bad {}: expected {} operands, found {}",
            opcode, expected, found
        ),

        // ========== Nullary ==========
        Instruction::NoOp => "nop".to_string(),
        Instruction::Pop => "pop".to_string(),
        Instruction::Print => "print".to_string(),
        Instruction::Crash => "crash".to_string(),

        // ========== Memory ==========
        Instruction::Load { target, source_ptr } => {
            format!("load {}, {}", target, source_ptr)
        }
        Instruction::Store { target_ptr, source } => {
            format!("store {}, {}", target_ptr, source)
        }

        // ========== Stack ==========
        Instruction::Push { source } => format!("push {}", source),

        // ========== Branch ==========
        Instruction::Jal { target } => format!("jal {}", target),
        Instruction::Jnn { target, subject } => format!("jnn {}, {}", target, subject),
        Instruction::Jnz { target, subject } => format!("jnz {}, {}", target, subject),

        // ========== Unary ==========
        Instruction::Lneg { result, subject } => format!("lneg {}, {}", result, subject),
        Instruction::Numneg { result, subject } => format!("numneg {}, {}", result, subject),
        Instruction::Inc { result, subject } => format!("inc {}, {}", result, subject),
        Instruction::Dec { result, subject } => format!("dec {}, {}", result, subject),
        Instruction::Bwneg { result, subject } => format!("bwneg {}, {}", result, subject),

        // ========== Binary ==========
        Instruction::And { result, a, b } => format!("and {}, {}, {}", result, a, b),
        Instruction::Or { result, a, b } => format!("or {}, {}, {}", result, a, b),
        Instruction::Xor { result, a, b } => format!("xor {}, {}, {}", result, a, b),
        Instruction::Add { sum, a, b } => format!("add {}, {}, {}", sum, a, b),
        Instruction::Sub {
            diff,
            minuend,
            subtrahend,
        } => format!("sub {}, {}, {}", diff, minuend, subtrahend),
        Instruction::Mul {
            product,
            multiplicand,
            multiplier,
        } => format!("mul {}, {}, {}", product, multiplicand, multiplier),
        Instruction::Div {
            quotient,
            dividend,
            divisor,
        } => format!("div {}, {}, {}", quotient, dividend, divisor),
        Instruction::Mod {
            remainder,
            dividend,
            divisor,
        } => format!("mod {}, {}, {}", remainder, dividend, divisor),
        Instruction::Shl {
            result,
            subject,
            shift,
        } => format!("shl {}, {}, {}", result, subject, shift),
        Instruction::Shr {
            result,
            subject,
            shift,
        } => format!("shr {}, {}, {}", result, subject, shift),
        Instruction::Ushr {
            result,
            subject,
            shift,
        } => format!("ushr {}, {}, {}", result, subject, shift),

        // ========== Trap ==========
        Instruction::Trap {
            exception_type,
            handler,
        } => format!("trap {}, {}", exception_type, handler),
        Instruction::Emit { exception_ptr } => format!("emit {}", exception_ptr),

        // ========== Diagnostics ==========
        Instruction::Err { message_ptr } => format!("err {}", message_ptr),
    }
}
