//! Assembly parser for SVM.
//!
//! Parses one line of tokenized assembly into an [`Instruction`]. The
//! grammar is deliberately small: a mnemonic, then comma-separated
//! numeric operands in the declaration order of that opcode's operand
//! tuple. Mnemonic matching is case-insensitive.

use crate::error::{AssemblerError, Result};
use crate::lexer::{Lexer, Token};
use svm_spec::{Instruction, OpCode, ProgramAddr, StackAddr, SymbolAddr};

/// Parse a single instruction from one line of assembly text
pub fn parse_instruction(text: &str) -> Result<Instruction> {
    parse_line(text, 1)
}

/// Parse a single instruction, reporting errors against `line`
pub fn parse_line(text: &str, line: usize) -> Result<Instruction> {
    let mut lexer = Lexer::new(text);
    let tokens = lexer
        .tokenize()
        .map_err(|message| AssemblerError::SyntaxError { line, message })?;

    // Filter out newlines and EOF
    let tokens: Vec<Token> = tokens
        .into_iter()
        .filter(|t| !matches!(t, Token::Newline | Token::Eof))
        .collect();

    if tokens.is_empty() {
        return Err(AssemblerError::SyntaxError {
            line,
            message: "Empty instruction".to_string(),
        });
    }

    let mnemonic = match &tokens[0] {
        Token::Identifier(s) => s.as_str(),
        other => {
            return Err(AssemblerError::SyntaxError {
                line,
                message: format!("Expected instruction mnemonic, got {}", other),
            })
        }
    };

    let opcode = OpCode::from_mnemonic(mnemonic);
    if opcode == OpCode::Invalid {
        return Err(AssemblerError::UnknownMnemonic {
            line,
            mnemonic: mnemonic.to_string(),
        });
    }

    let operands = parse_operands(line, &tokens[1..])?;
    build_instruction(line, opcode, &operands)
}

/// Collect comma-separated numeric operands
fn parse_operands(line: usize, tokens: &[Token]) -> Result<Vec<u64>> {
    let mut values = Vec::new();
    let mut expect_value = true;

    for token in tokens {
        match token {
            Token::Number(n) if expect_value => {
                values.push(*n);
                expect_value = false;
            }
            Token::Comma if !expect_value => {
                expect_value = true;
            }
            other => {
                return Err(AssemblerError::SyntaxError {
                    line,
                    message: format!("Unexpected token {}", other),
                })
            }
        }
    }

    if expect_value && !values.is_empty() {
        return Err(AssemblerError::SyntaxError {
            line,
            message: "Trailing comma".to_string(),
        });
    }

    Ok(values)
}

/// Build the typed record for `opcode` from raw operand values
fn build_instruction(line: usize, opcode: OpCode, operands: &[u64]) -> Result<Instruction> {
    let expected = opcode.operand_count() as usize;
    if operands.len() != expected {
        return Err(AssemblerError::WrongOperandCount {
            line,
            mnemonic: opcode.mnemonic().unwrap_or("invalid"),
            expected,
            found: operands.len(),
        });
    }

    let stack = |value: u64| -> Result<StackAddr> {
        if value > u16::MAX as u64 {
            Err(AssemblerError::OperandRange {
                line,
                value,
                max: u16::MAX as u64,
            })
        } else {
            Ok(StackAddr(value as u16))
        }
    };

    let instruction = match opcode {
        OpCode::Invalid => unreachable!("rejected before operand parsing"),

        OpCode::NoOp => Instruction::NoOp,
        OpCode::Pop => Instruction::Pop,
        OpCode::Print => Instruction::Print,
        OpCode::Crash => Instruction::Crash,

        OpCode::Push => Instruction::Push {
            source: stack(operands[0])?,
        },
        OpCode::Emit => Instruction::Emit {
            exception_ptr: stack(operands[0])?,
        },
        OpCode::Err => Instruction::Err {
            message_ptr: stack(operands[0])?,
        },

        OpCode::Load => Instruction::Load {
            target: stack(operands[0])?,
            source_ptr: stack(operands[1])?,
        },
        OpCode::Store => Instruction::Store {
            target_ptr: stack(operands[0])?,
            source: stack(operands[1])?,
        },

        OpCode::Jal => Instruction::Jal {
            target: ProgramAddr(operands[0]),
        },
        OpCode::Jnn => Instruction::Jnn {
            target: ProgramAddr(operands[0]),
            subject: stack(operands[1])?,
        },
        OpCode::Jnz => Instruction::Jnz {
            target: ProgramAddr(operands[0]),
            subject: stack(operands[1])?,
        },

        OpCode::Lneg => Instruction::Lneg {
            result: ProgramAddr(operands[0]),
            subject: stack(operands[1])?,
        },
        OpCode::Numneg => Instruction::Numneg {
            result: ProgramAddr(operands[0]),
            subject: stack(operands[1])?,
        },
        OpCode::Inc => Instruction::Inc {
            result: ProgramAddr(operands[0]),
            subject: stack(operands[1])?,
        },
        OpCode::Dec => Instruction::Dec {
            result: ProgramAddr(operands[0]),
            subject: stack(operands[1])?,
        },
        OpCode::Bwneg => Instruction::Bwneg {
            result: ProgramAddr(operands[0]),
            subject: stack(operands[1])?,
        },

        OpCode::And => Instruction::And {
            result: stack(operands[0])?,
            a: stack(operands[1])?,
            b: stack(operands[2])?,
        },
        OpCode::Or => Instruction::Or {
            result: stack(operands[0])?,
            a: stack(operands[1])?,
            b: stack(operands[2])?,
        },
        OpCode::Xor => Instruction::Xor {
            result: stack(operands[0])?,
            a: stack(operands[1])?,
            b: stack(operands[2])?,
        },
        OpCode::Add => Instruction::Add {
            sum: stack(operands[0])?,
            a: stack(operands[1])?,
            b: stack(operands[2])?,
        },
        OpCode::Sub => Instruction::Sub {
            diff: stack(operands[0])?,
            minuend: stack(operands[1])?,
            subtrahend: stack(operands[2])?,
        },
        OpCode::Mul => Instruction::Mul {
            product: stack(operands[0])?,
            multiplicand: stack(operands[1])?,
            multiplier: stack(operands[2])?,
        },
        OpCode::Div => Instruction::Div {
            quotient: stack(operands[0])?,
            dividend: stack(operands[1])?,
            divisor: stack(operands[2])?,
        },
        OpCode::Mod => Instruction::Mod {
            remainder: stack(operands[0])?,
            dividend: stack(operands[1])?,
            divisor: stack(operands[2])?,
        },
        OpCode::Shl => Instruction::Shl {
            result: stack(operands[0])?,
            subject: stack(operands[1])?,
            shift: stack(operands[2])?,
        },
        OpCode::Shr => Instruction::Shr {
            result: stack(operands[0])?,
            subject: stack(operands[1])?,
            shift: stack(operands[2])?,
        },
        OpCode::Ushr => Instruction::Ushr {
            result: stack(operands[0])?,
            subject: stack(operands[1])?,
            shift: stack(operands[2])?,
        },

        OpCode::Trap => Instruction::Trap {
            exception_type: SymbolAddr(operands[0]),
            handler: ProgramAddr(operands[1]),
        },
    };

    Ok(instruction)
}
