//! Cross-crate round-trip tests
//!
//! Drives the encoder in svm-assembler against the decoder in this crate:
//! every representable instruction must survive encode → decode
//! byte-exactly, every reserved byte must decode to Invalid in one byte,
//! and every truncation of a multi-operand instruction must decode to Bad
//! with an accurate operand count.

use svm_assembler::{assemble, encode, parse_instruction};
use svm_disassembler::{decode_one, format, ProgramStream};
use svm_spec::{Instruction, OpCode, ProgramAddr, StackAddr, SymbolAddr};

/// One representative instruction per opcode, operands chosen so every
/// field is distinct and multi-byte values exercise the LE paths.
fn samples() -> Vec<Instruction> {
    let s1 = StackAddr(0x0102);
    let s2 = StackAddr(0x0304);
    let s3 = StackAddr(0x0506);
    let p = ProgramAddr(0x0102_0304_0506_0708);
    let sym = SymbolAddr(0x0A0B_0C0D_0E0F_1011);

    vec![
        Instruction::NoOp,
        Instruction::Load { target: s1, source_ptr: s2 },
        Instruction::Store { target_ptr: s1, source: s2 },
        Instruction::Push { source: s1 },
        Instruction::Pop,
        Instruction::Jal { target: p },
        Instruction::Jnn { target: p, subject: s1 },
        Instruction::Jnz { target: p, subject: s1 },
        Instruction::Lneg { result: p, subject: s1 },
        Instruction::Numneg { result: p, subject: s1 },
        Instruction::Inc { result: p, subject: s1 },
        Instruction::Dec { result: p, subject: s1 },
        Instruction::Bwneg { result: p, subject: s1 },
        Instruction::And { result: s1, a: s2, b: s3 },
        Instruction::Or { result: s1, a: s2, b: s3 },
        Instruction::Xor { result: s1, a: s2, b: s3 },
        Instruction::Add { sum: s1, a: s2, b: s3 },
        Instruction::Sub { diff: s1, minuend: s2, subtrahend: s3 },
        Instruction::Mul { product: s1, multiplicand: s2, multiplier: s3 },
        Instruction::Div { quotient: s1, dividend: s2, divisor: s3 },
        Instruction::Mod { remainder: s1, dividend: s2, divisor: s3 },
        Instruction::Shl { result: s1, subject: s2, shift: s3 },
        Instruction::Shr { result: s1, subject: s2, shift: s3 },
        Instruction::Ushr { result: s1, subject: s2, shift: s3 },
        Instruction::Trap { exception_type: sym, handler: p },
        Instruction::Emit { exception_ptr: s1 },
        Instruction::Print,
        Instruction::Err { message_ptr: s1 },
        Instruction::Crash,
    ]
}

// ============================================================================
// Encode / Decode Round Trip
// ============================================================================

#[test]
fn test_every_opcode_has_a_sample() {
    let sampled: Vec<OpCode> = samples().iter().map(Instruction::opcode).collect();
    for op in OpCode::ALL {
        assert!(sampled.contains(&op), "no sample for {}", op);
    }
}

#[test]
fn test_decode_encode_round_trip() {
    for instr in samples() {
        assert!(!instr.is_failure());
        let bytes = encode(&instr);
        assert_eq!(bytes.len(), instr.wire_len(), "{:?}", instr);

        let (decoded, consumed) = decode_one(&bytes);
        assert_eq!(decoded, instr);
        assert_eq!(consumed, bytes.len());
    }
}

#[test]
fn test_round_trip_survives_trailing_bytes() {
    // The decoder must consume exactly one instruction, not the buffer.
    for instr in samples() {
        let mut bytes = encode(&instr);
        let expected_len = bytes.len();
        bytes.extend_from_slice(&[0x01, 0x09]); // nop, pop

        let (decoded, consumed) = decode_one(&bytes);
        assert_eq!(decoded, instr);
        assert_eq!(consumed, expected_len);
    }
}

// ============================================================================
// Reserved Bytes
// ============================================================================

#[test]
fn test_every_reserved_byte_decodes_invalid_in_one_byte() {
    let known: Vec<u8> = OpCode::ALL.iter().map(|op| op.to_u8()).collect();
    for byte in 0u8..=255 {
        if known.contains(&byte) {
            continue;
        }
        let (instr, consumed) = decode_one(&[byte, 0xAA, 0xBB]);
        assert_eq!(instr, Instruction::Invalid, "byte {:#04x}", byte);
        assert_eq!(consumed, 1);
    }
}

// ============================================================================
// Truncation Grid
// ============================================================================

#[test]
fn test_every_truncation_decodes_bad() {
    for instr in samples() {
        let bytes = encode(&instr);
        let opcode = instr.opcode();
        if opcode.operand_count() == 0 {
            continue;
        }

        // Every proper prefix that still contains the opcode byte.
        for cut in 1..bytes.len() {
            let (decoded, consumed) = decode_one(&bytes[..cut]);
            match decoded {
                Instruction::Bad {
                    opcode: bad_op,
                    expected,
                    found,
                } => {
                    assert_eq!(bad_op, opcode);
                    assert_eq!(expected, opcode.operand_count());
                    assert!(found < expected, "{}: found {} at cut {}", opcode, found, cut);
                    assert!(consumed <= cut);
                }
                other => panic!("{} cut at {}: expected Bad, got {:?}", opcode, cut, other),
            }
        }
    }
}

// ============================================================================
// Assembly Text Round Trip
// ============================================================================

#[test]
fn test_format_parses_back() {
    for instr in samples() {
        let text = format(&instr);
        let reparsed = parse_instruction(&text).unwrap_or_else(|e| {
            panic!("formatted text {:?} failed to parse: {}", text, e)
        });
        assert_eq!(reparsed, instr);
    }
}

#[test]
fn test_assemble_then_stream_decodes_in_order() {
    let source = r#"
        push 7
        load 2, 5
        jnz 16, 3
        crash
    "#;

    let program = assemble(source).unwrap();
    let mut stream = ProgramStream::new(program);

    assert_eq!(
        stream.advance(),
        Instruction::Push {
            source: StackAddr(7)
        }
    );
    assert_eq!(
        stream.advance(),
        Instruction::Load {
            target: StackAddr(2),
            source_ptr: StackAddr(5)
        }
    );
    assert_eq!(
        stream.advance(),
        Instruction::Jnz {
            target: ProgramAddr(16),
            subject: StackAddr(3)
        }
    );
    assert_eq!(stream.advance(), Instruction::Crash);
    assert!(stream.empty());
}
