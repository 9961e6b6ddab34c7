//! Tests for malformed input handling in the assembler
//!
//! Tests error handling for various invalid inputs.

use svm_assembler::{assemble, AssemblerError};

// ============================================================================
// Invalid Mnemonic Tests
// ============================================================================

#[test]
fn test_unknown_mnemonic() {
    let result = assemble("foobar 1, 2");
    assert!(result.is_err());

    if let Err(AssemblerError::UnknownMnemonic { mnemonic, .. }) = result {
        assert_eq!(mnemonic, "foobar");
    } else {
        panic!("Expected UnknownMnemonic error");
    }
}

#[test]
fn test_mnemonic_typo() {
    // typo: loda instead of load
    assert!(assemble("loda 2, 5").is_err());
}

#[test]
fn test_mnemonic_prefix_does_not_match() {
    assert!(assemble("lo 2, 5").is_err());
    assert!(assemble("loadd 2, 5").is_err());
}

#[test]
fn test_empty_lines_are_fine() {
    let source = r#"

        nop

    "#;
    assert!(assemble(source).is_ok());
}

// ============================================================================
// Operand Count Tests
// ============================================================================

#[test]
fn test_missing_operand() {
    let result = assemble("load 2");
    match result {
        Err(AssemblerError::WrongOperandCount {
            mnemonic,
            expected,
            found,
            ..
        }) => {
            assert_eq!(mnemonic, "load");
            assert_eq!(expected, 2);
            assert_eq!(found, 1);
        }
        other => panic!("Expected WrongOperandCount, got {:?}", other),
    }
}

#[test]
fn test_extra_operand() {
    assert!(assemble("add 0, 1, 2, 3").is_err());
}

#[test]
fn test_nullary_with_operands() {
    assert!(assemble("nop 1").is_err());
    assert!(assemble("crash 0").is_err());
}

// ============================================================================
// Operand Value Tests
// ============================================================================

#[test]
fn test_stack_operand_overflow() {
    let result = assemble("push 70000");
    match result {
        Err(AssemblerError::OperandRange { value, max, .. }) => {
            assert_eq!(value, 70000);
            assert_eq!(max, u16::MAX as u64);
        }
        other => panic!("Expected OperandRange, got {:?}", other),
    }
}

#[test]
fn test_stack_operand_at_limit_is_accepted() {
    assert!(assemble("push 65535").is_ok());
}

// ============================================================================
// Syntax Tests
// ============================================================================

#[test]
fn test_trailing_comma() {
    assert!(assemble("load 2, 5,").is_err());
}

#[test]
fn test_missing_comma() {
    assert!(assemble("load 2 5").is_err());
}

#[test]
fn test_unexpected_character() {
    assert!(assemble("push @3").is_err());
}

#[test]
fn test_operand_without_mnemonic() {
    assert!(assemble("42").is_err());
}

#[test]
fn test_error_reports_correct_line() {
    let source = "nop\nnop\npush 70000\n";
    let err = assemble(source).unwrap_err();
    match err {
        AssemblerError::OperandRange { line, .. } => assert_eq!(line, 3),
        other => panic!("Expected OperandRange, got {:?}", other),
    }
}
