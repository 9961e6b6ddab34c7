//! Main assembler logic.

use crate::encoder::encode_into;
use crate::error::Result;
use crate::parser::parse_line;
use svm_spec::Program;

/// Assemble source text into a byte program.
///
/// One instruction per line; blank lines and comment lines (`#` or `;`)
/// are skipped. Errors carry 1-based line numbers.
pub fn assemble(source: &str) -> Result<Program> {
    let mut code = Vec::new();

    for (index, line) in source.lines().enumerate() {
        let line_no = index + 1;
        let text = line.trim();

        // Skip empty lines and comments
        if text.is_empty() || text.starts_with(';') || text.starts_with('#') {
            continue;
        }

        let instruction = parse_line(text, line_no)?;
        encode_into(&instruction, &mut code);
    }

    Ok(Program::from_bytes(code))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_assemble_simple() {
        let source = r#"
            ; stack shuffle
            push 7
            pop
            nop
        "#;

        let program = assemble(source).unwrap();
        assert_eq!(program.as_bytes(), &[0x08, 0x07, 0x00, 0x09, 0x01]);
    }

    #[test]
    fn test_assemble_empty_source() {
        let program = assemble("").unwrap();
        assert!(program.is_empty());
    }

    #[test]
    fn test_assemble_error_carries_line_number() {
        let source = "nop\nbogus 1\n";
        let err = assemble(source).unwrap_err();
        assert!(err.to_string().contains("line 2"));
    }
}
