//! Main disassembler logic.

use crate::formatter::format;
use crate::stream::ProgramStream;
use svm_spec::Program;

/// Disassemble a program into assembly text.
///
/// Every byte sequence disassembles: reserved opcodes and a truncated
/// tail are rendered as commented diagnostics in the listing.
pub fn disassemble(program: &Program) -> String {
    let mut output = String::new();

    output.push_str("; SVM disassembly\n");
    output.push_str(&format!("; Code size: {} bytes\n", program.len()));
    output.push('\n');

    let mut stream = ProgramStream::new(program.clone());

    while !stream.empty() {
        let offset = stream.program_counter();
        let instruction = stream.advance();
        let end = stream.program_counter().min(program.len());

        // Offset label
        output.push_str(&format!("0x{:08X}:  ", offset));

        // Raw bytes; a Bad tail covers everything that is left
        let raw: Vec<String> = program.code[offset..end]
            .iter()
            .map(|byte| format!("{:02X}", byte))
            .collect();
        output.push_str(&format!("{:<20}  ", raw.join(" ")));

        output.push_str(&format(&instruction));
        output.push('\n');
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_disassemble_simple() {
        // push 7 ; pop ; nop
        let program = Program::from_bytes(vec![0x08, 0x07, 0x00, 0x09, 0x01]);
        let listing = disassemble(&program);

        assert!(listing.contains("push 7"));
        assert!(listing.contains("pop"));
        assert!(listing.contains("nop"));
        assert!(listing.contains("0x00000000"));
        assert!(listing.contains("0x00000003"));
    }

    #[test]
    fn test_disassemble_empty() {
        let listing = disassemble(&Program::new());
        assert!(listing.contains("0 bytes"));
        assert!(!listing.contains("0x00000000:"));
    }

    #[test]
    fn test_disassemble_truncated_tail() {
        let program = Program::from_bytes(vec![0x01, 0x03, 0x02]);
        let listing = disassemble(&program);
        assert!(listing.contains("nop"));
        assert!(listing.contains("; bad load"));
    }
}
