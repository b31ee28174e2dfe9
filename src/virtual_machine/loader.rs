//! Program file parsing.
//!
//! A program is a text file with one byte per line written as a binary
//! literal, e.g. `10000010`. Everything after `#` is a comment; lines that are
//! empty after stripping comments and whitespace are skipped.

use crate::virtual_machine::errors::VMError;
use std::fmt::Write;
use std::fs;
use std::path::Path;

const COMMENT_CHAR: char = '#';

/// Parses program text into bytes, in file order.
pub fn parse_program(source: &str) -> Result<Vec<u8>, VMError> {
    let mut program = Vec::new();
    for (line_no, line) in source.lines().enumerate() {
        let text = line.split(COMMENT_CHAR).next().unwrap_or("").trim();
        if text.is_empty() {
            continue;
        }
        program.push(parse_binary_literal(line_no + 1, text)?);
    }
    Ok(program)
}

/// Parses a base-2 literal that fits in a byte.
fn parse_binary_literal(line: usize, token: &str) -> Result<u8, VMError> {
    let invalid = || VMError::InvalidLiteral {
        line,
        token: token.to_string(),
    };
    if !token.bytes().all(|b| b == b'0' || b == b'1') {
        return Err(invalid());
    }
    u8::from_str_radix(token, 2).map_err(|_| invalid())
}

/// Reads a program file as text.
pub fn read_source(path: &Path) -> Result<String, VMError> {
    fs::read_to_string(path).map_err(|e| VMError::Io {
        path: path.display().to_string(),
        reason: e.to_string(),
    })
}

/// Reads and parses a program file.
///
/// Errors are returned without being logged; callers holding the source can
/// format them with [`render_diagnostic`].
pub fn load_file(path: &Path) -> Result<Vec<u8>, VMError> {
    parse_program(&read_source(path)?)
}

/// Formats a compiler-style diagnostic pointing at the bad literal.
///
/// Errors without a source location render as a single line.
pub fn render_diagnostic(file: &str, source: &str, err: &VMError) -> String {
    let VMError::InvalidLiteral { line, token } = err else {
        return format!("error: {err}");
    };

    let raw_line = source
        .lines()
        .nth(line.saturating_sub(1))
        .unwrap_or("")
        .trim_end_matches('\r');
    let column = raw_line.find(token.as_str()).map_or(1, |i| i + 1);

    let mut diag = String::new();
    let _ = writeln!(diag, "error: {err}");
    let _ = writeln!(diag, " --> {file}:{line}:{column}");
    let _ = writeln!(diag, "  |");
    let _ = writeln!(diag, "{:>4} | {}", line, raw_line);
    let _ = write!(
        diag,
        "  | {}{}",
        " ".repeat(column - 1),
        "^".repeat(token.len().max(1))
    );
    diag
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn skips_comments_and_blank_lines() {
        let source = "# comment\n\n10000010\n00001000\n00000011\n00000001\n";
        assert_eq!(parse_program(source).unwrap(), vec![0x82, 0x08, 0x03, 0x01]);
    }

    #[test]
    fn inline_comments_and_whitespace() {
        let source = "  10000010   # LDI R0,8\n\t00000000\r\n00001000 #imm\n   # only a comment\n";
        assert_eq!(parse_program(source).unwrap(), vec![0x82, 0x00, 0x08]);
    }

    #[test]
    fn empty_source() {
        assert!(parse_program("").unwrap().is_empty());
        assert!(parse_program("# nothing\n\n   \n").unwrap().is_empty());
    }

    #[test]
    fn short_literals_accepted() {
        assert_eq!(parse_program("1\n101").unwrap(), vec![1, 5]);
    }

    #[test]
    fn non_binary_token() {
        assert_eq!(
            parse_program("10000010\n10000012\n"),
            Err(VMError::InvalidLiteral {
                line: 2,
                token: "10000012".into()
            })
        );
        assert!(matches!(
            parse_program("LDI\n"),
            Err(VMError::InvalidLiteral { line: 1, .. })
        ));
        assert!(matches!(
            parse_program("1000 0010\n"),
            Err(VMError::InvalidLiteral { line: 1, .. })
        ));
        assert!(matches!(
            parse_program("+1\n"),
            Err(VMError::InvalidLiteral { line: 1, .. })
        ));
    }

    #[test]
    fn literal_wider_than_a_byte() {
        assert!(matches!(
            parse_program("100000000\n"),
            Err(VMError::InvalidLiteral { line: 1, .. })
        ));
    }

    #[test]
    fn missing_file() {
        let err = load_file(Path::new("/definitely/not/here.ls8")).unwrap_err();
        assert!(matches!(err, VMError::Io { ref path, .. } if path == "/definitely/not/here.ls8"));
    }

    #[test]
    fn load_from_disk() {
        let path = std::env::temp_dir().join(format!("ls8-loader-{}.ls8", std::process::id()));
        fs::write(&path, "10000010 # LDI\n00000000\n00001000\n00000001\n").unwrap();
        let program = load_file(&path).unwrap();
        fs::remove_file(&path).unwrap();
        assert_eq!(program, vec![0x82, 0x00, 0x08, 0x01]);
    }

    #[test]
    fn bad_literal_on_disk() {
        let path = std::env::temp_dir().join(format!("ls8-bad-{}.ls8", std::process::id()));
        fs::write(&path, "10000010\n  1002 # oops\n").unwrap();
        let source = read_source(&path).unwrap();
        let err = load_file(&path).unwrap_err();
        fs::remove_file(&path).unwrap();
        assert_eq!(
            err,
            VMError::InvalidLiteral {
                line: 2,
                token: "1002".into()
            }
        );
        assert_eq!(parse_program(&source).unwrap_err(), err);
        assert!(render_diagnostic("bad.ls8", &source, &err).contains(" --> bad.ls8:2:3"));
    }

    #[test]
    fn diagnostic_points_at_token() {
        let source = "10000010\n  1002 # oops\n";
        let err = parse_program(source).unwrap_err();
        assert_eq!(
            render_diagnostic("prog.ls8", source, &err),
            "error: line 2: invalid binary literal '1002'\n --> prog.ls8:2:3\n  |\n   2 |   1002 # oops\n  |   ^^^^"
        );
    }

    #[test]
    fn diagnostic_without_location() {
        let err = VMError::ProgramTooLarge {
            len: 300,
            capacity: 256,
        };
        assert_eq!(
            render_diagnostic("prog.ls8", "", &err),
            "error: program is 300 bytes but memory holds 256"
        );
    }
}
