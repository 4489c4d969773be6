//! Line counting
//!
//! A line is a run of text ended by a line terminator, or the trailing
//! non-empty run before end of file. Terminators are `\n`, `\r\n` and a
//! lone `\r`, the same set text-mode readers split on. Nothing is
//! filtered: blank lines and comments count like any other line.

use std::path::Path;
use std::str::Utf8Error;

use crate::error::CountError;

/// Count the lines in `content`.
///
/// Fails if `content` is not valid UTF-8, since a qualifying file is
/// expected to be text.
pub fn count_lines(content: &[u8]) -> Result<usize, Utf8Error> {
    std::str::from_utf8(content)?;
    Ok(count_terminated(content))
}

/// Read `path` and count its lines.
///
/// The file is read in one call, so its handle is closed before this returns
/// on every path.
pub fn count_file_lines(path: &Path) -> Result<usize, CountError> {
    let content = std::fs::read(path).map_err(|source| CountError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    count_lines(&content).map_err(|source| CountError::Encoding {
        path: path.to_path_buf(),
        source,
    })
}

fn count_terminated(content: &[u8]) -> usize {
    let mut lines = 0;
    let mut bytes = content.iter().peekable();
    while let Some(&b) = bytes.next() {
        match b {
            b'\n' => lines += 1,
            b'\r' => {
                // \r\n is one terminator
                bytes.next_if_eq(&&b'\n');
                lines += 1;
            }
            _ => {}
        }
    }

    match content.last() {
        None | Some(b'\n') | Some(b'\r') => lines,
        Some(_) => lines + 1,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_empty_content() {
        assert_eq!(count_lines(b"").unwrap(), 0);
    }

    #[test]
    fn test_terminated_lines() {
        assert_eq!(count_lines(b"a\nb\nc\n").unwrap(), 3);
    }

    #[test]
    fn test_unterminated_last_line_counts() {
        assert_eq!(count_lines(b"a\nb\nc").unwrap(), 3);
        assert_eq!(count_lines(b"single").unwrap(), 1);
    }

    #[test]
    fn test_blank_lines_count() {
        assert_eq!(count_lines(b"\n\n\n").unwrap(), 3);
        assert_eq!(count_lines(b"int x;\n\n// comment\n").unwrap(), 3);
    }

    #[test]
    fn test_crlf_is_one_terminator() {
        assert_eq!(count_lines(b"a\r\nb\r\n").unwrap(), 2);
        assert_eq!(count_lines(b"a\r\nb").unwrap(), 2);
        assert_eq!(count_lines(b"\r\n\r\n").unwrap(), 2);
    }

    #[test]
    fn test_lone_carriage_return_terminates() {
        assert_eq!(count_lines(b"a\rb\rc").unwrap(), 3);
        assert_eq!(count_lines(b"a\r").unwrap(), 1);
        assert_eq!(count_lines(b"\r\r\n").unwrap(), 2);
    }

    #[test]
    fn test_invalid_utf8_is_rejected() {
        assert!(count_lines(&[0xFF, 0xFE, b'\n']).is_err());
    }

    #[test]
    fn test_multibyte_text() {
        let text = "// Hello 世界 🦀\nint main() {\n\treturn 0;\n}";
        assert_eq!(count_lines(text.as_bytes()).unwrap(), 4);
    }

    #[test]
    fn test_bom_does_not_change_count() {
        let mut content = vec![0xEF, 0xBB, 0xBF];
        content.extend_from_slice(b"int x;\n");
        assert_eq!(count_lines(&content).unwrap(), 1);
    }

    #[test]
    fn test_count_file_lines() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("main.c");
        fs::write(&path, "int main() {\n    return 0;\n}\n").unwrap();
        assert_eq!(count_file_lines(&path).unwrap(), 3);
    }

    #[test]
    fn test_count_file_lines_missing_file() {
        let err = count_file_lines(Path::new("/nonexistent/file.c")).unwrap_err();
        assert!(matches!(err, CountError::Read { .. }));
        assert_eq!(err.path(), Some(Path::new("/nonexistent/file.c")));
    }

    #[test]
    fn test_count_file_lines_invalid_utf8() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("binary.h");
        fs::write(&path, [0xFF, 0xFE, 0x00, 0x01]).unwrap();
        let err = count_file_lines(&path).unwrap_err();
        assert!(matches!(err, CountError::Encoding { .. }));
    }
}
