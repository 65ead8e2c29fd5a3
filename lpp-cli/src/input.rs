//! Payload input: argument, file, or stdin

use crate::error::{CliError, Result};
use std::io::Read;
use std::path::{Path, PathBuf};

/// Read the hex payload from the first available source and parse it.
///
/// Precedence: inline argument, then `file`, then `stdin`.
pub fn read_payload<R: Read>(inline: Option<&str>, file: Option<&Path>, mut stdin: R) -> Result<Vec<u8>> {
    let text = match (inline, file) {
        (Some(hex), _) => hex.to_string(),
        (None, Some(path)) => std::fs::read_to_string(path).map_err(|source| CliError::Io {
            path: path.to_path_buf(),
            source,
        })?,
        (None, None) => {
            let mut buf = String::new();
            stdin
                .read_to_string(&mut buf)
                .map_err(|source| CliError::Io {
                    path: PathBuf::from("<stdin>"),
                    source,
                })?;
            buf
        }
    };

    Ok(lpp_codec::parse_hex(&text)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_inline_wins() {
        let bytes = read_payload(Some("070101"), None, std::io::empty()).unwrap();
        assert_eq!(bytes, vec![0x07, 0x01, 0x01]);
    }

    #[test]
    fn test_file_input() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "03 67 FF 9C").unwrap();

        let bytes = read_payload(None, Some(file.path()), std::io::empty()).unwrap();
        assert_eq!(bytes, vec![0x03, 0x67, 0xFF, 0x9C]);
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.hex");
        let err = read_payload(None, Some(&path), std::io::empty()).unwrap_err();
        assert!(matches!(err, CliError::Io { .. }));
    }

    #[test]
    fn test_stdin_input() {
        let stdin = "0x0587ff8000\n".as_bytes();
        let bytes = read_payload(None, None, stdin).unwrap();
        assert_eq!(bytes, vec![0x05, 0x87, 0xFF, 0x80, 0x00]);
    }

    #[test]
    fn test_bad_hex() {
        let err = read_payload(Some("zz"), None, std::io::empty()).unwrap_err();
        assert!(matches!(err, CliError::Decode(lpp_codec::LppError::InvalidHex(_))));
    }
}
