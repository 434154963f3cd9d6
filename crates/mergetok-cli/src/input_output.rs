use std::{fs, io::Write, path::Path};

use mergetok::{MTResult, MergetokError, io::write_atomic};

/// Read a UTF-8 text file.
pub fn read_text_path(path: &Path) -> MTResult<String> {
    fs::read_to_string(path).map_err(|e| MergetokError::file_access(path, e))
}

/// Write a text file, atomically.
pub fn write_text_path(
    path: &Path,
    text: &str,
) -> MTResult<()> {
    write_atomic(path, |writer| {
        writer
            .write_all(text.as_bytes())
            .map_err(|e| MergetokError::file_access(path, e))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_round_trip() {
        let dir = tempdir::TempDir::new("cli_text").unwrap();
        let path = dir.path().join("a.txt");

        write_text_path(&path, "héllo\n wörld").unwrap();
        assert_eq!(read_text_path(&path).unwrap(), "héllo\n wörld");

        assert!(matches!(
            read_text_path(&dir.path().join("absent.txt")),
            Err(MergetokError::FileAccess { .. })
        ));
    }
}
