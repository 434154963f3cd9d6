//! # Atomic File Writes

use std::{
    fs::{self, File},
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};

use crate::errors::{MTResult, MergetokError};

fn temp_path(path: &Path) -> PathBuf {
    let name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();
    path.with_file_name(format!(".{name}.{}.tmp", std::process::id()))
}

/// Write a file by way of a sibling temporary file renamed into place.
///
/// If `write` fails, or the file cannot be written, the temporary file is
/// removed and `path` is left as it was.
///
/// ## Arguments
/// * `path` - the destination path.
/// * `write` - writes the complete contents.
pub fn write_atomic<P, F>(
    path: P,
    write: F,
) -> MTResult<()>
where
    P: AsRef<Path>,
    F: FnOnce(&mut BufWriter<File>) -> MTResult<()>,
{
    let path = path.as_ref();
    let tmp = temp_path(path);

    let result = File::create(&tmp)
        .map_err(|e| MergetokError::file_access(path, e))
        .and_then(|file| {
            let mut writer = BufWriter::new(file);
            write(&mut writer)?;
            writer
                .flush()
                .map_err(|e| MergetokError::file_access(path, e))
        })
        .and_then(|()| fs::rename(&tmp, path).map_err(|e| MergetokError::file_access(path, e)));

    if result.is_err() {
        let _ = fs::remove_file(&tmp);
    }
    result
}
