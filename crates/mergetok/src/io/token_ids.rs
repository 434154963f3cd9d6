//! # Token-Id Files
//!
//! Token ids are stored as whitespace-separated decimal integers.
//! Writers put them on one line, space-separated, with a trailing newline.

use std::{
    fs::File,
    io::{BufRead, BufReader, Write},
    path::Path,
};

use crate::{
    errors::{MTResult, MergetokError},
    io::write_atomic,
    types::TokenType,
};

/// Parse token ids from text.
///
/// ## Errors
/// * [`MergetokError::Parse`] naming the first entry that is not a
///   non-negative integer that fits `T`.
///
/// ```
/// use mergetok::io::parse_token_ids;
///
/// assert_eq!(parse_token_ids::<u32>("3 1\n4\t1 ").unwrap(), vec![3, 1, 4, 1]);
/// assert!(parse_token_ids::<u32>("3 -1").is_err());
/// ```
pub fn parse_token_ids<T: TokenType>(text: &str) -> MTResult<Vec<T>> {
    text.split_whitespace()
        .map(|entry| {
            T::from_str_radix(entry, 10).map_err(|_| {
                MergetokError::Parse(format!("invalid token id {entry:?}"))
            })
        })
        .collect()
}

/// Read token ids from a line stream.
pub fn read_token_ids<T, R>(reader: R) -> MTResult<Vec<T>>
where
    T: TokenType,
    R: BufRead,
{
    let mut ids = Vec::new();
    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        let parsed = parse_token_ids::<T>(&line).map_err(|e| match e {
            MergetokError::Parse(msg) => MergetokError::Parse(format!("line {}: {msg}", idx + 1)),
            e => e,
        })?;
        ids.extend(parsed);
    }
    Ok(ids)
}

/// Write token ids: space-separated, then a newline.
pub fn write_token_ids<T, W>(
    ids: &[T],
    writer: &mut W,
) -> MTResult<()>
where
    T: TokenType,
    W: Write,
{
    for (idx, id) in ids.iter().enumerate() {
        if idx > 0 {
            writer.write_all(b" ")?;
        }
        write!(writer, "{id}")?;
    }
    writer.write_all(b"\n")?;
    Ok(())
}

/// Load token ids from a file.
///
/// ## Arguments
/// * `path` - the token-id file path.
pub fn load_token_ids_path<T, P>(path: P) -> MTResult<Vec<T>>
where
    T: TokenType,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| MergetokError::file_access(path, e))?;
    read_token_ids(BufReader::new(file)).map_err(|e| match e {
        MergetokError::Io(source) => MergetokError::file_access(path, source),
        MergetokError::Parse(msg) => MergetokError::Parse(format!("{}: {msg}", path.display())),
        e => e,
    })
}

/// Save token ids to a file, atomically.
///
/// ## Arguments
/// * `ids` - the ids to save.
/// * `path` - the token-id file path.
pub fn save_token_ids_path<T, P>(
    ids: &[T],
    path: P,
) -> MTResult<()>
where
    T: TokenType,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    write_atomic(path, |writer| {
        write_token_ids(ids, writer).map_err(|e| match e {
            MergetokError::Io(source) => MergetokError::file_access(path, source),
            e => e,
        })
    })
}
