use std::fs::File;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use crate::error::{CatError, Result};

#[derive(Debug, Clone, Default)]
pub struct CollectOptions {
    pub verbose: u8,
}

/// Reads every source in order and returns their concatenated bytes.
///
/// An empty `files` list means standard input. The first failing file aborts
/// the whole collection and nothing read so far is returned.
///
/// # Errors
/// Returns the classified error of the first file that cannot be opened or read.
pub fn collect(files: &[PathBuf], opts: &CollectOptions) -> Result<Vec<u8>> {
    if files.is_empty() {
        let content = read_stdin()?;
        if opts.verbose > 1 {
            eprintln!("<stdin>: {} bytes", content.len());
        }
        return Ok(content);
    }

    let mut acc = Vec::new();
    for path in files {
        let n = read_file_into(path, &mut acc)?;
        if opts.verbose > 1 {
            eprintln!("{}: {} bytes", path.display(), n);
        }
    }
    Ok(acc)
}

/// Appends the full content of `path` to `out`, returning the number of bytes added.
///
/// # Errors
/// Returns `NotFound`, `PermissionDenied` or `Io` depending on the failure.
pub fn read_file_into(path: &Path, out: &mut Vec<u8>) -> Result<usize> {
    let classify = |e: io::Error| CatError::from_io(e, &path.display().to_string());
    let mut file = File::open(path).map_err(classify)?;
    let before = out.len();
    file.read_to_end(out).map_err(classify)?;
    Ok(out.len() - before)
}

/// Reads standard input until end-of-stream.
///
/// # Errors
/// Returns `Io` if reading stdin fails.
pub fn read_stdin() -> Result<Vec<u8>> {
    read_reader(io::stdin().lock())
}

pub fn read_reader<R: Read>(mut reader: R) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    reader.read_to_end(&mut buf)?;
    Ok(buf)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use tempfile::tempdir;

    #[test]
    fn concatenates_in_argument_order() {
        let dir = tempdir().unwrap();
        let a = dir.path().join("a.txt");
        let b = dir.path().join("b.txt");
        std::fs::write(&a, "alpha\n").unwrap();
        std::fs::write(&b, "beta\n").unwrap();

        let out = collect(&[b.clone(), a.clone(), b], &CollectOptions::default()).unwrap();
        assert_eq!(out, b"beta\nalpha\nbeta\n");
    }

    #[test]
    fn missing_file_short_circuits() {
        let dir = tempdir().unwrap();
        let a = dir.path().join("a.txt");
        std::fs::write(&a, "alpha\n").unwrap();
        let missing = dir.path().join("nope.txt");

        let err = collect(&[a, missing.clone()], &CollectOptions::default()).unwrap_err();
        match err {
            CatError::NotFound(name) => assert_eq!(name, missing.display().to_string()),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn directory_is_an_io_failure() {
        let dir = tempdir().unwrap();
        let err = collect(&[dir.path().to_path_buf()], &CollectOptions::default()).unwrap_err();
        assert!(matches!(err, CatError::Io(_)));
        assert!(err.to_string().starts_with("Unexpected IO error : "));
    }

    #[test]
    fn read_file_into_appends_and_reports_length() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("more.txt");
        std::fs::write(&path, "tail\n").unwrap();
        let mut out = b"head\n".to_vec();
        assert_eq!(read_file_into(&path, &mut out).unwrap(), 5);
        assert_eq!(out, b"head\ntail\n");
    }

    #[test]
    fn reader_is_drained() {
        let out = read_reader(Cursor::new(b"Hello from stdin!\nLine 2\n".to_vec())).unwrap();
        assert_eq!(out, b"Hello from stdin!\nLine 2\n");
    }
}
