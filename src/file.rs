//! Filesystem side of loading: probing the target path, listing a directory,
//! and reading each file's contents.
//!
//! # Probing
//!
//! [`probe`] runs once, when the loader is built, and decides whether the target
//! is a single file or a directory. Anything else (missing path, socket, broken
//! symlink) is [`EnvfigError::NotFound`].
//!
//! # Reading
//!
//! [`read_sources`] returns one [`SourceFile`] per file to load:
//!
//! - [`SourceKind::File`]: just the target.
//! - [`SourceKind::Directory`]: every immediate entry, in listing order. Entry
//!   names are joined verbatim onto the directory path. Subdirectories are not
//!   descended into; like any other entry they must carry a recognized extension
//!   and be readable, or the whole batch fails.
//!
//! The format is checked before a file is opened, so an unsupported extension is
//! reported as such even if the file could not be read. No decoding happens here;
//! see [`resolve`](crate::resolve).

use std::fs;
use std::path::{Path, PathBuf};

use crate::codec;
use crate::error::EnvfigError;
use crate::types::{ConfigFormat, SourceKind};

/// A config file read from disk, not yet decoded.
#[derive(Debug, Clone, PartialEq)]
pub struct SourceFile {
    pub path: PathBuf,
    pub format: ConfigFormat,
    pub content: String,
}

/// Decide whether `path` is a file or a directory.
pub fn probe(path: &Path) -> Result<SourceKind, EnvfigError> {
    let not_found = || EnvfigError::NotFound {
        path: path.to_path_buf(),
    };
    let meta = fs::metadata(path).map_err(|_| not_found())?;

    if meta.is_file() {
        Ok(SourceKind::File)
    } else if meta.is_dir() {
        Ok(SourceKind::Directory)
    } else {
        Err(not_found())
    }
}

/// List the immediate entries of `dir` as `{dir}/{name}` paths.
pub fn list_entries(dir: &Path) -> Result<Vec<PathBuf>, EnvfigError> {
    let io_err = |source| EnvfigError::Io {
        path: dir.to_path_buf(),
        source,
    };

    let mut paths = Vec::new();
    for entry in fs::read_dir(dir).map_err(io_err)? {
        let entry = entry.map_err(io_err)?;
        paths.push(dir.join(entry.file_name()));
    }
    Ok(paths)
}

/// Check the format of `path` and read it.
pub fn read_source(path: &Path) -> Result<SourceFile, EnvfigError> {
    let format = codec::detect_format(path)?;
    let content = fs::read_to_string(path).map_err(|source| EnvfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(SourceFile {
        path: path.to_path_buf(),
        format,
        content,
    })
}

/// Read every file the target resolves to. The first failure aborts the batch.
pub fn read_sources(target: &Path, kind: SourceKind) -> Result<Vec<SourceFile>, EnvfigError> {
    match kind {
        SourceKind::File => Ok(vec![read_source(target)?]),
        SourceKind::Directory => {
            let entries = list_entries(target)?;
            tracing::debug!(dir = %target.display(), count = entries.len(), "Listed config directory");
            entries.iter().map(|p| read_source(p)).collect()
        }
    }
}
