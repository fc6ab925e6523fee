use std::path::Path;
use std::path::PathBuf;
use thiserror::Error;

/// Reads a schema file as UTF-8 text.
pub(crate) fn read_content(file_path: &Path) -> Result<String, ReadContentError> {
    if !file_path.is_file() {
        return Err(ReadContentError::PathIsNotAFile(file_path.to_path_buf()));
    }

    log::trace!("Reading schema file {file_path:?}.");
    std::fs::read_to_string(file_path).map_err(|err| ReadContentError::Io {
        file_path: file_path.to_path_buf(),
        err,
    })
}

#[derive(Debug, Error)]
pub enum ReadContentError {
    /// Covers both I/O failures and content that isn't valid UTF-8
    /// ([`std::io::ErrorKind::InvalidData`]).
    #[error("Failed to read schema file {file_path:?}")]
    Io {
        file_path: PathBuf,
        #[source]
        err: std::io::Error,
    },

    #[error("Schema path {0:?} is not a file")]
    PathIsNotAFile(PathBuf),
}
impl std::cmp::PartialEq for ReadContentError {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (
                Self::Io { file_path: path1, err: err1 },
                Self::Io { file_path: path2, err: err2 },
            ) => path1 == path2 && err1.kind() == err2.kind(),
            (Self::PathIsNotAFile(path1), Self::PathIsNotAFile(path2)) => path1 == path2,
            _ => false,
        }
    }
}
