use std::path::{Path, PathBuf};
use thiserror::Error;

/// The three failure families every zk operation reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Write,
    Config,
    Path,
}

impl ErrorKind {
    /// Process exit code for this kind. 2 is left to clap usage errors.
    pub fn exit_code(self) -> i32 {
        match self {
            ErrorKind::Write => 1,
            ErrorKind::Config => 3,
            ErrorKind::Path => 4,
        }
    }
}

#[derive(Error, Debug)]
pub enum ZkError {
    #[error("{msg}")]
    Write {
        msg: String,
        path: Option<PathBuf>,
        #[source]
        source: Option<std::io::Error>,
    },

    #[error("{0}")]
    Config(String),

    #[error("{msg}")]
    Path { msg: String, path: PathBuf },
}

impl ZkError {
    pub fn write(msg: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        ZkError::Write {
            msg: msg.into(),
            path: Some(path.into()),
            source: None,
        }
    }

    pub fn write_io(msg: impl Into<String>, path: impl Into<PathBuf>, err: std::io::Error) -> Self {
        ZkError::Write {
            msg: msg.into(),
            path: Some(path.into()),
            source: Some(err),
        }
    }

    pub fn config(msg: impl Into<String>) -> Self {
        ZkError::Config(msg.into())
    }

    pub fn path(msg: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        ZkError::Path {
            msg: msg.into(),
            path: path.into(),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            ZkError::Write { .. } => ErrorKind::Write,
            ZkError::Config(_) => ErrorKind::Config,
            ZkError::Path { .. } => ErrorKind::Path,
        }
    }

    /// The file or directory the error is about, if there is one.
    pub fn related_path(&self) -> Option<&Path> {
        match self {
            ZkError::Write { path, .. } => path.as_deref(),
            ZkError::Config(_) => None,
            ZkError::Path { path, .. } => Some(path),
        }
    }
}

pub type Result<T> = std::result::Result<T, ZkError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kinds_and_exit_codes() {
        let err = ZkError::write("Note exists.", "/tmp/a.md");
        assert_eq!(err.kind(), ErrorKind::Write);
        assert_eq!(err.kind().exit_code(), 1);

        let err = ZkError::config("Config file missing section: General");
        assert_eq!(err.kind(), ErrorKind::Config);
        assert_eq!(err.kind().exit_code(), 3);
        assert!(err.related_path().is_none());

        let err = ZkError::path("Zettel path not valid: /nope", "/nope");
        assert_eq!(err.kind().exit_code(), 4);
        assert_eq!(err.related_path(), Some(Path::new("/nope")));
    }

    #[test]
    fn test_display_is_message() {
        let err = ZkError::write_io(
            "Error writing to /x",
            "/x",
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        );
        assert_eq!(err.to_string(), "Error writing to /x");
        assert!(std::error::Error::source(&err).is_some());
    }
}
