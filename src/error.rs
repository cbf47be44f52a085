/*
Errors raised while turning ASMD work files into a PMF.

Every variant that touches the file system carries the offending path, so a
failure can be diagnosed from the message alone.
 */
use std::path::PathBuf;

use thiserror::Error;

/// Coarse classification of an [`AsmdError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Usage,
    Format,
    Io,
    Validation,
}

#[derive(Debug, Error)]
pub enum AsmdError {
    #[error("usage error: {0}")]
    Usage(String),

    #[error("I/O error while accessing `{}`: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid ASMD work file `{}`: missing header row", .path.display())]
    MissingHeader { path: PathBuf },

    #[error("invalid ASMD work file `{}`: no data rows after the header", .path.display())]
    NoSamples { path: PathBuf },

    #[error(
        "invalid row in `{}` at line {line}: expected at least {expected} columns, found {found}",
        .path.display()
    )]
    InvalidColumns {
        path: PathBuf,
        line: usize,
        expected: usize,
        found: usize,
    },

    #[error(
        "invalid numeric value `{token}` in `{}` at line {line}, column {column}",
        .path.display()
    )]
    InvalidNumber {
        path: PathBuf,
        line: usize,
        column: usize,
        token: String,
    },

    #[error("`{}` is not valid UTF-8 at line {line}", .path.display())]
    InvalidEncoding { path: PathBuf, line: usize },

    #[error("no ASMD work files were provided")]
    EmptyTrajectoryList,

    #[error("no work values were provided")]
    EmptyWorkVector,

    #[error(
        "`{}` has {found} samples but `{}` has {expected}",
        .path.display(),
        .reference.display()
    )]
    SampleCountMismatch {
        path: PathBuf,
        reference: PathBuf,
        expected: usize,
        found: usize,
    },

    #[error(
        "reaction coordinate of `{}` differs at row {index}: expected {expected}, found {found}",
        .path.display()
    )]
    GridMismatch {
        path: PathBuf,
        index: usize,
        expected: f64,
        found: f64,
    },

    #[error("temperature must be finite and larger than zero, got {0} K")]
    InvalidTemperature(f64),

    #[error("final sample index {workskip} is outside a profile of {len} samples")]
    FinalSampleOutOfRange { workskip: usize, len: usize },

    #[error("profile has {coordinates} reaction coordinates but {energies} free energies")]
    LengthMismatch { coordinates: usize, energies: usize },
}

impl AsmdError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        AsmdError::Io {
            path: path.into(),
            source,
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            AsmdError::Usage(_) => ErrorKind::Usage,
            AsmdError::Io { .. } => ErrorKind::Io,
            AsmdError::MissingHeader { .. }
            | AsmdError::NoSamples { .. }
            | AsmdError::InvalidColumns { .. }
            | AsmdError::InvalidNumber { .. }
            | AsmdError::InvalidEncoding { .. } => ErrorKind::Format,
            AsmdError::EmptyTrajectoryList
            | AsmdError::EmptyWorkVector
            | AsmdError::SampleCountMismatch { .. }
            | AsmdError::GridMismatch { .. }
            | AsmdError::InvalidTemperature(_)
            | AsmdError::FinalSampleOutOfRange { .. }
            | AsmdError::LengthMismatch { .. } => ErrorKind::Validation,
        }
    }
}

pub type Result<T> = std::result::Result<T, AsmdError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_file() {
        let err = AsmdError::InvalidColumns {
            path: PathBuf::from("smd.3.work.dat"),
            line: 7,
            expected: 4,
            found: 3,
        };
        let msg = err.to_string();
        assert!(msg.contains("smd.3.work.dat"));
        assert!(msg.contains("line 7"));
        assert_eq!(err.kind(), ErrorKind::Format);
    }

    #[test]
    fn io_keeps_its_source() {
        let err = AsmdError::io(
            "missing.dat",
            std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
        );
        assert_eq!(err.kind(), ErrorKind::Io);
        assert!(std::error::Error::source(&err).is_some());
        assert!(err.to_string().contains("missing.dat"));
    }

    #[test]
    fn mismatches_are_validation_errors() {
        let err = AsmdError::SampleCountMismatch {
            path: PathBuf::from("b.dat"),
            reference: PathBuf::from("a.dat"),
            expected: 10,
            found: 9,
        };
        assert_eq!(err.kind(), ErrorKind::Validation);
        assert_eq!(AsmdError::EmptyTrajectoryList.kind(), ErrorKind::Validation);
    }
}
