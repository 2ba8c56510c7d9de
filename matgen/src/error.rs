use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Matrix sizes must be positive")]
    ZeroSize,
    #[error("Can't create output directory {path:?}")]
    CreateDir {
        path: PathBuf,
        source: io::Error,
    },
    #[error("Can't write matrix file {path:?}")]
    Write {
        path: PathBuf,
        source: io::Error,
    },
    #[error("Can't report saved matrix file {path:?}")]
    Report {
        path: PathBuf,
        source: io::Error,
    },
    #[error("Can't read matrix file {path:?}")]
    Read {
        path: PathBuf,
        source: io::Error,
    },
    #[error("Matrix file {path:?} has {actual} bytes, expected {expected}")]
    Length {
        path: PathBuf,
        expected: usize,
        actual: usize,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
