use std::fmt;

// Implemented by hand instead of `#[derive(thiserror::Error)]` because
// thiserror unconditionally treats a field named `source` as the error
// source, and `NoPathFound`'s spec-mandated `source: String` field does
// not implement `std::error::Error`.
#[derive(Debug)]
pub enum Error {
    UnknownNode(String),
    UnknownStreet { from: String, to: String },
    EmptyMean,
    NoPathFound { source: String, destination: String },
    InvalidData(String),
    IoError(std::io::Error),
    ThreadPool(rayon::ThreadPoolBuildError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::UnknownNode(node) => write!(f, "Unknown node {node:?}"),
            Error::UnknownStreet { from, to } => {
                write!(f, "Unknown street {from:?} -> {to:?}")
            }
            Error::EmptyMean => write!(f, "No samples aggregated"),
            Error::NoPathFound { source, destination } => {
                write!(f, "No path between {source:?} and {destination:?}")
            }
            Error::InvalidData(msg) => write!(f, "Invalid data: {msg}"),
            Error::IoError(err) => write!(f, "I/O error: {err}"),
            Error::ThreadPool(err) => write!(f, "Thread pool error: {err}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::IoError(err) => Some(err),
            Error::ThreadPool(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::IoError(err)
    }
}

impl From<rayon::ThreadPoolBuildError> for Error {
    fn from(err: rayon::ThreadPoolBuildError) -> Self {
        Error::ThreadPool(err)
    }
}
