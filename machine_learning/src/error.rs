use std::{
    error::Error,
    fmt::{self, Display},
    io,
};

/// The result type used in the entire machine learning module.
pub type Result<T> = std::result::Result<T, MlErr>;

/// The machine learning module's error type.
#[derive(Debug)]
pub enum MlErr {
    InvalidConfiguration {
        what: &'static str,
        reason: &'static str,
    },
    DataShapeMismatch {
        a: &'static str,
        b: &'static str,
        got: usize,
        expected: usize,
    },
    Storage(StorageErr),
}

/// Failures at the model storage boundary.
#[derive(Debug)]
pub enum StorageErr {
    Io(io::Error),
    Json(serde_json::Error),
}

impl Display for MlErr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MlErr::InvalidConfiguration { what, reason } => {
                write!(f, "invalid configuration for {what}: {reason}")
            }
            MlErr::DataShapeMismatch {
                a,
                b,
                got,
                expected,
            } => write!(
                f,
                "There's a size mismatch between {a} and {b}, got {got} and expected {expected}"
            ),
            MlErr::Storage(e) => write!(f, "storage error: {e}"),
        }
    }
}

impl Error for MlErr {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            MlErr::Storage(e) => Some(e),
            _ => None,
        }
    }
}

impl Display for StorageErr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageErr::Io(e) => write!(f, "io error: {e}"),
            StorageErr::Json(e) => write!(f, "malformed model file: {e}"),
        }
    }
}

impl Error for StorageErr {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            StorageErr::Io(e) => Some(e),
            StorageErr::Json(e) => Some(e),
        }
    }
}

impl From<StorageErr> for MlErr {
    fn from(value: StorageErr) -> Self {
        Self::Storage(value)
    }
}

impl From<io::Error> for MlErr {
    fn from(value: io::Error) -> Self {
        Self::Storage(StorageErr::Io(value))
    }
}

impl From<serde_json::Error> for MlErr {
    fn from(value: serde_json::Error) -> Self {
        Self::Storage(StorageErr::Json(value))
    }
}
