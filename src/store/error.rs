use std::error::Error;
use std::fmt;
use std::io;

/// Error type for record-store operations.
///
/// I/O and parse failures are caught at the store boundary and surfaced as
/// structured results; they never propagate as panics.
#[derive(Debug)]
pub enum StoreError {
    /// Backing file could not be read or written.
    Io(io::Error),
    /// Backing file exists but does not hold a valid JSON array.
    Parse(serde_json::Error),
    /// Internal store lock poisoned by a panicking holder.
    LockPoisoned(&'static str),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::Io(e) => write!(f, "record store i/o failed: {}", e),
            StoreError::Parse(e) => write!(f, "record store holds corrupt json: {}", e),
            StoreError::LockPoisoned(operation) => {
                write!(f, "record store lock poisoned during {}", operation)
            }
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            StoreError::Io(e) => Some(e),
            StoreError::Parse(e) => Some(e),
            StoreError::LockPoisoned(_) => None,
        }
    }
}

impl From<io::Error> for StoreError {
    fn from(err: io::Error) -> Self {
        StoreError::Io(err)
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(err: serde_json::Error) -> Self {
        StoreError::Parse(err)
    }
}
