//! Error types returned by the constructor and the formatter.

use std::error;

/// Errors reported while constructing or formatting a UUID.
///
/// Nothing in this crate retries or logs a failure; the caller decides what to do with it.
#[derive(thiserror::Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// A caller contract violation: wrong buffer size, missing namespace or name, unknown
    /// version tag.
    #[error("invalid arguments: {0}")]
    InvalidArgs(&'static str),

    /// The requested UUID version is not available in this build.
    #[error("not implemented: {0}")]
    NotImplemented(&'static str),

    /// The random source failed to produce bytes.
    #[error("random number generation failed: {0}")]
    Rand(#[source] rand::Error),

    /// The current time could not be retrieved or does not fit the UUID timestamp field.
    #[error("could not read the clock: {0}")]
    Clock(#[source] Box<dyn error::Error + Send + Sync>),

    /// The hash collaborator could not produce a usable digest.
    #[error("hashing failed: {0}")]
    Hash(&'static str),
}

impl Error {
    /// Returns the semantic result category of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::InvalidArgs(_) => ErrorKind::InvalidArgs,
            Error::NotImplemented(_) => ErrorKind::NotImplemented,
            Error::Rand(_) | Error::Clock(_) | Error::Hash(_) => ErrorKind::Error,
        }
    }
}

impl From<std::time::SystemTimeError> for Error {
    fn from(src: std::time::SystemTimeError) -> Self {
        Error::Clock(Box::new(src))
    }
}

/// Result categories shared by every operation of this crate.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ErrorKind {
    /// A propagated failure from the clock, the random source, or the hash.
    Error,
    /// A null-like, undersized, or missing required input.
    InvalidArgs,
    /// Version 2, or a name-based version whose hash is not compiled in.
    NotImplemented,
}

impl ErrorKind {
    /// Returns the numeric result code used by C implementations of the same API.
    pub const fn code(self) -> i32 {
        match self {
            ErrorKind::Error => -1,
            ErrorKind::InvalidArgs => -2,
            ErrorKind::NotImplemented => -29,
        }
    }
}
