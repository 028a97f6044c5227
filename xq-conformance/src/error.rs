use thiserror::Error;

use crate::environment::EnvironmentRef;

/// Defects in the fixtures themselves, distinct from assertion failures and
/// from failures of the engine under test. A malformed expectation aborts
/// matcher construction; it never surfaces as a test outcome.
#[derive(Debug, Error)]
pub enum Error {
    #[error("malformed expected literal: {0:?}")]
    InvalidLiteral(String),
    #[error("malformed expected type name: {0:?}")]
    InvalidTypeName(String),
    #[error("malformed expected error code: {0:?}")]
    InvalidErrorCode(String),
    #[error("unknown environment reference: {0}")]
    UnknownEnvironmentReference(EnvironmentRef),
    #[error("glob error")]
    GlobSet(#[from] globset::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
