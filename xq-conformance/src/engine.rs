use std::fmt;
use std::path::Path;

use crate::outcome::ErrorCode;
use crate::sequence::Item;

/// A failure surfaced by the engine under test.
///
/// The code is the short symbolic error identifier (such as `XPST0017`), if
/// the engine reported one. The message is for humans only; assertions never
/// look at it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineError {
    code: Option<String>,
    message: String,
}

impl EngineError {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: Some(code.into()),
            message: message.into(),
        }
    }

    /// A failure without a recognizable error code.
    pub fn without_code(message: impl Into<String>) -> Self {
        Self {
            code: None,
            message: message.into(),
        }
    }

    pub fn code(&self) -> Option<&str> {
        self.code.as_deref()
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub(crate) fn into_code(self) -> ErrorCode {
        match self.code {
            Some(code) => ErrorCode::new(code),
            None => ErrorCode::unknown(),
        }
    }
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.code {
            Some(code) => write!(f, "[{}] {}", code, self.message),
            None => write!(f, "{}", self.message),
        }
    }
}

impl std::error::Error for EngineError {}

/// The query engine under test.
///
/// The engine itself is an external collaborator; this crate only drives it
/// through this narrow contract. One session is opened per test case.
pub trait Engine {
    type Session: Session;

    fn open_session(&self) -> Result<Self::Session, EngineError>;
}

/// One engine session: pre-execution configuration plus a single query
/// submission.
///
/// Release is deterministic and structural: a session is owned by the scope
/// of one test case run and dropped on every exit path, so implementations
/// release engine resources in `Drop`.
pub trait Session {
    fn bind_context_document(&mut self, path: &Path) -> Result<(), EngineError>;

    fn bind_external_module(&mut self, namespace: &str, path: &Path) -> Result<(), EngineError>;

    fn evaluate(&mut self, query: &str) -> Result<Vec<Item>, EngineError>;
}
