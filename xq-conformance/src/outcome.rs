use std::fmt;

use crate::engine::EngineError;
use crate::sequence::{string_value, Item};

/// Short symbolic identifier for a category of engine-reported failure,
/// compared by exact string equality. No code hierarchy is modeled.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ErrorCode(String);

// sentinel for failures that carried no recognizable code
const UNKNOWN_CODE: &str = "UNKNOWN";

impl ErrorCode {
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    /// The sentinel code for a failure without a recognizable error code.
    /// It satisfies the any-error assertion but never a specific-code one.
    pub fn unknown() -> Self {
        Self(UNKNOWN_CODE.to_string())
    }

    pub fn is_unknown(&self) -> bool {
        self.0 == UNKNOWN_CODE
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Immutable capture of one query execution: either the produced value
/// sequence, in order, or the engine-surfaced error code.
#[derive(Debug, Clone, PartialEq)]
pub enum QueryOutcome {
    Sequence(Vec<Item>),
    Error(ErrorCode),
}

impl QueryOutcome {
    /// Converts what happened when the query ran into an outcome. Pure: item
    /// order and exact lexical forms are preserved, and only the symbolic
    /// error code survives from a failure.
    pub fn capture(result: Result<Vec<Item>, EngineError>) -> Self {
        match result {
            Ok(items) => QueryOutcome::Sequence(items),
            Err(error) => QueryOutcome::Error(error.into_code()),
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, QueryOutcome::Error(_))
    }
}

impl fmt::Display for QueryOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QueryOutcome::Sequence(items) => {
                if items.is_empty() {
                    write!(f, "empty sequence")
                } else {
                    write!(f, "sequence [")?;
                    for (i, item) in items.iter().enumerate() {
                        if i > 0 {
                            write!(f, ", ")?;
                        }
                        write!(f, "{}", item)?;
                    }
                    write!(f, "]")
                }
            }
            QueryOutcome::Error(code) => write!(f, "error {}", code),
        }
    }
}

impl QueryOutcome {
    pub(crate) fn string_value(&self) -> Option<String> {
        match self {
            QueryOutcome::Sequence(items) => Some(string_value(items)),
            QueryOutcome::Error(_) => None,
        }
    }
}
