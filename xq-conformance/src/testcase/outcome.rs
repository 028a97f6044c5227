use crossterm::style::Stylize;

use super::assert::Failure;

/// The verdict on one test case: exactly one of pass, fail, or a defect in
/// the fixture itself (an environment that could not be set up). Never a
/// silent skip once an outcome was produced.
#[derive(Debug, Clone, PartialEq)]
pub enum TestOutcome {
    Passed,
    Failed(Failure),
    EnvironmentError(String),
}

impl TestOutcome {
    pub fn is_passed(&self) -> bool {
        matches!(self, Self::Passed)
    }

    /// Plain-text diagnostic for a test report; the `Display` impl is the
    /// colored terminal rendering.
    pub fn diagnostic(&self) -> String {
        match self {
            TestOutcome::Passed => "PASS".to_string(),
            TestOutcome::Failed(failure) => format!("FAIL {}", failure),
            TestOutcome::EnvironmentError(error) => format!("FIXTURE ERROR {}", error),
        }
    }
}

impl std::fmt::Display for TestOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TestOutcome::Passed => write!(f, "{}", "PASS".green()),
            TestOutcome::Failed(failure) => {
                write!(f, "{} {}", "FAIL".red(), failure)
            }
            TestOutcome::EnvironmentError(error) => {
                write!(f, "{} {}", "FIXTURE ERROR".red(), error)
            }
        }
    }
}
