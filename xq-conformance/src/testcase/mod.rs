pub(crate) mod assert;
mod core;
mod outcome;

pub use assert::{
    AssertAllOf, AssertAnyOf, AssertBoolean, AssertCount, AssertDeepEq, AssertEmpty, AssertEq,
    AssertError, AssertNot, AssertStringValue, AssertType, Failure, TestCaseResult,
};
pub use core::{run_case, CaseReport, TestCase};
pub use outcome::TestOutcome;
