use std::fmt;

use crate::atomic::{numeric_eq, Atomic};
use crate::error::{Error, Result};
use crate::outcome::{ErrorCode, QueryOutcome};
use crate::sequence::{normalize_space, string_value, Item};

use super::outcome::TestOutcome;

pub(crate) trait Assertable {
    fn assert_outcome(&self, outcome: &QueryOutcome) -> TestOutcome;
}

#[derive(Debug, Clone, PartialEq)]
pub struct AssertAnyOf(Vec<TestCaseResult>);

impl AssertAnyOf {
    pub(crate) fn new(test_case_results: Vec<TestCaseResult>) -> Self {
        Self(test_case_results)
    }
}

impl Assertable for AssertAnyOf {
    fn assert_outcome(&self, outcome: &QueryOutcome) -> TestOutcome {
        let mut failed_test_results = Vec::new();
        for test_case_result in &self.0 {
            let result = test_case_result.assert_outcome(outcome);
            match result {
                TestOutcome::Passed => return result,
                _ => failed_test_results.push(result),
            }
        }
        TestOutcome::Failed(Failure::AnyOf(self.clone(), failed_test_results))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AssertAllOf(Vec<TestCaseResult>);

impl AssertAllOf {
    pub(crate) fn new(test_case_results: Vec<TestCaseResult>) -> Self {
        Self(test_case_results)
    }
}

impl Assertable for AssertAllOf {
    fn assert_outcome(&self, outcome: &QueryOutcome) -> TestOutcome {
        for test_case_result in &self.0 {
            let result = test_case_result.assert_outcome(outcome);
            match result {
                TestOutcome::Passed => {}
                // first decisive child stops evaluation
                _ => return result,
            }
        }
        TestOutcome::Passed
    }
}

#[derive(Clone, PartialEq)]
pub struct AssertNot(Box<TestCaseResult>);

impl AssertNot {
    pub(crate) fn new(test_case_result: TestCaseResult) -> Self {
        Self(Box::new(test_case_result))
    }
}

impl Assertable for AssertNot {
    fn assert_outcome(&self, outcome: &QueryOutcome) -> TestOutcome {
        let result = self.0.assert_outcome(outcome);
        match result {
            TestOutcome::Passed => TestOutcome::Failed(Failure::Not(self.clone(), outcome.clone())),
            TestOutcome::Failed(_) => TestOutcome::Passed,
            _ => result,
        }
    }
}

impl fmt::Debug for AssertNot {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "AssertNot({:?})", self.0)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AssertEq {
    lexical: String,
    expected: Atomic,
    tolerant: bool,
}

impl AssertEq {
    pub(crate) fn new(literal: &str, tolerant: bool) -> Result<Self> {
        Ok(Self {
            lexical: literal.trim().to_string(),
            expected: Atomic::of_literal(literal)?,
            tolerant,
        })
    }

    pub(crate) fn expected_lexical(&self) -> &str {
        &self.lexical
    }

    fn matches(&self, item: &Item) -> bool {
        let actual = match Atomic::of_item(item) {
            Ok(actual) => actual,
            // the engine produced a value that doesn't conform to its own
            // declared type; that can never equal a well-formed expectation
            Err(_) => return false,
        };
        match (&self.expected, &actual) {
            (Atomic::Integer(expected), Atomic::Integer(actual)) => expected == actual,
            (Atomic::Boolean(expected), Atomic::Boolean(actual)) => expected == actual,
            (Atomic::String(expected), Atomic::String(actual)) => expected == actual,
            // decimal and double compare by exact lexical form unless the
            // numeric-tolerant variant was asked for; both sides must be
            // numeric, a numeric literal never matches a string-typed item
            (
                Atomic::Decimal(_) | Atomic::Double(_),
                Atomic::Integer(_) | Atomic::Decimal(_) | Atomic::Double(_),
            )
            | (Atomic::Integer(_), Atomic::Decimal(_) | Atomic::Double(_)) => {
                if self.tolerant {
                    numeric_eq(&self.expected, &actual)
                } else {
                    self.lexical == item.lexical_form()
                }
            }
            _ => false,
        }
    }
}

impl Assertable for AssertEq {
    fn assert_outcome(&self, outcome: &QueryOutcome) -> TestOutcome {
        match outcome {
            QueryOutcome::Sequence(items) if items.len() == 1 && self.matches(&items[0]) => {
                TestOutcome::Passed
            }
            _ => TestOutcome::Failed(Failure::Eq(self.clone(), outcome.clone())),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AssertDeepEq(Vec<AssertEq>);

impl AssertDeepEq {
    pub(crate) fn new(literals: &[&str]) -> Result<Self> {
        literals
            .iter()
            .map(|literal| AssertEq::new(literal, false))
            .collect::<Result<Vec<_>>>()
            .map(Self)
    }

    pub(crate) fn expected_lexicals(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(AssertEq::expected_lexical)
    }
}

impl Assertable for AssertDeepEq {
    fn assert_outcome(&self, outcome: &QueryOutcome) -> TestOutcome {
        match outcome {
            QueryOutcome::Sequence(items)
                if items.len() == self.0.len()
                    && self.0.iter().zip(items).all(|(eq, item)| eq.matches(item)) =>
            {
                TestOutcome::Passed
            }
            _ => TestOutcome::Failed(Failure::DeepEq(self.clone(), outcome.clone())),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AssertCount(usize);

impl AssertCount {
    pub(crate) fn new(count: usize) -> Self {
        Self(count)
    }

    pub(crate) fn expected_count(&self) -> usize {
        self.0
    }
}

impl Assertable for AssertCount {
    fn assert_outcome(&self, outcome: &QueryOutcome) -> TestOutcome {
        match outcome {
            QueryOutcome::Sequence(items) if items.len() == self.0 => TestOutcome::Passed,
            _ => TestOutcome::Failed(Failure::Count(self.clone(), outcome.clone())),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AssertEmpty;

impl AssertEmpty {
    pub(crate) fn new() -> Self {
        Self
    }
}

impl Assertable for AssertEmpty {
    fn assert_outcome(&self, outcome: &QueryOutcome) -> TestOutcome {
        match outcome {
            QueryOutcome::Sequence(items) if items.is_empty() => TestOutcome::Passed,
            _ => TestOutcome::Failed(Failure::Empty(self.clone(), outcome.clone())),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AssertType(String);

impl AssertType {
    pub(crate) fn new(type_name: &str) -> Result<Self> {
        if type_name.trim().is_empty() || type_name.contains(char::is_whitespace) {
            return Err(Error::InvalidTypeName(type_name.to_string()));
        }
        Ok(Self(type_name.to_string()))
    }

    pub(crate) fn expected_type(&self) -> &str {
        &self.0
    }
}

impl Assertable for AssertType {
    fn assert_outcome(&self, outcome: &QueryOutcome) -> TestOutcome {
        match outcome {
            // exact, case-sensitive type name match; the engine under test is
            // trusted to report the most specific applicable type
            QueryOutcome::Sequence(items)
                if items.len() == 1 && items[0].type_name() == self.0 =>
            {
                TestOutcome::Passed
            }
            _ => TestOutcome::Failed(Failure::Type(self.clone(), outcome.clone())),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AssertBoolean(bool);

impl AssertBoolean {
    pub(crate) fn new(value: bool) -> Self {
        Self(value)
    }

    pub(crate) fn expected_value(&self) -> bool {
        self.0
    }
}

impl Assertable for AssertBoolean {
    fn assert_outcome(&self, outcome: &QueryOutcome) -> TestOutcome {
        if let QueryOutcome::Sequence(items) = outcome {
            if let [item] = items.as_slice() {
                if let Ok(Atomic::Boolean(value)) = Atomic::of_item(item) {
                    if value == self.0 {
                        return TestOutcome::Passed;
                    }
                }
            }
        }
        TestOutcome::Failed(Failure::Boolean(self.clone(), outcome.clone()))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AssertStringValue {
    expected: String,
    normalize_space: bool,
}

impl AssertStringValue {
    pub(crate) fn new(expected: &str, normalize_space: bool) -> Self {
        Self {
            expected: expected.to_string(),
            normalize_space,
        }
    }

    pub(crate) fn expected_value(&self) -> &str {
        &self.expected
    }
}

impl Assertable for AssertStringValue {
    fn assert_outcome(&self, outcome: &QueryOutcome) -> TestOutcome {
        match outcome {
            QueryOutcome::Sequence(items) => {
                let joined = string_value(items);
                // both sides are normalized, matching normalize-space()
                // applied to result and expectation alike
                let matches = if self.normalize_space {
                    normalize_space(&joined) == normalize_space(&self.expected)
                } else {
                    joined == self.expected
                };
                if matches {
                    TestOutcome::Passed
                } else {
                    TestOutcome::Failed(Failure::StringValue(self.clone(), outcome.clone()))
                }
            }
            QueryOutcome::Error(_) => {
                TestOutcome::Failed(Failure::StringValue(self.clone(), outcome.clone()))
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum ExpectedCode {
    // `error("*")`: any engine failure is acceptable
    Any,
    Code(ErrorCode),
}

#[derive(Debug, Clone, PartialEq)]
pub struct AssertError(ExpectedCode);

impl AssertError {
    pub(crate) fn new(code: &str) -> Result<Self> {
        if code == "*" {
            return Ok(Self(ExpectedCode::Any));
        }
        if code.is_empty() || code.contains(char::is_whitespace) {
            return Err(Error::InvalidErrorCode(code.to_string()));
        }
        Ok(Self(ExpectedCode::Code(ErrorCode::new(code))))
    }

    pub(crate) fn expected_code(&self) -> &ExpectedCode {
        &self.0
    }
}

impl Assertable for AssertError {
    fn assert_outcome(&self, outcome: &QueryOutcome) -> TestOutcome {
        if let QueryOutcome::Error(code) = outcome {
            let matches = match &self.0 {
                ExpectedCode::Any => true,
                // the unknown-code sentinel never satisfies a specific code
                ExpectedCode::Code(expected) => !code.is_unknown() && code == expected,
            };
            if matches {
                return TestOutcome::Passed;
            }
        }
        TestOutcome::Failed(Failure::Error(self.clone(), outcome.clone()))
    }
}

/// The expectation tree of one test case: what the test author declared the
/// query outcome must look like.
#[derive(Debug, Clone, PartialEq)]
pub enum TestCaseResult {
    // At least one child expectation must hold; children are tried
    // left-to-right and the first pass settles it. This is how a test
    // encodes "either this value, or this specific error" when the
    // conformance suite itself leaves the behavior open.
    AnyOf(AssertAnyOf),
    // Every child expectation must hold; the first failing child settles it.
    AllOf(AssertAllOf),
    Not(AssertNot),
    // A single item whose value equals the expected literal under the item's
    // own declared type: integers numerically, strings by codepoint,
    // booleans by value. Decimal, float and double results compare by exact
    // lexical form by default; the tolerant variant compares numerically.
    AssertEq(AssertEq),
    // A whole sequence: item by item, in order, each under the equality rule
    // above.
    AssertDeepEq(AssertDeepEq),
    // A sequence of exactly the given length.
    AssertCount(AssertCount),
    // The empty sequence.
    AssertEmpty(AssertEmpty),
    // A single item whose reported type name is exactly the given one.
    AssertType(AssertType),
    // The singleton boolean value true() or false(). This is an assertion on
    // the actual value, not on the effective boolean value.
    AssertBoolean(AssertBoolean),
    // The result converted to a string, items joined by single spaces, must
    // equal the expected string; optionally both sides are whitespace
    // normalized first.
    AssertStringValue(AssertStringValue),
    // The query must fail with the given error code; `"*"` accepts any
    // failure.
    AssertError(AssertError),
}

impl TestCaseResult {
    pub fn any_of(results: Vec<TestCaseResult>) -> Self {
        TestCaseResult::AnyOf(AssertAnyOf::new(results))
    }

    pub fn all_of(results: Vec<TestCaseResult>) -> Self {
        TestCaseResult::AllOf(AssertAllOf::new(results))
    }

    pub fn not(result: TestCaseResult) -> Self {
        TestCaseResult::Not(AssertNot::new(result))
    }

    pub fn assert_eq(literal: &str) -> Result<Self> {
        Ok(TestCaseResult::AssertEq(AssertEq::new(literal, false)?))
    }

    /// Numeric-tolerant equality: `6.4` matches `6.40`. Opt-in; the default
    /// keeps exact lexical comparison for decimal and double results.
    pub fn assert_eq_tolerant(literal: &str) -> Result<Self> {
        Ok(TestCaseResult::AssertEq(AssertEq::new(literal, true)?))
    }

    pub fn assert_deep_eq(literals: &[&str]) -> Result<Self> {
        Ok(TestCaseResult::AssertDeepEq(AssertDeepEq::new(literals)?))
    }

    pub fn assert_count(count: usize) -> Self {
        TestCaseResult::AssertCount(AssertCount::new(count))
    }

    pub fn assert_empty() -> Self {
        TestCaseResult::AssertEmpty(AssertEmpty::new())
    }

    pub fn assert_type(type_name: &str) -> Result<Self> {
        Ok(TestCaseResult::AssertType(AssertType::new(type_name)?))
    }

    pub fn assert_boolean(value: bool) -> Self {
        TestCaseResult::AssertBoolean(AssertBoolean::new(value))
    }

    pub fn assert_string_value(expected: &str, normalize_space: bool) -> Self {
        TestCaseResult::AssertStringValue(AssertStringValue::new(expected, normalize_space))
    }

    pub fn error(code: &str) -> Result<Self> {
        Ok(TestCaseResult::AssertError(AssertError::new(code)?))
    }

    pub fn assert_outcome(&self, outcome: &QueryOutcome) -> TestOutcome {
        match self {
            TestCaseResult::AnyOf(a) => a.assert_outcome(outcome),
            TestCaseResult::AllOf(a) => a.assert_outcome(outcome),
            TestCaseResult::Not(a) => a.assert_outcome(outcome),
            TestCaseResult::AssertEq(a) => a.assert_outcome(outcome),
            TestCaseResult::AssertDeepEq(a) => a.assert_outcome(outcome),
            TestCaseResult::AssertCount(a) => a.assert_outcome(outcome),
            TestCaseResult::AssertEmpty(a) => a.assert_outcome(outcome),
            TestCaseResult::AssertType(a) => a.assert_outcome(outcome),
            TestCaseResult::AssertBoolean(a) => a.assert_outcome(outcome),
            TestCaseResult::AssertStringValue(a) => a.assert_outcome(outcome),
            TestCaseResult::AssertError(a) => a.assert_outcome(outcome),
        }
    }
}

/// What a failing match looked like: the assertion that did not hold, paired
/// with the outcome the engine actually produced. Rendered for the test
/// report, never used for control flow.
#[derive(Debug, Clone, PartialEq)]
pub enum Failure {
    AnyOf(AssertAnyOf, Vec<TestOutcome>),
    Not(AssertNot, QueryOutcome),
    Eq(AssertEq, QueryOutcome),
    DeepEq(AssertDeepEq, QueryOutcome),
    Count(AssertCount, QueryOutcome),
    Empty(AssertEmpty, QueryOutcome),
    Type(AssertType, QueryOutcome),
    Boolean(AssertBoolean, QueryOutcome),
    StringValue(AssertStringValue, QueryOutcome),
    Error(AssertError, QueryOutcome),
}

impl fmt::Display for Failure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Failure::AnyOf(_, outcomes) => {
                writeln!(f, "any of:")?;
                for outcome in outcomes {
                    match outcome {
                        TestOutcome::Failed(failure) => {
                            writeln!(f, "  {}", failure)?;
                        }
                        _ => {
                            writeln!(f, "  unexpected test outcome")?;
                        }
                    }
                }
                Ok(())
            }
            Failure::Not(_, actual) => {
                writeln!(f, "not:")?;
                writeln!(f, "  inner assertion held for: {}", actual)?;
                Ok(())
            }
            Failure::Eq(a, actual) => {
                writeln!(f, "eq:")?;
                writeln!(f, "  expected: {}", a.expected_lexical())?;
                writeln!(f, "  actual: {}", actual)?;
                Ok(())
            }
            Failure::DeepEq(a, actual) => {
                writeln!(f, "deep-eq:")?;
                let expected = a.expected_lexicals().collect::<Vec<_>>().join(", ");
                writeln!(f, "  expected: [{}]", expected)?;
                writeln!(f, "  actual: {}", actual)?;
                Ok(())
            }
            Failure::Count(a, actual) => {
                writeln!(f, "count:")?;
                writeln!(f, "  expected: {} items", a.expected_count())?;
                writeln!(f, "  actual: {}", actual)?;
                Ok(())
            }
            Failure::Empty(_, actual) => {
                writeln!(f, "empty:")?;
                writeln!(f, "  actual: {}", actual)?;
                Ok(())
            }
            Failure::Type(a, actual) => {
                writeln!(f, "type:")?;
                writeln!(f, "  expected type: {}", a.expected_type())?;
                writeln!(f, "  actual: {}", actual)?;
                Ok(())
            }
            Failure::Boolean(a, actual) => {
                writeln!(f, "boolean:")?;
                writeln!(f, "  expected: {}", a.expected_value())?;
                writeln!(f, "  actual: {}", actual)?;
                Ok(())
            }
            Failure::StringValue(a, actual) => {
                writeln!(f, "string-value:")?;
                writeln!(f, "  expected: {:?}", a.expected_value())?;
                match actual.string_value() {
                    Some(joined) => writeln!(f, "  actual: {:?}", joined)?,
                    None => writeln!(f, "  actual: {}", actual)?,
                }
                Ok(())
            }
            Failure::Error(a, actual) => {
                writeln!(f, "error:")?;
                match a.expected_code() {
                    ExpectedCode::Any => writeln!(f, "  expected: any error")?,
                    ExpectedCode::Code(code) => writeln!(f, "  expected: error {}", code)?,
                }
                writeln!(f, "  actual: {}", actual)?;
                Ok(())
            }
        }
    }
}
