//! Conformance testing for external XQuery engines.
//!
//! This crate owns the assertion side of a conformance run: capturing what
//! happened when a query ran as a [`QueryOutcome`], expressing what should
//! have happened as a composable [`TestCaseResult`] tree, and gluing the two
//! together per test case. The engine under test sits behind the [`Engine`]
//! and [`Session`] traits; evaluating queries is its business, not ours.

mod atomic;
mod catalog;
mod engine;
mod environment;
mod error;
mod filter;
mod hashmap;
mod outcome;
mod outcomes;
mod renderer;
mod runcontext;
mod sequence;
mod testcase;
mod testset;

pub use catalog::Catalog;
pub use engine::{Engine, EngineError, Session};
pub use environment::{
    EnvironmentRef, EnvironmentSpec, Module, SharedEnvironments, TestCaseEnvironment,
};
pub use error::{Error, Result};
pub use filter::{GlobFilter, IncludeAllFilter, NameFilter, TestFilter};
pub use outcome::{ErrorCode, QueryOutcome};
pub use outcomes::{CatalogOutcomes, TestSetOutcomes};
pub use renderer::{CharacterRenderer, Renderer, VerboseRenderer};
pub use runcontext::RunContext;
pub use sequence::Item;
pub use testcase::{
    run_case, AssertAllOf, AssertAnyOf, AssertBoolean, AssertCount, AssertDeepEq, AssertEmpty,
    AssertEq, AssertError, AssertNot, AssertStringValue, AssertType, CaseReport, Failure,
    TestCase, TestCaseResult, TestOutcome,
};
pub use testset::TestSet;
