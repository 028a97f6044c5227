use crate::engine::{Engine, Session};
use crate::environment::{EnvironmentSpec, SharedEnvironments, TestCaseEnvironment};
use crate::error::{Error, Result};
use crate::outcome::QueryOutcome;

use super::assert::TestCaseResult;
use super::outcome::TestOutcome;

/// One conformance test case: pure data. The query is a literal, the
/// expectation a constant tree; running the case mutates nothing.
#[derive(Debug, Clone)]
pub struct TestCase {
    pub name: String,
    pub description: Option<String>,
    pub query: String,
    // a reference by name, or a locally defined environment
    pub environments: Vec<TestCaseEnvironment>,
    pub expected: TestCaseResult,
}

impl TestCase {
    pub fn new(
        name: impl Into<String>,
        query: impl Into<String>,
        expected: TestCaseResult,
    ) -> Self {
        Self {
            name: name.into(),
            description: None,
            query: query.into(),
            environments: Vec::new(),
            expected,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_environment(mut self, environment: TestCaseEnvironment) -> Self {
        self.environments.push(environment);
        self
    }

    fn resolved_environments<'a>(
        &'a self,
        all_shared: &[&'a SharedEnvironments],
    ) -> Result<Vec<&'a EnvironmentSpec>> {
        let mut specs = Vec::with_capacity(self.environments.len());
        for environment in &self.environments {
            match environment {
                TestCaseEnvironment::Local(spec) => specs.push(spec),
                TestCaseEnvironment::Ref(environment_ref) => {
                    let spec = all_shared
                        .iter()
                        .find_map(|shared| shared.get(environment_ref));
                    match spec {
                        Some(spec) => specs.push(spec),
                        None => {
                            return Err(Error::UnknownEnvironmentReference(
                                environment_ref.clone(),
                            ))
                        }
                    }
                }
            }
        }
        Ok(specs)
    }

    /// Runs the case end-to-end against the engine: resolve environments,
    /// open a session, bind context, submit the query, capture the outcome,
    /// apply the expectation. The session is scoped to this call and is
    /// released on every path out of it.
    pub fn run<E: Engine>(
        &self,
        engine: &E,
        all_shared: &[&SharedEnvironments],
    ) -> TestOutcome {
        let specs = match self.resolved_environments(all_shared) {
            Ok(specs) => specs,
            Err(error) => return TestOutcome::EnvironmentError(error.to_string()),
        };

        let mut session = match engine.open_session() {
            Ok(session) => session,
            Err(error) => return TestOutcome::EnvironmentError(error.to_string()),
        };

        for spec in &specs {
            if let Err(error) = spec.apply(&mut session) {
                return TestOutcome::EnvironmentError(error.to_string());
            }
        }

        let outcome = QueryOutcome::capture(session.evaluate(&self.query));
        drop(session);

        self.expected.assert_outcome(&outcome)
    }
}

/// Report of one test case run, the surface consumed by an outer test
/// driver.
#[derive(Debug, Clone, PartialEq)]
pub struct CaseReport {
    pub name: String,
    pub outcome: TestOutcome,
}

impl CaseReport {
    pub fn pass(&self) -> bool {
        self.outcome.is_passed()
    }

    pub fn diagnostic(&self) -> String {
        self.outcome.diagnostic()
    }
}

/// Runs one self-contained case: a query, an expectation, and the context
/// the query needs. No state survives the call.
pub fn run_case<E: Engine>(
    name: &str,
    query: &str,
    expected: TestCaseResult,
    environment: EnvironmentSpec,
    engine: &E,
) -> CaseReport {
    let test_case = TestCase::new(name, query, expected)
        .with_environment(TestCaseEnvironment::Local(environment));
    let outcome = test_case.run(engine, &[]);
    CaseReport {
        name: name.to_string(),
        outcome,
    }
}
