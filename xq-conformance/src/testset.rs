use std::io::Write;

use crate::engine::Engine;
use crate::environment::SharedEnvironments;
use crate::filter::TestFilter;
use crate::outcomes::TestSetOutcomes;
use crate::runcontext::RunContext;
use crate::testcase::TestCase;

/// A named group of test cases with environments they share.
#[derive(Debug)]
pub struct TestSet {
    pub name: String,
    pub descriptions: Vec<String>,
    pub shared_environments: SharedEnvironments,
    pub test_cases: Vec<TestCase>,
}

impl TestSet {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            descriptions: Vec::new(),
            shared_environments: SharedEnvironments::empty(),
            test_cases: Vec::new(),
        }
    }

    pub fn with_shared_environments(mut self, shared_environments: SharedEnvironments) -> Self {
        self.shared_environments = shared_environments;
        self
    }

    pub fn with_test_case(mut self, test_case: TestCase) -> Self {
        self.test_cases.push(test_case);
        self
    }

    pub fn run<E: Engine>(
        &self,
        run_context: &RunContext,
        engine: &E,
        test_filter: &impl TestFilter,
        out: &mut impl Write,
    ) -> std::io::Result<TestSetOutcomes> {
        self.run_with_shared(run_context, engine, test_filter, &[], out)
    }

    pub(crate) fn run_with_shared<E: Engine>(
        &self,
        run_context: &RunContext,
        engine: &E,
        test_filter: &impl TestFilter,
        outer_shared: &[&SharedEnvironments],
        out: &mut impl Write,
    ) -> std::io::Result<TestSetOutcomes> {
        let renderer = run_context.renderer();
        let mut outcomes = TestSetOutcomes::new(&self.name);
        let mut all_shared: Vec<&SharedEnvironments> = outer_shared.to_vec();
        all_shared.push(&self.shared_environments);

        renderer.render_test_set(out, self)?;
        for test_case in &self.test_cases {
            if !test_filter.is_included(self, test_case) {
                outcomes.add_filtered();
                continue;
            }
            let outcome = test_case.run(engine, &all_shared);
            renderer.render_test_case(out, test_case, &outcome)?;
            outcomes.add_outcome(&test_case.name, outcome);
        }
        renderer.render_test_set_summary(out, &outcomes)?;
        Ok(outcomes)
    }
}
