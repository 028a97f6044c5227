use std::io::Write;

use crate::engine::Engine;
use crate::environment::SharedEnvironments;
use crate::filter::TestFilter;
use crate::outcomes::CatalogOutcomes;
use crate::runcontext::RunContext;
use crate::testset::TestSet;

/// A whole conformance suite: test sets plus environments shared across all
/// of them.
#[derive(Debug)]
pub struct Catalog {
    pub test_suite: String,
    pub version: String,
    pub shared_environments: SharedEnvironments,
    pub test_sets: Vec<TestSet>,
}

impl Catalog {
    pub fn new(test_suite: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            test_suite: test_suite.into(),
            version: version.into(),
            shared_environments: SharedEnvironments::empty(),
            test_sets: Vec::new(),
        }
    }

    pub fn with_shared_environments(mut self, shared_environments: SharedEnvironments) -> Self {
        self.shared_environments = shared_environments;
        self
    }

    pub fn with_test_set(mut self, test_set: TestSet) -> Self {
        self.test_sets.push(test_set);
        self
    }

    pub fn run<E: Engine>(
        &self,
        run_context: &RunContext,
        engine: &E,
        test_filter: &impl TestFilter,
        out: &mut impl Write,
    ) -> std::io::Result<CatalogOutcomes> {
        let mut catalog_outcomes = CatalogOutcomes::new();
        for test_set in &self.test_sets {
            let test_set_outcomes = test_set.run_with_shared(
                run_context,
                engine,
                test_filter,
                &[&self.shared_environments],
                &mut *out,
            )?;
            catalog_outcomes.add_outcomes(test_set_outcomes);
        }
        Ok(catalog_outcomes)
    }
}
