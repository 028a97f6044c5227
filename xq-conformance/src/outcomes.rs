use crate::hashmap::FxIndexSet;
use crate::testcase::TestOutcome;

/// Per-case verdicts collected while running one test set.
#[derive(Debug, Default)]
pub struct TestSetOutcomes {
    pub test_set_name: String,
    outcomes: Vec<(String, TestOutcome)>,
    filtered: usize,
}

impl TestSetOutcomes {
    pub(crate) fn new(test_set_name: &str) -> Self {
        Self {
            test_set_name: test_set_name.to_string(),
            outcomes: Vec::new(),
            filtered: 0,
        }
    }

    pub(crate) fn add_outcome(&mut self, name: &str, outcome: TestOutcome) {
        self.outcomes.push((name.to_string(), outcome));
    }

    pub(crate) fn add_filtered(&mut self) {
        self.filtered += 1;
    }

    pub fn outcomes(&self) -> impl Iterator<Item = (&str, &TestOutcome)> {
        self.outcomes
            .iter()
            .map(|(name, outcome)| (name.as_str(), outcome))
    }

    pub fn passed(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|(_, outcome)| outcome.is_passed())
            .count()
    }

    pub fn failed(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|(_, outcome)| matches!(outcome, TestOutcome::Failed(_)))
            .count()
    }

    pub fn errored(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|(_, outcome)| matches!(outcome, TestOutcome::EnvironmentError(_)))
            .count()
    }

    pub fn filtered(&self) -> usize {
        self.filtered
    }

    pub fn total(&self) -> usize {
        self.outcomes.len()
    }

    pub fn is_all_passed(&self) -> bool {
        self.passed() == self.total()
    }

    pub fn failing_names(&self) -> Vec<String> {
        self.outcomes
            .iter()
            .filter(|(_, outcome)| !outcome.is_passed())
            .map(|(name, _)| name.clone())
            .collect()
    }

    pub fn display(&self) -> String {
        format!(
            "{}: {} passed, {} failed, {} errored, {} filtered",
            self.test_set_name,
            self.passed(),
            self.failed(),
            self.errored(),
            self.filtered
        )
    }
}

/// Aggregate of the test-set outcomes of one catalog run.
#[derive(Debug, Default)]
pub struct CatalogOutcomes {
    test_set_outcomes: Vec<TestSetOutcomes>,
}

impl CatalogOutcomes {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn add_outcomes(&mut self, outcomes: TestSetOutcomes) {
        self.test_set_outcomes.push(outcomes);
    }

    pub fn test_sets(&self) -> &[TestSetOutcomes] {
        &self.test_set_outcomes
    }

    pub fn passed(&self) -> usize {
        self.test_set_outcomes.iter().map(|o| o.passed()).sum()
    }

    pub fn failed(&self) -> usize {
        self.test_set_outcomes.iter().map(|o| o.failed()).sum()
    }

    pub fn errored(&self) -> usize {
        self.test_set_outcomes.iter().map(|o| o.errored()).sum()
    }

    pub fn filtered(&self) -> usize {
        self.test_set_outcomes.iter().map(|o| o.filtered()).sum()
    }

    pub fn total(&self) -> usize {
        self.test_set_outcomes.iter().map(|o| o.total()).sum()
    }

    pub fn failing_names(&self) -> FxIndexSet<String> {
        self.test_set_outcomes
            .iter()
            .flat_map(|o| o.failing_names())
            .collect()
    }

    pub fn display(&self) -> String {
        format!(
            "{} passed, {} failed, {} errored, {} filtered",
            self.passed(),
            self.failed(),
            self.errored(),
            self.filtered()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::outcome::QueryOutcome;
    use crate::testcase::TestCaseResult;

    #[test]
    fn counts_add_up() {
        let mut outcomes = TestSetOutcomes::new("set");
        outcomes.add_outcome("a", TestOutcome::Passed);
        outcomes.add_outcome(
            "b",
            TestCaseResult::assert_empty().assert_outcome(&QueryOutcome::Sequence(vec![
                crate::sequence::Item::new("1", "xs:integer"),
            ])),
        );
        outcomes.add_outcome("c", TestOutcome::EnvironmentError("nope".to_string()));
        outcomes.add_filtered();

        assert_eq!(outcomes.passed(), 1);
        assert_eq!(outcomes.failed(), 1);
        assert_eq!(outcomes.errored(), 1);
        assert_eq!(outcomes.filtered(), 1);
        assert_eq!(outcomes.failing_names(), vec!["b", "c"]);
        assert!(!outcomes.is_all_passed());
        assert_eq!(outcomes.display(), "set: 1 passed, 1 failed, 1 errored, 1 filtered");
    }

    #[test]
    fn catalog_aggregates_and_dedupes_failing_names() {
        let mut first = TestSetOutcomes::new("first");
        first.add_outcome("shared-name", TestOutcome::EnvironmentError("x".to_string()));
        let mut second = TestSetOutcomes::new("second");
        second.add_outcome("shared-name", TestOutcome::EnvironmentError("x".to_string()));
        second.add_outcome("other", TestOutcome::Passed);

        let mut catalog = CatalogOutcomes::new();
        catalog.add_outcomes(first);
        catalog.add_outcomes(second);

        assert_eq!(catalog.total(), 3);
        assert_eq!(catalog.passed(), 1);
        assert_eq!(catalog.errored(), 2);
        assert_eq!(catalog.failing_names().len(), 1);
    }
}
