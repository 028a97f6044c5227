use std::io::Write;

use crate::outcomes::TestSetOutcomes;
use crate::testcase::{TestCase, TestOutcome};
use crate::testset::TestSet;

pub trait Renderer {
    fn render_test_set(&self, out: &mut dyn Write, test_set: &TestSet) -> std::io::Result<()>;

    fn render_test_case(
        &self,
        out: &mut dyn Write,
        test_case: &TestCase,
        outcome: &TestOutcome,
    ) -> std::io::Result<()>;

    fn render_test_set_summary(
        &self,
        out: &mut dyn Write,
        outcomes: &TestSetOutcomes,
    ) -> std::io::Result<()>;
}

/// One character per test case, for long runs.
pub struct CharacterRenderer;

impl CharacterRenderer {
    pub fn new() -> Self {
        Self
    }
}

impl Default for CharacterRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl Renderer for CharacterRenderer {
    fn render_test_set(&self, out: &mut dyn Write, test_set: &TestSet) -> std::io::Result<()> {
        writeln!(out, "{}", test_set.name)
    }

    fn render_test_case(
        &self,
        out: &mut dyn Write,
        _test_case: &TestCase,
        outcome: &TestOutcome,
    ) -> std::io::Result<()> {
        let c = match outcome {
            TestOutcome::Passed => '.',
            TestOutcome::Failed(_) => 'F',
            TestOutcome::EnvironmentError(_) => 'E',
        };
        write!(out, "{}", c)?;
        out.flush()
    }

    fn render_test_set_summary(
        &self,
        out: &mut dyn Write,
        outcomes: &TestSetOutcomes,
    ) -> std::io::Result<()> {
        writeln!(out)?;
        writeln!(out, "{}", outcomes.display())
    }
}

/// One line per test case with the colored verdict.
pub struct VerboseRenderer;

impl VerboseRenderer {
    pub fn new() -> Self {
        Self
    }
}

impl Default for VerboseRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl Renderer for VerboseRenderer {
    fn render_test_set(&self, out: &mut dyn Write, test_set: &TestSet) -> std::io::Result<()> {
        writeln!(out, "{}", test_set.name)
    }

    fn render_test_case(
        &self,
        out: &mut dyn Write,
        test_case: &TestCase,
        outcome: &TestOutcome,
    ) -> std::io::Result<()> {
        writeln!(out, "{}: {}", test_case.name, outcome)
    }

    fn render_test_set_summary(
        &self,
        out: &mut dyn Write,
        outcomes: &TestSetOutcomes,
    ) -> std::io::Result<()> {
        writeln!(out, "{}", outcomes.display())
    }
}
