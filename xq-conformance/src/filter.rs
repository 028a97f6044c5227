use globset::{Glob, GlobSet, GlobSetBuilder};

use crate::error::Result;
use crate::testcase::TestCase;
use crate::testset::TestSet;

pub trait TestFilter {
    fn is_included(&self, test_set: &TestSet, test_case: &TestCase) -> bool;
}

pub struct IncludeAllFilter {}

impl IncludeAllFilter {
    pub fn new() -> Self {
        Self {}
    }
}

impl Default for IncludeAllFilter {
    fn default() -> Self {
        Self::new()
    }
}

impl TestFilter for IncludeAllFilter {
    fn is_included(&self, _test_set: &TestSet, _test_case: &TestCase) -> bool {
        true
    }
}

/// Includes test cases whose name contains the given fragment.
pub struct NameFilter {
    name_filter: Option<String>,
}

impl NameFilter {
    pub fn new(name_filter: Option<String>) -> Self {
        Self { name_filter }
    }
}

impl TestFilter for NameFilter {
    fn is_included(&self, _test_set: &TestSet, test_case: &TestCase) -> bool {
        if let Some(name_filter) = &self.name_filter {
            test_case.name.contains(name_filter)
        } else {
            true
        }
    }
}

/// Includes test cases whose name matches any of the given glob patterns.
pub struct GlobFilter {
    globs: GlobSet,
}

impl GlobFilter {
    pub fn new(patterns: &[&str]) -> Result<Self> {
        let mut builder = GlobSetBuilder::new();
        for pattern in patterns {
            builder.add(Glob::new(pattern)?);
        }
        Ok(Self {
            globs: builder.build()?,
        })
    }
}

impl TestFilter for GlobFilter {
    fn is_included(&self, _test_set: &TestSet, test_case: &TestCase) -> bool {
        self.globs.is_match(&test_case.name)
    }
}
