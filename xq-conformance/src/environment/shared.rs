use std::fmt;

use crate::hashmap::FxIndexMap;

use super::EnvironmentSpec;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EnvironmentRef {
    pub ref_: String,
}

impl EnvironmentRef {
    pub fn new(ref_: impl Into<String>) -> Self {
        Self { ref_: ref_.into() }
    }
}

impl fmt::Display for EnvironmentRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.ref_)
    }
}

/// Environments defined once on a catalog or test set and referenced by name
/// from test cases.
#[derive(Debug, Clone)]
pub struct SharedEnvironments {
    environments: FxIndexMap<String, EnvironmentSpec>,
}

impl Default for SharedEnvironments {
    fn default() -> Self {
        Self::empty()
    }
}

impl SharedEnvironments {
    pub fn new(mut environments: FxIndexMap<String, EnvironmentSpec>) -> Self {
        // there is always an empty environment
        if !environments.contains_key("empty") {
            environments.insert("empty".to_string(), EnvironmentSpec::empty());
        }
        Self { environments }
    }

    pub fn empty() -> Self {
        Self::new(FxIndexMap::default())
    }

    pub fn insert(&mut self, name: impl Into<String>, spec: EnvironmentSpec) {
        self.environments.insert(name.into(), spec);
    }

    pub fn get(&self, environment_ref: &EnvironmentRef) -> Option<&EnvironmentSpec> {
        self.environments.get(&environment_ref.ref_)
    }
}

/// An environment on a test case: a reference by name into the shared
/// environments, or one defined locally on the case.
#[derive(Debug, Clone)]
pub enum TestCaseEnvironment {
    Ref(EnvironmentRef),
    Local(EnvironmentSpec),
}
