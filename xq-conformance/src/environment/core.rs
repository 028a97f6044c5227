use std::path::PathBuf;

use crate::engine::{EngineError, Session};

/// External context bound to an engine session before the query runs: an
/// optional pre-loaded context document and pre-registered modules. Fixture
/// files are opaque to this crate; they are addressed by path only.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct EnvironmentSpec {
    pub context_document: Option<PathBuf>,
    pub modules: Vec<Module>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Module {
    pub namespace: String,
    pub path: PathBuf,
}

impl EnvironmentSpec {
    pub fn empty() -> Self {
        Self {
            ..Default::default()
        }
    }

    pub fn with_context_document(mut self, path: impl Into<PathBuf>) -> Self {
        self.context_document = Some(path.into());
        self
    }

    pub fn with_module(mut self, namespace: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        self.modules.push(Module {
            namespace: namespace.into(),
            path: path.into(),
        });
        self
    }

    pub(crate) fn apply<S: Session>(&self, session: &mut S) -> Result<(), EngineError> {
        for module in &self.modules {
            session.bind_external_module(&module.namespace, &module.path)?;
        }
        if let Some(path) = &self.context_document {
            session.bind_context_document(path)?;
        }
        Ok(())
    }
}
