use crate::renderer::{CharacterRenderer, Renderer, VerboseRenderer};

/// Settings shared by everything in one run.
pub struct RunContext {
    pub verbose: bool,
}

impl RunContext {
    pub fn new(verbose: bool) -> Self {
        Self { verbose }
    }

    pub(crate) fn renderer(&self) -> Box<dyn Renderer> {
        if self.verbose {
            Box::new(VerboseRenderer::new())
        } else {
            Box::new(CharacterRenderer::new())
        }
    }
}
