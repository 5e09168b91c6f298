//! Random tree service
//!
//! Generates a tree from settings and produces its labeled copy.

use rand::rngs::StdRng;
use rand::Rng;
use tracing::{debug, instrument};

use crate::application::ApplicationResult;
use crate::config::Settings;
use crate::domain::{concat_label, decorate, Identifier, TreeArena, TreeGenerator, WidthBounds};

/// A generated tree together with its decorated copy.
#[derive(Debug, Clone)]
pub struct LabeledTree {
    /// Tree as generated, labels unset
    pub raw: TreeArena,
    /// Deep copy of `raw` with default labels applied
    pub labeled: TreeArena,
}

/// Service for generating and labeling random trees.
pub struct RandomTreeService<R: Rng = StdRng> {
    max_depth: u32,
    bounds: WidthBounds,
    root: Identifier,
    generator: TreeGenerator<R>,
}

impl RandomTreeService<StdRng> {
    /// Create a service from settings.
    ///
    /// Seeds the random source from `settings.seed` when present, from entropy otherwise.
    pub fn new(settings: &Settings) -> ApplicationResult<Self> {
        let generator = match settings.seed {
            Some(seed) => TreeGenerator::seeded(seed),
            None => TreeGenerator::from_entropy(),
        };
        Self::with_generator(settings, generator)
    }
}

impl<R: Rng> RandomTreeService<R> {
    /// Create a service with an explicit generator.
    ///
    /// Bounds and root identifier are validated here, before any generation.
    pub fn with_generator(settings: &Settings, generator: TreeGenerator<R>) -> ApplicationResult<Self> {
        Ok(Self {
            max_depth: settings.max_depth,
            bounds: settings.bounds()?,
            root: settings.root_identifier()?,
            generator,
        })
    }

    #[instrument(level = "debug", skip(self))]
    pub fn generate(&mut self) -> ApplicationResult<TreeArena> {
        let tree = self
            .generator
            .generate(self.max_depth, self.bounds, &self.root)?;
        debug!("generate: {} nodes, depth {}", tree.len(), tree.depth());
        Ok(tree)
    }

    /// Generate a tree and label a copy of it with [`concat_label`].
    pub fn generate_labeled(&mut self) -> ApplicationResult<LabeledTree> {
        let raw = self.generate()?;
        let labeled = decorate(&raw, concat_label).unwrap_or_else(|never| match never {});
        Ok(LabeledTree { raw, labeled })
    }
}
