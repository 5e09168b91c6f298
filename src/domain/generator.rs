//! Random tree generation by recursive subtree composition.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{instrument, trace};

use crate::domain::arena::TreeArena;
use crate::domain::error::{DomainError, DomainResult};
use crate::domain::identifier::Identifier;

/// Largest accepted `max_depth`.
///
/// Generation recurses once per level and every paste copies the subtree
/// again, so cost grows with `nodes * depth`.
pub const MAX_DEPTH_LIMIT: u32 = 64;

/// Inclusive bounds on the number of children sampled per internal node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WidthBounds {
    min: u32,
    max: u32,
}

impl WidthBounds {
    /// Requires `1 <= min <= max`.
    pub fn new(min: u32, max: u32) -> DomainResult<Self> {
        if min == 0 || min > max {
            return Err(DomainError::InvalidBounds { min, max });
        }
        Ok(Self { min, max })
    }

    pub fn min(&self) -> u32 {
        self.min
    }

    pub fn max(&self) -> u32 {
        self.max
    }

    pub fn contains(&self, n: usize) -> bool {
        (self.min as usize..=self.max as usize).contains(&n)
    }
}

/// Generates random ordered trees from an explicit random source.
pub struct TreeGenerator<R: Rng> {
    rng: R,
}

impl TreeGenerator<StdRng> {
    /// Reproducible generator: the same seed always yields the same trees.
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }
}

impl<R: Rng> TreeGenerator<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Builds a tree rooted at `root` of at most `max_depth` levels below the root.
    ///
    /// - `max_depth == 0`: a lone root, regardless of `bounds`.
    /// - `max_depth == 1`: the root plus `n` leaves, `n` sampled from `bounds`.
    /// - otherwise: `n` subtrees of `max_depth - 1` are generated independently
    ///   and pasted under the root in sibling order.
    ///
    /// Randomness is drawn depth first, so the output is a pure function of the
    /// random source state.
    ///
    /// Fails with `InvalidIdentifier` for an empty root path and with
    /// `DepthLimit` above [`MAX_DEPTH_LIMIT`].
    pub fn generate(
        &mut self,
        max_depth: u32,
        bounds: WidthBounds,
        root: &Identifier,
    ) -> DomainResult<TreeArena> {
        if root.is_empty() {
            return Err(DomainError::InvalidIdentifier(root.to_string()));
        }
        if max_depth > MAX_DEPTH_LIMIT {
            return Err(DomainError::DepthLimit {
                max_depth,
                limit: MAX_DEPTH_LIMIT,
            });
        }
        self.generate_subtree(max_depth, bounds, root)
    }

    #[instrument(level = "trace", skip(self))]
    fn generate_subtree(
        &mut self,
        max_depth: u32,
        bounds: WidthBounds,
        root: &Identifier,
    ) -> DomainResult<TreeArena> {
        let mut tree = TreeArena::new();
        tree.create_node(root.clone(), None)?;

        match max_depth {
            0 => {}
            1 => {
                let n = self.sample_width(bounds);
                for i in 0..n {
                    tree.create_node(root.child(i), Some(root))?;
                }
            }
            _ => {
                let n = self.sample_width(bounds);
                for i in 0..n {
                    let subtree = self.generate_subtree(max_depth - 1, bounds, &root.child(i))?;
                    tree.paste(root, subtree)?;
                }
            }
        }
        Ok(tree)
    }

    fn sample_width(&mut self, bounds: WidthBounds) -> u32 {
        let n = self.rng.gen_range(bounds.min..=bounds.max);
        trace!(n, "sampled child count");
        n
    }
}
