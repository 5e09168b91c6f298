//! Labeling pass over every node of a tree.

use std::convert::Infallible;

use itertools::Itertools;
use tracing::{debug, instrument};

use crate::domain::arena::{TreeArena, TreeNode};
use crate::domain::identifier::Identifier;

/// Returns a labeled deep copy of `tree`; the input is never modified.
///
/// `label_fn` is called once per node and sets the label as a side effect.
/// The first error aborts the pass and is returned unmodified; the partially
/// labeled copy is dropped.
#[instrument(level = "debug", skip(tree, label_fn), fields(size = tree.len()))]
pub fn decorate<F, E>(tree: &TreeArena, label_fn: F) -> Result<TreeArena, E>
where
    F: FnMut(&mut TreeNode) -> Result<(), E>,
{
    let mut copy = tree.clone();
    decorate_in_place(&mut copy, label_fn)?;
    Ok(copy)
}

/// Like [`decorate`] but mutates `tree` directly.
pub fn decorate_in_place<F, E>(tree: &mut TreeArena, mut label_fn: F) -> Result<(), E>
where
    F: FnMut(&mut TreeNode) -> Result<(), E>,
{
    let mut visited = 0usize;
    for node in tree.nodes_mut() {
        label_fn(node)?;
        visited += 1;
    }
    debug!(visited, "labels applied");
    Ok(())
}

/// Default label: identifier components concatenated, `(0, 1, 2)` -> `"012"`.
pub fn label_for(identifier: &Identifier) -> String {
    identifier.components().iter().join("")
}

/// Default label function for [`decorate`].
pub fn concat_label(node: &mut TreeNode) -> Result<(), Infallible> {
    let label = label_for(node.identifier());
    node.set_label(label);
    Ok(())
}
