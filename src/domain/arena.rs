use std::collections::HashMap;

use generational_arena::{Arena, Index};
use tracing::{debug, instrument};

use crate::domain::error::{DomainError, DomainResult};
use crate::domain::identifier::Identifier;

/// Tree node in the arena-based hierarchy structure.
///
/// Structural fields are private so that visitors handed a `&mut TreeNode`
/// can change the label but never the identifier or links.
#[derive(Debug, Clone)]
pub struct TreeNode {
    identifier: Identifier,
    label: Option<String>,
    parent: Option<Index>,
    children: Vec<Index>,
}

impl TreeNode {
    pub fn identifier(&self) -> &Identifier {
        &self.identifier
    }

    /// Display label, `None` until the node has been decorated.
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    pub fn set_label(&mut self, label: impl Into<String>) {
        self.label = Some(label.into());
    }

    /// Index of parent node in the arena, None for the root
    pub fn parent(&self) -> Option<Index> {
        self.parent
    }

    /// Indices of child nodes in sibling order
    pub fn children(&self) -> &[Index] {
        &self.children
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }
}

/// Arena-based ordered tree keyed by [`Identifier`].
///
/// Uses a generational arena for node storage and a side table for O(1)
/// identifier lookups. Cloning yields a structurally independent deep copy.
#[derive(Debug, Clone, Default)]
pub struct TreeArena {
    arena: Arena<TreeNode>,
    index: HashMap<Identifier, Index>,
    root: Option<Index>,
}

impl TreeArena {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a node, attached as last child of `parent` or as root when `parent` is `None`.
    #[instrument(level = "trace", skip(self))]
    pub fn create_node(
        &mut self,
        identifier: Identifier,
        parent: Option<&Identifier>,
    ) -> DomainResult<Index> {
        if self.index.contains_key(&identifier) {
            return Err(DomainError::DuplicateIdentifier(identifier));
        }
        let parent_idx = match parent {
            Some(p) => Some(
                *self
                    .index
                    .get(p)
                    .ok_or_else(|| DomainError::Attachment(p.clone()))?,
            ),
            None if self.root.is_some() => return Err(DomainError::RootAlreadySet(identifier)),
            None => None,
        };
        Ok(self.insert_unchecked(identifier, None, parent_idx))
    }

    fn insert_unchecked(
        &mut self,
        identifier: Identifier,
        label: Option<String>,
        parent: Option<Index>,
    ) -> Index {
        let node = TreeNode {
            identifier: identifier.clone(),
            label,
            parent,
            children: Vec::new(),
        };
        let node_idx = self.arena.insert(node);
        self.index.insert(identifier, node_idx);

        if let Some(parent_idx) = parent {
            if let Some(parent) = self.arena.get_mut(parent_idx) {
                parent.children.push(node_idx);
            }
        } else {
            self.root = Some(node_idx);
        }

        node_idx
    }

    /// Grafts `subtree` beneath `parent`.
    ///
    /// The subtree root becomes the last child of `parent`; its descendants keep
    /// their relative order and labels. All identifiers are checked before any
    /// insertion, so on error `self` is left unchanged.
    #[instrument(level = "trace", skip(self, subtree), fields(size = subtree.len()))]
    pub fn paste(&mut self, parent: &Identifier, subtree: TreeArena) -> DomainResult<()> {
        let parent_idx = *self
            .index
            .get(parent)
            .ok_or_else(|| DomainError::Attachment(parent.clone()))?;

        let Some(sub_root) = subtree.root else {
            return Ok(());
        };

        if let Some(dup) = subtree.index.keys().find(|id| self.index.contains_key(*id)) {
            return Err(DomainError::DuplicateIdentifier(dup.clone()));
        }

        // preorder guarantees parents are re-inserted before their children
        let mut remap: HashMap<Index, Index> = HashMap::with_capacity(subtree.len());
        let mut stack = vec![sub_root];
        while let Some(old_idx) = stack.pop() {
            let Some(node) = subtree.arena.get(old_idx) else {
                continue;
            };
            let new_parent = if old_idx == sub_root {
                parent_idx
            } else {
                node.parent
                    .and_then(|old_parent| remap.get(&old_parent).copied())
                    .unwrap_or(parent_idx)
            };
            let new_idx = self.insert_unchecked(
                node.identifier.clone(),
                node.label.clone(),
                Some(new_parent),
            );
            remap.insert(old_idx, new_idx);
            stack.extend(node.children.iter().rev());
        }
        debug!(pasted = remap.len(), "subtree grafted");
        Ok(())
    }

    pub fn root(&self) -> Option<Index> {
        self.root
    }

    pub fn root_node(&self) -> Option<&TreeNode> {
        self.root.and_then(|idx| self.arena.get(idx))
    }

    pub fn get_node(&self, idx: Index) -> Option<&TreeNode> {
        self.arena.get(idx)
    }

    pub fn get_node_mut(&mut self, idx: Index) -> Option<&mut TreeNode> {
        self.arena.get_mut(idx)
    }

    pub fn get(&self, identifier: &Identifier) -> Option<&TreeNode> {
        self.index.get(identifier).and_then(|&idx| self.arena.get(idx))
    }

    pub fn get_mut(&mut self, identifier: &Identifier) -> Option<&mut TreeNode> {
        let idx = *self.index.get(identifier)?;
        self.arena.get_mut(idx)
    }

    pub fn contains(&self, identifier: &Identifier) -> bool {
        self.index.contains_key(identifier)
    }

    pub fn len(&self) -> usize {
        self.arena.len()
    }

    pub fn is_empty(&self) -> bool {
        self.arena.is_empty()
    }

    /// Child nodes of `identifier` in sibling order.
    pub fn children(&self, identifier: &Identifier) -> DomainResult<Vec<&TreeNode>> {
        let node = self
            .get(identifier)
            .ok_or_else(|| DomainError::NodeNotFound(identifier.clone()))?;
        Ok(node
            .children
            .iter()
            .filter_map(|&idx| self.arena.get(idx))
            .collect())
    }

    /// Parent node of `identifier`, `Ok(None)` for the root.
    pub fn parent(&self, identifier: &Identifier) -> DomainResult<Option<&TreeNode>> {
        let node = self
            .get(identifier)
            .ok_or_else(|| DomainError::NodeNotFound(identifier.clone()))?;
        Ok(node.parent.and_then(|idx| self.arena.get(idx)))
    }

    /// Preorder, left-to-right.
    pub fn iter(&self) -> TreeIterator<'_> {
        TreeIterator::new(self)
    }

    pub fn iter_postorder(&self) -> PostOrderIterator<'_> {
        PostOrderIterator::new(self)
    }

    /// Every node exactly once, in arena order.
    pub fn nodes_mut(&mut self) -> impl Iterator<Item = &mut TreeNode> {
        self.arena.iter_mut().map(|(_, node)| node)
    }

    /// Number of levels: 0 for an empty tree, 1 for a lone root.
    #[instrument(level = "debug", skip(self))]
    pub fn depth(&self) -> usize {
        let mut deepest = 0;
        let mut stack: Vec<(Index, usize)> = self.root.map(|r| (r, 1)).into_iter().collect();
        while let Some((idx, level)) = stack.pop() {
            if let Some(node) = self.get_node(idx) {
                deepest = deepest.max(level);
                stack.extend(node.children.iter().map(|&child| (child, level + 1)));
            }
        }
        deepest
    }

    /// Identifiers of all nodes without children, left to right.
    #[instrument(level = "debug", skip(self))]
    pub fn leaf_nodes(&self) -> Vec<Identifier> {
        self.iter()
            .filter(|(_, node)| node.is_leaf())
            .map(|(_, node)| node.identifier.clone())
            .collect()
    }
}

pub struct TreeIterator<'a> {
    arena: &'a TreeArena,
    stack: Vec<Index>,
}

impl<'a> TreeIterator<'a> {
    fn new(arena: &'a TreeArena) -> Self {
        let mut stack = Vec::new();
        if let Some(root) = arena.root() {
            stack.push(root);
        }
        Self { arena, stack }
    }
}

impl<'a> Iterator for TreeIterator<'a> {
    type Item = (Index, &'a TreeNode);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(current_idx) = self.stack.pop() {
            if let Some(node) = self.arena.get_node(current_idx) {
                // reverse so the leftmost child is popped first
                self.stack.extend(node.children.iter().rev());
                return Some((current_idx, node));
            }
        }
        None
    }
}

pub struct PostOrderIterator<'a> {
    arena: &'a TreeArena,
    stack: Vec<(Index, bool)>,
}

impl<'a> PostOrderIterator<'a> {
    fn new(arena: &'a TreeArena) -> Self {
        let mut stack = Vec::new();
        if let Some(root) = arena.root() {
            stack.push((root, false));
        }
        Self { arena, stack }
    }
}

impl<'a> Iterator for PostOrderIterator<'a> {
    type Item = (Index, &'a TreeNode);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some((current_idx, visited)) = self.stack.pop() {
            if let Some(node) = self.arena.get_node(current_idx) {
                if !visited {
                    self.stack.push((current_idx, true));
                    for &child in node.children.iter().rev() {
                        self.stack.push((child, false));
                    }
                } else {
                    return Some((current_idx, node));
                }
            }
        }
        None
    }
}
