/*
Rendering goes through a trait so the same termtree conversion can be offered
for whole trees and for single subtrees rooted at a node.
 */
use std::fmt;

use generational_arena::Index;
use termtree::Tree;

use crate::domain::arena::{TreeArena, TreeNode};

pub trait TreeRender {
    fn to_termtree(&self) -> Tree<String>;
}

/// Label when set, identifier otherwise.
pub fn node_text(node: &TreeNode) -> String {
    match node.label() {
        Some(label) => label.to_string(),
        None => node.identifier().to_string(),
    }
}

impl TreeRender for TreeArena {
    fn to_termtree(&self) -> Tree<String> {
        if let Some(root_idx) = self.root() {
            build_tree(self, root_idx)
        } else {
            Tree::new("Empty tree".to_string())
        }
    }
}

fn build_tree(arena: &TreeArena, node_idx: Index) -> Tree<String> {
    let Some(node) = arena.get_node(node_idx) else {
        return Tree::new(String::new());
    };
    let leaves: Vec<_> = node
        .children()
        .iter()
        .map(|&child_idx| build_tree(arena, child_idx))
        .collect();
    Tree::new(node_text(node)).with_leaves(leaves)
}

impl fmt::Display for TreeArena {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_termtree())
    }
}
