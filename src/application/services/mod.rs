//! Application services

pub mod random_tree;

pub use random_tree::{LabeledTree, RandomTreeService};
