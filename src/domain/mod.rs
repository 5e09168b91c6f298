//! Domain layer: tree container, generator and decorator
//!
//! This layer is independent of external concerns (no I/O, no CLI, no config loading).

pub mod arena;
pub mod decorator;
pub mod error;
pub mod generator;
pub mod identifier;
pub mod render;

pub use arena::{TreeArena, TreeNode};
pub use decorator::{concat_label, decorate, decorate_in_place, label_for};
pub use error::{DomainError, DomainResult};
pub use generator::{TreeGenerator, WidthBounds, MAX_DEPTH_LIMIT};
pub use identifier::Identifier;
pub use render::TreeRender;
