//! Random ordered trees keyed by hierarchical path identifiers.
//!
//! ```no_run
//! use randtree::domain::{concat_label, decorate, Identifier, TreeGenerator, WidthBounds};
//!
//! let mut generator = TreeGenerator::seeded(42);
//! let tree = generator
//!     .generate(3, WidthBounds::new(1, 2).unwrap(), &Identifier::root())
//!     .unwrap();
//! let labeled = decorate(&tree, concat_label).unwrap();
//! println!("{}", labeled);
//! ```

pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod exitcode;
pub mod util;
