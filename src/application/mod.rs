//! Application layer: services and use cases
//!
//! This layer orchestrates domain logic using loaded settings.

pub mod error;
pub mod services;

pub use error::{ApplicationError, ApplicationResult};
pub use services::{LabeledTree, RandomTreeService};
