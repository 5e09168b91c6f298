//! Domain-level errors (no external dependencies)

use thiserror::Error;

use crate::domain::identifier::Identifier;

/// Domain errors represent violations of tree invariants or invalid generation parameters.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("invalid width bounds: min={min}, max={max} (require 1 <= min <= max)")]
    InvalidBounds { min: u32, max: u32 },

    #[error("duplicate identifier: {0}")]
    DuplicateIdentifier(Identifier),

    #[error("cannot attach to missing parent: {0}")]
    Attachment(Identifier),

    #[error("tree already has a root, cannot add parentless node: {0}")]
    RootAlreadySet(Identifier),

    #[error("node not found: {0}")]
    NodeNotFound(Identifier),

    #[error("max depth {max_depth} exceeds limit {limit}")]
    DepthLimit { max_depth: u32, limit: u32 },

    #[error("invalid identifier: {0:?}")]
    InvalidIdentifier(String),
}

/// Result type for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;
