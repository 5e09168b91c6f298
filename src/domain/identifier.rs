//! Hierarchical path identifiers for tree nodes.

use std::fmt;
use std::str::FromStr;

use itertools::Itertools;

use crate::domain::error::DomainError;

/// Root-to-node path, e.g. `(0, 1, 2)` is the third child of the second child of the root.
///
/// The identifier doubles as unique key and structural path: a child's identifier
/// is its parent's identifier with one trailing component appended.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Identifier(Vec<u32>);

impl Identifier {
    pub fn new(components: Vec<u32>) -> Self {
        Self(components)
    }

    /// The default root path `(0)`.
    pub fn root() -> Self {
        Self(vec![0])
    }

    /// Path of the `index`-th child of this node.
    pub fn child(&self, index: u32) -> Self {
        let mut components = Vec::with_capacity(self.0.len() + 1);
        components.extend_from_slice(&self.0);
        components.push(index);
        Self(components)
    }

    /// Path of the parent node, `None` for single-component (root) paths.
    pub fn parent(&self) -> Option<Self> {
        if self.0.len() <= 1 {
            return None;
        }
        Some(Self(self.0[..self.0.len() - 1].to_vec()))
    }

    /// Distance from a single-component root path.
    pub fn depth(&self) -> usize {
        self.0.len().saturating_sub(1)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn components(&self) -> &[u32] {
        &self.0
    }

    pub fn last(&self) -> Option<u32> {
        self.0.last().copied()
    }

    /// True if `other` is exactly one component longer and starts with `self`.
    pub fn is_parent_of(&self, other: &Identifier) -> bool {
        other.0.len() == self.0.len() + 1 && other.0.starts_with(&self.0)
    }
}

impl Default for Identifier {
    fn default() -> Self {
        Self::root()
    }
}

impl From<Vec<u32>> for Identifier {
    fn from(components: Vec<u32>) -> Self {
        Self(components)
    }
}

impl From<&[u32]> for Identifier {
    fn from(components: &[u32]) -> Self {
        Self(components.to_vec())
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({})", self.0.iter().join(", "))
    }
}

/// Accepts `0.1.2`, `0,1,2` and the display form `(0, 1, 2)`.
impl FromStr for Identifier {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let inner = trimmed
            .strip_prefix('(')
            .and_then(|rest| rest.strip_suffix(')'))
            .unwrap_or(trimmed);

        let components = inner
            .split(|c: char| c == '.' || c == ',')
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .map(|part| {
                part.parse::<u32>()
                    .map_err(|_| DomainError::InvalidIdentifier(s.to_string()))
            })
            .collect::<Result<Vec<_>, _>>()?;

        if components.is_empty() {
            return Err(DomainError::InvalidIdentifier(s.to_string()));
        }
        Ok(Self(components))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn given_root_when_child_then_appends_component() {
        let id = Identifier::root().child(1).child(2);
        assert_eq!(id.components(), &[0, 1, 2]);
        assert_eq!(id.depth(), 2);
        assert_eq!(id.parent(), Some(Identifier::new(vec![0, 1])));
    }

    #[test]
    fn given_root_when_parent_then_none() {
        assert_eq!(Identifier::root().parent(), None);
    }

    #[rstest]
    #[case("0", vec![0])]
    #[case("0.1.2", vec![0, 1, 2])]
    #[case("0,1,2", vec![0, 1, 2])]
    #[case("(0, 1, 2)", vec![0, 1, 2])]
    #[case("(0,)", vec![0])]
    fn given_valid_input_when_parse_then_returns_identifier(
        #[case] input: &str,
        #[case] expected: Vec<u32>,
    ) {
        let id: Identifier = input.parse().unwrap();
        assert_eq!(id.components(), expected.as_slice());
    }

    #[rstest]
    #[case("")]
    #[case("()")]
    #[case("0.x")]
    #[case("-1")]
    fn given_invalid_input_when_parse_then_error(#[case] input: &str) {
        let result = input.parse::<Identifier>();
        assert!(matches!(result, Err(DomainError::InvalidIdentifier(_))));
    }

    #[test]
    fn given_identifier_when_display_then_parenthesized() {
        assert_eq!(Identifier::new(vec![0, 1, 2]).to_string(), "(0, 1, 2)");
    }

    #[test]
    fn given_sibling_when_is_parent_of_then_false() {
        let a = Identifier::new(vec![0, 1]);
        assert!(Identifier::root().is_parent_of(&a));
        assert!(!a.is_parent_of(&Identifier::new(vec![0, 2, 0])));
        assert!(!Identifier::root().is_parent_of(&Identifier::new(vec![0, 1, 2])));
    }
}
