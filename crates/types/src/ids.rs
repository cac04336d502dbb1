//! Newtype wrapper for section identifiers.
//!
//! Keeps section keys (e.g. `data-security`, `pillar-3`) from being mixed up with the
//! labels drawn on the page.

use std::fmt;
use std::sync::Arc;

/// An identifier for a named section of the placemat.
#[derive(Debug, Clone, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct SectionId(Arc<str>);

impl SectionId {
    /// Returns the string representation of this section ID
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for SectionId {
    fn from(s: &str) -> Self {
        Self(s.into())
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl PartialEq<&str> for SectionId {
    fn eq(&self, other: &&str) -> bool {
        &*self.0 == *other
    }
}
