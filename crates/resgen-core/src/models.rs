//! Generation-time data model: keys, items, descriptors and shards.

use std::fmt;
use std::path::PathBuf;

pub use crate::runtime::{Density, ResourceType, Theme};

// ---------------------------------------------------------------------------
// Qualifiers
// ---------------------------------------------------------------------------

/// Owned counterpart of [`crate::runtime::Qualifier`].
///
/// The derived ordering is the canonical emission order: language, region,
/// theme, density.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Qualifier {
    Language(String),
    Region(String),
    Theme(Theme),
    Density(Density),
}

impl Qualifier {
    /// Category label used in diagnostics.
    pub fn category(&self) -> &'static str {
        match self {
            Qualifier::Language(_) => "language",
            Qualifier::Region(_) => "region",
            Qualifier::Theme(_) => "theme",
            Qualifier::Density(_) => "density",
        }
    }
}

impl fmt::Display for Qualifier {
    /// Renders the qualifier the way it is spelled in a directory name.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Qualifier::Language(l) => f.write_str(l),
            Qualifier::Region(r) => write!(f, "r{r}"),
            Qualifier::Theme(t) => f.write_str(t.as_str()),
            Qualifier::Density(d) => f.write_str(d.as_str()),
        }
    }
}

// ---------------------------------------------------------------------------
// Keys, items, descriptors
// ---------------------------------------------------------------------------

/// Sanitized identifier of a resource within its type namespace.
///
/// Ordering is byte-wise on the identifier, not numeric:
/// `icon_17198 < icon_172 < icon_1720`.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ResourceKey(String);

impl ResourceKey {
    /// Callers must pass an already sanitized identifier; see
    /// [`crate::scanner::sanitize::sanitize_key`].
    pub(crate) fn new_unchecked(value: String) -> Self {
        Self(value)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ResourceKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One concrete file backing a key.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResourceItem {
    /// Sorted in canonical order.
    pub qualifiers: Vec<Qualifier>,
    /// Emitted path: configured prefix plus the path relative to the resource root.
    pub path: String,
    pub content_hash: Option<String>,
    /// Path relative to the resource root, used in diagnostics.
    pub source: String,
    pub absolute: PathBuf,
}

/// A key with every item backing it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResourceDescriptor {
    pub resource_type: ResourceType,
    pub key: ResourceKey,
    /// Sorted by path.
    pub items: Vec<ResourceItem>,
}

impl ResourceDescriptor {
    /// Fully qualified identifier, `"<type>:<key>"`.
    pub fn id(&self) -> String {
        format!("{}:{}", self.resource_type.type_name(), self.key)
    }
}

// ---------------------------------------------------------------------------
// Shards
// ---------------------------------------------------------------------------

/// A contiguous run of one type's sorted descriptors, emitted as one unit.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Shard {
    pub resource_type: ResourceType,
    pub index: usize,
    pub descriptors: Vec<ResourceDescriptor>,
}

impl Shard {
    pub fn len(&self) -> usize {
        self.descriptors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.descriptors.is_empty()
    }

    pub fn first_key(&self) -> Option<&ResourceKey> {
        self.descriptors.first().map(|d| &d.key)
    }

    pub fn last_key(&self) -> Option<&ResourceKey> {
        self.descriptors.last().map(|d| &d.key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &ResourceKey> {
        self.descriptors.iter().map(|d| &d.key)
    }
}
