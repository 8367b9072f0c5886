//! Node registry for mapping type tags to node kinds.

use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::error::{LexicalError, Result};
use crate::nodes::NodeKind;

/// Registry mapping `type` tags to node kinds.
///
/// Lookups share a read lock, registration and reset take the write lock.
/// A registry is an ordinary value: build one per decode session or share one
/// behind a reference, there is no process-wide instance.
#[derive(Debug)]
pub struct NodeRegistry {
    kinds: RwLock<HashMap<String, NodeKind>>,
}

impl NodeRegistry {
    /// Create a new empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            kinds: RwLock::new(HashMap::new()),
        }
    }

    /// Register a node kind under its tag.
    ///
    /// # Errors
    /// Returns `DuplicateTag` if the tag is already registered; the existing
    /// registration is left untouched.
    pub fn register(&self, kind: NodeKind) -> Result<()> {
        match self.write().entry(kind.tag().to_string()) {
            Entry::Occupied(_) => {
                tracing::warn!(tag = kind.tag(), "Node type already registered");
                Err(LexicalError::DuplicateTag(kind.tag().to_string()))
            }
            Entry::Vacant(slot) => {
                tracing::debug!(tag = kind.tag(), "Registered node type");
                slot.insert(kind);
                Ok(())
            }
        }
    }

    /// Register several kinds in order.
    ///
    /// # Errors
    /// Stops at the first `DuplicateTag`. Kinds registered before the failing
    /// one stay registered.
    pub fn register_all(&self, kinds: impl IntoIterator<Item = NodeKind>) -> Result<()> {
        for kind in kinds {
            self.register(kind)?;
        }
        Ok(())
    }

    /// Look up the kind registered for a tag.
    #[must_use]
    pub fn lookup(&self, tag: &str) -> Option<NodeKind> {
        self.read().get(tag).copied()
    }

    /// Check if a kind is registered for a tag.
    #[must_use]
    pub fn contains(&self, tag: &str) -> bool {
        self.read().contains_key(tag)
    }

    /// Remove every registration.
    ///
    /// Decodes running against this registry while it is reset may see some
    /// tags resolve and later ones fail; serialize resets against decoding.
    pub fn reset(&self) {
        let mut kinds = self.write();
        tracing::debug!(removed = kinds.len(), "Reset node registry");
        *kinds = HashMap::new();
    }

    /// Number of registered kinds.
    #[must_use]
    pub fn len(&self) -> usize {
        self.read().len()
    }

    /// Returns true if nothing is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    /// Registered tags in sorted order.
    #[must_use]
    pub fn registered_tags(&self) -> Vec<String> {
        let mut tags: Vec<String> = self.read().keys().cloned().collect();
        tags.sort();
        tags
    }

    // Writers never panic mid-update, so a poisoned map is still consistent.
    fn read(&self) -> RwLockReadGuard<'_, HashMap<String, NodeKind>> {
        self.kinds.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, HashMap<String, NodeKind>> {
        self.kinds.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for NodeRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Collect kinds into a registry. When two kinds share a tag the first wins,
/// matching [`NodeRegistry::register`].
impl FromIterator<NodeKind> for NodeRegistry {
    fn from_iter<I: IntoIterator<Item = NodeKind>>(iter: I) -> Self {
        let mut kinds = HashMap::new();
        for kind in iter {
            kinds.entry(kind.tag().to_string()).or_insert(kind);
        }
        Self {
            kinds: RwLock::new(kinds),
        }
    }
}
