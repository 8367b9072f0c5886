//! Wire-format constants and decode settings.

/// Discriminator field carried by every node object.
pub const TYPE_FIELD: &str = "type";

/// Field holding the ordered child nodes of container kinds.
pub const CHILDREN_FIELD: &str = "children";

/// Single key of the document envelope.
pub const ROOT_FIELD: &str = "root";

/// Default nesting limit for decoding.
///
/// Editor documents rarely nest more than a handful of levels; the limit only
/// exists to turn pathological input into an error instead of a stack overflow.
pub const DEFAULT_MAX_DEPTH: usize = 256;

/// Settings applied by a [`crate::registry::Decoder`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecodeConfig {
    /// Deepest child level accepted below the node being decoded.
    pub max_depth: usize,
}

impl DecodeConfig {
    /// Set the maximum nesting depth.
    #[must_use]
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }
}

impl Default for DecodeConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}
