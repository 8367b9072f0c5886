//! Registry configuration for the built-in Lexical node kinds.

use super::core::NodeRegistry;
use crate::nodes::{AutoLinkNode, ElementNode, LinkNode, NodeKind, ParagraphNode, TextNode};

/// Node kinds shipped with this crate.
///
/// The document envelope is not a kind and is never registered.
#[must_use]
pub fn builtin_kinds() -> [NodeKind; 5] {
    [
        TextNode::KIND,
        ElementNode::KIND,
        LinkNode::KIND,
        AutoLinkNode::KIND,
        ParagraphNode::KIND,
    ]
}

/// Create a registry with every built-in node kind.
#[must_use]
pub fn create_default_registry() -> NodeRegistry {
    builtin_kinds().into_iter().collect()
}
