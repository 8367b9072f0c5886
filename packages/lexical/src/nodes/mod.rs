//! Typed Lexical nodes.
//!
//! Every node kind implements [`Node`]. Kinds that extend another kind hold
//! it as a field (a link holds an element, an autolink holds a link) and
//! delegate to it explicitly.

mod autolink;
mod base;
mod collect;
mod element;
mod link;
mod paragraph;
mod root;
mod text;

use std::any::Any;
use std::fmt;

use serde_json::Value;

use crate::error::Result;
use crate::registry::{DecodeContext, Decoder};

pub use autolink::AutoLinkNode;
pub use base::BaseNode;
pub use collect::{find, FoundNodes};
pub use element::{Direction, ElementFormat, ElementNode};
pub use link::LinkNode;
pub use paragraph::ParagraphNode;
pub use root::RootNode;
pub use text::TextNode;

/// Function building a node of one kind from its untyped object.
pub type DecodeFn = fn(&Value, &Decoder<'_>, &DecodeContext) -> Result<Box<dyn Node>>;

/// Descriptor of a node kind: its `type` tag and how to decode it.
#[derive(Clone, Copy)]
pub struct NodeKind {
    tag: &'static str,
    decode: DecodeFn,
}

impl NodeKind {
    #[must_use]
    pub const fn new(tag: &'static str, decode: DecodeFn) -> Self {
        Self { tag, decode }
    }

    #[must_use]
    pub fn tag(&self) -> &'static str {
        self.tag
    }

    /// Decode a node object of this kind.
    ///
    /// # Errors
    /// Whatever the kind's decode function reports.
    pub fn decode(
        &self,
        value: &Value,
        decoder: &Decoder<'_>,
        context: &DecodeContext,
    ) -> Result<Box<dyn Node>> {
        (self.decode)(value, decoder, context)
    }

    /// Returns true if both descriptors decode through the same function.
    #[must_use]
    pub fn same_decoder(&self, other: &NodeKind) -> bool {
        self.decode as usize == other.decode as usize
    }
}

impl PartialEq for NodeKind {
    fn eq(&self, other: &Self) -> bool {
        self.tag == other.tag && self.same_decoder(other)
    }
}

impl Eq for NodeKind {}

impl fmt::Debug for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NodeKind").field("tag", &self.tag).finish()
    }
}

/// Capabilities shared by every node kind.
pub trait Node: fmt::Debug + Send + Sync + Any {
    /// The kind this node was decoded as.
    fn kind(&self) -> NodeKind;

    /// The kind's `type` tag.
    fn tag(&self) -> &'static str {
        self.kind().tag()
    }

    /// Check the node's invariants, then its children's, stopping at the
    /// first violation. `path` locates the node in error messages.
    ///
    /// # Errors
    /// Returns `ValidationViolation` for the first broken invariant.
    fn validate(&self, path: &str) -> Result<()>;

    /// Number of text characters beneath this node.
    fn text_content_size(&self) -> usize {
        self.children()
            .iter()
            .map(|child| child.text_content_size())
            .sum()
    }

    /// Child nodes in document order.
    fn children(&self) -> &[Box<dyn Node>] {
        &[]
    }

    fn as_any(&self) -> &dyn Any;
}

impl dyn Node {
    /// Validate this node as the top of a tree.
    ///
    /// # Errors
    /// Returns `ValidationViolation` for the first broken invariant.
    pub fn valid(&self) -> Result<()> {
        self.validate("")
    }

    /// Visit this node and its descendants in pre-order, appending every node
    /// whose tag is in `tags` to `found[tag]`.
    pub fn collect_into<'a>(&'a self, tags: &[&str], found: &mut FoundNodes<'a>) {
        let tag = self.tag();
        if tags.contains(&tag) {
            found.entry(tag.to_string()).or_default().push(self);
        }

        for child in self.children() {
            child.collect_into(tags, found);
        }
    }

    /// Returns the node as a concrete kind, if it is one.
    #[must_use]
    pub fn downcast_ref<T: Node>(&self) -> Option<&T> {
        self.as_any().downcast_ref::<T>()
    }

    #[must_use]
    pub fn is<T: Node>(&self) -> bool {
        self.as_any().is::<T>()
    }
}

/// Path of the child at `index` below the node at `path`.
pub(crate) fn child_path(path: &str, index: usize) -> String {
    format!("{path}/children/{index}")
}
