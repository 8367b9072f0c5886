//! The document envelope.

use serde::de::Error as _;
use serde_json::Value;

use super::{find, ElementNode, FoundNodes, Node};
use crate::config::ROOT_FIELD;
use crate::error::{pointer, LexicalError, Result};
use crate::registry::{DecodeContext, Decoder};

/// A decoded document: `{"root": {...}}`.
///
/// The envelope has no `type` of its own and is never looked up in the
/// registry. Its element is always decoded as an [`ElementNode`]; the
/// element's children go through the registry like any other.
#[derive(Debug, Default)]
pub struct RootNode {
    pub root: ElementNode,
}

impl RootNode {
    /// Decode a document envelope.
    ///
    /// # Errors
    /// Returns `MalformedFields` if the `root` key is missing, otherwise any
    /// error raised while decoding the element and its subtree.
    pub fn decode(value: &Value, decoder: &Decoder<'_>) -> Result<Self> {
        let context = DecodeContext::new().field(ROOT_FIELD);
        let element = value
            .get(ROOT_FIELD)
            .ok_or_else(|| LexicalError::MalformedFields {
                tag: ROOT_FIELD.to_string(),
                path: pointer(""),
                source: serde_json::Error::missing_field(ROOT_FIELD),
            })?;

        Ok(Self {
            root: ElementNode::decode(element, decoder, &context)?,
        })
    }

    /// Validate the whole document.
    ///
    /// # Errors
    /// Returns `ValidationViolation` for the first broken invariant.
    pub fn valid(&self) -> Result<()> {
        self.root.validate(&format!("/{ROOT_FIELD}"))
    }

    /// Number of text characters in the document.
    #[must_use]
    pub fn text_content_size(&self) -> usize {
        self.root.text_content_size()
    }

    /// Find every node in the document whose tag is requested.
    ///
    /// See [`find`].
    pub fn find<I, S>(&self, tags: I) -> FoundNodes<'_>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        find(&self.root, tags)
    }
}
