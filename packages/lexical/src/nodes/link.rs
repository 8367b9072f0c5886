//! Link nodes: elements pointing at a URL.

use std::any::Any;

use serde::Deserialize;
use serde_json::Value;

use super::{ElementNode, Node, NodeKind, TextNode};
use crate::error::{LexicalError, Result, Violation};
use crate::registry::{DecodeContext, Decoder};

/// An element wrapping exactly one text node with a link target.
#[derive(Debug, Default)]
pub struct LinkNode {
    pub element: ElementNode,
    pub url: String,
    pub rel: Option<String>,
    pub target: Option<String>,
    pub title: Option<String>,
}

#[derive(Deserialize)]
struct LinkFields {
    url: String,
    #[serde(default)]
    rel: Option<String>,
    #[serde(default)]
    target: Option<String>,
    #[serde(default)]
    title: Option<String>,
}

impl LinkNode {
    pub const TAG: &'static str = "link";
    pub const KIND: NodeKind = NodeKind::new(Self::TAG, Self::decode_node);

    /// Decode a link node object.
    ///
    /// # Errors
    /// Returns `MalformedFields` if `url` is missing or a field has the wrong
    /// shape, or the first error raised while decoding a child.
    pub fn decode(value: &Value, decoder: &Decoder<'_>, context: &DecodeContext) -> Result<Self> {
        let element = ElementNode::decode(value, decoder, context)?;
        let fields: LinkFields = decoder.decode_fields(value, &element.base.tag, context)?;

        Ok(Self {
            element,
            url: fields.url,
            rel: fields.rel,
            target: fields.target,
            title: fields.title,
        })
    }

    /// [`crate::nodes::DecodeFn`] for link nodes.
    ///
    /// # Errors
    /// See [`LinkNode::decode`].
    pub fn decode_node(
        value: &Value,
        decoder: &Decoder<'_>,
        context: &DecodeContext,
    ) -> Result<Box<dyn Node>> {
        Ok(Box::new(Self::decode(value, decoder, context)?))
    }

    /// Element checks, then the single-text-child rule, reported against `tag`.
    pub(crate) fn validate_as(&self, tag: &str, path: &str) -> Result<()> {
        self.element.validate_as(tag, path)?;

        match self.element.children.as_slice() {
            [child] if child.tag() == TextNode::TAG => Ok(()),
            [child] => Err(LexicalError::violation(
                tag,
                path,
                Violation::LinkChildKind(child.tag().to_string()),
            )),
            children => Err(LexicalError::violation(
                tag,
                path,
                Violation::LinkChildCount(children.len()),
            )),
        }
    }
}

impl Node for LinkNode {
    fn kind(&self) -> NodeKind {
        Self::KIND
    }

    fn validate(&self, path: &str) -> Result<()> {
        self.validate_as(Self::TAG, path)
    }

    fn children(&self) -> &[Box<dyn Node>] {
        &self.element.children
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}
