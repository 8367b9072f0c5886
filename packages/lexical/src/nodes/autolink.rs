//! Autolink nodes: links created by URL detection.

use std::any::Any;

use serde::Deserialize;
use serde_json::Value;

use super::{LinkNode, Node, NodeKind};
use crate::error::Result;
use crate::registry::{DecodeContext, Decoder};

/// A link the editor created from a detected URL.
#[derive(Debug, Default)]
pub struct AutoLinkNode {
    pub link: LinkNode,
    /// Set once the user removed the link but the URL text stayed.
    pub is_unlinked: bool,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct AutoLinkFields {
    #[serde(default)]
    is_unlinked: bool,
}

impl AutoLinkNode {
    pub const TAG: &'static str = "autolink";
    pub const KIND: NodeKind = NodeKind::new(Self::TAG, Self::decode_node);

    /// Decode an autolink node object.
    ///
    /// # Errors
    /// Same as [`LinkNode::decode`], plus `MalformedFields` if `isUnlinked`
    /// is not a boolean.
    pub fn decode(value: &Value, decoder: &Decoder<'_>, context: &DecodeContext) -> Result<Self> {
        let link = LinkNode::decode(value, decoder, context)?;
        let fields: AutoLinkFields =
            decoder.decode_fields(value, &link.element.base.tag, context)?;

        Ok(Self {
            link,
            is_unlinked: fields.is_unlinked,
        })
    }

    /// [`crate::nodes::DecodeFn`] for autolink nodes.
    ///
    /// # Errors
    /// See [`AutoLinkNode::decode`].
    pub fn decode_node(
        value: &Value,
        decoder: &Decoder<'_>,
        context: &DecodeContext,
    ) -> Result<Box<dyn Node>> {
        Ok(Box::new(Self::decode(value, decoder, context)?))
    }
}

impl Node for AutoLinkNode {
    fn kind(&self) -> NodeKind {
        Self::KIND
    }

    fn validate(&self, path: &str) -> Result<()> {
        self.link.validate_as(Self::TAG, path)
    }

    fn children(&self) -> &[Box<dyn Node>] {
        &self.link.element.children
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{LexicalError, Violation};
    use crate::nodes::TextNode;
    use crate::registry::NodeRegistry;
    use serde_json::json;

    fn decode(value: Value) -> Result<AutoLinkNode> {
        let registry: NodeRegistry = [TextNode::KIND].into_iter().collect();
        let decoder = Decoder::new(&registry);
        AutoLinkNode::decode(&value, &decoder, &DecodeContext::new())
    }

    #[test]
    fn test_autolink_decode() {
        let autolink = decode(json!({
            "type": "autolink",
            "version": 1,
            "url": "https://www.google.com",
            "rel": null,
            "target": null,
            "title": null,
            "isUnlinked": true,
            "children": [{"type": "text", "text": "www.google.com"}],
        }))
        .unwrap();

        assert!(autolink.is_unlinked);
        assert_eq!(autolink.link.url, "https://www.google.com");
        assert_eq!(autolink.tag(), "autolink");
        assert!(autolink.validate("").is_ok());
        assert_eq!(autolink.text_content_size(), 14);
    }

    #[test]
    fn test_autolink_is_unlinked_defaults_false() {
        let autolink = decode(json!({"type": "autolink", "url": "u"})).unwrap();
        assert!(!autolink.is_unlinked);
    }

    #[test]
    fn test_autolink_inherits_link_rules() {
        let autolink = decode(json!({"type": "autolink", "url": "u", "children": []})).unwrap();
        let err = autolink.validate("/p").unwrap_err();
        match err {
            LexicalError::ValidationViolation { tag, path, violation } => {
                assert_eq!(tag, "autolink");
                assert_eq!(path, "/p");
                assert_eq!(violation, Violation::LinkChildCount(0));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_autolink_malformed_flag() {
        let err = decode(json!({"type": "autolink", "url": "u", "isUnlinked": "yes"})).unwrap_err();
        assert!(matches!(err, LexicalError::MalformedFields { .. }));
    }
}
