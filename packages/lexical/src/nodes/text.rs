//! Text leaf nodes.

use std::any::Any;

use serde::Deserialize;
use serde_json::Value;

use super::base::null_as_default;
use super::{BaseNode, Node, NodeKind};
use crate::error::Result;
use crate::registry::{DecodeContext, Decoder};

/// A run of text with uniform formatting.
///
/// The only node kind that carries character content.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextNode {
    pub base: BaseNode,
    /// Editor detail flags (bitmask).
    pub detail: i64,
    /// Text format flags such as bold or italic (bitmask).
    pub format: i64,
    pub mode: String,
    pub style: String,
    pub text: String,
}

#[derive(Deserialize)]
struct TextFields {
    #[serde(default, deserialize_with = "null_as_default")]
    detail: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    format: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    mode: String,
    #[serde(default, deserialize_with = "null_as_default")]
    style: String,
    #[serde(default, deserialize_with = "null_as_default")]
    text: String,
}

impl TextNode {
    pub const TAG: &'static str = "text";
    pub const KIND: NodeKind = NodeKind::new(Self::TAG, Self::decode_node);

    /// Decode a text node object.
    ///
    /// # Errors
    /// Returns `MalformedFields` if a field has the wrong shape.
    pub fn decode(value: &Value, decoder: &Decoder<'_>, context: &DecodeContext) -> Result<Self> {
        let base = BaseNode::decode(value, decoder, context)?;
        let fields: TextFields = decoder.decode_fields(value, &base.tag, context)?;

        Ok(Self {
            base,
            detail: fields.detail,
            format: fields.format,
            mode: fields.mode,
            style: fields.style,
            text: fields.text,
        })
    }

    /// [`crate::nodes::DecodeFn`] for text nodes.
    ///
    /// # Errors
    /// See [`TextNode::decode`].
    pub fn decode_node(
        value: &Value,
        decoder: &Decoder<'_>,
        context: &DecodeContext,
    ) -> Result<Box<dyn Node>> {
        Ok(Box::new(Self::decode(value, decoder, context)?))
    }
}

impl Node for TextNode {
    fn kind(&self) -> NodeKind {
        Self::KIND
    }

    fn validate(&self, _path: &str) -> Result<()> {
        Ok(())
    }

    fn text_content_size(&self) -> usize {
        self.text.chars().count()
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LexicalError;
    use crate::registry::NodeRegistry;
    use serde_json::json;

    #[test]
    fn test_text_decode() {
        let registry = NodeRegistry::new();
        let decoder = Decoder::new(&registry);

        let node = TextNode::decode(
            &json!({"detail": 0, "format": 1, "mode": "normal", "style": "color: red", "text": "asdf", "type": "text", "version": 1}),
            &decoder,
            &DecodeContext::new(),
        )
        .unwrap();

        assert_eq!(node.base.tag, "text");
        assert_eq!(node.base.version, 1);
        assert_eq!(node.format, 1);
        assert_eq!(node.mode, "normal");
        assert_eq!(node.style, "color: red");
        assert_eq!(node.text, "asdf");
    }

    #[test]
    fn test_text_is_always_valid() {
        let node = TextNode::default();
        assert!(node.validate("/x").is_ok());
    }

    #[test]
    fn test_text_content_size_counts_characters() {
        let node = TextNode {
            text: "héllo ✓".to_string(),
            ..TextNode::default()
        };
        assert_eq!(node.text_content_size(), 7);
    }

    #[test]
    fn test_text_malformed_field() {
        let registry = NodeRegistry::new();
        let decoder = Decoder::new(&registry);

        let err = TextNode::decode(
            &json!({"type": "text", "text": 42}),
            &decoder,
            &DecodeContext::new().field("root"),
        )
        .unwrap_err();
        match err {
            LexicalError::MalformedFields { tag, path, .. } => {
                assert_eq!(tag, "text");
                assert_eq!(path, "/root");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_text_null_and_negative_fields() {
        let registry = NodeRegistry::new();
        let decoder = Decoder::new(&registry);

        let node = TextNode::decode(
            &json!({"type": "text", "detail": -2, "format": -1, "mode": null, "style": null, "text": "a"}),
            &decoder,
            &DecodeContext::new(),
        )
        .unwrap();

        assert_eq!(node.detail, -2);
        assert_eq!(node.format, -1);
        assert_eq!(node.mode, "");
        assert_eq!(node.style, "");
        assert_eq!(node.text, "a");
    }
}
