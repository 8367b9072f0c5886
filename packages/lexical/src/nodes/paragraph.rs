//! Paragraph nodes.

use std::any::Any;

use serde::Deserialize;
use serde_json::Value;

use super::base::null_as_default;
use super::{ElementNode, Node, NodeKind};
use crate::error::Result;
use crate::registry::{DecodeContext, Decoder};

/// A block of inline content.
#[derive(Debug, Default)]
pub struct ParagraphNode {
    pub element: ElementNode,
    /// Format flags applied to text typed into an empty paragraph (bitmask).
    pub text_format: i64,
    pub text_style: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ParagraphFields {
    #[serde(default, deserialize_with = "null_as_default")]
    text_format: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    text_style: String,
}

impl ParagraphNode {
    pub const TAG: &'static str = "paragraph";
    pub const KIND: NodeKind = NodeKind::new(Self::TAG, Self::decode_node);

    /// Decode a paragraph node object.
    ///
    /// # Errors
    /// Returns `MalformedFields` for badly shaped fields, or the first error
    /// raised while decoding a child.
    pub fn decode(value: &Value, decoder: &Decoder<'_>, context: &DecodeContext) -> Result<Self> {
        let element = ElementNode::decode(value, decoder, context)?;
        let fields: ParagraphFields =
            decoder.decode_fields(value, &element.base.tag, context)?;

        Ok(Self {
            element,
            text_format: fields.text_format,
            text_style: fields.text_style,
        })
    }

    /// [`crate::nodes::DecodeFn`] for paragraph nodes.
    ///
    /// # Errors
    /// See [`ParagraphNode::decode`].
    pub fn decode_node(
        value: &Value,
        decoder: &Decoder<'_>,
        context: &DecodeContext,
    ) -> Result<Box<dyn Node>> {
        Ok(Box::new(Self::decode(value, decoder, context)?))
    }
}

impl Node for ParagraphNode {
    fn kind(&self) -> NodeKind {
        Self::KIND
    }

    fn validate(&self, path: &str) -> Result<()> {
        self.element.validate_as(Self::TAG, path)
    }

    fn children(&self) -> &[Box<dyn Node>] {
        &self.element.children
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

    fn decode(value: Value) -> Result<ParagraphNode> {
        let registry: NodeRegistry = [TextNode::KIND].into_iter().collect();
        let decoder = Decoder::new(&registry);
        ParagraphNode::decode(&value, &decoder, &DecodeContext::new())
    }

    #[test]
    fn test_paragraph_decode() {
        let paragraph = decode(json!({
            "type": "paragraph",
            "version": 1,
            "direction": "ltr",
            "format": "",
            "indent": 0,
            "textFormat": 1,
            "textStyle": "style",
            "children": [{"type": "text", "text": "asdf"}],
        }))
        .unwrap();

        assert_eq!(paragraph.text_format, 1);
        assert_eq!(paragraph.text_style, "style");
        assert_eq!(paragraph.children().len(), 1);
        assert_eq!(paragraph.text_content_size(), 4);
        assert!(paragraph.validate("").is_ok());
    }

    #[test]
    fn test_paragraph_reports_own_tag() {
        let paragraph = decode(json!({"type": "paragraph", "direction": "lrt"})).unwrap();
        let err = paragraph.validate("/root/children/0").unwrap_err();
        match err {
            LexicalError::ValidationViolation { tag, path, violation } => {
                assert_eq!(tag, "paragraph");
                assert_eq!(path, "/root/children/0");
                assert_eq!(violation, Violation::InvalidDirection("lrt".to_string()));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_paragraph_null_style_and_negative_format() {
        let paragraph = decode(json!({
            "type": "paragraph",
            "format": null,
            "textFormat": -1,
            "textStyle": null,
        }))
        .unwrap();

        assert_eq!(paragraph.text_format, -1);
        assert_eq!(paragraph.text_style, "");
        assert_eq!(paragraph.element.format, "");
        assert!(paragraph.validate("").is_ok());
    }
}
