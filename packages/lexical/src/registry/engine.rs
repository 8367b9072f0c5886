//! Decode engine that builds typed node trees using the registry.

use serde::de::{DeserializeOwned, Error as _, Unexpected};
use serde_json::Value;

use super::core::NodeRegistry;
use crate::config::{DecodeConfig, CHILDREN_FIELD, TYPE_FIELD};
use crate::error::{pointer, LexicalError, Result};
use crate::nodes::{child_path, Node, RootNode};

/// Position of the node currently being decoded.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DecodeContext {
    /// Path from the document to the node, e.g. `/root/children/0`.
    path: String,

    /// Number of container levels above the node.
    depth: usize,
}

impl DecodeContext {
    /// Create a context for a node decoded on its own.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Context for a named field of the current node, at the same depth.
    #[must_use]
    pub fn field(&self, name: &str) -> Self {
        Self {
            path: format!("{}/{name}", self.path),
            depth: self.depth,
        }
    }

    /// Context for the child at `index`, one level deeper.
    #[must_use]
    pub fn child(&self, index: usize) -> Self {
        Self {
            path: child_path(&self.path, index),
            depth: self.depth + 1,
        }
    }

    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    #[must_use]
    pub fn depth(&self) -> usize {
        self.depth
    }
}

/// Engine that turns untyped node objects into typed nodes.
///
/// The engine reads the `type` discriminator, resolves it through the
/// registry and hands the object to the kind's decode function. Container
/// kinds call back into the engine for their children, so any registered
/// kind may appear anywhere in the tree. The first failure anywhere aborts
/// the whole decode.
#[derive(Debug, Clone, Copy)]
pub struct Decoder<'r> {
    registry: &'r NodeRegistry,
    config: DecodeConfig,
}

impl<'r> Decoder<'r> {
    /// Create a decoder with default settings.
    #[must_use]
    pub fn new(registry: &'r NodeRegistry) -> Self {
        Self::with_config(registry, DecodeConfig::default())
    }

    /// Create a decoder with explicit settings.
    #[must_use]
    pub fn with_config(registry: &'r NodeRegistry, config: DecodeConfig) -> Self {
        Self { registry, config }
    }

    /// Get a reference to the underlying registry.
    #[must_use]
    pub fn registry(&self) -> &'r NodeRegistry {
        self.registry
    }

    #[must_use]
    pub fn config(&self) -> DecodeConfig {
        self.config
    }

    /// Decode a single node object and its subtree.
    ///
    /// # Errors
    /// See [`Decoder::decode_node`].
    pub fn decode(&self, value: &Value) -> Result<Box<dyn Node>> {
        self.decode_node(value, &DecodeContext::new())
    }

    /// Decode a node object at the given position.
    ///
    /// # Errors
    /// * `DepthExceeded` if the node sits below the configured depth limit
    /// * `MissingDiscriminator` if the value has no string `type` field
    /// * `UnregisteredType` if the registry has no kind for the tag
    /// * whatever the kind's decode function returns for its fields and children
    pub fn decode_node(&self, value: &Value, context: &DecodeContext) -> Result<Box<dyn Node>> {
        if context.depth() > self.config.max_depth {
            return Err(LexicalError::DepthExceeded {
                max_depth: self.config.max_depth,
                path: pointer(context.path()),
            });
        }

        let tag = value
            .get(TYPE_FIELD)
            .and_then(Value::as_str)
            .ok_or_else(|| LexicalError::MissingDiscriminator {
                path: pointer(context.path()),
            })?;

        let kind = self
            .registry
            .lookup(tag)
            .ok_or_else(|| LexicalError::UnregisteredType {
                tag: tag.to_string(),
                path: pointer(context.path()),
            })?;

        tracing::trace!(tag, path = context.path(), "Decoding node");
        kind.decode(value, self, context)
    }

    /// Decode the `children` array of a container node, in document order.
    ///
    /// A missing or `null` field yields no children.
    ///
    /// # Errors
    /// Returns `MalformedFields` if the field is not an array, otherwise the
    /// first error raised by any child.
    pub fn decode_children(
        &self,
        value: &Value,
        tag: &str,
        context: &DecodeContext,
    ) -> Result<Vec<Box<dyn Node>>> {
        match value.get(CHILDREN_FIELD) {
            None | Some(Value::Null) => Ok(Vec::new()),
            Some(Value::Array(items)) => items
                .iter()
                .enumerate()
                .map(|(index, item)| self.decode_node(item, &context.child(index)))
                .collect(),
            Some(other) => Err(LexicalError::MalformedFields {
                tag: tag.to_string(),
                path: pointer(&context.field(CHILDREN_FIELD).path),
                source: serde_json::Error::invalid_type(unexpected(other), &"an array of nodes"),
            }),
        }
    }

    /// Transfer the named fields of a node object into a typed record.
    ///
    /// Fields the record does not declare are ignored.
    ///
    /// # Errors
    /// Returns `MalformedFields` if a required field is missing or a field has
    /// the wrong shape.
    pub fn decode_fields<T: DeserializeOwned>(
        &self,
        value: &Value,
        tag: &str,
        context: &DecodeContext,
    ) -> Result<T> {
        T::deserialize(value).map_err(|source| LexicalError::MalformedFields {
            tag: tag.to_string(),
            path: pointer(context.path()),
            source,
        })
    }

    /// Decode a document envelope value (`{"root": {...}}`).
    ///
    /// # Errors
    /// See [`RootNode::decode`].
    pub fn decode_root(&self, value: &Value) -> Result<RootNode> {
        RootNode::decode(value, self)
    }

    /// Parse document text and decode its envelope.
    ///
    /// # Errors
    /// Returns `Json` if the text is not valid JSON, otherwise any decode error.
    pub fn decode_document(&self, json: &str) -> Result<RootNode> {
        let value: Value = serde_json::from_str(json)?;
        let root = self.decode_root(&value)?;
        tracing::debug!(
            children = root.root.children.len(),
            "Decoded document"
        );
        Ok(root)
    }
}

fn unexpected(value: &Value) -> Unexpected<'_> {
    match value {
        Value::Null => Unexpected::Unit,
        Value::Bool(b) => Unexpected::Bool(*b),
        Value::Number(_) => Unexpected::Other("number"),
        Value::String(s) => Unexpected::Str(s),
        Value::Array(_) => Unexpected::Seq,
        Value::Object(_) => Unexpected::Map,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nodes::{ElementNode, ParagraphNode, TextNode};
    use serde_json::json;

    fn registry() -> NodeRegistry {
        [TextNode::KIND, ParagraphNode::KIND, ElementNode::KIND]
            .into_iter()
            .collect()
    }

    fn text(content: &str) -> Value {
        json!({"type": "text", "version": 1, "text": content, "detail": 0, "format": 0, "mode": "normal", "style": ""})
    }

    #[test]
    fn test_context_paths() {
        let ctx = DecodeContext::new().field("root").child(2).child(0);
        assert_eq!(ctx.path(), "/root/children/2/children/0");
        assert_eq!(ctx.depth(), 2);
    }

    #[test]
    fn test_engine_decode_registered() {
        let registry = registry();
        let decoder = Decoder::new(&registry);

        let node = decoder.decode(&text("hello")).unwrap();
        assert_eq!(node.tag(), "text");
        assert_eq!(node.text_content_size(), 5);
    }

    #[test]
    fn test_engine_missing_discriminator() {
        let registry = registry();
        let decoder = Decoder::new(&registry);

        for value in [json!({"text": "x"}), json!({"type": 7}), json!("text"), json!(null)] {
            let err = decoder.decode(&value).unwrap_err();
            assert!(
                matches!(err, LexicalError::MissingDiscriminator { ref path } if path == "/"),
                "unexpected error: {err}"
            );
        }
    }

    #[test]
    fn test_engine_unregistered_type() {
        let registry = registry();
        let decoder = Decoder::new(&registry);

        let err = decoder
            .decode(&json!({"type": "heading", "version": 1}))
            .unwrap_err();
        assert!(matches!(err, LexicalError::UnregisteredType { ref tag, .. } if tag == "heading"));
    }

    #[test]
    fn test_engine_unregistered_child_fails_parent() {
        let registry = registry();
        let decoder = Decoder::new(&registry);

        let value = json!({
            "type": "paragraph",
            "version": 1,
            "children": [text("a"), {"type": "autolink", "url": "https://example.com"}],
        });
        let err = decoder.decode(&value).unwrap_err();
        match err {
            LexicalError::UnregisteredType { tag, path } => {
                assert_eq!(tag, "autolink");
                assert_eq!(path, "/children/1");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_engine_children_not_an_array() {
        let registry = registry();
        let decoder = Decoder::new(&registry);

        let err = decoder
            .decode(&json!({"type": "paragraph", "children": "nope"}))
            .unwrap_err();
        match err {
            LexicalError::MalformedFields { tag, path, .. } => {
                assert_eq!(tag, "paragraph");
                assert_eq!(path, "/children");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_engine_null_children_is_empty() {
        let registry = registry();
        let decoder = Decoder::new(&registry);

        let node = decoder
            .decode(&json!({"type": "element", "children": null}))
            .unwrap();
        assert!(node.children().is_empty());
    }

    #[test]
    fn test_engine_depth_limit() {
        let registry = registry();
        let decoder = Decoder::with_config(&registry, DecodeConfig::default().with_max_depth(2));

        let mut value = text("deep");
        for _ in 0..3 {
            value = json!({"type": "element", "children": [value]});
        }

        let err = decoder.decode(&value).unwrap_err();
        match err {
            LexicalError::DepthExceeded { max_depth, path } => {
                assert_eq!(max_depth, 2);
                assert_eq!(path, "/children/0/children/0/children/0");
            }
            other => panic!("unexpected error: {other}"),
        }

        let shallow = json!({"type": "element", "children": [{"type": "element", "children": [text("ok")]}]});
        assert!(decoder.decode(&shallow).is_ok());
    }

    #[test]
    fn test_engine_decode_document_invalid_json() {
        let registry = registry();
        let decoder = Decoder::new(&registry);

        let err = decoder.decode_document("{\"root\":").unwrap_err();
        assert!(matches!(err, LexicalError::Json(_)));
    }
}
