//! Element nodes: the generic container kind.

use std::any::Any;
use std::fmt;
use std::str::FromStr;

use serde::Deserialize;
use serde_json::Value;

use super::base::null_as_default;
use super::{child_path, BaseNode, Node, NodeKind};
use crate::error::{LexicalError, Result, Violation};
use crate::registry::{DecodeContext, Decoder};

/// Text direction of an element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Ltr,
    Rtl,
}

impl FromStr for Direction {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "ltr" => Ok(Self::Ltr),
            "rtl" => Ok(Self::Rtl),
            _ => Err(format!("Invalid direction: {s}")),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ltr => write!(f, "ltr"),
            Self::Rtl => write!(f, "rtl"),
        }
    }
}

/// Block alignment of an element. The empty string on the wire means `None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ElementFormat {
    Left,
    Start,
    Center,
    Right,
    End,
    Justify,
    #[default]
    None,
}

impl FromStr for ElementFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "left" => Ok(Self::Left),
            "start" => Ok(Self::Start),
            "center" => Ok(Self::Center),
            "right" => Ok(Self::Right),
            "end" => Ok(Self::End),
            "justify" => Ok(Self::Justify),
            "" => Ok(Self::None),
            _ => Err(format!("Invalid element format: {s}")),
        }
    }
}

impl fmt::Display for ElementFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Left => "left",
            Self::Start => "start",
            Self::Center => "center",
            Self::Right => "right",
            Self::End => "end",
            Self::Justify => "justify",
            Self::None => "",
        };
        f.write_str(s)
    }
}

/// A container node holding an ordered list of children.
///
/// `direction` and `format` keep the raw wire strings so that a document with
/// an unknown value still decodes; [`Node::validate`] rejects it afterwards.
#[derive(Debug, Default)]
pub struct ElementNode {
    pub base: BaseNode,
    /// Children in document order.
    pub children: Vec<Box<dyn Node>>,
    pub direction: Option<String>,
    pub format: String,
    pub indent: u32,
}

#[derive(Deserialize)]
struct ElementFields {
    #[serde(default)]
    direction: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    format: String,
    #[serde(default, deserialize_with = "null_as_default")]
    indent: u32,
}

impl ElementNode {
    pub const TAG: &'static str = "element";
    pub const KIND: NodeKind = NodeKind::new(Self::TAG, Self::decode_node);

    /// Decode the element fields and children of a node object.
    ///
    /// Kinds built on elements call this with their own object, so the base
    /// tag is the wire tag of the outer kind.
    ///
    /// # Errors
    /// Returns `MalformedFields` for badly shaped fields, or the first error
    /// raised while decoding a child.
    pub fn decode(value: &Value, decoder: &Decoder<'_>, context: &DecodeContext) -> Result<Self> {
        let base = BaseNode::decode(value, decoder, context)?;
        let fields: ElementFields = decoder.decode_fields(value, &base.tag, context)?;
        let children = decoder.decode_children(value, &base.tag, context)?;

        Ok(Self {
            base,
            children,
            direction: fields.direction,
            format: fields.format,
            indent: fields.indent,
        })
    }

    /// [`crate::nodes::DecodeFn`] for element nodes.
    ///
    /// # Errors
    /// See [`ElementNode::decode`].
    pub fn decode_node(
        value: &Value,
        decoder: &Decoder<'_>,
        context: &DecodeContext,
    ) -> Result<Box<dyn Node>> {
        Ok(Box::new(Self::decode(value, decoder, context)?))
    }

    /// Parsed direction, `None` when absent or not a known value.
    #[must_use]
    pub fn direction(&self) -> Option<Direction> {
        self.direction.as_deref().and_then(|d| d.parse().ok())
    }

    /// Parsed format, `None` when not a known value.
    #[must_use]
    pub fn format(&self) -> Option<ElementFormat> {
        self.format.parse().ok()
    }

    /// Check element invariants for a node of kind `tag`, then validate the
    /// children in order.
    pub(crate) fn validate_as(&self, tag: &str, path: &str) -> Result<()> {
        if let Some(direction) = &self.direction {
            if direction.parse::<Direction>().is_err() {
                return Err(LexicalError::violation(
                    tag,
                    path,
                    Violation::InvalidDirection(direction.clone()),
                ));
            }
        }

        if self.format.parse::<ElementFormat>().is_err() {
            return Err(LexicalError::violation(
                tag,
                path,
                Violation::InvalidFormat(self.format.clone()),
            ));
        }

        for (index, child) in self.children.iter().enumerate() {
            child.validate(&child_path(path, index))?;
        }

        Ok(())
    }
}

impl Node for ElementNode {
    fn kind(&self) -> NodeKind {
        Self::KIND
    }

    fn validate(&self, path: &str) -> Result<()> {
        self.validate_as(Self::TAG, path)
    }

    fn children(&self) -> &[Box<dyn Node>] {
        &self.children
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}
