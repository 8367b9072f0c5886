//! Fields shared by every node kind.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::config::TYPE_FIELD;
use super::ElementNode;
use crate::error::Result;
use crate::registry::{DecodeContext, Decoder};

/// The `type` tag and schema version persisted on every node.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct BaseNode {
    /// Wire discriminator, redundant with the kind's tag. Empty for a
    /// document element that omits it.
    #[serde(rename = "type", default, deserialize_with = "null_as_default")]
    pub tag: String,

    /// Schema version written by the editor; not interpreted here.
    #[serde(default, deserialize_with = "null_as_default")]
    pub version: i64,
}

/// Deserialize a field, reading `null` as the type's default value.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

impl BaseNode {
    /// Decode the base fields of any node object.
    ///
    /// # Errors
    /// Returns `MalformedFields` if `type` is not a string or `version` is
    /// not an integer. Errors for an object without `type` are reported
    /// under the `element` tag.
    pub fn decode(value: &Value, decoder: &Decoder<'_>, context: &DecodeContext) -> Result<Self> {
        let tag = value
            .get(TYPE_FIELD)
            .and_then(Value::as_str)
            .unwrap_or(ElementNode::TAG);
        decoder.decode_fields(value, tag, context)
    }
}
