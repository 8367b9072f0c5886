//! Collecting nodes of requested kinds from a tree.

use std::collections::HashMap;

use super::Node;

/// Nodes found per tag, each list in document order.
pub type FoundNodes<'a> = HashMap<String, Vec<&'a (dyn Node + 'static)>>;

/// Find every node beneath and including `node` whose tag is requested.
///
/// The whole tree is always traversed. Tags without a match get no entry.
///
/// # Examples
/// ```
/// use lexical::nodes::find;
/// use lexical::registry::{create_default_registry, Decoder};
/// use serde_json::json;
///
/// let registry = create_default_registry();
/// let node = Decoder::new(&registry).decode(&json!({
///     "type": "paragraph",
///     "children": [{"type": "text", "text": "hi"}, {"type": "text", "text": "!"}],
/// }))?;
///
/// let found = find(node.as_ref(), ["text", "link"]);
/// assert_eq!(found["text"].len(), 2);
/// assert!(!found.contains_key("link"));
/// # Ok::<(), lexical::LexicalError>(())
/// ```
pub fn find<'a, I, S>(node: &'a (dyn Node + 'static), tags: I) -> FoundNodes<'a>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let tags: Vec<S> = tags.into_iter().collect();
    let tags: Vec<&str> = tags.iter().map(AsRef::as_ref).collect();

    let mut found = FoundNodes::new();
    if !tags.is_empty() {
        node.collect_into(&tags, &mut found);
    }
    found
}
