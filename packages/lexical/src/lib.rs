//! Lexical - typed decoding of Lexical rich-text editor documents.
//!
//! This crate turns the untyped JSON tree saved by the Lexical editor into
//! typed nodes, checks their structural invariants and answers simple
//! queries over the result.
//!
//! # Example
//!
//! ```
//! use lexical::registry::{create_default_registry, Decoder};
//!
//! let registry = create_default_registry();
//! let decoder = Decoder::new(&registry);
//!
//! let document = decoder.decode_document(
//!     r#"{"root":{"type":"root","children":[
//!         {"type":"paragraph","children":[{"type":"text","text":"asdf"}]}
//!     ]}}"#,
//! )?;
//!
//! document.valid()?;
//! assert_eq!(document.text_content_size(), 4);
//! assert_eq!(document.find(["paragraph"])["paragraph"].len(), 1);
//! # Ok::<(), lexical::LexicalError>(())
//! ```
//!
//! # Architecture
//!
//! - [`config`]: Wire-format constants and decode settings
//! - [`error`]: Error types and Result alias
//! - [`registry`]: Tag-to-kind registry and the decode engine
//! - [`nodes`]: The [`Node`] trait, built-in kinds and tree queries

pub mod config;
pub mod error;
pub mod nodes;
pub mod registry;

// Re-export commonly used items
pub use config::DecodeConfig;
pub use error::{LexicalError, Result, Violation};
pub use nodes::{find, Node, NodeKind, RootNode};
pub use registry::{create_default_registry, Decoder, NodeRegistry};
