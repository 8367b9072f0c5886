//! Node registry system for extensible decoding.
//!
//! Node kinds are registered under their `type` tag. The decoder resolves
//! every node object it meets through the registry, so a caller can add kinds
//! without the decoder knowing them in advance.

mod config;
mod core;
mod engine;

pub use config::{builtin_kinds, create_default_registry};
pub use core::NodeRegistry;
pub use engine::{DecodeContext, Decoder};
