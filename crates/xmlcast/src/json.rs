//! JSON serialization of the document tree

pub mod writer;

pub use writer::{Config, Writer};
