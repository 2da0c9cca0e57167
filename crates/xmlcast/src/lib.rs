//! xmlcast - XML-to-JSON conversion through an order-preserving document tree
//!
//! # Quick Start
//!
//! ```
//! # fn main() -> Result<(), xmlcast::Error> {
//! let json = xmlcast::convert("<tours><tour>Alps</tour></tours>")?;
//! assert_eq!(json, "{\n  \"tours\": {\n    \"tour\": \"Alps\"\n  }\n}");
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]

pub mod error;
pub use error::{Error, ErrorKind, Pos, Result, Span};

pub mod cursor;
pub use cursor::Cursor;

pub mod value;
pub use value::{Array, Object, Value};

pub mod xml;
pub use xml::{
    Content as XmlContent, Document as XmlDocument, Element as XmlElement, Parser as XmlParser,
};

pub mod json;
pub use json::{Config as JsonConfig, Writer as JsonWriter};

pub mod convert;
pub use convert::{
    convert, convert_with_options, document_to_value, document_to_value_with_config,
    ConvertOptions, MappingConfig,
};

/// Parse XML from string
pub fn from_str(s: &str) -> Result<XmlDocument> {
    let mut parser = XmlParser::new(s.as_bytes());
    parser.parse()
}

/// Parse XML from bytes
pub fn from_bytes(bytes: &[u8]) -> Result<XmlDocument> {
    let mut parser = XmlParser::new(bytes);
    parser.parse()
}

/// Parse XML and map it to the generic tree with default options
pub fn to_value(s: &str) -> Result<Value> {
    let doc = from_str(s)?;
    Ok(document_to_value(&doc))
}
