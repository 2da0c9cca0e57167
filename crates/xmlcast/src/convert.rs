//! XML-to-JSON mapping
//!
//! Implements the conventional element-to-object mapping:
//! - the document becomes a single-key object named after the root element;
//! - attributes become prefixed keys (default `@`), in document order, ahead
//!   of any children;
//! - repeated sibling element names promote to an array in first-encounter
//!   order, while a single occurrence stays scalar;
//! - an element with only text collapses to that string; accumulated text is
//!   trimmed and lands under the text key (default `#text`) when the element
//!   also carries attributes or child elements;
//! - an element with no attributes, children, or text maps to `null`.

use tracing::{debug, instrument};

use crate::error::Result;
use crate::json::{Config as JsonConfig, Writer};
use crate::value::{Object, Value};
use crate::xml::model::{Document, Element};
use crate::xml::parser::Parser;

/// Knobs for the element-to-object mapping
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MappingConfig {
    /// Prefix prepended to attribute names
    pub attr_prefix: String,
    /// Key holding text content of mixed elements
    pub text_key: String,
}

impl Default for MappingConfig {
    fn default() -> Self {
        Self {
            attr_prefix: "@".to_string(),
            text_key: "#text".to_string(),
        }
    }
}

/// Options for the full XML-to-JSON conversion
#[derive(Clone, Debug, Default)]
pub struct ConvertOptions {
    pub mapping: MappingConfig,
    pub json: JsonConfig,
}

/// Convert XML text to pretty-printed JSON text with default options
pub fn convert(input: &str) -> Result<String> {
    convert_with_options(input, &ConvertOptions::default())
}

/// Convert XML text to pretty-printed JSON text
#[instrument(skip(input, options))]
pub fn convert_with_options(input: &str, options: &ConvertOptions) -> Result<String> {
    let mut parser = Parser::new(input.as_bytes());
    let doc = parser.parse()?;
    debug!(root = %doc.root.name, "parsed xml document");

    let value = document_to_value_with_config(&doc, &options.mapping);
    let output = Writer::with_config(options.json).write(&value);
    debug!(bytes = output.len(), "serialized json");
    Ok(output)
}

/// Map a parsed document to the generic tree with default mapping
pub fn document_to_value(doc: &Document) -> Value {
    document_to_value_with_config(doc, &MappingConfig::default())
}

/// Map a parsed document to the generic tree
pub fn document_to_value_with_config(doc: &Document, config: &MappingConfig) -> Value {
    let mut root = Object::with_capacity(1);
    root.insert(doc.root.name.clone(), element_to_value(&doc.root, config));
    Value::Object(root)
}

fn element_to_value(element: &Element, config: &MappingConfig) -> Value {
    let mut obj = Object::new();

    for (name, value) in &element.attributes {
        obj.insert(
            format!("{}{}", config.attr_prefix, name),
            Value::String(value.clone()),
        );
    }

    for child in element.child_elements() {
        let value = element_to_value(child, config);
        match obj.get_mut(&child.name) {
            Some(Value::Array(items)) => items.push(value),
            Some(slot) => {
                let first = std::mem::take(slot);
                *slot = Value::Array(vec![first, value].into());
            }
            None => {
                obj.insert(child.name.clone(), value);
            }
        }
    }

    let text = element.text_content();
    if !text.is_empty() {
        if obj.is_empty() {
            return Value::String(text);
        }
        obj.insert(config.text_key.clone(), Value::String(text));
    }

    if obj.is_empty() {
        Value::Null
    } else {
        Value::Object(obj)
    }
}
