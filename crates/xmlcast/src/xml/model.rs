//! XML document model

use indexmap::IndexMap;

/// A well-formed XML document: exactly one root element
#[derive(Clone, Debug, PartialEq)]
pub struct Document {
    pub root: Element,
}

/// An XML element: tag name, attributes in document order, ordered children
#[derive(Clone, Debug, PartialEq)]
pub struct Element {
    pub name: String,
    pub attributes: IndexMap<String, String>,
    pub children: Vec<Content>,
}

impl Element {
    /// Create an element with no attributes or children
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attributes: IndexMap::new(),
            children: Vec::new(),
        }
    }

    /// Iterator over the child elements, skipping text nodes
    pub fn child_elements(&self) -> impl Iterator<Item = &Element> {
        self.children.iter().filter_map(|child| match child {
            Content::Element(element) => Some(element),
            Content::Text(_) => None,
        })
    }

    /// Concatenated text content of the element's direct text children,
    /// trimmed of surrounding whitespace
    pub fn text_content(&self) -> String {
        let mut text = String::new();
        for child in &self.children {
            if let Content::Text(value) = child {
                text.push_str(value);
            }
        }
        text.trim().to_string()
    }
}

/// Element content node: a nested element or character data
///
/// CDATA sections are captured as `Text`; comments and processing
/// instructions never reach the model.
#[derive(Clone, Debug, PartialEq)]
pub enum Content {
    Element(Element),
    Text(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_content_joins_and_trims() {
        let mut element = Element::new("tour");
        element.children.push(Content::Text("  Swiss ".to_string()));
        element.children.push(Content::Element(Element::new("day")));
        element.children.push(Content::Text("Alps  ".to_string()));
        assert_eq!(element.text_content(), "Swiss Alps");
    }

    #[test]
    fn test_child_elements_skips_text() {
        let mut element = Element::new("tours");
        element.children.push(Content::Text("x".to_string()));
        element.children.push(Content::Element(Element::new("tour")));
        let names: Vec<_> = element.child_elements().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["tour"]);
    }
}
