//! Immutable HTML content tree.
//!
//! Page components and the router shell build their markup as `Node`
//! trees; `render_document` serializes a tree to HTML. Rendering is a
//! pure function of the tree, so the same tree always produces the same
//! bytes.

use crate::utils::html::{escape, escape_attr, is_raw_text_element, is_void_element};

/// A node in the content tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Element(Element),
    Text(String),
}

impl Node {
    /// Create a text node. Content is escaped at render time.
    pub fn text(content: impl Into<String>) -> Self {
        Self::Text(content.into())
    }
}

impl From<Element> for Node {
    fn from(element: Element) -> Self {
        Self::Element(element)
    }
}

/// An element node: tag, attributes, children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    tag: &'static str,
    attrs: Vec<(&'static str, String)>,
    children: Vec<Node>,
}

impl Element {
    pub fn new(tag: &'static str) -> Self {
        Self {
            tag,
            attrs: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Add an attribute. Values are escaped at render time.
    pub fn attr(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.attrs.push((name, value.into()));
        self
    }

    /// Shorthand for the ubiquitous `class` attribute.
    pub fn class(self, value: impl Into<String>) -> Self {
        self.attr("class", value)
    }

    /// Append a child node.
    pub fn child(mut self, node: impl Into<Node>) -> Self {
        self.children.push(node.into());
        self
    }

    /// Append a sequence of child nodes.
    pub fn children(mut self, nodes: impl IntoIterator<Item = Node>) -> Self {
        self.children.extend(nodes);
        self
    }

    /// Append a text child.
    pub fn text(self, content: impl Into<String>) -> Self {
        self.child(Node::text(content))
    }

    pub fn tag(&self) -> &'static str {
        self.tag
    }
}

/// Render a node tree to an HTML string.
pub fn render(node: &Node) -> String {
    let mut out = String::new();
    write_node(node, false, &mut out);
    out
}

/// Render a root element as a complete HTML document (doctype + tree).
pub fn render_document(root: &Element) -> String {
    let mut out = String::from("<!DOCTYPE html>\n");
    write_node(&Node::Element(root.clone()), false, &mut out);
    out.push('\n');
    out
}

fn write_node(node: &Node, raw_text: bool, out: &mut String) {
    match node {
        Node::Text(content) => {
            if raw_text {
                out.push_str(content);
            } else {
                out.push_str(&escape(content));
            }
        }
        Node::Element(element) => write_element(element, out),
    }
}

fn write_element(element: &Element, out: &mut String) {
    out.push('<');
    out.push_str(element.tag);
    for (name, value) in &element.attrs {
        out.push(' ');
        out.push_str(name);
        if !value.is_empty() {
            out.push_str("=\"");
            out.push_str(&escape_attr(value));
            out.push('"');
        }
    }
    out.push('>');

    // Void elements have no children and no closing tag
    if is_void_element(element.tag) {
        return;
    }

    let raw_text = is_raw_text_element(element.tag);
    for child in &element.children {
        write_node(child, raw_text, out);
    }

    out.push_str("</");
    out.push_str(element.tag);
    out.push('>');
}
