//! Output element tree produced by rendering.
//!
//! The dispatch engine hands each token's fields and already-rendered
//! children to a renderer, which returns one of these nodes. The tree can be
//! serialized to an HTML string, but the engine itself never inspects
//! rendered output.

/// One rendered output node.
#[derive(Debug, Clone, PartialEq)]
pub enum Element {
    /// An element with a tag, attributes, and children
    Node {
        tag: String,
        attrs: Vec<(String, String)>,
        children: Vec<Element>,
    },

    /// A text run, escaped on serialization
    Text(String),

    /// Verbatim markup, serialized as-is (unmatched HTML fragments)
    Raw(String),

    /// A sequence of nodes with no wrapper of its own
    Fragment(Vec<Element>),
}

/// Void (self-closing) HTML elements
const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "command", "embed", "hr", "img", "input",
    "keygen", "link", "meta", "param", "source", "track", "wbr",
];

impl Element {
    /// Create an element node
    pub fn node(tag: &str, attrs: Vec<(String, String)>, children: Vec<Element>) -> Self {
        Element::Node {
            tag: tag.to_string(),
            attrs,
            children,
        }
    }

    /// Create a text node
    pub fn text(content: &str) -> Self {
        Element::Text(content.to_string())
    }

    /// Create a verbatim markup node
    pub fn raw(markup: &str) -> Self {
        Element::Raw(markup.to_string())
    }

    /// Create a fragment over the given children
    pub fn fragment(children: Vec<Element>) -> Self {
        Element::Fragment(children)
    }

    /// An empty fragment, rendering to nothing
    pub fn empty() -> Self {
        Element::Fragment(Vec::new())
    }

    /// Check whether this node renders to nothing
    pub fn is_empty(&self) -> bool {
        match self {
            Element::Node { .. } => false,
            Element::Text(text) => text.is_empty(),
            Element::Raw(markup) => markup.is_empty(),
            Element::Fragment(children) => children.iter().all(|c| c.is_empty()),
        }
    }

    /// Serialize this node and its descendants to an HTML string
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        self.write_html(&mut out);
        out
    }

    fn write_html(&self, out: &mut String) {
        match self {
            Element::Text(text) => out.push_str(&escape_html(text)),
            Element::Raw(markup) => out.push_str(markup),
            Element::Fragment(children) => {
                for child in children {
                    child.write_html(out);
                }
            }
            Element::Node {
                tag,
                attrs,
                children,
            } => {
                out.push('<');
                out.push_str(tag);
                for (name, value) in attrs {
                    out.push(' ');
                    out.push_str(name);
                    if !value.is_empty() {
                        out.push_str("=\"");
                        out.push_str(&escape_attr(value));
                        out.push('"');
                    }
                }
                out.push('>');

                if is_void(tag) {
                    return;
                }

                for child in children {
                    child.write_html(out);
                }
                out.push_str("</");
                out.push_str(tag);
                out.push('>');
            }
        }
    }
}

/// Check if a tag is a void element
pub fn is_void(tag: &str) -> bool {
    VOID_ELEMENTS.contains(&tag.to_lowercase().as_str())
}

/// Escape text content
fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

/// Escape an attribute value
fn escape_attr(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('"', "&quot;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}
