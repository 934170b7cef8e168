//! The host document: a body tree plus applied stylesheets.

use super::element::Element;

/// A minimal host document.
///
/// Holds the body tree the application mounts into and the stylesheets
/// applied as presentation side effects. This is the single shared mutable
/// resource of the bootstrap sequence; it is written once, before first
/// paint, and only read afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    body: Element,
    stylesheets: Vec<String>,
}

impl Document {
    /// Creates a document with an empty body.
    pub fn new() -> Self {
        Self {
            body: Element::new("body"),
            stylesheets: Vec::new(),
        }
    }

    /// Creates a document around an existing body tree.
    pub fn with_body(body: Element) -> Self {
        Self {
            body,
            stylesheets: Vec::new(),
        }
    }

    /// The body tree.
    pub fn body(&self) -> &Element {
        &self.body
    }

    /// Mutable access to the body tree.
    pub fn body_mut(&mut self) -> &mut Element {
        &mut self.body
    }

    /// Finds an element anywhere in the body by id.
    pub fn element_by_id(&self, id: &str) -> Option<&Element> {
        self.body.find_by_id(id)
    }

    /// Mutable variant of [`Document::element_by_id`].
    pub fn element_by_id_mut(&mut self, id: &str) -> Option<&mut Element> {
        self.body.find_by_id_mut(id)
    }

    /// Applies a stylesheet to the document. Pure side effect, no return
    /// value; stylesheets accumulate in application order.
    pub fn apply_stylesheet(&mut self, css: impl Into<String>) {
        self.stylesheets.push(css.into());
    }

    /// The stylesheets applied so far, in order.
    pub fn stylesheets(&self) -> &[String] {
        &self.stylesheets
    }

    /// Serializes the whole document, stylesheets in `<head>`, body after.
    pub fn to_html(&self) -> String {
        let mut out = String::from("<!doctype html><html><head>");
        for css in &self.stylesheets {
            out.push_str("<style>");
            out.push_str(css);
            out.push_str("</style>");
        }
        out.push_str("</head>");
        out.push_str(&self.body.to_html());
        out.push_str("</html>");
        out
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::Node;

    #[test]
    fn test_element_by_id_searches_body() {
        let doc = Document::with_body(
            Element::new("body").with_child(Element::new("div").with_id("app")),
        );
        assert!(doc.element_by_id("app").is_some());
        assert!(doc.element_by_id("missing").is_none());
    }

    #[test]
    fn test_apply_stylesheet_accumulates_in_order() {
        let mut doc = Document::new();
        doc.apply_stylesheet("a{}");
        doc.apply_stylesheet("b{}");
        assert_eq!(doc.stylesheets(), ["a{}", "b{}"]);
    }

    #[test]
    fn test_to_html_places_styles_in_head() {
        let mut doc = Document::with_body(
            Element::new("body").with_child(Element::new("div").with_id("app")),
        );
        doc.apply_stylesheet(".btn{}");
        let html = doc.to_html();
        assert!(html.contains("<style>.btn{}</style>"));
        assert!(html.contains("<div id=\"app\"></div>"));
    }

    #[test]
    fn test_mutation_through_element_by_id_mut() {
        let mut doc = Document::with_body(
            Element::new("body").with_child(Element::new("div").with_id("app")),
        );
        doc.element_by_id_mut("app")
            .unwrap()
            .append(Node::Element(Element::new("main")));
        assert_eq!(
            doc.element_by_id("app").unwrap().child_elements().count(),
            1
        );
    }
}
