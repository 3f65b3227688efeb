use alloc::string::String;
use alloc::vec::Vec;

// -----------------------------------------------------------------------------
// Element

/// A node of an XML document.
///
/// An element owns its name, its attributes in insertion order, its child
/// elements in document order and an optional run of text.
///
/// Elements built by `xc_convert` are either text leaves or containers of
/// children, never both. Parsed elements keep whatever the document holds,
/// except that whitespace-only text between child elements is dropped.
///
/// # Examples
///
/// ```
/// use xc_tree::Element;
///
/// let mut list = Element::new("Tags");
/// list.push_child(Element::new("Element").with_text("a"));
/// list.push_child(Element::new("Element").with_text("b"));
///
/// assert_eq!(list.children().len(), 2);
/// assert_eq!(list.to_string(), "<Tags><Element>a</Element><Element>b</Element></Tags>");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Element {
    name: String,
    attributes: Vec<(String, String)>,
    children: Vec<Element>,
    text: Option<String>,
}

impl Element {
    /// Creates an empty element with the given name.
    #[inline]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attributes: Vec::new(),
            children: Vec::new(),
            text: None,
        }
    }

    /// Builder form of [`set_text`](Self::set_text).
    #[inline]
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.set_text(text);
        self
    }

    /// Builder form of [`set_attribute`](Self::set_attribute).
    #[inline]
    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.set_attribute(key, value);
        self
    }

    /// Builder form of [`push_child`](Self::push_child).
    #[inline]
    pub fn with_child(mut self, child: Element) -> Self {
        self.push_child(child);
        self
    }

    /// Returns the element name.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the direct text content, if any.
    #[inline]
    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    /// Replaces the direct text content.
    #[inline]
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = Some(text.into());
    }

    /// Returns the value of the attribute named `key`.
    pub fn attribute(&self, key: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Sets an attribute, replacing the value in place if `key` already exists.
    pub fn set_attribute(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        match self.attributes.iter_mut().find(|(k, _)| *k == key) {
            Some((_, slot)) => *slot = value,
            None => self.attributes.push((key, value)),
        }
    }

    /// Returns the attributes in insertion order.
    #[inline]
    pub fn attributes(&self) -> impl ExactSizeIterator<Item = (&str, &str)> {
        self.attributes.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Returns the child elements in document order.
    #[inline]
    pub fn children(&self) -> &[Element] {
        &self.children
    }

    /// Returns the first child element named `name`.
    pub fn child(&self, name: &str) -> Option<&Element> {
        self.children.iter().find(|c| c.name == name)
    }

    /// Appends a child element.
    #[inline]
    pub fn push_child(&mut self, child: Element) {
        self.children.push(child);
    }

    /// Returns `true` if the element has neither children nor text.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.children.is_empty() && self.text.as_deref().is_none_or(str::is_empty)
    }

    // Used by the parser, which collects text in pieces.
    pub(crate) fn take_text_buffer(&mut self) -> Option<String> {
        self.text.take()
    }

    pub(crate) fn push_text(&mut self, text: &str) {
        match &mut self.text {
            Some(buf) => buf.push_str(text),
            None => self.text = Some(String::from(text)),
        }
    }

    pub(crate) fn push_raw_attribute(&mut self, key: String, value: String) {
        self.attributes.push((key, value));
    }
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use super::Element;

    #[test]
    fn set_attribute_replaces_in_place() {
        let mut e = Element::new("A").with_attribute("x", "1").with_attribute("y", "2");
        e.set_attribute("x", "3");

        let attrs: Vec<_> = e.attributes().collect();
        assert_eq!(attrs, [("x", "3"), ("y", "2")]);
    }

    #[test]
    fn child_returns_first_match() {
        let e = Element::new("Root")
            .with_child(Element::new("A").with_text("1"))
            .with_child(Element::new("A").with_text("2"));

        assert_eq!(e.child("A").and_then(Element::text), Some("1"));
        assert!(e.child("B").is_none());
    }

    #[test]
    fn emptiness() {
        assert!(Element::new("A").is_empty());
        assert!(Element::new("A").with_text("").is_empty());
        assert!(!Element::new("A").with_text("x").is_empty());
        assert!(!Element::new("A").with_child(Element::new("B")).is_empty());
    }
}
