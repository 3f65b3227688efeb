use alloc::string::String;
use alloc::vec::Vec;
use core::str::{FromStr, from_utf8};

use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};

use crate::{Element, TreeError};

// -----------------------------------------------------------------------------
// Parsing

impl Element {
    /// Parses a complete document and returns its root element.
    ///
    /// - Declarations, comments, processing instructions and doctypes are skipped.
    /// - Entity references in text and attribute values are unescaped.
    /// - CDATA sections are appended to the text of the enclosing element.
    /// - Text of an element with no children is kept exactly, whitespace included.
    /// - Whitespace-only text of an element with children is dropped.
    ///
    /// # Errors
    ///
    /// Returns an error if the markup is malformed, has no root element,
    /// has more than one root element or ends inside an open element.
    ///
    /// # Examples
    ///
    /// ```
    /// use xc_tree::{Element, TreeError};
    ///
    /// let root = Element::parse("<?xml version=\"1.0\"?>\n<A>\n  <B> x </B>\n</A>").unwrap();
    /// assert_eq!(root.text(), None);
    /// assert_eq!(root.child("B").unwrap().text(), Some(" x "));
    ///
    /// assert!(matches!(Element::parse("<A/><B/>"), Err(TreeError::MultipleRoots(_))));
    /// ```
    pub fn parse(text: &str) -> Result<Element, TreeError> {
        let mut reader = Reader::from_str(text);
        reader.config_mut().trim_text(false);

        let mut stack: Vec<Element> = Vec::new();
        let mut root: Option<Element> = None;

        loop {
            match reader.read_event()? {
                Event::Start(start) => {
                    let element = open(&start)?;
                    if stack.is_empty() && root.is_some() {
                        return Err(TreeError::MultipleRoots(String::from(element.name())));
                    }
                    stack.push(element);
                }
                Event::Empty(start) => {
                    let element = open(&start)?;
                    close(element, &mut stack, &mut root)?;
                }
                Event::End(_) => {
                    // quick-xml checks that end names match.
                    if let Some(element) = stack.pop() {
                        close(element, &mut stack, &mut root)?;
                    }
                }
                Event::Text(text) => {
                    if let Some(top) = stack.last_mut() {
                        top.push_text(&text.unescape()?);
                    }
                }
                Event::CData(data) => {
                    if let Some(top) = stack.last_mut() {
                        top.push_text(from_utf8(&data)?);
                    }
                }
                Event::Eof => break,
                _ => {}
            }
        }

        if let Some(open) = stack.pop() {
            return Err(TreeError::UnexpectedEnd(String::from(open.name())));
        }
        root.ok_or(TreeError::MissingRoot)
    }
}

fn open(start: &BytesStart<'_>) -> Result<Element, TreeError> {
    let mut element = Element::new(from_utf8(start.name().as_ref())?);
    for attr in start.attributes() {
        let attr = attr?;
        let key = String::from(from_utf8(attr.key.as_ref())?);
        let value = attr.unescape_value()?.into_owned();
        element.push_raw_attribute(key, value);
    }
    Ok(element)
}

fn close(
    mut element: Element,
    stack: &mut Vec<Element>,
    root: &mut Option<Element>,
) -> Result<(), TreeError> {
    if !element.children().is_empty() {
        if let Some(text) = element.take_text_buffer() {
            if !text.trim().is_empty() {
                element.set_text(text);
            }
        }
    }

    match stack.last_mut() {
        Some(parent) => parent.push_child(element),
        None if root.is_some() => {
            return Err(TreeError::MultipleRoots(String::from(element.name())));
        }
        None => *root = Some(element),
    }
    Ok(())
}

impl FromStr for Element {
    type Err = TreeError;

    #[inline]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Element::parse(s)
    }
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use crate::{Element, TreeError};

    #[test]
    fn unescapes_text_and_attributes() {
        let root = Element::parse(r#"<A k="1 &lt; 2">a &amp; b</A>"#).unwrap();
        assert_eq!(root.attribute("k"), Some("1 < 2"));
        assert_eq!(root.text(), Some("a & b"));
    }

    #[test]
    fn keeps_leaf_whitespace() {
        let root = Element::parse("<A>  </A>").unwrap();
        assert_eq!(root.text(), Some("  "));
    }

    #[test]
    fn cdata_is_text() {
        let root = Element::parse("<A><![CDATA[<raw>]]></A>").unwrap();
        assert_eq!(root.text(), Some("<raw>"));
    }

    #[test]
    fn skips_comments_and_declarations() {
        let root = Element::parse("<?xml version=\"1.0\"?><!-- c --><A><!-- d --><B/></A>").unwrap();
        assert_eq!(root.name(), "A");
        assert_eq!(root.children().len(), 1);
        assert_eq!(root.text(), None);
    }

    #[test]
    fn document_errors() {
        assert!(matches!(Element::parse(""), Err(TreeError::MissingRoot)));
        assert!(matches!(Element::parse("  <!-- only -->  "), Err(TreeError::MissingRoot)));
        assert!(matches!(Element::parse("<A></A><B></B>"), Err(TreeError::MultipleRoots(n)) if n == "B"));
        assert!(Element::parse("<A><B></A>").is_err());
    }

    #[test]
    fn from_str_parses() {
        let root: Element = "<Root><X>1</X></Root>".parse().unwrap();
        assert_eq!(root.child("X").and_then(Element::text), Some("1"));
    }
}
