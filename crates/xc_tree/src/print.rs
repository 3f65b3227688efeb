use core::fmt;

use quick_xml::escape::escape;

use crate::Element;

// -----------------------------------------------------------------------------
// Printing

const INDENT: &str = "  ";

/// Prints the element as markup.
///
/// The default form is compact with no whitespace between tags. The
/// alternate form (`{:#}`) puts each child element on its own line,
/// indented by two spaces per level. Text is never reflowed, so leaf
/// values survive both forms unchanged.
///
/// An element with neither text nor children is printed self-closing.
///
/// # Examples
///
/// ```
/// use xc_tree::Element;
///
/// let e = Element::new("A").with_child(Element::new("B").with_text("1 < 2"));
///
/// assert_eq!(format!("{e}"), "<A><B>1 &lt; 2</B></A>");
/// assert_eq!(format!("{e:#}"), "<A>\n  <B>1 &lt; 2</B>\n</A>");
/// ```
impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let pretty = f.alternate();
        write_element(self, f, pretty, 0)
    }
}

fn write_element(
    e: &Element,
    f: &mut fmt::Formatter<'_>,
    pretty: bool,
    depth: usize,
) -> fmt::Result {
    f.write_str("<")?;
    f.write_str(e.name())?;
    for (key, value) in e.attributes() {
        write!(f, " {key}=\"{}\"", escape(value))?;
    }

    let text = e.text().filter(|t| !t.is_empty());
    if text.is_none() && e.children().is_empty() {
        return f.write_str("/>");
    }
    f.write_str(">")?;

    if let Some(text) = text {
        f.write_str(&escape(text))?;
    }

    if !e.children().is_empty() {
        for child in e.children() {
            if pretty {
                newline(f, depth + 1)?;
            }
            write_element(child, f, pretty, depth + 1)?;
        }
        if pretty {
            newline(f, depth)?;
        }
    }

    write!(f, "</{}>", e.name())
}

fn newline(f: &mut fmt::Formatter<'_>, depth: usize) -> fmt::Result {
    f.write_str("\n")?;
    for _ in 0..depth {
        f.write_str(INDENT)?;
    }
    Ok(())
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use crate::Element;

    #[test]
    fn self_closing_when_empty() {
        let e = Element::new("A").with_attribute("Type", "String");
        assert_eq!(e.to_string(), r#"<A Type="String"/>"#);
    }

    #[test]
    fn escapes_attribute_values() {
        let e = Element::new("A").with_attribute("k", r#"say "hi" & <go>"#);
        let text = e.to_string();
        assert_eq!(text, r#"<A k="say &quot;hi&quot; &amp; &lt;go&gt;"/>"#);

        let back = Element::parse(&text).unwrap();
        assert_eq!(back.attribute("k"), Some(r#"say "hi" & <go>"#));
    }

    #[test]
    fn pretty_output_parses_to_same_tree() {
        let e = Element::new("Root")
            .with_child(
                Element::new("List")
                    .with_child(Element::new("Element").with_text(" padded "))
                    .with_child(Element::new("Element").with_text("b")),
            )
            .with_child(Element::new("Empty"));

        let pretty = format!("{e:#}");
        assert_eq!(
            pretty,
            "<Root>\n  <List>\n    <Element> padded </Element>\n    <Element>b</Element>\n  </List>\n  <Empty/>\n</Root>"
        );
        assert_eq!(Element::parse(&pretty).unwrap(), e);
    }
}
