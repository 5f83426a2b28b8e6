//! Element serialization using quick-xml.

use std::fmt::Display;
use std::io::Write;

use quick_xml::Writer;
use quick_xml::events::{BytesEnd, BytesStart, BytesText, Event};

use palette_model::{Element, Node};

use crate::error::{AssemblyError, Result};

/// Serialize one element. Text and attribute values are escaped; elements
/// without children are written self-closing.
pub fn element_to_string(element: &Element, indent: usize) -> Result<String> {
    let mut writer = new_writer(indent);
    write_element(&mut writer, element)?;
    into_string(writer, element.name())
}

pub(crate) fn new_writer(indent: usize) -> Writer<Vec<u8>> {
    if indent == 0 {
        Writer::new(Vec::new())
    } else {
        Writer::new_with_indent(Vec::new(), b' ', indent)
    }
}

pub(crate) fn into_string(writer: Writer<Vec<u8>>, context: &str) -> Result<String> {
    String::from_utf8(writer.into_inner()).map_err(|e| xml_error(context, e))
}

pub(crate) fn write_element<W: Write>(writer: &mut Writer<W>, element: &Element) -> Result<()> {
    let mut start = BytesStart::new(element.name());
    for (key, value) in element.attributes() {
        start.push_attribute((key.as_str(), value.as_str()));
    }

    if element.is_empty() {
        return writer
            .write_event(Event::Empty(start))
            .map_err(|e| xml_error(element.name(), e));
    }

    writer
        .write_event(Event::Start(start))
        .map_err(|e| xml_error(element.name(), e))?;
    for node in element.nodes() {
        match node {
            Node::Element(child) => write_element(writer, child)?,
            Node::Text(text) => writer
                .write_event(Event::Text(BytesText::new(text)))
                .map_err(|e| xml_error(element.name(), e))?,
        }
    }
    writer
        .write_event(Event::End(BytesEnd::new(element.name())))
        .map_err(|e| xml_error(element.name(), e))
}

fn xml_error(context: &str, error: impl Display) -> AssemblyError {
    AssemblyError::Xml {
        context: format!("<{context}>"),
        message: error.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_element_is_self_closing() {
        let sep = Element::new("sep").attr("gap", "36");
        assert_eq!(element_to_string(&sep, 2).unwrap(), r#"<sep gap="36"/>"#);
    }

    #[test]
    fn nested_elements_are_indented() {
        let block = Element::new("block")
            .attr("type", "motion_movesteps")
            .child(Element::new("field").attr("name", "NUM").text("10"));
        assert_eq!(
            element_to_string(&block, 2).unwrap(),
            "<block type=\"motion_movesteps\">\n  <field name=\"NUM\">10</field>\n</block>"
        );
    }

    #[test]
    fn text_and_attributes_are_escaped() {
        let field = Element::new("field")
            .attr("name", "a<b")
            .text("Tom & <Jerry>");
        let xml = element_to_string(&field, 0).unwrap();
        assert!(xml.contains("a&lt;b"));
        assert!(xml.contains("Tom &amp; &lt;Jerry&gt;"));
        assert!(!xml.contains("<Jerry>"));
    }
}
