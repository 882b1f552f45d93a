//! Tolerant markup normalization
//!
//! BindingDB answers with XML-ish markup that carries no declaration and is
//! not guaranteed to be well-formed. The body is read with an HTML5 parser,
//! which accepts anything, and written back out through `quick-xml` as
//! indented XML that a strict parser can consume.
//!
//! The HTML parser wraps the payload in `<html><head/><body>…</body></html>`
//! and lower-cases every tag name, so `<bdb:getLigandsByUniprotResponse>`
//! comes out as `<bdb:getligandsbyuniprotresponse>`.
//!
//! HTML5 ignores the self-closing slash on unknown elements. An upstream
//! `<bdb:affinities/>` therefore stays open, and every sibling after it ends
//! up nested inside it.

use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;
use scraper::{ElementRef, Html, Node};

use crate::error::{Error, Result};

/// Declaration prepended to the raw body and emitted at the top of the output
pub const XML_HEADER: &str = r#"<?xml version="1.0" encoding="UTF-8"?>"#;

/// Parse `body` permissively and re-serialize it as well-formed, indented XML
pub fn prettify(body: &str) -> Result<String> {
    let document = Html::parse_document(&format!("{}\n{}", XML_HEADER, body));

    let mut writer = Writer::new_with_indent(Vec::with_capacity(body.len() * 2), b' ', 1);
    writer
        .write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))
        .map_err(|e| write_failed(&e))?;
    write_element(&mut writer, document.root_element())?;

    Ok(String::from_utf8_lossy(&writer.into_inner()).into_owned())
}

fn write_failed(err: &dyn std::fmt::Display) -> Error {
    Error::MalformedResponse(format!("XML write error: {}", err))
}

fn write_element(writer: &mut Writer<Vec<u8>>, element: ElementRef<'_>) -> Result<()> {
    let value = element.value();
    let name = value.name();

    // Names XML can't carry are unwrapped: the children still get written
    if !is_xml_name(name) {
        return write_children(writer, element);
    }

    let mut start = BytesStart::new(name);
    for (attr, attr_value) in value.attrs() {
        if is_xml_name(attr) {
            start.push_attribute((attr, strip_control(attr_value).as_str()));
        }
    }

    if !has_content(element) {
        return writer.write_event(Event::Empty(start)).map_err(|e| write_failed(&e));
    }

    writer.write_event(Event::Start(start)).map_err(|e| write_failed(&e))?;
    write_children(writer, element)?;
    writer
        .write_event(Event::End(BytesEnd::new(name)))
        .map_err(|e| write_failed(&e))
}

fn write_children(writer: &mut Writer<Vec<u8>>, element: ElementRef<'_>) -> Result<()> {
    for child in element.children() {
        match child.value() {
            Node::Element(_) => {
                if let Some(child) = ElementRef::wrap(child) {
                    write_element(writer, child)?;
                }
            }
            Node::Text(text) => {
                let text = strip_control(text.trim());
                if !text.is_empty() {
                    writer
                        .write_event(Event::Text(BytesText::new(&text)))
                        .map_err(|e| write_failed(&e))?;
                }
            }
            // comments, doctypes and processing instructions are dropped
            _ => {}
        }
    }
    Ok(())
}

fn has_content(element: ElementRef<'_>) -> bool {
    element.children().any(|child| match child.value() {
        Node::Element(_) => true,
        Node::Text(text) => !text.trim().is_empty(),
        _ => false,
    })
}

// control characters are not allowed in XML 1.0
fn strip_control(text: &str) -> String {
    text.chars()
        .filter(|c| !c.is_control() || matches!(c, '\t' | '\n' | '\r'))
        .collect()
}

/// Conservative XML name check: letters, digits and `_ - . :`,
/// starting with a letter, `_` or `:`
fn is_xml_name(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first.is_alphabetic() || first == '_' || first == ':' => {
            chars.all(|c| c.is_alphanumeric() || matches!(c, '_' | '-' | '.' | ':'))
        }
        _ => false,
    }
}
