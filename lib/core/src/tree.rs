//! XML to nested mapping
//!
//! Converts well-formed XML into a `serde_json::Value` whose shape mirrors the
//! element hierarchy:
//!
//! - an element with no attributes and no content becomes `null`
//! - an element with only text becomes a string
//! - anything else becomes an object keyed by child element name, with
//!   attributes under `@name` and text under `#text`
//! - sibling elements sharing a name collapse into an array, in document order
//!
//! Text is whitespace-trimmed. Nothing is coerced to a number.

use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use serde_json::{Map, Value};

use crate::error::{Error, Result};

const TEXT_KEY: &str = "#text";
const ATTR_PREFIX: char = '@';

struct Frame {
    name: String,
    children: Map<String, Value>,
    text: String,
}

impl Frame {
    fn open(start: &BytesStart<'_>) -> Result<Self> {
        let name = String::from_utf8_lossy(start.name().as_ref()).into_owned();
        let mut children = Map::new();
        for attr in start.attributes() {
            let attr = attr.map_err(|e| malformed(&e))?;
            let key = format!("{}{}", ATTR_PREFIX, String::from_utf8_lossy(attr.key.as_ref()));
            let value = attr.unescape_value().map_err(|e| malformed(&e))?;
            children.insert(key, Value::String(value.into_owned()));
        }
        Ok(Self {
            name,
            children,
            text: String::new(),
        })
    }

    fn close(self) -> (String, Value) {
        let value = if self.children.is_empty() {
            if self.text.is_empty() {
                Value::Null
            } else {
                Value::String(self.text)
            }
        } else {
            let mut children = self.children;
            if !self.text.is_empty() {
                children.insert(TEXT_KEY.to_string(), Value::String(self.text));
            }
            Value::Object(children)
        };
        (self.name, value)
    }
}

fn malformed(err: &dyn std::fmt::Display) -> Error {
    Error::MalformedResponse(format!("XML parse error: {}", err))
}

/// Insert a child, turning repeated keys into an array
fn push_child(map: &mut Map<String, Value>, key: String, value: Value) {
    match map.get_mut(&key) {
        Some(Value::Array(items)) => items.push(value),
        Some(existing) => {
            let first = existing.take();
            *existing = Value::Array(vec![first, value]);
        }
        None => {
            map.insert(key, value);
        }
    }
}

/// Parse well-formed XML into a nested mapping rooted at the document element
pub fn xml_to_tree(xml: &str) -> Result<Value> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(true);

    let mut root = Map::new();
    let mut stack: Vec<Frame> = Vec::new();

    loop {
        match reader.read_event().map_err(|e| malformed(&e))? {
            Event::Start(start) => stack.push(Frame::open(&start)?),
            Event::Empty(start) => {
                let (name, value) = Frame::open(&start)?.close();
                match stack.last_mut() {
                    Some(parent) => push_child(&mut parent.children, name, value),
                    None => push_child(&mut root, name, value),
                }
            }
            Event::End(_) => {
                let frame = stack
                    .pop()
                    .ok_or_else(|| Error::MalformedResponse("unbalanced closing tag".to_string()))?;
                let (name, value) = frame.close();
                match stack.last_mut() {
                    Some(parent) => push_child(&mut parent.children, name, value),
                    None => push_child(&mut root, name, value),
                }
            }
            Event::Text(text) => {
                if let Some(frame) = stack.last_mut() {
                    let text = text.unescape().map_err(|e| malformed(&e))?;
                    let text = text.trim();
                    if !text.is_empty() {
                        if !frame.text.is_empty() {
                            frame.text.push('\n');
                        }
                        frame.text.push_str(text);
                    }
                }
            }
            Event::CData(data) => {
                if let Some(frame) = stack.last_mut() {
                    frame.text.push_str(&String::from_utf8_lossy(&data));
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }

    if let Some(open) = stack.last() {
        return Err(Error::MalformedResponse(format!("unclosed element <{}>", open.name)));
    }

    Ok(Value::Object(root))
}
