//! Minimal element tree built on top of `quick-xml`
//!
//! Every provider walks the same tree. Element and attribute names are stored
//! by local name, so `sparkle:version`, `version` and a mistyped namespace
//! prefix all resolve the same way.

use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};

/// A parsed XML element
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Element {
    pub name: String,
    pub attributes: Vec<(String, String)>,
    pub children: Vec<Element>,
    pub text: String,
}

impl Element {
    fn from_start(start: &BytesStart<'_>, reader: &Reader<&[u8]>) -> Self {
        let name = String::from_utf8_lossy(start.local_name().as_ref()).into_owned();
        let mut attributes = Vec::new();

        for attr_result in start.attributes() {
            let attr = match attr_result {
                Ok(attr) => attr,
                Err(e) => {
                    tracing::warn!(element = %name, error = %e, "Skipping malformed attribute");
                    continue;
                }
            };
            let key = String::from_utf8_lossy(attr.key.local_name().as_ref()).into_owned();
            let value = match attr.decode_and_unescape_value(reader.decoder()) {
                Ok(value) => value.into_owned(),
                Err(_) => String::from_utf8_lossy(&attr.value).into_owned(),
            };
            attributes.push((key, value));
        }

        Self {
            name,
            attributes,
            ..Self::default()
        }
    }

    /// First direct child with the given local name
    pub fn child(&self, name: &str) -> Option<&Element> {
        self.children.iter().find(|c| c.name == name)
    }

    /// All direct children with the given local name, in document order
    pub fn children<'a>(&'a self, name: &str) -> impl Iterator<Item = &'a Element> {
        self.children.iter().filter(move |c| c.name == name)
    }

    /// Trimmed text of the first direct child with the given name that has any
    pub fn child_text(&self, name: &str) -> Option<&str> {
        self.children(name).find_map(|c| c.text())
    }

    /// Trimmed text content, `None` when blank
    pub fn text(&self) -> Option<&str> {
        let trimmed = self.text.trim();
        (!trimmed.is_empty()).then_some(trimmed)
    }

    /// Trimmed attribute value, `None` when missing or blank
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.trim())
            .filter(|value| !value.is_empty())
    }
}

/// Parse a whole document into a synthetic root element
///
/// Mismatched or unclosed tags are reported as an error message; no partial
/// tree is returned in that case.
pub fn parse_document(content: &[u8]) -> Result<Element, String> {
    let mut reader = Reader::from_reader(content);
    reader.config_mut().trim_text(true);

    // stack[0] is the document root; the last entry is the open element
    let mut stack = vec![Element {
        name: "#document".to_string(),
        ..Element::default()
    }];

    loop {
        let event = reader
            .read_event()
            .map_err(|e| format!("{} at position {}", e, reader.error_position()))?;

        match event {
            Event::Start(start) => {
                let element = Element::from_start(&start, &reader);
                stack.push(element);
            }
            Event::Empty(start) => {
                let element = Element::from_start(&start, &reader);
                if let Some(parent) = stack.last_mut() {
                    parent.children.push(element);
                }
            }
            Event::End(_) => {
                // quick-xml already rejects end tags that don't match the open one
                if stack.len() < 2 {
                    return Err(format!(
                        "unexpected closing tag at position {}",
                        reader.buffer_position()
                    ));
                }
                if let Some(element) = stack.pop()
                    && let Some(parent) = stack.last_mut()
                {
                    parent.children.push(element);
                }
            }
            Event::Text(text) => {
                let value = match text.unescape() {
                    Ok(value) => value.into_owned(),
                    Err(_) => String::from_utf8_lossy(&text).into_owned(),
                };
                if let Some(current) = stack.last_mut() {
                    current.text.push_str(&value);
                }
            }
            Event::CData(data) => {
                if let Some(current) = stack.last_mut() {
                    current.text.push_str(&String::from_utf8_lossy(&data));
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }

    if stack.len() > 1 {
        let open = stack.last().map(|e| e.name.clone()).unwrap_or_default();
        return Err(format!("unexpected end of document: <{}> is not closed", open));
    }

    Ok(stack.pop().unwrap_or_default())
}
