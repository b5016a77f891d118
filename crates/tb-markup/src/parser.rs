//! Strict XHTML parser built on `quick-xml`.

#![allow(clippy::unused_self)] // Unit struct methods have &self for API consistency

use std::borrow::Cow;

use quick_xml::events::{BytesStart, Event};
use quick_xml::reader::Reader;

use crate::entities::{decode_reference, unescape_attr};
use crate::error::MarkupError;
use crate::node::{Element, Node};

/// Parse XHTML markup into an [`Element`] tree.
///
/// The input must be a well-formed document with exactly one root element.
/// Comments, processing instructions, the XML declaration and DOCTYPE are
/// dropped; CDATA sections become text verbatim. Named HTML entities such as
/// `&nbsp;` are resolved in text and attribute values.
pub struct MarkupParser;

impl MarkupParser {
    /// Create a new parser.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Parse markup and return its root element.
    ///
    /// # Errors
    ///
    /// Returns [`MarkupError`] if the markup is not well-formed: unclosed or
    /// mismatched tags, bad attributes, no root element, several root
    /// elements, or text outside the root.
    pub fn parse(&self, markup: &str) -> Result<Element, MarkupError> {
        let mut reader = Reader::from_str(markup);
        reader.config_mut().trim_text(false);

        let mut root: Option<Element> = None;
        loop {
            match reader.read_event()? {
                Event::Start(e) => {
                    if root.is_some() {
                        return Err(MarkupError::MultipleRoots);
                    }
                    let mut element = self.open_element(&reader, &e)?;
                    self.parse_children(&mut reader, &mut element)?;
                    root = Some(element);
                }
                Event::Empty(e) => {
                    if root.is_some() {
                        return Err(MarkupError::MultipleRoots);
                    }
                    root = Some(self.open_element(&reader, &e)?);
                }
                Event::Text(e) => {
                    let text = reader.decoder().decode(&e)?;
                    if !text.trim().is_empty() {
                        return Err(MarkupError::TextOutsideRoot);
                    }
                }
                Event::GeneralRef(_) | Event::CData(_) => {
                    return Err(MarkupError::TextOutsideRoot);
                }
                Event::End(e) => {
                    let tag = self.decode_name(&reader, e.name().as_ref());
                    return Err(MarkupError::UnexpectedEndTag(tag));
                }
                Event::Eof => break,
                Event::Comment(_) | Event::Decl(_) | Event::PI(_) | Event::DocType(_) => {}
            }
        }

        root.ok_or(MarkupError::MissingRoot)
    }

    /// Read events into `element` until its end tag.
    fn parse_children(
        &self,
        reader: &mut Reader<&[u8]>,
        element: &mut Element,
    ) -> Result<(), MarkupError> {
        loop {
            match reader.read_event()? {
                Event::Start(e) => {
                    let mut child = self.open_element(reader, &e)?;
                    self.parse_children(reader, &mut child)?;
                    element.children.push(Node::Element(child));
                }
                Event::Empty(e) => {
                    let child = self.open_element(reader, &e)?;
                    element.children.push(Node::Element(child));
                }
                Event::Text(e) => {
                    let text = reader.decoder().decode(&e)?;
                    push_text(element, &text);
                }
                Event::GeneralRef(e) => {
                    let reference = reader.decoder().decode(&e)?;
                    push_text(element, &decode_reference(&reference));
                }
                Event::CData(e) => {
                    push_text(element, &String::from_utf8_lossy(&e));
                }
                Event::End(e) => {
                    let tag = self.decode_name(reader, e.name().as_ref());
                    if tag != element.tag {
                        return Err(MarkupError::MismatchedEndTag {
                            expected: element.tag.clone(),
                            found: tag,
                        });
                    }
                    return Ok(());
                }
                Event::Eof => {
                    return Err(MarkupError::UnclosedElement(element.tag.clone()));
                }
                Event::Comment(_) | Event::Decl(_) | Event::PI(_) | Event::DocType(_) => {}
            }
        }
    }

    /// Build an element with its attributes from a start or empty tag.
    fn open_element(
        &self,
        reader: &Reader<&[u8]>,
        e: &BytesStart,
    ) -> Result<Element, MarkupError> {
        let mut element = Element::new(self.decode_name(reader, e.name().as_ref()));
        for attr in e.attributes() {
            let attr = attr?;
            let name = self.decode_name(reader, attr.key.as_ref());
            let raw = reader.decoder().decode(&attr.value)?;
            let value = unescape_attr(&raw).into_owned();
            element.attrs.push((name, value));
        }
        Ok(element)
    }

    fn decode_name(&self, reader: &Reader<&[u8]>, name: &[u8]) -> String {
        reader
            .decoder()
            .decode(name)
            .map_or_else(|_| String::from_utf8_lossy(name).into_owned(), Cow::into_owned)
    }
}

impl Default for MarkupParser {
    fn default() -> Self {
        Self::new()
    }
}

/// Append text, merging with a preceding text node.
fn push_text(element: &mut Element, text: &str) {
    if text.is_empty() {
        return;
    }
    if let Some(Node::Text(last)) = element.children.last_mut() {
        last.push_str(text);
    } else {
        element.children.push(Node::text(text));
    }
}
