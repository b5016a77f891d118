//! Error types for markup parsing.

use std::str::Utf8Error;

/// Markup could not be parsed into a well-formed element tree.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum MarkupError {
    /// Syntax or well-formedness error reported by the XML reader.
    #[error("XML parse error")]
    Xml(#[from] quick_xml::Error),

    /// UTF-8 decoding error.
    #[error("UTF-8 error")]
    Utf8(#[from] Utf8Error),

    /// Malformed or duplicated attribute.
    #[error("XML attribute error")]
    Attr(#[from] quick_xml::events::attributes::AttrError),

    /// Encoding error while decoding names or text.
    #[error("encoding error")]
    Encoding(#[from] quick_xml::encoding::EncodingError),

    /// Input ended while an element was still open.
    #[error("element <{0}> is not closed")]
    UnclosedElement(String),

    /// End tag does not match the open element.
    #[error("end tag </{found}> does not match <{expected}>")]
    MismatchedEndTag {
        /// Tag of the element that is open.
        expected: String,
        /// Tag named by the end tag.
        found: String,
    },

    /// End tag with no open element.
    #[error("unexpected end tag </{0}>")]
    UnexpectedEndTag(String),

    /// Input holds no element at all.
    #[error("markup has no root element")]
    MissingRoot,

    /// Input holds more than one top-level element.
    #[error("markup has more than one root element")]
    MultipleRoots,

    /// Non-whitespace text before or after the root element.
    #[error("text outside the root element")]
    TextOutsideRoot,
}
