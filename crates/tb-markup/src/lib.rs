//! XHTML node tree for tab block rendering.
//!
//! [`MarkupParser`] turns a well-formed XHTML string into an [`Element`] tree
//! and rejects anything that is not well-formed. [`MarkupSerializer`] writes a
//! tree back out in compact form, without pretty-print whitespace, so the
//! result can be embedded into a larger document.
//!
//! # Example
//!
//! ```
//! use tb_markup::{MarkupParser, MarkupSerializer};
//!
//! let root = MarkupParser::new()
//!     .parse("<div><p>Hello &amp; welcome</p></div>")
//!     .unwrap();
//! assert_eq!(root.child_elements().count(), 1);
//!
//! let html = MarkupSerializer::new().serialize(&root);
//! assert_eq!(html, "<div><p>Hello &amp; welcome</p></div>");
//! ```

mod entities;
mod error;
mod node;
mod parser;
mod serializer;

pub use error::MarkupError;
pub use node::{Element, Node};
pub use parser::MarkupParser;
pub use serializer::MarkupSerializer;
