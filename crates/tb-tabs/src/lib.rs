//! Bootstrap-compatible tab blocks from XHTML fragments.
//!
//! Takes a block whose child elements are tabs and produces a navigable tab
//! widget:
//!
//! ```html
//! <tabs>
//!   <div>macOS<p>Install with Homebrew.</p></div>
//!   <div>Linux<p>Install with apt.</p></div>
//! </tabs>
//! ```
//!
//! The first child node of each tab is its label, the remaining nodes are
//! its pane content.
//!
//! # Architecture
//!
//! 1. **Identifier scheme** ([`ids`]): one base id per block from an injected
//!    [`IdSource`]; tab, link and pane ids are derived from it by position.
//! 2. **Tab entries** ([`collect_tabs`]): a single pass over the input that
//!    fixes each tab's index, id, label and content.
//! 3. **Builders** ([`create_tab_list`], [`create_tab_pane_container`]): the
//!    nav list and the pane container, both built from the same entries.
//! 4. **Block** ([`TabBlockBuilder`]): wraps both and exposes
//!    [`render`](TabBlockBuilder::render), the markup-in, markup-out entry
//!    point.
//! 5. **Shortcode** ([`TabsShortcode`]): expands blocks embedded in rendered
//!    page HTML.
//!
//! # Usage
//!
//! ```
//! use tb_tabs::{SequentialIdSource, TabBlockBuilder};
//!
//! let builder = TabBlockBuilder::new().with_id_source(SequentialIdSource::new());
//! let html = builder
//!     .render("<tabs><div>macOS<p>brew</p></div><div>Linux<p>apt</p></div></tabs>")
//!     .unwrap();
//!
//! assert!(html.contains(r#"role="tablist""#));
//! assert!(html.contains(r#"aria-controls="tabs__t0-1-pane""#));
//! ```

mod block;
mod error;
pub mod ids;
mod list;
mod pane;
mod shortcode;
mod tab;

pub use block::TabBlockBuilder;
pub use error::TabsError;
pub use ids::{IdSource, RandomIdSource, SequentialIdSource, TabId};
pub use list::create_tab_list;
pub use pane::create_tab_pane_container;
pub use shortcode::TabsShortcode;
pub use tab::{Tab, children_after_first, collect_tabs, first_child};
