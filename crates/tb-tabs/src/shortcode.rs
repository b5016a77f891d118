//! Shortcode post-processor for rendered page HTML.
//!
//! Finds `<tabs>...</tabs>` blocks (or the configured element name) in HTML
//! produced by the host's markdown renderer and replaces each block with the
//! output of [`TabBlockBuilder::render`]. Nested blocks are not supported:
//! a block ends at the first matching close tag.

use tb_config::TabsConfig;

use crate::block::TabBlockBuilder;
use crate::error::TabsError;
use crate::ids::{IdSource, RandomIdSource};

/// Post-processor that expands tab shortcode blocks in page HTML.
///
/// # Example
///
/// ```
/// use tb_tabs::{SequentialIdSource, TabBlockBuilder, TabsShortcode};
///
/// let builder = TabBlockBuilder::new().with_id_source(SequentialIdSource::new());
/// let mut shortcode = TabsShortcode::with_builder(builder);
///
/// let mut html = "<p>Intro</p><tabs><div>macOS<p>brew</p></div></tabs>".to_owned();
/// let replaced = shortcode.post_process(&mut html).unwrap();
///
/// assert_eq!(replaced, 1);
/// assert!(html.starts_with("<p>Intro</p><div class=\"tab-block\""));
/// ```
#[derive(Debug)]
pub struct TabsShortcode<S = RandomIdSource> {
    builder: TabBlockBuilder<S>,
    warnings: Vec<String>,
}

impl TabsShortcode {
    /// Create a post-processor with default settings and random ids.
    #[must_use]
    pub fn new() -> Self {
        Self::with_builder(TabBlockBuilder::new())
    }

    /// Create a post-processor from configuration.
    ///
    /// # Errors
    ///
    /// Returns [`TabsError::Config`] if the configured names are invalid.
    pub fn from_config(config: &TabsConfig) -> Result<Self, TabsError> {
        TabBlockBuilder::from_config(config).map(Self::with_builder)
    }
}

impl Default for TabsShortcode {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: IdSource> TabsShortcode<S> {
    /// Create a post-processor around an existing builder.
    #[must_use]
    pub fn with_builder(builder: TabBlockBuilder<S>) -> Self {
        Self {
            builder,
            warnings: Vec::new(),
        }
    }

    /// Replace every shortcode block in `html` with a rendered tab block.
    ///
    /// Returns the number of blocks replaced. An opening tag without a
    /// closing tag is passed through and recorded in [`warnings`](Self::warnings),
    /// which only hold the warnings of the latest call.
    ///
    /// # Errors
    ///
    /// Returns [`TabsError::MalformedInput`] if any block is not well-formed.
    /// `html` is left unchanged in that case.
    pub fn post_process(&mut self, html: &mut String) -> Result<usize, TabsError> {
        self.warnings.clear();
        let name = self.builder.shortcode().to_owned();
        let open_tag = format!("<{name}");
        let close_tag = format!("</{name}>");

        let mut result = String::with_capacity(html.len() + 1024);
        let mut remaining = html.as_str();
        let mut replaced = 0;

        while let Some(start) = remaining.find(&open_tag) {
            let after_name = start + open_tag.len();

            // `<tabset>` is not `<tabs>`
            let is_tag_end = remaining[after_name..]
                .starts_with(|c: char| c == '>' || c.is_ascii_whitespace());
            if !is_tag_end {
                result.push_str(&remaining[..after_name]);
                remaining = &remaining[after_name..];
                continue;
            }

            let Some(close_offset) = remaining[start..].find(&close_tag) else {
                tracing::warn!(shortcode = %name, "Shortcode block without closing tag");
                self.warnings.push(format!(
                    "<{name}> block without closing tag, passing through"
                ));
                break;
            };
            let close_end = start + close_offset + close_tag.len();

            result.push_str(&remaining[..start]);
            result.push_str(&self.builder.render(&remaining[start..close_end])?);
            replaced += 1;

            remaining = &remaining[close_end..];
        }

        result.push_str(remaining);
        *html = result;

        tracing::debug!(shortcode = %name, count = replaced, "Expanded tab shortcodes");
        Ok(replaced)
    }

    /// Warnings collected during processing.
    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }
}
