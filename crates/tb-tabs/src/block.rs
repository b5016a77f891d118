//! Tab block builder and the markup-in, markup-out entry point.

use tb_config::{DEFAULT_NAMESPACE, DEFAULT_SHORTCODE, TabsConfig, validate_name};
use tb_markup::{Element, MarkupParser, MarkupSerializer, Node};

use crate::error::TabsError;
use crate::ids::{IdSource, RandomIdSource, create_base_id};
use crate::list::create_tab_list;
use crate::pane::create_tab_pane_container;
use crate::tab::{children_after_first, collect_tabs, first_child};

/// Builds tab blocks, drawing one base id per block from an [`IdSource`].
///
/// # Output HTML Structure
///
/// ```html
/// <div class="tab-block" id="{base}">
///   <ul class="nav nav-tabs" role="tablist">...</ul>
///   <div class="tab-content">...</div>
/// </div>
/// ```
///
/// # Example
///
/// ```
/// use tb_tabs::{SequentialIdSource, TabBlockBuilder};
///
/// let builder = TabBlockBuilder::new().with_id_source(SequentialIdSource::new());
/// let html = builder
///     .render("<tabs><div>One<p>First body</p></div></tabs>")
///     .unwrap();
///
/// assert!(html.starts_with(r#"<div class="tab-block" id="tabs__t0">"#));
/// assert!(html.contains(r#"id="tabs__t0-0-pane"><p>First body</p></div>"#));
/// ```
#[derive(Debug)]
pub struct TabBlockBuilder<S = RandomIdSource> {
    ids: S,
    namespace: String,
    shortcode: String,
}

impl TabBlockBuilder {
    /// Create a builder with default settings and random ids.
    #[must_use]
    pub fn new() -> Self {
        Self {
            ids: RandomIdSource,
            namespace: DEFAULT_NAMESPACE.to_owned(),
            shortcode: DEFAULT_SHORTCODE.to_owned(),
        }
    }

    /// Create a builder from configuration, with random ids.
    ///
    /// # Errors
    ///
    /// Returns [`TabsError::Config`] if the namespace or shortcode is not a
    /// valid name.
    pub fn from_config(config: &TabsConfig) -> Result<Self, TabsError> {
        config.validate()?;
        Ok(Self {
            ids: RandomIdSource,
            namespace: config.namespace.clone(),
            shortcode: config.shortcode.clone(),
        })
    }
}

impl Default for TabBlockBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: IdSource> TabBlockBuilder<S> {
    /// Replace the id source, keeping other settings.
    #[must_use]
    pub fn with_id_source<T: IdSource>(self, ids: T) -> TabBlockBuilder<T> {
        TabBlockBuilder {
            ids,
            namespace: self.namespace,
            shortcode: self.shortcode,
        }
    }

    /// Set the base id prefix.
    ///
    /// # Errors
    ///
    /// Returns [`TabsError::Config`] unless `namespace` starts with an ASCII
    /// letter and contains only `[A-Za-z0-9_-]`.
    pub fn with_namespace(mut self, namespace: impl Into<String>) -> Result<Self, TabsError> {
        let namespace = namespace.into();
        validate_name(&namespace, "namespace")?;
        self.namespace = namespace;
        Ok(self)
    }

    /// Set the shortcode name reported in errors and matched by
    /// [`TabsShortcode`](crate::TabsShortcode).
    ///
    /// # Errors
    ///
    /// Returns [`TabsError::Config`] if `shortcode` is not a valid name.
    pub fn with_shortcode(mut self, shortcode: impl Into<String>) -> Result<Self, TabsError> {
        let shortcode = shortcode.into();
        validate_name(&shortcode, "shortcode")?;
        self.shortcode = shortcode;
        Ok(self)
    }

    /// Shortcode name.
    #[must_use]
    pub fn shortcode(&self) -> &str {
        &self.shortcode
    }

    /// Draw a fresh base id.
    #[must_use]
    pub fn create_base_id(&self) -> String {
        create_base_id(&self.ids, &self.namespace)
    }

    /// Build a tab block from input elements.
    ///
    /// `label_selector` picks the nav link label of each element and
    /// `content_selector` picks the nodes of its pane. Both the nav list and
    /// the pane container are built from one enumeration of `elements`.
    pub fn create_tab_block<'a, I, L, C>(
        &self,
        elements: I,
        label_selector: L,
        content_selector: C,
    ) -> Element
    where
        I: IntoIterator<Item = &'a Element>,
        L: Fn(&Element) -> Option<Node>,
        C: Fn(&Element) -> Vec<Node>,
    {
        let base_id = self.create_base_id();
        let tabs = collect_tabs(elements, label_selector, content_selector, &base_id);
        tracing::debug!(base_id = %base_id, tab_count = tabs.len(), "Built tab block");

        Element::new("div")
            .with_attr("class", "tab-block")
            .with_attr("id", base_id)
            .with_child(create_tab_list(&tabs))
            .with_child(create_tab_pane_container(&tabs))
    }

    /// Transform shortcode content into compact tab block markup.
    ///
    /// `content` must be a well-formed document whose root element's child
    /// elements are the tabs. The first child node of each tab is its label
    /// and the remaining nodes are its pane content. Text between tabs is
    /// ignored.
    ///
    /// # Errors
    ///
    /// Returns [`TabsError::MalformedInput`] if `content` cannot be parsed.
    pub fn render(&self, content: &str) -> Result<String, TabsError> {
        let root = MarkupParser::new()
            .parse(content)
            .map_err(|source| TabsError::MalformedInput {
                shortcode: self.shortcode.clone(),
                source,
            })?;

        let block = self.create_tab_block(root.child_elements(), first_child, children_after_first);
        Ok(MarkupSerializer::new().serialize(&block))
    }
}
