//! Tab list builder: the nav strip of tab links.

use tb_markup::Element;

use crate::tab::Tab;

/// Build the `ul.nav.nav-tabs` list with one link per tab.
///
/// # Output HTML Structure
///
/// ```html
/// <ul class="nav nav-tabs" role="tablist">
///   <li class="nav-item">
///     <a class="nav-link active" data-toggle="tab" aria-selected="true"
///        aria-controls="{tab}-pane" href="#{tab}-pane" id="{tab}-link">Label</a>
///   </li>
/// </ul>
/// ```
#[must_use]
pub fn create_tab_list(tabs: &[Tab]) -> Element {
    Element::new("ul")
        .with_attr("class", "nav nav-tabs")
        .with_attr("role", "tablist")
        .with_children(tabs.iter().map(|tab| create_tab_item(tab).into()))
}

fn create_tab_item(tab: &Tab) -> Element {
    let active = tab.is_active();
    let pane_id = tab.id.pane_id();

    let mut link = Element::new("a")
        .with_attr("class", if active { "nav-link active" } else { "nav-link" })
        .with_attr("data-toggle", "tab")
        .with_attr("aria-selected", if active { "true" } else { "false" })
        .with_attr("aria-controls", pane_id.as_str())
        .with_attr("href", format!("#{pane_id}"))
        .with_attr("id", tab.id.link_id());
    if let Some(label) = &tab.label {
        link = link.with_child(label.clone());
    }

    Element::new("li")
        .with_attr("class", "nav-item")
        .with_child(link)
}
