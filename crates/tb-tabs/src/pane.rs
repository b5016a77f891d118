//! Tab pane builder: the content container.

use tb_markup::Element;

use crate::tab::Tab;

/// Build the `div.tab-content` container with one pane per tab.
///
/// Panes appear in the same order as the links built by
/// [`create_tab_list`](crate::create_tab_list) from the same entries.
#[must_use]
pub fn create_tab_pane_container(tabs: &[Tab]) -> Element {
    Element::new("div")
        .with_attr("class", "tab-content")
        .with_children(tabs.iter().map(|tab| create_tab_pane(tab).into()))
}

fn create_tab_pane(tab: &Tab) -> Element {
    let class = if tab.is_active() {
        "tab-pane show active"
    } else {
        "tab-pane"
    };

    Element::new("div")
        .with_attr("class", class)
        .with_attr("role", "tabpanel")
        .with_attr("aria-labelledby", tab.id.link_id())
        .with_attr("id", tab.id.pane_id())
        .with_children(tab.content.iter().cloned())
}
