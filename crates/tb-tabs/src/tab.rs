//! Tab entries shared by the tab list and pane builders.

use tb_markup::{Element, Node};

use crate::ids::TabId;

/// One tab of a block: everything both builders need for one position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tab {
    /// Zero-based position in the input sequence.
    pub index: usize,
    /// Id derived from the block's base id and `index`.
    pub id: TabId,
    /// Label shown in the nav link; `None` renders an empty link.
    pub label: Option<Node>,
    /// Nodes placed in the content pane.
    pub content: Vec<Node>,
}

impl Tab {
    /// Whether this tab is initially selected. Only the first tab is.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.index == 0
    }
}

/// Enumerate input elements once into tab entries.
///
/// Indices start at 0 and advance by one per element. The list and pane
/// builders both read the returned entries, so their ids cannot drift apart.
pub fn collect_tabs<'a, I, L, C>(
    elements: I,
    label_selector: L,
    content_selector: C,
    base_id: &str,
) -> Vec<Tab>
where
    I: IntoIterator<Item = &'a Element>,
    L: Fn(&Element) -> Option<Node>,
    C: Fn(&Element) -> Vec<Node>,
{
    elements
        .into_iter()
        .enumerate()
        .map(|(index, element)| {
            let label = label_selector(element);
            if label.is_none() {
                tracing::warn!(
                    index,
                    tag = %element.tag,
                    "Tab element has no label node, rendering an empty label"
                );
            }
            Tab {
                index,
                id: TabId::new(base_id, index),
                label,
                content: content_selector(element),
            }
        })
        .collect()
}

/// Label selector: the first child node.
#[must_use]
pub fn first_child(element: &Element) -> Option<Node> {
    element.children.first().cloned()
}

/// Content selector: every child node after the first.
#[must_use]
pub fn children_after_first(element: &Element) -> Vec<Node> {
    element.children.iter().skip(1).cloned().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tab_element(label: &str, body: &str) -> Element {
        Element::new("div")
            .with_text(label)
            .with_child(Element::new("p").with_text(body))
    }

    #[test]
    fn test_first_child_selects_label() {
        let element = tab_element("One", "Body");
        assert_eq!(first_child(&element), Some(Node::text("One")));
    }

    #[test]
    fn test_first_child_of_empty_element() {
        assert_eq!(first_child(&Element::new("div")), None);
    }

    #[test]
    fn test_children_after_first_excludes_label() {
        let element = Element::new("div")
            .with_text("Tab A")
            .with_child(Element::new("p").with_text("x"))
            .with_child(Element::new("ul"));
        let content = children_after_first(&element);
        assert_eq!(
            content,
            vec![
                Node::from(Element::new("p").with_text("x")),
                Node::from(Element::new("ul")),
            ]
        );
    }

    #[test]
    fn test_children_after_first_of_label_only() {
        let element = Element::new("div").with_text("Only label");
        assert!(children_after_first(&element).is_empty());
    }

    #[test]
    fn test_collect_tabs_indices_and_ids() {
        let elements = [tab_element("One", "a"), tab_element("Two", "b")];
        let tabs = collect_tabs(&elements, first_child, children_after_first, "base");

        assert_eq!(tabs.len(), 2);
        assert_eq!(tabs[0].index, 0);
        assert_eq!(tabs[0].id.as_str(), "base-0");
        assert_eq!(tabs[1].index, 1);
        assert_eq!(tabs[1].id.as_str(), "base-1");
        assert!(tabs[0].is_active());
        assert!(!tabs[1].is_active());
    }

    #[test]
    fn test_collect_tabs_uses_selectors() {
        let elements = [tab_element("One", "a")];
        let tabs = collect_tabs(
            &elements,
            |e| e.children.last().cloned(),
            |_| Vec::new(),
            "base",
        );
        assert_eq!(
            tabs[0].label,
            Some(Node::from(Element::new("p").with_text("a")))
        );
        assert!(tabs[0].content.is_empty());
    }

    #[test]
    fn test_collect_tabs_empty_element_has_no_label() {
        let elements = [Element::new("div")];
        let tabs = collect_tabs(&elements, first_child, children_after_first, "base");
        assert_eq!(tabs[0].label, None);
        assert!(tabs[0].content.is_empty());
    }

    #[test]
    fn test_collect_tabs_empty_sequence() {
        let elements: [Element; 0] = [];
        let tabs = collect_tabs(&elements, first_child, children_after_first, "base");
        assert!(tabs.is_empty());
    }
}
