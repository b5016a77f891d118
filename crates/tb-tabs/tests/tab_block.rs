//! End-to-end checks of rendered tab blocks.

use pretty_assertions::assert_eq;
use tb_markup::{Element, MarkupParser, Node};
use tb_tabs::{SequentialIdSource, TabBlockBuilder, TabsError, ids};

fn builder() -> TabBlockBuilder<SequentialIdSource> {
    TabBlockBuilder::new().with_id_source(SequentialIdSource::new())
}

/// Render `content` and parse the output back into a tree.
fn render_tree(content: &str) -> Element {
    let html = builder().render(content).unwrap();
    MarkupParser::new().parse(&html).unwrap()
}

fn input_with_tabs(n: usize) -> String {
    let mut content = String::from("<tabs>");
    for i in 0..n {
        content.push_str(&format!("<div>Tab {i}<p>Body {i}</p></div>"));
    }
    content.push_str("</tabs>");
    content
}

/// Return the links and panes of a rendered block.
fn links_and_panes(block: &Element) -> (Vec<&Element>, Vec<&Element>) {
    let mut parts = block.child_elements();
    let list = parts.next().unwrap();
    let container = parts.next().unwrap();
    assert!(parts.next().is_none());

    let links = list
        .child_elements()
        .map(|li| li.child_elements().next().unwrap())
        .collect();
    let panes = container.child_elements().collect();
    (links, panes)
}

#[test]
fn test_tab_and_pane_counts_match_input() {
    for n in 1..=6 {
        let block = render_tree(&input_with_tabs(n));
        let (links, panes) = links_and_panes(&block);
        assert_eq!(links.len(), n);
        assert_eq!(panes.len(), n);
    }
}

#[test]
fn test_ids_derive_from_base_id_by_position() {
    let block = render_tree(&input_with_tabs(4));
    let base_id = block.attr("id").unwrap();
    let (links, panes) = links_and_panes(&block);

    for (i, (link, pane)) in links.iter().zip(&panes).enumerate() {
        let tab_id = ids::create_tab_id(base_id, i);
        assert_eq!(link.attr("id"), Some(format!("{tab_id}-link").as_str()));
        assert_eq!(pane.attr("id"), Some(format!("{tab_id}-pane").as_str()));
    }
}

#[test]
fn test_links_and_panes_reference_each_other() {
    let block = render_tree(&input_with_tabs(5));
    let (links, panes) = links_and_panes(&block);

    for (link, pane) in links.iter().zip(&panes) {
        assert_eq!(link.attr("aria-controls"), pane.attr("id"));
        assert_eq!(pane.attr("aria-labelledby"), link.attr("id"));
        let pane_id = pane.attr("id").unwrap();
        assert_eq!(link.attr("href"), Some(format!("#{pane_id}").as_str()));
    }
}

#[test]
fn test_only_first_pair_is_active() {
    let block = render_tree(&input_with_tabs(3));
    let (links, panes) = links_and_panes(&block);

    let active_links: Vec<usize> = links
        .iter()
        .enumerate()
        .filter(|(_, l)| l.attr("aria-selected") == Some("true"))
        .map(|(i, _)| i)
        .collect();
    let active_panes: Vec<usize> = panes
        .iter()
        .enumerate()
        .filter(|(_, p)| p.attr("class") == Some("tab-pane show active"))
        .map(|(i, _)| i)
        .collect();

    assert_eq!(active_links, vec![0]);
    assert_eq!(active_panes, vec![0]);
    assert_eq!(links[0].attr("class"), Some("nav-link active"));
    for link in &links[1..] {
        assert_eq!(link.attr("class"), Some("nav-link"));
        assert_eq!(link.attr("aria-selected"), Some("false"));
    }
    for pane in &panes[1..] {
        assert_eq!(pane.attr("class"), Some("tab-pane"));
    }
}

#[test]
fn test_single_tab_is_active() {
    let block = render_tree(&input_with_tabs(1));
    let (links, panes) = links_and_panes(&block);
    assert_eq!(links[0].attr("aria-selected"), Some("true"));
    assert_eq!(panes[0].attr("class"), Some("tab-pane show active"));
}

#[test]
fn test_pane_holds_content_without_label() {
    let block = render_tree("<tabs><div>Tab A<p>one</p><ul><li>two</li></ul></div></tabs>");
    let (links, panes) = links_and_panes(&block);

    assert_eq!(links[0].children, vec![Node::text("Tab A")]);
    assert_eq!(
        panes[0].children,
        vec![
            Node::from(Element::new("p").with_text("one")),
            Node::from(Element::new("ul").with_child(Element::new("li").with_text("two"))),
        ]
    );
}

#[test]
fn test_two_tab_scenario() {
    let block = render_tree(
        "<tabs><div>One<p>First body</p></div><div>Two<p>Second body</p></div></tabs>",
    );
    assert_eq!(block.tag, "div");
    assert_eq!(block.attr("class"), Some("tab-block"));
    assert_eq!(block.attr("id"), Some("tabs__t0"));

    let (links, panes) = links_and_panes(&block);
    assert_eq!(links[0].text_content(), "One");
    assert_eq!(links[1].text_content(), "Two");
    assert_eq!(
        panes[0].children,
        vec![Node::from(Element::new("p").with_text("First body"))]
    );
    assert_eq!(
        panes[1].children,
        vec![Node::from(Element::new("p").with_text("Second body"))]
    );
}

#[test]
fn test_output_is_compact() {
    let html = builder()
        .render("<tabs>\n  <div>A<p>a</p></div>\n</tabs>")
        .unwrap();
    assert!(!html.contains('\n'));
    assert!(!html.contains("> <"));
}

#[test]
fn test_label_text_is_escaped() {
    let html = builder()
        .render("<tabs><div>a &lt;b&gt; &amp; c<p>x</p></div></tabs>")
        .unwrap();
    assert!(html.contains(">a &lt;b&gt; &amp; c</a>"));
}

#[test]
fn test_cdata_label_keeps_entity_text() {
    let html = builder()
        .render("<tabs><div><![CDATA[&nbsp;]]><p>x</p></div></tabs>")
        .unwrap();
    assert!(html.contains(">&amp;nbsp;</a>"));
    assert!(!html.contains('\u{a0}'));
}

#[test]
fn test_html_entity_in_label_resolves() {
    let html = builder()
        .render("<tabs><div>A&nbsp;B<p>x</p></div></tabs>")
        .unwrap();
    assert!(html.contains(">A\u{a0}B</a>"));
}

#[test]
fn test_forbidden_char_reference_stays_escaped() {
    let html = builder()
        .render("<tabs><div>A&#0;<p>x</p></div></tabs>")
        .unwrap();
    assert!(html.contains(">A&amp;#0;</a>"));
    assert!(!html.contains('\0'));
}

#[test]
fn test_malformed_inputs_fail() {
    let cases = [
        "<tabs><div>One<p>First</div></tabs>",
        "<tabs><div>One</span></tabs>",
        "<tabs><div>One</div>",
        "<tabs><div a=1>One</div></tabs>",
        "",
        "plain text",
    ];
    for content in cases {
        let result = builder().render(content);
        assert!(
            matches!(result, Err(TabsError::MalformedInput { .. })),
            "expected failure for {content:?}"
        );
    }
}
