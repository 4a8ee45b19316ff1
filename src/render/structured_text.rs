//! HTML rendering for DAST structured-text fields.
//!
//! Record references (`block`, `inlineBlock`, `inlineItem`, `itemLink`) are
//! resolved against the FAQ entries fetched alongside the document. A reference
//! that cannot be resolved and any node type we don't know render as nothing.

use crate::models::{Document, FaqEntry, Mark, Node, StructuredText};
use maud::{html, Markup};
use tracing::warn;

/// Renders `text`, or returns `None` when the document is empty or unreadable.
pub fn render(text: &StructuredText) -> Option<Markup> {
    let document: Document = match serde_json::from_value(text.value.clone()) {
        Ok(document) => document,
        Err(e) => {
            warn!("Skipping unreadable structured text: {}", e);
            return None;
        }
    };

    match &document.document {
        Node::Root { children } if children.is_empty() => None,
        root => Some(html! { div.structured-text { (node(root, text)) } }),
    }
}

fn nodes(children: &[Node], text: &StructuredText) -> Markup {
    html! {
        @for child in children {
            (node(child, text))
        }
    }
}

fn node(n: &Node, text: &StructuredText) -> Markup {
    match n {
        Node::Root { children } => nodes(children, text),
        Node::Paragraph { children } => html! { p { (nodes(children, text)) } },
        Node::Heading { level, children } => heading(*level, nodes(children, text)),
        Node::List { style, children } => {
            let items = nodes(children, text);
            if style.as_deref() == Some("numbered") {
                html! { ol { (items) } }
            } else {
                html! { ul { (items) } }
            }
        }
        Node::ListItem { children } => html! { li { (nodes(children, text)) } },
        Node::Blockquote {
            attribution,
            children,
        } => html! {
            blockquote {
                (nodes(children, text))
                @if let Some(attribution) = attribution {
                    footer { (attribution) }
                }
            }
        },
        Node::Code { code, language } => html! {
            pre {
                code class=[language.as_ref().map(|l| format!("language-{}", l))] { (code) }
            }
        },
        Node::ThematicBreak => html! { hr; },
        Node::Span { value, marks } => span(value, marks),
        Node::Link { url, children } => html! { a href=(url) { (nodes(children, text)) } },
        Node::ItemLink { item, children } => match text.record(item) {
            Some(entry) => html! { a href=(anchor(entry)) { (nodes(children, text)) } },
            None => nodes(children, text),
        },
        Node::InlineItem { item } => match text.record(item) {
            Some(entry) => html! { a.faq-ref href=(anchor(entry)) { (entry.question) } },
            None => html! {},
        },
        Node::Block { item } | Node::InlineBlock { item } => match text.record(item) {
            Some(entry) => faq_entry(entry),
            None => {
                warn!(item = %item, "Structured text references a missing record");
                html! {}
            }
        },
        Node::Unknown => html! {},
    }
}

fn heading(level: u8, inner: Markup) -> Markup {
    match level {
        0 | 1 => html! { h1 { (inner) } },
        2 => html! { h2 { (inner) } },
        3 => html! { h3 { (inner) } },
        4 => html! { h4 { (inner) } },
        5 => html! { h5 { (inner) } },
        _ => html! { h6 { (inner) } },
    }
}

/// Span text with `\n` as line breaks, wrapped in one element per mark.
fn span(value: &str, marks: &[Mark]) -> Markup {
    let mut markup = html! {
        @for (i, line) in value.split('\n').enumerate() {
            @if i > 0 { br; }
            (line)
        }
    };
    for mark in marks {
        markup = match mark {
            Mark::Strong => html! { strong { (markup) } },
            Mark::Emphasis => html! { em { (markup) } },
            Mark::Code => html! { code { (markup) } },
            Mark::Underline => html! { u { (markup) } },
            Mark::Strikethrough => html! { s { (markup) } },
            Mark::Highlight => html! { mark { (markup) } },
            Mark::Unknown => markup,
        };
    }
    markup
}

fn anchor(entry: &FaqEntry) -> String {
    format!("#faq-{}", entry.id)
}

fn faq_entry(entry: &FaqEntry) -> Markup {
    html! {
        details.faq id=(format!("faq-{}", entry.id)) {
            summary { (entry.question) }
            div.faq-answer { (entry.answer) }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn faq(value: serde_json::Value) -> StructuredText {
        StructuredText {
            value,
            blocks: vec![FaqEntry {
                id: "faq-1".into(),
                question: "Is breakfast included?".into(),
                answer: "Yes, 7 to 10am.".into(),
            }],
            links: vec![],
        }
    }

    #[test]
    fn renders_blocks_as_question_and_answer() {
        let text = faq(json!({
            "schema": "dast",
            "document": {"type": "root", "children": [
                {"type": "heading", "level": 3, "children": [{"type": "span", "value": "Good to know"}]},
                {"type": "block", "item": "faq-1"}
            ]}
        }));

        let html = render(&text).unwrap().into_string();
        assert!(html.contains("<h3>Good to know</h3>"));
        assert!(html.contains("<summary>Is breakfast included?</summary>"));
        assert!(html.contains("Yes, 7 to 10am."));
    }

    #[test]
    fn applies_marks_and_line_breaks() {
        let markup = span("a\nb", &[Mark::Strong, Mark::Emphasis]).into_string();
        assert_eq!(markup, "<em><strong>a<br>b</strong></em>");
    }

    #[test]
    fn unresolved_and_unknown_nodes_render_nothing() {
        let text = faq(json!({
            "schema": "dast",
            "document": {"type": "root", "children": [
                {"type": "block", "item": "missing"},
                {"type": "somethingNew", "children": []},
                {"type": "paragraph", "children": [{"type": "span", "value": "kept"}]}
            ]}
        }));

        let html = render(&text).unwrap().into_string();
        assert_eq!(html, r#"<div class="structured-text"><p>kept</p></div>"#);
    }

    #[test]
    fn custom_marks_keep_the_document() {
        let text = faq(json!({
            "schema": "dast",
            "document": {"type": "root", "children": [
                {"type": "paragraph", "children": [
                    {"type": "span", "value": "Ask us", "marks": ["myCustomMark", "emphasis"]}
                ]},
                {"type": "block", "item": "faq-1"}
            ]}
        }));

        let html = render(&text).unwrap().into_string();
        assert!(html.contains("<p><em>Ask us</em></p>"));
        assert!(html.contains("<summary>Is breakfast included?</summary>"));
    }

    #[test]
    fn empty_or_malformed_documents_yield_none() {
        assert!(render(&faq(json!({
            "schema": "dast",
            "document": {"type": "root", "children": []}
        })))
        .is_none());
        assert!(render(&faq(json!(null))).is_none());
        assert!(render(&faq(json!({"schema": "dast"}))).is_none());
    }

    #[test]
    fn numbered_lists_are_ordered() {
        let text = faq(json!({
            "schema": "dast",
            "document": {"type": "root", "children": [
                {"type": "list", "style": "numbered", "children": [
                    {"type": "listItem", "children": [
                        {"type": "paragraph", "children": [{"type": "span", "value": "first"}]}
                    ]}
                ]}
            ]}
        }));

        let html = render(&text).unwrap().into_string();
        assert!(html.contains("<ol><li><p>first</p></li></ol>"));
    }
}
