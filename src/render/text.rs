use scraper::{Html, Node};

const BLOCK_ELEMENTS: &[&str] = &[
    "p", "br", "div", "li", "ul", "ol", "h1", "h2", "h3", "h4", "h5", "h6", "blockquote", "tr",
    "td", "th",
];

/// Visible text of an HTML fragment with whitespace collapsed.
pub fn plain_text(html: &str) -> String {
    let fragment = Html::parse_fragment(html);
    let mut raw = String::new();

    for node in fragment.root_element().descendants() {
        match node.value() {
            Node::Text(text) => raw.push_str(text),
            Node::Element(element) if BLOCK_ELEMENTS.contains(&element.name()) => raw.push(' '),
            _ => {}
        }
    }

    raw.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Plain-text excerpt of at most `max_chars` characters, cut at a word boundary.
pub fn excerpt(html: &str, max_chars: usize) -> String {
    let text = plain_text(html);
    if text.chars().count() <= max_chars {
        return text;
    }

    let cut: String = text.chars().take(max_chars.saturating_sub(1)).collect();
    let cut = match cut.rfind(' ') {
        Some(pos) if pos > 0 => &cut[..pos],
        _ => cut.as_str(),
    };
    format!("{}…", cut.trim_end())
}
