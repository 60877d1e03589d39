//! HTML to plain text

use scraper::{ElementRef, Html, Node};

/// Tags whose entire subtree is dropped
const SKIP_TAGS: [&str; 4] = ["script", "style", "noscript", "svg"];

/// Tags that end a line of text
const BLOCK_TAGS: [&str; 14] = [
    "p", "div", "li", "tr", "br", "h1", "h2", "h3", "h4", "h5", "h6", "article", "section", "td",
];

/// Extract readable text from an HTML document.
///
/// Text nodes are joined with single spaces; block-level elements start a
/// new line. Script, style, noscript and svg content is skipped.
pub fn html_to_text(html: &str) -> String {
    let document = Html::parse_document(html);
    let body = scraper::Selector::parse("body")
        .ok()
        .and_then(|selector| document.select(&selector).next());
    let root = body.unwrap_or_else(|| document.root_element());

    let mut lines = vec![String::new()];
    walk(root, &mut lines);

    lines
        .into_iter()
        .map(|line| line.trim().to_string())
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

fn walk(element: ElementRef, lines: &mut Vec<String>) {
    let tag = element.value().name();
    if SKIP_TAGS.contains(&tag) {
        return;
    }
    let is_block = BLOCK_TAGS.contains(&tag);
    if is_block {
        lines.push(String::new());
    }

    for child in element.children() {
        match child.value() {
            Node::Text(text) => {
                let words = text.split_whitespace().collect::<Vec<_>>().join(" ");
                if words.is_empty() {
                    continue;
                }
                if let Some(line) = lines.last_mut() {
                    if !line.is_empty() {
                        line.push(' ');
                    }
                    line.push_str(&words);
                }
            }
            Node::Element(_) => {
                if let Some(child_el) = ElementRef::wrap(child) {
                    walk(child_el, lines);
                }
            }
            _ => {}
        }
    }

    if is_block {
        lines.push(String::new());
    }
}
