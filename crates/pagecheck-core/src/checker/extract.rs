//! HTML metadata extraction for page checks.

use scraper::{Html, Selector};

/// Metadata pulled out of one HTML document.
///
/// Absent `<h1>` or `<title>` yield an empty string; an absent
/// `<meta name="description">` yields `None`. Anything parses as HTML, so
/// there is no error path: broken markup just produces empty fields.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PageMetadata {
    /// Text of the first `<h1>` element, whitespace-collapsed.
    pub h1: String,
    /// Text of the `<title>` element, whitespace-collapsed.
    pub title: String,
    /// `content` attribute of `<meta name="description">`.
    pub description: Option<String>,
}

/// Parses `html` and extracts the fields a check records.
pub fn page_metadata(html: &str) -> PageMetadata {
    let doc = Html::parse_document(html);
    PageMetadata {
        h1: first_text(&doc, "h1"),
        title: first_text(&doc, "title"),
        description: meta_description(&doc),
    }
}

/// Collapsed text of the first element matching `selector`, or empty.
///
/// The first matching element decides, even when its text is empty; later
/// siblings are never consulted.
fn first_text(doc: &Html, selector: &str) -> String {
    let selector = match Selector::parse(selector) {
        Ok(s) => s,
        Err(_) => return String::new(),
    };

    doc.select(&selector)
        .next()
        .map(|el| normalize_text(&el.text().collect::<Vec<_>>().join(" ")))
        .unwrap_or_default()
}

fn meta_description(doc: &Html) -> Option<String> {
    let selector = match Selector::parse("meta[name=\"description\"]") {
        Ok(s) => s,
        Err(_) => return None,
    };

    doc.select(&selector)
        .find_map(|el| el.value().attr("content"))
        .map(normalize_text)
}

fn normalize_text(input: &str) -> String {
    input.split_whitespace().collect::<Vec<_>>().join(" ")
}
