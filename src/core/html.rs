// src/core/html.rs
//
// Markup → DOM, one lookup for the table a source cares about, and the text
// helpers the row parser uses on cells.

use scraper::{ElementRef, Html, Selector};

use crate::error::SchemaError;

/// Where a source keeps its data inside the page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Locator {
    /// `<tag id="...">`
    Id { tag: &'static str, id: &'static str },
    /// `<tag class="... class ...">`
    Class { tag: &'static str, class: &'static str },
    /// The whole page; rows are picked out directly.
    Document,
}

impl Locator {
    pub fn css(&self) -> Option<String> {
        match self {
            Locator::Id { tag, id } => Some(format!("{tag}#{id}")),
            Locator::Class { tag, class } => Some(format!("{tag}.{class}")),
            Locator::Document => None,
        }
    }

    pub fn describe(&self) -> String {
        self.css().unwrap_or_else(|| s!(":root"))
    }
}

pub fn parse_document(markup: &str) -> Html {
    Html::parse_document(markup)
}

pub fn selector(css: &str) -> Result<Selector, SchemaError> {
    Selector::parse(css).map_err(|e| SchemaError::Selector {
        css: s!(css),
        reason: format!("{e:?}"),
    })
}

/// First element matching `sel`, or the document root when there is no selector.
/// `None` means the page simply does not carry the table (layout change, paywall).
pub fn locate<'a>(doc: &'a Html, sel: Option<&Selector>) -> Option<ElementRef<'a>> {
    match sel {
        Some(sel) => doc.select(sel).next(),
        None => Some(doc.root_element()),
    }
}

/// All descendant text of an element, whitespace collapsed and trimmed.
pub fn text_of(el: ElementRef<'_>) -> String {
    let raw: String = el.text().collect();
    normalize_ws(&raw)
}

/// Collapse sequences of whitespace (including `&nbsp;`) into a single space and trim.
pub fn normalize_ws(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_space = false;
    for ch in s.chars() {
        if ch.is_whitespace() {
            if !prev_space {
                out.push(' ');
                prev_space = true;
            }
        } else {
            out.push(ch);
            prev_space = false;
        }
    }
    out.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE: &str = r#"
        <html><body>
          <table class="promo"><tr><td>ad</td></tr></table>
          <table id="ratings-table" class="t-rankings-table wide">
            <tr><th>Rk</th><th>Team</th></tr>
            <tr><td>1</td><td> Houston&nbsp;&nbsp;<span>(1 seed)</span> </td></tr>
          </table>
        </body></html>"#;

    #[test]
    fn locator_css_forms() {
        let by_id = Locator::Id { tag: "table", id: "ratings-table" };
        let by_class = Locator::Class { tag: "table", class: "t-rankings-table" };
        assert_eq!(by_id.css().as_deref(), Some("table#ratings-table"));
        assert_eq!(by_class.css().as_deref(), Some("table.t-rankings-table"));
        assert_eq!(Locator::Document.css(), None);
    }

    #[test]
    fn finds_table_by_id_and_by_class() {
        let doc = parse_document(PAGE);
        for loc in [
            Locator::Id { tag: "table", id: "ratings-table" },
            Locator::Class { tag: "table", class: "t-rankings-table" },
        ] {
            let sel = selector(&loc.css().unwrap()).unwrap();
            let table = locate(&doc, Some(&sel)).expect("table");
            assert_eq!(table.value().attr("id"), Some("ratings-table"));
        }
    }

    #[test]
    fn missing_table_is_none_not_an_error() {
        let doc = parse_document("<html><body><p>Subscribe to see ratings</p></body></html>");
        let sel = selector("table#ratings-table").unwrap();
        assert!(locate(&doc, Some(&sel)).is_none());
    }

    #[test]
    fn cell_text_is_flattened_and_trimmed() {
        let doc = parse_document(PAGE);
        let td = selector("#ratings-table td").unwrap();
        let cells: Vec<String> = doc.select(&td).map(text_of).collect();
        assert_eq!(cells, vec![s!("1"), s!("Houston (1 seed)")]);
    }

    #[test]
    fn bad_selector_is_a_schema_error() {
        assert!(matches!(selector("table#"), Err(SchemaError::Selector { .. })));
    }
}
