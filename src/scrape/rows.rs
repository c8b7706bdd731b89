// src/scrape/rows.rs
//
// Walks the located element and slices each row into cell texts. Rows that are
// too short are skipped here; everything else goes on to the normalizer.

use scraper::{ElementRef, Selector};

use crate::core::html::text_of;
use crate::specs::schema::{CellPick, Compiled};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ParsedRows {
    pub rows: Vec<Vec<String>>,
    /// Rows discarded for having fewer than `min_columns` cells.
    pub skipped: usize,
}

pub fn parse_rows(scope: ElementRef<'_>, compiled: &Compiled, min_columns: usize) -> ParsedRows {
    let mut out = ParsedRows::default();

    let mut rows = scope.select(&compiled.rows);
    if compiled.skip_header {
        rows.next();
    }

    for row in rows {
        let cells = match &compiled.cells {
            CellPick::All(td) => Some(row.select(td).map(text_of).collect::<Vec<_>>()),
            CellPick::Groups(groups) => pick_groups(row, groups),
        };
        match cells {
            Some(cells) if cells.len() >= min_columns => out.rows.push(cells),
            _ => out.skipped += 1,
        }
    }

    logd!("Rows: kept={} skipped={}", out.rows.len(), out.skipped);
    out
}

/// Concatenate the first `take` matches of every group; `None` if any group falls short.
fn pick_groups(row: ElementRef<'_>, groups: &[(Selector, usize)]) -> Option<Vec<String>> {
    let mut cells = Vec::new();
    for (sel, take) in groups {
        let found: Vec<String> = row.select(sel).take(*take).map(text_of).collect();
        if found.len() < *take {
            return None;
        }
        cells.extend(found);
    }
    Some(cells)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::html::{locate, parse_document, selector};

    fn table_compiled() -> Compiled {
        Compiled {
            scope: Some(selector("table#t").unwrap()),
            rows: selector("tr").unwrap(),
            cells: CellPick::All(selector("td").unwrap()),
            skip_header: true,
        }
    }

    #[test]
    fn header_is_dropped_and_short_rows_skipped() {
        let doc = parse_document(
            r#"<table id="t">
                 <tr><th>A</th><th>B</th><th>C</th></tr>
                 <tr><td>1</td><td>2</td><td>3</td></tr>
                 <tr><td colspan="3">Conference footnote</td></tr>
                 <tr><td>4</td><td> 5 </td><td>6</td></tr>
               </table>"#,
        );
        let c = table_compiled();
        let table = locate(&doc, c.scope.as_ref()).unwrap();
        let parsed = parse_rows(table, &c, 3);

        assert_eq!(parsed.rows, vec![
            vec![s!("1"), s!("2"), s!("3")],
            vec![s!("4"), s!("5"), s!("6")],
        ]);
        assert_eq!(parsed.skipped, 1);
    }

    #[test]
    fn output_never_exceeds_input_rows() {
        let doc = parse_document(
            r#"<table id="t"><tr><th>h</th></tr><tr><td>a</td></tr><tr></tr><tr><td>b</td><td>c</td></tr></table>"#,
        );
        let c = table_compiled();
        let table = locate(&doc, c.scope.as_ref()).unwrap();
        for min in 0..4 {
            let parsed = parse_rows(table, &c, min);
            assert!(parsed.rows.len() <= 3);
            assert_eq!(parsed.rows.len() + parsed.skipped, 3);
            assert!(parsed.rows.iter().all(|r| r.len() >= min));
        }
    }

    #[test]
    fn block_groups_take_first_n_and_require_all() {
        let doc = parse_document(
            r#"<div class="eventRow">
                 <span class="team-name">Duke</span><span class="team-name">UNC</span>
                 <span class="odds-value">-3.5</span><span class="odds-value">151.5</span>
                 <span class="odds-value">-160</span><span class="odds-value">+135</span>
                 <span class="odds-value">extra</span>
               </div>
               <div class="eventRow">
                 <span class="team-name">Kansas</span>
                 <span class="odds-value">-1</span>
               </div>"#,
        );
        let c = Compiled {
            scope: None,
            rows: selector("div.eventRow").unwrap(),
            cells: CellPick::Groups(vec![
                (selector("span.team-name").unwrap(), 2),
                (selector("span.odds-value").unwrap(), 4),
            ]),
            skip_header: false,
        };
        let root = locate(&doc, None).unwrap();
        let parsed = parse_rows(root, &c, 6);

        assert_eq!(parsed.rows, vec![vec![
            s!("Duke"), s!("UNC"), s!("-3.5"), s!("151.5"), s!("-160"), s!("+135"),
        ]]);
        assert_eq!(parsed.skipped, 1);
    }
}
