//! Table elements as pipe tables.

use super::node::ContentNode;

const ROW_TAGS: &[&str] = &["tr"];
const SECTION_TAGS: &[&str] = &["thead", "tbody", "tfoot"];
const CELL_TAGS: &[&str] = &["th", "td"];

/// Rows of a table: `tr` children, directly or inside `thead`/`tbody`/`tfoot`.
fn rows(table: &ContentNode) -> Vec<&ContentNode> {
    let mut rows = Vec::new();
    for child in table.children() {
        if child.is_one_of(ROW_TAGS) {
            rows.push(child);
        } else if child.is_one_of(SECTION_TAGS) {
            rows.extend(child.children().iter().filter(|c| c.is_one_of(ROW_TAGS)));
        }
    }
    rows
}

fn push_row(out: &mut String, cells: &[String]) {
    out.push_str("| ");
    out.push_str(&cells.join(" | "));
    out.push_str(" |\n");
}

/// Format `table` as a pipe table.
///
/// The first row is the header and is followed by a `---` separator row. Each cell is
/// converted with `cell_text`, trimmed, and has `|` escaped. The result starts with a
/// newline; a table without rows yields just that newline.
pub fn format_table<F>(table: &ContentNode, cell_text: F) -> String
where
    F: Fn(&ContentNode) -> String,
{
    let convert_row = |row: &ContentNode| -> Vec<String> {
        row.children()
            .iter()
            .filter(|c| c.is_one_of(CELL_TAGS))
            .map(|cell| cell_text(cell).trim().replace('|', "\\|"))
            .collect()
    };

    let mut out = String::from("\n");
    let rows = rows(table);
    if let Some((header, body)) = rows.split_first() {
        let header_cells = convert_row(header);
        push_row(&mut out, &header_cells);
        let separator = vec!["---".to_string(); header_cells.len()];
        push_row(&mut out, &separator);
        for row in body {
            push_row(&mut out, &convert_row(row));
        }
    }

    out
}
