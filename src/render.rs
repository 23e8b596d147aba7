//! Text projection of a record sequence. Rendering is a pure function of
//! its input; callers pass the rows, never a shared view.

use crate::record::AdRecord;

const COLUMNS: [&str; 5] = ["id", "date", "cost", "leadCount", "messageCount"];

/// Render one row per record, cells in fixed {id, date, cost, leadCount,
/// messageCount} order, under a header and separator line.
pub fn table(records: &[AdRecord]) -> String {
    let rows: Vec<[String; 5]> = records.iter().map(cells).collect();

    let mut widths = COLUMNS.map(str::len);
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row.iter()) {
            *width = (*width).max(cell.len());
        }
    }

    let mut out = String::new();
    push_row(&mut out, &COLUMNS.map(str::to_string), &widths);
    let total: usize = widths.iter().sum::<usize>() + 3 * (COLUMNS.len() - 1);
    out.push_str(&"-".repeat(total));
    out.push('\n');
    for row in &rows {
        push_row(&mut out, row, &widths);
    }
    out
}

fn cells(record: &AdRecord) -> [String; 5] {
    [
        record.id.to_string(),
        record.date.clone(),
        record.cost.clone(),
        record.lead_count.to_string(),
        record.message_count.to_string(),
    ]
}

fn push_row(out: &mut String, row: &[String; 5], widths: &[usize; 5]) {
    let mut line = String::new();
    for (index, (cell, width)) in row.iter().zip(widths.iter().copied()).enumerate() {
        if index > 0 {
            line.push_str(" | ");
        }
        line.push_str(&format!("{cell:<width$}"));
    }
    out.push_str(line.trim_end());
    out.push('\n');
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: i64, date: &str, cost: &str, leads: u32, messages: u32) -> AdRecord {
        AdRecord {
            id,
            date: date.to_string(),
            cost: cost.to_string(),
            lead_count: leads,
            message_count: messages,
        }
    }

    fn body_rows(rendered: &str) -> Vec<Vec<String>> {
        rendered
            .lines()
            .skip(2)
            .map(|line| {
                line.split('|')
                    .map(|cell| cell.trim().to_string())
                    .collect()
            })
            .collect()
    }

    #[test]
    fn renders_one_row_per_record_with_cells_in_column_order() {
        let records = vec![
            record(1, "2024-01-01", "10.50", 3, 1),
            record(2, "2024-01-02", "20", 5, 2),
        ];
        let rendered = table(&records);

        let rows = body_rows(&rendered);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0], vec!["1", "2024-01-01", "10.50", "3", "1"]);
        assert_eq!(rows[1], vec!["2", "2024-01-02", "20", "5", "2"]);
    }

    #[test]
    fn header_names_the_five_wire_columns() {
        let rendered = table(&[]);
        let header: Vec<&str> = rendered
            .lines()
            .next()
            .expect("header line")
            .split('|')
            .map(str::trim)
            .collect();
        assert_eq!(header, vec!["id", "date", "cost", "leadCount", "messageCount"]);
    }

    #[test]
    fn empty_input_renders_no_body_rows() {
        let rendered = table(&[]);
        assert_eq!(rendered.lines().count(), 2);
    }

    #[test]
    fn cost_text_is_preserved_verbatim() {
        let rendered = table(&[record(7, "2024-02-03", "10.50", 0, 0)]);
        assert!(rendered.contains("10.50"));
        assert!(!rendered.contains("10.5 "));
    }
}
