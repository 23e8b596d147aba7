//! Bulk record import from CSV files shaped {date, cost, leadCount,
//! messageCount}, one observation per row after a header.

use std::io::Read;
use std::path::Path;

use crate::Result;
use crate::record::NewAdRecord;

/// Read records from a CSV file. The first row is treated as a header and
/// skipped. Cell parsing is tolerant: an unparsable numeric cell becomes 0,
/// and the first row with an empty date ends the file, since spreadsheet
/// exports tend to trail off into blank rows.
pub fn read_records(path: impl AsRef<Path>) -> Result<Vec<NewAdRecord>> {
    collect(csv::Reader::from_path(path.as_ref())?)
}

pub fn read_records_from(reader: impl Read) -> Result<Vec<NewAdRecord>> {
    collect(csv::Reader::from_reader(reader))
}

fn collect<R: Read>(mut reader: csv::Reader<R>) -> Result<Vec<NewAdRecord>> {
    let mut records = Vec::new();
    for row in reader.records() {
        let row = row?;
        let date = row.get(0).unwrap_or_default().trim().to_string();
        if date.is_empty() {
            break;
        }
        records.push(NewAdRecord {
            date,
            cost: numeric_cell(row.get(1)),
            lead_count: count_cell(row.get(2)),
            message_count: count_cell(row.get(3)),
        });
    }
    Ok(records)
}

fn numeric_cell(raw: Option<&str>) -> String {
    let text = raw.unwrap_or_default().trim();
    if text.parse::<f64>().is_ok() {
        text.to_string()
    } else {
        "0".to_string()
    }
}

fn count_cell(raw: Option<&str>) -> u32 {
    raw.unwrap_or_default().trim().parse().unwrap_or(0)
}
