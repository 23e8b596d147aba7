//! Day-over-day comparison of spend and per-unit costs.

use std::fmt;

use crate::record::AdRecord;

/// A metric's movement between two dated records.
#[derive(Clone, Debug, PartialEq)]
pub enum Change {
    Delta { amount: f64, percent: f64 },
    /// The previous value was zero or not a number, so there is no ratio to
    /// report.
    NoBaseline,
}

impl fmt::Display for Change {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Change::Delta { amount, percent } => write!(f, "{amount:+.2} ({percent:+.2}%)"),
            Change::NoBaseline => write!(f, "no comparable baseline"),
        }
    }
}

/// Movement from one record to the next, across the three tracked metrics.
#[derive(Clone, Debug, PartialEq)]
pub struct TrendPoint {
    pub from_date: String,
    pub to_date: String,
    pub cost: Change,
    pub cost_per_lead: Change,
    pub cost_per_message: Change,
}

impl fmt::Display for TrendPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} to {}: cost {}, cost/lead {}, cost/message {}",
            self.from_date, self.to_date, self.cost, self.cost_per_lead, self.cost_per_message
        )
    }
}

pub fn compare(current: &AdRecord, previous: &AdRecord) -> TrendPoint {
    TrendPoint {
        from_date: previous.date.clone(),
        to_date: current.date.clone(),
        cost: change(
            current.cost_value().unwrap_or(0.0),
            previous.cost_value().unwrap_or(0.0),
        ),
        cost_per_lead: change(current.cost_per_lead(), previous.cost_per_lead()),
        cost_per_message: change(current.cost_per_message(), previous.cost_per_message()),
    }
}

fn change(current: f64, previous: f64) -> Change {
    if previous <= 0.0 {
        return Change::NoBaseline;
    }
    let amount = current - previous;
    Change::Delta {
        amount,
        percent: amount / previous * 100.0,
    }
}

/// Records ordered by their date strings. Dates are stored as entered; ISO
/// dates sort correctly and anything else sorts lexically.
pub fn sorted_by_date(records: &[AdRecord]) -> Vec<AdRecord> {
    let mut sorted = records.to_vec();
    sorted.sort_by(|a, b| a.date.cmp(&b.date));
    sorted
}

/// One trend point per adjacent pair of date-sorted records. Fewer than two
/// records means there is nothing to compare.
pub fn trend_report(records: &[AdRecord]) -> Vec<TrendPoint> {
    let sorted = sorted_by_date(records);
    sorted
        .windows(2)
        .map(|pair| compare(&pair[1], &pair[0]))
        .collect()
}
