//! Wire models for advertising-spend observations.

use serde::{Deserialize, Serialize};

/// One persisted observation. `id` is assigned by the backend and never
/// generated or changed on this side.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdRecord {
    pub id: i64,
    pub date: String,
    /// Kept as the text the backend sent. The collection endpoint may encode
    /// cost as a JSON number or a JSON string; either way the received form
    /// is preserved so `"10.50"` is not collapsed to `10.5` in a view.
    #[serde(deserialize_with = "cost_text")]
    pub cost: String,
    pub lead_count: u32,
    pub message_count: u32,
}

/// A record as submitted: no `id`, and `date`/`cost` carry the raw user
/// input without format validation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewAdRecord {
    pub date: String,
    pub cost: String,
    pub lead_count: u32,
    pub message_count: u32,
}

impl AdRecord {
    /// Cost as a number, or `None` when the stored text is not numeric.
    pub fn cost_value(&self) -> Option<f64> {
        self.cost.trim().parse().ok()
    }

    /// Spend per submitted lead; 0 when there are no leads.
    pub fn cost_per_lead(&self) -> f64 {
        if self.lead_count == 0 {
            return 0.0;
        }
        self.cost_value().unwrap_or(0.0) / f64::from(self.lead_count)
    }

    /// Spend per direct message; 0 when there are no messages.
    pub fn cost_per_message(&self) -> f64 {
        if self.message_count == 0 {
            return 0.0;
        }
        self.cost_value().unwrap_or(0.0) / f64::from(self.message_count)
    }
}

fn cost_text<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::Error as _;

    match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::String(text) => Ok(text),
        serde_json::Value::Number(number) => Ok(number.to_string()),
        other => Err(D::Error::custom(format!(
            "cost must be a string or a number, got {other}"
        ))),
    }
}
