use std::fmt;

use crate::client::RecordsApi;
use crate::record::{AdRecord, NewAdRecord};
use crate::{AdboardError, Result};

/// The four entry fields, held as the raw text the user typed. The counts
/// are only parsed at submit time; date and cost are sent through as-is.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct EntryForm {
    pub date: String,
    pub cost: String,
    pub lead_count: String,
    pub message_count: String,
}

impl EntryForm {
    pub fn parse(&self) -> Result<NewAdRecord> {
        Ok(NewAdRecord {
            date: self.date.clone(),
            cost: self.cost.clone(),
            lead_count: parse_count("leadCount", &self.lead_count)?,
            message_count: parse_count("messageCount", &self.message_count)?,
        })
    }

    /// Back to the default (empty) state, as after a successful submit.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

fn parse_count(field: &'static str, raw: &str) -> Result<u32> {
    raw.trim()
        .parse()
        .map_err(|_| AdboardError::InvalidField {
            field,
            value: raw.to_string(),
        })
}

/// User-visible outcome of a board operation. The caller surfaces these;
/// nothing is retried automatically.
#[derive(Clone, Debug, PartialEq)]
pub enum Notice {
    Loaded(usize),
    LoadFailed(String),
    Submitted,
    SubmitFailed(String),
}

impl Notice {
    pub fn is_failure(&self) -> bool {
        matches!(self, Notice::LoadFailed(_) | Notice::SubmitFailed(_))
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Notice::Loaded(count) => write!(f, "loaded {count} records"),
            Notice::LoadFailed(message) => write!(f, "failed to load records: {message}"),
            Notice::Submitted => write!(f, "record added"),
            Notice::SubmitFailed(message) => write!(f, "failed to add record: {message}"),
        }
    }
}

/// Owns the entry form and the rows of the visible table. The rows are a
/// transient projection of the last successful list response; a failed load
/// leaves them untouched rather than stranding an empty view.
pub struct Board {
    api: Box<dyn RecordsApi>,
    form: EntryForm,
    rows: Vec<AdRecord>,
}

impl Board {
    pub fn new(api: impl RecordsApi + 'static) -> Self {
        Self {
            api: Box::new(api),
            form: EntryForm::default(),
            rows: Vec::new(),
        }
    }

    pub fn rows(&self) -> &[AdRecord] {
        &self.rows
    }

    pub fn form(&self) -> &EntryForm {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut EntryForm {
        &mut self.form
    }

    /// Run the list operation and replace the rows on success.
    pub async fn load(&mut self) -> Notice {
        match self.api.list().await {
            Ok(records) => {
                let count = records.len();
                self.rows = records;
                Notice::Loaded(count)
            }
            Err(err) => Notice::LoadFailed(err.to_string()),
        }
    }

    /// Parse the form, send the create request, and on success reset the
    /// form and await a fresh list so the refresh is sequenced rather than
    /// incidental. On any failure the form keeps what the user typed and the
    /// rows stay as they were.
    pub async fn submit(&mut self) -> Vec<Notice> {
        let record = match self.form.parse() {
            Ok(record) => record,
            Err(err) => return vec![Notice::SubmitFailed(err.to_string())],
        };

        if let Err(err) = self.api.create(&record).await {
            return vec![Notice::SubmitFailed(err.to_string())];
        }

        self.form.reset();
        let refreshed = self.load().await;
        vec![Notice::Submitted, refreshed]
    }
}
