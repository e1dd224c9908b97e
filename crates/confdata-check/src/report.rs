use std::fmt::Write as _;

use anyhow::Result;
use serde::Serialize;

use confdata_core::{
    BatchConfig, CoreResult, DataType, DateAnchor, NativeValue, ValidationOutcome,
    ValidationRequest, convert_at, validate_batch,
};

use crate::entry::RawEntry;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Status {
    Valid,
    Invalid,
    UnknownType,
}

impl Status {
    fn as_str(self) -> &'static str {
        match self {
            Status::Valid => "valid",
            Status::Invalid => "invalid",
            Status::UnknownType => "unknown-type",
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportRow {
    pub key: String,
    #[serde(rename = "type")]
    pub type_name: String,
    pub value: String,
    pub status: Status,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub native: Option<NativeValue>,
}

impl ReportRow {
    fn unknown(entry: RawEntry, reason: String) -> Self {
        Self {
            key: entry.key,
            type_name: entry.type_name,
            value: entry.value,
            status: Status::UnknownType,
            reason: Some(reason),
            native: None,
        }
    }

    fn from_outcome(outcome: ValidationOutcome, anchor: Option<DateAnchor>) -> Self {
        let native = match (outcome.rejection, anchor) {
            (None, Some(anchor)) if outcome.data_type.conversion().is_some() => {
                convert_at(outcome.data_type, &outcome.raw, anchor).ok()
            }
            _ => None,
        };
        Self {
            key: outcome.key,
            type_name: outcome.data_type.name().to_string(),
            value: outcome.raw,
            status: if outcome.rejection.is_none() {
                Status::Valid
            } else {
                Status::Invalid
            },
            reason: outcome.rejection.map(|r| r.to_string()),
            native,
        }
    }
}

/// Validation report, one row per entry in input order.
#[derive(Debug, Clone, Serialize)]
#[serde(transparent)]
pub struct Report {
    rows: Vec<ReportRow>,
}

impl Report {
    /// Validates `entries`; converts valid numbers and dates when `anchor` is set.
    pub async fn build(
        entries: Vec<RawEntry>,
        batch: &BatchConfig,
        anchor: Option<DateAnchor>,
    ) -> CoreResult<Self> {
        let mut slots: Vec<Option<ReportRow>> = Vec::with_capacity(entries.len());
        let mut positions = Vec::new();
        let mut requests = Vec::new();

        for entry in entries {
            match entry.type_name.parse::<DataType>() {
                Ok(dt) => {
                    positions.push(slots.len());
                    slots.push(None);
                    requests.push(ValidationRequest::new(entry.key, dt, entry.value));
                }
                Err(e) => {
                    let reason = e.to_string();
                    slots.push(Some(ReportRow::unknown(entry, reason)));
                }
            }
        }

        let outcomes = validate_batch(requests, batch).await?;
        for (pos, outcome) in positions.into_iter().zip(outcomes) {
            slots[pos] = Some(ReportRow::from_outcome(outcome, anchor));
        }

        Ok(Self {
            rows: slots.into_iter().flatten().collect(),
        })
    }

    pub(crate) fn rows(&self) -> &[ReportRow] {
        &self.rows
    }

    /// `true` if every entry is valid.
    pub fn is_clean(&self) -> bool {
        self.rows().iter().all(|r| r.status == Status::Valid)
    }

    pub fn render_text(&self) -> String {
        let rows = self.rows();
        let key_width = rows.iter().map(|r| r.key.len()).max().unwrap_or(0);
        let type_width = rows.iter().map(|r| r.type_name.len()).max().unwrap_or(0);

        let mut out = String::new();
        for row in rows {
            let _ = write!(
                out,
                "{:<key_width$}  {:<type_width$}  {:<12}  {:?}",
                row.key,
                row.type_name,
                row.status.as_str(),
                row.value,
            );
            if let Some(reason) = &row.reason {
                let _ = write!(out, "  ({reason})");
            }
            if let Some(native) = &row.native {
                let _ = write!(out, "  -> {native}");
            }
            out.push('\n');
        }
        out
    }

    pub fn render_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self.rows())?)
    }
}
