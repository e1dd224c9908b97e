//! Validation of many values at once.
//!
//! Filesystem checks block, so [`validate_batch`] runs every check on tokio's
//! blocking pool, bounded by [`BatchConfig::max_concurrency`]. Outcomes come
//! back in request order and are identical to running [`check`] sequentially.

mod config;
pub use config::BatchConfig;

use serde::{Deserialize, Serialize};
use tokio::task::JoinSet;
use tracing::{debug, trace};

use confdata_model::DataType;

use crate::error::{CoreError, CoreResult};
use crate::validate::{Rejection, check};

/// One `(key, type, raw)` triple to validate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationRequest {
    pub key: String,
    pub data_type: DataType,
    pub raw: String,
}

impl ValidationRequest {
    pub fn new<K, V>(key: K, data_type: DataType, raw: V) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            key: key.into(),
            data_type,
            raw: raw.into(),
        }
    }

    /// Runs the check for this request.
    pub fn run(self) -> ValidationOutcome {
        let rejection = check(self.data_type, &self.raw).err();
        ValidationOutcome {
            key: self.key,
            data_type: self.data_type,
            raw: self.raw,
            rejection,
        }
    }
}

/// Result of validating one request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationOutcome {
    pub key: String,
    pub data_type: DataType,
    pub raw: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rejection: Option<Rejection>,
}

impl ValidationOutcome {
    pub fn is_valid(&self) -> bool {
        self.rejection.is_none()
    }
}

/// Validates `requests` concurrently on the blocking pool.
///
/// Must be called from within a tokio runtime.
pub async fn validate_batch(
    requests: Vec<ValidationRequest>,
    cfg: &BatchConfig,
) -> CoreResult<Vec<ValidationOutcome>> {
    let total = requests.len();
    let limit = cfg.effective_concurrency();
    debug!(total, limit, "validating batch");

    let mut set = JoinSet::new();
    let mut slots: Vec<Option<ValidationOutcome>> = vec![None; total];

    for (idx, request) in requests.into_iter().enumerate() {
        if set.len() >= limit {
            collect_next(&mut set, &mut slots).await?;
        }
        set.spawn_blocking(move || (idx, request.run()));
    }
    while !set.is_empty() {
        collect_next(&mut set, &mut slots).await?;
    }

    Ok(slots.into_iter().flatten().collect())
}

/// Waits for one worker and stores its outcome in its request slot.
async fn collect_next(
    set: &mut JoinSet<(usize, ValidationOutcome)>,
    slots: &mut [Option<ValidationOutcome>],
) -> CoreResult<()> {
    if let Some(joined) = set.join_next().await {
        let (idx, outcome) = joined.map_err(|e| CoreError::Join(e.to_string()))?;
        trace!(key = %outcome.key, valid = outcome.is_valid(), "validated");
        slots[idx] = Some(outcome);
    }
    Ok(())
}

/// Sequential counterpart of [`validate_batch`].
pub fn validate_all_blocking(requests: Vec<ValidationRequest>) -> Vec<ValidationOutcome> {
    requests.into_iter().map(ValidationRequest::run).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn run_records_rejection() {
        let ok = ValidationRequest::new("NUM_REALIZATIONS", DataType::PosInt, "10").run();
        assert!(ok.is_valid());

        let bad = ValidationRequest::new("NUM_REALIZATIONS", DataType::PosInt, "-1").run();
        assert_eq!(bad.rejection, Some(Rejection::Negative));
        assert_eq!(bad.key, "NUM_REALIZATIONS");
    }

    #[test]
    fn blocking_preserves_order() {
        let out = validate_all_blocking(vec![
            ValidationRequest::new("a", DataType::Int, "1"),
            ValidationRequest::new("b", DataType::Int, "x"),
            ValidationRequest::new("c", DataType::Str, ""),
        ]);
        let keys: Vec<_> = out.iter().map(|o| o.key.as_str()).collect();
        assert_eq!(keys, ["a", "b", "c"]);
        assert_eq!(
            out.iter().map(ValidationOutcome::is_valid).collect::<Vec<_>>(),
            [true, false, true]
        );
    }

    #[tokio::test]
    async fn empty_batch() {
        let out = validate_batch(Vec::new(), &BatchConfig::default()).await.unwrap();
        assert!(out.is_empty());
    }

    #[tokio::test]
    async fn limit_smaller_than_batch_keeps_every_outcome_in_order() {
        let requests: Vec<_> = (0..40)
            .map(|i| {
                let raw = if i % 3 == 0 { format!("-{i}") } else { i.to_string() };
                ValidationRequest::new(format!("k{i}"), DataType::PosInt, raw)
            })
            .collect();

        for limit in [1, 2, 7] {
            let cfg = BatchConfig::with_max_concurrency(limit);
            let out = validate_batch(requests.clone(), &cfg).await.unwrap();
            assert_eq!(out, validate_all_blocking(requests.clone()));
        }
    }

    #[test]
    fn outcome_serde_omits_missing_rejection() {
        let ok = ValidationRequest::new("k", DataType::Str, "v").run();
        let json = serde_json::to_string(&ok).unwrap();
        assert_eq!(json, r#"{"key":"k","dataType":"STR","raw":"v"}"#);

        let bad = ValidationRequest::new("k", DataType::Date, "2023-02-29").run();
        let json = serde_json::to_string(&bad).unwrap();
        assert!(json.contains(r#""rejection":"noSuchDate""#));
    }
}
