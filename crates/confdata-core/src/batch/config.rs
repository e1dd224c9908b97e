use std::thread;

use serde::{Deserialize, Serialize};

/// Batch validation settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
#[serde(rename_all = "camelCase")]
pub struct BatchConfig {
    /// Maximum number of checks in flight. Zero is treated as one.
    pub max_concurrency: usize,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            max_concurrency: thread::available_parallelism()
                .map(|n| n.get())
                .unwrap_or(1),
        }
    }
}

impl BatchConfig {
    pub fn with_max_concurrency(max_concurrency: usize) -> Self {
        Self { max_concurrency }
    }

    /// Concurrency limit actually applied.
    #[inline]
    pub fn effective_concurrency(&self) -> usize {
        self.max_concurrency.max(1)
    }
}
