//! Per-scenario result extraction.

use dispatch_core::matching::SelectionPolicyKind;
use serde::Serialize;

/// Aggregated outcome of one scenario replay.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScenarioResult {
    pub run_id: usize,
    pub seed: u64,
    pub fleet_size: usize,
    pub request_count: usize,
    pub policy: SelectionPolicyKind,
    /// Requests that completed the full select -> reserve -> trip cycle.
    pub matched: usize,
    /// Requests that found no available driver.
    pub unmatched: usize,
    pub total_revenue: f64,
    pub mean_pickup_distance: f64,
}

impl ScenarioResult {
    pub fn match_rate(&self) -> f64 {
        if self.request_count == 0 {
            0.0
        } else {
            self.matched as f64 / self.request_count as f64
        }
    }
}
