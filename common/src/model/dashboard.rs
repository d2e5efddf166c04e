use crate::model::verification_log::VerificationLog;
use serde::{Deserialize, Serialize};

/// Aggregate counters projected by the dashboard overview.
///
/// The three percentages are expected to add up to roughly 100, but nothing
/// validates that: the values are displayed exactly as stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_verifications: u64,
    pub valid_percentage: f64,
    pub invalid_percentage: f64,
    pub suspect_percentage: f64,
    /// Most recent first.
    pub recent_activity: Vec<VerificationLog>,
}

impl DashboardStats {
    pub fn percentage_total(&self) -> f64 {
        self.valid_percentage + self.invalid_percentage + self.suspect_percentage
    }
}
