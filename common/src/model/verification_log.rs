use crate::model::certificate::CertificateStatus;
use serde::{Deserialize, Serialize};

/// One row of verification activity, shown on the dashboard and the logs view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerificationLog {
    pub id: String,
    pub certificate_id: String,
    pub student_name: String,
    pub status: CertificateStatus,
    /// Display string, e.g. `"2024-01-15 14:30"`.
    pub timestamp: String,
    pub institution: String,
}
