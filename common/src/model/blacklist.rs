use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlacklistEntry {
    pub id: String,
    pub certificate_id: String,
    pub reason: String,
    pub added_by: String,
    pub added_date: String,
}
