use serde::{Deserialize, Serialize};
use std::fmt;

/// Outcome tag attached to every certificate and verification log entry.
///
/// Serialized in upper case (`"VERIFIED"`, `"SUSPECT"`, `"INVALID"`) so the
/// values match what the status badges and the logs status filter display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum CertificateStatus {
    Verified,
    Suspect,
    Invalid,
}

impl CertificateStatus {
    pub const ALL: [CertificateStatus; 3] = [
        CertificateStatus::Verified,
        CertificateStatus::Suspect,
        CertificateStatus::Invalid,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CertificateStatus::Verified => "VERIFIED",
            CertificateStatus::Suspect => "SUSPECT",
            CertificateStatus::Invalid => "INVALID",
        }
    }

    /// Parses the upper-case tag used by `<select>` values. Anything else,
    /// including `"all"`, yields `None`.
    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|status| status.as_str() == value)
    }

    /// Confidence figure shown next to a verification outcome.
    pub fn confidence(&self) -> &'static str {
        match self {
            CertificateStatus::Verified => "98.5%",
            CertificateStatus::Suspect => "65.2%",
            CertificateStatus::Invalid => "12.1%",
        }
    }
}

impl fmt::Display for CertificateStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The closed set of certificate fields that can be flagged as tampered.
///
/// The serialized names are the camel-case field names shown in the
/// "Tampered Fields Detected" chip list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CertificateField {
    Name,
    RollNo,
    Course,
    Marks,
    IssueDate,
    Institution,
}

impl CertificateField {
    /// Display order of the result view's detail table.
    pub const ALL: [CertificateField; 6] = [
        CertificateField::Name,
        CertificateField::RollNo,
        CertificateField::Course,
        CertificateField::Marks,
        CertificateField::IssueDate,
        CertificateField::Institution,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            CertificateField::Name => "name",
            CertificateField::RollNo => "rollNo",
            CertificateField::Course => "course",
            CertificateField::Marks => "marks",
            CertificateField::IssueDate => "issueDate",
            CertificateField::Institution => "institution",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            CertificateField::Name => "Name",
            CertificateField::RollNo => "Roll Number",
            CertificateField::Course => "Course",
            CertificateField::Marks => "Marks",
            CertificateField::IssueDate => "Issue Date",
            CertificateField::Institution => "Institution",
        }
    }
}

/// A sample academic certificate.
///
/// Certificates are only ever built by `fixtures::sample_certificates` and
/// are selected, never created, by a verification request. Because
/// `tampered_fields` is typed as `CertificateField`, it can only name fields
/// the certificate actually has.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Certificate {
    pub id: String,
    pub name: String,
    pub roll_no: String,
    pub course: String,
    /// Free text, e.g. `"85.5%"`.
    pub marks: String,
    /// Free text, e.g. `"2023-06-15"`.
    pub issue_date: String,
    pub institution: String,
    pub status: CertificateStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tampered_fields: Option<Vec<CertificateField>>,
}

impl Certificate {
    pub fn field_value(&self, field: CertificateField) -> &str {
        match field {
            CertificateField::Name => &self.name,
            CertificateField::RollNo => &self.roll_no,
            CertificateField::Course => &self.course,
            CertificateField::Marks => &self.marks,
            CertificateField::IssueDate => &self.issue_date,
            CertificateField::Institution => &self.institution,
        }
    }

    pub fn is_tampered(&self, field: CertificateField) -> bool {
        self.tampered_fields
            .as_ref()
            .is_some_and(|fields| fields.contains(&field))
    }

    /// Tampered field list, empty when none were flagged.
    pub fn tampered(&self) -> &[CertificateField] {
        self.tampered_fields.as_deref().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_parse_accepts_only_upper_case_tags() {
        assert_eq!(CertificateStatus::parse("SUSPECT"), Some(CertificateStatus::Suspect));
        assert_eq!(CertificateStatus::parse("suspect"), None);
        assert_eq!(CertificateStatus::parse("all"), None);
    }

    #[test]
    fn status_serializes_upper_case() {
        let json = serde_json::to_string(&CertificateStatus::Invalid).unwrap();
        assert_eq!(json, "\"INVALID\"");
    }

    #[test]
    fn tampered_fields_use_camel_case_names() {
        let json = serde_json::to_string(&vec![CertificateField::IssueDate, CertificateField::RollNo]).unwrap();
        assert_eq!(json, r#"["issueDate","rollNo"]"#);
        for field in CertificateField::ALL {
            let serialized = serde_json::to_string(&field).unwrap();
            assert_eq!(serialized.trim_matches('"'), field.key());
        }
    }
}
