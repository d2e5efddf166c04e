//! Hard-coded sample data standing in for a real data source.
//!
//! Every accessor builds a fresh owned value; callers may filter or clone
//! freely without affecting what the next caller sees.

use crate::model::blacklist::BlacklistEntry;
use crate::model::certificate::{Certificate, CertificateField, CertificateStatus};
use crate::model::dashboard::DashboardStats;
use crate::model::verification_log::VerificationLog;

/// Identifier of the certificate the demo flow always resolves to.
pub const DEMO_CERTIFICATE_ID: &str = "CERT-2023-001";

pub fn sample_certificates() -> Vec<Certificate> {
    vec![
        Certificate {
            id: DEMO_CERTIFICATE_ID.to_string(),
            name: "John Smith".to_string(),
            roll_no: "CS2023001".to_string(),
            course: "Bachelor of Computer Science".to_string(),
            marks: "85.5%".to_string(),
            issue_date: "2023-06-15".to_string(),
            institution: "State University".to_string(),
            status: CertificateStatus::Verified,
            tampered_fields: None,
        },
        Certificate {
            id: "CERT-2023-002".to_string(),
            name: "Sarah Johnson".to_string(),
            roll_no: "EE2023045".to_string(),
            course: "Bachelor of Electrical Engineering".to_string(),
            marks: "78.2%".to_string(),
            issue_date: "2023-06-20".to_string(),
            institution: "Tech Institute".to_string(),
            status: CertificateStatus::Suspect,
            tampered_fields: Some(vec![CertificateField::Marks, CertificateField::IssueDate]),
        },
        Certificate {
            id: "CERT-2023-003".to_string(),
            name: "Michael Brown".to_string(),
            roll_no: "ME2023089".to_string(),
            course: "Bachelor of Mechanical Engineering".to_string(),
            marks: "92.1%".to_string(),
            issue_date: "2023-05-30".to_string(),
            institution: "Engineering College".to_string(),
            status: CertificateStatus::Invalid,
            tampered_fields: Some(vec![CertificateField::Name, CertificateField::Marks]),
        },
    ]
}

fn log(
    id: &str,
    certificate_id: &str,
    student_name: &str,
    status: CertificateStatus,
    timestamp: &str,
    institution: &str,
) -> VerificationLog {
    VerificationLog {
        id: id.to_string(),
        certificate_id: certificate_id.to_string(),
        student_name: student_name.to_string(),
        status,
        timestamp: timestamp.to_string(),
        institution: institution.to_string(),
    }
}

pub fn dashboard_stats() -> DashboardStats {
    DashboardStats {
        total_verifications: 1247,
        valid_percentage: 78.5,
        invalid_percentage: 15.2,
        suspect_percentage: 6.3,
        recent_activity: vec![
            log("1", "CERT-2024-001", "Alice Cooper", CertificateStatus::Verified, "2024-01-15 14:30", "State University"),
            log("2", "CERT-2024-002", "Bob Wilson", CertificateStatus::Suspect, "2024-01-15 13:45", "Tech Institute"),
            log("3", "CERT-2024-003", "Carol Davis", CertificateStatus::Invalid, "2024-01-15 12:20", "Engineering College"),
            log("4", "CERT-2024-004", "David Miller", CertificateStatus::Verified, "2024-01-15 11:10", "State University"),
        ],
    }
}

/// The logs view lists the same entries the dashboard shows as recent activity.
pub fn verification_logs() -> Vec<VerificationLog> {
    dashboard_stats().recent_activity
}

pub fn blacklist_entries() -> Vec<BlacklistEntry> {
    [
        ("1", "CERT-FAKE-001", "Fraudulent document - confirmed fake", "Admin", "2024-01-10"),
        ("2", "CERT-FAKE-002", "Tampered marks field", "Supervisor", "2024-01-08"),
        ("3", "CERT-FAKE-003", "Invalid institution signature", "Admin", "2024-01-05"),
    ]
    .into_iter()
    .map(|(id, certificate_id, reason, added_by, added_date)| BlacklistEntry {
        id: id.to_string(),
        certificate_id: certificate_id.to_string(),
        reason: reason.to_string(),
        added_by: added_by.to_string(),
        added_date: added_date.to_string(),
    })
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verified_certificates_carry_no_tampered_fields() {
        for certificate in sample_certificates() {
            if certificate.status == CertificateStatus::Verified {
                assert!(certificate.tampered().is_empty(), "{}", certificate.id);
            } else {
                assert!(!certificate.tampered().is_empty(), "{}", certificate.id);
            }
        }
    }

    #[test]
    fn certificate_ids_are_unique() {
        let certificates = sample_certificates();
        let mut ids: Vec<_> = certificates.iter().map(|c| c.id.as_str()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), certificates.len());
        assert_eq!(certificates[0].id, DEMO_CERTIFICATE_ID);
    }

    #[test]
    fn dashboard_percentages_are_close_to_one_hundred() {
        let stats = dashboard_stats();
        assert!((stats.percentage_total() - 100.0).abs() < 0.5);
        assert_eq!(stats.recent_activity.len(), 4);
    }
}
