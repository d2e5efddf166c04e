//! Client-side filters for the blacklist and logs views.
//!
//! Both are pure functions over a fixture slice: they borrow the rows that
//! match and never reorder them.

use crate::model::blacklist::BlacklistEntry;
use crate::model::certificate::CertificateStatus;
use crate::model::verification_log::VerificationLog;

/// Status selection of the logs view. `All` is the `"all"` select value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StatusFilter {
    #[default]
    All,
    Only(CertificateStatus),
}

impl StatusFilter {
    /// Unknown values fall back to `All`.
    pub fn parse(value: &str) -> Self {
        CertificateStatus::parse(value).map_or(StatusFilter::All, StatusFilter::Only)
    }

    pub fn as_value(&self) -> &'static str {
        match self {
            StatusFilter::All => "all",
            StatusFilter::Only(status) => status.as_str(),
        }
    }

    pub fn matches(&self, status: CertificateStatus) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Only(wanted) => *wanted == status,
        }
    }
}

fn contains_ignore_case(haystack: &str, needle_lower: &str) -> bool {
    haystack.to_lowercase().contains(needle_lower)
}

/// Case-insensitive substring match on certificate id or reason.
pub fn filter_blacklist<'a>(entries: &'a [BlacklistEntry], search: &str) -> Vec<&'a BlacklistEntry> {
    let needle = search.to_lowercase();
    entries
        .iter()
        .filter(|entry| {
            contains_ignore_case(&entry.certificate_id, &needle)
                || contains_ignore_case(&entry.reason, &needle)
        })
        .collect()
}

/// Case-insensitive substring match on student name, certificate id or
/// institution, combined with an exact status match.
pub fn filter_logs<'a>(
    logs: &'a [VerificationLog],
    search: &str,
    status: StatusFilter,
) -> Vec<&'a VerificationLog> {
    let needle = search.to_lowercase();
    logs.iter()
        .filter(|log| {
            let matches_search = contains_ignore_case(&log.student_name, &needle)
                || contains_ignore_case(&log.certificate_id, &needle)
                || contains_ignore_case(&log.institution, &needle);
            matches_search && status.matches(log.status)
        })
        .collect()
}

pub fn count_by_status(logs: &[VerificationLog], status: CertificateStatus) -> usize {
    logs.iter().filter(|log| log.status == status).count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::{blacklist_entries, verification_logs};

    #[test]
    fn suspect_status_filter_returns_single_entry() {
        let logs = verification_logs();
        let filtered = filter_logs(&logs, "", StatusFilter::parse("SUSPECT"));
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].status, CertificateStatus::Suspect);
        assert_eq!(filtered[0].student_name, "Bob Wilson");
    }

    #[test]
    fn log_search_is_case_insensitive_across_fields() {
        let logs = verification_logs();
        assert_eq!(filter_logs(&logs, "STATE univ", StatusFilter::All).len(), 2);
        assert_eq!(filter_logs(&logs, "cert-2024-003", StatusFilter::All).len(), 1);
        assert_eq!(filter_logs(&logs, "carol", StatusFilter::All)[0].id, "3");
    }

    #[test]
    fn search_and_status_combine() {
        let logs = verification_logs();
        let status = StatusFilter::Only(CertificateStatus::Verified);
        let filtered = filter_logs(&logs, "state university", status);
        let ids: Vec<_> = filtered.iter().map(|log| log.id.as_str()).collect();
        assert_eq!(ids, ["1", "4"]);
        assert!(filter_logs(&logs, "tech", status).is_empty());
    }

    #[test]
    fn empty_search_and_all_status_keep_everything() {
        let logs = verification_logs();
        assert_eq!(filter_logs(&logs, "", StatusFilter::All).len(), logs.len());
        assert_eq!(StatusFilter::parse("all"), StatusFilter::All);
        assert_eq!(StatusFilter::parse("bogus"), StatusFilter::All);
    }

    #[test]
    fn blacklist_search_by_certificate_id() {
        let entries = blacklist_entries();
        let filtered = filter_blacklist(&entries, "fake-002");
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].certificate_id, "CERT-FAKE-002");
    }

    #[test]
    fn blacklist_search_by_reason() {
        let entries = blacklist_entries();
        let filtered = filter_blacklist(&entries, "SIGNATURE");
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].certificate_id, "CERT-FAKE-003");
        assert!(filter_blacklist(&entries, "no such thing").is_empty());
    }

    #[test]
    fn status_counts_cover_unfiltered_list() {
        let logs = verification_logs();
        assert_eq!(count_by_status(&logs, CertificateStatus::Verified), 2);
        assert_eq!(count_by_status(&logs, CertificateStatus::Suspect), 1);
        assert_eq!(count_by_status(&logs, CertificateStatus::Invalid), 1);
    }
}
