//! Form state behind the single-certificate upload view.
//!
//! The form only remembers the *name* of the chosen file: the content is
//! never read, sent or stored. Submitting resolves to the result route
//! reference the view should navigate to after its simulated delay.

use crate::fixtures::DEMO_CERTIFICATE_ID;
use crate::verification::{DEMO_REFERENCE, UPLOADED_REFERENCE};

/// Extensions offered by the file picker.
pub const PICKER_ACCEPT: &str = ".pdf,.jpg,.jpeg,.png";

/// Simulated network latency between submit and navigation.
pub const UPLOAD_DELAY_MS: u32 = 2000;

/// Drag-and-drop only takes files whose MIME type mentions pdf or image.
///
/// This mirrors the picker's hint and is not a security boundary.
pub fn accepts_dropped_mime(mime: &str) -> bool {
    mime.contains("pdf") || mime.contains("image")
}

pub fn result_path(reference: &str) -> String {
    format!("/results/{}", reference)
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UploadForm {
    pub file_name: Option<String>,
    pub certificate_id: String,
    pub demo_mode: bool,
    pub loading: bool,
    pub dragging: bool,
}

impl UploadForm {
    pub fn select_file(&mut self, name: impl Into<String>) {
        self.file_name = Some(name.into());
    }

    /// Returns whether the dropped file was taken.
    pub fn drop_file(&mut self, name: impl Into<String>, mime: &str) -> bool {
        self.dragging = false;
        if accepts_dropped_mime(mime) {
            self.select_file(name);
            true
        } else {
            false
        }
    }

    pub fn load_demo(&mut self) {
        self.demo_mode = true;
        self.certificate_id = DEMO_CERTIFICATE_ID.to_string();
        self.file_name = None;
    }

    pub fn can_submit(&self) -> bool {
        (self.file_name.is_some() || self.demo_mode) && !self.loading
    }

    /// Enters the loading state and yields the result reference to navigate
    /// to, or `None` when there is nothing to verify.
    ///
    /// With no file and demo mode off the submit is a silent no-op: no state
    /// changes and no error is reported.
    pub fn submit(&mut self) -> Option<&'static str> {
        if !self.can_submit() {
            return None;
        }
        self.loading = true;
        Some(if self.demo_mode { DEMO_REFERENCE } else { UPLOADED_REFERENCE })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn submit_without_file_or_demo_is_a_no_op() {
        let mut form = UploadForm::default();
        form.certificate_id = "CERT-2023-002".into();
        let before = form.clone();
        assert_eq!(form.submit(), None);
        assert_eq!(form, before);
    }

    #[test]
    fn demo_then_submit_targets_demo_segment() {
        let mut form = UploadForm::default();
        form.select_file("scan.pdf");
        form.load_demo();
        assert_eq!(form.file_name, None);
        assert_eq!(form.certificate_id, DEMO_CERTIFICATE_ID);

        assert_eq!(form.submit(), Some(DEMO_REFERENCE));
        assert!(form.loading);
        assert_eq!(result_path(DEMO_REFERENCE), "/results/demo");
    }

    #[test]
    fn file_submit_targets_uploaded_segment_once() {
        let mut form = UploadForm::default();
        form.select_file("diploma.png");
        assert_eq!(form.submit(), Some(UPLOADED_REFERENCE));
        assert_eq!(form.submit(), None);
    }

    #[test]
    fn drop_filters_on_mime_hint() {
        let mut form = UploadForm { dragging: true, ..Default::default() };
        assert!(!form.drop_file("notes.txt", "text/plain"));
        assert!(!form.dragging);
        assert_eq!(form.file_name, None);

        assert!(form.drop_file("scan.jpeg", "image/jpeg"));
        assert!(form.drop_file("cert.pdf", "application/pdf"));
        assert_eq!(form.file_name.as_deref(), Some("cert.pdf"));
    }
}
