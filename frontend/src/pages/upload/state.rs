use common::upload::UploadForm;

/// Local state of the upload page. Discarded on navigation.
pub struct UploadPage {
    pub form: UploadForm,
}

impl UploadPage {
    pub fn new() -> Self {
        Self {
            form: UploadForm::default(),
        }
    }
}
