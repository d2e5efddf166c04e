use common::error::ValidxError;
use common::fixtures::{dashboard_stats, sample_certificates, verification_logs};
use common::model::certificate::{CertificateField, CertificateStatus};
use common::upload::{result_path, UploadForm};
use common::verification::{FixtureProvider, VerificationProvider};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn reference_from_path(path: &str) -> &str {
    path.strip_prefix("/results/").expect("result route")
}

#[test]
fn demo_upload_resolves_to_verified_sample() {
    let mut form = UploadForm::default();
    form.load_demo();
    let reference = form.submit().expect("demo submit navigates");
    let path = result_path(reference);

    let mut provider = FixtureProvider::new(StdRng::seed_from_u64(3));
    let certificate = provider.verify(reference_from_path(&path)).unwrap();

    assert_eq!(path, "/results/demo");
    assert_eq!(certificate.status, CertificateStatus::Verified);
    assert_eq!(certificate.id, form.certificate_id);
}

#[test]
fn uploaded_file_resolves_to_some_sample() {
    let mut form = UploadForm::default();
    form.select_file("transcript.pdf");
    let path = result_path(form.submit().unwrap());

    let samples = sample_certificates();
    let mut provider = FixtureProvider::new(StdRng::seed_from_u64(99));
    for _ in 0..20 {
        let certificate = provider.verify(reference_from_path(&path)).unwrap();
        assert!(samples.contains(&certificate));
        for field in certificate.tampered() {
            assert!(CertificateField::ALL.contains(field));
            assert!(!certificate.field_value(*field).is_empty());
        }
    }
}

#[test]
fn not_found_is_only_reachable_without_fixtures() {
    let mut provider = FixtureProvider::with_certificates(Vec::new(), StdRng::seed_from_u64(0));
    let err = provider.verify("anything").unwrap_err();
    assert_eq!(err.to_string(), "Certificate not found: anything");
    assert!(matches!(err, ValidxError::CertificateNotFound(_)));
}

#[test]
fn logs_view_shows_dashboard_activity() {
    assert_eq!(verification_logs(), dashboard_stats().recent_activity);
}
