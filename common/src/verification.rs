//! Simulated certificate verification.
//!
//! Views never pick fixtures themselves: they hand the route reference to a
//! `VerificationProvider`. `FixtureProvider` is the only implementation; it
//! answers `"demo"` with the first sample certificate and every other
//! reference with a uniformly random sample, whatever the reference says.

use crate::error::ValidxError;
use crate::fixtures::sample_certificates;
use crate::model::certificate::Certificate;
use rand::Rng;

/// Result route segment used when the demo certificate was requested.
pub const DEMO_REFERENCE: &str = "demo";

/// Result route segment used after a real file was submitted.
pub const UPLOADED_REFERENCE: &str = "uploaded";

/// Capability: given a reference, return a certificate or a not-found signal.
pub trait VerificationProvider {
    fn verify(&mut self, reference: &str) -> Result<Certificate, ValidxError>;
}

pub struct FixtureProvider<R: Rng> {
    certificates: Vec<Certificate>,
    rng: R,
}

impl<R: Rng> FixtureProvider<R> {
    pub fn new(rng: R) -> Self {
        Self::with_certificates(sample_certificates(), rng)
    }

    pub fn with_certificates(certificates: Vec<Certificate>, rng: R) -> Self {
        Self { certificates, rng }
    }
}

impl<R: Rng> VerificationProvider for FixtureProvider<R> {
    fn verify(&mut self, reference: &str) -> Result<Certificate, ValidxError> {
        let index = if reference == DEMO_REFERENCE {
            0
        } else if self.certificates.is_empty() {
            return Err(ValidxError::CertificateNotFound(reference.to_string()));
        } else {
            self.rng.gen_range(0..self.certificates.len())
        };

        self.certificates
            .get(index)
            .cloned()
            .ok_or_else(|| ValidxError::CertificateNotFound(reference.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::certificate::CertificateStatus;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn demo_reference_always_yields_first_fixture() {
        let expected = sample_certificates().remove(0);
        let mut provider = FixtureProvider::new(StdRng::seed_from_u64(7));
        for _ in 0..50 {
            let certificate = provider.verify(DEMO_REFERENCE).unwrap();
            assert_eq!(certificate, expected);
            assert_eq!(certificate.status, CertificateStatus::Verified);
        }
    }

    #[test]
    fn other_references_pick_uniformly() {
        let mut provider = FixtureProvider::new(StdRng::seed_from_u64(42));
        let certificates = sample_certificates();
        let mut counts = [0usize; 3];
        let trials = 3000;

        for i in 0..trials {
            let reference = if i % 2 == 0 { UPLOADED_REFERENCE } else { "CERT-2023-003" };
            let certificate = provider.verify(reference).unwrap();
            let index = certificates.iter().position(|c| c == &certificate).unwrap();
            counts[index] += 1;
        }

        for count in counts {
            assert!((850..=1150).contains(&count), "skewed counts: {:?}", counts);
        }
    }

    #[test]
    fn empty_table_reports_not_found() {
        let mut provider = FixtureProvider::with_certificates(Vec::new(), StdRng::seed_from_u64(1));
        assert_eq!(
            provider.verify(UPLOADED_REFERENCE),
            Err(ValidxError::CertificateNotFound("uploaded".into()))
        );
        assert!(provider.verify(DEMO_REFERENCE).is_err());
    }
}
