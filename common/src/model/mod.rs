pub mod blacklist;
pub mod certificate;
pub mod dashboard;
pub mod settings;
pub mod verification_log;
