use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidxError {
    #[error("Certificate not found: {0}")]
    CertificateNotFound(String),

    #[error("Unknown setting '{key}' in group '{group}'")]
    UnknownSettingKey { group: &'static str, key: String },

    #[error("Invalid value for setting '{key}': {value}")]
    InvalidSettingValue { key: String, value: String },
}
