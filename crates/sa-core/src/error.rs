use thiserror::Error;

pub type SaResult<T> = Result<T, SaError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SaError {
    #[error("Non-finite numeric value for {what}: {value}")]
    NonFinite { what: &'static str, value: f64 },

    #[error("Non-positive value for {what}: {value}")]
    NonPositive { what: &'static str, value: f64 },

    #[error("Value out of range for {what}: {value}")]
    OutOfRange { what: &'static str, value: f64 },
}
