use thiserror::Error;

pub type SpResult<T> = Result<T, SpError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SpError {
    #[error("Non-finite weight for {what}: {value}")]
    NonFinite { what: &'static str, value: f64 },

    #[error("Negative weight for {what}: {value}")]
    Negative { what: &'static str, value: f64 },
}
