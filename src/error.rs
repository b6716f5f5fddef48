use thiserror::Error;

/// Failures raised by the deliberately faulty computation behind `/exception`.
#[derive(Debug, Error)]
pub enum FaultError {
    #[error("attempt to divide {dividend} by zero")]
    DivisionByZero { dividend: i64 },

    #[error("integer overflow dividing {dividend} by {divisor}")]
    Overflow { dividend: i64, divisor: i64 },

    #[error("computation panicked: {0}")]
    Panicked(String),
}

pub type FaultResult<T> = Result<T, FaultError>;
