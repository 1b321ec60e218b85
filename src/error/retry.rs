use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RetryConfigError {
    #[error("max_attempts must be >= 1 (got {value}).")]
    MaxAttemptsZero { value: u32 },
    #[cfg(test)]
    #[error("Test expectation failed: {message}")]
    TestExpectation { message: &'static str },
    #[cfg(test)]
    #[error("Test expectation failed: {message}: {value}")]
    TestExpectationValue {
        message: &'static str,
        value: String,
    },
}
