use thiserror::Error;

#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("Unknown data type: {kind}")]
    UnknownType { kind: String },
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
