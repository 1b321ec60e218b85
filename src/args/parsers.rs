use crate::error::ValidationError;

pub(crate) fn parse_count(s: &str) -> Result<usize, ValidationError> {
    s.trim()
        .parse::<usize>()
        .map_err(|err| ValidationError::InvalidNumber { source: err })
}

pub(crate) fn parse_seed(s: &str) -> Result<u64, ValidationError> {
    s.trim()
        .parse::<u64>()
        .map_err(|err| ValidationError::InvalidNumber { source: err })
}
