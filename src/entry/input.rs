use serde_json::Value;

use reqkit::error::{AppResult, ValidationError};

pub(super) async fn read_json(path: &str) -> AppResult<Value> {
    let content = tokio::fs::read_to_string(path)
        .await
        .map_err(|err| ValidationError::ReadInput {
            path: path.to_owned(),
            source: err,
        })?;
    let value = serde_json::from_str(&content).map_err(|err| ValidationError::ParseInput {
        path: path.to_owned(),
        source: err,
    })?;
    Ok(value)
}

pub(super) async fn read_records(path: &str) -> AppResult<Vec<Value>> {
    match read_json(path).await? {
        Value::Array(records) => Ok(records),
        Value::Null | Value::Bool(_) | Value::Number(_) | Value::String(_) | Value::Object(_) => {
            Err(ValidationError::ExpectedRecordArray {
                path: path.to_owned(),
            }
            .into())
        }
    }
}
