use thiserror::Error;

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("Auth token not set. Call set_auth_token() first.")]
    AuthTokenMissing,
}
