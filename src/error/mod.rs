mod app;
mod config;
mod dataset;
mod retry;
mod session;
mod support;
mod validation;

#[cfg(test)]
mod test_support;

pub use app::{AppError, AppResult};
pub use config::ConfigError;
pub use dataset::DatasetError;
pub use retry::RetryConfigError;
pub use session::SessionError;
pub use support::SupportError;
pub use validation::ValidationError;
