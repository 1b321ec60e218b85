//! Core library for the `reqkit` CLI.
//!
//! Support toolkit for API test-collection scripts: dotted-path access to
//! JSON records, synthetic datasets, response comparison, latency summaries,
//! bounded retries with linear backoff, and an explicit per-run session
//! context. Request execution itself is left to the caller through
//! [`execution::RequestExecutor`].
pub mod analysis;
pub mod args;
pub mod compare;
pub mod config;
pub mod dataset;
pub mod error;
pub mod execution;
pub mod path;
pub mod response;
pub mod retry;
pub mod session;
pub mod shutdown;
pub mod support;
