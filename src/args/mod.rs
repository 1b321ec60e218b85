//! CLI argument types and parsing helpers.
mod cli;
pub(crate) mod parsers;

#[cfg(test)]
mod test_support;
#[cfg(test)]
mod tests;

pub use cli::{
    AnalyzeArgs, Command, CompareArgs, FingerprintArgs, GenerateArgs, OutputFormat, ReqkitArgs,
};

#[cfg(test)]
pub(crate) use test_support::parse_test_args;
