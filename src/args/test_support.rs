use clap::Parser;

use crate::error::{AppError, AppResult};

use super::ReqkitArgs;

pub(crate) fn parse_test_args<I, T>(args: I) -> AppResult<ReqkitArgs>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    ReqkitArgs::try_parse_from(args).map_err(AppError::from)
}
