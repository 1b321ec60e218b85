mod commands;
mod input;


use clap::Parser;

use reqkit::args::ReqkitArgs;
use reqkit::config::{apply_config, load_config};
use reqkit::error::AppResult;

pub(crate) fn run() -> AppResult<()> {
    let args = resolve_args(ReqkitArgs::parse())?;

    crate::logger::init_logging(args.verbose, args.no_color);

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;

    let output = runtime.block_on(commands::execute(&args))?;
    println!("{}", output);
    Ok(())
}

/// Merges the config file into the parsed arguments. Runs before logging is
/// set up so config values such as `no_color` reach the subscriber.
fn resolve_args(mut args: ReqkitArgs) -> AppResult<ReqkitArgs> {
    if let Some(config) = load_config(args.config.as_deref())? {
        apply_config(&mut args, &config);
    }
    Ok(args)
}
