use crate::args::{Command, ReqkitArgs};

use super::types::ConfigFile;

/// Fills options the command line left unset from the config file.
///
/// Values given on the command line always win.
pub fn apply_config(args: &mut ReqkitArgs, config: &ConfigFile) {
    if !args.no_color
        && let Some(no_color) = config.no_color
    {
        args.no_color = no_color;
    }

    match &mut args.command {
        Command::Generate(generate) => {
            if let Some(dataset) = config.dataset.as_ref() {
                generate.count = generate.count.or(dataset.count);
                generate.seed = generate.seed.or(dataset.seed);
            }
        }
        Command::Compare(compare) => {
            if compare.fields.is_empty()
                && let Some(fields) = config.compare.as_ref().and_then(|c| c.fields.as_ref())
            {
                compare.fields.clone_from(fields);
            }
        }
        Command::Analyze(_) | Command::Fingerprint(_) | Command::Uuid => {}
    }
}
