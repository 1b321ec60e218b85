use super::parsers::{parse_count, parse_seed};
use super::{Command, OutputFormat, parse_test_args};
use crate::error::{AppError, AppResult};

#[test]
fn parse_generate_with_options() -> AppResult<()> {
    let args = parse_test_args([
        "reqkit", "generate", "orders", "--count", "7", "--seed", "42",
    ])?;
    match args.command {
        Command::Generate(generate) => {
            if generate.kind != "orders" {
                return Err(AppError::validation("Unexpected dataset kind"));
            }
            if generate.count != Some(7) || generate.seed != Some(42) {
                return Err(AppError::validation("Unexpected generate options"));
            }
            Ok(())
        }
        _ => Err(AppError::validation("Expected generate subcommand")),
    }
}

#[test]
fn parse_generate_defaults_are_unset() -> AppResult<()> {
    let args = parse_test_args(["reqkit", "generate", "users"])?;
    let Command::Generate(generate) = args.command else {
        return Err(AppError::validation("Expected generate subcommand"));
    };
    if generate.count.is_some() || generate.seed.is_some() {
        return Err(AppError::validation("Options must stay unset for config"));
    }
    if args.output_format != OutputFormat::Text || args.verbose {
        return Err(AppError::validation("Unexpected global defaults"));
    }
    Ok(())
}

#[test]
fn parse_compare_repeated_fields() -> AppResult<()> {
    let args = parse_test_args([
        "reqkit", "compare", "a.json", "b.json", "--field", "status", "-f", "data.id",
    ])?;
    let Command::Compare(compare) = args.command else {
        return Err(AppError::validation("Expected compare subcommand"));
    };
    if compare.left != "a.json" || compare.right != "b.json" {
        return Err(AppError::validation("Unexpected compare inputs"));
    }
    if compare.fields != ["status", "data.id"] {
        return Err(AppError::validation("Unexpected compare fields"));
    }
    Ok(())
}

#[test]
fn global_flags_after_subcommand() -> AppResult<()> {
    let args = parse_test_args([
        "reqkit",
        "analyze",
        "results.json",
        "--output-format",
        "json",
        "--verbose",
        "--config",
        "custom.toml",
    ])?;
    if args.output_format != OutputFormat::Json || !args.verbose {
        return Err(AppError::validation("Global flags not parsed"));
    }
    if args.config.as_deref() != Some("custom.toml") {
        return Err(AppError::validation("Unexpected config path"));
    }
    match args.command {
        Command::Analyze(analyze) if analyze.path == "results.json" => Ok(()),
        _ => Err(AppError::validation("Expected analyze subcommand")),
    }
}

#[test]
fn parse_fingerprint_and_uuid() -> AppResult<()> {
    let args = parse_test_args(["reqkit", "fingerprint", "hello", "--md5"])?;
    match args.command {
        Command::Fingerprint(fingerprint) if fingerprint.md5 && fingerprint.text == "hello" => {}
        _ => return Err(AppError::validation("Expected fingerprint subcommand")),
    }
    let args = parse_test_args(["reqkit", "uuid"])?;
    if !matches!(args.command, Command::Uuid) {
        return Err(AppError::validation("Expected uuid subcommand"));
    }
    Ok(())
}

#[test]
fn subcommand_is_required() -> AppResult<()> {
    if parse_test_args(["reqkit"]).is_ok() {
        return Err(AppError::validation("Expected missing subcommand error"));
    }
    Ok(())
}

#[test]
fn invalid_count_is_rejected() -> AppResult<()> {
    if parse_count("-1").is_ok() || parse_count("many").is_ok() {
        return Err(AppError::validation("Expected count parse error"));
    }
    if parse_count(" 0 ")? != 0 || parse_seed("18446744073709551615")? != u64::MAX {
        return Err(AppError::validation("Unexpected parsed values"));
    }
    if parse_test_args(["reqkit", "generate", "users", "--count", "abc"]).is_ok() {
        return Err(AppError::validation("Expected clap to reject count"));
    }
    Ok(())
}
