use tempfile::tempdir;

use super::test_support::write_and_load;
use super::types::{ConfigFile, DatasetConfig};
use super::{apply_config, load_config};
use crate::args::{Command, parse_test_args};
use crate::error::{AppError, AppResult, ConfigError, ValidationError};

#[test]
fn parse_toml_config_sections() -> AppResult<()> {
    let dir = tempdir()?;
    let config = write_and_load(
        &dir,
        "reqkit.toml",
        r#"
no_color = true

[dataset]
count = 12
seed = 7

[compare]
fields = ["status", "data.id"]
"#,
    )?;

    let dataset = config.dataset.as_ref().ok_or(ConfigError::from("missing dataset"))?;
    if dataset.count != Some(12) || dataset.seed != Some(7) {
        return Err(AppError::config("unexpected dataset section"));
    }
    let fields = config
        .compare
        .as_ref()
        .and_then(|compare| compare.fields.as_deref())
        .ok_or(ConfigError::from("missing compare fields"))?;
    if fields != ["status", "data.id"] {
        return Err(AppError::config("unexpected compare fields"));
    }
    if config.no_color != Some(true) {
        return Err(AppError::config("unexpected no_color"));
    }
    Ok(())
}

#[test]
fn parse_json_config() -> AppResult<()> {
    let dir = tempdir()?;
    let config = write_and_load(&dir, "reqkit.json", r#"{"dataset": {"count": 3}}"#)?;
    let count = config.dataset.as_ref().and_then(|dataset| dataset.count);
    if count != Some(3) || config.compare.is_some() {
        return Err(AppError::config("unexpected JSON config"));
    }
    Ok(())
}

#[test]
fn retry_section_is_not_accepted() -> AppResult<()> {
    let dir = tempdir()?;
    match write_and_load(&dir, "reqkit.toml", "[retry]\nmax_attempts = 5\n") {
        Err(AppError::Config(ConfigError::ParseToml { .. })) => Ok(()),
        other => Err(AppError::config(ConfigError::TestExpectationValue {
            message: "expected ParseToml",
            value: format!("{:?}", other),
        })),
    }
}

#[test]
fn unknown_keys_are_rejected() -> AppResult<()> {
    let dir = tempdir()?;
    match write_and_load(&dir, "reqkit.toml", "[dataset]\ncolor = \"red\"\n") {
        Err(AppError::Config(ConfigError::ParseToml { .. })) => Ok(()),
        other => Err(AppError::config(ConfigError::TestExpectationValue {
            message: "expected ParseToml",
            value: format!("{:?}", other),
        })),
    }
}

#[test]
fn unsupported_extension_is_rejected() -> AppResult<()> {
    let dir = tempdir()?;
    match write_and_load(&dir, "reqkit.yaml", "dataset: {}") {
        Err(AppError::Config(ConfigError::UnsupportedExtension { ext })) if ext == "yaml" => Ok(()),
        other => Err(AppError::config(ConfigError::TestExpectationValue {
            message: "expected UnsupportedExtension",
            value: format!("{:?}", other),
        })),
    }
}

#[test]
fn explicit_missing_path_fails_to_read() -> AppResult<()> {
    let dir = tempdir()?;
    let path = dir.path().join("absent.toml");
    let path = path.to_str().ok_or(ConfigError::from("non-utf8 temp path"))?;
    match load_config(Some(path)) {
        Err(AppError::Config(ConfigError::ReadConfig { .. })) => Ok(()),
        other => Err(AppError::config(ConfigError::TestExpectationValue {
            message: "expected ReadConfig",
            value: format!("{:?}", other),
        })),
    }
}

#[test]
fn cli_values_win_over_config() -> AppResult<()> {
    let config = ConfigFile {
        dataset: Some(DatasetConfig {
            count: Some(10),
            seed: Some(99),
        }),
        ..ConfigFile::default()
    };
    let mut args = parse_test_args(["reqkit", "generate", "users", "--count", "2"])?;
    apply_config(&mut args, &config);

    let Command::Generate(generate) = &args.command else {
        return Err(AppError::validation("expected generate command"));
    };
    if generate.count != Some(2) || generate.seed != Some(99) {
        return Err(AppError::validation(ValidationError::TestExpectationValue {
            message: "unexpected generate options",
            value: format!("{:?}", generate),
        }));
    }
    Ok(())
}

#[test]
fn compare_fields_come_from_config_when_absent() -> AppResult<()> {
    let dir = tempdir()?;
    let config = write_and_load(&dir, "reqkit.toml", "[compare]\nfields = [\"id\"]\n")?;
    let mut args = parse_test_args(["reqkit", "compare", "a.json", "b.json"])?;
    apply_config(&mut args, &config);

    let Command::Compare(compare) = &args.command else {
        return Err(AppError::validation("expected compare command"));
    };
    if compare.fields != ["id"] {
        return Err(AppError::validation("config fields not applied"));
    }
    Ok(())
}
