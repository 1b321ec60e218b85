
use std::fs;

use serde_json::Value;
use tempfile::tempdir;

use support_cli::{expect_success, run_reqkit};

#[test]
fn e2e_generate_seeded_users() -> Result<(), String> {
    let dir = tempdir().map_err(|err| format!("tempdir failed: {}", err))?;
    let args = ["generate", "users", "--count", "4", "--seed", "3"];

    let first = expect_success(&run_reqkit(dir.path(), args)?)?;
    let second = expect_success(&run_reqkit(dir.path(), args)?)?;
    if first != second {
        return Err("seeded runs produced different output".to_owned());
    }

    let users: Value =
        serde_json::from_str(&first).map_err(|err| format!("invalid JSON output: {}", err))?;
    let users = users.as_array().ok_or("expected a JSON array")?;
    if users.len() != 4 {
        return Err(format!("expected 4 users, got {}", users.len()));
    }
    for user in users {
        let id = user.get("id").and_then(Value::as_u64).ok_or("missing id")?;
        if id >= 10_000 {
            return Err(format!("id out of range: {}", id));
        }
        let age = user.get("age").and_then(Value::as_u64).ok_or("missing age")?;
        if !(18..68).contains(&age) {
            return Err(format!("age out of range: {}", age));
        }
    }
    Ok(())
}

#[test]
fn e2e_generate_unknown_type_fails() -> Result<(), String> {
    let dir = tempdir().map_err(|err| format!("tempdir failed: {}", err))?;
    let output = run_reqkit(dir.path(), ["generate", "invoices"])?;
    if output.status.success() {
        return Err("unknown type must fail".to_owned());
    }
    let stderr = String::from_utf8_lossy(&output.stderr);
    if !stderr.contains("Unknown data type: invoices") {
        return Err(format!("unexpected stderr: {}", stderr));
    }
    Ok(())
}

#[test]
fn e2e_compare_text_output() -> Result<(), String> {
    let dir = tempdir().map_err(|err| format!("tempdir failed: {}", err))?;
    fs::write(dir.path().join("a.json"), r#"{"user": {"name": "Ada", "age": 36}}"#)
        .map_err(|err| format!("write failed: {}", err))?;
    fs::write(dir.path().join("b.json"), r#"{"user": {"age": 36.0, "name": "Ada"}}"#)
        .map_err(|err| format!("write failed: {}", err))?;

    let stdout = expect_success(&run_reqkit(dir.path(), ["compare", "a.json", "b.json"])?)?;
    if !stdout.contains("Identical: yes") || !stdout.contains("Differences: 0") {
        return Err(format!("unexpected output: {}", stdout));
    }
    Ok(())
}

#[test]
fn e2e_compare_uses_default_config_fields() -> Result<(), String> {
    let dir = tempdir().map_err(|err| format!("tempdir failed: {}", err))?;
    fs::write(dir.path().join("reqkit.toml"), "[compare]\nfields = [\"id\"]\n")
        .map_err(|err| format!("write failed: {}", err))?;
    fs::write(dir.path().join("a.json"), r#"{"id": 1, "note": "x"}"#)
        .map_err(|err| format!("write failed: {}", err))?;
    fs::write(dir.path().join("b.json"), r#"{"id": 1, "note": "y"}"#)
        .map_err(|err| format!("write failed: {}", err))?;

    let stdout = expect_success(&run_reqkit(
        dir.path(),
        ["compare", "a.json", "b.json", "--output-format", "json"],
    )?)?;
    let result: Value =
        serde_json::from_str(&stdout).map_err(|err| format!("invalid JSON output: {}", err))?;
    if result.get("identical") != Some(&Value::Bool(false)) {
        return Err(format!("whole documents differ: {}", stdout));
    }
    let differences = result
        .get("differences")
        .and_then(Value::as_array)
        .ok_or("missing differences")?;
    if !differences.is_empty() {
        return Err(format!("only 'id' should be compared: {}", stdout));
    }
    Ok(())
}

#[test]
fn e2e_analyze_summary() -> Result<(), String> {
    let dir = tempdir().map_err(|err| format!("tempdir failed: {}", err))?;
    let records: Vec<String> = (1..=20)
        .map(|latency| format!(r#"{{"status": 200, "responseTime": {}}}"#, latency * 10))
        .collect();
    fs::write(dir.path().join("results.json"), format!("[{}]", records.join(",")))
        .map_err(|err| format!("write failed: {}", err))?;

    let stdout = expect_success(&run_reqkit(dir.path(), ["analyze", "results.json"])?)?;
    let expected = [
        "Total Requests: 20",
        "Min/Max Latency: 10ms / 200ms",
        "Avg Latency: 105.00ms",
        "Median Latency: 105.00ms",
        "P95 Latency: 200ms",
    ];
    for line in expected {
        if !stdout.contains(line) {
            return Err(format!("missing '{}' in output: {}", line, stdout));
        }
    }
    Ok(())
}

#[test]
fn e2e_analyze_missing_file_fails() -> Result<(), String> {
    let dir = tempdir().map_err(|err| format!("tempdir failed: {}", err))?;
    let output = run_reqkit(dir.path(), ["analyze", "missing.json"])?;
    if output.status.success() {
        return Err("missing input must fail".to_owned());
    }
    Ok(())
}

#[test]
fn e2e_uuid_is_v4() -> Result<(), String> {
    let dir = tempdir().map_err(|err| format!("tempdir failed: {}", err))?;
    let stdout = expect_success(&run_reqkit(dir.path(), ["uuid"])?)?;
    let uuid = stdout.trim();
    if uuid.len() != 36 || uuid.chars().nth(14) != Some('4') {
        return Err(format!("not a v4 uuid: {}", uuid));
    }
    Ok(())
}
