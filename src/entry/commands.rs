use serde::Serialize;
use serde_json::{Map, Value, json};

use reqkit::analysis::{analyze_values, summary_lines};
use reqkit::args::{
    AnalyzeArgs, Command, CompareArgs, FingerprintArgs, GenerateArgs, OutputFormat, ReqkitArgs,
};
use reqkit::compare::{compare, comparison_lines};
use reqkit::dataset::{DEFAULT_COUNT, DatasetGenerator};
use reqkit::error::AppResult;
use reqkit::support::{fingerprint, generate_uuid, md5_hex};

use super::input::{read_json, read_records};

const NO_SAMPLES: &str = "No usable latency samples.";

/// Runs the selected subcommand and returns what should be printed.
pub(super) async fn execute(args: &ReqkitArgs) -> AppResult<String> {
    let format = args.output_format;
    match &args.command {
        Command::Generate(generate) => run_generate(generate, format),
        Command::Compare(compare) => run_compare(compare, format).await,
        Command::Analyze(analyze) => run_analyze(analyze, format).await,
        Command::Fingerprint(fingerprint) => run_fingerprint(fingerprint, format),
        Command::Uuid => run_uuid(format),
    }
}

fn run_generate(args: &GenerateArgs, format: OutputFormat) -> AppResult<String> {
    let count = args.count.unwrap_or(DEFAULT_COUNT);
    let records = DatasetGenerator::from_seed(args.seed).generate_named(&args.kind, count)?;
    render_json(&Value::Array(records), format)
}

async fn run_compare(args: &CompareArgs, format: OutputFormat) -> AppResult<String> {
    let left = read_json(&args.left).await?;
    let right = read_json(&args.right).await?;
    let result = compare(&left, &right, args.fields.as_slice());
    match format {
        OutputFormat::Text => Ok(comparison_lines(&result).join("\n")),
        OutputFormat::Json => render_json(&result, format),
    }
}

async fn run_analyze(args: &AnalyzeArgs, format: OutputFormat) -> AppResult<String> {
    let records = read_records(&args.path).await?;
    let summary = analyze_values(&records);
    match (format, summary) {
        (OutputFormat::Text, Some(summary)) => Ok(summary_lines(&summary).join("\n")),
        (OutputFormat::Text, None) => Ok(NO_SAMPLES.to_owned()),
        (OutputFormat::Json, summary) => render_json(&summary, format),
    }
}

fn run_fingerprint(args: &FingerprintArgs, format: OutputFormat) -> AppResult<String> {
    let (label, digest) = if args.md5 {
        ("md5", md5_hex(args.text.as_bytes()))
    } else {
        ("fingerprint", fingerprint(&args.text))
    };
    match format {
        OutputFormat::Text => Ok(digest),
        OutputFormat::Json => {
            let mut object = Map::new();
            object.insert(label.to_owned(), Value::String(digest));
            render_json(&object, format)
        }
    }
}

fn run_uuid(format: OutputFormat) -> AppResult<String> {
    let uuid = generate_uuid();
    match format {
        OutputFormat::Text => Ok(uuid),
        OutputFormat::Json => render_json(&json!({ "uuid": uuid }), format),
    }
}

fn render_json<T>(value: &T, format: OutputFormat) -> AppResult<String>
where
    T: Serialize + ?Sized,
{
    let rendered = match format {
        OutputFormat::Text => serde_json::to_string_pretty(value)?,
        OutputFormat::Json => serde_json::to_string(value)?,
    };
    Ok(rendered)
}
