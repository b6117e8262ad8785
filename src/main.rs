use std::path::Path;
use std::process::ExitCode;

use bevy_log::{error, info, warn};
use serde_json::Value;

use mizforge::config::{WireOptions, load_config};
use mizforge::{Layer, Result, Unit, UnitKind, paths};

const USAGE: &str = "usage: mizforge <layer|vehicle|ship|static|unit> <file.json>";

/// Set up file logging for debug builds
#[cfg(debug_assertions)]
fn setup_logging() -> Option<tracing_appender::non_blocking::WorkerGuard> {
    use std::fs::OpenOptions;
    use std::io::Write;
    use tracing_subscriber::prelude::*;

    let logs_dir = paths::logs_dir();
    if std::fs::create_dir_all(&logs_dir).is_err() {
        eprintln!("Failed to create logs directory {:?}", logs_dir);
        return None;
    }

    let log_file_path = logs_dir.join("mizforge.log");

    if let Ok(mut file) = OpenOptions::new().append(true).open(&log_file_path) {
        let timestamp = chrono::Local::now().format("%Y-%m-%d %H:%M:%S");
        let separator = "=".repeat(80);
        let _ = writeln!(
            file,
            "\n\n{}\n=== New Run Started at {} ===\n{}\n",
            separator, timestamp, separator
        );
    }

    let file_appender = tracing_appender::rolling::never(&logs_dir, "mizforge.log");
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(non_blocking)
        .with_ansi(false)
        .with_target(true)
        .with_level(true);

    // stderr keeps stdout clean for the re-encoded record
    let console_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(true)
        .with_target(true)
        .with_level(true);

    tracing_subscriber::registry()
        .with(default_filter())
        .with(file_layer)
        .with(console_layer)
        .init();

    Some(guard)
}

#[cfg(not(debug_assertions))]
fn setup_logging() -> Option<()> {
    use tracing_subscriber::prelude::*;

    tracing_subscriber::registry()
        .with(default_filter())
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
    None
}

fn default_filter() -> tracing_subscriber::EnvFilter {
    tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info,mizforge=debug"))
}

/// Decode `value` as `what` and encode it again
fn reencode(what: &str, value: &Value, options: &WireOptions) -> Option<Result<Value>> {
    let unit = |kind: UnitKind| Unit::from_wire(kind, value).map(|unit| unit.to_wire());
    Some(match what {
        "layer" => Layer::from_wire(value).map(|layer| layer.to_wire_with(options)),
        "vehicle" => unit(UnitKind::Vehicle),
        "ship" => unit(UnitKind::Ship),
        "static" => {
            let type_name = value.get("type").and_then(Value::as_str).unwrap_or_default();
            unit(UnitKind::for_static_type(type_name))
        }
        "unit" => unit(UnitKind::Plain),
        _ => return None,
    })
}

fn run(what: &str, file: &Path, options: &WireOptions) -> Result<Option<String>> {
    let text = std::fs::read_to_string(file)?;
    let value: Value = serde_json::from_str(&text)?;
    match reencode(what, &value, options) {
        Some(encoded) => Ok(Some(serde_json::to_string_pretty(&encoded?)?)),
        None => Ok(None),
    }
}

fn main() -> ExitCode {
    // Keep the guard alive for the duration of the program
    let _log_guard = setup_logging();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let [what, file] = args.as_slice() else {
        eprintln!("{}", USAGE);
        return ExitCode::FAILURE;
    };

    let loaded = load_config(&paths::config_file());
    if let Some(reason) = &loaded.reset_reason {
        warn!("Using default wire options: {}", reason);
    }

    match run(what, Path::new(file), &loaded.config.wire) {
        Ok(Some(json)) => {
            println!("{}", json);
            info!("Re-encoded {} from {:?}", what, file);
            ExitCode::SUCCESS
        }
        Ok(None) => {
            eprintln!("{}", USAGE);
            ExitCode::FAILURE
        }
        Err(e) => {
            error!("Failed to re-encode {:?}: {}", file, e);
            ExitCode::FAILURE
        }
    }
}
