// SPDX-License-Identifier: MPL-2.0
use chrono::{DateTime, Local};
use crimewatch::alerts::RemovalCause;
use crimewatch::app::{self, App, Flags, Message};
use crimewatch::config::{self, Config};
use crimewatch::domain::alert::{AlertKind, AlertRecord};
use crimewatch::domain::intake::FileCategory;
use crimewatch::error::{Error, Result};
use crimewatch::intake::{format_file_size, mime};
use crimewatch::logging;
use crimewatch::simulation::DetectionFeed;
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

const HELP: &str = "\
crimewatch - alert and upload core of the crime-detection dashboard

USAGE:
  crimewatch [OPTIONS] validate <FILE>...
  crimewatch [OPTIONS] watch [--seconds N] [--seed S] [--min-kind KIND]

OPTIONS:
  --config-dir DIR   Read settings.toml from DIR
  --verbose          Log at debug level
  -h, --help         Print this help

WATCH:
  --seconds N        Run for N seconds (default 30)
  --seed S           Use a reproducible detection feed
  --min-kind KIND    Only print alerts of KIND or more urgent
                     (success, info, warning, error, critical)

Urgent alerts (error, critical) are marked with `!`.
";

const DEFAULT_WATCH_SECS: u64 = 30;

#[derive(Debug, PartialEq)]
enum Command {
    Validate(Vec<PathBuf>),
    Watch {
        seconds: u64,
        seed: Option<u64>,
        min_kind: AlertKind,
    },
}

fn parse_args() -> Result<Option<(Flags, Command)>> {
    parse_from(pico_args::Arguments::from_env())
}

fn parse_from(mut args: pico_args::Arguments) -> Result<Option<(Flags, Command)>> {
    if args.contains(["-h", "--help"]) {
        return Ok(None);
    }

    let flags = Flags {
        config_dir: args.opt_value_from_str("--config-dir")?,
        verbose: args.contains("--verbose"),
    };

    let command = match args.subcommand()?.as_deref() {
        Some("validate") => {
            let files: Vec<PathBuf> = args.finish().into_iter().map(PathBuf::from).collect();
            if files.is_empty() {
                return Err(Error::Usage("validate needs at least one file".to_string()));
            }
            Command::Validate(files)
        }
        Some("watch") => {
            let seconds = args
                .opt_value_from_str("--seconds")?
                .unwrap_or(DEFAULT_WATCH_SECS);
            let seed = args.opt_value_from_str("--seed")?;
            let min_kind = args
                .opt_value_from_str("--min-kind")?
                .unwrap_or(AlertKind::Success);
            let rest = args.finish();
            if !rest.is_empty() {
                return Err(Error::Usage(format!("unexpected arguments: {rest:?}")));
            }
            Command::Watch {
                seconds,
                seed,
                min_kind,
            }
        }
        Some(other) => return Err(Error::Usage(format!("unknown command: {other}"))),
        None => return Ok(None),
    };

    Ok(Some((flags, command)))
}

fn format_time(record: &AlertRecord) -> String {
    DateTime::<Local>::from(record.created_at())
        .format("%H:%M:%S")
        .to_string()
}

fn format_alert(record: &AlertRecord) -> String {
    let marker = if record.kind().is_urgent() { '!' } else { ' ' };
    format!(
        "[{}] {marker} {:<8} {}: {}",
        format_time(record),
        record.kind().label(),
        record.title(),
        record.message()
    )
}

fn print_alert(record: &AlertRecord) {
    println!("{}", format_alert(record));
}

/// Reproducible feed for `--seed`, unless settings disable the simulation.
fn seeded_feed(config: &Config, seed: u64) -> Option<DetectionFeed> {
    if !config.simulation.enabled {
        tracing::warn!(seed, "simulation is disabled in settings, ignoring --seed");
        return None;
    }
    Some(
        DetectionFeed::seeded(seed)
            .with_period(config.detection_period().as_duration())
            .with_chance(config.simulation.chance),
    )
}

fn validate(config: &Config, paths: &[PathBuf]) -> Result<()> {
    let mut app = App::new(config).with_feed(None);

    let mut candidates = Vec::with_capacity(paths.len());
    for path in paths {
        match mime::candidate_from_path(path) {
            Ok(candidate) => candidates.push(candidate),
            Err(err) => tracing::warn!(path = %path.display(), error = %err, "skipping unreadable file"),
        }
    }
    app.update(Message::FilesOffered(candidates))?;

    let (pending, capacity) = app.intake().fill();
    println!("Selected files ({pending}/{capacity}):");
    for file in app.intake().batch() {
        let category = match file.category() {
            FileCategory::Image => "image",
            FileCategory::Video => "video",
            FileCategory::Other => "other",
        };
        println!(
            "  {:<32} {:>10}  {category}",
            file.name,
            format_file_size(file.size_bytes)
        );
    }

    for alert in app.alerts().active() {
        print_alert(alert.record());
    }
    Ok(())
}

async fn watch(
    config: &Config,
    seconds: u64,
    seed: Option<u64>,
    min_kind: AlertKind,
) -> Result<()> {
    let mut app = App::new(config);
    if let Some(seed) = seed {
        app = app.with_feed(seeded_feed(config, seed));
    }
    app.alerts_mut()
        .on_removed(|id| tracing::debug!(id = %id, "alert cleared"));

    tracing::info!(seconds, min_kind = %min_kind, "watching live feed");
    app::run_for(
        &mut app,
        config.tick_interval(),
        Duration::from_secs(seconds),
        |record| {
            if record.kind() >= min_kind {
                print_alert(record);
            }
        },
    )
    .await?;
    app.shutdown();

    let history = app.alerts().history();
    println!(
        "{} detection(s), {} expired, {} dismissed",
        app.detections(),
        history.count(RemovalCause::Expired),
        history.count(RemovalCause::Dismissed)
    );
    Ok(())
}

#[tokio::main]
async fn main() -> ExitCode {
    let (flags, command) = match parse_args() {
        Ok(Some(parsed)) => parsed,
        Ok(None) => {
            print!("{HELP}");
            return ExitCode::SUCCESS;
        }
        Err(err) => {
            eprintln!("{err}\n\n{HELP}");
            return ExitCode::from(2);
        }
    };

    logging::init(flags.verbose);
    config::paths::init_cli_override(flags.config_dir);
    if let Some(dir) = config::paths::get_app_config_dir() {
        tracing::debug!(dir = %dir.display(), "config directory");
    }

    let (config, warning) = config::load();
    if let Some(warning) = warning {
        tracing::warn!("{warning}");
    }

    let result = match command {
        Command::Validate(paths) => validate(&config, &paths),
        Command::Watch {
            seconds,
            seed,
            min_kind,
        } => watch(&config, seconds, seed, min_kind).await,
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(error = %err, "command failed");
            ExitCode::FAILURE
        }
    }
}
