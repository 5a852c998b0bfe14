use crate::{ConfigError, ConfigErrorResult, LogLevel};

use std::fs::File;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use fern::Dispatch;
use fern::colors::{Color, ColoredLevelConfig};
use log::{LevelFilter, info};

/// Transport crates that are noisy below `info`
const QUIET_TARGETS: [&str; 3] = ["hyper", "hyper_util", "reqwest"];

/// Install the process-wide logger.
///
/// Writes to stdout unless `log_file` is set. Colours only apply to stdout.
/// Each line is `[<rfc3339> - <LEVEL>] <message> [<target>]`.
pub fn initialize(
    log_level: LogLevel,
    log_file: Option<PathBuf>,
    colored: bool,
) -> ConfigErrorResult<()> {
    let level_filter = log_level.0;
    let colors = (colored && log_file.is_none()).then(level_colors);

    let mut dispatch = Dispatch::new()
        .level(level_filter)
        .format(move |out, message, record| {
            let level = match &colors {
                Some(colors) => colors.color(record.level()).to_string(),
                None => record.level().to_string(),
            };
            out.finish(format_args!(
                "[{} - {}] {} [{}]",
                humantime::format_rfc3339_millis(SystemTime::now()),
                level,
                message,
                record.target()
            ))
        });

    for target in QUIET_TARGETS {
        dispatch = dispatch.level_for(target, level_filter.min(LevelFilter::Info));
    }

    let dispatch = match &log_file {
        Some(path) => dispatch.chain(open_log_file(path)?),
        None => dispatch.chain(std::io::stdout()),
    };

    dispatch
        .apply()
        .map_err(|e| ConfigError::logging(format!("Failed to initialize logger: {e}")))?;

    match &log_file {
        Some(path) => info!("Logger initialized: level={level_filter}, file={}", path.display()),
        None => info!("Logger initialized: level={level_filter}, stdout"),
    }

    // Bridge tracing to log
    tracing_log::LogTracer::init().ok();

    Ok(())
}

fn open_log_file(path: &Path) -> ConfigErrorResult<File> {
    std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })
}

fn level_colors() -> ColoredLevelConfig {
    ColoredLevelConfig::new()
        .trace(Color::Magenta)
        .debug(Color::Blue)
        .info(Color::Green)
        .warn(Color::Yellow)
        .error(Color::Red)
}
