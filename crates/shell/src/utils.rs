//! Some utilities

use std::path::{Path, PathBuf};

use ftlog::{
    LevelFilter, LoggerGuard,
    appender::{FileAppender, Period},
};

/// Configures the logger.
///
/// Logs go to `logs/<file_name>` under the current directory, rotated daily. Warnings and errors from the appender itself go to a sibling file with an `-err`
/// suffix.
///
/// # Errors
///
/// - If a logs directory could not be located/created.
/// - If the logger could not be initialized.
pub fn configure_logger(file_name: &str) -> Result<(LoggerGuard, PathBuf), String> {
    let root_dir = PathBuf::from(".").canonicalize().map_err(|e| e.to_string())?;
    let logs_dir = root_dir.join("logs");
    if !logs_dir.exists() {
        std::fs::create_dir(&logs_dir).map_err(|e| e.to_string())?;
    }
    let log_path = logs_dir.join(file_name);

    let writer = FileAppender::builder().path(&log_path).rotate(Period::Day).build();

    let err_stem = log_path
        .file_stem()
        .and_then(|s| s.to_str())
        .ok_or_else(|| format!("Invalid log file name: {file_name}"))?;
    let err_path = log_path.with_file_name(format!("{err_stem}-err"));

    let guard = ftlog::Builder::new()
        // global max log level
        .max_log_level(LevelFilter::Info)
        // define root appender, pass None would write to stderr
        .root(writer)
        // write `Warn` and `Error` logs in ftlog::appender to `err_path` instead of `log_path`
        .filter("ftlog::appender", "ftlog-appender", LevelFilter::Warn)
        .appender("ftlog-appender", FileAppender::new(err_path))
        .try_init()
        .map_err(|e| e.to_string())?;

    Ok((guard, log_path))
}

/// Returns the lower-cased extension of the file at `path`, or an error naming the path if it has none.
pub fn extension<P: AsRef<Path>>(path: P) -> Result<String, String> {
    path.as_ref()
        .extension()
        .and_then(|s| s.to_str())
        .map(str::to_lowercase)
        .ok_or_else(|| format!("Could not determine the format of {:?} without an extension.", path.as_ref()))
}

/// Checks that the parent directory of an output path exists.
pub fn check_out_path<P: AsRef<Path>>(out_path: P) -> Result<(), String> {
    let parent = out_path
        .as_ref()
        .parent()
        .ok_or_else(|| "Output path must have a parent directory.".to_string())?;
    if parent.as_os_str().is_empty() || parent.is_dir() {
        Ok(())
    } else {
        Err(format!("Output directory {parent:?} does not exist."))
    }
}
