use std::{
    env,
    fs::{self, OpenOptions},
    io::Write,
    path::PathBuf,
};

use chrono::Local;

use crate::{runtime_paths, DESKTOP_LOG_FILE, LOG_PATH_ENV};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum LogScope {
    Desktop,
    Startup,
    Shutdown,
}

impl LogScope {
    fn tag(self) -> &'static str {
        match self {
            LogScope::Desktop => "desktop",
            LogScope::Startup => "startup",
            LogScope::Shutdown => "shutdown",
        }
    }
}

pub(crate) fn resolve_desktop_log_path(root_dir: Option<PathBuf>, log_file_name: &str) -> PathBuf {
    if let Ok(custom) = env::var(LOG_PATH_ENV) {
        let path = PathBuf::from(custom.trim());
        if !path.as_os_str().is_empty() {
            return path;
        }
    }

    root_dir
        .unwrap_or_else(|| env::temp_dir().join("photo-booth"))
        .join("logs")
        .join(log_file_name)
}

fn format_log_line(scope: LogScope, timestamp: &str, message: &str) -> String {
    format!("[{timestamp}] [{}] {message}", scope.tag())
}

fn append_log(scope: LogScope, message: &str) {
    let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S%.3f").to_string();
    let line = format_log_line(scope, &timestamp, message);
    eprintln!("{line}");

    let log_path =
        resolve_desktop_log_path(runtime_paths::default_root_dir(), DESKTOP_LOG_FILE);
    if let Some(parent) = log_path.parent() {
        if fs::create_dir_all(parent).is_err() {
            return;
        }
    }
    // Write failures are dropped; stderr already has the line.
    if let Ok(mut file) = OpenOptions::new().create(true).append(true).open(&log_path) {
        let _ = writeln!(file, "{line}");
    }
}

pub(crate) fn append_desktop_log(message: &str) {
    append_log(LogScope::Desktop, message);
}

pub(crate) fn append_startup_log(message: &str) {
    append_log(LogScope::Startup, message);
}

pub(crate) fn append_shutdown_log(message: &str) {
    append_log(LogScope::Shutdown, message);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_log_line_includes_timestamp_and_scope() {
        assert_eq!(
            format_log_line(LogScope::Startup, "2024-01-01 10:00:00.000", "Create Window"),
            "[2024-01-01 10:00:00.000] [startup] Create Window"
        );
    }

    #[test]
    fn resolve_desktop_log_path_uses_logs_dir_under_root() {
        if env::var(LOG_PATH_ENV).is_ok() {
            return;
        }
        let root = PathBuf::from("/tmp/photo-booth-root");
        assert_eq!(
            resolve_desktop_log_path(Some(root.clone()), "desktop.log"),
            root.join("logs").join("desktop.log")
        );
    }
}
