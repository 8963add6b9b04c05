use std::{
    env, fs,
    fs::OpenOptions,
    io::Write,
    path::{Path, PathBuf},
};

use chrono::Local;

pub(crate) fn resolve_desktop_log_path(root_dir: Option<PathBuf>, log_file: &str) -> PathBuf {
    root_dir
        .unwrap_or_else(|| env::temp_dir().join("poms"))
        .join("logs")
        .join(log_file)
}

fn rotated_log_path(path: &Path) -> PathBuf {
    let mut rotated = path.as_os_str().to_os_string();
    rotated.push(".1");
    PathBuf::from(rotated)
}

fn rotate_if_needed(path: &Path, max_bytes: u64) -> Result<(), String> {
    let Ok(metadata) = fs::metadata(path) else {
        return Ok(());
    };
    if metadata.len() < max_bytes {
        return Ok(());
    }

    let rotated = rotated_log_path(path);
    fs::rename(path, &rotated).map_err(|error| {
        format!(
            "Failed to rotate log {} to {}: {}",
            path.display(),
            rotated.display(),
            error
        )
    })
}

pub(crate) fn format_log_line(category: &str, message: &str) -> String {
    format!(
        "[{}] [{}] {}\n",
        Local::now().format("%Y-%m-%d %H:%M:%S%.3f"),
        category,
        message
    )
}

pub(crate) fn append_log_line(
    path: &Path,
    max_bytes: u64,
    category: &str,
    message: &str,
) -> Result<(), String> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|error| {
            format!(
                "Failed to create log directory {}: {}",
                parent.display(),
                error
            )
        })?;
    }
    let rotation = rotate_if_needed(path, max_bytes);

    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|error| format!("Failed to open log {}: {}", path.display(), error))?;
    let mut lines = String::new();
    if let Err(error) = rotation {
        lines.push_str(&format_log_line("logging", &error));
    }
    lines.push_str(&format_log_line(category, message));
    file.write_all(lines.as_bytes())
        .map_err(|error| format!("Failed to write log {}: {}", path.display(), error))
}
