use std::{env, path::PathBuf};

use crate::ROOT_DIR_ENV;

pub(crate) fn default_packaged_root_dir() -> Option<PathBuf> {
    root_dir_from(env::var(ROOT_DIR_ENV).ok(), home::home_dir())
}

fn root_dir_from(root_override: Option<String>, home_dir: Option<PathBuf>) -> Option<PathBuf> {
    if let Some(root) = root_override {
        let path = PathBuf::from(root.trim());
        if !path.as_os_str().is_empty() {
            return Some(path);
        }
    }

    home_dir.map(|home| home.join(".poms"))
}

pub(crate) fn launcher_dir() -> Result<PathBuf, String> {
    let exe_path = env::current_exe()
        .map_err(|error| format!("Failed to resolve launcher executable path: {error}"))?;
    exe_path
        .parent()
        .map(|dir| dir.to_path_buf())
        .ok_or_else(|| {
            format!(
                "Launcher executable has no parent directory: {}",
                exe_path.display()
            )
        })
}
