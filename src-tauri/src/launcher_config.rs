use std::{
    fs,
    path::{Path, PathBuf},
};

use serde::Deserialize;

use crate::{
    DEFAULT_WINDOW_TITLE, EXTRA_SWITCHES_ENV, INDEX_HTML_ENV, MAIN_WINDOW_HEIGHT,
    MAIN_WINDOW_WIDTH, OPEN_DEVTOOLS_ENV, SHELL_CONFIG_FILE, UNSAFE_WEBGPU_ENV, WINDOW_TITLE_ENV,
};

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct WindowSpec {
    pub(crate) title: String,
    pub(crate) width: f64,
    pub(crate) height: f64,
}

impl Default for WindowSpec {
    fn default() -> Self {
        Self {
            title: DEFAULT_WINDOW_TITLE.to_string(),
            width: MAIN_WINDOW_WIDTH,
            height: MAIN_WINDOW_HEIGHT,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct LauncherConfig {
    pub(crate) window: WindowSpec,
    pub(crate) document_path: Option<PathBuf>,
    pub(crate) open_devtools: bool,
    pub(crate) enable_unsafe_webgpu: bool,
    pub(crate) extra_switches: Vec<String>,
}

impl Default for LauncherConfig {
    fn default() -> Self {
        Self {
            window: WindowSpec::default(),
            document_path: None,
            open_devtools: true,
            enable_unsafe_webgpu: true,
            extra_switches: Vec::new(),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ShellConfigFile {
    pub(crate) document_path: Option<PathBuf>,
    pub(crate) open_devtools: Option<bool>,
    pub(crate) enable_unsafe_webgpu: Option<bool>,
    pub(crate) extra_switches: Option<Vec<String>>,
    pub(crate) window_title: Option<String>,
}

pub(crate) fn shell_config_path(root_dir: Option<&Path>) -> Option<PathBuf> {
    root_dir.map(|root| root.join(SHELL_CONFIG_FILE))
}

pub(crate) fn read_shell_config_file(path: &Path) -> Result<Option<ShellConfigFile>, String> {
    let raw = match fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(error) if error.kind() == std::io::ErrorKind::NotFound => return Ok(None),
        Err(error) => {
            return Err(format!(
                "Failed to read shell config {}: {}",
                path.display(),
                error
            ));
        }
    };

    serde_json::from_str::<ShellConfigFile>(&raw)
        .map(Some)
        .map_err(|error| {
            format!(
                "Failed to parse shell config {}: {}",
                path.display(),
                error
            )
        })
}

pub(crate) fn parse_bool_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

fn non_blank(raw: String) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

impl LauncherConfig {
    pub(crate) fn apply_file(
        mut self,
        file: ShellConfigFile,
        config_dir: Option<&Path>,
    ) -> Self {
        if let Some(path) = file.document_path {
            // Relative to shell.json, not to the working directory.
            self.document_path = Some(match config_dir {
                Some(dir) if path.is_relative() => dir.join(path),
                _ => path,
            });
        }
        if let Some(open_devtools) = file.open_devtools {
            self.open_devtools = open_devtools;
        }
        if let Some(enabled) = file.enable_unsafe_webgpu {
            self.enable_unsafe_webgpu = enabled;
        }
        if let Some(extra_switches) = file.extra_switches {
            self.extra_switches = extra_switches;
        }
        if let Some(title) = file.window_title.and_then(non_blank) {
            self.window.title = title;
        }
        self
    }

    pub(crate) fn apply_env<E, F>(mut self, lookup: E, log: F) -> Self
    where
        E: Fn(&str) -> Option<String>,
        F: Fn(&str),
    {
        if let Some(path) = lookup(INDEX_HTML_ENV).and_then(non_blank) {
            self.document_path = Some(PathBuf::from(path));
        }

        for (key, target) in [
            (OPEN_DEVTOOLS_ENV, &mut self.open_devtools),
            (UNSAFE_WEBGPU_ENV, &mut self.enable_unsafe_webgpu),
        ] {
            let Some(raw) = lookup(key) else {
                continue;
            };
            match parse_bool_flag(&raw) {
                Some(value) => *target = value,
                None => log(&format!("ignoring {key}={raw}: expected a boolean flag")),
            }
        }

        if let Some(raw) = lookup(EXTRA_SWITCHES_ENV).and_then(non_blank) {
            match shlex::split(&raw) {
                Some(pieces) => self.extra_switches.extend(pieces),
                None => log(&format!("ignoring {EXTRA_SWITCHES_ENV}: unbalanced quoting")),
            }
        }

        if let Some(title) = lookup(WINDOW_TITLE_ENV).and_then(non_blank) {
            self.window.title = title;
        }
        self
    }

    pub(crate) fn load<E, F>(root_dir: Option<&Path>, lookup: E, log: F) -> Self
    where
        E: Fn(&str) -> Option<String>,
        F: Fn(&str),
    {
        let mut config = Self::default();
        if let Some(path) = shell_config_path(root_dir) {
            match read_shell_config_file(&path) {
                Ok(Some(file)) => {
                    log(&format!("loaded shell config {}", path.display()));
                    config = config.apply_file(file, path.parent());
                }
                Ok(None) => {}
                Err(error) => log(&format!("{error}; using defaults")),
            }
        }
        config.apply_env(lookup, log)
    }
}

#[cfg(test)]
mod tests {
    use std::{cell::RefCell, collections::HashMap};

    use super::*;

    fn env_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn default_config_uses_fixed_window_size_and_enables_devtools() {
        let config = LauncherConfig::default();
        assert_eq!(config.window.width, 800.0);
        assert_eq!(config.window.height, 600.0);
        assert!(config.open_devtools);
        assert!(config.enable_unsafe_webgpu);
        assert_eq!(config.document_path, None);
    }

    #[test]
    fn parse_bool_flag_accepts_common_spellings() {
        assert_eq!(parse_bool_flag(" OFF "), Some(false));
        assert_eq!(parse_bool_flag("yes"), Some(true));
        assert_eq!(parse_bool_flag("maybe"), None);
    }

    #[test]
    fn apply_env_overrides_document_and_flags() {
        let config = LauncherConfig::default().apply_env(
            env_from(&[
                (INDEX_HTML_ENV, "/srv/poms/index.html"),
                (OPEN_DEVTOOLS_ENV, "0"),
                (EXTRA_SWITCHES_ENV, "--enable-features=Vulkan 'ignore-gpu-blocklist'"),
            ]),
            |_| {},
        );

        assert_eq!(
            config.document_path,
            Some(PathBuf::from("/srv/poms/index.html"))
        );
        assert!(!config.open_devtools);
        assert!(config.enable_unsafe_webgpu);
        assert_eq!(
            config.extra_switches,
            vec![
                "--enable-features=Vulkan".to_string(),
                "ignore-gpu-blocklist".to_string()
            ]
        );
    }

    #[test]
    fn apply_env_logs_and_ignores_invalid_flag_values() {
        let lines = RefCell::new(Vec::new());
        let config = LauncherConfig::default().apply_env(
            env_from(&[(UNSAFE_WEBGPU_ENV, "sometimes")]),
            |line| lines.borrow_mut().push(line.to_string()),
        );

        assert!(config.enable_unsafe_webgpu);
        assert_eq!(lines.borrow().len(), 1);
        assert!(lines.borrow()[0].contains(UNSAFE_WEBGPU_ENV));
    }

    #[test]
    fn load_layers_file_under_environment() {
        let temp = tempfile::tempdir().expect("create temp dir");
        fs::write(
            temp.path().join(SHELL_CONFIG_FILE),
            r#"{ "documentPath": "/from/file/index.html", "openDevtools": false, "windowTitle": "Viewer" }"#,
        )
        .expect("write shell config");

        let config = LauncherConfig::load(
            Some(temp.path()),
            env_from(&[(INDEX_HTML_ENV, "/from/env/index.html")]),
            |_| {},
        );

        assert_eq!(
            config.document_path,
            Some(PathBuf::from("/from/env/index.html"))
        );
        assert!(!config.open_devtools);
        assert_eq!(config.window.title, "Viewer");
        assert_eq!(config.window.width, MAIN_WINDOW_WIDTH);
    }

    #[test]
    fn load_resolves_relative_document_path_against_config_dir() {
        let temp = tempfile::tempdir().expect("create temp dir");
        let web_root = temp.path().join("web");
        fs::create_dir_all(&web_root).expect("create web root");
        fs::write(web_root.join("index.html"), "<!doctype html>").expect("write index.html");
        fs::write(
            temp.path().join(SHELL_CONFIG_FILE),
            r#"{ "documentPath": "web" }"#,
        )
        .expect("write shell config");

        let config = LauncherConfig::load(Some(temp.path()), |_| None, |_| {});

        assert_eq!(config.document_path, Some(web_root.clone()));
        let resolved = crate::document_root::resolve_document(
            config.document_path.as_deref(),
            Path::new("/nonexistent/bin"),
            None,
        )
        .expect("resolve configured document");
        assert!(resolved.path.ends_with("web/index.html"));
    }

    #[test]
    fn apply_env_keeps_relative_document_path_as_given() {
        let config = LauncherConfig::default()
            .apply_env(env_from(&[(INDEX_HTML_ENV, "web/index.html")]), |_| {});
        assert_eq!(config.document_path, Some(PathBuf::from("web/index.html")));
    }

    #[test]
    fn load_falls_back_to_defaults_on_malformed_file() {
        let temp = tempfile::tempdir().expect("create temp dir");
        fs::write(temp.path().join(SHELL_CONFIG_FILE), "{ not json").expect("write config");
        let lines = RefCell::new(Vec::new());

        let config = LauncherConfig::load(Some(temp.path()), |_| None, |line| {
            lines.borrow_mut().push(line.to_string())
        });

        assert_eq!(config, LauncherConfig::default());
        assert!(lines.borrow()[0].contains("Failed to parse shell config"));
    }

    #[test]
    fn read_shell_config_file_returns_none_when_missing() {
        let temp = tempfile::tempdir().expect("create temp dir");
        let result = read_shell_config_file(&temp.path().join(SHELL_CONFIG_FILE))
            .expect("missing file is not an error");
        assert!(result.is_none());
    }
}
