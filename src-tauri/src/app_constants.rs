pub(crate) const MAIN_WINDOW_LABEL: &str = "main";
pub(crate) const DEFAULT_WINDOW_TITLE: &str = "POMS";
pub(crate) const MAIN_WINDOW_WIDTH: f64 = 800.0;
pub(crate) const MAIN_WINDOW_HEIGHT: f64 = 600.0;

pub(crate) const DOCUMENT_FILE_NAME: &str = "index.html";
pub(crate) const SHELL_CONFIG_FILE: &str = "shell.json";
pub(crate) const DESKTOP_LOG_FILE: &str = "desktop.log";
pub(crate) const DESKTOP_LOG_MAX_BYTES: u64 = 5 * 1024 * 1024;

pub(crate) const ENABLE_UNSAFE_WEBGPU_SWITCH: &str = "enable-unsafe-webgpu";
// Tauri passes these to WebView2 unless the caller overrides the browser args.
pub(crate) const WEBVIEW2_DEFAULT_BROWSER_ARGS: &str =
    "--disable-features=msWebOOUI,msPdfOOUI,msSmartScreenProtection";

pub(crate) const ROOT_DIR_ENV: &str = "POMS_ROOT";
pub(crate) const INDEX_HTML_ENV: &str = "POMS_INDEX_HTML";
pub(crate) const OPEN_DEVTOOLS_ENV: &str = "POMS_OPEN_DEVTOOLS";
pub(crate) const UNSAFE_WEBGPU_ENV: &str = "POMS_UNSAFE_WEBGPU";
pub(crate) const EXTRA_SWITCHES_ENV: &str = "POMS_EXTRA_SWITCHES";
pub(crate) const WINDOW_TITLE_ENV: &str = "POMS_WINDOW_TITLE";
