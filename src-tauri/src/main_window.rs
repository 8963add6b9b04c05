use std::path::Path;

use tauri::{AppHandle, Manager, WebviewUrl, WebviewWindow, WebviewWindowBuilder};
use url::Url;

use crate::{
    document_root::{self, DocumentSource},
    runtime_paths, ShellState,
};

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct MainWindowPlan {
    pub(crate) label: String,
    pub(crate) url: Url,
    pub(crate) document_source: DocumentSource,
    pub(crate) title: String,
    pub(crate) width: f64,
    pub(crate) height: f64,
    pub(crate) browser_args: String,
    pub(crate) open_devtools: bool,
}

pub(crate) fn plan_main_window(
    state: &ShellState,
    launcher_dir: &Path,
    resource_dir: Option<&Path>,
) -> Result<MainWindowPlan, String> {
    let browser_args = {
        let mut switches = state.lock_switches();
        switches.seal();
        switches.to_browser_args()
    };

    let document = document_root::resolve_document(
        state.config.document_path.as_deref(),
        launcher_dir,
        resource_dir,
    )?;
    let url = document_root::document_url(&document.path)?;

    Ok(MainWindowPlan {
        label: state.lock_windows().allocate_label(),
        url,
        document_source: document.source,
        title: state.config.window.title.clone(),
        width: state.config.window.width,
        height: state.config.window.height,
        browser_args,
        open_devtools: state.config.open_devtools,
    })
}

pub(crate) fn create_main_window<F>(app_handle: &AppHandle, log: F) -> Result<WebviewWindow, String>
where
    F: Fn(&str),
{
    let state = app_handle.state::<ShellState>();
    let launcher_dir = runtime_paths::launcher_dir()?;
    let resource_dir = app_handle.path().resource_dir().ok();
    let plan = plan_main_window(&state, &launcher_dir, resource_dir.as_deref())?;
    let window_number = state.lock_windows().created_count();
    log(&format!(
        "creating window '{}' (#{}, {}x{}) for {} ({:?}), browser args: {}",
        plan.label,
        window_number,
        plan.width,
        plan.height,
        plan.url,
        plan.document_source,
        plan.browser_args
    ));

    let builder = WebviewWindowBuilder::new(app_handle, &plan.label, WebviewUrl::External(plan.url))
        .title(&plan.title)
        .inner_size(plan.width, plan.height);
    #[cfg(target_os = "windows")]
    let builder = builder.additional_browser_args(&plan.browser_args);

    let window = builder
        .build()
        .map_err(|error| format!("Failed to create window '{}': {}", plan.label, error))?;
    state.lock_windows().register(&plan.label);

    if plan.open_devtools {
        window.open_devtools();
        log(&format!("opened devtools for window '{}'", plan.label));
    }
    Ok(window)
}
