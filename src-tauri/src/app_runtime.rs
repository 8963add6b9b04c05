use std::env;

use tauri::{AppHandle, Manager, RunEvent, WindowEvent};

use crate::{
    append_desktop_log, append_shutdown_log, append_startup_log,
    lifecycle::{self, LifecycleAction, LifecycleEvent},
    logging, main_window, runtime_paths, LauncherConfig, ShellState, DESKTOP_LOG_FILE,
};

fn open_window_count(app_handle: &AppHandle) -> usize {
    app_handle
        .try_state::<ShellState>()
        .map(|state| state.lock_windows().open_count())
        .unwrap_or(0)
}

fn show_startup_error(app_handle: &AppHandle, message: &str) {
    append_startup_log(&format!("startup failed: {message}"));
    eprintln!("POMS startup failed: {message}");
    app_handle.exit(1);
}

fn handle_lifecycle_event(app_handle: &AppHandle, event: LifecycleEvent) {
    match lifecycle::decide(event) {
        LifecycleAction::CreateMainWindow => {
            append_startup_log("runtime ready, creating main window");
            if let Err(error) = main_window::create_main_window(app_handle, append_desktop_log) {
                show_startup_error(app_handle, &error);
            }
        }
        LifecycleAction::Quit => {
            append_shutdown_log("all windows closed, exiting desktop process");
            app_handle.exit(0);
        }
        LifecycleAction::LogExitRequest => {
            if let LifecycleEvent::ExitRequested { code, open_windows } = event {
                append_shutdown_log(&lifecycle::describe_exit_request(code, open_windows));
            }
        }
        LifecycleAction::LogExit => append_shutdown_log("desktop process exiting"),
        LifecycleAction::Ignore => {}
    }
}

pub(crate) fn run() {
    let packaged_root_dir = runtime_paths::default_packaged_root_dir();

    append_startup_log("desktop process starting");
    append_startup_log(&format!(
        "desktop log path: {}",
        logging::resolve_desktop_log_path(packaged_root_dir.clone(), DESKTOP_LOG_FILE).display()
    ));

    let config = LauncherConfig::load(
        packaged_root_dir.as_deref(),
        |key| env::var(key).ok(),
        append_startup_log,
    );
    let state = ShellState::new(config);
    state.configure_runtime_flags(append_startup_log);

    tauri::Builder::default()
        .manage(state)
        .on_window_event(|window, event| {
            if let WindowEvent::Destroyed = event {
                let app_handle = window.app_handle();
                let destroyed = {
                    let state = app_handle.state::<ShellState>();
                    let mut windows = state.lock_windows();
                    lifecycle::window_destroyed(&mut windows, window.label())
                };
                append_desktop_log(&format!(
                    "window '{}' destroyed: {:?}",
                    window.label(),
                    destroyed
                ));
                handle_lifecycle_event(app_handle, destroyed);
            }
        })
        .build(tauri::generate_context!())
        .expect("error while building tauri application")
        .run(|app_handle, event| {
            let lifecycle_event = match event {
                RunEvent::Ready => LifecycleEvent::Ready,
                RunEvent::ExitRequested { code, .. } => LifecycleEvent::ExitRequested {
                    code,
                    open_windows: open_window_count(app_handle),
                },
                RunEvent::Exit => LifecycleEvent::Exit,
                _ => return,
            };
            handle_lifecycle_event(app_handle, lifecycle_event);
        });
}
