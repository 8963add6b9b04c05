use crate::{logging, runtime_paths, DESKTOP_LOG_FILE, DESKTOP_LOG_MAX_BYTES};

fn append_categorized_log(category: &str, message: &str) {
    if cfg!(debug_assertions) {
        eprintln!("[{category}] {message}");
    }

    let log_path = logging::resolve_desktop_log_path(
        runtime_paths::default_packaged_root_dir(),
        DESKTOP_LOG_FILE,
    );
    if let Err(error) =
        logging::append_log_line(&log_path, DESKTOP_LOG_MAX_BYTES, category, message)
    {
        eprintln!("failed to append desktop log: {error}");
    }
}

pub(crate) fn append_desktop_log(message: &str) {
    append_categorized_log("desktop", message);
}

pub(crate) fn append_startup_log(message: &str) {
    append_categorized_log("startup", message);
}

pub(crate) fn append_shutdown_log(message: &str) {
    append_categorized_log("shutdown", message);
}
