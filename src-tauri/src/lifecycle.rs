use crate::WindowRegistry;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum LifecycleEvent {
    Ready,
    WindowDestroyed { remaining: usize },
    ExitRequested { code: Option<i32>, open_windows: usize },
    Exit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum LifecycleAction {
    CreateMainWindow,
    Quit,
    LogExitRequest,
    LogExit,
    Ignore,
}

pub(crate) fn decide(event: LifecycleEvent) -> LifecycleAction {
    match event {
        LifecycleEvent::Ready => LifecycleAction::CreateMainWindow,
        LifecycleEvent::WindowDestroyed { remaining: 0 } => LifecycleAction::Quit,
        LifecycleEvent::WindowDestroyed { .. } => LifecycleAction::Ignore,
        LifecycleEvent::ExitRequested { .. } => LifecycleAction::LogExitRequest,
        LifecycleEvent::Exit => LifecycleAction::LogExit,
    }
}

pub(crate) fn window_destroyed(registry: &mut WindowRegistry, label: &str) -> LifecycleEvent {
    LifecycleEvent::WindowDestroyed {
        remaining: registry.forget(label),
    }
}

pub(crate) fn describe_exit_request(code: Option<i32>, open_windows: usize) -> String {
    match code {
        Some(code) => format!("exit requested with code {code} ({open_windows} window(s) open)"),
        None => format!("exit requested by runtime ({open_windows} window(s) open)"),
    }
}
