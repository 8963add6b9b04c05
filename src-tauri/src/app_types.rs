use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::{runtime_switches, LauncherConfig, RuntimeSwitches, WindowRegistry};

#[derive(Debug)]
pub(crate) struct ShellState {
    pub(crate) config: LauncherConfig,
    pub(crate) switches: Mutex<RuntimeSwitches>,
    pub(crate) windows: Mutex<WindowRegistry>,
}

impl ShellState {
    pub(crate) fn new(config: LauncherConfig) -> Self {
        Self {
            config,
            switches: Mutex::new(RuntimeSwitches::default()),
            windows: Mutex::new(WindowRegistry::default()),
        }
    }

    pub(crate) fn lock_switches(&self) -> MutexGuard<'_, RuntimeSwitches> {
        self.switches.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub(crate) fn lock_windows(&self) -> MutexGuard<'_, WindowRegistry> {
        self.windows.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub(crate) fn configure_runtime_flags<F>(&self, log: F)
    where
        F: Fn(&str),
    {
        let mut switches = self.lock_switches();
        runtime_switches::configure_runtime_flags(&mut switches, &self.config, log);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ENABLE_UNSAFE_WEBGPU_SWITCH;

    #[test]
    fn configure_runtime_flags_populates_shared_switches() {
        let state = ShellState::new(LauncherConfig::default());
        state.configure_runtime_flags(|_| {});

        assert!(state.lock_switches().has_switch(ENABLE_UNSAFE_WEBGPU_SWITCH));
        assert_eq!(state.lock_windows().open_count(), 0);
    }
}
