use crate::{LauncherConfig, ENABLE_UNSAFE_WEBGPU_SWITCH, WEBVIEW2_DEFAULT_BROWSER_ARGS};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct RuntimeSwitches {
    switches: Vec<String>,
    sealed: bool,
}

fn normalize_switch_name(raw: &str) -> Option<String> {
    let name = raw.trim().trim_start_matches('-').trim();
    if name.is_empty() || name.chars().any(char::is_whitespace) {
        return None;
    }
    Some(name.to_string())
}

impl RuntimeSwitches {
    pub(crate) fn append_switch<F>(&mut self, raw_name: &str, log: F)
    where
        F: Fn(&str),
    {
        let Some(name) = normalize_switch_name(raw_name) else {
            log(&format!("ignoring invalid runtime switch '{raw_name}'"));
            return;
        };
        if self.sealed {
            log(&format!(
                "runtime switch '{name}' ignored: switches are sealed once a window exists"
            ));
            return;
        }
        if self.has_switch(&name) {
            return;
        }
        self.switches.push(name);
    }

    pub(crate) fn has_switch(&self, name: &str) -> bool {
        normalize_switch_name(name)
            .map(|name| self.switches.iter().any(|existing| *existing == name))
            .unwrap_or(false)
    }

    pub(crate) fn seal(&mut self) {
        self.sealed = true;
    }

    pub(crate) fn is_sealed(&self) -> bool {
        self.sealed
    }

    pub(crate) fn names(&self) -> &[String] {
        &self.switches
    }

    // Overriding the browser args drops Tauri's WebView2 defaults.
    pub(crate) fn to_browser_args(&self) -> String {
        let mut args = vec![WEBVIEW2_DEFAULT_BROWSER_ARGS.to_string()];
        args.extend(self.switches.iter().map(|name| format!("--{name}")));
        args.join(" ")
    }
}

pub(crate) fn host_supports_runtime_switches() -> bool {
    cfg!(target_os = "windows")
}

pub(crate) fn configure_runtime_flags<F>(
    switches: &mut RuntimeSwitches,
    config: &LauncherConfig,
    log: F,
) where
    F: Fn(&str),
{
    if switches.is_sealed() {
        log("runtime switches are already sealed; configuration has no effect");
        return;
    }
    if config.enable_unsafe_webgpu {
        switches.append_switch(ENABLE_UNSAFE_WEBGPU_SWITCH, &log);
    } else {
        log("unsafe WebGPU switch disabled by configuration");
    }
    for extra in &config.extra_switches {
        switches.append_switch(extra, &log);
    }

    if host_supports_runtime_switches() {
        log(&format!(
            "runtime switches configured: {}",
            switches.to_browser_args()
        ));
    } else {
        log(&format!(
            "runtime switches recorded but unsupported by this web engine: [{}]",
            switches.names().join(", ")
        ));
    }
}
