use std::collections::BTreeSet;

use crate::MAIN_WINDOW_LABEL;

#[derive(Debug, Default)]
pub(crate) struct WindowRegistry {
    open: BTreeSet<String>,
    created: usize,
}

impl WindowRegistry {
    // Tauri rejects duplicate labels.
    pub(crate) fn allocate_label(&mut self) -> String {
        self.created += 1;
        if self.created == 1 {
            MAIN_WINDOW_LABEL.to_string()
        } else {
            format!("{MAIN_WINDOW_LABEL}-{}", self.created)
        }
    }

    pub(crate) fn register(&mut self, label: &str) {
        self.open.insert(label.to_string());
    }

    pub(crate) fn forget(&mut self, label: &str) -> usize {
        self.open.remove(label);
        self.open.len()
    }

    pub(crate) fn open_count(&self) -> usize {
        self.open.len()
    }

    pub(crate) fn created_count(&self) -> usize {
        self.created
    }
}
