use std::{
    env,
    path::{Path, PathBuf},
};

use url::Url;

use crate::DOCUMENT_FILE_NAME;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum InstallLayout {
    Development,
    Installed,
}

impl InstallLayout {
    pub(crate) const PROBE_ORDER: [InstallLayout; 2] =
        [InstallLayout::Development, InstallLayout::Installed];

    pub(crate) fn parent_depth(self) -> usize {
        match self {
            InstallLayout::Development => 2,
            InstallLayout::Installed => 3,
        }
    }

    pub(crate) fn document_path(self, launcher_dir: &Path) -> Option<PathBuf> {
        launcher_dir
            .ancestors()
            .nth(self.parent_depth())
            .map(|root| root.join(DOCUMENT_FILE_NAME))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum DocumentSource {
    Configured,
    Layout(InstallLayout),
    Resource,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ResolvedDocument {
    pub(crate) path: PathBuf,
    pub(crate) source: DocumentSource,
}

fn absolutize(path: &Path) -> Result<PathBuf, String> {
    if path.is_absolute() {
        return Ok(path.to_path_buf());
    }
    let cwd = env::current_dir()
        .map_err(|error| format!("Failed to resolve current directory: {error}"))?;
    Ok(cwd.join(path))
}

fn resolve_configured_document(configured: &Path) -> Result<PathBuf, String> {
    let mut path = absolutize(configured)?;
    if path.is_dir() {
        path = path.join(DOCUMENT_FILE_NAME);
    }
    if !path.is_file() {
        return Err(format!(
            "Configured document does not exist: {}",
            path.display()
        ));
    }
    Ok(path.canonicalize().unwrap_or(path))
}

// An injected path never falls back to the probed layouts.
pub(crate) fn resolve_document(
    configured: Option<&Path>,
    launcher_dir: &Path,
    resource_dir: Option<&Path>,
) -> Result<ResolvedDocument, String> {
    if let Some(configured) = configured {
        return resolve_configured_document(configured).map(|path| ResolvedDocument {
            path,
            source: DocumentSource::Configured,
        });
    }

    let mut candidates = Vec::new();
    for layout in InstallLayout::PROBE_ORDER {
        if let Some(path) = layout.document_path(launcher_dir) {
            candidates.push((path, DocumentSource::Layout(layout)));
        }
    }
    if let Some(resource_dir) = resource_dir {
        candidates.push((
            resource_dir.join(DOCUMENT_FILE_NAME),
            DocumentSource::Resource,
        ));
    }

    if let Some((path, source)) = candidates.iter().find(|(path, _)| path.is_file()) {
        return Ok(ResolvedDocument {
            path: path.canonicalize().unwrap_or_else(|_| path.clone()),
            source: source.clone(),
        });
    }

    let probed = candidates
        .iter()
        .map(|(path, _)| path.display().to_string())
        .collect::<Vec<_>>()
        .join(", ");
    Err(format!(
        "Cannot locate {DOCUMENT_FILE_NAME} from launcher directory {}; probed: [{}]",
        launcher_dir.display(),
        probed
    ))
}

pub(crate) fn document_url(path: &Path) -> Result<Url, String> {
    Url::from_file_path(path)
        .map_err(|_| format!("Document path is not absolute: {}", path.display()))
}
