use std::path::{Path, PathBuf};

use rfd::FileDialog;

use crate::config::{Config, Filter};

/// Everything the native dialog is configured with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DialogRequest {
    pub title: String,
    pub directory: PathBuf,
    pub filters: Vec<Filter>,
}

impl DialogRequest {
    pub fn from_config(cfg: &Config, directory: &Path) -> Self {
        Self {
            title: cfg.title.clone(),
            directory: directory.to_path_buf(),
            filters: cfg.filters.clone(),
        }
    }
}

/// Blocks until the dialog is dismissed. `None` means the user cancelled.
pub fn pick_sound_file(request: &DialogRequest) -> Option<PathBuf> {
    let mut dialog = FileDialog::new()
        .set_title(request.title.as_str())
        .set_directory(&request.directory);
    for filter in &request.filters {
        dialog = dialog.add_filter(filter.name.as_str(), filter.extensions.as_slice());
    }

    log::debug!("Open rfd::FileDialog in {}", request.directory.display());
    let picked = dialog.pick_file();
    log::debug!("rfd::FileDialog closed");
    picked
}
