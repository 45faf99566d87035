use std::env;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

pub const SOUNDS_DIR_NAME: &str = "sounds";

/// Sibling `sounds` directory of the given executable.
pub fn sounds_dir_for(exe_path: &Path) -> Result<PathBuf> {
    exe_path
        .parent()
        .filter(|parent| !parent.as_os_str().is_empty())
        .map(|parent| parent.join(SOUNDS_DIR_NAME))
        .ok_or_else(|| Error::NoParentDir(exe_path.to_path_buf()))
}

pub fn default_sounds_dir() -> Result<PathBuf> {
    let exe = env::current_exe().map_err(Error::CurrentExe)?;
    // Resolve symlinks so an installed link points at the real install dir.
    let exe = exe.canonicalize().unwrap_or(exe);
    sounds_dir_for(&exe)
}

pub fn ensure_dir(path: &Path) -> Result<&Path> {
    if path.is_dir() {
        Ok(path)
    } else {
        Err(Error::MissingSoundsDir(path.to_path_buf()))
    }
}
