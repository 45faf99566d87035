use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("cannot locate the running executable: {0}")]
    CurrentExe(#[source] io::Error),

    #[error("executable path {} has no parent directory", .0.display())]
    NoParentDir(PathBuf),

    #[error("sounds directory {} does not exist", .0.display())]
    MissingSoundsDir(PathBuf),

    #[error("unexpected argument: {0}")]
    UnexpectedArgument(String),
}

pub type Result<T> = std::result::Result<T, Error>;
