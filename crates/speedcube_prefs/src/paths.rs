//! Filesystem locations.

use std::path::PathBuf;

use directories::ProjectDirs;
use eyre::{OptionExt, Result};

const PREFS_FILE_NAME: &str = "speedcube-prefs";
const PREFS_FILE_EXTENSION: &str = "yaml";

lazy_static! {
    static ref PROJECT_DIRS: Option<ProjectDirs> = ProjectDirs::from("", "", "speedcube");
}

/// Returns the default location of the user preferences file.
pub fn prefs_file() -> Result<PathBuf> {
    let dirs = PROJECT_DIRS
        .as_ref()
        .ok_or_eyre("unable to get preferences directory")?;
    Ok(dirs
        .config_dir()
        .join(format!("{PREFS_FILE_NAME}.{PREFS_FILE_EXTENSION}")))
}
