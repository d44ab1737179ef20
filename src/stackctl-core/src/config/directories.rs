use crate::error::config::ConfigError;
use crate::error::config::ConfigError::DetermineStacksRootFailed;
use crate::error::foundation::FoundationError;
use crate::error::foundation::FoundationError::NoHomeInEnvironment;

use directories_next::ProjectDirs;
use std::path::PathBuf;

pub fn project_dirs() -> Result<&'static ProjectDirs, FoundationError> {
    lazy_static::lazy_static! {
        static ref DIRS: Option<ProjectDirs> = ProjectDirs::from("org", "stackctl", "stackctl");
    }
    DIRS.as_ref().ok_or(NoHomeInEnvironment())
}

/// The well-known directory holding one subdirectory per stack.
pub fn get_stacks_root() -> Result<PathBuf, ConfigError> {
    let project_dirs = project_dirs().map_err(DetermineStacksRootFailed)?;
    Ok(project_dirs.data_local_dir().join("stacks"))
}
