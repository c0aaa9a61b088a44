use std::{
    env, fs,
    path::{Path, PathBuf},
};

use crate::{LOG_DIR_NAME, LOG_FILE_BASENAME};

#[cfg(unix)]
const LOG_DIR_MODE: u32 = 0o755;

/// `$HOME` takes precedence so the log lands where the user's shell
/// expects it; `home::home_dir` covers platforms without the variable.
pub(crate) fn resolve_home_dir() -> Option<PathBuf> {
    env::var_os("HOME")
        .filter(|value| !value.is_empty())
        .map(PathBuf::from)
        .or_else(home::home_dir)
}

pub(crate) fn log_dir(home_dir: &Path) -> PathBuf {
    home_dir.join(LOG_DIR_NAME)
}

pub(crate) fn log_file_path(home_dir: &Path) -> PathBuf {
    log_dir(home_dir).join(format!("{LOG_FILE_BASENAME}.log"))
}

/// Guarantees the log file and its parent directory exist. Creates the
/// directory with mode 0o755 and the file empty when absent; an existing
/// file is left untouched. Safe to call repeatedly.
pub(crate) fn ensure_log_file(path: &Path) -> Result<(), String> {
    let dir = path
        .parent()
        .ok_or_else(|| format!("log file path {} has no parent directory", path.display()))?;

    if !dir.exists() {
        let mut builder = fs::DirBuilder::new();
        builder.recursive(true);
        #[cfg(unix)]
        {
            use std::os::unix::fs::DirBuilderExt;
            builder.mode(LOG_DIR_MODE);
        }
        builder
            .create(dir)
            .map_err(|error| format!("failed to create log directory {}: {error}", dir.display()))?;
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            fs::set_permissions(dir, fs::Permissions::from_mode(LOG_DIR_MODE)).map_err(|error| {
                format!(
                    "failed to set permissions on log directory {}: {error}",
                    dir.display()
                )
            })?;
        }
    }

    if !path.exists() {
        fs::OpenOptions::new()
            .create_new(true)
            .append(true)
            .open(path)
            .map_err(|error| format!("failed to create log file {}: {error}", path.display()))?;
    }

    Ok(())
}

/// Debug builds log everything the shell emits; production builds only
/// keep errors.
pub(crate) fn log_level() -> log::LevelFilter {
    if cfg!(debug_assertions) {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Error
    }
}
