//! Environment variable utilities for quadcheck
//!
//! This module resolves the QUADCHECK_DIR variable, which points to the
//! project root, and the output directories derived from it.

use crate::constants::{DATA_GENERATED, ENV_PROJECT_DIR, PLOTS_SUBDIR};
use std::env;
use std::path::{Path, PathBuf};

/// Error type for environment variable issues
#[derive(Debug, thiserror::Error)]
pub enum EnvError {
    #[error(
        "QUADCHECK_DIR environment variable is not set. Please set it to the project root directory (e.g., export QUADCHECK_DIR=/path/to/quadcheck)"
    )]
    ProjectDirNotSet,

    #[error("QUADCHECK_DIR points to a non-existent directory: {0}")]
    ProjectDirNotFound(PathBuf),

    #[error("Failed to create directory {path}: {source}")]
    DirectoryCreationFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Get the QUADCHECK_DIR environment variable and validate it exists
///
/// # Errors
///
/// Returns an error if QUADCHECK_DIR is unset or names a missing directory.
///
/// # Example
///
/// ```no_run
/// use quadcheck_env::env_utils::get_quadcheck_dir;
///
/// let root = get_quadcheck_dir()?;
/// println!("quadcheck directory: {}", root.display());
/// # Ok::<(), quadcheck_env::env_utils::EnvError>(())
/// ```
pub fn get_quadcheck_dir() -> Result<PathBuf, EnvError> {
    let dir = env::var(ENV_PROJECT_DIR).map_err(|_| EnvError::ProjectDirNotSet)?;

    let path = PathBuf::from(dir);

    if !path.exists() {
        return Err(EnvError::ProjectDirNotFound(path));
    }

    Ok(path)
}

fn ensure_dir(path: PathBuf) -> Result<PathBuf, EnvError> {
    if !path.exists() {
        std::fs::create_dir_all(&path).map_err(|source| EnvError::DirectoryCreationFailed {
            path: path.clone(),
            source,
        })?;
        log::debug!("created directory {}", path.display());
    }
    Ok(path)
}

/// Data directory below an explicit root, created if necessary
pub fn data_generated_dir_in(root: &Path) -> Result<PathBuf, EnvError> {
    ensure_dir(root.join(DATA_GENERATED))
}

/// Get the path to the data_generated directory, creating it if necessary
///
/// ```no_run
/// use quadcheck_env::env_utils::get_data_generated_dir;
///
/// let data_dir = get_data_generated_dir()?;
/// println!("Data directory: {}", data_dir.display());
/// # Ok::<(), quadcheck_env::env_utils::EnvError>(())
/// ```
pub fn get_data_generated_dir() -> Result<PathBuf, EnvError> {
    data_generated_dir_in(&get_quadcheck_dir()?)
}

/// Get the directory HTML plots are written to (data_generated/plot_functions)
pub fn get_plots_dir() -> Result<PathBuf, EnvError> {
    ensure_dir(get_data_generated_dir()?.join(PLOTS_SUBDIR))
}

/// Check that QUADCHECK_DIR is usable and log where artefacts will go
///
/// ```no_run
/// use quadcheck_env::env_utils::check_quadcheck_env;
///
/// if let Err(e) = check_quadcheck_env() {
///     eprintln!("Environment setup error: {}", e);
///     std::process::exit(1);
/// }
/// ```
pub fn check_quadcheck_env() -> Result<(), EnvError> {
    let root = get_quadcheck_dir()?;
    let data_generated = get_data_generated_dir()?;

    log::info!("QUADCHECK_DIR: {}", root.display());
    log::info!("Data directory: {}", data_generated.display());

    Ok(())
}
