//! Per-project configuration, persisted as JSON under the project's
//! `.box` state directory.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("'{0}' does not look like a boxed project (missing .box/config): {1}")]
    NotBoxed(PathBuf, #[source] std::io::Error),

    #[error("failed to parse {0}: {1}")]
    Parse(PathBuf, #[source] serde_json::Error),

    #[error("failed to create state directory {0}: {1}")]
    CreateStateDir(PathBuf, #[source] std::io::Error),

    #[error("failed to write {0}: {1}")]
    Write(PathBuf, #[source] std::io::Error),

    #[error("failed to remove state directory {0}: {1}")]
    RemoveStateDir(PathBuf, #[source] std::io::Error),
}

/// One configured remote a project's content can be pushed to.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BucketConfig {
    pub endpoint: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Config {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub buckets: Vec<BucketConfig>,
}

fn state_dir(project_dir: &Path) -> PathBuf {
    project_dir.join(box_core::walker::STATE_DIR_NAME)
}

fn config_path(project_dir: &Path) -> PathBuf {
    state_dir(project_dir).join("config")
}

/// Reads `<project_dir>/.box/config`, erroring if the project hasn't been
/// initialized.
pub fn read(project_dir: &Path) -> Result<Config, Error> {
    let path = config_path(project_dir);
    let contents = fs::read(&path).map_err(|e| Error::NotBoxed(path.clone(), e))?;
    serde_json::from_slice(&contents).map_err(|e| Error::Parse(path, e))
}

/// Writes `conf` to `<project_dir>/.box/config`, creating the state
/// directory if needed. Safe to call repeatedly: re-initializing an already
/// boxed project simply overwrites the config in place.
pub fn write(project_dir: &Path, conf: &Config) -> Result<(), Error> {
    let dir = state_dir(project_dir);
    fs::create_dir_all(&dir).map_err(|e| Error::CreateStateDir(dir.clone(), e))?;

    let path = config_path(project_dir);
    let contents = serde_json::to_vec_pretty(conf).expect("Config is always serializable");
    fs::write(&path, contents).map_err(|e| Error::Write(path, e))
}

/// Removes the `.box` state directory entirely, "un-boxing" the project.
/// A no-op (not an error) if the project was never boxed.
pub fn remove(project_dir: &Path) -> Result<(), Error> {
    let dir = state_dir(project_dir);
    match fs::remove_dir_all(&dir) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
        Err(e) => Err(Error::RemoveStateDir(dir, e)),
    }
}
