//! Project directory creation.
//!
//! Writes [`templates::main_source`] and [`templates::makefile`] into a new
//! directory named after the project. An existing directory is only replaced
//! when the caller's decision says so.

use std::fs;
use std::path::{Path, PathBuf};

use crate::templates;

/// What to do when the project directory already exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExistingAction {
    Override,
    Cancel,
}

impl ExistingAction {
    /// `o`/`O` overrides; anything else, including an empty answer, cancels.
    pub fn from_answer(answer: &str) -> Self {
        if answer.trim().eq_ignore_ascii_case("o") {
            ExistingAction::Override
        } else {
            ExistingAction::Cancel
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScaffoldOutcome {
    Created(PathBuf),
    Cancelled,
}

#[derive(Debug, thiserror::Error)]
pub enum ScaffoldError {
    #[error("invalid project name '{0}'")]
    InvalidName(String),
    #[error("failed to remove existing project {}: {source}", .path.display())]
    Remove {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub fn validate_name(name: &str) -> Result<(), ScaffoldError> {
    let bad = name.trim().is_empty()
        || name == "."
        || name == ".."
        || name.contains(['/', '\\']);
    if bad {
        Err(ScaffoldError::InvalidName(name.to_string()))
    } else {
        Ok(())
    }
}

/// Create `<root>/<name>/` with a source file and a Makefile.
///
/// `on_existing` is only called when the directory is already there.
pub fn create_project(
    root: &Path,
    name: &str,
    on_existing: impl FnOnce(&Path) -> ExistingAction,
) -> Result<ScaffoldOutcome, ScaffoldError> {
    validate_name(name)?;
    let dir = root.join(name);

    if dir.exists() {
        match on_existing(&dir) {
            ExistingAction::Cancel => {
                log::info!("keeping existing {}", dir.display());
                return Ok(ScaffoldOutcome::Cancelled);
            }
            ExistingAction::Override => {
                log::info!("removing existing {}", dir.display());
                remove_existing(&dir)?;
            }
        }
    }

    fs::create_dir_all(&dir).map_err(|source| ScaffoldError::Write {
        path: dir.clone(),
        source,
    })?;
    write_file(&dir.join(templates::SOURCE_FILE), &templates::main_source())?;
    write_file(&dir.join(templates::BUILD_FILE), &templates::makefile(name))?;

    Ok(ScaffoldOutcome::Created(dir))
}

fn remove_existing(path: &Path) -> Result<(), ScaffoldError> {
    let result = if path.is_dir() {
        fs::remove_dir_all(path)
    } else {
        fs::remove_file(path)
    };
    result.map_err(|source| ScaffoldError::Remove {
        path: path.to_path_buf(),
        source,
    })
}

fn write_file(path: &Path, contents: &str) -> Result<(), ScaffoldError> {
    log::debug!("writing {}", path.display());
    fs::write(path, contents).map_err(|source| ScaffoldError::Write {
        path: path.to_path_buf(),
        source,
    })
}
