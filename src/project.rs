//! Project requests: name validation and creation of the project skeleton.

use log::debug;
use std::path::{Path, PathBuf};

use crate::constants::{DEFAULT_PROJECT_NAME, RESERVED_CHARS};
use crate::error::{Error, Result};
use crate::materializer::{materialize_with, DirCreator, FileSystem};
use crate::structure::PROJECT_STRUCTURE;

/// Checks a project name and returns it without surrounding whitespace.
///
/// # Errors
/// * `Error::ValidationError` if the name is empty, `.` or `..`, or contains
///   reserved characters
pub fn validate_project_name(name: &str) -> Result<&str> {
    let name = name.trim();
    if name.is_empty() {
        return Err(Error::ValidationError("Project name cannot be empty.".to_string()));
    }
    // Would resolve to the base folder or its parent instead of a new folder.
    if name == "." || name == ".." {
        return Err(Error::ValidationError(format!("Project name cannot be '{}'.", name)));
    }
    if name.contains(RESERVED_CHARS) {
        let reserved: String = RESERVED_CHARS.iter().collect();
        return Err(Error::ValidationError(format!(
            "Project name contains invalid characters: {}",
            reserved
        )));
    }
    Ok(name)
}

/// Expands a leading `~` to the user's home directory.
pub fn expand_home<P: AsRef<Path>>(path: P) -> PathBuf {
    let path = path.as_ref();
    match (path.strip_prefix("~"), dirs::home_dir()) {
        (Ok(rest), Some(home)) => home.join(rest),
        _ => path.to_path_buf(),
    }
}

/// Snapshot of the shell fields taken when an action fires.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateRequest {
    pub base_dir: PathBuf,
    pub project_name: String,
}

impl CreateRequest {
    pub fn new<P: Into<PathBuf>, S: Into<String>>(base_dir: P, project_name: S) -> Self {
        Self { base_dir: base_dir.into(), project_name: project_name.into() }
    }

    /// Directory the project will be created in.
    pub fn target(&self) -> Result<PathBuf> {
        let name = validate_project_name(&self.project_name)?;
        Ok(expand_home(&self.base_dir).join(name))
    }

    /// Directory opened by "Open Folder". An empty name falls back to
    /// [`DEFAULT_PROJECT_NAME`] and no validation is applied.
    pub fn reveal_target(&self) -> PathBuf {
        let name = self.project_name.trim();
        let name = if name.is_empty() { DEFAULT_PROJECT_NAME } else { name };
        expand_home(&self.base_dir).join(name)
    }
}

/// Creates the project directory and the full skeleton inside it.
///
/// Nothing is touched on disk when the name is rejected.
///
/// # Returns
/// * `Result<PathBuf>` - Path of the project directory
pub fn create_project(request: &CreateRequest) -> Result<PathBuf> {
    create_project_with(&FileSystem, request)
}

/// Same as [`create_project`] with an explicit [`DirCreator`].
pub fn create_project_with(creator: &dyn DirCreator, request: &CreateRequest) -> Result<PathBuf> {
    let project_path = request.target()?;
    debug!("Creating project at {}", project_path.display());

    creator
        .create_dir_all(&project_path)
        .map_err(|e| Error::from_create_dir(&project_path, e))?;
    materialize_with(creator, &project_path, PROJECT_STRUCTURE)?;

    Ok(project_path)
}
