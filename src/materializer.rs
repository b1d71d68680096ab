//! Creates the directories of a folder tree on disk.

use log::debug;
use std::fs;
use std::io;
use std::path::Path;

use crate::error::{Error, Result};
use crate::structure::FolderNode;

/// Creates a directory and any missing parents.
///
/// Implementations must treat an existing directory as success.
pub trait DirCreator {
    fn create_dir_all(&self, path: &Path) -> io::Result<()>;
}

/// [`DirCreator`] backed by the real filesystem.
pub struct FileSystem;

impl DirCreator for FileSystem {
    fn create_dir_all(&self, path: &Path) -> io::Result<()> {
        fs::create_dir_all(path)
    }
}

/// Ensures every directory of `tree` exists under `root`.
///
/// `root` need not exist; it is created along with the first folder.
/// Directories created before a failure are left in place.
///
/// # Errors
/// * `Error::PermissionDenied` if the host refuses to create a directory
/// * `Error::InvalidPath` if a path is illegal or occupied by a file
/// * `Error::IoError` for any other filesystem failure
pub fn materialize(root: &Path, tree: &[FolderNode]) -> Result<()> {
    materialize_with(&FileSystem, root, tree)
}

/// Same as [`materialize`] with an explicit [`DirCreator`].
pub fn materialize_with(creator: &dyn DirCreator, root: &Path, tree: &[FolderNode]) -> Result<()> {
    for node in tree {
        let folder_path = root.join(node.name);
        debug!("Creating directory: {}", folder_path.display());
        creator
            .create_dir_all(&folder_path)
            .map_err(|e| Error::from_create_dir(&folder_path, e))?;

        if !node.is_leaf() {
            materialize_with(creator, &folder_path, node.children)?;
        }
    }
    Ok(())
}
