//! Opening a directory in the OS file manager.

use log::debug;
use std::path::Path;

/// Best-effort "show this directory" capability.
///
/// Implementations never report failure to the caller.
pub trait Revealer {
    fn reveal(&self, path: &Path);
}

/// Opens the directory with the host's default handler.
///
/// The launcher runs detached from the terminal with its output discarded.
pub struct SystemRevealer;

impl Revealer for SystemRevealer {
    fn reveal(&self, path: &Path) {
        debug!("Revealing '{}'", path.display());
        if let Err(e) = open::that_detached(path) {
            debug!("Could not open '{}': {}", path.display(), e);
        }
    }
}

/// Does nothing. Used where no file manager is wanted.
pub struct NoopRevealer;

impl Revealer for NoopRevealer {
    fn reveal(&self, path: &Path) {
        debug!("Skipping reveal of '{}'", path.display());
    }
}

/// Returns the revealer used by the interactive shell.
pub fn platform_revealer() -> Box<dyn Revealer> {
    Box::new(SystemRevealer)
}
