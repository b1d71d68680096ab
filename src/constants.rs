//! Common constants used throughout clean-folder.

/// Project name used when the name field is left at its default.
pub const DEFAULT_PROJECT_NAME: &str = "Clean Folder";

/// Characters a project name may not contain.
pub const RESERVED_CHARS: [char; 9] = ['\\', '/', ':', '*', '?', '"', '<', '>', '|'];

/// Title shown at the top of the interactive shell.
pub const APP_TITLE: &str = "Clean folder Generator";
