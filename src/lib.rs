//! clean-folder creates a fixed folder skeleton for media projects.
//! It provides the static structure, the routine that creates it on disk,
//! a tree preview and a small interactive front-end.

/// Command-line interface module
pub mod cli;

/// Common constants
pub mod constants;

/// Error types and handling
pub mod error;

/// Logger setup
pub mod logger;

/// Creation of a folder tree on disk
pub mod materializer;

/// ASCII tree rendering of a folder structure
pub mod preview;

/// Project name validation and project creation
pub mod project;

/// User input and interaction handling
pub mod prompt;

/// Opening folders in the OS file manager
pub mod reveal;

/// Interactive front-end
pub mod shell;

/// The static project skeleton
pub mod structure;
