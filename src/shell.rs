//! Interactive front-end.
//! Holds the editable fields and the activity log, draws the screen and
//! dispatches the user's actions to the project and reveal modules.

use log::debug;
use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

use crate::constants::APP_TITLE;
use crate::error::{Error, Result};
use crate::preview::render;
use crate::materializer::{DirCreator, FileSystem};
use crate::project::{create_project_with, expand_home, CreateRequest};
use crate::prompt::{Notice, Prompter};
use crate::reveal::Revealer;
use crate::structure::PROJECT_STRUCTURE;

/// Actions offered on every screen, in menu order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Browse,
    EditBaseDir,
    EditProjectName,
    Create,
    Open,
    ClearLog,
    Quit,
}

impl Action {
    pub const ALL: [Action; 7] = [
        Action::Browse,
        Action::EditBaseDir,
        Action::EditProjectName,
        Action::Create,
        Action::Open,
        Action::ClearLog,
        Action::Quit,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Action::Browse => "Browse...",
            Action::EditBaseDir => "Edit base folder",
            Action::EditProjectName => "Edit project name",
            Action::Create => "Create Folder Structure",
            Action::Open => "Open Folder",
            Action::ClearLog => "Clear log",
            Action::Quit => "Quit",
        }
    }
}

/// Append-only log pane.
#[derive(Debug, Default)]
pub struct ActivityLog {
    lines: Vec<String>,
}

impl ActivityLog {
    pub fn append<S: Into<String>>(&mut self, line: S) {
        self.lines.push(line.into());
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }
}

/// Current field values of the shell.
#[derive(Debug)]
pub struct Session {
    pub base_dir: String,
    pub project_name: String,
    pub log: ActivityLog,
}

impl Session {
    pub fn new<S: Into<String>, N: Into<String>>(base_dir: S, project_name: N) -> Self {
        Self { base_dir: base_dir.into(), project_name: project_name.into(), log: ActivityLog::default() }
    }

    /// Snapshot of the fields for a single action.
    pub fn request(&self) -> CreateRequest {
        CreateRequest::new(&self.base_dir, &self.project_name)
    }
}

/// Runs the create action for `request` and records the outcome.
///
/// Success is logged to the pane; failures only produce a notice.
pub fn create_with_notice(
    creator: &dyn DirCreator,
    request: &CreateRequest,
    log: &mut ActivityLog,
) -> Notice {
    match create_project_with(creator, request) {
        Ok(project_path) => {
            log.append(format!("Folder structure created at: {}", project_path.display()));
            log.append("Done.");
            Notice::Success(format!("Folder structure created at:\n{}", project_path.display()))
        }
        Err(Error::ValidationError(msg)) => Notice::Error(msg),
        Err(Error::PermissionDenied { .. }) => {
            Notice::Error("Permission denied. Cannot create folder structure.".to_string())
        }
        Err(e) => Notice::Error(format!("An error occurred: {}", e)),
    }
}

const USE_FOLDER: &str = "[Use this folder]";
const PARENT_FOLDER: &str = "..";
const CANCEL: &str = "[Cancel]";

fn subdirectories(dir: &Path) -> Vec<OsString> {
    let mut names: Vec<OsString> = match fs::read_dir(dir) {
        Ok(entries) => entries
            .filter_map(|entry| entry.ok())
            .filter(|entry| entry.path().is_dir())
            .map(|entry| entry.file_name())
            .collect(),
        Err(e) => {
            debug!("Cannot list {}: {}", dir.display(), e);
            Vec::new()
        }
    };
    names.sort();
    names
}

/// Lets the user walk the filesystem from `start` and pick a folder.
///
/// # Returns
/// * `Ok(None)` if the user cancelled
pub fn browse(prompt: &dyn Prompter, start: &Path) -> Result<Option<PathBuf>> {
    let mut current = if start.is_dir() {
        start.to_path_buf()
    } else {
        std::env::current_dir()?
    };

    loop {
        let subdirs = subdirectories(&current);
        let mut items = vec![USE_FOLDER.to_string(), PARENT_FOLDER.to_string()];
        items.extend(subdirs.iter().map(|name| name.to_string_lossy().into_owned()));
        items.push(CANCEL.to_string());

        let selection = prompt.select(&format!("Select base folder ({})", current.display()), &items, 0)?;
        match selection {
            0 => return Ok(Some(current)),
            1 => {
                if let Some(parent) = current.parent() {
                    current = parent.to_path_buf();
                }
            }
            i if i == items.len() - 1 => return Ok(None),
            i => current.push(&subdirs[i - 2]),
        }
    }
}

/// The interactive loop.
pub struct Shell<'a> {
    prompt: &'a dyn Prompter,
    revealer: &'a dyn Revealer,
    session: Session,
    preview: String,
}

impl<'a> Shell<'a> {
    pub fn new(prompt: &'a dyn Prompter, revealer: &'a dyn Revealer, session: Session) -> Self {
        Self { prompt, revealer, session, preview: render(PROJECT_STRUCTURE) }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Draws the current state of all panes.
    pub fn screen(&self) -> String {
        let mut text = format!(
            "{}\n\nBase folder:  {}\nProject name: {}\n\nPreview:\n{}\n\nLog:\n",
            APP_TITLE, self.session.base_dir, self.session.project_name, self.preview
        );
        for line in self.session.log.lines() {
            text.push_str(line);
            text.push('\n');
        }
        text
    }

    /// Shows the screen and handles actions until the user quits.
    pub fn run(&mut self) -> Result<()> {
        let labels: Vec<String> = Action::ALL.iter().map(|a| a.label().to_string()).collect();
        let create_index = Action::ALL.iter().position(|a| *a == Action::Create).unwrap_or(0);
        loop {
            self.prompt.display(&self.screen());
            let selection = self.prompt.select("Action", &labels, create_index)?;
            let action = Action::ALL.get(selection).copied().unwrap_or(Action::Quit);
            if !self.dispatch(action)? {
                return Ok(());
            }
        }
    }

    /// Handles one action. Returns `false` once the shell should stop.
    pub fn dispatch(&mut self, action: Action) -> Result<bool> {
        debug!("Action: {:?}", action);
        match action {
            Action::Browse => {
                let start = expand_home(&self.session.base_dir);
                if let Some(chosen) = browse(self.prompt, &start)? {
                    self.session.base_dir = chosen.display().to_string();
                }
            }
            Action::EditBaseDir => {
                self.session.base_dir = self.prompt.input("Base folder", &self.session.base_dir)?;
            }
            Action::EditProjectName => {
                self.session.project_name =
                    self.prompt.input("Project name", &self.session.project_name)?;
            }
            Action::Create => {
                let request = self.session.request();
                let notice = create_with_notice(&FileSystem, &request, &mut self.session.log);
                self.prompt.notify(&notice)?;
            }
            Action::Open => {
                self.revealer.reveal(&self.session.request().reveal_target());
            }
            Action::ClearLog => self.session.log.clear(),
            Action::Quit => return Ok(false),
        }
        Ok(true)
    }
}
