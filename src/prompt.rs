//! User input and interaction handling.

use dialoguer::{Input, Select};

use crate::error::Result;

/// Blocking message shown after an action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    Success(String),
    Error(String),
}

impl Notice {
    pub fn title(&self) -> &'static str {
        match self {
            Notice::Success(_) => "Success",
            Notice::Error(_) => "Error",
        }
    }

    pub fn message(&self) -> &str {
        match self {
            Notice::Success(msg) | Notice::Error(msg) => msg,
        }
    }
}

/// Everything the shell needs from a terminal.
pub trait Prompter {
    /// Shows a list of items and returns the chosen index.
    fn select(&self, prompt: &str, items: &[String], default: usize) -> Result<usize>;

    /// Asks for a line of text, pre-filled with `initial`.
    fn input(&self, prompt: &str, initial: &str) -> Result<String>;

    /// Shows a notice and waits for acknowledgement.
    fn notify(&self, notice: &Notice) -> Result<()>;

    /// Writes a full screen of text.
    fn display(&self, text: &str);
}

/// [`Prompter`] backed by `dialoguer`.
pub struct DialoguerPrompter;

impl DialoguerPrompter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for DialoguerPrompter {
    fn default() -> Self {
        Self::new()
    }
}

impl Prompter for DialoguerPrompter {
    fn select(&self, prompt: &str, items: &[String], default: usize) -> Result<usize> {
        let selection = Select::new()
            .with_prompt(prompt)
            .default(default)
            .items(items)
            .interact()?;
        Ok(selection)
    }

    fn input(&self, prompt: &str, initial: &str) -> Result<String> {
        let value = Input::<String>::new()
            .with_prompt(prompt)
            .with_initial_text(initial)
            .allow_empty(true)
            .interact_text()?;
        Ok(value)
    }

    fn notify(&self, notice: &Notice) -> Result<()> {
        match notice {
            Notice::Success(_) => println!("\n[{}]\n{}\n", notice.title(), notice.message()),
            Notice::Error(_) => eprintln!("\n[{}]\n{}\n", notice.title(), notice.message()),
        }
        Select::new().with_prompt(notice.title()).default(0).item("OK").interact()?;
        Ok(())
    }

    fn display(&self, text: &str) {
        println!("{}", text);
    }
}
