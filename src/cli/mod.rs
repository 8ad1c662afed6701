//! Numbered menu over the default record document.

pub mod actions;
pub mod io;
pub mod menu;
pub mod output;

use thiserror::Error;
use tracing::warn;

use crate::{
    config::{Config, ConfigManager},
    errors::BudgetError,
    storage::{JsonDocumentStore, RecordStorage},
};

use self::io::{DialoguerPrompter, Prompter, ScriptPrompter};
use self::menu::MenuChoice;

/// Set to any value to read menu answers line by line from stdin.
pub const SCRIPT_ENV: &str = "SMARTBUDGET_CLI_SCRIPT";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CliMode {
    Interactive,
    Script,
}

impl CliMode {
    pub fn from_env() -> Self {
        if std::env::var_os(SCRIPT_ENV).is_some() {
            CliMode::Script
        } else {
            CliMode::Interactive
        }
    }
}

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Core(#[from] BudgetError),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Prompt error: {0}")]
    Prompt(String),
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    #[error("Input closed.")]
    InputClosed,
}

impl From<dialoguer::Error> for CliError {
    fn from(err: dialoguer::Error) -> Self {
        CliError::Prompt(err.to_string())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum LoopControl {
    Continue,
    Exit,
}

pub fn run_cli() -> Result<(), CliError> {
    let mode = CliMode::from_env();
    let config = match ConfigManager::new().load() {
        Ok(config) => config,
        Err(err) => {
            warn!(error = %err, "falling back to default configuration");
            output::warning(format!("{err}. Using default settings."));
            Config::default()
        }
    };
    let store = JsonDocumentStore::from_config(&config);

    match mode {
        CliMode::Interactive => run_menu(&store, &mut DialoguerPrompter::new()),
        CliMode::Script => {
            colored::control::set_override(false);
            let stdin = std::io::stdin();
            let mut prompter = ScriptPrompter::new(stdin.lock());
            run_menu(&store, &mut prompter)
        }
    }
}

/// Runs the menu until the user exits or the input ends. Core errors and bad
/// input are reported and the loop continues.
pub fn run_menu(storage: &dyn RecordStorage, prompter: &mut dyn Prompter) -> Result<(), CliError> {
    loop {
        menu::print_menu();
        let Some(answer) = prompter.text("Choose an option")? else {
            output::info("Goodbye.");
            return Ok(());
        };
        let outcome =
            MenuChoice::parse(&answer).and_then(|choice| actions::dispatch(choice, storage, prompter));
        match outcome {
            Ok(LoopControl::Continue) => {}
            Ok(LoopControl::Exit) => return Ok(()),
            Err(CliError::InputClosed) => {
                output::info("Goodbye.");
                return Ok(());
            }
            Err(err @ (CliError::Core(_) | CliError::InvalidInput(_))) => output::error(err),
            Err(err) => return Err(err),
        }
    }
}
