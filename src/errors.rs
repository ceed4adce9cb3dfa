use crate::api::RequestError;
use crate::app::settings::SettingsError;
use crate::runner::terminal::TerminalError;

/// Top-level error for everything outside a single demo run.
///
/// Demo failures never surface here; the runner folds them into results.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Settings(#[from] SettingsError),
    #[error(transparent)]
    Terminal(#[from] TerminalError),
    #[error(transparent)]
    Client(#[from] RequestError),
    #[error("no page matches `{0}` (try `pages`)")]
    UnknownPage(String),
    #[error("page {page} has no demo named `{name}`")]
    UnknownDemo { page: String, name: String },
    #[error("logging setup failed: {0}")]
    Logging(String),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
