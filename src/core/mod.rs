pub mod converter;
pub mod defaults;
pub mod error;
pub mod prompt;
pub mod rename;

pub use converter::NameConverter;
pub use defaults::{ConverterConfig, Substitution};
pub use error::{Error, ErrorCode, Result};
pub use prompt::{PromptEngine, YesNoPrompt};
pub use rename::{RenameOutcome, RenameSummary, Renamer, SkipReason};
