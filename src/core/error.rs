use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    ConfigInvalidValue,

    ValidationMissingArgument,
    ValidationInvalidArgument,

    FileRenameFailed,

    PromptInputClosed,

    InternalIoError,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::ConfigInvalidValue => "config.invalid_value",

            ErrorCode::ValidationMissingArgument => "validation.missing_argument",
            ErrorCode::ValidationInvalidArgument => "validation.invalid_argument",

            ErrorCode::FileRenameFailed => "file.rename_failed",

            ErrorCode::PromptInputClosed => "prompt.input_closed",

            ErrorCode::InternalIoError => "internal.io_error",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Hint {
    pub message: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigInvalidValueDetails {
    pub key: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    pub problem: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MissingArgumentDetails {
    pub args: Vec<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InvalidArgumentDetails {
    pub field: String,
    pub problem: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RenameFailedDetails {
    pub from: String,
    pub to: String,
    pub error: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InternalIoErrorDetails {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,
}

#[derive(Debug, Clone)]
pub struct Error {
    pub code: ErrorCode,
    pub message: String,
    pub details: Value,
    pub hints: Vec<Hint>,
}

pub type Result<T> = std::result::Result<T, Error>;

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for Error {}

fn to_details<T: Serialize>(details: T) -> Value {
    serde_json::to_value(details).unwrap_or_else(|_| Value::Object(serde_json::Map::new()))
}

impl Error {
    pub fn new(code: ErrorCode, message: impl Into<String>, details: Value) -> Self {
        Self {
            code,
            message: message.into(),
            details,
            hints: Vec::new(),
        }
    }

    pub fn with_hint(mut self, message: impl Into<String>) -> Self {
        self.hints.push(Hint {
            message: message.into(),
        });
        self
    }

    pub fn validation_missing_argument(args: Vec<String>) -> Self {
        Self::new(
            ErrorCode::ValidationMissingArgument,
            "wrong number of arguments",
            to_details(MissingArgumentDetails { args }),
        )
        .with_hint("Use `deblank --help' for valid options.")
    }

    pub fn validation_invalid_argument(
        field: impl Into<String>,
        problem: impl Into<String>,
    ) -> Self {
        let problem = problem.into();
        let details = to_details(InvalidArgumentDetails {
            field: field.into(),
            problem: problem.clone(),
        });

        Self::new(ErrorCode::ValidationInvalidArgument, problem, details)
            .with_hint("Use `deblank --help' for valid options.")
    }

    pub fn config_invalid_value(
        key: impl Into<String>,
        value: Option<String>,
        problem: impl Into<String>,
    ) -> Self {
        let problem = problem.into();
        let details = to_details(ConfigInvalidValueDetails {
            key: key.into(),
            value,
            problem: problem.clone(),
        });

        Self::new(ErrorCode::ConfigInvalidValue, problem, details)
    }

    pub fn rename_failed(
        from: impl Into<String>,
        to: impl Into<String>,
        error: impl Into<String>,
    ) -> Self {
        let error = error.into();
        let details = to_details(RenameFailedDetails {
            from: from.into(),
            to: to.into(),
            error: error.clone(),
        });

        Self::new(ErrorCode::FileRenameFailed, error, details)
    }

    pub fn prompt_input_closed() -> Self {
        Self::new(
            ErrorCode::PromptInputClosed,
            "No answer received, input is closed",
            Value::Object(serde_json::Map::new()),
        )
    }

    pub fn internal_io(error: impl Into<String>, context: Option<String>) -> Self {
        let error = error.into();
        let details = to_details(InternalIoErrorDetails {
            error: error.clone(),
            context,
        });

        Self::new(ErrorCode::InternalIoError, error, details)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rename_failed_carries_paths_in_details() {
        let err = Error::rename_failed("a b.txt", "a_b.txt", "Permission denied");

        assert_eq!(err.code.as_str(), "file.rename_failed");
        assert_eq!(err.to_string(), "Permission denied");
        assert_eq!(err.details["from"], "a b.txt");
        assert_eq!(err.details["to"], "a_b.txt");
    }

    #[test]
    fn missing_argument_points_at_help() {
        let err = Error::validation_missing_argument(vec!["FILE".to_string()]);

        assert_eq!(err.message, "wrong number of arguments");
        assert_eq!(err.hints.len(), 1);
        assert!(err.hints[0].message.contains("--help"));
    }

    #[test]
    fn internal_io_omits_missing_context() {
        let err = Error::internal_io("broken pipe", None);

        assert_eq!(err.details["error"], "broken pipe");
        assert!(err.details.get("context").is_none());
    }
}
