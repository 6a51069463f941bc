//! CLI error reporting and exit code mapping.

use deblank::{Error, ErrorCode, RenameSummary};

/// `deblank: <message>` followed by any hints, on stderr.
pub fn print_error(err: &Error) {
    eprintln!("deblank: {}", err.message);
    for hint in &err.hints {
        eprintln!("{}", hint.message);
    }
}

pub fn exit_code_for_error(code: ErrorCode) -> i32 {
    match code {
        ErrorCode::ValidationMissingArgument | ErrorCode::ValidationInvalidArgument => 2,

        ErrorCode::ConfigInvalidValue
        | ErrorCode::FileRenameFailed
        | ErrorCode::PromptInputClosed
        | ErrorCode::InternalIoError => 1,
    }
}

/// Skips are not failures; any failed rename makes the whole run fail.
pub fn exit_code_for_summary(summary: &RenameSummary) -> i32 {
    if summary.failed > 0 {
        exit_code_for_error(ErrorCode::FileRenameFailed)
    } else {
        0
    }
}

pub fn exit_code_to_u8(code: i32) -> u8 {
    if code <= 0 {
        0
    } else if code >= 255 {
        255
    } else {
        code as u8
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn usage_errors_map_to_two() {
        assert_eq!(exit_code_for_error(ErrorCode::ValidationMissingArgument), 2);
        assert_eq!(exit_code_for_error(ErrorCode::ValidationInvalidArgument), 2);
        assert_eq!(exit_code_for_error(ErrorCode::ConfigInvalidValue), 1);
    }

    #[test]
    fn skipped_paths_still_succeed() {
        let summary = RenameSummary {
            renamed: 0,
            skipped: 3,
            failed: 0,
        };
        assert_eq!(exit_code_for_summary(&summary), 0);
    }

    #[test]
    fn failed_rename_fails_run() {
        let summary = RenameSummary {
            renamed: 2,
            skipped: 0,
            failed: 1,
        };
        assert_eq!(exit_code_for_summary(&summary), 1);
    }

    #[test]
    fn exit_code_is_clamped() {
        assert_eq!(exit_code_to_u8(-1), 0);
        assert_eq!(exit_code_to_u8(2), 2);
        assert_eq!(exit_code_to_u8(300), 255);
    }
}
