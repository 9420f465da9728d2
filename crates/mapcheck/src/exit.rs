use std::fmt;
use std::io;

use mapcheck_rules::{LoadError, ValidationError};

pub const SUCCESS: i32 = 0;
/// The subject failed validation.
pub const FAILURE: i32 = 1;
pub const PERMISSION_DENIED: i32 = 50;
/// Input documents or constraint sets are malformed.
pub const DATA_INVALID: i32 = 60;
pub const USAGE: i32 = 64;
pub const NOT_FOUND: i32 = 66;
pub const INTERNAL: i32 = 125;

pub type CliResult<T> = Result<T, CliError>;

#[derive(Debug)]
pub struct CliError {
    pub code: i32,
    pub message: String,
}

impl CliError {
    pub fn new(code: i32, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

pub fn io_error(context: &str, err: io::Error) -> CliError {
    let code = match err.kind() {
        io::ErrorKind::PermissionDenied => PERMISSION_DENIED,
        io::ErrorKind::NotFound => NOT_FOUND,
        _ => INTERNAL,
    };
    CliError::new(code, format!("{context}: {err}"))
}

pub fn load_error(context: &str, err: LoadError) -> CliError {
    CliError::new(DATA_INVALID, format!("{context}: {err}"))
}

/// Map a configuration error raised by command-line flags.
pub fn flag_error(context: &str, err: ValidationError) -> CliError {
    CliError::new(USAGE, format!("{context}: {err}"))
}

/// Map a validation error that is not about the subject data.
pub fn constraint_error(err: ValidationError) -> CliError {
    let context = match err.key() {
        Some(key) => format!("constraint '{key}' is invalid"),
        None => "constraint set is invalid".to_string(),
    };
    CliError::new(DATA_INVALID, format!("{context}: {err}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn io_errors_map_by_kind() {
        let err = io_error("read", io::Error::new(io::ErrorKind::NotFound, "gone"));
        assert_eq!(err.code, NOT_FOUND);
        assert_eq!(err.to_string(), "read: gone");

        let err = io_error(
            "read",
            io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        );
        assert_eq!(err.code, PERMISSION_DENIED);
    }

    #[test]
    fn constraint_errors_name_the_key() {
        let err = mapcheck_rules::ConstraintSet::from_json(r#"{"a":{"type":"in_collection"}}"#)
            .map(|constraints| {
                mapcheck_rules::MapValidator::new(
                    [("a", "x")].into_iter().collect(),
                    constraints,
                )
                .validate()
            })
            .expect("constraint set should load")
            .expect_err("collection is missing");
        let cli = constraint_error(err);
        assert_eq!(cli.code, DATA_INVALID);
        assert!(cli.message.starts_with("constraint 'a' is invalid: "));
    }
}
