//! Error types for provscript.
//!
//! Uses thiserror for derive macros. Every failure is returned to the
//! caller; nothing in this crate escalates to a panic. The caller decides
//! whether to retry (persistence keeps the rendered text in memory, so a
//! failed write can be attempted again).

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for provscript operations.
#[derive(Error, Debug)]
pub enum ScriptError {
    /// The args, variable-flags, and usage-text slices passed to an
    /// invocation builder differ in length. No state is committed.
    #[error(
        "argument list mismatch: {args} arguments, {variable} variable flags, {usage} usage entries"
    )]
    ArgumentListMismatch {
        args: usize,
        variable: usize,
        usage: usize,
    },

    /// `persist` was called before `construct`; no I/O was attempted.
    #[error("script has not been constructed; call construct() before persist()")]
    NotConstructed,

    /// Writing the rendered script to disk failed.
    #[error("failed to write script to '{}': {source}", .path.display())]
    Persist {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A raw command line contained no words after shell splitting.
    #[error("command line is empty")]
    EmptyCommandLine,

    /// A raw command line could not be split into shell words.
    #[error("failed to parse command line: {0}")]
    CommandParse(#[from] shell_words::ParseError),
}

/// Result type alias for provscript operations.
pub type Result<T> = std::result::Result<T, ScriptError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mismatch_error_reports_all_three_lengths() {
        let err = ScriptError::ArgumentListMismatch {
            args: 2,
            variable: 1,
            usage: 2,
        };
        assert_eq!(
            err.to_string(),
            "argument list mismatch: 2 arguments, 1 variable flags, 2 usage entries"
        );
    }

    #[test]
    fn not_constructed_error_names_the_missing_call() {
        let err = ScriptError::NotConstructed;
        assert!(err.to_string().contains("construct()"));
    }

    #[test]
    fn persist_error_includes_path() {
        let err = ScriptError::Persist {
            path: PathBuf::from("/tmp/run_v1.sh"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        let message = err.to_string();
        assert!(message.contains("/tmp/run_v1.sh"));
        assert!(message.contains("denied"));
    }

    #[test]
    fn command_parse_error_wraps_shell_words() {
        let parse_err = shell_words::split("echo \"unterminated").unwrap_err();
        let err = ScriptError::from(parse_err);
        assert!(matches!(err, ScriptError::CommandParse(_)));
    }
}
