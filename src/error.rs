#![forbid(unsafe_code)]

//! Error taxonomy for option scanning
//!
//! Every fault the scanner can raise is an [`ArgvError`]. The `Display`
//! text is the bare problem description; [`ArgvError::diagnostic`] wraps it
//! in the message shown to users on the diagnostic stream.

use thiserror::Error;

/// Exit code for a successful run (also used after showing help)
pub const EXIT_SUCCESS: i32 = 0;

/// Exit code for any usage or argument fault
pub const EXIT_ERROR: i32 = 1;

/// Errors raised while scanning options
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ArgvError {
    /// An option token that no accessor claimed, or a caller-reported usage problem
    #[error("{0}")]
    Usage(String),

    /// An option that needs a value had none available
    #[error("expected argument for option {option}")]
    MissingArgument { option: String },

    /// A captured value failed numeric conversion or fell outside its bounds
    #[error("invalid argument '{value}' for option {option}")]
    InvalidArgument { value: String, option: String },

    /// The argument vector could not be used at all
    #[error("{0}")]
    Construction(String),

    /// `-h` or `--help` was given; carries the rendered help text
    ///
    /// Not a fault. The caller prints the text to stdout and exits successfully.
    #[error("help requested")]
    HelpRequested(String),
}

impl ArgvError {
    /// Build an unknown-option error for the given token
    pub fn unknown_option(token: impl AsRef<str>) -> Self {
        ArgvError::Usage(format!("unknown option: {}", token.as_ref()))
    }

    /// True for the help path, which is a normal early exit
    pub fn is_help(&self) -> bool {
        matches!(self, ArgvError::HelpRequested(_))
    }

    /// Process exit code conventionally used for this outcome
    pub fn exit_code(&self) -> i32 {
        if self.is_help() {
            EXIT_SUCCESS
        } else {
            EXIT_ERROR
        }
    }

    /// Render the user-facing diagnostic for program `name`
    ///
    /// ```text
    /// <name>: <problem>
    /// Try '<name> --help' for more information.
    /// ```
    pub fn diagnostic(&self, name: &str) -> String {
        format!(
            "{}: {}\nTry '{} --help' for more information.",
            name, self, name
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_usage_display() {
        let err = ArgvError::unknown_option("-x");
        assert_eq!(err.to_string(), "unknown option: -x");
    }

    #[test]
    fn test_missing_argument_display() {
        let err = ArgvError::MissingArgument {
            option: "--output".to_string(),
        };
        assert_eq!(err.to_string(), "expected argument for option --output");
    }

    #[test]
    fn test_invalid_argument_display() {
        let err = ArgvError::InvalidArgument {
            value: "12x".to_string(),
            option: "-n".to_string(),
        };
        assert_eq!(err.to_string(), "invalid argument '12x' for option -n");
    }

    #[test]
    fn test_diagnostic_format() {
        let err = ArgvError::unknown_option("--bogus");
        assert_eq!(
            err.diagnostic("prog"),
            "prog: unknown option: --bogus\nTry 'prog --help' for more information."
        );
    }

    #[test]
    fn test_exit_codes() {
        assert_eq!(ArgvError::HelpRequested(String::new()).exit_code(), 0);
        assert!(ArgvError::HelpRequested(String::new()).is_help());
        assert_eq!(ArgvError::Usage("wrong usage".to_string()).exit_code(), 1);
        assert!(!ArgvError::Construction("invalid arguments".to_string()).is_help());
    }
}
