#![forbid(unsafe_code)]

//! The option scanner
//!
//! [`Argv`] owns the argument vector and walks it one option at a time.
//! The caller drives it with a loop:
//!
//! ```
//! use easy_argv::Argv;
//!
//! # fn main() -> Result<(), easy_argv::ArgvError> {
//! let mut args = Argv::new(["prog", "-v", "input.txt"], "Usage: {name} FILE")?;
//! let mut verbose = false;
//! while args.more()? {
//!     args.flag('v', "--verbose", &mut verbose);
//! }
//! assert!(verbose);
//! assert_eq!(args.args(), ["prog", "input.txt"]);
//! # Ok(())
//! # }
//! ```
//!
//! Each call to [`Argv::more`] announces at most one pending option. The
//! accessors in the loop body then compete for it; the first one that
//! recognizes it consumes it and removes it from the vector. An option no
//! accessor claims is reported as unknown on the next call.
//!
//! Positional arguments are skipped over and stay in place, in their
//! original order. A bare `--` is removed and ends option scanning.

use crate::config::Settings;
use crate::error::ArgvError;
use crate::scanner::bundle::Bundle;

/// Short form of the reserved help option
pub const HELP_SHORT: char = 'h';

/// Long form of the reserved help option
pub const HELP_LONG: &str = "--help";

/// Argument vector plus scan state
#[derive(Debug, Clone)]
pub struct Argv {
    args: Vec<String>,
    name: String,
    help_template: String,
    settings: Settings,
    cursor: usize,
    handling_option: bool,
    bundle: Option<Bundle>,
    exhausted: bool,
}

impl Argv {
    /// Create a scanner over `args` with default settings
    ///
    /// The first argument is the program path; `help_template` is shown
    /// (with the placeholder replaced by the program name) on `-h`/`--help`.
    ///
    /// # Errors
    ///
    /// Returns [`ArgvError::Construction`] if `args` is empty.
    pub fn new<I, S>(args: I, help_template: impl Into<String>) -> Result<Self, ArgvError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::with_settings(args, help_template, Settings::default())
    }

    /// Create a scanner with explicit settings
    pub fn with_settings<I, S>(
        args: I,
        help_template: impl Into<String>,
        settings: Settings,
    ) -> Result<Self, ArgvError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let args: Vec<String> = args.into_iter().map(Into::into).collect();
        let Some(program) = args.first() else {
            return Err(ArgvError::Construction("invalid arguments".to_string()));
        };
        let name = match program.rfind('/') {
            Some(slash) => program[slash + 1..].to_string(),
            None => program.clone(),
        };

        Ok(Argv {
            args,
            name,
            help_template: help_template.into(),
            settings,
            cursor: 1,
            handling_option: false,
            bundle: None,
            exhausted: false,
        })
    }

    /// Create a scanner over the process's own arguments
    ///
    /// # Errors
    ///
    /// Returns [`ArgvError::Construction`] if there are no arguments or one
    /// of them is not valid UTF-8.
    pub fn from_env(help_template: impl Into<String>) -> Result<Self, ArgvError> {
        let args = std::env::args_os()
            .enumerate()
            .map(|(index, arg)| {
                arg.into_string().map_err(|_| {
                    ArgvError::Construction(format!("argument {} is not valid UTF-8", index))
                })
            })
            .collect::<Result<Vec<String>, ArgvError>>()?;
        Self::new(args, help_template)
    }

    /// The program name: the last `/`-separated segment of the first argument
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Help text with every placeholder replaced by the program name
    pub fn help_text(&self) -> String {
        self.settings.render_help(&self.help_template, &self.name)
    }

    /// The current argument vector, program path first
    ///
    /// Once [`Argv::more`] has returned false this holds only the program
    /// path and the positional arguments, in their original order.
    pub fn args(&self) -> &[String] {
        &self.args
    }

    /// The arguments after the program path
    pub fn positionals(&self) -> &[String] {
        &self.args[1..]
    }

    /// Argument `index`, or `None` one past the end and beyond
    pub fn get(&self, index: usize) -> Option<&str> {
        self.args.get(index).map(String::as_str)
    }

    /// Give up the scanner and keep the argument vector
    pub fn into_args(self) -> Vec<String> {
        self.args
    }

    /// Advance to the next option, returning true if one is pending
    ///
    /// # Errors
    ///
    /// - [`ArgvError::HelpRequested`] when `-h` or `--help` is pending
    /// - [`ArgvError::Usage`] when the option announced by the previous call
    ///   was not consumed by any accessor
    pub fn more(&mut self) -> Result<bool, ArgvError> {
        if self.exhausted {
            return Ok(false);
        }

        self.check_help()?;

        if self.handling_option {
            let token = match &self.bundle {
                Some(bundle) => bundle
                    .current()
                    .map_or_else(|| "-".to_string(), |c| format!("-{}", c)),
                None => self.peek().unwrap_or_default().to_string(),
            };
            return Err(self.report(ArgvError::unknown_option(token)));
        }

        if self.bundle.is_some() {
            self.handling_option = true;
            return Ok(true);
        }

        while let Some(arg) = self.peek() {
            if !arg.starts_with('-') || arg == "-" {
                self.cursor += 1;
                continue;
            }
            if arg == "--" {
                self.shift();
                self.exhausted = true;
                return Ok(false);
            }
            self.handling_option = true;
            self.check_help()?;
            return Ok(true);
        }

        self.exhausted = true;
        Ok(false)
    }

    /// Report a caller-detected usage problem, such as a wrong number of
    /// positional arguments
    ///
    /// Writes the diagnostic and returns the error for the caller to propagate.
    pub fn usage_error(&self, message: impl Into<String>) -> ArgvError {
        self.report(ArgvError::Usage(message.into()))
    }

    /// Write the diagnostic for `err` to stderr and hand the error back
    pub(crate) fn report(&self, err: ArgvError) -> ArgvError {
        if self.settings.diagnostics && !err.is_help() {
            eprintln!("{}", err.diagnostic(&self.name));
        }
        err
    }

    /// Consume short option `short` from the pending bundle
    pub(crate) fn take_short(&mut self, short: char) -> bool {
        if !self.claim_bundle() {
            return false;
        }
        let Some(bundle) = self.bundle.as_mut() else {
            return false;
        };
        if bundle.current() != Some(short) {
            return false;
        }
        self.handling_option = false;
        if bundle.advance() {
            self.bundle = None;
        }
        true
    }

    /// Consume short option `short` and its value
    ///
    /// The value is the rest of the bundle (`-ofoo`) or, if the bundle
    /// ends at `short`, the next argument (`-o foo`).
    pub(crate) fn take_short_with_arg(&mut self, short: char) -> Result<Option<String>, ArgvError> {
        if !self.claim_bundle() {
            return Ok(None);
        }
        let Some(bundle) = self.bundle.take() else {
            return Ok(None);
        };
        if bundle.current() != Some(short) {
            self.bundle = Some(bundle);
            return Ok(None);
        }
        self.handling_option = false;

        let rest = bundle.into_rest();
        if !rest.is_empty() {
            return Ok(Some(rest));
        }
        match self.shift() {
            Some(value) => Ok(Some(value)),
            None => Err(self.report(ArgvError::MissingArgument {
                option: format!("-{}", short),
            })),
        }
    }

    /// Consume long option `long` on an exact match
    pub(crate) fn take_long(&mut self, long: &str) -> bool {
        if !self.long_pending(long) || self.peek() != Some(long) {
            return false;
        }
        self.shift();
        self.handling_option = false;
        true
    }

    /// Consume long option `long` and its value
    ///
    /// Accepts `--long value` (two arguments) and `--long=value` (one).
    pub(crate) fn take_long_with_arg(&mut self, long: &str) -> Result<Option<String>, ArgvError> {
        if !self.long_pending(long) {
            return Ok(None);
        }
        let Some(arg) = self.peek() else {
            return Ok(None);
        };

        if arg == long {
            self.shift();
            self.handling_option = false;
            return match self.shift() {
                Some(value) => Ok(Some(value)),
                None => Err(self.report(ArgvError::MissingArgument {
                    option: long.to_string(),
                })),
            };
        }

        let Some(value) = arg.strip_prefix(long).and_then(|rest| rest.strip_prefix('=')) else {
            return Ok(None);
        };
        let value = value.to_string();
        self.shift();
        self.handling_option = false;
        Ok(Some(value))
    }

    fn long_pending(&self, long: &str) -> bool {
        self.handling_option && self.bundle.is_none() && !long.is_empty()
    }

    /// Make sure the pending short-option token has been pulled into the bundle
    fn claim_bundle(&mut self) -> bool {
        if !self.handling_option {
            return false;
        }
        if self.bundle.is_some() {
            return true;
        }
        if self.peek().and_then(short_cluster).is_none() {
            return false;
        }
        match self.shift() {
            Some(token) => {
                self.bundle = Some(Bundle::new(token));
                true
            }
            None => false,
        }
    }

    fn check_help(&mut self) -> Result<(), ArgvError> {
        let requested = match &self.bundle {
            Some(bundle) => bundle.current() == Some(HELP_SHORT),
            None => self.peek().is_some_and(|arg| {
                arg == HELP_LONG
                    || short_cluster(arg).is_some_and(|cluster| cluster.starts_with(HELP_SHORT))
            }),
        };
        if requested {
            self.handling_option = false;
            return Err(ArgvError::HelpRequested(self.help_text()));
        }
        Ok(())
    }

    fn peek(&self) -> Option<&str> {
        self.args.get(self.cursor).map(String::as_str)
    }

    /// Remove the argument under the cursor; later arguments slide down
    fn shift(&mut self) -> Option<String> {
        if self.cursor < self.args.len() {
            Some(self.args.remove(self.cursor))
        } else {
            None
        }
    }
}

/// The characters of a short-option cluster (`-abc` gives `abc`)
///
/// `None` for positionals, `-`, `--` and long options.
fn short_cluster(arg: &str) -> Option<&str> {
    let cluster = arg.strip_prefix('-')?;
    if cluster.is_empty() || cluster.starts_with('-') {
        None
    } else {
        Some(cluster)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quiet(args: &[&str]) -> Argv {
        Argv::with_settings(args.iter().copied(), "Usage: {name}", Settings::default().quiet())
            .unwrap()
    }

    #[test]
    fn test_name_is_base_name() {
        let args = quiet(&["/usr/bin/hello_world"]);
        assert_eq!(args.name(), "hello_world");

        let args = quiet(&["plain"]);
        assert_eq!(args.name(), "plain");

        let args = quiet(&["dir/"]);
        assert_eq!(args.name(), "");
    }

    #[test]
    fn test_empty_vector_is_rejected() {
        let result = Argv::new(Vec::<String>::new(), "help");
        assert_eq!(
            result.unwrap_err(),
            ArgvError::Construction("invalid arguments".to_string())
        );
    }

    #[test]
    fn test_no_options() {
        let mut args = quiet(&["prog", "a", "b"]);
        assert!(!args.more().unwrap());
        assert_eq!(args.args(), ["prog", "a", "b"]);
        assert_eq!(args.positionals(), ["a", "b"]);
        assert_eq!(args.get(3), None);
    }

    #[test]
    fn test_option_stays_until_claimed() {
        let mut args = quiet(&["prog", "file", "-x"]);
        assert!(args.more().unwrap());
        // Announcing an option does not remove it
        assert_eq!(args.args(), ["prog", "file", "-x"]);
        assert!(args.take_short('x'));
        assert_eq!(args.args(), ["prog", "file"]);
        assert!(!args.more().unwrap());
    }

    #[test]
    fn test_unclaimed_short_option_is_unknown() {
        let mut args = quiet(&["prog", "-x"]);
        assert!(args.more().unwrap());
        assert!(!args.take_short('y'));
        let err = args.more().unwrap_err();
        assert_eq!(err, ArgvError::unknown_option("-x"));
    }

    #[test]
    fn test_unclaimed_long_option_is_unknown() {
        let mut args = quiet(&["prog", "--bogus", "file"]);
        assert!(args.more().unwrap());
        assert!(!args.take_long("--real"));
        let err = args.more().unwrap_err();
        assert_eq!(err.to_string(), "unknown option: --bogus");
    }

    #[test]
    fn test_unclaimed_bundle_character_is_unknown() {
        let mut args = quiet(&["prog", "-ab"]);
        assert!(args.more().unwrap());
        assert!(args.take_short('a'));
        assert!(args.more().unwrap());
        assert!(!args.take_short('a'));
        assert_eq!(args.more().unwrap_err(), ArgvError::unknown_option("-b"));
    }

    #[test]
    fn test_one_option_per_announcement() {
        let mut args = quiet(&["prog", "-a", "--debug"]);
        assert!(args.more().unwrap());
        assert!(args.take_short('a'));
        // --debug has not been announced yet
        assert!(!args.take_long("--debug"));
        assert!(args.more().unwrap());
        assert!(args.take_long("--debug"));
        assert!(!args.more().unwrap());
    }

    #[test]
    fn test_accessors_do_nothing_without_announcement() {
        let mut args = quiet(&["prog", "-a"]);
        assert!(!args.take_short('a'));
        assert!(!args.take_long("-a"));
        assert_eq!(args.args(), ["prog", "-a"]);
    }

    #[test]
    fn test_short_with_attached_value() {
        let mut args = quiet(&["prog", "-ofoo.mp3"]);
        assert!(args.more().unwrap());
        assert_eq!(args.take_short_with_arg('o').unwrap(), Some("foo.mp3".to_string()));
        assert!(!args.more().unwrap());
        assert_eq!(args.args(), ["prog"]);
    }

    #[test]
    fn test_short_with_separate_value() {
        let mut args = quiet(&["prog", "-o", "-weird", "rest"]);
        assert!(args.more().unwrap());
        assert_eq!(args.take_short_with_arg('o').unwrap(), Some("-weird".to_string()));
        assert!(!args.more().unwrap());
        assert_eq!(args.args(), ["prog", "rest"]);
    }

    #[test]
    fn test_short_missing_value() {
        let mut args = quiet(&["prog", "-o"]);
        assert!(args.more().unwrap());
        let err = args.take_short_with_arg('o').unwrap_err();
        assert_eq!(err.to_string(), "expected argument for option -o");
    }

    #[test]
    fn test_long_with_equals() {
        let mut args = quiet(&["prog", "--output=bar.mp3", "next"]);
        assert!(args.more().unwrap());
        assert_eq!(args.take_long_with_arg("--out").unwrap(), None);
        assert_eq!(
            args.take_long_with_arg("--output").unwrap(),
            Some("bar.mp3".to_string())
        );
        assert_eq!(args.args(), ["prog", "next"]);
    }

    #[test]
    fn test_long_with_empty_value() {
        let mut args = quiet(&["prog", "--output="]);
        assert!(args.more().unwrap());
        assert_eq!(args.take_long_with_arg("--output").unwrap(), Some(String::new()));
    }

    #[test]
    fn test_long_missing_value() {
        let mut args = quiet(&["prog", "--output"]);
        assert!(args.more().unwrap());
        let err = args.take_long_with_arg("--output").unwrap_err();
        assert_eq!(
            err,
            ArgvError::MissingArgument {
                option: "--output".to_string()
            }
        );
    }

    #[test]
    fn test_long_requires_exact_match() {
        let mut args = quiet(&["prog", "--debugging"]);
        assert!(args.more().unwrap());
        assert!(!args.take_long("--debug"));
        assert!(!args.take_long(""));
        assert!(args.take_long("--debugging"));
    }

    #[test]
    fn test_long_ignored_inside_bundle() {
        let mut args = quiet(&["prog", "-ab"]);
        assert!(args.more().unwrap());
        assert!(args.take_short('a'));
        assert!(args.more().unwrap());
        assert!(!args.take_long("-ab"));
        assert!(args.take_short('b'));
    }

    #[test]
    fn test_stop_marker() {
        let mut args = quiet(&["prog", "--", "-h", "-x"]);
        assert!(!args.more().unwrap());
        assert!(!args.more().unwrap());
        assert_eq!(args.args(), ["prog", "-h", "-x"]);
    }

    #[test]
    fn test_lone_hyphen_is_positional() {
        let mut args = quiet(&["prog", "-", "file"]);
        assert!(!args.more().unwrap());
        assert_eq!(args.args(), ["prog", "-", "file"]);
    }

    #[test]
    fn test_help_short() {
        let mut args = quiet(&["/bin/tool", "file", "-h"]);
        let err = args.more().unwrap_err();
        assert_eq!(err, ArgvError::HelpRequested("Usage: tool".to_string()));
    }

    #[test]
    fn test_help_long() {
        let mut args = quiet(&["tool", "--help"]);
        assert!(args.more().unwrap_err().is_help());
    }

    #[test]
    fn test_help_inside_bundle() {
        let mut args = quiet(&["tool", "-vh"]);
        assert!(args.more().unwrap());
        assert!(args.take_short('v'));
        assert!(args.more().unwrap_err().is_help());
    }

    #[test]
    fn test_help_after_consumed_option() {
        let mut args = quiet(&["tool", "-v", "-h"]);
        assert!(args.more().unwrap());
        assert!(args.take_short('v'));
        assert!(args.more().unwrap_err().is_help());
    }

    #[test]
    fn test_usage_error() {
        let args = quiet(&["tool"]);
        assert_eq!(
            args.usage_error("wrong usage"),
            ArgvError::Usage("wrong usage".to_string())
        );
    }

    #[test]
    fn test_short_cluster() {
        assert_eq!(short_cluster("-abc"), Some("abc"));
        assert_eq!(short_cluster("-"), None);
        assert_eq!(short_cluster("--"), None);
        assert_eq!(short_cluster("--long"), None);
        assert_eq!(short_cluster("plain"), None);
    }
}
