#![forbid(unsafe_code)]

//! Option menu and entry point for `argv-demo`
//!
//! The demo reads a few typical options, requires at least one positional
//! argument, and reports what it understood either as plain text or as
//! JSON lines.

use crate::cli::config_file::DemoConfig;
use crate::error::{ArgvError, EXIT_ERROR, EXIT_SUCCESS};
use crate::output::{HumanFormatter, JsonlFormatter};
use crate::scanner::Argv;
use serde::{Deserialize, Serialize};
use std::io::{self, IsTerminal, Write};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Help shown for `-h`/`--help`; `{name}` becomes the program name
pub const HELP_TEXT: &str = r#"
Usage: {name} [options] FILE...

Options:

--output (-o) FILE
    Write the results to FILE

--period (-p) SECONDS
    Duration of each period. Units are floating point seconds (default 10)

--debug (-d)
    Enable debug logging

--verbose (-v)
    Be verbose. Multiple occurrences increase verbosity

--config (-c) FILE
    Read defaults from the TOML file FILE

--format (-f) FORMAT
    Report format: human or jsonl (default human)

--color WHEN
    Colorize the human report: auto, always or never (default auto)

--help (-h)
    Show this help and exit

Use -- to treat every following argument as a file, e.g. {name} -- -odd-name
"#;

/// Period used when neither the command line nor a defaults file sets one
pub const DEFAULT_PERIOD: f64 = 10.0;

/// Errors from running the demo program
#[derive(Debug, Error)]
pub enum DemoError {
    #[error(transparent)]
    Argv(#[from] ArgvError),

    #[error("failed to read config file '{}': {source}", .path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse config file '{}': {source}", .path.display())]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid config file '{}': {message}", .path.display())]
    ConfigInvalid { path: PathBuf, message: String },

    #[error("failed to write report: {0}")]
    Output(#[from] io::Error),
}

/// Report format
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Human,
    Jsonl,
}

impl OutputFormat {
    fn from_name(name: &str) -> Option<Self> {
        match name {
            "human" => Some(OutputFormat::Human),
            "jsonl" => Some(OutputFormat::Jsonl),
            _ => None,
        }
    }
}

/// When to colorize the human report
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorWhen {
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorWhen {
    fn from_name(name: &str) -> Option<Self> {
        match name {
            "auto" => Some(ColorWhen::Auto),
            "always" => Some(ColorWhen::Always),
            "never" => Some(ColorWhen::Never),
            _ => None,
        }
    }

    /// Resolve to a termcolor choice; `auto` colors only a terminal
    pub fn color_choice(self) -> termcolor::ColorChoice {
        match self {
            ColorWhen::Always => termcolor::ColorChoice::Always,
            ColorWhen::Never => termcolor::ColorChoice::Never,
            ColorWhen::Auto if io::stdout().is_terminal() => termcolor::ColorChoice::Auto,
            ColorWhen::Auto => termcolor::ColorChoice::Never,
        }
    }
}

/// Everything the demo understood from its arguments
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DemoOptions {
    pub output: Option<String>,
    pub period: f64,
    pub debug: bool,
    pub verbosity: u32,
    pub format: OutputFormat,
    pub color: ColorWhen,
    /// Residual argument vector: program path, then the files
    pub args: Vec<String>,
}

/// Run the demo over the process's own arguments and return its exit code
pub fn run_from_env() -> i32 {
    finish(Argv::from_env(HELP_TEXT).map_err(DemoError::from).and_then(execute))
}

/// Run the demo over `args` and return its exit code
pub fn run<I, S>(args: I) -> i32
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    finish(Argv::new(args, HELP_TEXT).map_err(DemoError::from).and_then(execute))
}

fn execute(argv: Argv) -> Result<(), DemoError> {
    let options = parse_options(argv)?;

    match options.format {
        OutputFormat::Human => {
            HumanFormatter::new(options.color.color_choice()).write_to_stdout(&options)?;
        }
        OutputFormat::Jsonl => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(JsonlFormatter::new().format(&options).as_bytes())?;
            stdout.flush()?;
        }
    }
    Ok(())
}

/// Map the outcome to an exit code, printing whatever is still unreported
fn finish(result: Result<(), DemoError>) -> i32 {
    match result {
        Ok(()) => EXIT_SUCCESS,
        Err(DemoError::Argv(ArgvError::HelpRequested(text))) => {
            print!("{}", text);
            EXIT_SUCCESS
        }
        Err(DemoError::Argv(err @ ArgvError::Construction(_))) => {
            eprintln!("error: {}", err);
            err.exit_code()
        }
        // The scanner has already written its diagnostic
        Err(DemoError::Argv(err)) => err.exit_code(),
        Err(err) => {
            eprintln!("error: {}", err);
            EXIT_ERROR
        }
    }
}

/// Scan the demo's options and merge them over any defaults file
pub fn parse_options(mut argv: Argv) -> Result<DemoOptions, DemoError> {
    let mut output = None;
    let mut period = DEFAULT_PERIOD;
    let mut period_given = false;
    let mut debug = false;
    let mut verbosity = 0;
    let mut config_path = None;
    let mut format_name = None;
    let mut color_name = None;

    while argv.more()? {
        argv.option('o', "--output", &mut output)?;
        if argv.number('p', "--period", &mut period, 0.0..)? {
            period_given = true;
        }
        argv.flag('d', "--debug", &mut debug);
        argv.counter('v', "--verbose", &mut verbosity);
        argv.option('c', "--config", &mut config_path)?;
        argv.option('f', "--format", &mut format_name)?;
        argv.option(None, "--color", &mut color_name)?;
    }

    if argv.positionals().is_empty() {
        return Err(argv.usage_error("wrong usage").into());
    }

    let config = match &config_path {
        Some(path) => DemoConfig::load(Path::new(path))?,
        None => DemoConfig::default(),
    };

    let format = match format_name {
        Some(name) => OutputFormat::from_name(&name)
            .ok_or_else(|| argv.usage_error(format!("unknown report format '{}'", name)))?,
        None => config.format.unwrap_or_default(),
    };
    let color = match color_name {
        Some(name) => ColorWhen::from_name(&name)
            .ok_or_else(|| argv.usage_error(format!("unknown color mode '{}'", name)))?,
        None => ColorWhen::default(),
    };

    Ok(DemoOptions {
        output: output.or(config.output),
        period: if period_given {
            period
        } else {
            config.period.unwrap_or(DEFAULT_PERIOD)
        },
        debug: debug || config.debug.unwrap_or(false),
        verbosity: if verbosity > 0 {
            verbosity
        } else {
            config.verbose.unwrap_or(0)
        },
        format,
        color,
        args: argv.into_args(),
    })
}
