#![forbid(unsafe_code)]

//! Easy command-line option parsing
//!
//! A scanner that walks the program's argument vector, hands each option
//! to a menu of typed accessors, and removes what it consumes. What remains
//! afterwards is the program path followed by the positional arguments in
//! their original order.
//!
//! Short options bundle (`-abc`), short values attach or follow (`-ofile`,
//! `-o file`), long values use `=` or follow (`--out=file`, `--out file`),
//! `-` is a positional and `--` ends option scanning.

pub mod cli;
pub mod config;
pub mod convert;
pub mod error;
pub mod output;
pub mod scanner;

pub use config::Settings;
pub use error::ArgvError;
pub use scanner::Argv;
