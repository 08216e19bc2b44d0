//! Option scanning over an argument vector

mod accessors;
pub mod argv;
mod bundle;

pub use argv::{Argv, HELP_LONG, HELP_SHORT};
