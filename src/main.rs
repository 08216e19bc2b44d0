#![forbid(unsafe_code)]

//! Entry point for `argv-demo`

fn main() {
    std::process::exit(easy_argv::cli::demo::run_from_env());
}
