#![forbid(unsafe_code)]

//! Human-readable report with colorization support

use crate::cli::DemoOptions;
use std::io::{self, Write};
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

/// Human-readable report formatter
///
/// Lists the settings the demo ended up with, then every entry of the
/// residual argument vector as `argv[i]=value`.
pub struct HumanFormatter {
    color_choice: ColorChoice,
}

impl HumanFormatter {
    /// Creates a new HumanFormatter with the specified color choice
    pub fn new(color_choice: ColorChoice) -> Self {
        HumanFormatter { color_choice }
    }

    /// Format the report as plain text
    pub fn format(&self, options: &DemoOptions) -> String {
        let mut output = String::new();

        match &options.output {
            Some(path) => output.push_str(&format!("Output: {}\n", path)),
            None => output.push_str("No output specified\n"),
        }
        output.push_str(&format!("Period: {}\n", options.period));
        if options.debug {
            output.push_str("Debug logging enabled\n");
        }
        output.push_str(&format!("Verbosity: {}\n", options.verbosity));

        for (index, arg) in options.args.iter().enumerate() {
            output.push_str(&format!("argv[{}]={}\n", index, arg));
        }

        output
    }

    /// Write the report to stdout with colors
    pub fn write_to_stdout(&self, options: &DemoOptions) -> io::Result<()> {
        let mut stdout = StandardStream::stdout(self.color_choice);
        self.write_colored(&mut stdout, options)?;
        stdout.flush()
    }

    fn write_colored(&self, out: &mut impl WriteColor, options: &DemoOptions) -> io::Result<()> {
        let label = ColorSpec::new().set_bold(true).clone();

        match &options.output {
            Some(path) => {
                out.set_color(&label)?;
                write!(out, "Output:")?;
                out.reset()?;
                writeln!(out, " {}", path)?;
            }
            None => {
                out.set_color(ColorSpec::new().set_dimmed(true))?;
                writeln!(out, "No output specified")?;
                out.reset()?;
            }
        }

        out.set_color(&label)?;
        write!(out, "Period:")?;
        out.reset()?;
        writeln!(out, " {}", options.period)?;

        if options.debug {
            out.set_color(ColorSpec::new().set_fg(Some(Color::Yellow)))?;
            writeln!(out, "Debug logging enabled")?;
            out.reset()?;
        }

        out.set_color(&label)?;
        write!(out, "Verbosity:")?;
        out.reset()?;
        writeln!(out, " {}", options.verbosity)?;

        for (index, arg) in options.args.iter().enumerate() {
            out.set_color(ColorSpec::new().set_fg(Some(Color::Cyan)))?;
            write!(out, "argv[{}]", index)?;
            out.reset()?;
            writeln!(out, "={}", arg)?;
        }

        Ok(())
    }
}
