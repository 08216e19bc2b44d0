#![forbid(unsafe_code)]

//! Settings that shape how the scanner reports to the user

/// Token replaced by the program name when help text is rendered
pub const DEFAULT_PLACEHOLDER: &str = "{name}";

/// Scanner settings
///
/// The defaults match what most programs want: `{name}` in the help text
/// becomes the program name, and fatal conditions are reported on stderr.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Literal token substituted with the program name in help text
    pub placeholder: String,
    /// Write diagnostics to stderr before returning an error
    pub diagnostics: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            placeholder: DEFAULT_PLACEHOLDER.to_string(),
            diagnostics: true,
        }
    }
}

impl Settings {
    /// Use a different placeholder token in the help template
    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    /// Suppress diagnostics on stderr; errors are still returned
    pub fn quiet(mut self) -> Self {
        self.diagnostics = false;
        self
    }

    /// Replace every occurrence of the placeholder in `template` with `name`
    ///
    /// An empty placeholder leaves the template untouched.
    pub fn render_help(&self, template: &str, name: &str) -> String {
        if self.placeholder.is_empty() {
            return template.to_string();
        }
        template.replace(&self.placeholder, name)
    }
}
