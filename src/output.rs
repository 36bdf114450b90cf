//! # Console Output
//!
//! Everything the binary prints goes through a [`Console`], which applies the
//! `-verbosity` setting and the user's color preferences.
//!
//! ## Respecting User Preferences
//!
//! Colors follow these environment variables:
//! - `NO_COLOR` - Disables colors when set (per https://no-color.org/)
//! - `CLICOLOR=0` - Disables colors
//! - `CLICOLOR_FORCE=1` - Forces colors even in non-TTY
//! - `TERM=dumb` - Disables colors for dumb terminals
//!
//! Regular output is dropped entirely at [`Verbosity::Quiet`]; errors and
//! warnings are always written.

use std::env;
use std::fmt::Display;

use console::style;

use crate::common_options::Verbosity;

/// Output configuration for controlling colors.
#[derive(Debug, Clone)]
pub struct OutputConfig {
    /// Whether errors and warnings are colored.
    pub use_color: bool,
}

impl OutputConfig {
    /// Detect color support from the environment.
    ///
    /// Colors are disabled if:
    /// - `NO_COLOR` environment variable is set (any value, including empty)
    /// - `CLICOLOR=0` is set
    /// - `TERM=dumb` is set
    /// - stdout is not a TTY (unless `CLICOLOR_FORCE=1`)
    pub fn from_env() -> Self {
        Self {
            use_color: Self::detect_color_support(),
        }
    }

    fn detect_color_support() -> bool {
        // The presence of the variable (even if empty) disables colors
        if env::var_os("NO_COLOR").is_some() {
            return false;
        }

        if env::var("CLICOLOR").is_ok_and(|v| v == "0") {
            return false;
        }

        if env::var("CLICOLOR_FORCE").is_ok_and(|v| v != "0" && !v.is_empty()) {
            return true;
        }

        if env::var("TERM").is_ok_and(|v| v == "dumb") {
            return false;
        }

        console::Term::stdout().features().colors_supported()
    }

    /// Create a configuration with colors always enabled.
    pub fn with_color() -> Self {
        Self { use_color: true }
    }

    /// Create a configuration with colors always disabled.
    pub fn without_color() -> Self {
        Self { use_color: false }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self::from_env()
    }
}

/// The binary's output channel.
#[derive(Debug, Clone, Default)]
pub struct Console {
    config: OutputConfig,
    verbosity: Verbosity,
}

impl Console {
    pub fn new(config: OutputConfig) -> Self {
        Self {
            config,
            verbosity: Verbosity::Normal,
        }
    }

    pub fn verbosity(&self) -> Verbosity {
        self.verbosity
    }

    pub fn set_verbosity(&mut self, verbosity: Verbosity) {
        self.verbosity = verbosity;
    }

    pub fn is_quiet(&self) -> bool {
        self.verbosity == Verbosity::Quiet
    }

    /// Writes a line to stdout unless the console is quiet.
    pub fn write_line(&self, text: impl Display) {
        if !self.is_quiet() {
            println!("{text}");
        }
    }

    /// Writes an error to stderr, in red when colors are enabled.
    pub fn write_error(&self, text: impl Display) {
        let text = text.to_string();
        if self.config.use_color {
            eprintln!("{}", style(text).red().force_styling(true));
        } else {
            eprintln!("{text}");
        }
    }

    /// Writes a `WARNING: ` line to stdout, in yellow when colors are enabled.
    pub fn write_warning(&self, text: impl Display) {
        let text = warning_text(text);
        if self.config.use_color {
            println!("{}", style(text).yellow().force_styling(true));
        } else {
            println!("{text}");
        }
    }

    /// Writes a `hint:` line to stderr.
    pub fn hint(&self, text: impl Display) {
        eprintln!("hint: {text}");
    }
}

/// Formats a warning the way [`Console::write_warning`] prints it.
pub fn warning_text(text: impl Display) -> String {
    format!("WARNING: {text}")
}

/// Width of the attached terminal, or `usize::MAX` when output is redirected.
pub fn terminal_width() -> usize {
    match console::Term::stdout().size_checked() {
        Some((_, 0)) => 80,
        Some((_, columns)) => usize::from(columns),
        None => usize::MAX,
    }
}

/// Word-wraps `text` so that, printed from column `start`, no line runs past
/// `width`. Continuation lines are indented with `start` spaces. Explicit
/// newlines in `text` are kept.
pub fn justify(start: usize, text: &str, width: usize) -> String {
    let available = if width > start {
        width - start - 1
    } else {
        width
    }
    .max(1);

    let mut lines = Vec::new();
    for paragraph in text.lines() {
        let mut line = String::new();
        for word in paragraph.split_whitespace() {
            let line_len = line.chars().count();
            let word_len = word.chars().count();
            if line_len > 0 && line_len + 1 + word_len > available {
                lines.push(std::mem::take(&mut line));
            }
            if !line.is_empty() {
                line.push(' ');
            }
            line.push_str(word);
        }
        lines.push(line);
    }

    lines.join(&format!("\n{}", " ".repeat(start)))
}
