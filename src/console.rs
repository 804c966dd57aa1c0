//! Console output formatting with ANSI color support.
//!
//! Provides labelled terminal output with automatic TTY detection
//! and respect for the NO_COLOR environment variable.
//!
//! Plain lines go to stdout; labelled status messages go to stderr so
//! stdout only carries progress and results.

use std::io::{self, IsTerminal};
use std::sync::{Arc, Mutex};

/// ANSI style codes for terminal formatting.
#[derive(Debug, Clone, Copy)]
pub enum Style {
    Bold,
    Dim,
    Red,
    Green,
    Yellow,
    Blue,
    Cyan,
    Gray,
}

impl Style {
    /// Returns the ANSI escape code for this style.
    fn code(self) -> &'static str {
        match self {
            Style::Bold => "1",
            Style::Dim => "2",
            Style::Red => "31",
            Style::Green => "32",
            Style::Yellow => "33",
            Style::Blue => "34",
            Style::Cyan => "36",
            Style::Gray => "90",
        }
    }
}

const RESET: &str = "\x1b[0m";

/// Kind of labelled message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tag {
    Step,
    Ok,
    Info,
    Warn,
    Error,
}

impl Tag {
    fn text(self) -> &'static str {
        match self {
            Tag::Step => "STEP",
            Tag::Ok => "OK",
            Tag::Info => "INFO",
            Tag::Warn => "WARN",
            Tag::Error => "ERROR",
        }
    }

    fn color(self) -> Style {
        match self {
            Tag::Step => Style::Cyan,
            Tag::Ok => Style::Green,
            Tag::Info => Style::Blue,
            Tag::Warn => Style::Yellow,
            Tag::Error => Style::Red,
        }
    }
}

/// Console output handler with color support detection.
#[derive(Debug, Clone)]
pub struct Console {
    colors_enabled: bool,
    /// When set, output is captured here instead of being printed.
    recorded: Option<Arc<Mutex<Vec<String>>>>,
}

impl Default for Console {
    fn default() -> Self {
        Self::new()
    }
}

impl Console {
    /// Creates a new Console instance, detecting color support.
    ///
    /// Colors are disabled if:
    /// - The `NO_COLOR` environment variable is set
    /// - stdout is not a terminal (TTY)
    pub fn new() -> Self {
        let colors_enabled = std::env::var_os("NO_COLOR").is_none() && io::stdout().is_terminal();
        Self {
            colors_enabled,
            recorded: None,
        }
    }

    /// Creates a Console with colors explicitly enabled or disabled.
    pub fn with_colors(enabled: bool) -> Self {
        Self {
            colors_enabled: enabled,
            recorded: None,
        }
    }

    /// Creates an uncolored Console that keeps every message in memory.
    ///
    /// Clones share the same record.
    pub fn recording() -> Self {
        Self {
            colors_enabled: false,
            recorded: Some(Arc::new(Mutex::new(Vec::new()))),
        }
    }

    /// Messages captured so far by a [`Console::recording`] console.
    pub fn recorded(&self) -> Vec<String> {
        match &self.recorded {
            Some(lines) => lines.lock().map(|guard| guard.to_vec()).unwrap_or_default(),
            None => Vec::new(),
        }
    }

    /// Applies ANSI styles to text if colors are enabled.
    pub fn style(&self, text: &str, styles: &[Style]) -> String {
        if !self.colors_enabled || styles.is_empty() {
            return text.to_string();
        }

        let codes: Vec<&str> = styles.iter().map(|s| s.code()).collect();
        format!("\x1b[{}m{}{}", codes.join(";"), text, RESET)
    }

    /// Creates a colored label like `[INFO]`.
    pub fn label(&self, label: &str, color: Style) -> String {
        format!("[{}]", self.style(label, &[color, Style::Bold]))
    }

    fn tagged(&self, tag: Tag, message: &str) -> String {
        format!("{} {}", self.label(tag.text(), tag.color()), message)
    }

    /// Records `text`, returning false if this console is not recording.
    fn record(&self, text: &str) -> bool {
        let Some(lines) = &self.recorded else {
            return false;
        };
        if let Ok(mut lines) = lines.lock() {
            lines.push(text.to_string());
        }
        true
    }

    fn status(&self, tag: Tag, message: &str) {
        let text = self.tagged(tag, message);
        if !self.record(&text) {
            eprintln!("{}", text);
        }
    }

    /// Prints a step message with cyan `[STEP]` label.
    pub fn step(&self, message: &str) {
        self.status(Tag::Step, message);
    }

    /// Prints a success message with green `[OK]` label.
    pub fn success(&self, message: &str) {
        self.status(Tag::Ok, message);
    }

    /// Prints an info message with blue `[INFO]` label.
    pub fn info(&self, message: &str) {
        self.status(Tag::Info, message);
    }

    /// Prints a warning message with yellow `[WARN]` label.
    pub fn warning(&self, message: &str) {
        self.status(Tag::Warn, message);
    }

    /// Prints an error message with red `[ERROR]` label.
    pub fn error(&self, message: &str) {
        self.status(Tag::Error, message);
    }

    /// Prints a message verbatim to stdout, with no label or styling.
    pub fn line(&self, message: &str) {
        if !self.record(message) {
            println!("{}", message);
        }
    }

    /// Returns text styled as muted (dim gray).
    pub fn muted(&self, text: &str) -> String {
        self.style(text, &[Style::Gray, Style::Dim])
    }

    /// Formats a count with styling (e.g., for word totals).
    pub fn count(&self, n: usize) -> String {
        self.style(&n.to_string(), &[Style::Green, Style::Bold])
    }
}
