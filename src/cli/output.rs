//! Colored output helpers for the CLI.

use owo_colors::OwoColorize;

/// Output style configuration
pub struct Output {
    /// Whether to use colored output
    pub colored: bool,
}

impl Default for Output {
    fn default() -> Self {
        Self::new()
    }
}

impl Output {
    /// Create a new output helper with colors enabled
    pub fn new() -> Self {
        Self { colored: true }
    }

    /// Create a new output helper with colors disabled
    pub fn no_color() -> Self {
        Self { colored: false }
    }

    /// Print an informational line
    pub fn info(&self, message: &str) {
        if self.colored {
            eprintln!("{} {}", "info:".bright_cyan().bold(), message);
        } else {
            eprintln!("info: {}", message);
        }
    }

    /// Print an error line
    pub fn error(&self, message: &str) {
        if self.colored {
            eprintln!("{} {}", "error:".bright_red().bold(), message);
        } else {
            eprintln!("error: {}", message);
        }
    }

    /// Print a key/value configuration line
    pub fn field(&self, key: &str, value: &str) {
        if self.colored {
            println!("  {} {}", format!("{}:", key).bright_white().bold(), value);
        } else {
            println!("  {}: {}", key, value);
        }
    }

    /// Print the final answer
    pub fn answer(&self, text: &str) {
        if self.colored {
            println!("{}", text.bright_white());
        } else {
            println!("{}", text);
        }
    }
}
