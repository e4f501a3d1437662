//! Terminal rendering module for rich markdown output
//!
//! Screens, summaries and cards arrive as markdown from the core crate and
//! are styled with termimad. With colors disabled the markdown is printed as
//! is, which is also what the CLI tests read.

use std::io::{self, Write};

use anyhow::{Context, Result};
use termimad::{crossterm::style::Color, MadSkin};

const PROMPT: &str = "bcp> ";

/// Terminal renderer that can switch between rich and plain text output
pub struct TerminalRenderer {
    rich_enabled: bool,
    skin: MadSkin,
}

impl TerminalRenderer {
    /// Create a new terminal renderer
    pub fn new(rich_enabled: bool) -> Self {
        let mut skin = MadSkin::default();

        skin.set_headers_fg(Color::Blue);
        skin.bold.set_fg(Color::Yellow);
        skin.italic.set_fg(Color::Magenta);

        Self { rich_enabled, skin }
    }

    /// Render markdown text to terminal
    pub fn render(&self, markdown: &str) {
        if self.rich_enabled {
            for line in markdown.lines() {
                // Keep the hashes visible so headings read as headings inline.
                if line.starts_with('#') {
                    println!("\x1b[34m{line}\x1b[0m");
                } else {
                    self.skin.print_inline(line);
                    println!();
                }
            }
        } else {
            print!("{markdown}");
        }
    }

    /// Show a transient notification.
    pub fn notice(&self, message: &str) {
        if self.rich_enabled {
            println!("\x1b[32m» {message}\x1b[0m");
        } else {
            println!("> {message}");
        }
    }

    /// Show the inline validation warning for the current step.
    pub fn warning(&self, message: &str) {
        if self.rich_enabled {
            println!("\x1b[33m! {message}\x1b[0m");
        } else {
            println!("Warning: {message}");
        }
    }

    /// Report a rejected command without leaving the shell.
    pub fn error(&self, message: &str) {
        if self.rich_enabled {
            println!("\x1b[31mError:\x1b[0m {message}");
        } else {
            println!("Error: {message}");
        }
    }

    /// Print the input prompt without a newline.
    pub fn prompt(&self) -> Result<()> {
        print!("{PROMPT}");
        io::stdout().flush().context("Failed to flush prompt")
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_renderer() {
        let renderer = TerminalRenderer::new(false);
        assert!(!renderer.rich_enabled);
    }

    #[test]
    fn test_default_is_rich() {
        let renderer = TerminalRenderer::default();
        assert!(renderer.rich_enabled);
    }
}
