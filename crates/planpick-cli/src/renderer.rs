//! Terminal rendering module for rich markdown output
//!
//! This module provides terminal rendering capabilities using termimad
//! for rich markdown display with optional fallback to plain text.

use std::io::{self, Write};

use anyhow::{Context, Result};
use termimad::{crossterm::style::Color, MadSkin};

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
        skin.italic.set_fg(Color::Green);
        skin.inline_code.set_bg(Color::AnsiValue(238));

        Self { rich_enabled, skin }
    }

    /// Render markdown to stdout
    pub fn render(&self, markdown: &str) -> Result<()> {
        self.render_to(&mut io::stdout().lock(), markdown)
    }

    /// Render markdown to stderr
    pub fn render_error(&self, markdown: &str) -> Result<()> {
        self.render_to(&mut io::stderr().lock(), markdown)
    }

    fn render_to(&self, out: &mut impl Write, markdown: &str) -> Result<()> {
        if self.rich_enabled {
            // Headers keep their hash marks
            for line in markdown.lines() {
                if line.starts_with('#') {
                    writeln!(out, "\x1b[34m{line}\x1b[0m")
                } else {
                    writeln!(out, "{}", self.skin.inline(line))
                }
                .context("Failed to write output")?;
            }
        } else {
            write!(out, "{markdown}").context("Failed to write output")?;
        }
        out.flush().context("Failed to flush output")
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new(true)
    }
}
