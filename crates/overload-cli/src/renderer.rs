//! Terminal rendering of markdown output.
//!
//! Rich mode styles inline markdown with termimad and colors header lines;
//! plain mode prints the markdown untouched.

use std::io::{self, Write};

use anyhow::{Context, Result};
use termimad::{crossterm::style::Color, MadSkin};

const HEADER_COLOR: &str = "\x1b[34m";
const RESET: &str = "\x1b[0m";

/// Terminal renderer that can switch between rich and plain text output
pub struct TerminalRenderer {
    rich_enabled: bool,
    skin: MadSkin,
}

impl TerminalRenderer {
    pub fn new(rich_enabled: bool) -> Self {
        let mut skin = MadSkin::default();
        skin.set_headers_fg(Color::Blue);
        skin.bold.set_fg(Color::Yellow);
        skin.italic.set_fg(Color::Green);
        skin.inline_code.set_bg(Color::AnsiValue(238));

        Self { rich_enabled, skin }
    }

    /// Renders markdown to stdout.
    pub fn render(&self, markdown: &str) -> Result<()> {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        self.render_to(markdown, &mut out)?;
        out.flush().context("Failed to flush output")
    }

    /// Renders markdown to `out`.
    pub fn render_to(&self, markdown: &str, out: &mut impl Write) -> Result<()> {
        if !self.rich_enabled {
            return out
                .write_all(markdown.as_bytes())
                .context("Failed to write output");
        }

        for line in markdown.lines() {
            let written = if line.starts_with('#') {
                // Keep the hashes visible so nesting reads in the terminal.
                writeln!(out, "{HEADER_COLOR}{line}{RESET}")
            } else {
                writeln!(out, "{}", self.skin.inline(line))
            };
            written.context("Failed to write output")?;
        }
        Ok(())
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new(true)
    }
}
