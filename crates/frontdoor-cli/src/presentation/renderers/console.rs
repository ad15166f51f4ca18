use std::io::{self, Write};

use anyhow::Result;
use is_terminal::IsTerminal;
use owo_colors::OwoColorize;
use serde::Serialize;

use super::traits::Renderer;
use crate::presentation::view_models::{
    CommandResultViewModel, CreateView, StatusLevel,
    common::{OutputFormat, ViewMode},
};

pub struct ConsoleRenderer {
    format: OutputFormat,
    mode: ViewMode,
    color: bool,
}

impl ConsoleRenderer {
    pub fn new(format: OutputFormat, mode: ViewMode) -> Self {
        let color = format == OutputFormat::Text && io::stdout().is_terminal();
        Self {
            format,
            mode,
            color,
        }
    }

    /// Force color on or off (tests render without escapes).
    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    /// Text rendering without touching stdout.
    pub fn render_to_string<T>(&self, result: &CommandResultViewModel<T>) -> Result<String>
    where
        T: Serialize + CreateView,
    {
        if self.format == OutputFormat::Json {
            return Ok(format!("{}\n", serde_json::to_string_pretty(result)?));
        }

        let mut out = String::new();
        if let Some(badge) = &result.badge {
            let label = if self.color {
                match badge.level {
                    StatusLevel::Success => badge.label.green().bold().to_string(),
                    StatusLevel::Info => badge.label.bold().to_string(),
                    StatusLevel::Warning => badge.label.yellow().bold().to_string(),
                }
            } else {
                badge.label.clone()
            };
            out.push_str(&format!("{} {}\n\n", badge.icon(), label));
        }

        out.push_str(&result.content.create_view(self.mode, self.color).to_string());

        if !result.suggestions.is_empty() {
            let heading = if self.color {
                "Tips:".yellow().bold().to_string()
            } else {
                "Tips:".to_string()
            };
            out.push_str(&format!("\n{}\n", heading));
            for tip in &result.suggestions {
                out.push_str(&format!("  • {}", tip.description));
                if let Some(cmd) = &tip.command {
                    if self.color {
                        out.push_str(&format!(": {}", cmd.cyan()));
                    } else {
                        out.push_str(&format!(": {}", cmd));
                    }
                }
                out.push('\n');
            }
        }

        Ok(out)
    }
}

impl Renderer for ConsoleRenderer {
    fn render<T>(&self, result: CommandResultViewModel<T>) -> Result<()>
    where
        T: Serialize + CreateView + Send + Sync,
    {
        let text = self.render_to_string(&result)?;
        let mut stdout = io::stdout().lock();
        stdout.write_all(text.as_bytes())?;
        stdout.flush()?;
        Ok(())
    }
}
