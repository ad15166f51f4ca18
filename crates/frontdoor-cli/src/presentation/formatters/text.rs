use frontdoor_types::truncate;
use owo_colors::OwoColorize;

use crate::presentation::view_models::Tone;

/// Truncate to `width` chars, then left-align within `width`.
pub fn cell(s: &str, width: usize) -> String {
    format!("{:<width$}", truncate(s, width), width = width)
}

pub fn favorite_marker(is_favorite: bool) -> &'static str {
    if is_favorite { "★" } else { " " }
}

pub fn count_or_dash(value: Option<u64>) -> String {
    value.map_or_else(|| "-".to_string(), |v| v.to_string())
}

pub fn paint_tone(text: &str, tone: Tone, color: bool) -> String {
    if !color {
        return text.to_string();
    }
    match tone {
        Tone::Good => text.green().to_string(),
        Tone::Attention => text.yellow().to_string(),
        Tone::Bad => text.red().to_string(),
    }
}

pub fn paint_bold(text: &str, color: bool) -> String {
    if color {
        text.bold().to_string()
    } else {
        text.to_string()
    }
}

pub fn paint_dim(text: &str, color: bool) -> String {
    if color {
        text.dimmed().to_string()
    } else {
        text.to_string()
    }
}
