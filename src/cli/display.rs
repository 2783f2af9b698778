// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Terminal display utilities for the trawl CLI.
//!
//! OneDark for dark terminals, One Light for light ones. The detection tries
//! `TRAWL_THEME` first (for explicit control), then `COLORFGBG` (set by some
//! terminals), then defaults to dark because most developers live there.
//! Respects `NO_COLOR` and non-TTY detection for pipelines.

use std::sync::OnceLock;

/// Terminal color theme
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Dark,
    Light,
}

/// Cached theme detection result
static THEME: OnceLock<Theme> = OnceLock::new();

/// Detect terminal theme from environment
fn detect_theme() -> Theme {
    // 1. Explicit override via TRAWL_THEME
    if let Ok(theme) = std::env::var("TRAWL_THEME") {
        match theme.to_lowercase().as_str() {
            "light" | "l" => return Theme::Light,
            "dark" | "d" => return Theme::Dark,
            _ => {}
        }
    }

    // 2. COLORFGBG (format: "fg;bg" where bg > 6 typically means light)
    if let Ok(colorfgbg) = std::env::var("COLORFGBG") {
        if let Some(bg) = colorfgbg.split(';').next_back() {
            if let Ok(bg_num) = bg.parse::<u8>() {
                if bg_num >= 7 && bg_num != 8 {
                    return Theme::Light;
                }
            }
        }
    }

    // 3. Default to dark (most developer terminals)
    Theme::Dark
}

/// Get the current theme (cached)
pub fn theme() -> Theme {
    *THEME.get_or_init(detect_theme)
}

/// Whether to emit ANSI colors at all
fn use_color() -> bool {
    std::env::var_os("NO_COLOR").is_none() && atty::is(atty::Stream::Stdout)
}

pub const RESET: &str = "\x1b[0m";
pub const DIM: &str = "\x1b[2m";

/// True color escape sequence helper
fn rgb((r, g, b): (u8, u8, u8)) -> String {
    format!("\x1b[38;2;{};{};{}m", r, g, b)
}

/// OneDark palette
mod onedark {
    pub const GREEN: (u8, u8, u8) = (152, 195, 121); // #98c379
    pub const YELLOW: (u8, u8, u8) = (229, 192, 123); // #e5c07b
    pub const BLUE: (u8, u8, u8) = (97, 175, 239); // #61afef
    pub const GRAY: (u8, u8, u8) = (92, 99, 112); // #5c6370
}

/// One Light palette
mod onelight {
    pub const GREEN: (u8, u8, u8) = (80, 161, 79); // #50a14f
    pub const YELLOW: (u8, u8, u8) = (193, 132, 1); // #c18401
    pub const BLUE: (u8, u8, u8) = (64, 120, 242); // #4078f2
    pub const GRAY: (u8, u8, u8) = (160, 161, 167); // #a0a1a7
}

fn palette_green() -> (u8, u8, u8) {
    match theme() {
        Theme::Dark => onedark::GREEN,
        Theme::Light => onelight::GREEN,
    }
}

fn palette_yellow() -> (u8, u8, u8) {
    match theme() {
        Theme::Dark => onedark::YELLOW,
        Theme::Light => onelight::YELLOW,
    }
}

fn palette_blue() -> (u8, u8, u8) {
    match theme() {
        Theme::Dark => onedark::BLUE,
        Theme::Light => onelight::BLUE,
    }
}

fn palette_gray() -> (u8, u8, u8) {
    match theme() {
        Theme::Dark => onedark::GRAY,
        Theme::Light => onelight::GRAY,
    }
}

/// Wrap `text` in a color, or pass it through when colors are off.
fn paint(text: &str, color: (u8, u8, u8)) -> String {
    if use_color() {
        format!("{}{}{}", rgb(color), text, RESET)
    } else {
        text.to_string()
    }
}

/// A similarity score, colored by strength: strong matches green, middling
/// yellow, weak gray.
pub fn score(value: f64) -> String {
    let text = format!("{:.4}", value);
    let color = if value >= 0.5 {
        palette_green()
    } else if value >= 0.1 {
        palette_yellow()
    } else {
        palette_gray()
    };
    paint(&text, color)
}

/// A document identifier (file path).
pub fn doc_id(id: &str) -> String {
    paint(id, palette_blue())
}

/// Dimmed auxiliary text.
pub fn dim(text: &str) -> String {
    if use_color() {
        format!("{}{}{}", DIM, text, RESET)
    } else {
        text.to_string()
    }
}

/// One ranked result line: `  1. [0.8123] path/to/doc  content…`
pub fn result_line(rank: usize, score_value: f64, id: &str, content: &str) -> String {
    const PREVIEW: usize = 72;
    let preview: String = if content.chars().count() > PREVIEW {
        let truncated: String = content.chars().take(PREVIEW).collect();
        format!("{}…", truncated)
    } else {
        content.to_string()
    };
    format!(
        "{:>3}. [{}] {}  {}",
        rank,
        score(score_value),
        doc_id(id),
        dim(&preview)
    )
}
