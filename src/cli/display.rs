// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Terminal display for the lexis CLI.
//!
//! OneDark for dark terminals, One Light for light ones. Detection tries
//! `LEXIS_THEME` first, then `COLORFGBG`, then macOS system appearance, then
//! falls back to dark. `NO_COLOR` and non-TTY stdout turn colors off entirely,
//! so piped output stays plain.
//!
//! # Theme detection order
//!
//! 1. `LEXIS_THEME` env var ("dark" or "light")
//! 2. `COLORFGBG` env var (terminal background hint)
//! 3. macOS appearance (via defaults read)
//! 4. Default to dark theme

use std::sync::OnceLock;

use lexis::{edit_distance, normalize, LoadStats, Lookup};

// Width between │ and │ (excluding border chars)
pub const BOX_WIDTH: usize = 72;

// ═══════════════════════════════════════════════════════════════════════════
// THEME DETECTION
// ═══════════════════════════════════════════════════════════════════════════

/// Terminal color theme
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Dark,
    Light,
}

static THEME: OnceLock<Theme> = OnceLock::new();

fn parse_theme(value: &str) -> Option<Theme> {
    match value.to_lowercase().as_str() {
        "light" | "l" => Some(Theme::Light),
        "dark" | "d" => Some(Theme::Dark),
        _ => None,
    }
}

/// `COLORFGBG` is "fg;bg"; backgrounds 7 and up (except 8) are light.
fn theme_from_colorfgbg(value: &str) -> Option<Theme> {
    let bg = value.split(';').next_back()?.parse::<u8>().ok()?;
    if bg >= 7 && bg != 8 {
        Some(Theme::Light)
    } else {
        None
    }
}

fn detect_theme() -> Theme {
    if let Some(theme) = std::env::var("LEXIS_THEME").ok().as_deref().and_then(parse_theme) {
        return theme;
    }

    if let Some(theme) = std::env::var("COLORFGBG")
        .ok()
        .as_deref()
        .and_then(theme_from_colorfgbg)
    {
        return theme;
    }

    #[cfg(target_os = "macos")]
    {
        if let Ok(output) = std::process::Command::new("defaults")
            .args(["read", "-g", "AppleInterfaceStyle"])
            .output()
        {
            // "Dark" means dark mode; absence means light mode
            let stdout = String::from_utf8_lossy(&output.stdout);
            if !stdout.contains("Dark") && output.status.success() {
                return Theme::Light;
            }
        }
    }

    Theme::Dark
}

/// Get the current theme (cached)
pub fn theme() -> Theme {
    *THEME.get_or_init(detect_theme)
}

// ═══════════════════════════════════════════════════════════════════════════
// ONEDARK / ONE LIGHT COLOR PALETTES (True Color)
// ═══════════════════════════════════════════════════════════════════════════

fn rgb(r: u8, g: u8, b: u8) -> String {
    format!("\x1b[38;2;{};{};{}m", r, g, b)
}

pub mod colors {
    pub const RESET: &str = "\x1b[0m";
    pub const BOLD: &str = "\x1b[1m";
}

pub use colors::*;

mod onedark {
    pub const RED: (u8, u8, u8) = (224, 108, 117); // #e06c75
    pub const GREEN: (u8, u8, u8) = (152, 195, 121); // #98c379
    pub const YELLOW: (u8, u8, u8) = (229, 192, 123); // #e5c07b
    pub const CYAN: (u8, u8, u8) = (86, 182, 194); // #56b6c2
    pub const WHITE: (u8, u8, u8) = (171, 178, 191); // #abb2bf
    pub const GRAY: (u8, u8, u8) = (92, 99, 112); // #5c6370
    pub const BRIGHT_CYAN: (u8, u8, u8) = (102, 217, 239);
}

mod onelight {
    pub const RED: (u8, u8, u8) = (228, 86, 73); // #e45649
    pub const GREEN: (u8, u8, u8) = (80, 161, 79); // #50a14f
    pub const YELLOW: (u8, u8, u8) = (193, 132, 1); // #c18401
    pub const CYAN: (u8, u8, u8) = (1, 132, 188); // #0184bc
    pub const WHITE: (u8, u8, u8) = (56, 58, 66); // #383a42
    pub const GRAY: (u8, u8, u8) = (160, 161, 167); // #a0a1a7
    pub const BRIGHT_CYAN: (u8, u8, u8) = (1, 112, 158);
}

macro_rules! theme_color {
    ($name:ident) => {
        #[allow(non_snake_case)]
        pub fn $name() -> String {
            let (r, g, b) = match theme() {
                Theme::Dark => onedark::$name,
                Theme::Light => onelight::$name,
            };
            rgb(r, g, b)
        }
    };
}

theme_color!(RED);
theme_color!(GREEN);
theme_color!(YELLOW);
theme_color!(CYAN);
theme_color!(WHITE);
theme_color!(GRAY);
theme_color!(BRIGHT_CYAN);

// ═══════════════════════════════════════════════════════════════════════════
// CORE UTILITIES
// ═══════════════════════════════════════════════════════════════════════════

/// Colors only on a TTY, and never under `NO_COLOR`.
pub fn use_colors() -> bool {
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }
    atty::is(atty::Stream::Stdout)
}

/// Apply theme color with optional modifiers
pub fn themed(color_fn: fn() -> String, modifiers: &[&str], text: &str) -> String {
    if use_colors() {
        format!("{}{}{}{}", modifiers.join(""), color_fn(), text, RESET)
    } else {
        text.to_string()
    }
}

/// Visible length, skipping ANSI escapes
pub fn visible_len(s: &str) -> usize {
    let mut in_escape = false;
    let mut len = 0;
    for c in s.chars() {
        if c == '\x1b' {
            in_escape = true;
        } else if in_escape && c == 'm' {
            in_escape = false;
        } else if !in_escape {
            len += 1;
        }
    }
    len
}

/// Greedy word wrap on spaces. Words longer than `width` get a line to themselves.
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();
    for word in text.split_whitespace() {
        let needed = if current.is_empty() {
            word.chars().count()
        } else {
            current.chars().count() + 1 + word.chars().count()
        };
        if needed > width && !current.is_empty() {
            lines.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(word);
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

// ═══════════════════════════════════════════════════════════════════════════
// BOX DRAWING
// ═══════════════════════════════════════════════════════════════════════════

/// │ content          │
pub fn row(content: &str) {
    let border = GRAY();
    let pad = BOX_WIDTH.saturating_sub(visible_len(content));
    if use_colors() {
        println!("{}│{}{}{}{}│{}", border, RESET, content, " ".repeat(pad), border, RESET);
    } else {
        println!("│{}{}│", content, " ".repeat(pad));
    }
}

/// ┌─ LABEL ──────────┐
pub fn section_top(label: &str) {
    let colored_label = themed(CYAN, &[BOLD], label);
    let label_part = format!("─ {} ", colored_label);
    let remaining = BOX_WIDTH.saturating_sub(visible_len(&label_part));
    if use_colors() {
        let border = GRAY();
        println!("{}┌{}{}{}{}┐{}", border, RESET, label_part, border, "─".repeat(remaining), RESET);
    } else {
        println!("┌{}{}┐", label_part, "─".repeat(remaining));
    }
}

/// └──────────────────┘
pub fn section_bot() {
    if use_colors() {
        println!("{}└{}┘{}", GRAY(), "─".repeat(BOX_WIDTH), RESET);
    } else {
        println!("└{}┘", "─".repeat(BOX_WIDTH));
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// SEMANTIC FORMATTERS
// ═══════════════════════════════════════════════════════════════════════════

/// Distance 1 is green, 2 yellow, anything further red.
pub fn distance_badge(distance: usize) -> String {
    let label = format!("d={}", distance);
    let color: fn() -> String = match distance {
        0 | 1 => GREEN,
        2 => YELLOW,
        _ => RED,
    };
    themed(color, &[], &label)
}

pub fn print_lookup(word: &str, result: &Lookup) {
    match result {
        Lookup::Found { definitions, .. } => {
            section_top(&normalize(word));
            for (i, definition) in definitions.iter().enumerate() {
                let number = themed(BRIGHT_CYAN, &[BOLD], &format!("{:>2}.", i + 1));
                let body_width = BOX_WIDTH.saturating_sub(6);
                for (j, line) in wrap(definition, body_width).iter().enumerate() {
                    if j == 0 {
                        row(&format!(" {} {}", number, themed(WHITE, &[], line)));
                    } else {
                        row(&format!("     {}", themed(WHITE, &[], line)));
                    }
                }
            }
            section_bot();
        }
        Lookup::NotFound => {
            println!("{}", themed(RED, &[BOLD], &format!("'{}' not found", word)));
        }
    }
}

pub fn print_suggestions(prefix: &str, words: &[String]) {
    if words.is_empty() {
        println!("{}", themed(GRAY, &[], &format!("no words start with '{}'", prefix)));
        return;
    }
    for word in words {
        println!("{}", word);
    }
}

/// Corrections with their distance from the query.
pub fn print_corrections(term: &str, words: &[String]) {
    if words.is_empty() {
        println!("{}", themed(GRAY, &[], &format!("no corrections for '{}'", term)));
        return;
    }
    let query = normalize(term);
    let width = words.iter().map(|w| w.chars().count()).max().unwrap_or(0);
    for word in words {
        let padding = " ".repeat(width - word.chars().count());
        println!("{}{}  {}", word, padding, distance_badge(edit_distance(&query, word)));
    }
}

pub fn print_stats(dataset: &str, lexicon_words: usize, load: &LoadStats) {
    section_top("Dataset");
    row(&format!(" {:<16}{}", "file", themed(WHITE, &[], dataset)));
    row(&format!(" {:<16}{}", "words", themed(GREEN, &[BOLD], &lexicon_words.to_string())));
    row(&format!(" {:<16}{}", "entries", themed(GREEN, &[BOLD], &load.entries.to_string())));
    row(&format!(" {:<16}{}", "lines", load.lines));
    row(&format!(" {:<16}{}", "blank lines", themed(GRAY, &[], &load.blank_lines.to_string())));
    let skipped = load.skipped_records.to_string();
    let skipped = if load.skipped_records > 0 {
        themed(YELLOW, &[], &skipped)
    } else {
        themed(GRAY, &[], &skipped)
    };
    row(&format!(" {:<16}{}", "skipped", skipped));
    section_bot();
}

// ═══════════════════════════════════════════════════════════════════════════
// TESTS
// ═══════════════════════════════════════════════════════════════════════════
