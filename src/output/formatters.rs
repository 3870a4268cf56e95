//! Formatting utilities for terminal output

use crate::core::{Clue, Mark};
use colored::Colorize;

/// Render a clue as coloured letter tiles
#[must_use]
pub fn clue_tiles(clue: &Clue) -> String {
    clue.marks()
        .iter()
        .map(|&mark| {
            let tile = format!(" {} ", (mark.letter() as char).to_ascii_uppercase());
            match mark {
                Mark::Exact(_) => tile.black().on_green().bold().to_string(),
                Mark::Present(_) => tile.black().on_yellow().bold().to_string(),
                Mark::Absent(_) => tile.white().on_bright_black().to_string(),
            }
        })
        .collect()
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    let filled = if max > 0.0 {
        // Cast is safe: values are clamped to [0, width]
        ((value / max).clamp(0.0, 1.0) * width as f64) as usize
    } else {
        0
    };
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Bar for `bits` out of a maximum of `max_bits`
#[must_use]
pub fn entropy_bar(bits: f64, max_bits: f64, width: usize) -> String {
    create_progress_bar(bits, max_bits, width)
}

/// Space separated word list, upper-cased, cut off after `limit` entries
#[must_use]
pub fn word_preview<'a, I>(words: I, limit: usize) -> String
where
    I: IntoIterator<Item = &'a str>,
{
    let mut iter = words.into_iter();
    let shown: Vec<String> = iter.by_ref().take(limit).map(str::to_uppercase).collect();
    let rest = iter.count();

    if rest == 0 {
        shown.join(" ")
    } else {
        format!("{} … (+{rest} more)", shown.join(" "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn progress_bar_empty() {
        assert_eq!(create_progress_bar(0.0, 100.0, 10), "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        assert_eq!(create_progress_bar(100.0, 100.0, 10), "██████████");
    }

    #[test]
    fn progress_bar_half() {
        assert_eq!(create_progress_bar(50.0, 100.0, 10), "█████░░░░░");
    }

    #[test]
    fn progress_bar_clamps() {
        assert_eq!(create_progress_bar(250.0, 100.0, 4), "████");
        assert_eq!(create_progress_bar(-1.0, 100.0, 4), "░░░░");
        assert_eq!(create_progress_bar(1.0, 0.0, 4), "░░░░");
    }

    #[test]
    fn entropy_bar_scales_to_max() {
        assert_eq!(entropy_bar(1.0, 2.0, 4), "██░░");
    }

    #[test]
    fn word_preview_truncates() {
        assert_eq!(word_preview(["apple", "angle"], 5), "APPLE ANGLE");
        assert_eq!(
            word_preview(["apple", "angle", "ample", "amble"], 2),
            "APPLE ANGLE … (+2 more)"
        );
        assert_eq!(word_preview(std::iter::empty(), 3), "");
    }
}
