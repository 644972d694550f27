//! Greedy word wrap for caption text.
//!
//! Line breaks are decided by character count, not by measured pixel width:
//! the whole caption is measured once to estimate how many rows it needs, and
//! that estimate fixes a per-line character budget. For a monospace face this
//! tracks the real width closely, but lines are not guaranteed to fit the
//! requested width pixel-exactly, and a single word longer than the budget is
//! kept whole on its own line.

use crate::text::font::FontMetrics;

/// Wrap `caption` into lines no wider than roughly `max_width` pixels.
///
/// Returns no lines for an empty or whitespace-only caption, and the trimmed
/// caption as a single line when it already fits.
pub fn wrap_lines<M: FontMetrics + ?Sized>(
    caption: &str,
    max_width: u32,
    metrics: &M,
) -> Vec<String> {
    let caption = caption.trim();
    if caption.is_empty() {
        return Vec::new();
    }

    let total_width = metrics.measure(caption);
    if total_width <= max_width {
        return vec![caption.to_string()];
    }

    let budget = char_budget(caption.chars().count(), total_width, max_width);
    greedy_lines(caption.split_whitespace(), budget)
}

/// Characters allowed per line for a caption of `char_count` characters that
/// measures `total_width` against a row width of `max_width`.
///
/// The row estimate is `total_width / max_width` rounded, and never below 2:
/// callers only get here when the caption does not fit a single row.
pub fn char_budget(char_count: usize, total_width: u32, max_width: u32) -> usize {
    let max_width = max_width.max(1);
    let rows = (f64::from(total_width) / f64::from(max_width)).round() as usize;
    // Plain rounding gives 1 row for captions up to 1.5x the width, which
    // would leave an overflowing caption on one line. Hold it at 2.
    char_count / rows.max(2)
}

/// First-fit accumulation of `words` into lines of at most `budget` characters.
///
/// A word that would push the line past the budget starts a new line; a word
/// that alone exceeds the budget still gets a line of its own.
pub fn greedy_lines<'a>(words: impl IntoIterator<Item = &'a str>, budget: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut line = String::new();
    let mut line_chars = 0usize;

    for word in words.into_iter().filter(|w| !w.is_empty()) {
        let word_chars = word.chars().count();
        if line_chars > 0 && line_chars + word_chars > budget {
            lines.push(line.trim_end().to_string());
            line.clear();
            line_chars = 0;
        }
        line.push_str(word);
        line.push(' ');
        line_chars += word_chars + 1;
    }

    if line_chars > 0 {
        lines.push(line.trim_end().to_string());
    }
    lines
}

#[cfg(test)]
#[path = "../../tests/unit/text/wrap.rs"]
mod tests;
