//! Formatting utilities for terminal output

use std::time::Duration;

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Human-friendly duration: microseconds, milliseconds or seconds
#[must_use]
pub fn format_duration(duration: Duration) -> String {
    let micros = duration.as_micros();
    if micros < 1_000 {
        format!("{micros}µs")
    } else if micros < 1_000_000 {
        format!("{:.2}ms", duration.as_secs_f64() * 1_000.0)
    } else {
        format!("{:.2}s", duration.as_secs_f64())
    }
}

/// Draw the puzzle as a box, top side first, then right, bottom and left
///
/// ```text
///     b   t   n
///   ┌───────────┐
/// m │           │ a
/// i │           │ k
/// r │           │ d
///   └───────────┘
///     o   e   s
/// ```
#[must_use]
pub fn puzzle_box(sides: [&str; 4]) -> Vec<String> {
    let letters = |side: &str| -> Vec<char> { side.chars().collect() };
    let (top, right, bottom, left) = (
        letters(sides[0]),
        letters(sides[1]),
        letters(sides[2]),
        letters(sides[3]),
    );
    let spaced = |row: &[char]| -> String {
        row.iter()
            .map(char::to_string)
            .collect::<Vec<_>>()
            .join("   ")
    };

    let mut lines = Vec::with_capacity(7);
    lines.push(format!("    {}", spaced(&top)));
    lines.push("  ┌───────────┐".to_string());
    for i in 0..3 {
        let l = left.get(i).copied().unwrap_or(' ');
        let r = right.get(i).copied().unwrap_or(' ');
        lines.push(format!("{l} │           │ {r}"));
    }
    lines.push("  └───────────┘".to_string());
    lines.push(format!("    {}", spaced(&bottom)));
    lines
}
