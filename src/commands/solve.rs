//! Puzzle solving command
//!
//! Solves one puzzle against the base dictionary, timing the cull and the
//! search separately.

use crate::core::{SIDE_COUNT, Sides};
use crate::dictionary::Dictionary;
use std::time::{Duration, Instant};

/// Result of solving a puzzle
pub struct SolveResult {
    pub sides: [String; SIDE_COUNT],
    pub lines: Vec<String>,
    /// Pairs found before duplicate single-word lines were dropped
    pub raw_solutions: usize,
    pub dictionary_words: usize,
    pub playable_words: usize,
    pub cull_time: Duration,
    pub solve_time: Duration,
}

/// Parse puzzle arguments: four sides, or one string holding all four
///
/// # Errors
/// Returns a message describing the malformed input.
///
/// # Examples
/// ```
/// use letterbox_solver::commands::parse_puzzle_args;
///
/// let (sides, _) = parse_puzzle_args(&["btn akd oes mir".to_string()]).unwrap();
/// assert_eq!(sides.all_letters().count_ones(), 12);
/// ```
pub fn parse_puzzle_args(args: &[String]) -> Result<(Sides, [String; SIDE_COUNT]), String> {
    let parts: Vec<&str> = args.iter().flat_map(|arg| arg.split_whitespace()).collect();
    let raw: [&str; SIDE_COUNT] = parts
        .as_slice()
        .try_into()
        .map_err(|_| format!("Expected {SIDE_COUNT} sides, got {}", parts.len()))?;
    let sides = Sides::parse(raw).map_err(|e| format!("Invalid puzzle: {e}"))?;
    Ok((sides, raw.map(str::to_lowercase)))
}

/// Cull the base dictionary for `sides`, solve, rank and render
///
/// # Errors
/// Returns an error if the sides fail validation.
pub fn solve_puzzle(
    base: &Dictionary,
    sides: &Sides,
    labels: [String; SIDE_COUNT],
) -> Result<SolveResult, String> {
    let start = Instant::now();
    let culled = base.culled(sides);
    let cull_time = start.elapsed();

    let start = Instant::now();
    let mut solutions = culled.solve(sides).map_err(|e| e.to_string())?;
    solutions.sort(&culled);
    let solve_time = start.elapsed();

    Ok(SolveResult {
        sides: labels,
        lines: solutions.render(&culled),
        raw_solutions: solutions.len(),
        dictionary_words: base.len(),
        playable_words: culled.len(),
        cull_time,
        solve_time,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::tests::test_dictionary;

    fn args(parts: &[&str]) -> Vec<String> {
        parts.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn parse_four_arguments() {
        let (sides, labels) = parse_puzzle_args(&args(&["BTN", "akd", "oes", "mir"])).unwrap();
        assert_eq!(sides.all_letters().count_ones(), 12);
        assert_eq!(labels[0], "btn");
    }

    #[test]
    fn parse_rejects_wrong_count() {
        let err = parse_puzzle_args(&args(&["btn", "akd", "oes"])).unwrap_err();
        assert_eq!(err, "Expected 4 sides, got 3");
    }

    #[test]
    fn parse_rejects_overlap() {
        let err = parse_puzzle_args(&args(&["btn akd oes mib"])).unwrap_err();
        assert!(err.starts_with("Invalid puzzle"));
    }

    #[test]
    fn solve_reports_counts() {
        let dict = test_dictionary();
        let (sides, labels) = parse_puzzle_args(&args(&["btn", "akd", "oes", "mir"])).unwrap();
        let result = solve_puzzle(&dict, &sides, labels).unwrap();

        assert_eq!(result.lines, vec!["bearskin -> nematode"]);
        assert_eq!(result.raw_solutions, 1);
        assert_eq!(result.dictionary_words, 32);
        assert_eq!(result.playable_words, 9);
    }
}
