//! Batch command
//!
//! Solves every puzzle listed in a file, one per line. Blank lines and lines
//! starting with `#` are skipped.

use super::solve::{parse_puzzle_args, solve_puzzle};
use crate::dictionary::Dictionary;
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use std::fs;
use std::path::Path;
use std::time::{Duration, Instant};

/// Outcome for one puzzle line
#[derive(Debug, Clone)]
pub struct BatchEntry {
    pub line_no: usize,
    pub puzzle: String,
    pub outcome: Result<Vec<String>, String>,
    pub duration: Duration,
}

/// Statistics over a whole batch
#[derive(Debug)]
pub struct BatchStatistics {
    pub entries: Vec<BatchEntry>,
    pub solved: usize,
    pub unsolved: usize,
    pub invalid: usize,
    pub total_solutions: usize,
    pub total_time: Duration,
}

/// Read `(line number, puzzle)` pairs from a puzzle file
///
/// # Errors
/// Returns an error if the file cannot be read.
pub fn read_puzzle_file(path: &Path) -> Result<Vec<(usize, String)>, String> {
    let content =
        fs::read_to_string(path).map_err(|e| format!("Failed to read {}: {e}", path.display()))?;
    Ok(parse_puzzle_lines(&content))
}

fn parse_puzzle_lines(content: &str) -> Vec<(usize, String)> {
    content
        .lines()
        .enumerate()
        .map(|(i, line)| (i + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty() && !line.starts_with('#'))
        .map(|(line_no, line)| (line_no, line.to_string()))
        .collect()
}

/// Solve each puzzle in parallel, keeping file order in the result
pub fn run_batch(
    base: &Dictionary,
    puzzles: &[(usize, String)],
    show_progress: bool,
) -> BatchStatistics {
    let pb = if show_progress {
        ProgressBar::new(puzzles.len() as u64)
    } else {
        ProgressBar::hidden()
    };
    if let Ok(style) = ProgressStyle::default_bar()
        .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
    {
        pb.set_style(style.progress_chars("█▓▒░"));
    }

    let total_start = Instant::now();
    let entries: Vec<BatchEntry> = puzzles
        .par_iter()
        .map(|(line_no, puzzle)| {
            let start = Instant::now();
            let outcome = parse_puzzle_args(std::slice::from_ref(puzzle))
                .and_then(|(sides, labels)| solve_puzzle(base, &sides, labels))
                .map(|result| result.lines);
            pb.inc(1);
            BatchEntry {
                line_no: *line_no,
                puzzle: puzzle.clone(),
                outcome,
                duration: start.elapsed(),
            }
        })
        .collect();
    pb.finish_with_message("Complete!");

    let solved = entries
        .iter()
        .filter(|e| matches!(&e.outcome, Ok(lines) if !lines.is_empty()))
        .count();
    let invalid = entries.iter().filter(|e| e.outcome.is_err()).count();

    BatchStatistics {
        solved,
        unsolved: entries.len() - solved - invalid,
        invalid,
        total_solutions: entries
            .iter()
            .filter_map(|e| e.outcome.as_ref().ok())
            .map(Vec::len)
            .sum(),
        total_time: total_start.elapsed(),
        entries,
    }
}
