//! Benchmark command
//!
//! Solves random puzzles in parallel against one shared base dictionary.
//! Each worker culls its own copy, so no state is shared between puzzles.

use crate::core::letters::ALPHABET_LEN;
use crate::core::{LETTERS_PER_SIDE, SIDE_COUNT, Sides};
use crate::dictionary::Dictionary;
use indicatif::{ProgressBar, ProgressStyle};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;
use std::collections::BTreeMap;
use std::time::{Duration, Instant};

/// Upper bounds of the solution-count buckets reported by the benchmark
pub const SOLUTION_BUCKETS: [usize; 6] = [0, 1, 5, 20, 100, usize::MAX];

/// Result of a benchmark run
pub struct BenchmarkResult {
    pub total_puzzles: usize,
    pub solved_puzzles: usize,
    pub total_solutions: usize,
    pub max_solutions: usize,
    pub best_puzzle: Option<String>,
    /// Puzzle count per entry of [`SOLUTION_BUCKETS`]
    pub distribution: BTreeMap<usize, usize>,
    pub average_cull: Duration,
    pub average_solve: Duration,
    pub duration: Duration,
    pub puzzles_per_second: f64,
}

struct PuzzleRun {
    puzzle: String,
    solutions: usize,
    cull_time: Duration,
    solve_time: Duration,
}

/// Random puzzle: twelve distinct letters dealt onto four sides
#[must_use]
pub fn random_puzzle<R: Rng + ?Sized>(rng: &mut R) -> String {
    let mut alphabet: Vec<u8> = (b'a'..=b'z').collect();
    debug_assert_eq!(alphabet.len(), ALPHABET_LEN);
    alphabet.shuffle(rng);

    alphabet[..SIDE_COUNT * LETTERS_PER_SIDE]
        .chunks(LETTERS_PER_SIDE)
        .map(|side| String::from_utf8_lossy(side).into_owned())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Generate `count` random puzzles, reproducibly when `seed` is given
#[must_use]
pub fn random_puzzles(count: usize, seed: Option<u64>) -> Vec<String> {
    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_rng(&mut rand::rng()),
    };
    (0..count).map(|_| random_puzzle(&mut rng)).collect()
}

/// Solve every puzzle in parallel and summarize
///
/// # Panics
/// Panics if a generated puzzle is malformed, which would be a generator bug.
pub fn run_benchmark(
    base: &Dictionary,
    puzzles: &[String],
    show_progress: bool,
) -> BenchmarkResult {
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

    let start = Instant::now();
    let runs: Vec<PuzzleRun> = puzzles
        .par_iter()
        .map(|puzzle| {
            let sides: Sides = puzzle
                .parse()
                .unwrap_or_else(|e| panic!("generated puzzle '{puzzle}' is invalid: {e}"));

            let cull_start = Instant::now();
            let culled = base.culled(&sides);
            let cull_time = cull_start.elapsed();

            let solve_start = Instant::now();
            let solutions = culled.solve(&sides).map_or(0, |set| set.len());
            let solve_time = solve_start.elapsed();

            pb.inc(1);
            PuzzleRun {
                puzzle: puzzle.clone(),
                solutions,
                cull_time,
                solve_time,
            }
        })
        .collect();
    pb.finish_with_message("Complete!");

    let duration = start.elapsed();
    summarize(&runs, duration)
}

fn summarize(runs: &[PuzzleRun], duration: Duration) -> BenchmarkResult {
    let mut distribution: BTreeMap<usize, usize> =
        SOLUTION_BUCKETS.iter().map(|&bucket| (bucket, 0)).collect();
    for run in runs {
        let bucket = SOLUTION_BUCKETS
            .iter()
            .copied()
            .find(|&bound| run.solutions <= bound)
            .unwrap_or(usize::MAX);
        *distribution.entry(bucket).or_insert(0) += 1;
    }

    let best = runs.iter().max_by_key(|run| run.solutions);
    let total = runs.len();
    let divisor = u32::try_from(total.max(1)).unwrap_or(u32::MAX);

    BenchmarkResult {
        total_puzzles: total,
        solved_puzzles: runs.iter().filter(|run| run.solutions > 0).count(),
        total_solutions: runs.iter().map(|run| run.solutions).sum(),
        max_solutions: best.map_or(0, |run| run.solutions),
        best_puzzle: best
            .filter(|run| run.solutions > 0)
            .map(|run| run.puzzle.clone()),
        distribution,
        average_cull: runs.iter().map(|run| run.cull_time).sum::<Duration>() / divisor,
        average_solve: runs.iter().map(|run| run.solve_time).sum::<Duration>() / divisor,
        duration,
        puzzles_per_second: total as f64 / duration.as_secs_f64().max(f64::EPSILON),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::tests::test_dictionary;

    #[test]
    fn random_puzzles_are_valid() {
        for puzzle in random_puzzles(50, Some(7)) {
            let sides: Sides = puzzle.parse().unwrap();
            assert_eq!(sides.all_letters().count_ones(), 12);
        }
    }

    #[test]
    fn seeded_puzzles_repeat() {
        assert_eq!(random_puzzles(5, Some(42)), random_puzzles(5, Some(42)));
        assert_ne!(random_puzzles(5, Some(42)), random_puzzles(5, Some(43)));
    }

    #[test]
    fn benchmark_counts_known_puzzles() {
        let dict = test_dictionary();
        let puzzles = vec![
            "btn akd oes mir".to_string(),
            "btn akd oes mig".to_string(),
            "xyz uvw pqr cfh".to_string(),
        ];
        let result = run_benchmark(&dict, &puzzles, false);

        assert_eq!(result.total_puzzles, 3);
        assert_eq!(result.solved_puzzles, 2);
        assert_eq!(result.total_solutions, 2);
        assert_eq!(result.max_solutions, 1);
        assert_eq!(result.distribution[&0], 1);
        assert_eq!(result.distribution[&1], 2);
    }

    #[test]
    fn distribution_sums_to_total() {
        let dict = test_dictionary();
        let puzzles = random_puzzles(20, Some(1));
        let result = run_benchmark(&dict, &puzzles, false);
        assert_eq!(result.distribution.values().sum::<usize>(), 20);
    }

    #[test]
    fn empty_benchmark() {
        let result = run_benchmark(&test_dictionary(), &[], false);
        assert_eq!(result.total_puzzles, 0);
        assert!(result.best_puzzle.is_none());
    }
}
