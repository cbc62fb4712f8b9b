//! Command implementations

pub mod analyze;
pub mod batch;
pub mod benchmark;
pub mod preprocess;
pub mod simple;
pub mod solve;

pub use analyze::{AnalysisResult, analyze_dictionary};
pub use batch::{BatchEntry, BatchStatistics, read_puzzle_file, run_batch};
pub use benchmark::{BenchmarkResult, random_puzzles, run_benchmark};
pub use preprocess::{PreprocessResult, preprocess};
pub use simple::run_simple;
pub use solve::{SolveResult, parse_puzzle_args, solve_puzzle};
