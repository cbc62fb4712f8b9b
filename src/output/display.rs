//! Display functions for command results

use super::formatters::{create_progress_bar, format_duration, puzzle_box};
use crate::commands::{
    AnalysisResult, BatchStatistics, BenchmarkResult, PreprocessResult, SolveResult,
};
use colored::Colorize;

/// Print the result of solving a puzzle
///
/// At most `limit` solutions are listed. With `show_timing`, cull and solve
/// times are printed too.
pub fn print_solve_result(result: &SolveResult, limit: usize, show_timing: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    let labels = result.sides.each_ref().map(String::as_str);
    for line in puzzle_box(labels) {
        println!("  {}", line.bright_yellow().bold());
    }
    println!("{}", "─".repeat(60).cyan());

    if show_timing {
        println!(
            "  Playable words:  {} of {}",
            result.playable_words, result.dictionary_words
        );
        println!("  Cull:            {}", format_duration(result.cull_time));
        println!("  Solve:           {}", format_duration(result.solve_time));
    }

    if result.lines.is_empty() {
        println!("\n{}", "❌ No two-word solutions".red().bold());
        return;
    }

    println!();
    for (i, line) in result.lines.iter().take(limit).enumerate() {
        println!(
            "  {:>4}. {}",
            (i + 1).to_string().bright_black(),
            line.bright_white()
        );
    }
    let hidden = result.lines.len().saturating_sub(limit);
    if hidden > 0 {
        println!("  {}", format!("… and {hidden} more").bright_black());
    }

    println!(
        "\n{}",
        format!("✅ {} solutions", result.lines.len())
            .green()
            .bold()
    );
}

/// Print the result of dictionary analysis
pub fn print_analysis_result(result: &AnalysisResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "DICTIONARY ANALYSIS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Dictionary:".bright_cyan().bold());
    println!("   Playable words:   {}", result.total_words);
    println!("   Text bytes:       {}", result.total_bytes);
    if let Some(puzzle_words) = result.puzzle_words {
        println!(
            "   For this puzzle:  {}",
            puzzle_words.to_string().bright_yellow().bold()
        );
    }

    println!("\n📈 {}", "Words by first letter:".bright_cyan().bold());
    let max_words = result.letters.iter().map(|l| l.words).max().unwrap_or(0);
    for letter in result.letters.iter().filter(|l| l.words > 0) {
        let bar = create_progress_bar(f64::from(letter.words), f64::from(max_words), 30);
        println!(
            "   {}: {} {:6} words {:8} bytes",
            letter.letter,
            bar.green(),
            letter.words,
            letter.bytes
        );
    }

    if let Some(report) = &result.word {
        println!("\n🔎 {}", report.word.to_uppercase().bright_yellow().bold());
        println!("   Letters:  {}", report.letters);
        let verdict = report.verdict.to_string();
        if report.verdict.is_live() {
            println!("   Verdict:  {}", verdict.green());
        } else {
            println!("   Verdict:  {}", verdict.red());
        }
    }
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    let total = result.total_puzzles.max(1) as f64;
    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Puzzles solved:   {}", result.total_puzzles);
    println!(
        "   With solutions:   {} {}",
        result.solved_puzzles,
        format!("({:.1}%)", result.solved_puzzles as f64 / total * 100.0).green()
    );
    println!(
        "   Average found:    {}",
        format!("{:.2}", result.total_solutions as f64 / total)
            .bright_yellow()
            .bold()
    );
    if let Some(best) = &result.best_puzzle {
        println!(
            "   Richest puzzle:   {} ({} solutions)",
            best.bright_white(),
            result.max_solutions
        );
    }
    println!(
        "   Average cull:     {}",
        format_duration(result.average_cull)
    );
    println!(
        "   Average solve:    {}",
        format_duration(result.average_solve)
    );
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Puzzles/second:   {:.1}", result.puzzles_per_second);

    println!("\n📈 {}", "Solutions per puzzle:".bright_cyan().bold());
    let mut lower = 0;
    for (&bound, &count) in &result.distribution {
        let label = match bound {
            0 => "0".to_string(),
            usize::MAX => format!("{lower}+"),
            _ if lower == bound => bound.to_string(),
            _ => format!("{lower}-{bound}"),
        };
        lower = bound.saturating_add(1);

        let pct = count as f64 / total * 100.0;
        let bar = create_progress_bar(pct, 100.0, 40);
        println!("   {label:>7}: {} {count:4} ({pct:5.1}%)", bar.green());
    }
}

/// Print the result of writing a cache
pub fn print_preprocess_result(result: &PreprocessResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "PREPROCESS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n   Word list:   {}", result.words_path.display());
    let cache = result.output_path.display().to_string();
    println!("   Cache:       {}", cache.bright_white().bold());
    println!("   Words:       {}", result.live_words);
    println!("   Text bytes:  {}", result.text_bytes);
    println!("   Cache bytes: {}", result.cache_bytes);
    println!("   Load:        {}", format_duration(result.load_time));
    println!("   Write:       {}", format_duration(result.write_time));
    println!("   Reload:      {}", format_duration(result.reload_time));
    println!("\n{}", "✅ Cache written and verified".green().bold());
}

/// Print batch results, showing up to `top` solutions per puzzle
pub fn print_batch_statistics(stats: &BatchStatistics, top: usize) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BATCH RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    for entry in &stats.entries {
        match &entry.outcome {
            Ok(lines) if lines.is_empty() => println!(
                "\n{:>4}: {}  {}",
                entry.line_no,
                entry.puzzle.bright_white(),
                "no solutions".yellow()
            ),
            Ok(lines) => {
                println!(
                    "\n{:>4}: {}  {}",
                    entry.line_no,
                    entry.puzzle.bright_white().bold(),
                    format!("{} solutions", lines.len()).green()
                );
                for line in lines.iter().take(top) {
                    println!("        {line}");
                }
            }
            Err(e) => println!(
                "\n{:>4}: {}  {}",
                entry.line_no,
                entry.puzzle.bright_white(),
                e.red()
            ),
        }
    }

    let total = stats.entries.len().max(1) as f64;
    println!("\n📊 {}", "Summary".bright_cyan().bold());
    println!("   Puzzles:          {}", stats.entries.len());
    println!(
        "   Solved:           {} {}",
        stats.solved,
        format!("({:.1}%)", stats.solved as f64 / total * 100.0).green()
    );
    if stats.unsolved > 0 {
        println!(
            "   No solution:      {}",
            stats.unsolved.to_string().yellow()
        );
    }
    if stats.invalid > 0 {
        println!("   Invalid:          {}", stats.invalid.to_string().red());
    }
    println!("   Total solutions:  {}", stats.total_solutions);
    println!(
        "   Total time:       {:.2}s",
        stats.total_time.as_secs_f64()
    );
}
