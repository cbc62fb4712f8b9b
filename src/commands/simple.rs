//! Simple interactive CLI mode
//!
//! Text-based puzzle loop without TUI

use super::solve::{SolveResult, parse_puzzle_args, solve_puzzle};
use crate::dictionary::Dictionary;
use crate::output::print_solve_result;
use colored::Colorize;
use std::io::{self, Write};

/// Solutions shown per puzzle before `more` is needed
const PAGE_SIZE: usize = 20;

/// Run the simple interactive CLI mode
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input.
pub fn run_simple(base: &Dictionary) -> Result<(), String> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║            Letter Boxed Solver - Interactive Mode            ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!("Dictionary: {} playable words\n", base.len());
    println!("Enter a puzzle as four sides of three letters, e.g. 'btn akd oes mir'.");
    println!("Commands: 'more' to list every solution, 'quit' to exit\n");

    let mut last: Option<SolveResult> = None;

    loop {
        let Some(input) = get_user_input("Puzzle")? else {
            println!("\n👋 Goodbye!\n");
            return Ok(());
        };

        match input.to_lowercase().as_str() {
            "" => {}
            "quit" | "q" | "exit" => {
                println!("\n👋 Goodbye!\n");
                return Ok(());
            }
            "more" | "m" => match &last {
                Some(result) => print_solve_result(result, usize::MAX, false),
                None => println!("Nothing solved yet!\n"),
            },
            "help" | "h" => {
                println!("  <s1> <s2> <s3> <s4>  solve a puzzle");
                println!("  more                 list every solution of the last puzzle");
                println!("  quit                 exit\n");
            }
            line => match parse_puzzle_args(&[line.to_string()])
                .and_then(|(sides, labels)| solve_puzzle(base, &sides, labels))
            {
                Ok(result) => {
                    print_solve_result(&result, PAGE_SIZE, true);
                    last = Some(result);
                }
                Err(e) => println!("{} {e}\n", "❌".red()),
            },
        }
    }
}

/// Get user input with a prompt; `None` on end of input
fn get_user_input(prompt: &str) -> Result<Option<String>, String> {
    print!("{prompt}: ");
    io::stdout().flush().map_err(|e| e.to_string())?;

    let mut input = String::new();
    let read = io::stdin()
        .read_line(&mut input)
        .map_err(|e| e.to_string())?;

    Ok((read > 0).then(|| input.trim().to_string()))
}
