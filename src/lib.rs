//! Letterbox Solver
//!
//! A Letter Boxed solver built on a bit-packed dictionary: every word is one
//! `u64` describing its text span, length and letter set, grouped into runs
//! by first letter. Puzzles are solved by culling a private copy of the
//! dictionary down to playable words, then pairing words that chain on a
//! shared letter and together cover all twelve.
//!
//! # Quick Start
//!
//! ```rust
//! use letterbox_solver::core::Sides;
//! use letterbox_solver::dictionary::Dictionary;
//!
//! let dict = Dictionary::from_text(b"bearskin\nnematode\nsmoked\n".to_vec()).unwrap();
//! let sides: Sides = "btn akd oes mir".parse().unwrap();
//!
//! let culled = dict.culled(&sides);
//! let mut solutions = culled.solve(&sides).unwrap();
//! solutions.sort(&culled);
//! assert_eq!(solutions.render(&culled), vec!["bearskin -> nematode"]);
//! ```

// Core domain types
pub mod core;

// Bit-packed dictionary and its binary cache
pub mod dictionary;

// Two-word search and ranking
pub mod solver;

// Setup-once, solve-many facade
pub mod config;
pub mod engine;
pub mod errors;

// Logging backend
pub mod log;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
