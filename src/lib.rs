//! Itinera: clarification tooling for itinerary-planning agents.
//!
//! Turns an agent's loosely formatted clarification questions into a clean
//! list, asks a human operator each one, and hands the answers back as a
//! single text block. The same logic is exposed as agent tools
//! (`human_in_loop_tool`, `hand_off_to_next_tool`) alongside the
//! configuration and agent profiles the itinerary planners are wired from.
//!
//! # Quick Start
//!
//! ```no_run
//! use itinera::prompt::ConsolePrompter;
//! use itinera::questions::extract_and_collect;
//!
//! # fn example() -> itinera::error::Result<()> {
//! let answers = extract_and_collect(
//!     "1. What is your budget?\n2. How many days?",
//!     &ConsolePrompter,
//! )?;
//! println!("{answers}");
//! # Ok(())
//! # }
//! ```

pub mod agent;
pub mod config;
pub mod error;
pub mod prelude;
pub mod prompt;
pub mod questions;
pub mod tools;

#[cfg(feature = "cli")]
pub mod cli;
