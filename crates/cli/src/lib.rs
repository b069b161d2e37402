//! dmenu-hist CLI Library
//!
//! This crate provides the command-line interface for dmenu-hist. It parses
//! the invocation, sets up logging and drives the launcher pipeline from
//! the search path to the launched program.
//!
//! # Architecture
//!
//! - [`cli_args`]: Command-line argument parsing and conversion into a configuration
//! - [`launcher`]: The sequential pipeline from scanning to execution
//!
//! # Examples
//!
//! The CLI binary (`dmenu-hist`) can be used in several ways:
//!
//! ```bash
//! # Offer all programs through dmenu, most used first
//! dmenu-hist
//!
//! # Forward options to dmenu
//! dmenu-hist -- -i -l 20 -p run:
//!
//! # Time everything except the selector and print the candidate list
//! dmenu-hist --noop --verbose
//!
//! # Inspect the usage history
//! dmenu-hist --edit
//! ```

pub mod cli_args;
pub mod launcher;
