//! Command handlers for CLI subcommands
//!
//! This module contains the implementation logic for each CLI subcommand.

mod bump;
mod compare;
mod completions;
mod config;
mod format;
mod sort;
mod utils;
mod validate;

pub use bump::handle_bump;
pub use compare::handle_compare;
pub use completions::handle_completions;
pub use config::handle_config;
pub use format::handle_format;
pub use sort::handle_sort;
pub use validate::handle_validate;
