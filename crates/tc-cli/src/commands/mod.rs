//! CLI subcommand implementations.

pub mod dry;
pub mod scan;
