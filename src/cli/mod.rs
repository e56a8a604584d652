//! CLI subcommand implementations for the asnlist binary.

pub mod convert_cmd;
pub mod output;
pub mod sync_cmd;
