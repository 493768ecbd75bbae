//! Binary-local application orchestration.
//!
//! `main.rs` only parses arguments and installs logging; this module maps
//! each subcommand onto the library flows.

pub(crate) mod entry;
