//! CLI subcommand modules.
//!
//! This module contains the implementations for all ronda CLI subcommands.

pub(crate) mod analyze;
pub(crate) mod rules;
pub(crate) mod strings;
