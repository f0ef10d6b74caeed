//! Command-line interface: one command per user-facing workflow.

pub mod commands;
