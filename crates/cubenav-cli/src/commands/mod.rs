//! CLI command implementations.

pub mod classify;
pub mod run;
pub mod simulate;
