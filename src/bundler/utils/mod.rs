//! Shared helpers for bundle assembly.

pub mod fs;
