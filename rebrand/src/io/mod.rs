//! Filesystem helpers for the rebrand pass.

pub mod config;
pub mod discover;
pub mod files;
