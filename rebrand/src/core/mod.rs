//! Pure text transformation.
//!
//! Nothing in here touches the filesystem: rules are compiled and applied to
//! in-memory strings, so every behaviour is testable without a scratch tree.

pub mod builtin;
pub mod rule;
pub mod summary;
