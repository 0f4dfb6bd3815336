//! Bulk rebranding of a static site's HTML files.
//!
//! A run walks a directory tree, skips excluded directories (`template` by
//! default), applies an ordered list of regex substitutions to each HTML file
//! and rewrites only the files whose text changed.
//!
//! - **[`core`]**: Pure rule compilation and application. No I/O.
//! - **[`io`]**: Config loading, discovery, whole-file reads and atomic writes.
//!
//! [`run`] ties the two together for the CLI.

pub mod core;
pub mod exit_codes;
pub mod io;
pub mod logging;
pub mod run;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;
