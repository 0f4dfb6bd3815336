//! Stable exit codes for the rebrand CLI.

/// Run completed (whether or not any file changed).
pub const OK: i32 = 0;
/// Invalid config or rules, or an I/O failure aborted the run.
pub const FAILED: i32 = 1;
