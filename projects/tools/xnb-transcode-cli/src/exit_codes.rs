//! Process exit statuses.

/// The batch ran to completion. Individual files may still have failed unless
/// `--strict` was passed.
pub const OK: i32 = 0;

/// Invalid arguments, or an unexpected error outside the batch.
pub const INVALID: i32 = 1;

/// The input root was missing or unreadable; nothing was processed.
pub const ABORTED: i32 = 2;

/// The batch completed under `--strict` but at least one file failed.
pub const FAILURES: i32 = 3;
