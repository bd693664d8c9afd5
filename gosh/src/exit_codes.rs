//! Process exit codes for the `gosh` binary.

/// Session ended through `exit` or end of input.
pub const OK: i32 = 0;
/// Startup failed (bad flags or config) or a stream fault ended the session.
pub const INVALID: i32 = 1;
