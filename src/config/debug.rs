//! Debugging feature flags.
//!
//! Toggle individual diagnostics here; they are additionally gated behind
//! `cfg(debug_assertions)` at every use site so release builds stay quiet.

/// Emit accept/discard diagnostics for every completed query response.
pub const PRINT_QUERY_EVENTS: bool = false;

/// Emit UI interaction logs (ticker edits, filter captures).
pub const PRINT_UI_INTERACTIONS: bool = true;

/// Emit shutdown messages.
pub const PRINT_SHUTDOWN: bool = false;
