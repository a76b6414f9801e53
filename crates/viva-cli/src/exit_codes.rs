//! Unified exit codes for the viva CLI.
//! These codes are part of the public contract; CI pipelines key off them.

pub const SUCCESS: i32 = 0; // Run completed, verdict excellent
pub const NEEDS_ADJUSTMENTS: i32 = 1; // Run completed, verdict needs adjustments
pub const CONFIG_ERROR: i32 = 2; // Bad config, bad usage, or missing credential
