// Test code uses unwrap/expect for clarity - panics provide good test failure messages
#![allow(clippy::unwrap_used, clippy::expect_used)]

//! End-to-end calculator sessions.
//!
//! Each test feeds a whole session through an in-memory input and captures
//! the output with a buffer print handler.
//!
//! - `transcripts` - exact output of short sessions
//! - `command_files` - `read`, `--script`, and file-sourced errors
//! - `properties` - invariants checked over generated inputs

#[path = "session/common.rs"]
mod common;

#[path = "session/transcripts.rs"]
mod transcripts;

#[path = "session/command_files.rs"]
mod command_files;

#[path = "session/properties.rs"]
mod properties;
