//! Test helpers shared across the `classgen` workspace.
//!
//! Provides a working-directory guard for tests that exercise the default
//! output location, and small inspectors for generated text.

pub mod cwd;
pub mod text;
