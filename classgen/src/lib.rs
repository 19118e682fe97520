//! Library interface for `classgen`.
//!
//! Generates a C++ declaration/definition pair for a named class in the
//! project style: a header guard derived from the class name and an optional
//! namespace path, and a class whose default, copy and move construction and
//! assignment are all deleted.

pub mod app;
pub mod class_name;
pub mod cli;
pub mod error;
pub mod guard;
pub mod logging;
pub mod output;
pub mod render;
pub mod report;
