//! User-facing text written to standard output.
//!
//! Everything here takes a writer so tests can capture the exact bytes the
//! binary would print.

use std::io::{self, Write};

use camino::Utf8Path;

use crate::error::ValidationError;

/// Confirms a written file.
///
/// # Errors
///
/// Returns an [`io::Error`] when writing fails.
pub fn generated<W: Write>(writer: &mut W, path: &Utf8Path) -> io::Result<()> {
    writeln!(writer, "Generated: {path}")
}

/// Closes a successful run.
///
/// # Errors
///
/// Returns an [`io::Error`] when writing fails.
pub fn success<W: Write>(writer: &mut W) -> io::Result<()> {
    writeln!(writer)?;
    writeln!(writer, "Files generated successfully!")
}

/// Reports rejected input along with the rule it broke.
///
/// # Errors
///
/// Returns an [`io::Error`] when writing fails.
pub fn validation_error<W: Write>(writer: &mut W, err: &ValidationError) -> io::Result<()> {
    writeln!(writer, "Error: {err}")?;
    writeln!(writer, "{}", err.hint())
}

/// Writes the usage text shown when the class name is missing.
///
/// # Errors
///
/// Returns an [`io::Error`] when writing fails.
pub fn usage<W: Write>(writer: &mut W, bin_name: &str) -> io::Result<()> {
    writer.write_all(usage_text(bin_name).as_bytes())
}

/// Builds the usage text, including invocation examples.
#[must_use]
pub fn usage_text(bin_name: &str) -> String {
    format!(
        "Usage: {bin_name} <ClassName> [namespace_path]\n\n{}",
        help_footer(bin_name)
    )
}

/// Builds the examples and notes shared by the usage text and `--help`.
#[must_use]
pub fn help_footer(bin_name: &str) -> String {
    format!(
        "{}\n\
         This will generate <ClassName>.h and <ClassName>.cpp in the current directory.\n\
         The namespace_path is used for the header guard only.\n",
        examples_text(bin_name)
    )
}

/// Builds the `Examples:` block.
#[must_use]
pub fn examples_text(bin_name: &str) -> String {
    format!(
        "Examples:\n  \
         {bin_name} MyClass\n  \
         {bin_name} MyClass core/utility\n  \
         {bin_name} MyClass gpu/vulkan/utility\n"
    )
}
