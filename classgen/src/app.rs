//! The generation pipeline: validate, build the guard, render, write.
//!
//! Every validation step runs before the output directory is touched, so a
//! rejected name never leaves anything on disk.

use std::io::Write;

use camino::Utf8PathBuf;
use tracing::{debug, warn};

use crate::class_name::ClassName;
use crate::cli::Args;
use crate::error::ClassgenError;
use crate::guard::HeaderGuard;
use crate::output::OutputDir;
use crate::render::Skeleton;
use crate::report;

/// Runs one generation, reporting progress to `out`.
///
/// Returns the paths written, declaration first.
///
/// # Errors
///
/// Returns [`ClassgenError::Validation`] before any filesystem access when
/// the class name or an extension is rejected, [`ClassgenError::Io`] when a
/// write fails and [`ClassgenError::Report`] when `out` cannot be written.
pub fn generate<W: Write>(args: &Args, out: &mut W) -> Result<Vec<Utf8PathBuf>, ClassgenError> {
    let class_name = ClassName::parse(&args.class_name)?;
    let extensions = args.extensions.validate()?;
    debug!(class_name = %class_name, "validated class name");

    let guard = HeaderGuard::build(&class_name, &args.namespace());
    if !guard.is_identifier() {
        warn!(guard = %guard, "header guard is not a valid preprocessor identifier");
    }
    debug!(guard = %guard, "built header guard");

    let skeleton = Skeleton::render(&class_name, &guard, &extensions);
    let out_dir = OutputDir::open(&args.out_dir)?;

    let mut written = Vec::with_capacity(2);
    for file in skeleton.files() {
        let path = out_dir.write_file(file)?;
        report::generated(out, &path).map_err(ClassgenError::Report)?;
        written.push(path);
    }
    report::success(out).map_err(ClassgenError::Report)?;
    Ok(written)
}
