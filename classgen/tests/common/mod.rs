//! Shared helpers for `classgen` integration tests.

use assert_cmd::Command;
use camino::{Utf8Path, Utf8PathBuf};
use cap_std::ambient_authority;
use cap_std::fs_utf8::Dir;
use tempfile::TempDir;

/// Builds a command for the compiled `classgen` binary running in `cwd`.
pub(crate) fn classgen_in(cwd: &Utf8Path) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_classgen"));
    cmd.current_dir(cwd).env("RUST_BACKTRACE", "0");
    cmd
}

/// Creates an empty scratch directory, returning the guard and its UTF-8 path.
pub(crate) fn scratch_dir() -> anyhow::Result<(TempDir, Utf8PathBuf)> {
    let temp = tempfile::tempdir()?;
    let path = Utf8PathBuf::from_path_buf(temp.path().to_path_buf())
        .map_err(|p| anyhow::anyhow!("non-UTF-8 path: {}", p.display()))?;
    Ok((temp, path))
}

/// Reads a generated file as raw bytes.
pub(crate) fn read_bytes(dir: &Utf8Path, name: &str) -> anyhow::Result<Vec<u8>> {
    Ok(Dir::open_ambient_dir(dir, ambient_authority())?.read(name)?)
}

/// Reads a generated file as text.
pub(crate) fn read_text(dir: &Utf8Path, name: &str) -> anyhow::Result<String> {
    Ok(Dir::open_ambient_dir(dir, ambient_authority())?.read_to_string(name)?)
}

/// Lists the entry names in `dir`, sorted.
pub(crate) fn entries(dir: &Utf8Path) -> anyhow::Result<Vec<String>> {
    let mut names = Vec::new();
    for entry in Dir::open_ambient_dir(dir, ambient_authority())?.entries()? {
        names.push(entry?.file_name()?);
    }
    names.sort();
    Ok(names)
}

/// Captured standard output as UTF-8 text.
pub(crate) fn stdout_of(output: &std::process::Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}
