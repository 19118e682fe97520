//! Diagnostic logging for `classgen`.
//!
//! Logs go to standard error so the confirmation text on standard output
//! stays exactly as documented.

use tracing::level_filters::LevelFilter;

/// Error returned when a global subscriber is already installed.
pub type InitError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Installs the `fmt` subscriber at the level selected by `verbosity`.
///
/// # Errors
///
/// Returns an [`InitError`] when another global subscriber was installed
/// first.
pub fn init(verbosity: u8) -> Result<(), InitError> {
    tracing_subscriber::fmt()
        .with_max_level(level_for(verbosity))
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .try_init()
}

/// Maps the `-v` count to a level filter: warnings by default, `-v` for
/// info and `-vv` or more for debug.
#[must_use]
pub const fn level_for(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        _ => LevelFilter::DEBUG,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0, LevelFilter::WARN)]
    #[case(1, LevelFilter::INFO)]
    #[case(2, LevelFilter::DEBUG)]
    #[case(7, LevelFilter::DEBUG)]
    fn verbosity_selects_level(#[case] verbosity: u8, #[case] expected: LevelFilter) {
        assert_eq!(level_for(verbosity), expected);
    }
}
