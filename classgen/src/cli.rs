//! Command-line interface definitions for `classgen`.

use camino::Utf8PathBuf;
use clap::error::ErrorKind;
use clap::{ArgAction, Args as ClapArgs, Parser};

use crate::error::ValidationError;
use crate::guard::NamespacePath;
use crate::report::help_footer;
use crate::render::{DEFAULT_HEADER_EXTENSION, DEFAULT_SOURCE_EXTENSION, Extensions};

/// Binary name used in usage text.
pub const BIN_NAME: &str = "classgen";

/// Parsed CLI arguments for `classgen`.
#[derive(Debug, Parser)]
#[command(name = BIN_NAME)]
#[command(about = "Generate a C++ class header/source pair with deleted copy and move operations")]
#[command(after_help = help_footer(BIN_NAME))]
#[command(version)]
pub struct Args {
    /// Class name; must start with an uppercase letter and be alphanumeric.
    #[arg(value_name = "ClassName")]
    pub class_name: String,
    /// Path used to prefix the header guard only (for example, `gpu/vulkan/utility`).
    ///
    /// Taken literally, even when it starts with `-`.
    #[arg(value_name = "namespace_path", allow_hyphen_values = true)]
    pub namespace_path: Option<String>,
    /// Positionals after the namespace path; accepted and ignored.
    #[arg(hide = true, num_args = 1.., trailing_var_arg = true, allow_hyphen_values = true)]
    pub ignored: Vec<String>,
    /// Directory receiving the generated files.
    #[arg(long, value_name = "path", default_value = ".")]
    pub out_dir: Utf8PathBuf,
    /// File extension settings.
    #[command(flatten)]
    pub extensions: ExtensionArgs,
    /// Increase log verbosity (repeat for more detail).
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

/// File extension overrides.
#[derive(Debug, ClapArgs, Clone)]
pub struct ExtensionArgs {
    /// Extension of the declaration file.
    #[arg(long = "header-extension", value_name = "ext", default_value = DEFAULT_HEADER_EXTENSION)]
    pub header: String,
    /// Extension of the definition file.
    #[arg(long = "source-extension", value_name = "ext", default_value = DEFAULT_SOURCE_EXTENSION)]
    pub source: String,
}

impl Args {
    /// Returns the namespace path argument.
    #[must_use]
    pub fn namespace(&self) -> NamespacePath {
        NamespacePath::new(self.namespace_path.as_deref().unwrap_or_default())
    }
}

impl ExtensionArgs {
    /// Validates both extensions.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidExtension`] for the first extension
    /// that is empty or contains anything but ASCII alphanumerics.
    pub fn validate(&self) -> Result<Extensions, ValidationError> {
        for ext in [&self.header, &self.source] {
            if ext.is_empty() || !ext.chars().all(|ch| ch.is_ascii_alphanumeric()) {
                return Err(ValidationError::InvalidExtension(ext.clone()));
            }
        }
        Ok(Extensions {
            header: self.header.clone(),
            source: self.source.clone(),
        })
    }
}

/// How a failed parse should be surfaced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseFailure {
    /// `--help` or `--version`: clap prints and exits successfully.
    Display,
    /// The class name is missing: print the usage text to stdout.
    MissingClassName,
    /// Any other malformed command line, such as an unknown flag before the
    /// class name: print clap's diagnostic.
    Malformed,
}

/// Classifies a clap parse error.
#[must_use]
pub fn classify(err: &clap::Error) -> ParseFailure {
    match err.kind() {
        ErrorKind::DisplayHelp
        | ErrorKind::DisplayVersion
        | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand => ParseFailure::Display,
        ErrorKind::MissingRequiredArgument => ParseFailure::MissingClassName,
        _ => ParseFailure::Malformed,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn parse(argv: &[&str]) -> Result<Args, clap::Error> {
        Args::try_parse_from(std::iter::once(BIN_NAME).chain(argv.iter().copied()))
    }

    #[test]
    fn class_name_only_uses_defaults() -> Result<(), clap::Error> {
        let args = parse(&["MyClass"])?;
        assert_eq!(args.class_name, "MyClass");
        assert!(args.namespace().is_empty());
        assert_eq!(args.out_dir, Utf8PathBuf::from("."));
        assert_eq!(args.extensions.validate(), Ok(Extensions::default()));
        assert_eq!(args.verbose, 0);
        Ok(())
    }

    #[test]
    fn namespace_path_is_second_positional() -> Result<(), clap::Error> {
        let args = parse(&["MyClass", "gpu/vulkan/utility", "-vv"])?;
        assert_eq!(args.namespace().as_str(), "gpu/vulkan/utility");
        assert_eq!(args.verbose, 2);
        Ok(())
    }

    #[rstest]
    #[case(&["MyClass", "core", "extra"], "core")]
    #[case(&["MyClass", "core", "extra", "--more", "-x"], "core")]
    #[case(&["MyClass", "-core"], "-core")]
    #[case(&["MyClass", "--core"], "--core")]
    fn positionals_are_taken_literally(#[case] argv: &[&str], #[case] namespace: &str) {
        match parse(argv) {
            Ok(args) => {
                assert_eq!(args.class_name, "MyClass");
                assert_eq!(args.namespace().as_str(), namespace);
            }
            Err(err) => panic!("expected {argv:?} to parse: {err}"),
        }
    }

    #[test]
    fn known_flags_still_apply_after_namespace() -> Result<(), clap::Error> {
        let args = parse(&["MyClass", "-v", "core", "--out-dir", "gen"])?;
        assert_eq!(args.namespace().as_str(), "core");
        assert_eq!(args.verbose, 1);
        assert_eq!(args.out_dir, Utf8PathBuf::from("gen"));
        Ok(())
    }

    #[rstest]
    #[case(&[], ParseFailure::MissingClassName)]
    #[case(&["--help"], ParseFailure::Display)]
    #[case(&["--version"], ParseFailure::Display)]
    #[case(&["--bogus"], ParseFailure::Malformed)]
    #[case(&["--bogus", "MyClass"], ParseFailure::Malformed)]
    fn classifies_parse_failures(#[case] argv: &[&str], #[case] expected: ParseFailure) {
        match parse(argv) {
            Ok(args) => panic!("expected a parse failure, got {args:?}"),
            Err(err) => assert_eq!(classify(&err), expected),
        }
    }

    #[rstest]
    #[case("hpp", "cc", true)]
    #[case("h", "cxx", true)]
    #[case("", "cpp", false)]
    #[case("h", ".cpp", false)]
    #[case("h/x", "cpp", false)]
    fn validates_extensions(#[case] header: &str, #[case] source: &str, #[case] ok: bool) {
        let args = ExtensionArgs {
            header: header.to_owned(),
            source: source.to_owned(),
        };
        assert_eq!(args.validate().is_ok(), ok);
    }
}
