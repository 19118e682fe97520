//! Class name validation.
//!
//! A class name doubles as the emitted C++ type identifier and as the base
//! name of both generated files, so it is checked once up front and carried
//! around as a [`ClassName`] afterwards.

use std::fmt;
use std::str::FromStr;

use crate::error::ValidationError;

/// A class name matching `^[A-Z][A-Za-z0-9]*$`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ClassName(String);

impl ClassName {
    /// Validates `raw` against the naming rule.
    ///
    /// The first character must be an ASCII uppercase letter; every following
    /// character must be an ASCII letter or digit.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidClassName`] naming `raw` when the
    /// rule is broken.
    ///
    /// # Examples
    ///
    /// ```
    /// use classgen::class_name::ClassName;
    ///
    /// assert!(ClassName::parse("MyClass").is_ok());
    /// assert!(ClassName::parse("myClass").is_err());
    /// ```
    pub fn parse(raw: &str) -> Result<Self, ValidationError> {
        if is_valid(raw) {
            Ok(Self(raw.to_owned()))
        } else {
            Err(ValidationError::InvalidClassName(raw.to_owned()))
        }
    }

    /// Returns the validated name.
    #[must_use]
    pub const fn as_str(&self) -> &str {
        self.0.as_str()
    }

    /// Builds a file name from the class name and `extension`.
    #[must_use]
    pub fn file_name(&self, extension: &str) -> String {
        format!("{}.{extension}", self.0)
    }
}

fn is_valid(raw: &str) -> bool {
    let mut chars = raw.chars();
    chars.next().is_some_and(|first| first.is_ascii_uppercase())
        && chars.all(|ch| ch.is_ascii_alphanumeric())
}

impl FromStr for ClassName {
    type Err = ValidationError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        Self::parse(raw)
    }
}

impl AsRef<str> for ClassName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ClassName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
