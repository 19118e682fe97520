//! Header guard construction.
//!
//! Guards follow the project style `NAMESPACE_PATH_CLASSNAME_H_`, where the
//! namespace path is an optional `/`- or `\`-delimited fragment such as
//! `gpu/vulkan/utility`. The path only feeds the guard; it never becomes an
//! emitted namespace or a directory.

use std::fmt;

use crate::class_name::ClassName;

const GUARD_SUFFIX: &str = "_H_";

/// Optional path fragment used to prefix the guard token.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NamespacePath(String);

impl NamespacePath {
    /// Wraps a raw path fragment. No validation is applied.
    #[must_use]
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// Returns `true` when no path was supplied.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the raw path fragment.
    #[must_use]
    pub const fn as_str(&self) -> &str {
        self.0.as_str()
    }

    /// Renders the guard prefix: the path uppercased, separators replaced
    /// with `_`, and a trailing `_`. Empty paths yield an empty prefix.
    fn guard_prefix(&self) -> String {
        if self.is_empty() {
            return String::new();
        }
        let mut prefix: String = self
            .0
            .to_uppercase()
            .chars()
            .map(|ch| if matches!(ch, '/' | '\\') { '_' } else { ch })
            .collect();
        prefix.push('_');
        prefix
    }
}

/// A conditional-inclusion guard token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderGuard(String);

impl HeaderGuard {
    /// Derives the guard for `class_name` under `namespace`.
    ///
    /// No collision detection is performed; callers pick a path that keeps
    /// the guard unique.
    ///
    /// # Examples
    ///
    /// ```
    /// use classgen::class_name::ClassName;
    /// use classgen::guard::{HeaderGuard, NamespacePath};
    ///
    /// let class_name = ClassName::parse("Foo")?;
    /// let guard = HeaderGuard::build(&class_name, &NamespacePath::new("core/utility"));
    /// assert_eq!(guard.as_str(), "CORE_UTILITY_FOO_H_");
    /// # Ok::<(), classgen::error::ValidationError>(())
    /// ```
    #[must_use]
    pub fn build(class_name: &ClassName, namespace: &NamespacePath) -> Self {
        let mut token = namespace.guard_prefix();
        token.push_str(&class_name.as_str().to_uppercase());
        token.push_str(GUARD_SUFFIX);
        Self(token)
    }

    /// Returns the guard token.
    #[must_use]
    pub const fn as_str(&self) -> &str {
        self.0.as_str()
    }

    /// Reports whether the token is usable as a preprocessor identifier.
    ///
    /// Namespace paths are not validated, so characters such as `-` or `.`
    /// can leak into the token.
    #[must_use]
    pub fn is_identifier(&self) -> bool {
        let mut chars = self.0.chars();
        chars
            .next()
            .is_some_and(|first| first.is_ascii_alphabetic() || first == '_')
            && chars.all(|ch| ch.is_ascii_alphanumeric() || ch == '_')
    }
}

impl fmt::Display for HeaderGuard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
