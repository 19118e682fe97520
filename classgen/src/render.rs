//! Template rendering for the declaration and definition files.
//!
//! The templates are fixed: the header declares a class whose default,
//! copy and move constructors and copy/move assignment operators are all
//! deleted, and the source file only includes its header.

use crate::class_name::ClassName;
use crate::guard::HeaderGuard;

/// Default extension for the declaration file.
pub const DEFAULT_HEADER_EXTENSION: &str = "h";
/// Default extension for the definition file.
pub const DEFAULT_SOURCE_EXTENSION: &str = "cpp";

/// File extensions used for the generated pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Extensions {
    /// Declaration file extension, without the leading dot.
    pub header: String,
    /// Definition file extension, without the leading dot.
    pub source: String,
}

impl Default for Extensions {
    fn default() -> Self {
        Self {
            header: DEFAULT_HEADER_EXTENSION.to_owned(),
            source: DEFAULT_SOURCE_EXTENSION.to_owned(),
        }
    }
}

/// A rendered file awaiting a write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedFile {
    /// File name relative to the output directory.
    pub file_name: String,
    /// Body with `\n` line endings.
    pub contents: String,
}

/// The rendered declaration and definition pair for one class.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Skeleton {
    /// Declaration file (`<ClassName>.h` by default).
    pub header: RenderedFile,
    /// Definition file (`<ClassName>.cpp` by default).
    pub source: RenderedFile,
}

impl Skeleton {
    /// Renders both files for `class_name`.
    #[must_use]
    pub fn render(class_name: &ClassName, guard: &HeaderGuard, extensions: &Extensions) -> Self {
        Self {
            header: RenderedFile {
                file_name: class_name.file_name(&extensions.header),
                contents: render_header(class_name, guard),
            },
            source: RenderedFile {
                file_name: class_name.file_name(&extensions.source),
                contents: render_implementation(class_name, &extensions.header),
            },
        }
    }

    /// Returns the files in write order: declaration first.
    #[must_use]
    pub const fn files(&self) -> [&RenderedFile; 2] {
        [&self.header, &self.source]
    }
}

/// Renders the declaration body.
///
/// # Examples
///
/// ```
/// use classgen::class_name::ClassName;
/// use classgen::guard::{HeaderGuard, NamespacePath};
/// use classgen::render::render_header;
///
/// let class_name = ClassName::parse("Foo")?;
/// let guard = HeaderGuard::build(&class_name, &NamespacePath::default());
/// let header = render_header(&class_name, &guard);
/// assert!(header.starts_with("#ifndef FOO_H_\n#define FOO_H_\n"));
/// assert!(header.ends_with("#endif /* FOO_H_ */\n"));
/// # Ok::<(), classgen::error::ValidationError>(())
/// ```
#[must_use]
pub fn render_header(class_name: &ClassName, guard: &HeaderGuard) -> String {
    let name = class_name.as_str();
    format!(
        "#ifndef {guard}\n\
         #define {guard}\n\
         \n\
         class {name}\n\
         {{\n\
         \n\
         public:\n\
         \n\
         \t{name}() = delete;\n\
         \n\
         \t{name}(const {name}&) = delete;\n\
         \t{name}({name}&&) = delete;\n\
         \n\
         \t{name} operator=(const {name}&) = delete;\n\
         \t{name} operator=({name}&&) = delete;\n\
         \n\
         }};\n\
         \n\
         #endif /* {guard} */\n"
    )
}

/// Renders the definition body: a single include of the declaration file.
#[must_use]
pub fn render_implementation(class_name: &ClassName, header_extension: &str) -> String {
    format!("#include \"{}\"\n", class_name.file_name(header_extension))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::guard::NamespacePath;

    fn foo() -> ClassName {
        ClassName::parse("Foo").unwrap_or_else(|err| panic!("valid fixture: {err}"))
    }

    fn position(haystack: &str, needle: &str) -> usize {
        haystack
            .find(needle)
            .unwrap_or_else(|| panic!("missing `{needle}` in:\n{haystack}"))
    }

    #[test]
    fn header_lists_directives_and_deleted_members_in_order() {
        let class_name = foo();
        let guard = HeaderGuard::build(&class_name, &NamespacePath::default());
        let header = render_header(&class_name, &guard);

        let expected_order = [
            "#ifndef FOO_H_",
            "#define FOO_H_",
            "class Foo",
            "public:",
            "\tFoo() = delete;",
            "\tFoo(const Foo&) = delete;",
            "\tFoo(Foo&&) = delete;",
            "\tFoo operator=(const Foo&) = delete;",
            "\tFoo operator=(Foo&&) = delete;",
            "};",
            "#endif /* FOO_H_ */",
        ];
        let positions: Vec<usize> = expected_order
            .iter()
            .map(|needle| position(&header, needle))
            .collect();
        assert!(
            positions.windows(2).all(|pair| matches!(pair, [a, b] if a < b)),
            "sections out of order:\n{header}"
        );
    }

    #[test]
    fn header_body_is_otherwise_empty() {
        let class_name = foo();
        let guard = HeaderGuard::build(&class_name, &NamespacePath::default());
        let header = render_header(&class_name, &guard);
        let members: Vec<&str> = header.lines().filter(|line| line.starts_with('\t')).collect();
        assert_eq!(members.len(), 5);
        assert!(members.iter().all(|line| line.ends_with("= delete;")));
    }

    #[test]
    fn implementation_is_a_single_include() {
        let body = render_implementation(&foo(), DEFAULT_HEADER_EXTENSION);
        assert_eq!(body, "#include \"Foo.h\"\n");
        assert_eq!(body.lines().count(), 1);
    }

    #[test]
    fn implementation_follows_header_extension() {
        assert_eq!(
            render_implementation(&foo(), "hpp"),
            "#include \"Foo.hpp\"\n"
        );
    }

    #[test]
    fn skeleton_names_files_after_the_class() {
        let class_name = foo();
        let guard = HeaderGuard::build(&class_name, &NamespacePath::default());
        let skeleton = Skeleton::render(&class_name, &guard, &Extensions::default());
        let names: Vec<&str> = skeleton
            .files()
            .iter()
            .map(|file| file.file_name.as_str())
            .collect();
        assert_eq!(names, ["Foo.h", "Foo.cpp"]);
    }

    #[test]
    fn rendered_bodies_use_line_feeds_only() {
        let class_name = foo();
        let guard = HeaderGuard::build(&class_name, &NamespacePath::new("core/utility"));
        let skeleton = Skeleton::render(&class_name, &guard, &Extensions::default());
        assert!(skeleton.files().iter().all(|file| !file.contents.contains('\r')));
    }
}
