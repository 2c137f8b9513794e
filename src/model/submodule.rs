//! Submodule identity data model

/// A registered submodule of the parent repository
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submodule {
    /// Short name: the final segment of the relative path.
    ///
    /// This is what the exclusion filter matches on. It is not guaranteed
    /// unique (`libs/core` and `vendor/core` share a name); anything that
    /// must not collide keys on `path` instead.
    pub name: String,

    /// Path relative to the parent repository root, without a trailing
    /// separator.
    ///
    /// Unique within a repository; this is the identity prepended to every
    /// file path during namespacing.
    pub path: String,
}

impl Submodule {
    /// Build a submodule record from its relative path.
    pub fn new(path: impl Into<String>) -> Self {
        let path = path.into();
        let path = path.trim_end_matches('/').to_string();
        let name = path.rsplit('/').next().unwrap_or(&path).to_string();
        Self { name, path }
    }

    /// File name of this submodule's intermediate log.
    ///
    /// Derived from the full relative path (not just the name) so that
    /// same-named submodules under different parent directories never
    /// alias to the same file.
    pub fn log_file_name(&self) -> String {
        format!("{}.log", sanitize_stem(&self.path))
    }
}

/// Replace path separators and dots so the result is a single flat file
/// name component.
fn sanitize_stem(path: &str) -> String {
    path.replace(['/', '.'], "_")
}
