/*!
 * Fixed filter policy for projsnap
 *
 * The rules are build-time constants: which directory names are never
 * descended into, which extensions get their contents captured, which
 * filename substrings force a skip, and which exact filenames are always
 * captured regardless of extension.
 */

use std::collections::HashSet;
use std::path::Path;

use once_cell::sync::Lazy;

/// Directory names that are never descended into (exact match).
/// Any directory name starting with `.` is pruned as well.
static IGNORED_DIRS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        // Virtual environments
        "__pycache__",
        ".venv",
        "venv",
        "env",
        // VCS and editor state
        ".git",
        ".idea",
        ".vscode",
        ".pytest_cache",
        // Dependencies and build output
        "node_modules",
        "build",
        "dist",
        "target",
        ".next",
        // Generated and tooling directories
        "migrations",
        "coverage",
        ".cache",
        ".husky",
        ".github",
    ]
    .into_iter()
    .collect()
});

/// File suffixes eligible for content capture, leading dot included.
/// The empty string admits extensionless files such as `Dockerfile`.
static INCLUDED_EXTENSIONS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        ".py",
        ".jsx",
        ".tsx",
        ".js",
        ".ts",
        ".css",
        ".scss",
        ".sass",
        ".html",
        "",
        ".yml",
        ".yaml",
        ".dockerfile",
        ".json",
        ".lock",
        ".txt",
        ".config.js",
    ]
    .into_iter()
    .collect()
});

/// Substrings that exclude a file wherever they appear in its name.
/// Matching is deliberately substring-wide, not suffix-only: a name like
/// `my.gitignore.js` is excluded too.
static IGNORED_SUBSTRINGS: [&str; 6] = [
    "setupTests.",
    "reportWebVitals.",
    ".test.",
    ".spec.",
    "types.d.ts",
    ".gitignore",
];

/// Exact filenames always captured, whatever their extension says.
static IMPORTANT_FILES: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "package.json",
        "package-lock.json",
        "yarn.lock",
        "requirements.txt",
        "Dockerfile",
        "docker-compose.yml",
        "tailwind.config.js",
        "postcss.config.js",
    ]
    .into_iter()
    .collect()
});

/// Immutable filter rules applied during one scan.
///
/// Wraps the static rule sets; constructed once when the scanner is built
/// and never mutated afterwards.
#[derive(Debug, Clone, Copy)]
pub struct FilterPolicy {
    ignored_dirs: &'static HashSet<&'static str>,
    included_extensions: &'static HashSet<&'static str>,
    ignored_substrings: &'static [&'static str],
    important_files: &'static HashSet<&'static str>,
}

impl Default for FilterPolicy {
    fn default() -> Self {
        Self {
            ignored_dirs: &IGNORED_DIRS,
            included_extensions: &INCLUDED_EXTENSIONS,
            ignored_substrings: &IGNORED_SUBSTRINGS,
            important_files: &IMPORTANT_FILES,
        }
    }
}

impl FilterPolicy {
    /// Check if descent into a directory with this name is pruned
    pub fn ignores_dir(&self, name: &str) -> bool {
        name.starts_with('.') || self.ignored_dirs.contains(name)
    }

    /// Check if the filename contains any of the skip substrings
    pub fn excludes_file(&self, name: &str) -> bool {
        self.ignored_substrings.iter().any(|s| name.contains(s))
    }

    /// Check if a surviving file is captured: extension match or important name
    pub fn includes_file(&self, name: &str) -> bool {
        self.included_extensions
            .contains(extension_of(name).as_str())
            || self.important_files.contains(name)
    }

    /// Full eligibility check for content capture
    pub fn is_content_eligible(&self, name: &str) -> bool {
        !self.excludes_file(name) && self.includes_file(name)
    }
}

/// Extension of a filename with its leading dot (`".ts"`), or the empty
/// string when there is none. Dotfiles like `.gitignore` count as
/// extensionless.
fn extension_of(name: &str) -> String {
    Path::new(name)
        .extension()
        .map(|ext| format!(".{}", ext.to_string_lossy()))
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extension_of() {
        assert_eq!(extension_of("main.py"), ".py");
        assert_eq!(extension_of("archive.tar.gz"), ".gz");
        assert_eq!(extension_of("tailwind.config.js"), ".js");
        assert_eq!(extension_of("Dockerfile"), "");
        assert_eq!(extension_of(".gitignore"), "");
    }

    #[test]
    fn test_ignores_dir() {
        let policy = FilterPolicy::default();
        assert!(policy.ignores_dir("node_modules"));
        assert!(policy.ignores_dir("target"));
        // any dot-prefixed name, listed or not
        assert!(policy.ignores_dir(".secret"));
        assert!(!policy.ignores_dir("src"));
        assert!(!policy.ignores_dir("lib"));
    }

    #[test]
    fn test_excludes_file_substring_match() {
        let policy = FilterPolicy::default();
        assert!(policy.excludes_file("foo.test.js"));
        assert!(policy.excludes_file("api.spec.ts"));
        assert!(policy.excludes_file("types.d.ts"));
        // substring matches anywhere, not just as a suffix
        assert!(policy.excludes_file("my.gitignore.js"));
        // "test" without the surrounding dots is fine
        assert!(!policy.excludes_file("latest.js"));
        assert!(!policy.excludes_file("attestation.py"));
    }

    #[test]
    fn test_includes_file() {
        let policy = FilterPolicy::default();
        // by extension
        assert!(policy.includes_file("index.ts"));
        assert!(policy.includes_file("package.json"));
        // extensionless names ride the empty-extension rule
        assert!(policy.includes_file("Makefile"));
        // by important name
        assert!(policy.includes_file("Dockerfile"));
        assert!(policy.includes_file("docker-compose.yml"));
        // not recognized
        assert!(!policy.includes_file("README.md"));
        assert!(!policy.includes_file("photo.png"));
    }
}
