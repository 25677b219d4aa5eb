//! Fallback routing decision module
//!
//! The single routing policy of this server: decide whether a request path
//! names a real static asset under the site root, or whether the entry
//! document should be served instead so the client-side router can take over.
//!
//! The decision is a pure function of (root, request path, file predicate) so
//! it can be unit-tested without a live server or a real filesystem.

use std::path::{Path, PathBuf};

/// Result of resolving a request path against the site root
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolved {
    /// A regular file exists at the request path; serve its bytes
    Asset(PathBuf),
    /// No regular file there (missing path or directory); serve the entry document
    Fallback(PathBuf),
}

/// Sanitize a request path into a root-relative path
///
/// Strips the leading `/` and removes `..` components so the joined path
/// cannot climb out of the site root. The query string is never part of
/// `request_path` (callers pass `uri.path()`).
pub fn sanitize(request_path: &str) -> String {
    request_path.trim_start_matches('/').replace("..", "")
}

/// Resolve a request path to the file that should be served
///
/// `is_file` reports whether a regular file exists at a candidate path;
/// production passes `Path::is_file`, tests pass a fixture set. Directories
/// deliberately fall back to the root entry document rather than a
/// per-directory index: an SPA route like `/dashboard` may shadow a real
/// directory, and the client router owns it either way.
pub fn resolve<F>(root: &Path, index_file: &str, request_path: &str, is_file: F) -> Resolved
where
    F: Fn(&Path) -> bool,
{
    let relative = sanitize(request_path);
    let candidate = root.join(&relative);

    if !relative.is_empty() && is_file(&candidate) {
        Resolved::Asset(candidate)
    } else {
        Resolved::Fallback(root.join(index_file))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn fixture(files: &[&str]) -> HashSet<PathBuf> {
        files.iter().map(PathBuf::from).collect()
    }

    fn resolve_with(files: &HashSet<PathBuf>, request_path: &str) -> Resolved {
        resolve(Path::new("dist"), "index.html", request_path, |p| {
            files.contains(p)
        })
    }

    #[test]
    fn test_existing_asset_is_served_literally() {
        let files = fixture(&["dist/index.html", "dist/assets/app.js"]);
        assert_eq!(
            resolve_with(&files, "/assets/app.js"),
            Resolved::Asset(PathBuf::from("dist/assets/app.js"))
        );
    }

    #[test]
    fn test_unknown_route_falls_back_to_entry_document() {
        let files = fixture(&["dist/index.html", "dist/assets/app.js"]);
        assert_eq!(
            resolve_with(&files, "/dashboard/settings"),
            Resolved::Fallback(PathBuf::from("dist/index.html"))
        );
    }

    #[test]
    fn test_root_path_falls_back_like_deep_routes() {
        let files = fixture(&["dist/index.html"]);
        assert_eq!(
            resolve_with(&files, "/"),
            Resolved::Fallback(PathBuf::from("dist/index.html"))
        );
        assert_eq!(resolve_with(&files, "/"), resolve_with(&files, "/a/b/c/d"));
    }

    #[test]
    fn test_existing_directory_still_falls_back() {
        // "dist/docs" is a directory, not a file, so the predicate is false
        let files = fixture(&["dist/index.html", "dist/docs/readme.txt"]);
        assert_eq!(
            resolve_with(&files, "/docs"),
            Resolved::Fallback(PathBuf::from("dist/index.html"))
        );
    }

    #[test]
    fn test_fallback_chosen_even_when_entry_document_missing() {
        // The decision does not check the entry document; serving reports 404
        let files = fixture(&[]);
        assert_eq!(
            resolve_with(&files, "/anything"),
            Resolved::Fallback(PathBuf::from("dist/index.html"))
        );
    }

    #[test]
    fn test_traversal_components_are_stripped() {
        assert_eq!(sanitize("/../../etc/passwd"), "//etc/passwd");
        let files = fixture(&["dist/index.html"]);
        assert_eq!(
            resolve_with(&files, "/../secret.txt"),
            Resolved::Fallback(PathBuf::from("dist/index.html"))
        );
    }

    #[test]
    fn test_resolution_is_deterministic() {
        let files = fixture(&["dist/index.html", "dist/assets/app.js"]);
        for path in ["/assets/app.js", "/dashboard", "/"] {
            assert_eq!(resolve_with(&files, path), resolve_with(&files, path));
        }
    }
}
