//! Static file serving module
//!
//! Reads the file chosen by the fallback resolution and turns it into an HTTP
//! response. All filesystem failures stay scoped to the single request.

use crate::config::{HttpConfig, SiteConfig};
use crate::handler::resolve::{self, Resolved};
use crate::handler::router::RequestContext;
use crate::http::{self, mime, response::build_file_response};
use crate::logger;
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::Response;
use std::io;
use std::path::Path;
use tokio::fs;

/// Serve a request against the site root with entry-document fallback
pub async fn serve_site(
    ctx: &RequestContext<'_>,
    site: &SiteConfig,
    http_config: &HttpConfig,
) -> Response<Full<Bytes>> {
    let root = Path::new(&site.root);

    match resolve::resolve(root, &site.index_file, ctx.path, |p| p.is_file()) {
        Resolved::Asset(path) => {
            if escapes_root(root, &path) {
                logger::log_warning(&format!(
                    "Path escapes site root, serving entry document instead: {}",
                    path.display()
                ));
                return serve_entry_document(ctx, root, &site.index_file, http_config).await;
            }

            match fs::read(&path).await {
                Ok(content) => {
                    let content_type =
                        mime::content_type_for(path.extension().and_then(|e| e.to_str()));
                    build_file_response(content, content_type, http_config, ctx.is_head)
                }
                Err(e) => {
                    logger::log_error(&format!(
                        "Failed to read file '{}': {e}",
                        path.display()
                    ));
                    filesystem_error_response(&e)
                }
            }
        }
        Resolved::Fallback(_) => {
            serve_entry_document(ctx, root, &site.index_file, http_config).await
        }
    }
}

/// Serve the entry document that bootstraps the client-side router
async fn serve_entry_document(
    ctx: &RequestContext<'_>,
    root: &Path,
    index_file: &str,
    http_config: &HttpConfig,
) -> Response<Full<Bytes>> {
    let path = root.join(index_file);

    match fs::read(&path).await {
        Ok(content) => build_file_response(
            content,
            "text/html; charset=utf-8",
            http_config,
            ctx.is_head,
        ),
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            // Entry document missing is common during builds, not worth an error line
            logger::log_warning(&format!("Entry document not found: {}", path.display()));
            http::build_404_response()
        }
        Err(e) => {
            logger::log_error(&format!(
                "Failed to read entry document '{}': {e}",
                path.display()
            ));
            filesystem_error_response(&e)
        }
    }
}

/// Map a filesystem error to the HTTP status surfaced for this request
fn filesystem_error_response(error: &io::Error) -> Response<Full<Bytes>> {
    match error.kind() {
        io::ErrorKind::NotFound => http::build_404_response(),
        io::ErrorKind::PermissionDenied => http::build_403_response(),
        _ => http::build_500_response(),
    }
}

/// Check whether a resolved path points outside the site root via symlinks
///
/// The resolver already strips `..` components, so this only trips on links
/// planted inside the root. Resolution races (file vanished) count as escapes
/// and end up at the fallback path.
fn escapes_root(root: &Path, candidate: &Path) -> bool {
    match (root.canonicalize(), candidate.canonicalize()) {
        (Ok(root), Ok(candidate)) => !candidate.starts_with(&root),
        _ => true,
    }
}
