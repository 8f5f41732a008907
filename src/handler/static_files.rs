//! Static file serving.
//!
//! Resolves a request path against the canonical root directory, rejects
//! anything that escapes it, and builds the file response with the content
//! type inferred from the extension table.

use crate::handler::router::RequestContext;
use crate::http::{self, cache, mime};
use crate::logger;
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::Response;
use std::path::Path;
use tokio::fs;

/// Serve a file from under the root directory, or 404.
pub async fn serve(ctx: &RequestContext<'_>, root: &Path) -> Response<Full<Bytes>> {
    match load_file(root, ctx.path).await {
        Some((content, content_type)) => {
            let etag = cache::etag_for(&content);
            if cache::if_none_match_matches(ctx.if_none_match.as_deref(), &etag) {
                return http::not_modified(&etag);
            }
            http::response::file_response(content, content_type, &etag, ctx.is_head)
        }
        None => http::not_found(),
    }
}

/// Resolve a request path to a file under `root` and read it.
///
/// `root` must already be canonical. The path is percent-decoded first,
/// so `/a%20b.css` finds the on-disk file `a b.css`. Returns `None` for
/// missing files and for any path that resolves outside the root.
pub async fn load_file(root: &Path, path: &str) -> Option<(Vec<u8>, &'static str)> {
    let Some(relative) = decode_path(path) else {
        logger::log_warning(&format!("Rejected request path encoding: {path}"));
        return None;
    };
    let candidate = root.join(&relative);

    // Canonicalization fails for missing files; that is the 404 case.
    let resolved = candidate.canonicalize().ok()?;
    if !resolved.starts_with(root) {
        logger::log_warning(&format!(
            "Path traversal attempt blocked: {path} -> {}",
            resolved.display()
        ));
        return None;
    }
    if !resolved.is_file() {
        return None;
    }

    let content = match fs::read(&resolved).await {
        Ok(c) => c,
        Err(e) => {
            logger::log_error(&format!(
                "Failed to read file '{}': {e}",
                resolved.display()
            ));
            return None;
        }
    };
    let content_type = mime::content_type_for(resolved.extension().and_then(|e| e.to_str()));

    Some((content, content_type))
}

/// Percent-decode a request path, segment by segment.
///
/// Decoding happens per segment so an encoded separator (`%2F`) cannot
/// splice new path components into the lookup; such escapes, NUL bytes,
/// and invalid UTF-8 all reject the path. Literal `..` segments pass
/// through here and are contained by the canonicalize check above.
fn decode_path(path: &str) -> Option<String> {
    path.trim_start_matches('/')
        .split('/')
        .map(decode_segment)
        .collect::<Option<Vec<_>>>()
        .map(|segments| segments.join("/"))
}

fn decode_segment(segment: &str) -> Option<String> {
    let decoded = urlencoding::decode(segment).ok()?;
    if decoded.contains('/') || decoded.contains('\0') {
        return None;
    }
    Some(decoded.into_owned())
}
