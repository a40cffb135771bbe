//! Static file serving.
//!
//! Maps URL paths to files strictly inside the serving root, with index
//! file and directory listing support matching the stock static-server
//! contract.

use std::path::{Path, PathBuf};

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::Response;
use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, CONTROLS};
use tokio::fs;

use crate::config::ServerConfig;
use crate::http::{self, mime};

/// Index files tried, in order, when a directory is requested.
const INDEX_FILES: &[&str] = &["index.html", "index.htm"];

/// Characters percent-encoded in listing hrefs, so file names containing
/// URL delimiters produce links that decode back to the same name.
const HREF_ENCODE_SET: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'\'')
    .add(b'<')
    .add(b'>')
    .add(b'`')
    .add(b'?')
    .add(b'#')
    .add(b'%')
    .add(b'&')
    .add(b'+');

/// Serve `url_path` from the configured root.
pub async fn serve(config: &ServerConfig, url_path: &str, is_head: bool) -> Response<Full<Bytes>> {
    let Some(fs_path) = resolve_path(&config.root, url_path) else {
        return http::build_404_response();
    };

    if fs_path.is_dir() {
        // Directories are addressed with a trailing slash so relative
        // links inside the listing resolve against the directory itself.
        if !url_path.ends_with('/') {
            return http::build_redirect_response(&format!("{url_path}/"));
        }

        for index in INDEX_FILES {
            let candidate = fs_path.join(index);
            if candidate.is_file() {
                return serve_file(&candidate, is_head).await;
            }
        }

        return serve_listing(&fs_path, url_path, is_head).await;
    }

    serve_file(&fs_path, is_head).await
}

/// Resolve a URL path to a filesystem path inside `root`.
///
/// The path is percent-decoded first, then split: empty and `.` segments
/// are dropped and any `..` segment rejects the whole path. Decoding
/// happens before the traversal filtering so encoded dot segments
/// (`%2e%2e`) cannot slip past it. The canonicalized result must still
/// live under the canonicalized root, which also neutralizes symlinks
/// pointing outside it. `None` means not found; nothing outside the root
/// is ever returned.
pub fn resolve_path(root: &Path, url_path: &str) -> Option<PathBuf> {
    let decoded = percent_decode_str(url_path).decode_utf8().ok()?;

    let mut resolved = root.to_path_buf();
    for segment in decoded.split('/') {
        match segment {
            "" | "." => {}
            ".." => return None,
            _ => resolved.push(segment),
        }
    }

    let root_canonical = root.canonicalize().ok()?;
    let resolved_canonical = resolved.canonicalize().ok()?;
    if !resolved_canonical.starts_with(&root_canonical) {
        return None;
    }

    Some(resolved_canonical)
}

async fn serve_file(path: &Path, is_head: bool) -> Response<Full<Bytes>> {
    match fs::read(path).await {
        Ok(content) => {
            let content_type = mime::get_content_type(path.extension().and_then(|e| e.to_str()));
            http::build_file_response(content, content_type, is_head)
        }
        // Unreadable at this point means it vanished or permissions
        // changed between resolution and read.
        Err(_) => http::build_404_response(),
    }
}

async fn serve_listing(dir: &Path, url_path: &str, is_head: bool) -> Response<Full<Bytes>> {
    match render_listing(dir, url_path).await {
        Ok(html) => http::build_listing_response(html, is_head),
        Err(_) => http::build_404_response(),
    }
}

/// Render the standard directory-listing page: sorted entries, one anchor
/// per entry, directories suffixed with `/`.
async fn render_listing(dir: &Path, url_path: &str) -> std::io::Result<String> {
    let mut entries = Vec::new();
    let mut reader = fs::read_dir(dir).await?;
    while let Some(entry) = reader.next_entry().await? {
        let mut name = entry.file_name().to_string_lossy().into_owned();
        if entry.file_type().await?.is_dir() {
            name.push('/');
        }
        entries.push(name);
    }
    entries.sort();

    let title = format!("Directory listing for {}", escape_html(url_path));
    let mut html = String::new();
    html.push_str("<!DOCTYPE HTML>\n<html>\n<head>\n<meta charset=\"utf-8\">\n");
    html.push_str(&format!("<title>{title}</title>\n</head>\n<body>\n"));
    html.push_str(&format!("<h1>{title}</h1>\n<hr>\n<ul>\n"));
    for name in &entries {
        let href = utf8_percent_encode(name, HREF_ENCODE_SET);
        let label = escape_html(name);
        html.push_str(&format!("<li><a href=\"{href}\">{label}</a></li>\n"));
    }
    html.push_str("</ul>\n<hr>\n</body>\n</html>\n");

    Ok(html)
}

fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
