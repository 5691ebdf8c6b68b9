use anyhow::{Context, Result};
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use percent_encoding::percent_decode_str;
use quick_xml::escape::unescape;
use regex::Regex;
use std::borrow::Cow;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

static IMG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"<img[^>]*src="([^"]+)"[^>]*>"#).expect("img pattern"));

const REMOTE_PREFIXES: [&str; 4] = ["http://", "https://", "data:", "//"];

/// Used when the extension says nothing about the image format.
pub const DEFAULT_CONTENT_TYPE: &str = "image/png";

/// Result of the inlining pass over a rendered body.
#[derive(Debug, Default)]
pub struct InlinedImages {
    pub html: String,
    pub inlined: usize,
    /// Resolved paths of local images that did not exist.
    pub missing: Vec<PathBuf>,
}

/// Replace every local `<img src>` with a lazily loaded `data:` URI.
///
/// Sources are resolved against `base_dir`. Remote and `data:` sources are
/// left alone, as are local files that do not exist.
pub fn inline_images(body: &str, base_dir: &Path) -> Result<InlinedImages> {
    let mut result = InlinedImages {
        html: String::with_capacity(body.len()),
        ..Default::default()
    };
    let mut last = 0;

    for caps in IMG_RE.captures_iter(body) {
        let Some(element) = caps.get(0) else {
            continue;
        };
        let src = &caps[1];

        result.html.push_str(&body[last..element.start()]);
        last = element.end();

        if is_remote(src) {
            result.html.push_str(element.as_str());
            continue;
        }

        let path = base_dir.join(decode_src(src));
        if !path.exists() {
            log::warn!("image not found: {}", path.display());
            result.html.push_str(element.as_str());
            result.missing.push(path);
            continue;
        }

        let data_uri = encode_data_uri(&path)?;
        log::debug!("inlined {} ({} bytes encoded)", path.display(), data_uri.len());
        result.html.push_str(&format!(
            r#"<img data-src="{}" alt="" loading="lazy">"#,
            data_uri
        ));
        result.inlined += 1;
    }

    result.html.push_str(&body[last..]);
    Ok(result)
}

fn is_remote(src: &str) -> bool {
    REMOTE_PREFIXES.iter().any(|prefix| src.starts_with(prefix))
}

/// Undo the renderer's attribute escaping and percent-encoding.
fn decode_src(src: &str) -> String {
    let unescaped = unescape(src).unwrap_or(Cow::Borrowed(src));
    percent_decode_str(&unescaped).decode_utf8_lossy().into_owned()
}

fn encode_data_uri(path: &Path) -> Result<String> {
    let bytes =
        fs::read(path).with_context(|| format!("Failed to read image: {}", path.display()))?;
    Ok(format!(
        "data:{};base64,{}",
        content_type(path),
        BASE64.encode(bytes)
    ))
}

/// Image MIME type from the file extension.
pub fn content_type(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .map(|e| e.to_string_lossy().to_ascii_lowercase())
        .unwrap_or_default();

    match ext.as_str() {
        "png" => "image/png",
        "jpg" | "jpeg" | "jpe" => "image/jpeg",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "svg" => "image/svg+xml",
        "bmp" => "image/bmp",
        "ico" => "image/x-icon",
        "avif" => "image/avif",
        "tif" | "tiff" => "image/tiff",
        _ => DEFAULT_CONTENT_TYPE,
    }
}
