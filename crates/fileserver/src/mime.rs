//! Content type lookup by file extension

use std::path::Path;

/// Extensions served with a fixed content type
const MIME_TYPES: &[(&str, &str)] = &[
    ("png", "image/png"),
    ("jpg", "image/jpeg"),
    ("jpeg", "image/jpeg"),
    ("gif", "image/gif"),
    ("svg", "image/svg+xml"),
    ("webp", "image/webp"),
    ("avif", "image/avif"),
    ("mov", "video/quicktime"),
    ("mp4", "video/mp4"),
    ("webm", "video/webm"),
    ("md", "text/markdown; charset=utf-8"),
];

/// Content type for `path`; unknown extensions are `application/octet-stream`
pub fn content_type(path: &Path) -> String {
    let ext = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase);

    if let Some(ext) = ext.as_deref() {
        if let Some((_, mime)) = MIME_TYPES.iter().find(|(known, _)| *known == ext) {
            return mime.to_string();
        }
    }

    mime_guess::from_path(path).first_or_octet_stream().to_string()
}
