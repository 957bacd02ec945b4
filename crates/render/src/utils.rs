//! Utility functions for escaping and building URLs

/// Escape text for inclusion in HTML element content or attribute values
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Browser route for a content path: each segment percent-encoded
pub fn lesson_href(relative_path: &str) -> String {
    let encoded: Vec<String> = relative_path
        .split('/')
        .filter(|segment| !segment.is_empty())
        .map(|segment| urlencoding::encode(segment).into_owned())
        .collect();
    format!("/{}", encoded.join("/"))
}

/// Asset endpoint URL for a content-relative path
pub fn asset_url(relative_path: &str) -> String {
    format!("/api/asset?path={}", urlencoding::encode(relative_path))
}

/// Video endpoint URL for a content-relative path
pub fn video_url(relative_path: &str) -> String {
    format!("/api/video?path={}", urlencoding::encode(relative_path))
}

/// Join `target` onto `base_dir` and normalize `.` and `..` lexically
///
/// A `..` that would climb above the root is kept, so the result still
/// fails the containment check downstream.
pub fn join_normalized(base_dir: &str, target: &str) -> String {
    let mut segments: Vec<&str> = Vec::new();

    for segment in base_dir.split('/').chain(target.split('/')) {
        match segment {
            "" | "." => {}
            ".." => match segments.last() {
                Some(&last) if last != ".." => {
                    segments.pop();
                }
                _ => segments.push(".."),
            },
            _ => segments.push(segment),
        }
    }

    segments.join("/")
}

/// Directory part of a content-relative path (`""` at the root)
pub fn parent_dir(relative_path: &str) -> &str {
    relative_path
        .rsplit_once('/')
        .map(|(dir, _)| dir)
        .unwrap_or("")
}

/// Strip a trailing `.md` for display
pub fn display_name(name: &str) -> &str {
    name.strip_suffix(".md").unwrap_or(name)
}
