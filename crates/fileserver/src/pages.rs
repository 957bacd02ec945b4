//! Lesson page handlers

use axum::{
    extract::State,
    http::{StatusCode, Uri},
    response::{Html, IntoResponse, Response},
};
use content::{has_traversal, ResolveError};
use render::constants::{LESSON_EXTENSION, VIDEO_EXTENSIONS};
use render::Lesson;

use crate::error::AppError;
use crate::state::ServerState;

/// Landing page
pub async fn home(State(state): State<ServerState>) -> Html<String> {
    let tree = state.tree_or_empty().await;
    Html(render::home_page(&tree))
}

/// Lesson route: the URL path names a file or directory under the content root
pub async fn lesson(State(state): State<ServerState>, uri: Uri) -> Response {
    let relative = match decode_lesson_path(uri.path()) {
        Some(relative) => relative,
        None => return not_found(&state).await,
    };

    if has_traversal(&relative) {
        return denied();
    }

    let full_path = match state.resolve(&relative).await {
        Ok(path) => path,
        Err(ResolveError::NotFound) => return not_found(&state).await,
        Err(e) if e.is_denied() => return denied(),
        Err(e) => return AppError::from(e).into_response(),
    };

    let metadata = match tokio::fs::metadata(&full_path).await {
        Ok(metadata) => metadata,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return not_found(&state).await,
        Err(e) => return AppError::Internal(format!("Failed to stat lesson: {}", e)).into_response(),
    };

    let tree = state.tree_or_empty().await;

    if metadata.is_dir() {
        return Html(render::directory_page(&tree, &relative)).into_response();
    }

    if !relative.ends_with(LESSON_EXTENSION) {
        return Html(render::file_page(&tree, &relative)).into_response();
    }

    let bytes = match tokio::fs::read(&full_path).await {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return not_found(&state).await,
        Err(e) => return AppError::Internal(format!("Failed to read lesson: {}", e)).into_response(),
    };
    let markdown = String::from_utf8_lossy(&bytes);
    let video = paired_video(&state, &relative).await;

    let lesson = Lesson {
        path: &relative,
        markdown: &markdown,
        video_path: video.as_deref(),
    };
    Html(render::lesson_page(&tree, &lesson)).into_response()
}

/// Percent-decode each URL path segment and rejoin with `/`
///
/// Returns `None` when a segment does not decode to UTF-8.
pub fn decode_lesson_path(uri_path: &str) -> Option<String> {
    let segments = uri_path
        .split('/')
        .filter(|segment| !segment.is_empty())
        .map(|segment| urlencoding::decode(segment).ok().map(|s| s.into_owned()))
        .collect::<Option<Vec<String>>>()?;
    Some(segments.join("/"))
}

/// Relative path of the video that shares the lesson's stem, if present
async fn paired_video(state: &ServerState, lesson_path: &str) -> Option<String> {
    let stem = lesson_path.strip_suffix(LESSON_EXTENSION)?;
    for ext in VIDEO_EXTENSIONS {
        let candidate = format!("{}.{}", stem, ext);
        if let Ok(path) = state.resolve(&candidate).await {
            let is_file = tokio::fs::metadata(&path)
                .await
                .is_ok_and(|metadata| metadata.is_file());
            if is_file {
                return Some(candidate);
            }
        }
    }
    None
}

async fn not_found(state: &ServerState) -> Response {
    let tree = state.tree_or_empty().await;
    (StatusCode::NOT_FOUND, Html(render::not_found_page(&tree))).into_response()
}

fn denied() -> Response {
    (StatusCode::FORBIDDEN, Html(render::denied_page())).into_response()
}
