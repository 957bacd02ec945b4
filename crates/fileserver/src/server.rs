//! HTTP server: content listing, asset and video endpoints

use axum::{
    extract::{Query, State},
    http::{header, HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use std::path::PathBuf;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::error::AppError;
use crate::pages;
use crate::responder::serve_file;
use crate::state::ServerState;

/// Query parameters for the asset and video endpoints
#[derive(Debug, Deserialize)]
pub struct PathQuery {
    pub path: Option<String>,
}

impl PathQuery {
    fn required(self) -> Result<String, AppError> {
        self.path
            .filter(|p| !p.is_empty())
            .ok_or_else(|| AppError::BadRequest("Missing path parameter".to_string()))
    }
}

/// Lesson server API for building and running the HTTP server
#[derive(Clone)]
pub struct LessonServer {
    state: ServerState,
}

impl LessonServer {
    /// Create a new lesson server
    ///
    /// # Arguments
    /// * `content_root` - Absolute directory holding lessons, videos and assets
    pub fn new(content_root: PathBuf) -> Self {
        Self {
            state: ServerState::new(content_root),
        }
    }

    /// Get the server state
    pub fn state(&self) -> &ServerState {
        &self.state
    }

    /// Create the axum router with all routes configured
    ///
    /// Any path not matched by an API route is treated as a lesson path.
    pub fn router(&self) -> Router {
        Router::new()
            .route("/", get(pages::home))
            .route("/api/content", get(list_content))
            .route("/api/asset", get(serve_asset))
            .route("/api/video", get(serve_video))
            .route("/health", get(health_check))
            .fallback(pages::lesson)
            .with_state(self.state.clone())
            .layer(CorsLayer::permissive())
            .layer(TraceLayer::new_for_http())
    }

    /// Start the server and run until Ctrl+C
    ///
    /// # Arguments
    /// * `host` - Host to bind to (e.g., "127.0.0.1")
    /// * `port` - Port to bind to (e.g., 3000)
    pub async fn serve(self, host: &str, port: u16) -> crate::Result<()> {
        let addr = format!("{}:{}", host, port);
        let listener = tokio::net::TcpListener::bind(&addr).await?;

        tracing::info!("Lesson server listening on http://{}", addr);
        tracing::info!("Serving content from {}", self.state.content_root().display());
        if !self.state.content_root().is_dir() {
            tracing::warn!(
                "Content root {} does not exist; serving an empty tree",
                self.state.content_root().display()
            );
        }

        axum::serve(listener, self.router())
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("Lesson server stopped");
        Ok(())
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
}

/// Health check endpoint
async fn health_check() -> impl IntoResponse {
    (StatusCode::OK, "Lesson server running")
}

/// Directory listing as a JSON tree
async fn list_content(State(state): State<ServerState>) -> Response {
    match state.scan_tree().await {
        Ok(tree) => Json(tree).into_response(),
        Err(e) => {
            tracing::error!("Error reading content directory: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(serde_json::json!({ "error": "Failed to read content" })),
            )
                .into_response()
        }
    }
}

/// Images and other binary lesson assets, always served whole
async fn serve_asset(
    State(state): State<ServerState>,
    Query(query): Query<PathQuery>,
) -> Result<Response, AppError> {
    let relative = query.required()?;
    let path = state
        .resolve(&relative)
        .await
        .map_err(|e| AppError::from_resolve(e, "Asset"))?;

    serve_file(&path, None).await
}

/// Lesson videos with range request support
async fn serve_video(
    State(state): State<ServerState>,
    Query(query): Query<PathQuery>,
    headers: HeaderMap,
) -> Result<Response, AppError> {
    let relative = query.required()?;
    let path = state
        .resolve(&relative)
        .await
        .map_err(|e| AppError::from_resolve(e, "Video"))?;

    serve_file(&path, headers.get(header::RANGE)).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::Request;
    use std::fs;
    use tempfile::TempDir;
    use tower::ServiceExt;

    fn fixture() -> TempDir {
        let tmp = TempDir::new().unwrap();
        let root = tmp.path().join("content");
        fs::create_dir_all(root.join("math/assets")).unwrap();
        fs::create_dir_all(root.join("assets")).unwrap();
        fs::write(root.join("math/Algebra.md"), "# Algebra\n\n![graph](assets/graph.png)\n").unwrap();
        fs::write(root.join("math/Algebra.mov"), vec![7u8; 2048]).unwrap();
        fs::write(root.join("math/assets/graph.png"), b"\x89PNG fake").unwrap();
        fs::write(root.join("Lesson 10.md"), "ten").unwrap();
        fs::write(root.join("Lesson 2.md"), "two").unwrap();
        fs::write(tmp.path().join("secret.txt"), "outside").unwrap();
        tmp
    }

    fn app(tmp: &TempDir) -> Router {
        LessonServer::new(tmp.path().join("content")).router()
    }

    async fn send(router: Router, uri: &str, range: Option<&str>) -> Response {
        let mut request = Request::builder().uri(uri);
        if let Some(range) = range {
            request = request.header(header::RANGE, range);
        }
        router
            .oneshot(request.body(Body::empty()).unwrap())
            .await
            .unwrap()
    }

    async fn body_bytes(response: Response) -> Vec<u8> {
        axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap()
            .to_vec()
    }

    #[tokio::test]
    async fn test_health_check() {
        let tmp = fixture();
        let response = send(app(&tmp), "/health", None).await;
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_list_content_tree() {
        let tmp = fixture();
        let response = send(app(&tmp), "/api/content", None).await;
        assert_eq!(response.status(), StatusCode::OK);

        let json: serde_json::Value = serde_json::from_slice(&body_bytes(response).await).unwrap();
        let names: Vec<&str> = json
            .as_array()
            .unwrap()
            .iter()
            .map(|n| n["name"].as_str().unwrap())
            .collect();
        assert_eq!(names, vec!["math", "Lesson 2.md", "Lesson 10.md"]);

        let math = &json[0];
        assert_eq!(math["type"], "directory");
        let children: Vec<&str> = math["children"]
            .as_array()
            .unwrap()
            .iter()
            .map(|n| n["path"].as_str().unwrap())
            .collect();
        assert_eq!(children, vec!["math/Algebra.md", "math/Algebra.mov"]);
    }

    #[tokio::test]
    async fn test_list_content_missing_root_is_empty() {
        let tmp = TempDir::new().unwrap();
        let router = LessonServer::new(tmp.path().join("nowhere")).router();
        let response = send(router, "/api/content", None).await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_bytes(response).await, b"[]");
    }

    #[tokio::test]
    async fn test_list_content_scan_failure() {
        let tmp = fixture();
        let router = LessonServer::new(tmp.path().join("secret.txt")).router();
        let response = send(router, "/api/content", None).await;
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let json: serde_json::Value = serde_json::from_slice(&body_bytes(response).await).unwrap();
        assert_eq!(json["error"], "Failed to read content");
    }

    #[tokio::test]
    async fn test_asset_served_with_long_cache() {
        let tmp = fixture();
        let response = send(app(&tmp), "/api/asset?path=math%2Fassets%2Fgraph.png", None).await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()[header::CONTENT_TYPE], "image/png");
        assert_eq!(
            response.headers()[header::CACHE_CONTROL],
            "public, max-age=31536000, immutable"
        );
        assert_eq!(body_bytes(response).await, b"\x89PNG fake");
    }

    #[tokio::test]
    async fn test_asset_ignores_range() {
        let tmp = fixture();
        let response = send(
            app(&tmp),
            "/api/asset?path=math%2Fassets%2Fgraph.png",
            Some("bytes=0-1"),
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_missing_path_parameter() {
        let tmp = fixture();
        for uri in ["/api/asset", "/api/asset?path=", "/api/video", "/api/video?path="] {
            let response = send(app(&tmp), uri, None).await;
            assert_eq!(response.status(), StatusCode::BAD_REQUEST, "{uri}");
        }
    }

    #[tokio::test]
    async fn test_containment_violation_is_forbidden() {
        let tmp = fixture();
        let outside = tmp.path().join("secret.txt");
        let absolute = format!(
            "/api/video?path={}",
            urlencoding::encode(outside.to_str().unwrap())
        );

        for uri in [
            "/api/asset?path=..%2Fsecret.txt",
            "/api/video?path=math%2F..%2F..%2Fsecret.txt",
            absolute.as_str(),
        ] {
            let response = send(app(&tmp), uri, None).await;
            assert_eq!(response.status(), StatusCode::FORBIDDEN, "{uri}");
            let body = String::from_utf8(body_bytes(response).await).unwrap();
            assert_eq!(body, "Access denied");
        }
    }

    #[tokio::test]
    async fn test_missing_files_not_found() {
        let tmp = fixture();
        let response = send(app(&tmp), "/api/video?path=math%2FGeometry.mov", None).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(body_bytes(response).await, b"Video not found");

        let response = send(app(&tmp), "/api/asset?path=nope.png", None).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(body_bytes(response).await, b"Asset not found");

        let response = send(app(&tmp), "/api/asset?path=math", None).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_video_full_and_range() {
        let tmp = fixture();
        let uri = "/api/video?path=math%2FAlgebra.mov";

        let full = send(app(&tmp), uri, None).await;
        assert_eq!(full.status(), StatusCode::OK);
        assert_eq!(full.headers()[header::CONTENT_TYPE], "video/quicktime");
        let full_body = body_bytes(full).await;

        let partial = send(app(&tmp), uri, Some("bytes=0-")).await;
        assert_eq!(partial.status(), StatusCode::PARTIAL_CONTENT);
        assert_eq!(partial.headers()[header::CONTENT_RANGE], "bytes 0-2047/2048");
        assert_eq!(partial.headers()[header::ACCEPT_RANGES], "bytes");
        assert_eq!(body_bytes(partial).await, full_body);

        let seek = send(app(&tmp), uri, Some("bytes=1024-1535")).await;
        assert_eq!(seek.status(), StatusCode::PARTIAL_CONTENT);
        assert_eq!(seek.headers()[header::CONTENT_LENGTH], "512");
        assert_eq!(body_bytes(seek).await.len(), 512);
    }

    #[tokio::test]
    async fn test_video_malformed_range_falls_back() {
        let tmp = fixture();
        let response = send(
            app(&tmp),
            "/api/video?path=math%2FAlgebra.mov",
            Some("bytes=500-200"),
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_bytes(response).await.len(), 2048);
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_symlink_escape_forbidden() {
        let tmp = fixture();
        std::os::unix::fs::symlink(
            tmp.path().join("secret.txt"),
            tmp.path().join("content/leak.mov"),
        )
        .unwrap();

        let response = send(app(&tmp), "/api/video?path=leak.mov", None).await;
        assert_eq!(response.status(), StatusCode::FORBIDDEN);
    }
}
