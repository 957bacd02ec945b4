//! File responses with byte-range support for video seeking

use axum::{
    body::Body,
    http::{header, HeaderValue, StatusCode},
    response::Response,
};
use std::io::SeekFrom;
use std::path::Path;
use tokio::fs::File;
use tokio::io::{AsyncReadExt, AsyncSeekExt};
use tokio_util::io::ReaderStream;

use crate::error::AppError;
use crate::mime::content_type;

/// Content is treated as static for the lifetime of the process
pub const IMMUTABLE_CACHE: &str = "public, max-age=31536000, immutable";

/// Inclusive byte range within a file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ByteRange {
    pub start: u64,
    pub end: u64,
}

impl ByteRange {
    /// Number of bytes covered by the range
    pub fn content_length(&self) -> u64 {
        self.end - self.start + 1
    }
}

/// Parse a single `bytes=<start>-<end?>` range against a file of `file_size` bytes
///
/// Returns `None` for anything that is not exactly one satisfiable range:
/// multiple ranges, suffix ranges, non-numeric bounds, `start > end`,
/// `end >= file_size`, or any range on an empty file.
pub fn parse_range(header: &str, file_size: u64) -> Option<ByteRange> {
    if file_size == 0 {
        return None;
    }

    let spec = header.trim().strip_prefix("bytes=")?.trim();
    if spec.contains(',') {
        return None;
    }

    let (start, end) = spec.split_once('-')?;
    let start = parse_offset(start.trim())?;
    let end = match end.trim() {
        "" => file_size - 1,
        end => parse_offset(end)?,
    };

    if start > end || end >= file_size {
        return None;
    }

    Some(ByteRange { start, end })
}

/// Digits only; `u64::from_str` alone would also take a leading `+`
fn parse_offset(value: &str) -> Option<u64> {
    if value.is_empty() || !value.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    value.parse().ok()
}

/// Serve the file at `path`, honoring an optional `Range` header
///
/// `path` must already have passed the containment guard. A malformed or
/// unsatisfiable range is answered with the whole file and status 200. The
/// body is streamed; dropping it (client disconnect) closes the file.
pub async fn serve_file(path: &Path, range: Option<&HeaderValue>) -> Result<Response, AppError> {
    let file = File::open(path).await.map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => AppError::NotFound("File not found".to_string()),
        _ => AppError::Internal(format!("Failed to open file: {}", e)),
    })?;

    let metadata = file
        .metadata()
        .await
        .map_err(|e| AppError::Internal(format!("Failed to get file metadata: {}", e)))?;
    if !metadata.is_file() {
        return Err(AppError::NotFound("File not found".to_string()));
    }
    let file_size = metadata.len();
    let mime_type = content_type(path);

    let requested = range.map(|value| value.to_str().ok().and_then(|s| parse_range(s, file_size)));
    match requested {
        Some(Some(range)) => partial_response(file, file_size, range, &mime_type).await,
        Some(None) => {
            tracing::debug!(
                "Ignoring unsatisfiable range {:?} for {} byte file",
                range,
                file_size
            );
            full_response(file, file_size, &mime_type)
        }
        None => full_response(file, file_size, &mime_type),
    }
}

fn full_response(file: File, file_size: u64, mime_type: &str) -> Result<Response, AppError> {
    let body = Body::from_stream(ReaderStream::new(file));

    Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, mime_type)
        .header(header::CONTENT_LENGTH, file_size)
        .header(header::ACCEPT_RANGES, "bytes")
        .header(header::CACHE_CONTROL, IMMUTABLE_CACHE)
        .body(body)
        .map_err(|e| AppError::Internal(format!("Failed to build response: {}", e)))
}

async fn partial_response(
    mut file: File,
    file_size: u64,
    range: ByteRange,
    mime_type: &str,
) -> Result<Response, AppError> {
    file.seek(SeekFrom::Start(range.start))
        .await
        .map_err(|e| AppError::Internal(format!("Failed to seek file: {}", e)))?;

    let body = Body::from_stream(ReaderStream::new(file.take(range.content_length())));

    Response::builder()
        .status(StatusCode::PARTIAL_CONTENT)
        .header(header::CONTENT_TYPE, mime_type)
        .header(header::CONTENT_LENGTH, range.content_length())
        .header(
            header::CONTENT_RANGE,
            format!("bytes {}-{}/{}", range.start, range.end, file_size),
        )
        .header(header::ACCEPT_RANGES, "bytes")
        .header(header::CACHE_CONTROL, IMMUTABLE_CACHE)
        .body(body)
        .map_err(|e| AppError::Internal(format!("Failed to build response: {}", e)))
}
