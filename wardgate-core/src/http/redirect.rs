//! Redirect response building

use bytes::Bytes;
use http_body_util::Full;
use hyper::{Response, StatusCode};

/// Build a 302 redirect to `location`.
///
/// Carries an HTML meta-refresh body as a fallback for clients that ignore
/// the Location header.
pub fn redirect_response(location: &str) -> Response<Full<Bytes>> {
    Response::builder()
        .status(StatusCode::FOUND)
        .header("Location", location)
        .header("Content-Type", "text/html")
        .body(Full::new(Bytes::from(format!(
            r#"<!DOCTYPE html>
<html><head><meta http-equiv="refresh" content="0;url={}"></head>
<body><p>Redirecting...</p></body></html>"#,
            location
        ))))
        .unwrap()
}
