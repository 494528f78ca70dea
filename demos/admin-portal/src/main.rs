//! Care-facility admin portal demo behind the Wardgate route guard
//!
//! Every page is a stub; the point is the guard in front of them. Log in by
//! POSTing to `/login?role=Healthcare%20Staff` (the demo forges an unsigned
//! token for the chosen role - a real deployment gets its token from the
//! API backend at login), then try the pages:
//!
//! ```text
//! curl -i -X POST 'http://127.0.0.1:3000/login?role=Canteen%20Staff'
//! curl -i -b 'token=...' http://127.0.0.1:3000/canteen-item/7
//! curl -i -b 'token=...' http://127.0.0.1:3000/user        # 302 -> /home
//! curl -i http://127.0.0.1:3000/home                       # 302 -> /login
//! ```

use anyhow::Result;
use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine};
use bytes::Bytes;
use clap::Parser;
use http_body_util::Full;
use hyper::body::Incoming;
use hyper::server::conn::http1;
use hyper::service::service_fn;
use hyper::{header, Method, Request, Response, StatusCode};
use hyper_util::rt::TokioIo;
use std::convert::Infallible;
use std::sync::Arc;
use tokio::net::TcpListener;
use wardgate_core::prelude::*;

#[derive(Parser, Debug)]
#[command(name = "admin-portal")]
#[command(about = "Admin portal demo behind the Wardgate route guard")]
struct Args {
    /// Port to listen on
    #[arg(short, long, default_value_t = 3000)]
    port: u16,

    /// Gate configuration file (falls back to shipped defaults)
    #[arg(short, long, default_value = "wardgate.toml")]
    config: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let config = GateConfig::load_from(&args.config)?;
    let guard = Arc::new(config.build_guard());

    let listener = TcpListener::bind(("127.0.0.1", args.port)).await?;
    log::info!("Admin portal listening on http://127.0.0.1:{}", args.port);

    loop {
        let (stream, _) = listener.accept().await?;
        let guard = Arc::clone(&guard);
        tokio::spawn(async move {
            let io = TokioIo::new(stream);
            let service = service_fn(move |req| {
                let guard = Arc::clone(&guard);
                async move { handle(req, &guard) }
            });
            if let Err(err) = http1::Builder::new().serve_connection(io, service).await {
                log::warn!("Connection error: {}", err);
            }
        });
    }
}

fn handle(req: Request<Incoming>, guard: &RouteGuard) -> Result<Response<Full<Bytes>>, Infallible> {
    let path = req.uri().path().to_string();

    // Login and logout manage the token cookie themselves; every other
    // request goes through the guard.
    if path == guard.redirects().login_path && req.method() == Method::POST {
        return Ok(login(&req, guard));
    }
    if path == "/logout" {
        return Ok(logout(guard));
    }

    match guard.check(&req) {
        GuardResult::Deny(redirect) => Ok(redirect),
        GuardResult::Allow => Ok(page(&path)),
    }
}

/// Forge an unsigned token for the requested role and set the cookie.
///
/// The gate never verifies signatures, so the demo can mint its own tokens;
/// a real portal receives a signed token from the API backend here.
fn login(req: &Request<Incoming>, guard: &RouteGuard) -> Response<Full<Bytes>> {
    let role = req
        .uri()
        .query()
        .and_then(|query| {
            query.split('&').find_map(|pair| pair.strip_prefix("role=").map(str::to_string))
        })
        .and_then(|raw| urlencoding::decode(&raw).ok().map(|s| s.into_owned()))
        .unwrap_or_else(|| "User".to_string());

    let token = forge_token(&role);
    log::info!("Issued demo token for role {:?}", role);

    let mut resp = redirect_response(&guard.redirects().home_path);
    let cookie = guard.gate().cookie().build_set_cookie(&token);
    resp.headers_mut().insert(header::SET_COOKIE, cookie.parse().unwrap());
    resp
}

fn logout(guard: &RouteGuard) -> Response<Full<Bytes>> {
    let mut resp = redirect_response(&guard.redirects().login_path);
    let cookie = guard.gate().cookie().build_delete_cookie();
    resp.headers_mut().insert(header::SET_COOKIE, cookie.parse().unwrap());
    resp
}

fn forge_token(role: &str) -> String {
    let header = URL_SAFE_NO_PAD.encode(br#"{"alg":"none","typ":"JWT"}"#);
    let payload = serde_json::json!({ "sub": "demo-user", "role": role });
    let payload = URL_SAFE_NO_PAD.encode(payload.to_string().as_bytes());
    format!("{}.{}.demo", header, payload)
}

fn page(path: &str) -> Response<Full<Bytes>> {
    let body = format!(
        r#"<!DOCTYPE html>
<html><head><title>Admin Portal</title></head>
<body><h1>{path}</h1><p>Stub page for {path}.</p>
<p><a href="/logout">Log out</a></p></body></html>"#,
    );
    Response::builder()
        .status(StatusCode::OK)
        .header("Content-Type", "text/html")
        .body(Full::new(Bytes::from(body)))
        .unwrap()
}
