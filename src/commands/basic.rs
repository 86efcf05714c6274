//! # Comandos de Texto
//! src/commands/basic.rs
//!
//! - `GET /echo/<value>`: devuelve `<value>`, comprimido con gzip si el
//!   cliente lo acepta
//! - `GET /user-agent`: devuelve el header `User-Agent` del request

use crate::http::encoding;
use crate::http::{Request, Response, StatusCode};
use crate::router::{Context, RouteError};
use tracing::warn;

const TEXT_PLAIN: &str = "text/plain";

/// Handler para /echo/<value>
///
/// Con `Accept-Encoding: gzip` el body va comprimido y el header
/// `Content-Encoding` se emite antes que `Content-Length`:
///
/// ```text
/// HTTP/1.1 200 OK\r\n
/// Content-Encoding: gzip\r\n
/// Content-Type: text/plain\r\n
/// Content-Length: 23\r\n
/// ```
///
/// Si la compresión falla se responde sin comprimir.
pub fn echo_handler(req: &Request, ctx: &Context<'_>) -> Result<Response, RouteError> {
    let content = ctx.argument.as_bytes();
    let response = Response::new(StatusCode::Ok);

    if let Some(chosen) = req.header("accept-encoding").and_then(encoding::negotiate) {
        match encoding::encode(content, chosen, ctx.gzip_level) {
            Ok(compressed) => {
                return Ok(response
                    .with_header("Content-Encoding", chosen.as_str())
                    .with_header("Content-Type", TEXT_PLAIN)
                    .with_body_bytes(compressed));
            }
            Err(error) => warn!(%error, "compression failed, sending identity body"),
        }
    }

    Ok(response
        .with_header("Content-Type", TEXT_PLAIN)
        .with_body_bytes(content.to_vec()))
}

/// Handler para /user-agent
///
/// Sin header `User-Agent` el body queda vacío (`Content-Length: 0`).
pub fn user_agent_handler(req: &Request, _ctx: &Context<'_>) -> Result<Response, RouteError> {
    let user_agent = req.header("user-agent").unwrap_or_default();

    Ok(Response::new(StatusCode::Ok)
        .with_header("Content-Type", TEXT_PLAIN)
        .with_body(user_agent))
}
