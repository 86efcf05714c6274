//! # Comandos de Archivos
//! src/commands/files.rs
//!
//! - `GET /files/<name>`: contenido del archivo, o 404
//! - `POST /files/<name>`: guarda el body del request, responde 201 con el
//!   mismo contenido, o 400 si no se pudo escribir
//!
//! Sin `--directory` ambos responden 400 sin tocar el disco.

use crate::http::{Request, Response, StatusCode};
use crate::router::{Context, RouteError};
use crate::storage::ResourceStore;
use tracing::debug;

const OCTET_STREAM: &str = "application/octet-stream";

fn store<'a>(ctx: &Context<'a>) -> Result<&'a ResourceStore, RouteError> {
    ctx.store.ok_or(RouteError::MissingConfiguration)
}

/// Handler para GET /files/<name>
pub fn files_get_handler(_req: &Request, ctx: &Context<'_>) -> Result<Response, RouteError> {
    let contents = store(ctx)?.read(ctx.argument)?;
    debug!(name = ctx.argument, bytes = contents.len(), "file read");

    Ok(Response::new(StatusCode::Ok)
        .with_header("Content-Type", OCTET_STREAM)
        .with_body_bytes(contents))
}

/// Handler para POST /files/<name>
///
/// Sobrescribe el archivo si ya existe.
pub fn files_post_handler(req: &Request, ctx: &Context<'_>) -> Result<Response, RouteError> {
    store(ctx)?.write(ctx.argument, req.body())?;
    debug!(name = ctx.argument, bytes = req.body().len(), "file written");

    Ok(Response::new(StatusCode::Created)
        .with_header("Content-Type", OCTET_STREAM)
        .with_body_bytes(req.body().to_vec()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::Method;
    use crate::storage::StoreError;
    use tempfile::TempDir;

    fn context<'a>(argument: &'a str, store: Option<&'a ResourceStore>) -> Context<'a> {
        Context {
            argument,
            store,
            gzip_level: 6,
        }
    }

    #[test]
    fn test_post_then_get() {
        let dir = TempDir::new().unwrap();
        let store = ResourceStore::new(dir.path());

        let post = Request::new(Method::POST, "/files/foo.txt").with_body("hello");
        let created = files_post_handler(&post, &context("foo.txt", Some(&store))).unwrap();
        assert_eq!(
            created.to_bytes(),
            b"HTTP/1.1 201 Created\r\nContent-Type: application/octet-stream\r\nContent-Length: 5\r\n\r\nhello"
        );

        let get = Request::new(Method::GET, "/files/foo.txt");
        let found = files_get_handler(&get, &context("foo.txt", Some(&store))).unwrap();
        assert_eq!(
            found.to_bytes(),
            b"HTTP/1.1 200 OK\r\nContent-Type: application/octet-stream\r\nContent-Length: 5\r\n\r\nhello"
        );
    }

    #[test]
    fn test_post_twice_keeps_last() {
        let dir = TempDir::new().unwrap();
        let store = ResourceStore::new(dir.path());

        for body in ["first", "second"] {
            let post = Request::new(Method::POST, "/files/same.txt").with_body(body);
            files_post_handler(&post, &context("same.txt", Some(&store))).unwrap();
        }

        let get = Request::new(Method::GET, "/files/same.txt");
        let found = files_get_handler(&get, &context("same.txt", Some(&store))).unwrap();
        assert_eq!(found.body(), b"second");
    }

    #[test]
    fn test_get_missing_file() {
        let dir = TempDir::new().unwrap();
        let store = ResourceStore::new(dir.path());

        let get = Request::new(Method::GET, "/files/missing.txt");
        let error = files_get_handler(&get, &context("missing.txt", Some(&store))).unwrap_err();

        assert!(matches!(error, RouteError::Store(StoreError::FileNotFound { .. })));
        assert_eq!(error.status(), StatusCode::NotFound);
    }

    #[test]
    fn test_post_write_failure() {
        let dir = TempDir::new().unwrap();
        let store = ResourceStore::new(dir.path().join("missing-dir"));

        let post = Request::new(Method::POST, "/files/x").with_body("data");
        let error = files_post_handler(&post, &context("x", Some(&store))).unwrap_err();

        assert_eq!(error.status(), StatusCode::BadRequest);
    }

    #[test]
    fn test_without_storage_root() {
        let get = Request::new(Method::GET, "/files/foo.txt");
        let error = files_get_handler(&get, &context("foo.txt", None)).unwrap_err();
        assert!(matches!(error, RouteError::MissingConfiguration));

        let post = Request::new(Method::POST, "/files/foo.txt").with_body("hello");
        let error = files_post_handler(&post, &context("foo.txt", None)).unwrap_err();
        assert_eq!(error.status(), StatusCode::BadRequest);
    }
}
