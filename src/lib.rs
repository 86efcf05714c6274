//! # minihttp
//! src/lib.rs
//!
//! Servidor HTTP/1.1 mínimo implementado desde cero: parser de requests,
//! router por prefijo de path, compresión gzip negociada y rutas respaldadas
//! por archivos.
//!
//! ## Arquitectura
//!
//! ```text
//! bytes → Request::parse → Router::route → handler → Response::to_bytes → bytes
//! ```
//!
//! - `http`: Parsing, respuestas, status codes y Content-Encoding
//! - `router`: Tabla de rutas `(método, segmento)` → handler
//! - `commands`: Handlers de `/echo`, `/user-agent` y `/files`
//! - `storage`: Lectura/escritura de archivos bajo `--directory`
//! - `server`: Accept loop TCP, un thread por conexión
//! - `config`: Argumentos CLI y variables de entorno
//! - `logging`: Inicialización de `tracing`
//!
//! ## Ejemplo de uso
//!
//! ```
//! use minihttp::config::ServerConfig;
//! use minihttp::router::Router;
//! use minihttp::server::handle_bytes;
//!
//! let router = Router::with_default_routes(ServerConfig::default());
//! let response = handle_bytes(&router, b"GET /echo/abc HTTP/1.1\r\n\r\n");
//!
//! assert!(response.ends_with(b"\r\n\r\nabc"));
//! ```

pub mod commands;
pub mod config;
pub mod http;
pub mod logging;
pub mod router;
pub mod server;
pub mod storage;
