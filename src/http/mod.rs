//! # Módulo HTTP
//!
//! Implementa el subconjunto de HTTP/1.1 que usa el servidor, sin librerías
//! de alto nivel:
//!
//! - Parsing de requests
//! - Construcción de responses
//! - Códigos de estado
//! - Negociación y compresión gzip del body
//!
//! No hay conexiones persistentes ni chunked transfer encoding: cada conexión
//! lleva exactamente un request y una respuesta.
//!
//! ### Formato de Request
//!
//! ```text
//! GET /echo/abc HTTP/1.1\r\n
//! Accept-Encoding: gzip\r\n
//! \r\n
//! ```
//!
//! ### Formato de Response
//!
//! ```text
//! HTTP/1.1 200 OK\r\n
//! Content-Encoding: gzip\r\n
//! Content-Type: text/plain\r\n
//! Content-Length: 23\r\n
//! \r\n
//! <bytes gzip>
//! ```

pub mod encoding;  // Negociación de Content-Encoding
pub mod request;   // Parsing de HTTP requests
pub mod response;  // Construcción de HTTP responses
pub mod status;    // Códigos de estado HTTP

pub use encoding::ContentEncoding;
pub use request::{Method, ParseError, Request};
pub use response::Response;
pub use status::StatusCode;
