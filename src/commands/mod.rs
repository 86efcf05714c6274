//! # Comandos del Servidor
//!
//! Handlers de cada familia de rutas. Cada uno recibe el Request y el
//! [`Context`](crate::router::Context) de la ruta, y retorna una Response o
//! un [`RouteError`](crate::router::RouteError).
//!
//! - **basic**: `/echo` y `/user-agent`
//! - **files**: `/files` (lectura y escritura en el almacén)

pub mod basic;
pub mod files;

pub use basic::*;
pub use files::*;
