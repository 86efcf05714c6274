//! # Módulo del Servidor HTTP
//! src/server/mod.rs
//!
//! Borde de transporte del servidor:
//! 1. Escucha en un puerto
//! 2. Acepta conexiones (un thread por conexión)
//! 3. Lee el request completo y lo pasa al núcleo (parser → router)
//! 4. Escribe la respuesta y cierra la conexión

pub mod tcp;

pub use tcp::{handle_bytes, read_message, Server};
