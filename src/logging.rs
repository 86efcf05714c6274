//! # Logging
//! src/logging.rs
//!
//! Inicializa el subscriber de `tracing`. `RUST_LOG` tiene prioridad sobre el
//! nivel pasado por `--log-level`.

use tracing_subscriber::EnvFilter;

/// Instala el subscriber global
///
/// Falla si ya había uno instalado (por ejemplo, al llamarla dos veces).
pub fn init(default_level: &str) -> Result<(), String> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_level))
        .map_err(|e| format!("Invalid log level '{}': {}", default_level, e))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_thread_names(true)
        .try_init()
        .map_err(|e| format!("Failed to initialize logging: {}", e))
}
