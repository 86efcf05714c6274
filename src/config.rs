//! # Configuración del Servidor
//! src/config.rs
//!
//! Configuración completa vía argumentos CLI y variables de entorno.
//!
//! ## Ejemplos de uso
//!
//! ### CLI
//! ```bash
//! ./minihttp --directory /tmp/data --port 4221 --gzip-level 9
//! ```
//!
//! ### Variables de entorno
//! ```bash
//! HTTP_PORT=8080 STORAGE_DIR=/tmp/data ./minihttp
//! ```
//!
//! Los handlers nunca leen argumentos ni variables de entorno: reciben un
//! [`ServerConfig`] ya resuelto al construir el router.

use clap::Parser;
use std::path::PathBuf;

/// Configuración del proceso
#[derive(Debug, Clone, Parser)]
#[command(name = "minihttp")]
#[command(about = "Servidor HTTP/1.1 mínimo con rutas /echo, /user-agent y /files")]
#[command(version = "0.1.0")]
pub struct Config {
    /// Puerto en el que escucha el servidor
    #[arg(short, long, default_value = "4221", env = "HTTP_PORT")]
    pub port: u16,

    /// Host/IP en el que escucha
    #[arg(long, default_value = "127.0.0.1", env = "HTTP_HOST")]
    pub host: String,

    /// Directorio donde se guardan/leen archivos de /files
    ///
    /// Sin él, las rutas /files responden 400.
    #[arg(long, env = "STORAGE_DIR")]
    pub directory: Option<PathBuf>,

    /// Nivel de compresión gzip (0-9)
    #[arg(long = "gzip-level", default_value = "6", env = "GZIP_LEVEL")]
    pub gzip_level: u32,

    /// Filtro de logging por defecto (RUST_LOG tiene prioridad)
    #[arg(long = "log-level", default_value = "info", env = "LOG_LEVEL")]
    pub log_level: String,
}

/// Parte de la configuración que consume el router
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Raíz del almacén de archivos, si fue configurada
    pub storage_root: Option<PathBuf>,

    /// Nivel de compresión para respuestas gzip
    pub gzip_level: u32,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            storage_root: None,
            gzip_level: 6,
        }
    }
}

impl Config {
    /// Crea una nueva configuración parseando argumentos CLI
    pub fn new() -> Self {
        Config::parse()
    }

    /// Obtiene la dirección completa para bind (host:port)
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Extrae la configuración que necesita el router
    pub fn server_config(&self) -> ServerConfig {
        ServerConfig {
            storage_root: self.directory.clone(),
            gzip_level: self.gzip_level,
        }
    }

    /// Valida la configuración
    ///
    /// Un directorio que todavía no existe es válido (los GET darán 404 y los
    /// POST 400); uno que existe pero no es directorio no lo es.
    pub fn validate(&self) -> Result<(), String> {
        if self.port == 0 {
            return Err("Port must be >= 1".to_string());
        }

        if self.gzip_level > 9 {
            return Err("Gzip level must be 0-9".to_string());
        }

        if let Some(dir) = &self.directory {
            if dir.exists() && !dir.is_dir() {
                return Err(format!("Directory {} is not a directory", dir.display()));
            }
        }

        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 4221,
            host: "127.0.0.1".to_string(),
            directory: None,
            gzip_level: 6,
            log_level: "info".to_string(),
        }
    }
}
