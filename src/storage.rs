//! # Almacén de Archivos
//! src/storage.rs
//!
//! Lee y escribe archivos bajo el directorio configurado con `--directory`.
//! Es el backend de las rutas `/files/<name>`.
//!
//! El nombre se une directamente al directorio raíz, sin canonicalizar: un
//! nombre con `..` puede salir del directorio. No hay locks entre conexiones;
//! dos escrituras concurrentes al mismo archivo dejan el contenido de la
//! última.

use std::fs;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errores del almacén
#[derive(Debug, Error)]
pub enum StoreError {
    /// El archivo no existe o no se pudo abrir/leer (incluye permisos)
    #[error("file not found: {name}")]
    FileNotFound {
        name: String,
        #[source]
        source: io::Error,
    },

    /// No se pudo crear o escribir el archivo
    #[error("could not write file: {name}")]
    WriteError {
        name: String,
        #[source]
        source: io::Error,
    },
}

/// Directorio raíz donde viven los archivos servidos
#[derive(Debug, Clone)]
pub struct ResourceStore {
    root: PathBuf,
}

impl ResourceStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn resolve(&self, name: &str) -> PathBuf {
        self.root.join(name)
    }

    /// Lee el contenido completo de `name`
    pub fn read(&self, name: &str) -> Result<Vec<u8>, StoreError> {
        fs::read(self.resolve(name)).map_err(|source| StoreError::FileNotFound {
            name: name.to_string(),
            source,
        })
    }

    /// Escribe `bytes` en `name`, creando o truncando el archivo
    ///
    /// No hay reintentos: cualquier fallo aborta la operación.
    pub fn write(&self, name: &str, bytes: &[u8]) -> Result<(), StoreError> {
        fs::write(self.resolve(name), bytes).map_err(|source| StoreError::WriteError {
            name: name.to_string(),
            source,
        })
    }
}
