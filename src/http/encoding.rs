//! # Negociación de Content-Encoding
//! src/http/encoding.rs
//!
//! El cliente declara en `Accept-Encoding` qué codificaciones acepta; el
//! servidor solo sabe comprimir con gzip. Cualquier otro token se ignora.

use flate2::write::GzEncoder;
use flate2::Compression;
use std::io::{self, Write};

/// Codificaciones soportadas
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentEncoding {
    Gzip,
}

impl ContentEncoding {
    /// Valor para el header `Content-Encoding`
    pub fn as_str(&self) -> &'static str {
        match self {
            ContentEncoding::Gzip => "gzip",
        }
    }
}

/// Elige una codificación a partir del valor de `Accept-Encoding`
///
/// Los tokens se separan por comas; se ignoran espacios, mayúsculas y
/// parámetros como `;q=0.5`.
///
/// # Ejemplo
/// ```
/// use minihttp::http::encoding::{negotiate, ContentEncoding};
///
/// assert_eq!(negotiate("deflate, gzip"), Some(ContentEncoding::Gzip));
/// assert_eq!(negotiate("br"), None);
/// ```
pub fn negotiate(accept_encoding: &str) -> Option<ContentEncoding> {
    accept_encoding
        .split(',')
        .filter_map(|token| token.split(';').next())
        .map(str::trim)
        .find(|token| token.eq_ignore_ascii_case("gzip"))
        .map(|_| ContentEncoding::Gzip)
}

/// Codifica `bytes` con la codificación elegida
///
/// `level` va de 0 (sin compresión) a 9 (máxima). El header gzip lleva mtime
/// 0, así que la salida es la misma para la misma entrada y nivel.
pub fn encode(bytes: &[u8], encoding: ContentEncoding, level: u32) -> io::Result<Vec<u8>> {
    match encoding {
        ContentEncoding::Gzip => {
            let mut encoder = GzEncoder::new(Vec::new(), Compression::new(level));
            encoder.write_all(bytes)?;
            encoder.finish()
        }
    }
}
