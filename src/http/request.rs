//! # Parsing de Requests HTTP/1.1
//! src/http/request.rs
//!
//! Parser HTTP escrito a mano, sin librerías de alto nivel.
//!
//! ## Formato de un Request
//!
//! ```text
//! POST /files/foo.txt HTTP/1.1\r\n
//! Host: localhost:4221\r\n
//! User-Agent: curl/8.4.0\r\n
//! \r\n
//! hello
//! ```
//!
//! ## Máquina de estados
//!
//! El parser avanza línea por línea (separadas por `\r\n`) a través de tres
//! estados:
//!
//! 1. **RequestLine**: `METHOD TARGET VERSION` (la versión se ignora)
//! 2. **Headers**: pares `Name: Value` hasta la primera línea vacía
//! 3. **Body**: todos los bytes restantes, tal cual
//!
//! No se valida el body contra `Content-Length`: quien llama entrega el
//! mensaje completo.

use std::collections::HashMap;
use std::fmt;
use thiserror::Error;

const CRLF: &[u8] = b"\r\n";

/// Métodos HTTP
///
/// Los métodos desconocidos no son un error de parsing: se conservan como
/// `Other` y el router responde 404.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Method {
    /// GET - Obtener un recurso
    GET,

    /// HEAD - Como GET pero sin body
    HEAD,

    /// POST - Enviar datos a un recurso
    POST,

    /// Cualquier otro token, sin interpretar
    Other(String),
}

impl Method {
    fn from_token(token: &str) -> Self {
        match token {
            "GET" => Method::GET,
            "HEAD" => Method::HEAD,
            "POST" => Method::POST,
            other => Method::Other(other.to_string()),
        }
    }

    /// Convierte el método a string
    pub fn as_str(&self) -> &str {
        match self {
            Method::GET => "GET",
            Method::HEAD => "HEAD",
            Method::POST => "POST",
            Method::Other(token) => token,
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Representa un request HTTP parseado
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    method: Method,

    /// Request-target sin decodificar (siempre empieza con `/`)
    path: String,

    /// Headers con nombre en minúsculas y valores sin espacios alrededor
    headers: HashMap<String, String>,

    body: Vec<u8>,
}

/// Errores que pueden ocurrir durante el parsing
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// Request vacío (el cliente no mandó nada útil)
    #[error("empty request")]
    EmptyRequest,

    /// Request line con menos de 2 tokens o target que no empieza con `/`
    #[error("malformed request line: {0:?}")]
    MalformedRequestLine(String),

    /// Línea de header sin `:` o con un `\r`/`\n` suelto
    #[error("malformed header: {0:?}")]
    MalformedHeader(String),
}

/// Estados del parser
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    RequestLine,
    Headers,
    Body,
}

impl Request {
    /// Construye un request programáticamente
    ///
    /// Útil para clientes y tests; el servidor usa [`Request::parse`].
    pub fn new(method: Method, path: &str) -> Self {
        Self {
            method,
            path: path.to_string(),
            headers: HashMap::new(),
            body: Vec::new(),
        }
    }

    /// Agrega un header, normalizado igual que lo haría el parser
    pub fn with_header(mut self, name: &str, value: &str) -> Self {
        self.headers
            .insert(name.trim().to_ascii_lowercase(), value.trim().to_string());
        self
    }

    /// Establece el body
    pub fn with_body(mut self, body: impl Into<Vec<u8>>) -> Self {
        self.body = body.into();
        self
    }

    /// Parsea un request HTTP desde bytes
    ///
    /// # Ejemplo
    ///
    /// ```
    /// use minihttp::http::Request;
    ///
    /// let raw = b"GET /echo/abc HTTP/1.1\r\nUser-Agent: curl\r\n\r\n";
    /// let request = Request::parse(raw).unwrap();
    ///
    /// assert_eq!(request.path(), "/echo/abc");
    /// assert_eq!(request.header("user-agent"), Some("curl"));
    /// ```
    pub fn parse(buffer: &[u8]) -> Result<Self, ParseError> {
        if buffer.iter().all(u8::is_ascii_whitespace) {
            return Err(ParseError::EmptyRequest);
        }

        let mut state = State::RequestLine;
        let mut cursor = 0;
        let mut start_line = None;
        let mut headers = HashMap::new();
        let mut body = Vec::new();

        loop {
            match state {
                State::RequestLine => match next_line(buffer, &mut cursor) {
                    None => break,
                    // Líneas vacías antes de la request line se ignoran
                    Some([]) => {}
                    Some(line) => {
                        start_line = Some(Self::parse_request_line(line)?);
                        state = State::Headers;
                    }
                },
                State::Headers => match next_line(buffer, &mut cursor) {
                    // Sin línea vacía final: headers completos, body vacío
                    None => break,
                    Some([]) => state = State::Body,
                    Some(line) => {
                        let (name, value) = Self::parse_header(line)?;
                        headers.insert(name, value);
                    }
                },
                State::Body => {
                    body = buffer[cursor..].to_vec();
                    break;
                }
            }
        }

        let (method, path) = start_line.ok_or(ParseError::EmptyRequest)?;

        Ok(Request {
            method,
            path,
            headers,
            body,
        })
    }

    /// Parsea la request line
    ///
    /// Formato: `GET /path HTTP/1.1`
    fn parse_request_line(line: &[u8]) -> Result<(Method, String), ParseError> {
        let malformed = || ParseError::MalformedRequestLine(String::from_utf8_lossy(line).into_owned());

        let text = std::str::from_utf8(line).map_err(|_| malformed())?;
        let mut tokens = text.split(' ').filter(|token| !token.is_empty());

        let (Some(method), Some(target)) = (tokens.next(), tokens.next()) else {
            return Err(malformed());
        };

        if !target.starts_with('/') {
            return Err(malformed());
        }

        Ok((Method::from_token(method), target.to_string()))
    }

    /// Parsea un header `Name: Value`
    fn parse_header(line: &[u8]) -> Result<(String, String), ParseError> {
        let malformed = || ParseError::MalformedHeader(String::from_utf8_lossy(line).into_owned());

        // Un `\r` o `\n` suelto no puede quedar dentro de un valor
        if line.iter().any(|b| *b == b'\r' || *b == b'\n') {
            return Err(malformed());
        }

        let text = std::str::from_utf8(line).map_err(|_| malformed())?;
        let (name, value) = text.split_once(':').ok_or_else(malformed)?;

        let name = name.trim();
        if name.is_empty() {
            return Err(malformed());
        }

        Ok((name.to_ascii_lowercase(), value.trim().to_string()))
    }

    /// Serializa el request al formato de la red
    ///
    /// Inverso de [`Request::parse`]; el orden de los headers no está definido.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut result = format!("{} {} HTTP/1.1\r\n", self.method, self.path).into_bytes();

        for (name, value) in &self.headers {
            result.extend_from_slice(format!("{}: {}\r\n", name, value).as_bytes());
        }

        result.extend_from_slice(CRLF);
        result.extend_from_slice(&self.body);
        result
    }

    // === Métodos públicos para acceder a los campos ===

    pub fn method(&self) -> &Method {
        &self.method
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn headers(&self) -> &HashMap<String, String> {
        &self.headers
    }

    /// Obtiene un header específico (el nombre no distingue mayúsculas)
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(&name.to_ascii_lowercase())
            .map(|s| s.as_str())
    }

    pub fn body(&self) -> &[u8] {
        &self.body
    }
}

/// Devuelve la siguiente línea a partir de `cursor` (sin el `\r\n`) y avanza
/// el cursor. La última línea puede no tener terminador.
fn next_line<'a>(buffer: &'a [u8], cursor: &mut usize) -> Option<&'a [u8]> {
    if *cursor >= buffer.len() {
        return None;
    }

    let rest = &buffer[*cursor..];
    match rest.windows(CRLF.len()).position(|window| window == CRLF) {
        Some(pos) => {
            *cursor += pos + CRLF.len();
            Some(&rest[..pos])
        }
        None => {
            *cursor = buffer.len();
            Some(rest)
        }
    }
}
