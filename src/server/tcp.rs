//! # Servidor TCP Concurrente
//! src/server/tcp.rs
//!
//! Acepta conexiones y procesa cada una en su propio thread. Cada conexión
//! lleva un único request: se lee completo, se responde y se cierra.

use crate::config::Config;
use crate::http::{ParseError, Request, Response, StatusCode};
use crate::router::Router;
use std::io::{self, Read, Write};
use std::net::{TcpListener, TcpStream};
use std::sync::Arc;
use std::thread;
use std::time::Instant;
use tracing::{debug, error, info, warn};

const READ_CHUNK: usize = 1024;
const HEADER_END: &[u8] = b"\r\n\r\n";

/// Servidor HTTP/1.1 con un thread por conexión
pub struct Server {
    config: Config,
    router: Arc<Router>,
}

impl Server {
    pub fn new(config: Config) -> Self {
        let router = Router::with_default_routes(config.server_config());

        Self {
            config,
            router: Arc::new(router),
        }
    }

    /// Hace bind en `host:port` y atiende conexiones indefinidamente
    pub fn run(&self) -> io::Result<()> {
        let address = self.config.address();
        let listener = TcpListener::bind(&address)?;
        info!(%address, "server listening");

        self.serve(listener)
    }

    /// Atiende conexiones de un listener ya creado
    pub fn serve(&self, listener: TcpListener) -> io::Result<()> {
        for stream in listener.incoming() {
            match stream {
                Ok(stream) => {
                    let router = Arc::clone(&self.router);

                    let peer_addr = stream
                        .peer_addr()
                        .map(|addr| addr.to_string())
                        .unwrap_or_else(|_| "unknown".to_string());
                    debug!(peer = %peer_addr, "accepted connection");

                    thread::spawn(move || {
                        if let Err(e) = Self::handle_connection(stream, &router) {
                            error!(peer = %peer_addr, error = %e, "connection failed");
                        }
                    });
                }
                Err(e) => {
                    warn!(error = %e, "failed to accept connection");
                }
            }
        }

        Ok(())
    }

    fn handle_connection(mut stream: TcpStream, router: &Router) -> io::Result<()> {
        let start = Instant::now();

        let raw = read_message(&mut stream)?;
        let Some(response) = respond(router, &raw) else {
            debug!("connection closed without a request");
            return Ok(());
        };

        stream.write_all(&response.to_bytes())?;
        stream.flush()?;

        info!(
            status = %response.status(),
            elapsed_ms = start.elapsed().as_secs_f64() * 1000.0,
            "response sent"
        );

        Ok(())
    }
}

/// Procesa un request completo y retorna los bytes de la respuesta
///
/// Es el contrato bytes → bytes del núcleo. Un buffer vacío produce un
/// vector vacío (no hay nada que responder).
pub fn handle_bytes(router: &Router, raw: &[u8]) -> Vec<u8> {
    respond(router, raw)
        .map(|response| response.to_bytes())
        .unwrap_or_default()
}

/// Parsea y enruta; `None` si el cliente no mandó nada
///
/// Un request malformado recibe siempre `400 Bad Request` sin body.
fn respond(router: &Router, raw: &[u8]) -> Option<Response> {
    match Request::parse(raw) {
        Ok(request) => {
            info!(method = %request.method(), path = request.path(), "request");
            Some(router.route(&request))
        }
        Err(ParseError::EmptyRequest) => None,
        Err(e) => {
            warn!(error = %e, "parse error");
            Some(Response::new(StatusCode::BadRequest))
        }
    }
}

/// Lee un mensaje HTTP completo del stream
///
/// Lee en bloques de 1024 bytes hasta tener el bloque de headers y, si hay
/// `Content-Length`, esa cantidad de bytes de body. EOF también termina la
/// lectura. Sin timeouts: un cliente que nunca termina bloquea su thread.
pub fn read_message<R: Read>(reader: &mut R) -> io::Result<Vec<u8>> {
    let mut buffer = Vec::new();
    let mut chunk = [0u8; READ_CHUNK];

    loop {
        let bytes_read = match reader.read(&mut chunk) {
            Ok(n) => n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        };

        if bytes_read == 0 {
            break;
        }

        buffer.extend_from_slice(&chunk[..bytes_read]);

        if is_complete(&buffer) {
            break;
        }
    }

    Ok(buffer)
}

fn is_complete(buffer: &[u8]) -> bool {
    let Some(head_end) = buffer
        .windows(HEADER_END.len())
        .position(|window| window == HEADER_END)
    else {
        return false;
    };

    let received_body = buffer.len() - (head_end + HEADER_END.len());
    received_body >= declared_content_length(&buffer[..head_end])
}

fn declared_content_length(head: &[u8]) -> usize {
    String::from_utf8_lossy(head)
        .split("\r\n")
        .skip(1)
        .filter_map(|line| line.split_once(':'))
        // Igual que el parser: si el header se repite, gana el último
        .filter(|(name, _)| name.trim().eq_ignore_ascii_case("content-length"))
        .last()
        .and_then(|(_, value)| value.trim().parse().ok())
        .unwrap_or(0)
}
