//! Tests de integración para el servidor HTTP
//! tests/integration_test.rs
//!
//! Cada test levanta su propio servidor en un puerto efímero y le habla con
//! HTTP crudo sobre `TcpStream`.

use flate2::read::GzDecoder;
use minihttp::config::Config;
use minihttp::server::Server;
use std::io::{Read, Write};
use std::net::{SocketAddr, TcpListener, TcpStream};
use std::path::Path;
use std::thread;
use std::time::Duration;
use tempfile::TempDir;

/// Helper: arranca un servidor en background y retorna su dirección
fn start_server(directory: Option<&Path>) -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let addr = listener.local_addr().unwrap();

    let config = Config {
        port: addr.port(),
        directory: directory.map(Path::to_path_buf),
        ..Config::default()
    };

    thread::spawn(move || {
        let server = Server::new(config);
        server.serve(listener).expect("serve");
    });

    addr
}

/// Helper: envía bytes crudos y retorna la respuesta completa
fn send_raw(addr: SocketAddr, request: &[u8]) -> Vec<u8> {
    let mut stream = TcpStream::connect(addr).expect("connect");

    stream.set_read_timeout(Some(Duration::from_secs(5))).unwrap();
    stream.set_write_timeout(Some(Duration::from_secs(5))).unwrap();

    stream.write_all(request).unwrap();
    stream.flush().unwrap();

    let mut response = Vec::new();
    stream.read_to_end(&mut response).unwrap();
    response
}

/// Helper: envía un GET con headers extra
fn send_get(addr: SocketAddr, path: &str, headers: &[(&str, &str)]) -> Vec<u8> {
    let mut request = format!("GET {} HTTP/1.1\r\nHost: localhost\r\n", path);
    for (name, value) in headers {
        request.push_str(&format!("{}: {}\r\n", name, value));
    }
    request.push_str("\r\n");

    send_raw(addr, request.as_bytes())
}

fn send_post(addr: SocketAddr, path: &str, body: &[u8]) -> Vec<u8> {
    let mut request = format!(
        "POST {} HTTP/1.1\r\nHost: localhost\r\nContent-Length: {}\r\n\r\n",
        path,
        body.len()
    )
    .into_bytes();
    request.extend_from_slice(body);

    send_raw(addr, &request)
}

/// Helper: separa la respuesta en (head, body)
fn split_response(response: &[u8]) -> (String, Vec<u8>) {
    let pos = response
        .windows(4)
        .position(|w| w == b"\r\n\r\n")
        .expect("response without header terminator");

    (
        String::from_utf8(response[..pos].to_vec()).unwrap(),
        response[pos + 4..].to_vec(),
    )
}

/// Helper: valor de un header en el head de la respuesta
fn header_value<'a>(head: &'a str, name: &str) -> Option<&'a str> {
    head.split("\r\n")
        .skip(1)
        .filter_map(|line| line.split_once(": "))
        .find(|(key, _)| key.eq_ignore_ascii_case(name))
        .map(|(_, value)| value)
}

#[test]
fn test_root() {
    let addr = start_server(None);

    assert_eq!(send_get(addr, "/", &[]), b"HTTP/1.1 200 OK\r\n\r\n");
}

#[test]
fn test_echo() {
    let addr = start_server(None);

    assert_eq!(
        send_get(addr, "/echo/abc", &[]),
        b"HTTP/1.1 200 OK\r\nContent-Type: text/plain\r\nContent-Length: 3\r\n\r\nabc"
    );
}

#[test]
fn test_echo_gzip() {
    let addr = start_server(None);

    let response = send_get(addr, "/echo/abc", &[("Accept-Encoding", "gzip")]);
    let (head, body) = split_response(&response);

    assert!(head.starts_with("HTTP/1.1 200 OK"));
    assert_eq!(header_value(&head, "Content-Encoding"), Some("gzip"));
    assert_eq!(header_value(&head, "Content-Length"), Some(body.len().to_string().as_str()));

    let mut decoded = String::new();
    GzDecoder::new(&body[..]).read_to_string(&mut decoded).unwrap();
    assert_eq!(decoded, "abc");
}

#[test]
fn test_echo_multiple_encodings() {
    let addr = start_server(None);

    let response = send_get(
        addr,
        "/echo/hello",
        &[("Accept-Encoding", "invalid-encoding-1, gzip, invalid-encoding-2")],
    );
    let (head, _) = split_response(&response);
    assert_eq!(header_value(&head, "Content-Encoding"), Some("gzip"));

    let response = send_get(addr, "/echo/hello", &[("Accept-Encoding", "invalid-encoding")]);
    let (head, body) = split_response(&response);
    assert_eq!(header_value(&head, "Content-Encoding"), None);
    assert_eq!(body, b"hello");
}

#[test]
fn test_user_agent() {
    let addr = start_server(None);

    let response = send_get(addr, "/user-agent", &[("User-Agent", "test-client/1.0")]);
    let (head, body) = split_response(&response);

    assert!(head.starts_with("HTTP/1.1 200 OK"));
    assert_eq!(body, b"test-client/1.0");
}

#[test]
fn test_files_round_trip() {
    let dir = TempDir::new().unwrap();
    let addr = start_server(Some(dir.path()));

    let response = send_post(addr, "/files/foo.txt", b"hello");
    let (head, body) = split_response(&response);
    assert!(head.starts_with("HTTP/1.1 201 Created"), "got: {}", head);
    assert_eq!(body, b"hello");

    let response = send_get(addr, "/files/foo.txt", &[]);
    assert_eq!(
        response,
        b"HTTP/1.1 200 OK\r\nContent-Type: application/octet-stream\r\nContent-Length: 5\r\n\r\nhello"
    );
}

#[test]
fn test_files_overwrite() {
    let dir = TempDir::new().unwrap();
    let addr = start_server(Some(dir.path()));

    send_post(addr, "/files/same.bin", b"first version");
    send_post(addr, "/files/same.bin", b"second");

    let (_, body) = split_response(&send_get(addr, "/files/same.bin", &[]));
    assert_eq!(body, b"second");
}

#[test]
fn test_files_binary_body() {
    let dir = TempDir::new().unwrap();
    let addr = start_server(Some(dir.path()));
    let payload: Vec<u8> = (0..=255u8).cycle().take(3000).collect();

    send_post(addr, "/files/blob", &payload);

    let (_, body) = split_response(&send_get(addr, "/files/blob", &[]));
    assert_eq!(body, payload);
}

#[test]
fn test_files_missing() {
    let dir = TempDir::new().unwrap();
    let addr = start_server(Some(dir.path()));

    assert_eq!(
        send_get(addr, "/files/missing.txt", &[]),
        b"HTTP/1.1 404 Not Found\r\n\r\n"
    );
}

#[test]
fn test_files_without_directory() {
    let addr = start_server(None);

    assert_eq!(
        send_get(addr, "/files/foo.txt", &[]),
        b"HTTP/1.1 400 Bad Request\r\n\r\n"
    );
    assert_eq!(
        send_post(addr, "/files/foo.txt", b"hello"),
        b"HTTP/1.1 400 Bad Request\r\n\r\n"
    );
}

#[test]
fn test_not_found() {
    let addr = start_server(None);

    assert_eq!(
        send_get(addr, "/unknown/path", &[]),
        b"HTTP/1.1 404 Not Found\r\n\r\n"
    );
}

#[test]
fn test_unknown_method() {
    let addr = start_server(None);

    assert_eq!(
        send_raw(addr, b"DELETE /echo/abc HTTP/1.1\r\n\r\n"),
        b"HTTP/1.1 404 Not Found\r\n\r\n"
    );
}

#[test]
fn test_malformed_request() {
    let addr = start_server(None);

    assert_eq!(
        send_raw(addr, b"NONSENSE\r\n\r\n"),
        b"HTTP/1.1 400 Bad Request\r\n\r\n"
    );
}

#[test]
fn test_concurrent_requests() {
    let addr = start_server(None);

    let handles: Vec<_> = (0..8)
        .map(|i| {
            thread::spawn(move || {
                let response = send_get(addr, &format!("/echo/client-{}", i), &[]);
                let (_, body) = split_response(&response);
                assert_eq!(body, format!("client-{}", i).as_bytes());
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }
}
