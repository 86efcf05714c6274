//! # minihttp - Entry Point
//! src/main.rs
//!
//! Parsea la configuración, inicializa el logging y arranca el servidor.

use minihttp::config::Config;
use minihttp::logging;
use minihttp::server::Server;
use tracing::{error, info};

fn main() {
    let config = Config::new();

    if let Err(e) = logging::init(&config.log_level) {
        eprintln!("{}", e);
        std::process::exit(1);
    }

    if let Err(e) = config.validate() {
        error!("Invalid configuration: {}", e);
        std::process::exit(1);
    }

    info!(
        address = %config.address(),
        directory = ?config.directory,
        gzip_level = config.gzip_level,
        "starting minihttp"
    );

    // Esto bloquea el thread principal
    let server = Server::new(config);
    if let Err(e) = server.run() {
        error!("Fatal error: {}", e);
        std::process::exit(1);
    }
}
