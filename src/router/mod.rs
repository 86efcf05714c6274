//! # Sistema de Routing
//! src/router/mod.rs
//!
//! Mapea `(método, primer segmento del path)` a un handler.
//!
//! ## Arquitectura
//!
//! ```text
//! Request → Router → Handler → Response
//! ```
//!
//! El path se divide en *segmento* (lo que va antes del primer `/` después
//! de quitar los `/` iniciales) y *argumento* (todo lo que sigue, puede
//! contener más `/`):
//!
//! ```text
//! /echo/a/b   → segmento "echo",  argumento "a/b"
//! /files/x    → segmento "files", argumento "x"
//! /           → segmento "",      argumento ""
//! ```
//!
//! El segmento vacío siempre responde 200 sin body, para cualquier método.
//! Si no hay handler para el par (método, segmento) se responde 404.

use crate::config::ServerConfig;
use crate::http::{Method, Request, Response, StatusCode};
use crate::storage::{ResourceStore, StoreError};
use crate::commands;
use thiserror::Error;
use tracing::{debug, warn};

/// Tipo de función handler
///
/// Un handler recibe el Request y el contexto de la ruta, y retorna una
/// Response o un error que el router convierte en status.
pub type Handler = fn(&Request, &Context<'_>) -> Result<Response, RouteError>;

/// Lo que un handler puede consultar además del request
#[derive(Debug, Clone, Copy)]
pub struct Context<'a> {
    /// Resto del path después del segmento (ej: `"abc"` en `/echo/abc`)
    pub argument: &'a str,

    /// Almacén de archivos, `None` si no se configuró `--directory`
    pub store: Option<&'a ResourceStore>,

    /// Nivel de compresión gzip
    pub gzip_level: u32,
}

/// Errores de routing y de los handlers
#[derive(Debug, Error)]
pub enum RouteError {
    /// Ningún handler para ese método y path
    #[error("no route for {method} {path}")]
    UnsupportedRoute { method: String, path: String },

    /// Ruta de archivos invocada sin directorio configurado
    #[error("storage directory not configured")]
    MissingConfiguration,

    #[error(transparent)]
    Store(#[from] StoreError),
}

impl RouteError {
    /// Status con el que se responde al cliente
    pub fn status(&self) -> StatusCode {
        match self {
            RouteError::UnsupportedRoute { .. } => StatusCode::NotFound,
            RouteError::MissingConfiguration => StatusCode::BadRequest,
            RouteError::Store(StoreError::FileNotFound { .. }) => StatusCode::NotFound,
            RouteError::Store(StoreError::WriteError { .. }) => StatusCode::BadRequest,
        }
    }
}

/// Router que mapea (método, segmento) a handlers
pub struct Router {
    routes: Vec<(Method, &'static str, Handler)>,
    store: Option<ResourceStore>,
    gzip_level: u32,
}

impl Router {
    /// Crea un router sin rutas registradas
    pub fn new(config: ServerConfig) -> Self {
        Self {
            routes: Vec::new(),
            store: config.storage_root.map(ResourceStore::new),
            gzip_level: config.gzip_level,
        }
    }

    /// Crea un router con todas las rutas del servidor
    ///
    /// - `GET /echo/<value>`
    /// - `GET /user-agent`
    /// - `GET /files/<name>`
    /// - `POST /files/<name>`
    pub fn with_default_routes(config: ServerConfig) -> Self {
        let mut router = Self::new(config);

        router.register(Method::GET, "echo", commands::echo_handler);
        router.register(Method::GET, "user-agent", commands::user_agent_handler);
        router.register(Method::GET, "files", commands::files_get_handler);
        router.register(Method::POST, "files", commands::files_post_handler);

        router
    }

    /// Registra una ruta con su handler
    ///
    /// # Ejemplo
    /// ```
    /// use minihttp::config::ServerConfig;
    /// use minihttp::http::{Method, Request, Response, StatusCode};
    /// use minihttp::router::{Context, RouteError, Router};
    ///
    /// fn hello_handler(_req: &Request, _ctx: &Context<'_>) -> Result<Response, RouteError> {
    ///     Ok(Response::new(StatusCode::Ok).with_body("hello"))
    /// }
    ///
    /// let mut router = Router::new(ServerConfig::default());
    /// router.register(Method::GET, "hello", hello_handler);
    ///
    /// let request = Request::parse(b"GET /hello HTTP/1.1\r\n\r\n").unwrap();
    /// assert_eq!(router.route(&request).body(), b"hello");
    /// ```
    pub fn register(&mut self, method: Method, segment: &'static str, handler: Handler) {
        self.routes.push((method, segment, handler));
    }

    /// Encuentra y ejecuta el handler apropiado para un request
    ///
    /// Nunca falla: los errores de los handlers se convierten en su status,
    /// sin body.
    pub fn route(&self, request: &Request) -> Response {
        let (segment, argument) = split_target(request.path());

        if segment.is_empty() {
            return Response::new(StatusCode::Ok);
        }

        let context = Context {
            argument,
            store: self.store.as_ref(),
            gzip_level: self.gzip_level,
        };

        let result = match self.find(request.method(), segment) {
            Some(handler) => handler(request, &context),
            None => Err(RouteError::UnsupportedRoute {
                method: request.method().to_string(),
                path: request.path().to_string(),
            }),
        };

        result.unwrap_or_else(|error| {
            match &error {
                RouteError::UnsupportedRoute { .. } => debug!(%error, "route not found"),
                _ => warn!(%error, path = request.path(), "handler failed"),
            }
            Response::new(error.status())
        })
    }

    fn find(&self, method: &Method, segment: &str) -> Option<Handler> {
        self.routes
            .iter()
            .find(|(route_method, route_segment, _)| route_method == method && *route_segment == segment)
            .map(|(_, _, handler)| *handler)
    }
}

/// Divide el path en (segmento, argumento)
fn split_target(path: &str) -> (&str, &str) {
    let trimmed = path.trim_start_matches('/');
    trimmed.split_once('/').unwrap_or((trimmed, ""))
}
