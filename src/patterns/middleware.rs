//! Middleware chain around a request handler

use std::sync::Arc;

/// Incoming request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    pub method: String,
    pub path: String,
    pub headers: Vec<(String, String)>,
}

impl Request {
    pub fn new(method: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            method: method.into(),
            path: path.into(),
            headers: Vec::new(),
        }
    }

    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

/// Outgoing response, with a trace of what touched it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    pub status: u16,
    pub trace: Vec<String>,
}

impl Response {
    pub fn new(status: u16) -> Self {
        Self {
            status,
            trace: Vec::new(),
        }
    }
}

/// Terminal request handler
pub type Handler = Arc<dyn Fn(&Request) -> Response + Send + Sync>;

/// The rest of the chain, handed to each middleware
pub struct Next<'a> {
    remaining: &'a [Arc<dyn Middleware>],
    handler: &'a Handler,
}

impl<'a> Next<'a> {
    /// Pass the request on to the next middleware or the handler
    pub fn run(self, request: &Request) -> Response {
        match self.remaining.split_first() {
            Some((middleware, remaining)) => middleware.handle(
                request,
                Next {
                    remaining,
                    handler: self.handler,
                },
            ),
            None => (self.handler)(request),
        }
    }
}

/// Code that wraps request handling
///
/// A middleware that never calls `next.run` short-circuits the chain.
pub trait Middleware: Send + Sync {
    fn handle(&self, request: &Request, next: Next<'_>) -> Response;
}

/// Records entry and exit around the inner chain
#[derive(Debug, Clone, Copy, Default)]
pub struct LoggingMiddleware;

impl Middleware for LoggingMiddleware {
    fn handle(&self, request: &Request, next: Next<'_>) -> Response {
        tracing::debug!("{} {}", request.method, request.path);
        let mut response = next.run(request);
        response.trace.insert(0, "Logging: before".to_string());
        response.trace.push("Logging: after".to_string());
        response
    }
}

/// Rejects requests missing an authorization header
#[derive(Debug, Clone, Copy, Default)]
pub struct AuthMiddleware;

impl Middleware for AuthMiddleware {
    fn handle(&self, request: &Request, next: Next<'_>) -> Response {
        if request.header("authorization").is_none() {
            let mut response = Response::new(401);
            response.trace.push("Auth: rejected".to_string());
            return response;
        }
        next.run(request)
    }
}

/// Ordered middlewares in front of a handler
pub struct MiddlewareChain {
    middlewares: Vec<Arc<dyn Middleware>>,
    handler: Handler,
}

impl MiddlewareChain {
    pub fn new<F>(handler: F) -> Self
    where
        F: Fn(&Request) -> Response + Send + Sync + 'static,
    {
        Self {
            middlewares: Vec::new(),
            handler: Arc::new(handler),
        }
    }

    /// Add a middleware; earlier ones wrap later ones
    pub fn with<M: Middleware + 'static>(mut self, middleware: M) -> Self {
        self.middlewares.push(Arc::new(middleware));
        self
    }

    pub fn handle(&self, request: &Request) -> Response {
        Next {
            remaining: &self.middlewares,
            handler: &self.handler,
        }
        .run(request)
    }
}
