//! Mediator with statically dispatched request handlers

/// A message sent through the mediator
pub trait Request {
    type Response;
}

/// Handles one kind of request
pub trait RequestHandler<R: Request> {
    fn handle(&self, request: R) -> R::Response;
}

/// Liveness probe
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ping;

impl Request for Ping {
    type Response = String;
}

/// Sum of two numbers, wrapping on overflow
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Add(pub i64, pub i64);

impl Request for Add {
    type Response = i64;
}

/// Handler for every request the demonstration sends
#[derive(Debug, Clone, Copy, Default)]
pub struct DemoHandlers;

impl RequestHandler<Ping> for DemoHandlers {
    fn handle(&self, _request: Ping) -> String {
        "Pong".to_string()
    }
}

impl RequestHandler<Add> for DemoHandlers {
    fn handle(&self, request: Add) -> i64 {
        request.0.wrapping_add(request.1)
    }
}

/// Routes requests to handlers without senders knowing them
///
/// Routing is resolved at compile time: sending a request with no handler
/// does not type-check.
#[derive(Debug, Clone, Default)]
pub struct Mediator<H> {
    handlers: H,
}

impl<H> Mediator<H> {
    pub fn new(handlers: H) -> Self {
        Self { handlers }
    }

    pub fn send<R>(&self, request: R) -> R::Response
    where
        R: Request + std::fmt::Debug,
        H: RequestHandler<R>,
    {
        tracing::debug!("Mediating {:?}", request);
        self.handlers.handle(request)
    }
}
