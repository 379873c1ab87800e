//! Illustrative pattern implementations
//!
//! Each module is a direct, minimal rendition of one pattern, exercised by a
//! section of the demonstration.

pub mod events;
pub mod fetch;
pub mod iterator;
pub mod logger;
pub mod mediator;
pub mod middleware;
pub mod observable;
pub mod repository;
pub mod services;
pub mod specification;
pub mod template;

pub use events::{DomainEvent, EventAggregator, EventKind};
pub use fetch::{DataSource, FetchError, MockHttpClient};
pub use iterator::NumberSequence;
pub use logger::{LogLevel, Logger, NullLogger, TracingLogger};
pub use mediator::{Mediator, Request, RequestHandler};
pub use middleware::{Middleware, MiddlewareChain};
pub use observable::{Observable, Subscription};
pub use repository::{InMemoryRepository, Post, Repository};
pub use services::{Greeter, GreetingService, ServiceProvider};
pub use specification::{AuthorSpecification, Specification, TitleMatchesSpecification};
