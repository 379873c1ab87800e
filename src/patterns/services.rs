//! Constructor injection and the composition root

use crate::core::DemoOptions;
use crate::patterns::logger::{Logger, NullLogger};
use std::sync::Arc;

/// Produces a greeting for a name
pub trait Greeter: Send + Sync {
    fn greet(&self, name: &str) -> String;
}

/// Greeter used by the demonstration
#[derive(Debug, Clone, Default)]
pub struct FriendlyGreeter;

impl Greeter for FriendlyGreeter {
    fn greet(&self, name: &str) -> String {
        format!("Hello, {}!", name)
    }
}

/// Service that depends on a [`Greeter`] and a [`Logger`]
///
/// Both collaborators are handed in at construction; the service never
/// looks them up.
pub struct GreetingService {
    greeter: Arc<dyn Greeter>,
    logger: Arc<dyn Logger>,
}

impl GreetingService {
    pub fn new(greeter: Arc<dyn Greeter>, logger: Arc<dyn Logger>) -> Self {
        Self { greeter, logger }
    }

    pub fn welcome(&self, name: &str) -> String {
        let message = self.greeter.greet(name);
        self.logger.info(&format!("greeted {}", name));
        message
    }
}

/// Composition root: builds every service from the options
pub struct ServiceProvider {
    options: DemoOptions,
    greeting: GreetingService,
}

impl ServiceProvider {
    pub fn new(options: &DemoOptions) -> Self {
        Self::with_logger(options, Arc::new(NullLogger))
    }

    pub fn with_logger(options: &DemoOptions, logger: Arc<dyn Logger>) -> Self {
        let greeting = GreetingService::new(Arc::new(FriendlyGreeter), logger);
        Self {
            options: options.clone(),
            greeting,
        }
    }

    pub fn options(&self) -> &DemoOptions {
        &self.options
    }

    pub fn greeting(&self) -> &GreetingService {
        &self.greeting
    }
}
