//! Runs the demonstration sections

use crate::{
    core::{DemoOptions, EventHandler, Outcome, Pipeline, PipelineContext, PipelineEvent},
    demo::{Section, SectionReport},
    patterns::{
        events::{DomainEvent, EventAggregator, EventKind},
        fetch::{fetch_with_timeout, MockHttpClient},
        iterator::NumberSequence,
        logger::{Logger, NullLogger},
        mediator::{Add, DemoHandlers, Mediator, Ping},
        middleware::{self, LoggingMiddleware, MiddlewareChain},
        observable::Observable,
        repository::{InMemoryRepository, Post, Repository},
        services::ServiceProvider,
        specification::{filter, AuthorSpecification},
        template::export_posts,
    },
};
use anyhow::{anyhow, Context, Result};
use chrono::Utc;
use std::collections::BTreeSet;
use std::sync::{Arc, Mutex};
use tracing::{debug, info};

/// Endpoint the mock client pretends to call
const FETCH_URL: &str = "https://example.com/api/posts";

/// Upper bound for the async call
const FETCH_TIMEOUT_SECS: u64 = 5;

/// Runs sections against one set of services
pub struct Demonstration {
    services: ServiceProvider,
    pipeline_handler: Option<EventHandler>,
}

impl Demonstration {
    pub fn new(options: &DemoOptions) -> Self {
        Self::with_services(ServiceProvider::new(options))
    }

    /// Run against an already wired set of services
    pub fn with_services(services: ServiceProvider) -> Self {
        Self {
            services,
            pipeline_handler: None,
        }
    }

    /// Observe the steps of the pipeline section
    pub fn with_pipeline_handler<F>(mut self, handler: F) -> Self
    where
        F: Fn(&PipelineEvent) + Send + Sync + 'static,
    {
        self.pipeline_handler = Some(Arc::new(handler));
        self
    }

    fn options(&self) -> &DemoOptions {
        self.services.options()
    }

    fn sample_post(&self) -> Post {
        Post::new(&self.options().post_title, &self.options().author)
    }

    /// Run the requested sections, in output order, each at most once
    ///
    /// An empty selection runs every section.
    pub async fn run(&self, sections: &[Section]) -> Result<Vec<SectionReport>> {
        let selected: BTreeSet<Section> = if sections.is_empty() {
            Section::ALL.into_iter().collect()
        } else {
            sections.iter().copied().collect()
        };

        info!("Running {} demonstration sections", selected.len());

        let mut reports = Vec::with_capacity(selected.len());
        for section in selected {
            let report = self
                .run_section(section)
                .await
                .with_context(|| format!("Section '{}' failed", section))?;
            reports.push(report);
        }

        info!("Demonstration finished");
        Ok(reports)
    }

    /// Run a single section
    pub async fn run_section(&self, section: Section) -> Result<SectionReport> {
        debug!("Running section: {}", section);

        let lines = match section {
            Section::Options => self.options_section(),
            Section::DependencyInjection => self.injection_section(),
            Section::Repository => self.repository_section().await?,
            Section::Specification => self.specification_section(),
            Section::EventAggregator => self.event_section()?,
            Section::Mediator => self.mediator_section(),
            Section::Outcome => self.outcome_section(),
            Section::NullObject => self.null_object_section(),
            Section::Async => self.async_section().await?,
            Section::Iterator => self.iterator_section(),
            Section::Observable => self.observable_section(),
            Section::Middleware => self.middleware_section(),
            Section::Pipeline => self.pipeline_section()?,
            Section::TemplateMethod => self.template_section()?,
        };

        Ok(SectionReport::new(section, lines))
    }

    fn options_section(&self) -> Vec<String> {
        vec![format!("Option value: {}", self.options().greeting)]
    }

    fn injection_section(&self) -> Vec<String> {
        vec![self.services.greeting().welcome(&self.options().author)]
    }

    async fn repository_section(&self) -> Result<Vec<String>> {
        let repo: InMemoryRepository<Post> = InMemoryRepository::new();
        repo.add(self.sample_post()).await?;

        Ok(repo
            .list()
            .await?
            .iter()
            .map(|post| format!("Post: {} by {}", post.title, post.author))
            .collect())
    }

    fn specification_section(&self) -> Vec<String> {
        let posts = vec![self.sample_post()];
        let spec = AuthorSpecification::new(&self.options().author);

        let matched = filter(&posts, &spec);
        if matched.is_empty() {
            return vec!["No posts matched".to_string()];
        }
        matched
            .into_iter()
            .map(|post| format!("Matched: {} by {}", post.title, post.author))
            .collect()
    }

    fn event_section(&self) -> Result<Vec<String>> {
        let received = Arc::new(Mutex::new(Vec::new()));
        let sink = received.clone();

        let mut aggregator = EventAggregator::new();
        aggregator.subscribe(EventKind::PostPublished, move |event| {
            if let Ok(mut lines) = sink.lock() {
                lines.push(format!("Event received: {}", event.describe()));
            }
        });

        let post = self.sample_post();
        aggregator.publish(&DomainEvent::PostPublished {
            post_id: post.id,
            title: post.title,
            published_at: Utc::now(),
        });

        let mut lines = received
            .lock()
            .map_err(|_| anyhow!("event handler panicked while recording"))?;
        Ok(std::mem::take(&mut *lines))
    }

    fn mediator_section(&self) -> Vec<String> {
        let mediator = Mediator::new(DemoHandlers);
        vec![
            format!("Ping -> {}", mediator.send(Ping)),
            format!("Add(2, 3) -> {}", mediator.send(Add(2, 3))),
        ]
    }

    fn outcome_section(&self) -> Vec<String> {
        let success: Outcome<i32> = Outcome::success(42);
        let failure: Outcome<i32> = Outcome::failure("error");
        vec![success.to_string(), failure.to_string()]
    }

    fn null_object_section(&self) -> Vec<String> {
        let logger: &dyn Logger = &NullLogger;
        logger.info("this message goes nowhere");
        vec!["Null logger accepted message".to_string()]
    }

    async fn async_section(&self) -> Result<Vec<String>> {
        let client = MockHttpClient::default();
        let body = fetch_with_timeout(&client, FETCH_URL, FETCH_TIMEOUT_SECS).await?;
        Ok(vec![format!("Fetched: {}", body)])
    }

    fn iterator_section(&self) -> Vec<String> {
        NumberSequence::new(self.options().iterator_limit)
            .map(|n| format!("Item: {}", n))
            .collect()
    }

    fn observable_section(&self) -> Vec<String> {
        let observable = Observable::new();
        let mut subscription = observable.subscribe();

        for value in 1..=3 {
            observable.emit(value);
        }

        subscription
            .drain()
            .into_iter()
            .map(|value| format!("Observed: {}", value))
            .collect()
    }

    fn middleware_section(&self) -> Vec<String> {
        let chain = MiddlewareChain::new(|request: &middleware::Request| {
            let mut response = middleware::Response::new(200);
            response
                .trace
                .push(format!("Handler: {} {}", request.method, request.path));
            response
        })
        .with(LoggingMiddleware);

        chain.handle(&middleware::Request::new("GET", "/posts")).trace
    }

    fn pipeline_section(&self) -> Result<Vec<String>> {
        let mut pipeline = Pipeline::new("demo");
        pipeline.add_step("increment", |ctx: &mut PipelineContext| ctx.data += 1);
        if let Some(handler) = self.pipeline_handler.clone() {
            pipeline.add_event_handler(move |event| handler(event));
        }

        let context = pipeline.run(PipelineContext::new(self.options().initial_counter))?;
        Ok(vec![format!("Pipeline result: {}", context.data)])
    }

    fn template_section(&self) -> Result<Vec<String>> {
        export_posts(&[self.sample_post()], self.options().export_format)
    }
}

/// Run the demonstration with the given options
pub async fn run_demonstration(
    options: &DemoOptions,
    sections: &[Section],
) -> Result<Vec<SectionReport>> {
    Demonstration::new(options).run(sections).await
}
