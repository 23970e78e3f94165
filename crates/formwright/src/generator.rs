//! The generation pipeline, bound to a single concrete backend.
//!
//! [`FormGenerator`] is generic over the backend type `B`, so the compiler
//! checks that the backend accepts the generic prompt messages, and tests can
//! plug in a canned backend without any transport.
//!
//! The generator keeps no per-request state: a [`GenerationRequest`] goes in,
//! a [`GenerationResult`] or a [`FormError`] comes out, and nothing is cached
//! between calls.
use std::{sync::Arc, time::Duration};

use formwright_core::{
    error::Result,
    generic::GenericMessage,
    model::Model,
    provider::{ChatCompleteParameters, ChatCompletionProvider, json_object_response_format},
    trace::{RequestId, RequestTrace, format_millis},
};
use formwright_types::{
    FieldDescriptor,
    extract::{locate_field_array, parse_completion},
    prompt::build_form_prompt,
    validate::validate_fields,
};
use tracing::{Instrument, debug, info, info_span, warn};

#[cfg(doc)]
use formwright_core::error::FormError;

/// Sampling parameters sent with every completion call.
///
/// Low temperature and a bounded output favour well-formed JSON.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationSettings {
    pub model: Model,
    pub temperature: f64,
    pub max_tokens: u32,
}

impl Default for GenerationSettings {
    fn default() -> Self {
        Self {
            model: Model::default(),
            temperature: 0.3,
            max_tokens: 2000,
        }
    }
}

/// One user submission, alive only while it is being answered.
#[derive(Debug, Clone)]
pub struct GenerationRequest {
    query: String,
    trace: RequestTrace,
}

impl GenerationRequest {
    /// Accept `query` now: assigns the correlation id and starts the clock.
    pub fn accept(query: impl Into<String>) -> Self {
        Self::new(query, RequestTrace::start())
    }

    /// Attach `query` to a trace started earlier, e.g. before the request
    /// body was read.
    pub fn new(query: impl Into<String>, trace: RequestTrace) -> Self {
        Self {
            query: query.into(),
            trace,
        }
    }

    pub fn id(&self) -> RequestId {
        self.trace.id()
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn trace(&self) -> &RequestTrace {
        &self.trace
    }
}

/// Validated fields in on-screen order, tagged with the request's id.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationResult {
    pub fields: Vec<FieldDescriptor>,
    pub request_id: RequestId,
    pub elapsed: Duration,
}

impl GenerationResult {
    /// Elapsed time as reported to clients, e.g. `"812ms"`.
    pub fn response_time(&self) -> String {
        format_millis(self.elapsed)
    }
}

/// Runs the generation pipeline against backend `B`.
///
/// Clones share the backend, so one generator can serve many tasks.
#[derive(Debug)]
pub struct FormGenerator<B> {
    backend: Arc<B>,
    settings: GenerationSettings,
}

impl<B> Clone for FormGenerator<B> {
    fn clone(&self) -> Self {
        Self {
            backend: Arc::clone(&self.backend),
            settings: self.settings.clone(),
        }
    }
}

impl<B> FormGenerator<B>
where
    B: ChatCompletionProvider,
    GenericMessage: Into<B::Message>,
{
    pub fn new(backend: B, settings: GenerationSettings) -> Self {
        Self {
            backend: Arc::new(backend),
            settings,
        }
    }

    /// Access the underlying backend.
    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn settings(&self) -> &GenerationSettings {
        &self.settings
    }

    /// Generate and validate the fields for `request`.
    ///
    /// Success is all or nothing. Any [`FormError`] is logged with the
    /// request id before it is returned; nothing is retried.
    pub async fn generate(&self, request: &GenerationRequest) -> Result<GenerationResult> {
        let request_id = request.id();
        let span = info_span!("generate_form", %request_id);

        let outcome = self.run(request).instrument(span).await;
        if let Err(err) = &outcome {
            warn!(
                %request_id,
                kind = err.kind(),
                error = %err,
                elapsed_ms = request.trace().elapsed().as_millis() as u64,
                "form generation failed"
            );
        }
        outcome
    }

    async fn run(&self, request: &GenerationRequest) -> Result<GenerationResult> {
        let request_id = request.id();
        let messages = build_form_prompt(request.query())?;

        let params = ChatCompleteParameters::new(messages, self.settings.model.clone())
            .with_temperature(self.settings.temperature)
            .with_max_tokens(self.settings.max_tokens)
            .with_response_format(json_object_response_format())
            .with_request_id(request_id);

        let completion = self.backend.chat_complete(params).await?;
        debug!(%request_id, content = %completion.content, "raw completion");

        let parsed = parse_completion(&completion.content)?;
        let located = locate_field_array(&parsed)?;
        debug!(
            %request_id,
            strategy = %located.strategy,
            candidates = located.candidates.len(),
            "located field array"
        );

        let fields = validate_fields(located.candidates)?;
        let elapsed = request.trace().elapsed();
        info!(
            %request_id,
            field_count = fields.len(),
            elapsed_ms = elapsed.as_millis() as u64,
            "generated form fields"
        );

        Ok(GenerationResult {
            fields,
            request_id,
            elapsed,
        })
    }
}
