//! The boolean-judgment pipeline.
//!
//! One invocation is a single asynchronous unit of work with no internal
//! parallelism: fingerprint cache → budget allocation → example packing →
//! prompt assembly → model invocation → parsing → best-effort publishing.
//! The model call is the only suspension point. Cancellation is
//! cooperative, checked at entry and again immediately before the cache
//! write.

use std::sync::Arc;
use std::time::Instant;

use serde::{Deserialize, Serialize};
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use veridic_core::cancel::CancelToken;
use veridic_core::error::{Error, Result};
use veridic_core::example::{Example, RecordMetadata, StoredRecord, render_input};
use veridic_core::fingerprint::Fingerprint;
use veridic_core::message::Message;
use veridic_core::provider::{GenerateRequest, Provider, Usage};
use veridic_core::store::ExampleStore;
use veridic_core::tokenizer::Tokenizer;

use crate::budget::BudgetAllocator;
use crate::pack;
use crate::parse;
use crate::pricing;
use crate::prompt;

/// Task kind constant for boolean judgments; part of every fingerprint
/// and stored record.
pub const TASK_TYPE_BOOLEAN: &str = "boolean";

/// Evaluator configuration. All fields have working defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvaluatorConfig {
    /// Model id sent to the provider.
    #[serde(default = "default_model")]
    pub model: String,

    /// The model's maximum input token count.
    #[serde(default = "default_max_input_tokens")]
    pub max_input_tokens: usize,

    /// Tokens reserved for instructions and message framing.
    #[serde(default = "default_reserved_overhead")]
    pub reserved_overhead: usize,

    /// Lower bound on the usable budget.
    #[serde(default = "default_component_floor")]
    pub component_floor: usize,

    /// Maximum tokens the model may generate.
    #[serde(default = "default_max_output_tokens")]
    pub max_output_tokens: u32,

    /// Sampling temperature; 0.0 keeps verdicts as stable as the model allows.
    #[serde(default)]
    pub temperature: f32,
}

fn default_model() -> String {
    "anthropic/claude-sonnet-4".into()
}
fn default_max_input_tokens() -> usize {
    8192
}
fn default_reserved_overhead() -> usize {
    512
}
fn default_component_floor() -> usize {
    128
}
fn default_max_output_tokens() -> u32 {
    512
}

impl Default for EvaluatorConfig {
    fn default() -> Self {
        Self {
            model: default_model(),
            max_input_tokens: default_max_input_tokens(),
            reserved_overhead: default_reserved_overhead(),
            component_floor: default_component_floor(),
            max_output_tokens: default_max_output_tokens(),
            temperature: 0.0,
        }
    }
}

/// Per-call options.
#[derive(Debug, Clone, Default)]
pub struct EvaluateOptions {
    /// Caller-scoped identifier grouping related invocations. Absent →
    /// caching and persistence are disabled for this call.
    pub task_id: Option<String>,

    /// Caller-supplied few-shot examples, packed after store records.
    pub examples: Vec<Example>,
}

impl EvaluateOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_task_id(mut self, task_id: impl Into<String>) -> Self {
        self.task_id = Some(task_id.into());
        self
    }

    pub fn with_examples(mut self, examples: Vec<Example>) -> Self {
        self.examples = examples;
        self
    }
}

/// The result of one evaluation.
#[derive(Debug, Clone, Serialize)]
pub struct Judgment {
    /// The boolean verdict.
    pub value: bool,
    /// The model's justification (markers and labels stripped).
    pub explanation: String,
    /// Whether this came from the fingerprint cache.
    pub cached: bool,
}

/// The pipeline orchestrator. Stateless between calls — create one and
/// share it behind an `Arc`.
pub struct Evaluator {
    provider: Arc<dyn Provider>,
    tokenizer: Arc<dyn Tokenizer>,
    store: Arc<dyn ExampleStore>,
    config: EvaluatorConfig,
    defaults: Vec<Example>,
}

impl Evaluator {
    /// Create an evaluator with default configuration and the built-in
    /// fallback example table.
    pub fn new(
        provider: Arc<dyn Provider>,
        tokenizer: Arc<dyn Tokenizer>,
        store: Arc<dyn ExampleStore>,
    ) -> Self {
        Self {
            provider,
            tokenizer,
            store,
            config: EvaluatorConfig::default(),
            defaults: prompt::builtin_examples(),
        }
    }

    /// Replace the whole configuration.
    pub fn with_config(mut self, config: EvaluatorConfig) -> Self {
        self.config = config;
        self
    }

    /// Set the model id.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.config.model = model.into();
        self
    }

    /// Replace the built-in fallback example table.
    pub fn with_default_examples(mut self, defaults: Vec<Example>) -> Self {
        self.defaults = defaults;
        self
    }

    /// Evaluate without external cancellation.
    pub async fn evaluate(
        &self,
        input: serde_json::Value,
        condition: &str,
        options: EvaluateOptions,
    ) -> Result<Judgment> {
        self.evaluate_with(input, condition, options, &CancelToken::new())
            .await
    }

    /// Evaluate with a cooperative cancellation token.
    ///
    /// The token is checked before any tokenizer or store work begins, and
    /// again immediately before the cache write. A verdict that has already
    /// come back is returned even when cancellation raced it; only the
    /// write is skipped.
    pub async fn evaluate_with(
        &self,
        input: serde_json::Value,
        condition: &str,
        options: EvaluateOptions,
        cancel: &CancelToken,
    ) -> Result<Judgment> {
        if cancel.is_cancelled() {
            return Err(Error::Cancelled);
        }

        // ── Budget allocation + truncation ────────────────────────────────
        let budget = BudgetAllocator::new(
            self.config.max_input_tokens,
            self.config.reserved_overhead,
            self.config.component_floor,
        )
        .allocate();

        let input_text = render_input(&input);
        let truncated_input = self.tokenizer.truncate(&input_text, budget.input)?;
        let truncated_condition = self.tokenizer.truncate(condition, budget.condition)?;
        let used_input = self.tokenizer.count(&truncated_input)?;
        let used_condition = self.tokenizer.count(&truncated_condition)?;
        let examples_budget = budget.examples_budget(used_input, used_condition);
        debug!(
            total = budget.total,
            used_input, used_condition, examples_budget, "token budget allocated"
        );

        // ── Retrieval + fingerprint cache (task_id only) ──────────────────
        let mut retrieved: Vec<StoredRecord> = Vec::new();
        let mut fingerprint: Option<Fingerprint> = None;
        if let Some(task_id) = &options.task_id {
            let fp = Fingerprint::compute(
                TASK_TYPE_BOOLEAN,
                task_id,
                &truncated_input,
                &truncated_condition,
            );
            retrieved = self
                .store
                .get_examples(TASK_TYPE_BOOLEAN, task_id, &truncated_input)
                .await?;
            if let Some(hit) = retrieved.iter().find(|r| r.fingerprint == fp) {
                debug!(fingerprint = %fp, "fingerprint cache hit");
                return Ok(Judgment {
                    value: hit.outcome,
                    explanation: hit.explanation.clone(),
                    cached: true,
                });
            }
            fingerprint = Some(fp);
        }

        // ── Packing + prompt assembly ─────────────────────────────────────
        let packed = pack::pack(
            &retrieved,
            &options.examples,
            &self.defaults,
            self.tokenizer.as_ref(),
            examples_budget,
        )?;
        debug!(
            count = packed.examples.len(),
            tokens = packed.tokens,
            default_pool = packed.used_default,
            "packed examples"
        );
        let messages = prompt::assemble(&truncated_condition, &truncated_input, &packed);

        // ── Model invocation ──────────────────────────────────────────────
        let response = self.invoke(messages).await?;

        // ── Parsing ───────────────────────────────────────────────────────
        let verdict = parse::parse_verdict(&response.text)?;
        info!(
            value = verdict.value,
            latency_ms = response.latency_ms,
            model = %response.model,
            "verdict parsed"
        );

        // ── Publishing (best effort, skipped on cancellation) ─────────────
        if let (Some(fp), Some(task_id)) = (fingerprint, &options.task_id) {
            if cancel.is_cancelled() {
                debug!("cancelled after verdict; skipping cache write");
            } else {
                self.publish(fp, task_id, &truncated_input, &truncated_condition, &verdict, &response)
                    .await;
            }
        }

        Ok(Judgment {
            value: verdict.value,
            explanation: verdict.explanation,
            cached: false,
        })
    }

    /// Spawn an evaluation as a cancellable background task.
    pub fn spawn(
        self: &Arc<Self>,
        input: serde_json::Value,
        condition: impl Into<String>,
        options: EvaluateOptions,
    ) -> EvalHandle {
        let cancel = CancelToken::new();
        let token = cancel.clone();
        let this = Arc::clone(self);
        let condition = condition.into();
        let join = tokio::spawn(async move {
            this.evaluate_with(input, &condition, options, &token).await
        });
        EvalHandle { cancel, join }
    }

    /// Issue the completion request with the END sentinel as the stop
    /// condition, measuring wall-clock latency.
    async fn invoke(&self, messages: Vec<Message>) -> Result<InvokeOutcome> {
        let request = GenerateRequest {
            model: self.config.model.clone(),
            messages,
            max_tokens: Some(self.config.max_output_tokens),
            temperature: self.config.temperature,
            stop: vec![prompt::END_MARKER.to_string()],
        };

        let started = Instant::now();
        let response = self.provider.complete(request).await?;
        let latency_ms = started.elapsed().as_millis() as u64;

        Ok(InvokeOutcome {
            text: response.text,
            usage: response.usage.unwrap_or_default(),
            model: response.model,
            latency_ms,
        })
    }

    /// Persist the fresh verdict. Failures are logged and swallowed: a
    /// store write must never convert a successful evaluation into a
    /// failure.
    async fn publish(
        &self,
        fingerprint: Fingerprint,
        task_id: &str,
        truncated_input: &str,
        truncated_condition: &str,
        verdict: &parse::ParsedVerdict,
        outcome: &InvokeOutcome,
    ) {
        let metadata = RecordMetadata {
            model: outcome.model.clone(),
            input_tokens: outcome.usage.prompt_tokens,
            output_tokens: outcome.usage.completion_tokens,
            cost_usd: pricing::lookup(&outcome.model)
                .map(|p| p.cost(outcome.usage.prompt_tokens, outcome.usage.completion_tokens)),
            latency_ms: outcome.latency_ms,
        };
        let record = StoredRecord::new(
            fingerprint,
            TASK_TYPE_BOOLEAN,
            task_id,
            truncated_input,
            truncated_condition,
            verdict.value,
            verdict.explanation.as_str(),
            metadata,
        );
        if let Err(e) = self.store.save_example(record).await {
            warn!("example store write failed: {e}");
        }
    }
}

/// What the invocation stage hands to parsing and publishing.
struct InvokeOutcome {
    text: String,
    usage: Usage,
    model: String,
    latency_ms: u64,
}

/// A cancellable handle on a spawned evaluation.
pub struct EvalHandle {
    cancel: CancelToken,
    join: JoinHandle<Result<Judgment>>,
}

impl EvalHandle {
    /// Signal cancellation. The pipeline observes it at its checkpoints.
    pub fn cancel(&self) {
        self.cancel.cancel();
    }

    /// A clone of the underlying token.
    pub fn cancel_token(&self) -> CancelToken {
        self.cancel.clone()
    }

    /// Await the full judgment.
    pub async fn judgment(self) -> Result<Judgment> {
        match self.join.await {
            Ok(result) => result,
            Err(e) if e.is_cancelled() => Err(Error::Cancelled),
            Err(e) => Err(Error::Internal(format!("evaluation task failed: {e}"))),
        }
    }

    /// Plain-boolean projection of the judgment.
    pub async fn value(self) -> Result<bool> {
        Ok(self.judgment().await?.value)
    }
}
