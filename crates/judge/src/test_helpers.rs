//! Shared test doubles for pipeline tests.

use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use veridic_core::cancel::CancelToken;
use veridic_core::error::{ProviderError, StoreError, TokenizerError};
use veridic_core::example::StoredRecord;
use veridic_core::provider::{GenerateRequest, GenerateResponse, Provider, Usage};
use veridic_core::store::ExampleStore;
use veridic_core::tokenizer::Tokenizer;
use veridic_tokenize::HeuristicTokenizer;

/// Create a simple text response with fixed usage numbers.
pub fn text_response(text: &str) -> GenerateResponse {
    GenerateResponse {
        text: text.into(),
        usage: Some(Usage {
            prompt_tokens: 120,
            completion_tokens: 30,
            total_tokens: 150,
        }),
        model: "mock-model".into(),
    }
}

/// A provider that returns a sequence of scripted responses and records
/// every request it receives.
///
/// Each call to `complete` returns the next response in the queue. Panics
/// if more calls are made than responses provided.
pub struct ScriptedProvider {
    responses: Mutex<Vec<GenerateResponse>>,
    requests: Mutex<Vec<GenerateRequest>>,
    error: Option<ProviderError>,
    calls: AtomicUsize,
}

impl ScriptedProvider {
    pub fn new(responses: Vec<GenerateResponse>) -> Self {
        Self {
            responses: Mutex::new(responses),
            requests: Mutex::new(Vec::new()),
            error: None,
            calls: AtomicUsize::new(0),
        }
    }

    /// A provider that returns a single text response.
    pub fn single_text(text: &str) -> Self {
        Self::new(vec![text_response(text)])
    }

    /// A provider that always fails with the given error.
    pub fn failing(error: ProviderError) -> Self {
        Self {
            responses: Mutex::new(Vec::new()),
            requests: Mutex::new(Vec::new()),
            error: Some(error),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// The most recent request, if any call was made.
    pub fn last_request(&self) -> Option<GenerateRequest> {
        self.requests.lock().unwrap().last().cloned()
    }
}

#[async_trait::async_trait]
impl Provider for ScriptedProvider {
    fn name(&self) -> &str {
        "scripted_mock"
    }

    async fn complete(&self, request: GenerateRequest) -> Result<GenerateResponse, ProviderError> {
        let call = self.calls.fetch_add(1, Ordering::SeqCst);
        self.requests.lock().unwrap().push(request);

        if let Some(error) = &self.error {
            return Err(error.clone());
        }

        let responses = self.responses.lock().unwrap();
        match responses.get(call) {
            Some(response) => Ok(response.clone()),
            None => panic!(
                "ScriptedProvider: no more responses (call #{call}, have {})",
                responses.len()
            ),
        }
    }
}

/// A provider that cancels the given token *during* the model call, then
/// returns a valid verdict — for testing the post-verdict checkpoint.
pub struct CancellingProvider {
    text: String,
    token: CancelToken,
}

impl CancellingProvider {
    pub fn new(text: &str, token: CancelToken) -> Self {
        Self {
            text: text.into(),
            token,
        }
    }
}

#[async_trait::async_trait]
impl Provider for CancellingProvider {
    fn name(&self) -> &str {
        "cancelling_mock"
    }

    async fn complete(&self, _request: GenerateRequest) -> Result<GenerateResponse, ProviderError> {
        self.token.cancel();
        Ok(text_response(&self.text))
    }
}

/// A tokenizer that counts how often it is used.
pub struct CountingTokenizer {
    inner: HeuristicTokenizer,
    calls: AtomicUsize,
}

impl CountingTokenizer {
    pub fn new() -> Self {
        Self {
            inner: HeuristicTokenizer,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl Tokenizer for CountingTokenizer {
    fn name(&self) -> &str {
        "counting"
    }

    fn count(&self, text: &str) -> Result<usize, TokenizerError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.inner.count(text)
    }

    fn truncate(&self, text: &str, max_tokens: usize) -> Result<String, TokenizerError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.inner.truncate(text, max_tokens)
    }
}

/// An always-empty store that counts reads and writes.
pub struct CountingStore {
    gets: AtomicUsize,
    saves: AtomicUsize,
}

impl CountingStore {
    pub fn new() -> Self {
        Self {
            gets: AtomicUsize::new(0),
            saves: AtomicUsize::new(0),
        }
    }

    pub fn gets(&self) -> usize {
        self.gets.load(Ordering::SeqCst)
    }

    pub fn saves(&self) -> usize {
        self.saves.load(Ordering::SeqCst)
    }
}

#[async_trait::async_trait]
impl ExampleStore for CountingStore {
    fn name(&self) -> &str {
        "counting"
    }

    async fn get_examples(
        &self,
        _task_type: &str,
        _task_id: &str,
        _truncated_input: &str,
    ) -> Result<Vec<StoredRecord>, StoreError> {
        self.gets.fetch_add(1, Ordering::SeqCst);
        Ok(Vec::new())
    }

    async fn save_example(&self, _record: StoredRecord) -> Result<(), StoreError> {
        self.saves.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

/// A store whose reads succeed (empty) but whose writes always fail.
pub struct FailingStore;

#[async_trait::async_trait]
impl ExampleStore for FailingStore {
    fn name(&self) -> &str {
        "failing"
    }

    async fn get_examples(
        &self,
        _task_type: &str,
        _task_id: &str,
        _truncated_input: &str,
    ) -> Result<Vec<StoredRecord>, StoreError> {
        Ok(Vec::new())
    }

    async fn save_example(&self, _record: StoredRecord) -> Result<(), StoreError> {
        Err(StoreError::Storage("disk full".into()))
    }
}
