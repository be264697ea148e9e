//! The classification pipeline: request, decode, validate, assemble.

use policylens_core::{Classification, PolicyDocument, Strength};
use serde_json::Value;
use tracing::info;

use crate::client::{AiConfig, ChatBackend, ChatResponse, OpenAiBackend};
use crate::error::ClassifyError;
use crate::prompt;

/// Decoded and validated arguments of the classification invocation.
#[derive(Debug)]
struct ToolArguments {
    policy: Option<Value>,
    strength: Strength,
    reason: String,
}

/// One-shot policy classifier.
///
/// Each call is a fully independent request/decode/assemble flow with no
/// shared mutable state; classifying documents concurrently means running
/// one pipeline instance per document. The single backend call is the only
/// operation that blocks, and no internal timeout is imposed — callers
/// embedding this in a higher-throughput system wrap it themselves.
pub struct PolicyClassifier<B = OpenAiBackend> {
    backend: B,
    model: String,
}

impl PolicyClassifier<OpenAiBackend> {
    /// Build a classifier over the real HTTP backend.
    pub fn new(config: &AiConfig) -> Self {
        Self {
            backend: OpenAiBackend::new(config),
            model: config.model.clone(),
        }
    }
}

impl<B: ChatBackend> PolicyClassifier<B> {
    /// Build a classifier over an arbitrary backend (tests, alternative
    /// transports).
    pub fn with_backend(backend: B, model: impl Into<String>) -> Self {
        Self {
            backend,
            model: model.into(),
        }
    }

    /// Classify an already-parsed policy document.
    ///
    /// Either returns a fully populated [`Classification`] or one of the
    /// [`ClassifyError`] kinds; there is no best-effort result.
    pub async fn classify(&self, policy: PolicyDocument) -> Result<Classification, ClassifyError> {
        let request = prompt::build_request(&self.model, &policy);
        let response = self.backend.complete(&request).await?;
        let args = decode_response(&response)?;
        let result = assemble(args, policy);
        info!(strength = result.strength.as_str(), "policy classified");
        Ok(result)
    }

    /// Parse raw text and classify it.
    ///
    /// Malformed input fails here, before any request is issued.
    pub async fn classify_raw(&self, raw: &str) -> Result<Classification, ClassifyError> {
        let policy = PolicyDocument::parse(raw)?;
        self.classify(policy).await
    }
}

/// Decode the service reply into validated tool arguments.
///
/// The declared enum and required-field list are request hints, not
/// guarantees, so everything is re-checked here. A missing `reason` or a
/// near-miss classification value is a hard error, never a default.
fn decode_response(response: &ChatResponse) -> Result<ToolArguments, ClassifyError> {
    let call = response
        .choices
        .first()
        .and_then(|choice| choice.message.tool_calls.first())
        .ok_or(ClassifyError::ServiceRefusal)?;

    if call.function.name != prompt::CLASSIFY_FUNCTION {
        return Err(ClassifyError::SchemaViolation(format!(
            "service invoked unexpected function `{}`",
            call.function.name
        )));
    }

    let args: Value = serde_json::from_str(&call.function.arguments).map_err(|e| {
        ClassifyError::SchemaViolation(format!("arguments are not valid JSON: {e}"))
    })?;

    let raw_strength = require_str(&args, "classification")?;
    let strength = Strength::from_exact(raw_strength)
        .ok_or_else(|| ClassifyError::InvalidClassificationValue(raw_strength.to_string()))?;

    let reason = require_str(&args, "reason")?;
    if reason.is_empty() {
        return Err(ClassifyError::SchemaViolation(
            "field `reason` must be non-empty".into(),
        ));
    }

    let policy = match args.get("policy") {
        None | Some(Value::Null) => None,
        Some(echoed) => Some(echoed.clone()),
    };

    Ok(ToolArguments {
        policy,
        strength,
        reason: reason.to_string(),
    })
}

fn require_str<'a>(args: &'a Value, field: &str) -> Result<&'a str, ClassifyError> {
    match args.get(field) {
        Some(Value::String(s)) => Ok(s),
        Some(_) => Err(ClassifyError::SchemaViolation(format!(
            "field `{field}` is not a string"
        ))),
        None => Err(ClassifyError::SchemaViolation(format!(
            "missing required field `{field}`"
        ))),
    }
}

/// Merge decoded arguments with the original input document.
///
/// The echoed `policy` is carried for display only when present; when the
/// service omits it, the original input passes through unchanged. Either
/// way it never feeds back into any decision.
fn assemble(args: ToolArguments, original: PolicyDocument) -> Classification {
    let policy = match args.policy {
        Some(echoed) => PolicyDocument::from(echoed),
        None => original,
    };

    Classification {
        policy,
        strength: args.strength,
        reason: args.reason,
    }
}
