//! Schema-constrained LLM classification of IAM policies.
//!
//! A policy document flows through four stages: parse ([`policylens_core`]),
//! prompt construction, a single forced function-call request to the
//! reasoning service, and decode/assemble into a
//! [`Classification`](policylens_core::Classification).
//!
//! The reply schema is closed (a two-value enum plus a string), so
//! instruction-like text inside a policy cannot escape into free-form output
//! or trigger unintended actions. This is defense in depth, not a guarantee:
//! the verdict itself may still be influenced by injected content, and
//! callers accept that residual risk.

pub mod classify;
pub mod client;
pub mod error;
pub mod prompt;

pub use classify::PolicyClassifier;
pub use client::{AiConfig, ChatBackend, ChatRequest, ChatResponse, OpenAiBackend};
pub use error::ClassifyError;
