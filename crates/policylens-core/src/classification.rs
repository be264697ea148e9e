//! Verdict types shared across the classification pipeline.

use serde::{Deserialize, Serialize};

use crate::policy::PolicyDocument;

/// Strength verdict for a policy. Exactly two values, serialized
/// case-sensitively as `"Weak"` / `"Strong"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Strength {
    Weak,
    Strong,
}

impl Strength {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Weak => "Weak",
            Self::Strong => "Strong",
        }
    }

    /// Case-sensitive parse. Anything but the two exact enum strings is
    /// rejected, so callers can distinguish a near-miss value from a
    /// missing field.
    pub fn from_exact(s: &str) -> Option<Self> {
        match s {
            "Weak" => Some(Self::Weak),
            "Strong" => Some(Self::Strong),
            _ => None,
        }
    }
}

/// Final output of a classification run.
///
/// `policy` is the document as echoed by the service, falling back to the
/// original input when the echo is omitted. It is informational only and
/// never feeds back into any decision. `reason` is always non-empty.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Classification {
    pub policy: PolicyDocument,
    #[serde(rename = "classification")]
    pub strength: Strength,
    pub reason: String,
}
