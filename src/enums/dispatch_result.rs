use serde::{Deserialize, Serialize};

/// Outcome of one dispatch. Callers never need to look at HTTP details.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum DispatchResult {
    Skipped,
    Sent,
    Failed { error: String },
}

impl DispatchResult {
    pub fn failed(error: impl Into<String>) -> Self {
        let error = error.into();
        if error.trim().is_empty() {
            return Self::Failed { error: "unknown error".to_string() };
        }
        Self::Failed { error }
    }

    pub fn status(&self) -> &'static str {
        match self {
            Self::Skipped => "skipped",
            Self::Sent => "sent",
            Self::Failed { .. } => "failed",
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Failed { error } => Some(error),
            _ => None,
        }
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, Self::Failed { .. })
    }
}
