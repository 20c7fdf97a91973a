use serde::Deserialize;

/// Body of `GET /api/health`. The `status` field may be absent; only the
/// literal string "UP" counts as healthy.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct HealthStatus {
    pub status: Option<String>,
}

impl HealthStatus {
    pub fn is_up(&self) -> bool {
        self.status.as_deref() == Some("UP")
    }
}

/// A post record as the backend emits it: every field optional, ragged
/// records expected. Normalization into the canonical `Post` shape happens
/// downstream.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawPost {
    pub id: Option<RawPostId>,
    pub author: Option<String>,
    pub content: Option<String>,
    pub timestamp: Option<String>,
}

/// The Java backend emits numeric ids; older fixtures use strings.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum RawPostId {
    Text(String),
    Numeric(i64),
}

impl std::fmt::Display for RawPostId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RawPostId::Text(s) => write!(f, "{s}"),
            RawPostId::Numeric(n) => write!(f, "{n}"),
        }
    }
}
