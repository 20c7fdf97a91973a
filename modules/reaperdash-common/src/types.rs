use serde::{Deserialize, Serialize};

/// Fixed placeholder used wherever the backend supplies no usable avatar.
pub const PLACEHOLDER_AVATAR: &str = "/placeholder.svg?height=40&width=40";

// --- Feed types ---

/// A scraped post in the dashboard's canonical shape. Constructed once per
/// fetch by the normalizer and never mutated afterwards; the per-post
/// "comments expanded" flag lives in a separate map keyed by `id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    pub id: String,
    pub content: String,
    pub author: Author,
    /// ISO-8601 string; parsed lazily at display time.
    pub timestamp: String,
    pub reactions: Reactions,
    pub comments: Vec<Comment>,
    pub shares: u32,
    pub url: String,
    pub group: Option<String>,
    pub page: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Author {
    pub name: String,
    pub username: String,
    pub avatar: String,
    pub profile_url: String,
}

/// The six fixed reaction kinds the platform exposes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reactions {
    pub like: u32,
    pub love: u32,
    pub haha: u32,
    pub wow: u32,
    pub sad: u32,
    pub angry: u32,
}

impl Reactions {
    pub fn total(&self) -> u32 {
        self.like + self.love + self.haha + self.wow + self.sad + self.angry
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comment {
    pub id: String,
    pub content: String,
    pub author: CommentAuthor,
    pub timestamp: String,
    /// Flat count, unlike posts which carry a per-kind breakdown.
    pub reactions: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommentAuthor {
    pub name: String,
    pub username: String,
    pub avatar: String,
}

// --- Scraper status types ---

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScraperStatus {
    pub is_active: bool,
    pub current_target: String,
    /// 0-100; clamping is left to the progress-bar primitive.
    pub progress: u8,
    pub total_items: u32,
    pub processed_items: u32,
    pub errors: Vec<ScraperError>,
    pub start_time: String,
    /// Free text from the backend, displayed verbatim and never parsed.
    pub estimated_completion: String,
}

/// A scraping failure reported by the backend. Surfaced verbatim in the
/// status panel; never raises on the dashboard side.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScraperError {
    pub id: String,
    pub message: String,
    pub timestamp: String,
    pub target: String,
    #[serde(rename = "type")]
    pub kind: ErrorKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    RateLimit,
    Blocked,
    ParseError,
    Network,
    Captcha,
    /// Catch-all so an unrecognized backend kind never fails decode.
    #[serde(other)]
    Unknown,
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorKind::RateLimit => write!(f, "rate_limit"),
            ErrorKind::Blocked => write!(f, "blocked"),
            ErrorKind::ParseError => write!(f, "parse_error"),
            ErrorKind::Network => write!(f, "network"),
            ErrorKind::Captcha => write!(f, "captcha"),
            ErrorKind::Unknown => write!(f, "unknown"),
        }
    }
}

// --- Network graph types ---

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NetworkNode {
    pub id: String,
    pub label: String,
    pub kind: NodeKind,
    pub connections: u32,
    pub avatar: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeKind {
    User,
    Group,
    Page,
    Post,
}

impl std::fmt::Display for NodeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NodeKind::User => write!(f, "user"),
            NodeKind::Group => write!(f, "group"),
            NodeKind::Page => write!(f, "page"),
            NodeKind::Post => write!(f, "post"),
        }
    }
}

/// An edge between two node ids. Ids are held by value; a link whose
/// endpoint no longer resolves simply renders without a highlight.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NetworkLink {
    pub source: String,
    pub target: String,
    /// 0.0-1.0
    pub strength: f32,
    pub kind: LinkKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LinkKind {
    Comment,
    Reaction,
    Share,
    Mention,
}
