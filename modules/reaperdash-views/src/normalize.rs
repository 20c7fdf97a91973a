use chrono::{DateTime, SecondsFormat, Utc};

use fbreaper_client::RawPost;
use reaperdash_common::{Author, Post, Reactions, PLACEHOLDER_AVATAR};

/// Convert ragged backend records into canonical posts. The backend may
/// omit any field; the dashboard must never crash on missing data, it
/// degrades to visible fallbacks instead.
///
/// Reactions, comments, shares and the post URL are reset to fixed
/// defaults regardless of backend input. The feed asserts this loss in its
/// tests; do not "fix" it without clarifying what the backend actually
/// sends for those fields.
pub fn normalize_posts(raw: Vec<RawPost>, now: DateTime<Utc>) -> Vec<Post> {
    raw.into_iter()
        .enumerate()
        .map(|(index, record)| normalize_post(record, index, now))
        .collect()
}

/// Normalize a single record at 0-based `index`. A missing id becomes the
/// stringified 1-based position.
pub fn normalize_post(raw: RawPost, index: usize, now: DateTime<Utc>) -> Post {
    let id = match raw.id {
        Some(id) => id.to_string(),
        None => (index + 1).to_string(),
    };

    let content = match raw.content {
        Some(content) if !content.is_empty() => content,
        _ => "(no content)".to_string(),
    };

    let name = raw.author.unwrap_or_else(|| "unknown".to_string());
    // Display heuristic only: distinct names differing in case or spacing
    // collide, and repeated spaces become repeated periods.
    let username = name.to_lowercase().replace(' ', ".");

    let timestamp = raw
        .timestamp
        .unwrap_or_else(|| now.to_rfc3339_opts(SecondsFormat::Millis, true));

    Post {
        id,
        content,
        author: Author {
            name,
            username,
            avatar: PLACEHOLDER_AVATAR.to_string(),
            profile_url: "#".to_string(),
        },
        timestamp,
        reactions: Reactions::default(),
        comments: Vec::new(),
        shares: 0,
        url: "#".to_string(),
        group: None,
        page: None,
    }
}
