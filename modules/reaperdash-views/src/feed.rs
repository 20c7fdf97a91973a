use std::collections::HashMap;

use chrono::{DateTime, Utc};

use reaperdash_common::Post;

use crate::timefmt::relative_age;

/// Number of placeholder cards shown while a fetch is in flight.
pub const SKELETON_ROWS: usize = 5;

/// Per-post comment visibility, keyed by post id. Toggling one post never
/// touches another, and entries for ids no longer in the feed are simply
/// unused. Owned by the enclosing view and dropped with it.
#[derive(Debug, Clone, Default)]
pub struct DisclosureMap {
    expanded: HashMap<String, bool>,
}

impl DisclosureMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild from a set of expanded ids, e.g. a query-string round trip.
    pub fn from_expanded<'a>(ids: impl IntoIterator<Item = &'a str>) -> Self {
        Self {
            expanded: ids.into_iter().map(|id| (id.to_string(), true)).collect(),
        }
    }

    pub fn toggle(&mut self, id: &str) {
        let entry = self.expanded.entry(id.to_string()).or_insert(false);
        *entry = !*entry;
    }

    pub fn is_expanded(&self, id: &str) -> bool {
        self.expanded.get(id).copied().unwrap_or(false)
    }

    /// Ids currently toggled open, for serializing back into a link.
    pub fn expanded_ids(&self) -> impl Iterator<Item = &str> {
        self.expanded
            .iter()
            .filter(|(_, open)| **open)
            .map(|(id, _)| id.as_str())
    }
}

/// A post plus the derived display fields the feed renders.
#[derive(Debug, Clone, PartialEq)]
pub struct FeedItem {
    pub post: Post,
    pub age: String,
    pub total_reactions: u32,
    pub expanded: bool,
}

pub fn build_feed(posts: &[Post], disclosure: &DisclosureMap, now: DateTime<Utc>) -> Vec<FeedItem> {
    posts
        .iter()
        .map(|post| FeedItem {
            age: relative_age(&post.timestamp, now),
            total_reactions: post.reactions.total(),
            expanded: disclosure.is_expanded(&post.id),
            post: post.clone(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use reaperdash_common::{Author, Reactions, PLACEHOLDER_AVATAR};

    fn now() -> DateTime<Utc> {
        "2024-01-15T12:00:00Z".parse().unwrap()
    }

    fn post(id: &str, reactions: Reactions) -> Post {
        Post {
            id: id.to_string(),
            content: "content".to_string(),
            author: Author {
                name: "Jane Smith".to_string(),
                username: "jane.smith".to_string(),
                avatar: PLACEHOLDER_AVATAR.to_string(),
                profile_url: "#".to_string(),
            },
            timestamp: "2024-01-15T09:00:00Z".to_string(),
            reactions,
            comments: Vec::new(),
            shares: 0,
            url: "#".to_string(),
            group: None,
            page: None,
        }
    }

    #[test]
    fn toggling_one_post_leaves_others_alone() {
        let mut disclosure = DisclosureMap::new();
        disclosure.toggle("a");
        assert!(disclosure.is_expanded("a"));
        assert!(!disclosure.is_expanded("b"));

        disclosure.toggle("a");
        assert!(!disclosure.is_expanded("a"));
    }

    #[test]
    fn stale_entries_are_harmless() {
        let mut disclosure = DisclosureMap::new();
        disclosure.toggle("gone");

        let posts = vec![post("1", Reactions::default())];
        let feed = build_feed(&posts, &disclosure, now());
        assert_eq!(feed.len(), 1);
        assert!(!feed[0].expanded);
    }

    #[test]
    fn total_reactions_sums_all_six_kinds() {
        let reactions = Reactions {
            like: 45,
            love: 12,
            haha: 3,
            wow: 2,
            sad: 1,
            angry: 0,
        };
        let feed = build_feed(&[post("1", reactions)], &DisclosureMap::new(), now());
        assert_eq!(feed[0].total_reactions, 63);
    }

    #[test]
    fn feed_carries_relative_age() {
        let feed = build_feed(
            &[post("1", Reactions::default())],
            &DisclosureMap::new(),
            now(),
        );
        assert_eq!(feed[0].age, "3h ago");
    }

    #[test]
    fn expanded_ids_round_trip() {
        let mut disclosure = DisclosureMap::new();
        disclosure.toggle("a");
        disclosure.toggle("b");
        disclosure.toggle("b");

        let ids: Vec<&str> = disclosure.expanded_ids().collect();
        assert_eq!(ids, vec!["a"]);

        let rebuilt = DisclosureMap::from_expanded(ids);
        assert!(rebuilt.is_expanded("a"));
        assert!(!rebuilt.is_expanded("b"));
    }
}
