use reaperdash_common::Post;

/// Quick-fill chips shown under the search box.
pub const SUGGESTED_KEYWORDS: [&str; 4] = ["#protest", "#election", "#covid", "#climate"];

/// Which facet of a post the search matches against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchKind {
    #[default]
    Keyword,
    User,
    Group,
    Page,
}

impl SearchKind {
    pub const ALL: [SearchKind; 4] = [
        SearchKind::Keyword,
        SearchKind::User,
        SearchKind::Group,
        SearchKind::Page,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SearchKind::Keyword => "keyword",
            SearchKind::User => "user",
            SearchKind::Group => "group",
            SearchKind::Page => "page",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SearchKind::Keyword => "Keyword",
            SearchKind::User => "User",
            SearchKind::Group => "Group",
            SearchKind::Page => "Page",
        }
    }

    pub fn parse(value: &str) -> Self {
        match value {
            "user" => SearchKind::User,
            "group" => SearchKind::Group,
            "page" => SearchKind::Page,
            _ => SearchKind::Keyword,
        }
    }
}

/// Case-insensitive contains-filter over the loaded posts. The backend has
/// no search endpoint, so search runs client-side over whatever is in
/// view. A blank query means no search was performed and yields nothing.
pub fn search_posts<'a>(posts: &'a [Post], kind: SearchKind, query: &str) -> Vec<&'a Post> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return Vec::new();
    }

    let matches = |haystack: &str| haystack.to_lowercase().contains(&needle);

    posts
        .iter()
        .filter(|post| match kind {
            SearchKind::Keyword => matches(&post.content) || matches(&post.author.name),
            SearchKind::User => matches(&post.author.name) || matches(&post.author.username),
            SearchKind::Group => post.group.as_deref().is_some_and(matches),
            SearchKind::Page => post.page.as_deref().is_some_and(matches),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use reaperdash_common::{Author, Reactions, PLACEHOLDER_AVATAR};

    fn post(content: &str, author: &str, group: Option<&str>) -> Post {
        Post {
            id: "1".to_string(),
            content: content.to_string(),
            author: Author {
                name: author.to_string(),
                username: author.to_lowercase().replace(' ', "."),
                avatar: PLACEHOLDER_AVATAR.to_string(),
                profile_url: "#".to_string(),
            },
            timestamp: "2024-01-15T10:30:00Z".to_string(),
            reactions: Reactions::default(),
            comments: Vec::new(),
            shares: 0,
            url: "#".to_string(),
            group: group.map(str::to_string),
            page: None,
        }
    }

    #[test]
    fn blank_query_returns_nothing() {
        let posts = vec![post("anything", "Jane Smith", None)];
        assert!(search_posts(&posts, SearchKind::Keyword, "").is_empty());
        assert!(search_posts(&posts, SearchKind::Keyword, "   ").is_empty());
    }

    #[test]
    fn keyword_matches_content_case_insensitively() {
        let posts = vec![
            post("Protest downtown today", "Jane Smith", None),
            post("quiet day", "John Doe", None),
        ];
        let hits = search_posts(&posts, SearchKind::Keyword, "PROTEST");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].content, "Protest downtown today");
    }

    #[test]
    fn user_search_matches_name_and_username() {
        let posts = vec![post("x", "Jane Smith", None), post("y", "John Doe", None)];
        assert_eq!(search_posts(&posts, SearchKind::User, "jane.sm").len(), 1);
        assert_eq!(search_posts(&posts, SearchKind::User, "Doe").len(), 1);
    }

    #[test]
    fn group_search_ignores_posts_without_group() {
        let posts = vec![
            post("x", "Jane Smith", Some("Protest Group 2024")),
            post("y", "John Doe", None),
        ];
        let hits = search_posts(&posts, SearchKind::Group, "protest");
        assert_eq!(hits.len(), 1);
    }
}
