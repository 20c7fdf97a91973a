//! Canned data for the surfaces the backend does not serve yet: search
//! results, scraper status, and the link-analysis graph. The data viewer is
//! the only page fed by live backend data.

use reaperdash_common::{
    Author, Comment, CommentAuthor, ErrorKind, LinkKind, NetworkLink, NetworkNode, NodeKind, Post,
    Reactions, ScraperError, ScraperStatus, PLACEHOLDER_AVATAR,
};

pub fn posts() -> Vec<Post> {
    vec![
        Post {
            id: "1".to_string(),
            content: "Just attended the peaceful protest downtown. The energy was incredible! \
                      #Protest2024 #PeacefulDemonstration"
                .to_string(),
            author: Author {
                name: "John Doe".to_string(),
                username: "john.doe".to_string(),
                avatar: PLACEHOLDER_AVATAR.to_string(),
                profile_url: "https://facebook.com/john.doe".to_string(),
            },
            timestamp: "2024-01-15T10:30:00Z".to_string(),
            reactions: Reactions {
                like: 45,
                love: 12,
                haha: 3,
                wow: 2,
                sad: 1,
                angry: 0,
            },
            comments: vec![Comment {
                id: "c1".to_string(),
                content: "Great photos! Wish I could have been there.".to_string(),
                author: CommentAuthor {
                    name: "Jane Smith".to_string(),
                    username: "jane.smith".to_string(),
                    avatar: PLACEHOLDER_AVATAR.to_string(),
                },
                timestamp: "2024-01-15T10:35:00Z".to_string(),
                reactions: 8,
            }],
            shares: 23,
            url: "https://facebook.com/post/123".to_string(),
            group: Some("Protest Group 2024".to_string()),
            page: None,
        },
        Post {
            id: "2".to_string(),
            content: "Election coverage continues tonight at 8pm. Send us your questions."
                .to_string(),
            author: Author {
                name: "News Page".to_string(),
                username: "news.page".to_string(),
                avatar: PLACEHOLDER_AVATAR.to_string(),
                profile_url: "https://facebook.com/news.page".to_string(),
            },
            timestamp: "2024-01-14T19:00:00Z".to_string(),
            reactions: Reactions {
                like: 210,
                love: 34,
                haha: 1,
                wow: 9,
                sad: 0,
                angry: 4,
            },
            comments: Vec::new(),
            shares: 88,
            url: "https://facebook.com/post/456".to_string(),
            group: None,
            page: Some("News Page".to_string()),
        },
    ]
}

pub fn scraper_status() -> ScraperStatus {
    ScraperStatus {
        is_active: true,
        current_target: "protest.group.2024".to_string(),
        progress: 67,
        total_items: 1500,
        processed_items: 1005,
        errors: vec![ScraperError {
            id: "1".to_string(),
            message: "Rate limit exceeded for target group".to_string(),
            timestamp: "2024-01-15T10:30:00Z".to_string(),
            target: "protest.group.2024".to_string(),
            kind: ErrorKind::RateLimit,
        }],
        start_time: "2024-01-15T08:00:00Z".to_string(),
        estimated_completion: "2h 15m".to_string(),
    }
}

pub fn network() -> (Vec<NetworkNode>, Vec<NetworkLink>) {
    let nodes = vec![
        NetworkNode {
            id: "1".to_string(),
            label: "John Doe".to_string(),
            kind: NodeKind::User,
            connections: 45,
            avatar: Some(PLACEHOLDER_AVATAR.to_string()),
        },
        NetworkNode {
            id: "2".to_string(),
            label: "Protest Group 2024".to_string(),
            kind: NodeKind::Group,
            connections: 1200,
            avatar: None,
        },
        NetworkNode {
            id: "3".to_string(),
            label: "Jane Smith".to_string(),
            kind: NodeKind::User,
            connections: 23,
            avatar: Some(PLACEHOLDER_AVATAR.to_string()),
        },
        NetworkNode {
            id: "4".to_string(),
            label: "News Page".to_string(),
            kind: NodeKind::Page,
            connections: 8900,
            avatar: None,
        },
        NetworkNode {
            id: "5".to_string(),
            label: "Post #1234".to_string(),
            kind: NodeKind::Post,
            connections: 156,
            avatar: None,
        },
    ];

    let links = vec![
        NetworkLink {
            source: "1".to_string(),
            target: "2".to_string(),
            strength: 0.8,
            kind: LinkKind::Comment,
        },
        NetworkLink {
            source: "3".to_string(),
            target: "2".to_string(),
            strength: 0.6,
            kind: LinkKind::Reaction,
        },
        NetworkLink {
            source: "4".to_string(),
            target: "2".to_string(),
            strength: 0.9,
            kind: LinkKind::Share,
        },
        NetworkLink {
            source: "1".to_string(),
            target: "5".to_string(),
            strength: 0.7,
            kind: LinkKind::Comment,
        },
    ];

    (nodes, links)
}
