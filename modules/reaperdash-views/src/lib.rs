//! Presentation logic for the dashboard, kept free of any rendering
//! dependency: normalization of backend records, feed/status view models,
//! and the network view's filter/zoom/selection state.

pub mod feed;
pub mod network;
pub mod normalize;
pub mod search;
pub mod status;
pub mod timefmt;

pub use feed::{build_feed, DisclosureMap, FeedItem, SKELETON_ROWS};
pub use network::{
    filter_graph, grid_position, selected_node, GraphFilter, NetworkState, GRID_COLS, RENDER_CAP,
};
pub use normalize::normalize_posts;
pub use search::{search_posts, SearchKind, SUGGESTED_KEYWORDS};
pub use status::{backend_health, BackendHealth, ErrorView, StatusView, MAX_VISIBLE_ERRORS};
