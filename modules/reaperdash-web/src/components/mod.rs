pub mod feed;
pub mod layout;
pub mod network;
pub mod search;
pub mod status;

pub use feed::{render_data, FeedRow};
pub use network::render_network;
pub use search::render_search;
pub use status::render_status;
