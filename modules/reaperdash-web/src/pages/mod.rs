use std::sync::Arc;

use axum::{
    extract::{Query, State},
    response::Html,
};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use tracing::warn;

use reaperdash_common::Post;
use reaperdash_views::{
    backend_health, build_feed, normalize_posts, search_posts, timefmt::relative_age,
    DisclosureMap, GraphFilter, NetworkState, SearchKind, StatusView,
};

use crate::components::search::encode_query;
use crate::components::{render_data, render_network, render_search, render_status, FeedRow};
use crate::sample;
use crate::AppState;

// --- Query structs ---

#[derive(Deserialize, Default)]
pub struct SearchQuery {
    kind: Option<String>,
    q: Option<String>,
    expanded: Option<String>,
}

#[derive(Deserialize, Default)]
pub struct DataQuery {
    expanded: Option<String>,
    loading: Option<String>,
}

#[derive(Deserialize, Default)]
pub struct NetworkQuery {
    filter: Option<String>,
    zoom: Option<f32>,
    selected: Option<String>,
}

// --- Helpers ---

fn parse_disclosure(expanded: Option<&str>) -> DisclosureMap {
    DisclosureMap::from_expanded(
        expanded
            .unwrap_or("")
            .split(',')
            .filter(|id| !id.is_empty()),
    )
}

fn with_expanded(base: &str, ids: &[&str]) -> String {
    if ids.is_empty() {
        return base.to_string();
    }
    let sep = if base.contains('?') { '&' } else { '?' };
    format!("{base}{sep}expanded={}", ids.join(","))
}

/// Attach the per-row display state the components need: the disclosure
/// toggle link and each comment's relative age.
fn feed_rows(
    posts: &[Post],
    disclosure: &DisclosureMap,
    base: &str,
    now: DateTime<Utc>,
) -> Vec<FeedRow> {
    build_feed(posts, disclosure, now)
        .into_iter()
        .map(|item| {
            let mut next = disclosure.clone();
            next.toggle(&item.post.id);
            let mut ids: Vec<&str> = next.expanded_ids().collect();
            ids.sort_unstable();
            let toggle_href = with_expanded(base, &ids);
            let comment_ages = item
                .post
                .comments
                .iter()
                .map(|c| relative_age(&c.timestamp, now))
                .collect();
            FeedRow {
                item,
                toggle_href,
                comment_ages,
            }
        })
        .collect()
}

// --- Page handlers ---

pub async fn search_page(Query(query): Query<SearchQuery>) -> Html<String> {
    let kind = SearchKind::parse(query.kind.as_deref().unwrap_or(""));
    let q = query.q.unwrap_or_default();
    let searched = !q.trim().is_empty();
    let disclosure = parse_disclosure(query.expanded.as_deref());
    let now = Utc::now();

    // Client-side search over the sample set; the backend has no search
    // endpoint.
    let posts = sample::posts();
    let results: Vec<Post> = search_posts(&posts, kind, &q).into_iter().cloned().collect();

    let base = format!("/search?kind={}&q={}", kind.as_str(), encode_query(&q));
    let rows = feed_rows(&results, &disclosure, &base, now);
    Html(render_search(kind, &q, rows, searched))
}

pub async fn status_page(State(state): State<Arc<AppState>>) -> Html<String> {
    let result = state.client.fetch_health().await;
    if let Err(error) = &result {
        warn!(%error, "Health check failed");
    }
    let health = backend_health(result);

    let view = StatusView::from_status(&sample::scraper_status(), Utc::now());
    Html(render_status(view, health))
}

pub async fn data_page(
    State(state): State<Arc<AppState>>,
    Query(query): Query<DataQuery>,
) -> Html<String> {
    // Disclosure state rides along through refresh; stale ids for posts no
    // longer present are simply unused.
    let expanded = query.expanded.as_deref().unwrap_or("");
    let base = if expanded.is_empty() {
        "/data".to_string()
    } else {
        format!("/data?expanded={expanded}")
    };
    let refresh_href = if expanded.is_empty() {
        "/data?loading=1".to_string()
    } else {
        format!("/data?loading=1&expanded={expanded}")
    };

    if query.loading.is_some() {
        return Html(render_data(Vec::new(), true, refresh_href, base));
    }

    let now = Utc::now();
    let posts = match state.client.fetch_posts().await {
        Ok(raw) => normalize_posts(raw, now),
        Err(error) => {
            // Degrade to an empty feed; the error never reaches the user.
            warn!(%error, "Failed to fetch posts");
            Vec::new()
        }
    };

    let disclosure = parse_disclosure(query.expanded.as_deref());
    let rows = feed_rows(&posts, &disclosure, "/data", now);
    Html(render_data(rows, false, refresh_href, base))
}

pub async fn network_page(Query(query): Query<NetworkQuery>) -> Html<String> {
    let mut state = NetworkState::new();
    state.set_filter(GraphFilter::parse(query.filter.as_deref().unwrap_or("all")));
    if let Some(zoom) = query.zoom {
        state.set_zoom(zoom);
    }
    if let Some(id) = query.selected.filter(|id| !id.is_empty()) {
        state.toggle_select(&id);
    }

    // Sample graph; the backend has no link-analysis endpoint.
    let (nodes, links) = sample::network();
    Html(render_network(&nodes, &links, &state))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn disclosure_round_trips_through_query_param() {
        let disclosure = parse_disclosure(Some("1,7"));
        assert!(disclosure.is_expanded("1"));
        assert!(disclosure.is_expanded("7"));
        assert!(!disclosure.is_expanded("2"));

        let empty = parse_disclosure(None);
        assert!(!empty.is_expanded("1"));
    }

    #[test]
    fn with_expanded_appends_with_correct_separator() {
        assert_eq!(with_expanded("/data", &[]), "/data");
        assert_eq!(with_expanded("/data", &["1"]), "/data?expanded=1");
        assert_eq!(
            with_expanded("/search?kind=keyword&q=x", &["1", "2"]),
            "/search?kind=keyword&q=x&expanded=1,2"
        );
    }
}
