use std::collections::HashSet;

use reaperdash_common::{NetworkLink, NetworkNode, NodeKind};

/// At most this many filtered nodes are actually drawn.
pub const RENDER_CAP: usize = 12;
pub const GRID_COLS: usize = 6;

pub const MIN_ZOOM: f32 = 0.5;
pub const MAX_ZOOM: f32 = 2.0;
pub const ZOOM_STEP: f32 = 0.1;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GraphFilter {
    #[default]
    All,
    Kind(NodeKind),
}

impl GraphFilter {
    pub fn as_str(&self) -> &'static str {
        match self {
            GraphFilter::All => "all",
            GraphFilter::Kind(NodeKind::User) => "user",
            GraphFilter::Kind(NodeKind::Group) => "group",
            GraphFilter::Kind(NodeKind::Page) => "page",
            GraphFilter::Kind(NodeKind::Post) => "post",
        }
    }

    /// Parse a query-string value; anything unrecognized falls back to All.
    pub fn parse(value: &str) -> Self {
        match value {
            "user" => GraphFilter::Kind(NodeKind::User),
            "group" => GraphFilter::Kind(NodeKind::Group),
            "page" => GraphFilter::Kind(NodeKind::Page),
            "post" => GraphFilter::Kind(NodeKind::Post),
            _ => GraphFilter::All,
        }
    }
}

/// The three independent pieces of view state the network page owns.
/// Component-local; a fresh page load starts from `new()`.
#[derive(Debug, Clone, PartialEq)]
pub struct NetworkState {
    zoom: f32,
    pub filter: GraphFilter,
    pub selected: Option<String>,
}

impl Default for NetworkState {
    fn default() -> Self {
        Self::new()
    }
}

impl NetworkState {
    pub fn new() -> Self {
        Self {
            zoom: 1.0,
            filter: GraphFilter::All,
            selected: None,
        }
    }

    pub fn zoom(&self) -> f32 {
        self.zoom
    }

    pub fn set_zoom(&mut self, zoom: f32) {
        self.zoom = zoom.clamp(MIN_ZOOM, MAX_ZOOM);
    }

    pub fn zoom_in(&mut self) {
        self.zoom = (self.zoom() + ZOOM_STEP).min(MAX_ZOOM);
    }

    pub fn zoom_out(&mut self) {
        self.zoom = (self.zoom() - ZOOM_STEP).max(MIN_ZOOM);
    }

    pub fn reset_zoom(&mut self) {
        self.zoom = 1.0;
    }

    pub fn set_filter(&mut self, filter: GraphFilter) {
        self.filter = filter;
    }

    /// Clicking the selected node deselects it; clicking another replaces
    /// the selection.
    pub fn toggle_select(&mut self, id: &str) {
        if self.selected.as_deref() == Some(id) {
            self.selected = None;
        } else {
            self.selected = Some(id.to_string());
        }
    }
}

/// Apply the category filter. All passes everything through unchanged;
/// otherwise nodes must match the kind, and a link survives when at least
/// one endpoint is in the retained node set.
pub fn filter_graph<'a>(
    nodes: &'a [NetworkNode],
    links: &'a [NetworkLink],
    filter: GraphFilter,
) -> (Vec<&'a NetworkNode>, Vec<&'a NetworkLink>) {
    let kind = match filter {
        GraphFilter::All => return (nodes.iter().collect(), links.iter().collect()),
        GraphFilter::Kind(kind) => kind,
    };

    let kept: Vec<&NetworkNode> = nodes.iter().filter(|n| n.kind == kind).collect();
    let ids: HashSet<&str> = kept.iter().map(|n| n.id.as_str()).collect();
    let links = links
        .iter()
        .filter(|l| ids.contains(l.source.as_str()) || ids.contains(l.target.as_str()))
        .collect();
    (kept, links)
}

/// Placeholder layout: fixed 6-column grid, columns 15 units apart, rows
/// 30 units apart, independent of node content. Returns (left, top) in
/// percent of the canvas.
pub fn grid_position(index: usize) -> (f32, f32) {
    let left = 10.0 + (index % GRID_COLS) as f32 * 15.0;
    let top = 15.0 + (index / GRID_COLS) as f32 * 30.0;
    (left, top)
}

/// Resolve the selected node against the unfiltered collection, so the
/// detail card survives a filter change that hides the marker. An id with
/// no matching node shows nothing.
pub fn selected_node<'a>(
    nodes: &'a [NetworkNode],
    state: &NetworkState,
) -> Option<&'a NetworkNode> {
    let id = state.selected.as_deref()?;
    nodes.iter().find(|n| n.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use reaperdash_common::LinkKind;

    fn node(id: &str, kind: NodeKind) -> NetworkNode {
        NetworkNode {
            id: id.to_string(),
            label: format!("node {id}"),
            kind,
            connections: 10,
            avatar: None,
        }
    }

    fn link(source: &str, target: &str) -> NetworkLink {
        NetworkLink {
            source: source.to_string(),
            target: target.to_string(),
            strength: 0.5,
            kind: LinkKind::Comment,
        }
    }

    fn graph() -> (Vec<NetworkNode>, Vec<NetworkLink>) {
        let nodes = vec![
            node("1", NodeKind::User),
            node("2", NodeKind::Group),
            node("3", NodeKind::User),
            node("4", NodeKind::Page),
            node("5", NodeKind::Post),
        ];
        let links = vec![
            link("1", "2"),
            link("3", "2"),
            link("4", "2"),
            link("1", "5"),
            link("4", "5"),
        ];
        (nodes, links)
    }

    #[test]
    fn all_filter_passes_everything_through() {
        let (nodes, links) = graph();
        let (fnodes, flinks) = filter_graph(&nodes, &links, GraphFilter::All);
        assert_eq!(fnodes.len(), nodes.len());
        assert_eq!(flinks.len(), links.len());
    }

    #[test]
    fn filtered_links_have_at_least_one_retained_endpoint() {
        let (nodes, links) = graph();
        for filter in ["user", "group", "page", "post"] {
            let filter = GraphFilter::parse(filter);
            let (fnodes, flinks) = filter_graph(&nodes, &links, filter);
            let ids: HashSet<&str> = fnodes.iter().map(|n| n.id.as_str()).collect();
            for l in flinks {
                assert!(
                    ids.contains(l.source.as_str()) || ids.contains(l.target.as_str()),
                    "link {}->{} kept with no retained endpoint",
                    l.source,
                    l.target
                );
            }
        }
    }

    #[test]
    fn user_filter_keeps_single_endpoint_links() {
        let (nodes, links) = graph();
        let (fnodes, flinks) =
            filter_graph(&nodes, &links, GraphFilter::Kind(NodeKind::User));
        assert_eq!(fnodes.len(), 2);
        // 1->2, 3->2 and 1->5 each have one user endpoint; 4->2 and 4->5
        // have none.
        assert_eq!(flinks.len(), 3);
    }

    #[test]
    fn zoom_out_clamps_at_floor() {
        let mut state = NetworkState::new();
        for _ in 0..20 {
            state.zoom_out();
            assert!(state.zoom() >= MIN_ZOOM);
        }
        assert!((state.zoom() - MIN_ZOOM).abs() < 1e-6);
    }

    #[test]
    fn zoom_in_clamps_at_ceiling() {
        let mut state = NetworkState::new();
        for _ in 0..20 {
            state.zoom_in();
            assert!(state.zoom() <= MAX_ZOOM);
        }
        assert!((state.zoom() - MAX_ZOOM).abs() < 1e-6);
    }

    #[test]
    fn reset_restores_exactly_one() {
        let mut state = NetworkState::new();
        state.zoom_in();
        state.zoom_in();
        state.reset_zoom();
        assert_eq!(state.zoom(), 1.0);
    }

    #[test]
    fn selecting_same_node_twice_deselects() {
        let mut state = NetworkState::new();
        state.toggle_select("x");
        assert_eq!(state.selected.as_deref(), Some("x"));
        state.toggle_select("x");
        assert_eq!(state.selected, None);
    }

    #[test]
    fn selecting_another_node_replaces() {
        let mut state = NetworkState::new();
        state.toggle_select("x");
        state.toggle_select("y");
        assert_eq!(state.selected.as_deref(), Some("y"));
    }

    #[test]
    fn grid_positions_follow_modulo_layout() {
        assert_eq!(grid_position(0), (10.0, 15.0));
        assert_eq!(grid_position(5), (85.0, 15.0));
        assert_eq!(grid_position(6), (10.0, 45.0));
        assert_eq!(grid_position(11), (85.0, 45.0));
    }

    #[test]
    fn selection_survives_excluding_filter() {
        let (nodes, _) = graph();
        let mut state = NetworkState::new();
        state.toggle_select("2"); // a group
        state.set_filter(GraphFilter::Kind(NodeKind::User));

        // The marker would be filtered out, but the detail lookup goes
        // against the unfiltered collection.
        let detail = selected_node(&nodes, &state).unwrap();
        assert_eq!(detail.id, "2");
    }

    #[test]
    fn unknown_selection_shows_nothing() {
        let (nodes, _) = graph();
        let mut state = NetworkState::new();
        state.toggle_select("does-not-exist");
        assert!(selected_node(&nodes, &state).is_none());
    }
}
