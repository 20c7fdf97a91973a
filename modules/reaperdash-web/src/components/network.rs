use dioxus::prelude::*;

use reaperdash_common::{NetworkLink, NetworkNode, NodeKind};
use reaperdash_views::{
    filter_graph, grid_position, selected_node, GraphFilter, NetworkState, RENDER_CAP,
};

use super::layout::Layout;
use crate::templates::render_to_html;

const FILTERS: &[(GraphFilter, &str)] = &[
    (GraphFilter::All, "All"),
    (GraphFilter::Kind(NodeKind::User), "Users"),
    (GraphFilter::Kind(NodeKind::Group), "Groups"),
    (GraphFilter::Kind(NodeKind::Page), "Pages"),
    (GraphFilter::Kind(NodeKind::Post), "Posts"),
];

#[derive(Clone, PartialEq)]
struct FilterChip {
    label: &'static str,
    href: String,
    active: bool,
}

#[derive(Clone, PartialEq)]
struct Marker {
    left: f32,
    top: f32,
    zoom: f32,
    color: &'static str,
    href: String,
    tooltip: String,
}

#[derive(Clone, PartialEq)]
struct DetailCard {
    label: String,
    kind: String,
    connections: u32,
    avatar: Option<String>,
}

/// Serialize view state back into a page link. Every control on the page
/// is an anchor to a URL produced here.
fn page_href(state: &NetworkState) -> String {
    let mut href = format!(
        "/network?filter={}&zoom={:.1}",
        state.filter.as_str(),
        state.zoom()
    );
    if let Some(id) = &state.selected {
        href.push_str("&selected=");
        href.push_str(id);
    }
    href
}

fn marker_color(kind: NodeKind) -> &'static str {
    match kind {
        NodeKind::User => "bg-emerald-600 ring-emerald-300",
        NodeKind::Group => "bg-teal-600 ring-teal-300",
        NodeKind::Page => "bg-lime-600 ring-lime-300",
        NodeKind::Post => "bg-amber-600 ring-amber-300",
    }
}

pub fn render_network(nodes: &[NetworkNode], links: &[NetworkLink], state: &NetworkState) -> String {
    let (filtered_nodes, filtered_links) = filter_graph(nodes, links, state.filter);

    let chips = FILTERS
        .iter()
        .map(|&(filter, label)| {
            let mut next = state.clone();
            next.set_filter(filter);
            FilterChip {
                label,
                href: page_href(&next),
                active: state.filter == filter,
            }
        })
        .collect();

    let zoom_out_href = {
        let mut next = state.clone();
        next.zoom_out();
        page_href(&next)
    };
    let zoom_in_href = {
        let mut next = state.clone();
        next.zoom_in();
        page_href(&next)
    };
    let zoom_reset_href = {
        let mut next = state.clone();
        next.reset_zoom();
        page_href(&next)
    };

    let markers = filtered_nodes
        .iter()
        .take(RENDER_CAP)
        .enumerate()
        .map(|(i, node)| {
            let (left, top) = grid_position(i);
            let mut next = state.clone();
            next.toggle_select(&node.id);
            let color = if state.selected.as_deref() == Some(node.id.as_str()) {
                "bg-emerald-600 ring-emerald-300"
            } else {
                marker_color(node.kind)
            };
            Marker {
                left,
                top,
                zoom: state.zoom(),
                color,
                href: page_href(&next),
                tooltip: format!("{} ({} connections)", node.label, node.connections),
            }
        })
        .collect();

    // Detail resolves against the unfiltered collection, so a selected
    // node keeps its card even when the filter hides its marker.
    let detail = selected_node(nodes, state).map(|node| DetailCard {
        label: node.label.clone(),
        kind: node.kind.to_string(),
        connections: node.connections,
        avatar: node.avatar.clone(),
    });

    let mut dom = VirtualDom::new_with_props(
        NetworkPage,
        NetworkPageProps {
            chips,
            zoom_label: format!("{}%", (state.zoom() * 100.0).round() as u32),
            zoom_out_href,
            zoom_in_href,
            zoom_reset_href,
            markers,
            node_count: filtered_nodes.len(),
            link_count: filtered_links.len(),
            detail,
        },
    );
    dom.rebuild_in_place();
    render_to_html(&dom)
}

#[allow(non_snake_case)]
#[component]
fn NetworkPage(
    chips: Vec<FilterChip>,
    zoom_label: String,
    zoom_out_href: String,
    zoom_in_href: String,
    zoom_reset_href: String,
    markers: Vec<Marker>,
    node_count: usize,
    link_count: usize,
    detail: Option<DetailCard>,
) -> Element {
    rsx! {
        Layout { title: "Link Analysis".to_string(), active_page: "network".to_string(),
            div { class: "max-w-4xl mx-auto space-y-4",
                div {
                    h2 { class: "text-lg font-semibold", "Link Analysis" }
                    p { class: "text-sm text-gray-400",
                        "Visualize connections between users, groups, pages, and posts"
                    }
                }
                div { class: "flex flex-wrap items-center gap-2",
                    for chip in chips.iter() {
                        {
                            let class = if chip.active {
                                "px-3 py-1 text-sm rounded-md bg-emerald-600 text-white"
                            } else {
                                "px-3 py-1 text-sm rounded-md border border-gray-300 hover:bg-gray-50"
                            };
                            let href = chip.href.clone();
                            let label = chip.label;
                            rsx! { a { href: "{href}", class: class, "{label}" } }
                        }
                    }
                    div { class: "ml-auto flex items-center gap-2",
                        a {
                            href: "{zoom_out_href}",
                            class: "px-2 py-1 text-sm border border-gray-300 rounded-md hover:bg-gray-50",
                            "−"
                        }
                        span { class: "text-xs w-12 text-center text-gray-400", "{zoom_label}" }
                        a {
                            href: "{zoom_in_href}",
                            class: "px-2 py-1 text-sm border border-gray-300 rounded-md hover:bg-gray-50",
                            "+"
                        }
                        a {
                            href: "{zoom_reset_href}",
                            class: "px-2 py-1 text-sm border border-gray-300 rounded-md hover:bg-gray-50",
                            "Reset"
                        }
                    }
                }
                div { class: "relative h-96 rounded-md border border-gray-200 overflow-hidden bg-gray-100/30",
                    div { class: "absolute inset-0",
                        for marker in markers.iter() {
                            {
                                let class = format!(
                                    "absolute h-4 w-4 rounded-full ring-2 transition-all {}",
                                    marker.color
                                );
                                let style = format!(
                                    "left: {}%; top: {}%; transform: scale({});",
                                    marker.left, marker.top, marker.zoom
                                );
                                let href = marker.href.clone();
                                let tooltip = marker.tooltip.clone();
                                rsx! {
                                    a { href: "{href}", class: "{class}", style: "{style}", title: "{tooltip}" }
                                }
                            }
                        }
                    }
                    div { class: "absolute inset-0 flex items-center justify-center pointer-events-none",
                        div { class: "text-center text-sm text-gray-400",
                            "{node_count} nodes • {link_count} links"
                        }
                    }
                }
                {detail.as_ref().map(|card| rsx! {
                    div { class: "bg-white border border-gray-200 rounded-lg p-4 flex items-center gap-3",
                        {card.avatar.as_ref().map(|avatar| rsx! {
                            img { src: "{avatar}", alt: "{card.label} avatar", class: "h-8 w-8 rounded-full" }
                        }).unwrap_or_else(|| rsx! {
                            div { class: "h-8 w-8 rounded-full bg-emerald-600" }
                        })}
                        div {
                            div { class: "font-medium", "{card.label}" }
                            div { class: "text-xs text-gray-400 capitalize",
                                "{card.kind} • {card.connections} connections"
                            }
                        }
                    }
                })}
            }
        }
    }
}
