use dioxus::prelude::*;

use reaperdash_views::{SearchKind, SUGGESTED_KEYWORDS};

use super::feed::{feed_list, FeedRow};
use super::layout::Layout;
use crate::templates::render_to_html;

#[derive(Clone, PartialEq)]
struct KindTab {
    label: &'static str,
    href: String,
    active: bool,
}

#[derive(Clone, PartialEq)]
struct KeywordChip {
    label: &'static str,
    href: String,
}

/// Minimal percent-encoding for the characters a search query can smuggle
/// into an href; everything routed through a form is encoded by the
/// browser instead.
pub fn encode_query(query: &str) -> String {
    let mut out = String::with_capacity(query.len());
    for c in query.chars() {
        match c {
            ' ' => out.push('+'),
            '%' => out.push_str("%25"),
            '#' => out.push_str("%23"),
            '&' => out.push_str("%26"),
            '+' => out.push_str("%2B"),
            '=' => out.push_str("%3D"),
            _ => out.push(c),
        }
    }
    out
}

pub fn render_search(kind: SearchKind, query: &str, rows: Vec<FeedRow>, searched: bool) -> String {
    let encoded = encode_query(query);

    let tabs = SearchKind::ALL
        .iter()
        .map(|k| KindTab {
            label: k.label(),
            href: format!("/search?kind={}&q={}", k.as_str(), encoded),
            active: *k == kind,
        })
        .collect();

    let chips = SUGGESTED_KEYWORDS
        .iter()
        .map(|&keyword| KeywordChip {
            label: keyword,
            href: format!("/search?kind={}&q={}", kind.as_str(), encode_query(keyword)),
        })
        .collect();

    let mut dom = VirtualDom::new_with_props(
        SearchPage,
        SearchPageProps {
            tabs,
            chips,
            kind_value: kind.as_str().to_string(),
            kind_label: kind.label().to_lowercase(),
            query: query.to_string(),
            rows,
            searched,
        },
    );
    dom.rebuild_in_place();
    render_to_html(&dom)
}

#[allow(non_snake_case)]
#[component]
fn SearchPage(
    tabs: Vec<KindTab>,
    chips: Vec<KeywordChip>,
    kind_value: String,
    kind_label: String,
    query: String,
    rows: Vec<FeedRow>,
    searched: bool,
) -> Element {
    rsx! {
        Layout { title: "Search".to_string(), active_page: "search".to_string(),
            div { class: "max-w-3xl mx-auto space-y-6",
                div { class: "bg-white border border-gray-200 rounded-lg p-5 space-y-4",
                    div {
                        h2 { class: "text-lg font-semibold", "OSINT Search" }
                        p { class: "text-sm text-gray-400",
                            "Search collected posts by keyword, user, group, or page"
                        }
                    }
                    div { class: "grid grid-cols-4 gap-1 bg-gray-100 rounded-md p-1",
                        for tab in tabs.iter() {
                            {
                                let class = if tab.active {
                                    "text-center text-sm py-1.5 rounded bg-white shadow-sm font-medium"
                                } else {
                                    "text-center text-sm py-1.5 rounded text-gray-500 hover:text-gray-900"
                                };
                                let href = tab.href.clone();
                                let label = tab.label;
                                rsx! { a { href: "{href}", class: class, "{label}" } }
                            }
                        }
                    }
                    form { action: "/search", method: "get", class: "flex gap-2",
                        input { r#type: "hidden", name: "kind", value: "{kind_value}" }
                        input {
                            r#type: "text",
                            name: "q",
                            value: "{query}",
                            placeholder: "Search for {kind_label}s...",
                            class: "flex-1 border border-gray-300 rounded-md px-3 py-1.5 text-sm",
                        }
                        button {
                            r#type: "submit",
                            class: "px-4 py-1.5 text-sm rounded-md bg-emerald-600 text-white hover:bg-emerald-700",
                            "Search"
                        }
                    }
                    div { class: "flex flex-wrap gap-2 text-xs",
                        for chip in chips.iter() {
                            {
                                let href = chip.href.clone();
                                let label = chip.label;
                                rsx! {
                                    a {
                                        href: "{href}",
                                        class: "px-2 py-0.5 rounded-full bg-gray-100 text-gray-600 hover:bg-gray-200",
                                        "{label}"
                                    }
                                }
                            }
                        }
                    }
                }
                if searched {
                    {feed_list(&rows)}
                }
            }
        }
    }
}
