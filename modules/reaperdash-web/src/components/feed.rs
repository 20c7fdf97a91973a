use dioxus::prelude::*;

use reaperdash_views::{FeedItem, SKELETON_ROWS};

use super::layout::Layout;
use crate::templates::render_to_html;

/// A feed entry plus the display state the pure view model cannot know:
/// the link that toggles its comment disclosure and the pre-rendered age
/// of each comment.
#[derive(Clone, PartialEq)]
pub struct FeedRow {
    pub item: FeedItem,
    pub toggle_href: String,
    pub comment_ages: Vec<String>,
}

/// Five pulsing placeholder cards; post content is ignored while loading.
pub fn feed_skeleton() -> Element {
    rsx! {
        div { class: "space-y-3",
            for _i in 0..SKELETON_ROWS {
                div { class: "bg-white border border-gray-200 rounded-lg p-6 animate-pulse",
                    div { class: "h-4 w-1/3 bg-gray-200 rounded mb-3" }
                    div { class: "h-4 w-2/3 bg-gray-200 rounded mb-3" }
                    div { class: "h-4 w-1/2 bg-gray-200 rounded" }
                }
            }
        }
    }
}

pub fn feed_list(rows: &[FeedRow]) -> Element {
    rsx! {
        div { class: "space-y-4",
            if rows.is_empty() {
                p { class: "text-gray-400 text-center py-10", "No posts to show." }
            }
            for row in rows.iter() {
                {feed_card(row)}
            }
        }
    }
}

fn feed_card(row: &FeedRow) -> Element {
    let post = &row.item.post;
    let comment_count = post.comments.len();
    rsx! {
        div { class: "bg-white border border-gray-200 rounded-lg p-4",
            div { class: "flex items-start gap-3",
                img {
                    src: "{post.author.avatar}",
                    alt: "{post.author.name} avatar",
                    class: "h-10 w-10 rounded-full object-cover",
                }
                div { class: "min-w-0 flex-1",
                    div { class: "flex flex-wrap items-center gap-2",
                        span { class: "font-medium", "{post.author.name}" }
                        span { class: "text-xs text-gray-400", "@{post.author.username}" }
                        {post.group.as_ref().map(|group| rsx! {
                            span { class: "inline-block px-2 py-0.5 rounded-full text-xs border border-gray-300 text-gray-600",
                                "{group}"
                            }
                        })}
                        {post.page.as_ref().map(|page| rsx! {
                            span { class: "inline-block px-2 py-0.5 rounded-full text-xs bg-gray-100 text-gray-600",
                                "{page}"
                            }
                        })}
                    }
                    div { class: "flex items-center gap-2 text-xs text-gray-400 mt-1",
                        span { "{row.item.age}" }
                        a {
                            href: "{post.url}",
                            target: "_blank",
                            rel: "noopener noreferrer",
                            class: "hover:underline",
                            "Open"
                        }
                    }
                    p { class: "mt-3 text-sm", "{post.content}" }
                    div { class: "mt-3 flex items-center gap-4 text-xs text-gray-500",
                        span { "{row.item.total_reactions} reactions" }
                        span { "{comment_count} comments" }
                        span { "{post.shares} shares" }
                    }
                    if comment_count > 0 {
                        div { class: "mt-3",
                            {
                                let label = if row.item.expanded {
                                    "Hide comments".to_string()
                                } else {
                                    format!("Show {comment_count} comments")
                                };
                                let href = row.toggle_href.clone();
                                rsx! {
                                    a { href: "{href}", class: "text-emerald-700 hover:underline text-sm", "{label}" }
                                }
                            }
                            if row.item.expanded {
                                div { class: "mt-3 space-y-3 border-t border-gray-200 pt-3",
                                    for (i, comment) in post.comments.iter().enumerate() {
                                        {
                                            let age = row
                                                .comment_ages
                                                .get(i)
                                                .map(String::as_str)
                                                .unwrap_or("unknown");
                                            rsx! {
                                                div { class: "flex gap-3",
                                                    img {
                                                        src: "{comment.author.avatar}",
                                                        alt: "{comment.author.name} avatar",
                                                        class: "h-8 w-8 rounded-full object-cover",
                                                    }
                                                    div { class: "min-w-0 flex-1",
                                                        div { class: "flex flex-wrap items-center gap-2",
                                                            span { class: "text-sm font-medium", "{comment.author.name}" }
                                                            span { class: "text-xs text-gray-400", "{age}" }
                                                        }
                                                        p { class: "text-sm mt-1", "{comment.content}" }
                                                        div { class: "text-xs text-gray-400 mt-1",
                                                            "{comment.reactions} reactions"
                                                        }
                                                    }
                                                }
                                            }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[allow(non_snake_case)]
#[component]
fn DataPage(rows: Vec<FeedRow>, loading: bool, refresh_href: String, reload_href: String) -> Element {
    // The loading page is a placeholder; it immediately re-requests the
    // real feed, keeping any expanded comment ids.
    let reload_script = format!("window.location.replace('{reload_href}');");
    rsx! {
        Layout { title: "Data Viewer".to_string(), active_page: "data".to_string(),
            div { class: "max-w-3xl mx-auto",
                div { class: "bg-white border border-gray-200 rounded-lg",
                    div { class: "flex items-center justify-between p-4 border-b border-gray-200",
                        div {
                            h2 { class: "text-lg font-semibold", "Scraped Data" }
                            p { class: "text-sm text-gray-400", "Posts collected by the scraper" }
                        }
                        a {
                            href: "{refresh_href}",
                            class: "px-3 py-1.5 text-sm border border-gray-300 rounded-md hover:bg-gray-50",
                            "Refresh"
                        }
                    }
                    div { class: "p-4",
                        if loading {
                            {feed_skeleton()}
                            script { dangerous_inner_html: "{reload_script}" }
                        } else {
                            {feed_list(&rows)}
                        }
                    }
                }
            }
        }
    }
}

pub fn render_data(
    rows: Vec<FeedRow>,
    loading: bool,
    refresh_href: String,
    reload_href: String,
) -> String {
    let mut dom = VirtualDom::new_with_props(
        DataPage,
        DataPageProps {
            rows,
            loading,
            refresh_href,
            reload_href,
        },
    );
    dom.rebuild_in_place();
    render_to_html(&dom)
}
