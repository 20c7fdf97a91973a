use dioxus::prelude::*;

use reaperdash_views::{BackendHealth, ErrorView, StatusView};

use super::layout::Layout;
use crate::templates::render_to_html;

fn error_item(error: &ErrorView) -> Element {
    rsx! {
        div { class: "bg-white border border-gray-200 border-l-4 border-l-red-500 rounded p-3",
            div { class: "flex items-center justify-between gap-2",
                div { class: "text-sm font-medium", "{error.kind_label}" }
                div { class: "text-xs text-gray-400", "{error.timestamp}" }
            }
            div { class: "text-sm", "{error.message}" }
            div { class: "text-xs text-gray-400", "Target: {error.target}" }
        }
    }
}

#[allow(non_snake_case)]
#[component]
fn StatusPage(view: StatusView, health: BackendHealth) -> Element {
    let progress = view.progress;
    rsx! {
        Layout { title: "Scraper Status".to_string(), active_page: "status".to_string(),
            div { class: "max-w-4xl mx-auto grid gap-4 md:grid-cols-3",
                div { class: "md:col-span-2 bg-white border border-gray-200 rounded-lg p-5 space-y-6",
                    div {
                        h2 { class: "text-lg font-semibold", "Scraper Status" }
                        p { class: "text-sm text-gray-400", "Live operational metrics and recent errors" }
                    }
                    div { class: "flex items-center justify-between",
                        div { class: "text-sm text-gray-400", "Current target" }
                        div { class: "text-sm font-mono", "{view.current_target}" }
                    }
                    div { class: "h-2 rounded-full bg-gray-100 overflow-hidden",
                        div {
                            class: "h-full bg-emerald-600",
                            style: "width: {progress}%",
                        }
                    }
                    div { class: "grid grid-cols-2 gap-4",
                        div { class: "border border-gray-200 rounded-lg p-4",
                            div { class: "text-sm text-gray-400", "Runtime" }
                            div { class: "mt-1 font-medium", "{view.runtime}" }
                        }
                        div { class: "border border-gray-200 rounded-lg p-4",
                            div { class: "text-sm text-gray-400", "ETA" }
                            div { class: "mt-1 font-medium", "{view.eta}" }
                        }
                    }
                    div { class: "flex items-center gap-2",
                        if view.is_active {
                            span { class: "h-2.5 w-2.5 rounded-full bg-emerald-500" }
                            span { class: "text-sm font-medium text-emerald-700", "Active" }
                        } else {
                            span { class: "h-2.5 w-2.5 rounded-full bg-gray-300" }
                            span { class: "text-sm text-gray-400", "Inactive" }
                        }
                        div { class: "ml-auto text-xs text-gray-400",
                            "{view.processed_items} / {view.total_items} processed"
                        }
                    }
                    if !view.errors.is_empty() {
                        div { class: "space-y-2",
                            div { class: "text-sm font-medium", "Recent errors" }
                            div { class: "space-y-2 max-h-44 overflow-auto pr-1",
                                for error in view.errors.iter() {
                                    {error_item(error)}
                                }
                            }
                        }
                    }
                }
                div { class: "bg-white border border-gray-200 rounded-lg p-5 space-y-3",
                    div {
                        h2 { class: "text-lg font-semibold", "Backend" }
                        p { class: "text-sm text-gray-400", "fbreaper backend health" }
                    }
                    div { class: "text-sm",
                        "Status: "
                        if health == BackendHealth::Up {
                            span { class: "text-emerald-600 font-medium", "UP" }
                        } else {
                            span { class: "text-red-600 font-medium", "DOWN" }
                        }
                    }
                    a {
                        href: "/status",
                        class: "inline-block px-3 py-1.5 text-sm border border-gray-300 rounded-md hover:bg-gray-50",
                        "Re-check"
                    }
                }
            }
        }
    }
}

pub fn render_status(view: StatusView, health: BackendHealth) -> String {
    let mut dom = VirtualDom::new_with_props(StatusPage, StatusPageProps { view, health });
    dom.rebuild_in_place();
    render_to_html(&dom)
}
