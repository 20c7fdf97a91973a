use dioxus::prelude::*;

struct NavItem {
    key: &'static str,
    label: &'static str,
    href: &'static str,
}

const NAV_ITEMS: &[NavItem] = &[
    NavItem { key: "search", label: "Search", href: "/search" },
    NavItem { key: "status", label: "Scraper Status", href: "/status" },
    NavItem { key: "data", label: "Data Viewer", href: "/data" },
    NavItem { key: "network", label: "Link Analysis", href: "/network" },
];

/// Swap any broken image to the fixed placeholder, independently per
/// element. Capture phase, since error events do not bubble.
const AVATAR_FALLBACK_JS: &str = "document.addEventListener('error',function(e){\
var img=e.target;\
if(img&&img.tagName==='IMG'&&!img.dataset.fallback){\
img.dataset.fallback='1';\
img.src='/placeholder.svg?height=40&width=40';\
}},true);";

/// Dashboard shell with sidebar navigation.
#[allow(non_snake_case)]
#[component]
pub fn Layout(title: String, active_page: String, children: Element) -> Element {
    let full_title = format!("{title} — fbreaper");
    rsx! {
        head {
            meta { charset: "utf-8" }
            meta { name: "viewport", content: "width=device-width, initial-scale=1" }
            title { "{full_title}" }
            script { src: "https://cdn.tailwindcss.com" }
            script { dangerous_inner_html: AVATAR_FALLBACK_JS }
        }
        body { class: "flex min-h-screen bg-gray-50 font-sans text-gray-900",
            div { class: "w-56 bg-gray-900 text-white flex flex-col shrink-0 fixed inset-y-0 left-0 z-50",
                div { class: "px-5 py-4 border-b border-gray-700",
                    a { href: "/", class: "flex items-center gap-2 no-underline text-white",
                        div { class: "h-7 w-7 rounded-md bg-emerald-600" }
                        span { class: "text-lg font-semibold tracking-tight", "fbreaper" }
                    }
                }
                nav { class: "flex flex-col py-3",
                    for item in NAV_ITEMS.iter() {
                        {
                            let class = if item.key == active_page {
                                "block px-5 py-2.5 text-sm text-white bg-emerald-600"
                            } else {
                                "block px-5 py-2.5 text-sm text-gray-400 hover:text-white hover:bg-gray-700 transition-colors"
                            };
                            let href = item.href;
                            let label = item.label;
                            rsx! { a { href: href, class: class, "{label}" } }
                        }
                    }
                }
                div { class: "px-5 py-4 mt-auto text-xs text-gray-500", "v1.0.0" }
            }
            div { class: "ml-56 flex-1 min-w-0",
                main { class: "px-6 py-6",
                    {children}
                }
            }
        }
    }
}
