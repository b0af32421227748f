use dioxus::prelude::*;

use crate::app::Route;

#[derive(Clone, Copy, Debug)]
pub struct NavLink {
    pub label: &'static str,
    pub route: fn() -> Route,
}

pub const NAV_LINKS: [NavLink; 3] = [
    NavLink {
        label: "Start",
        route: || Route::Home {},
    },
    NavLink {
        label: "Preisrechner",
        route: || Route::Prices {},
    },
    NavLink {
        label: "Liefergebiete",
        route: || Route::Areas {},
    },
];

/// Toggle label for screen readers; names the action, not the state.
pub fn toggle_label(open: bool) -> &'static str {
    if open {
        "Menü schließen"
    } else {
        "Menü öffnen"
    }
}

#[component]
pub fn MenuToggle(open: Signal<bool>) -> Element {
    let mut open = open;
    let expanded = open();
    rsx! {
        button {
            r#type: "button",
            id: "menu-toggle",
            class: "lg:hidden rounded-lg p-2 text-white hover:bg-white/10",
            aria_controls: "mobile-navigation",
            aria_expanded: "{expanded}",
            aria_label: toggle_label(expanded),
            onclick: move |_| open.set(!expanded),
            "☰"
        }
    }
}

/// Closes the drawer on Escape; attached to the page root so it works wherever focus is.
pub fn close_on_escape(mut open: Signal<bool>, evt: &KeyboardEvent) {
    if evt.key() == Key::Escape && open() {
        open.set(false);
    }
}

/// Full-screen mobile menu. A link click closes it.
#[component]
pub fn NavDrawer(open: Signal<bool>) -> Element {
    let mut open = open;
    let is_open = open();
    let nav = use_navigator();
    let state_class = if is_open { "open" } else { "closed" };

    rsx! {
        nav {
            id: "mobile-navigation",
            class: "drawer {state_class}",
            aria_hidden: "{!is_open}",
            div { class: "flex justify-end",
                button {
                    r#type: "button",
                    id: "menu-close",
                    class: "rounded-lg p-2 text-2xl text-white hover:bg-white/10",
                    aria_label: toggle_label(true),
                    onclick: move |_| open.set(false),
                    "✕"
                }
            }
            ul { class: "flex flex-col gap-4 text-2xl font-bold",
                for link in NAV_LINKS {
                    li {
                        a {
                            class: "text-white hover:text-pink",
                            href: "#",
                            onclick: move |evt: MouseEvent| {
                                evt.prevent_default();
                                open.set(false);
                                nav.push((link.route)());
                            },
                            "{link.label}"
                        }
                    }
                }
            }
        }
    }
}
