//! Sticky top navigation bar.

use dioxus::prelude::*;
use dioxus_free_icons::Icon;
use dioxus_free_icons::icons::ld_icons::{LdMenu, LdX};

use crate::route::Route;

/// Props for the [`Navbar`] component.
#[derive(Props, Clone, PartialEq)]
pub struct NavbarProps {
    /// The page currently shown, for highlighting its link.
    pub current: Route,
    /// Called with the destination when a link is clicked.
    pub on_navigate: EventHandler<Route>,
}

/// Persistent top bar: wordmark, centered page links, Login button,
/// and a hamburger dropdown on small viewports. The dropdown closes
/// after navigating.
#[component]
pub fn Navbar(props: NavbarProps) -> Element {
    let mut menu_open = use_signal(|| false);
    let on_navigate = props.on_navigate;
    let current = props.current;

    let mut navigate = move |route: Route| {
        menu_open.set(false);
        on_navigate.call(route);
    };

    rsx! {
        nav {
            class: "navbar",
            role: "navigation",
            aria_label: "Main Navigation",

            div { class: "navbar-inner",
                // Wordmark.
                a {
                    class: "navbar-brand",
                    href: "{Route::Home.path()}",
                    onclick: move |evt| {
                        evt.prevent_default();
                        navigate(Route::Home);
                    },
                    "J"
                }

                // Centered desktop links.
                div { class: "navbar-links",
                    for route in Route::NAV_LINKS {
                        {render_link(route, current, navigate)}
                    }
                }

                div { class: "navbar-right",
                    a {
                        class: "btn-primary navbar-login",
                        href: "{Route::Login.path()}",
                        onclick: move |evt| {
                            evt.prevent_default();
                            navigate(Route::Login);
                        },
                        "Log In"
                    }

                    button {
                        class: "icon-button navbar-menu-toggle",
                        aria_expanded: "{menu_open()}",
                        aria_controls: "mobile-menu",
                        aria_label: menu_toggle_label(menu_open()),
                        onclick: move |_| {
                            menu_open.toggle();
                        },
                        if menu_open() {
                            Icon { icon: LdX, width: 24, height: 24 }
                        } else {
                            Icon { icon: LdMenu, width: 24, height: 24 }
                        }
                    }
                }
            }

            // Mobile dropdown.
            if menu_open() {
                div { id: "mobile-menu", class: "navbar-mobile",
                    for route in Route::ALL {
                        a {
                            class: "navbar-mobile-link",
                            href: "{route.path()}",
                            onclick: move |evt| {
                                evt.prevent_default();
                                navigate(route);
                            },
                            "{route.label()}"
                        }
                    }
                }
            }
        }
    }
}

/// Accessible label for the hamburger toggle, tracking the open state
/// like the icon swap does.
const fn menu_toggle_label(open: bool) -> &'static str {
    if open { "Close main menu" } else { "Open main menu" }
}

/// Render one desktop navigation link.
fn render_link(route: Route, current: Route, navigate: impl FnMut(Route) + Copy + 'static) -> Element {
    let class = if route == current {
        "navbar-link navbar-link-active"
    } else {
        "navbar-link"
    };
    let mut navigate = navigate;

    rsx! {
        a {
            class: "{class}",
            href: "{route.path()}",
            onclick: move |evt| {
                evt.prevent_default();
                navigate(route);
            },
            "{route.label()}"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::menu_toggle_label;

    #[test]
    fn toggle_label_follows_open_state() {
        assert_eq!(menu_toggle_label(false), "Open main menu");
        assert_eq!(menu_toggle_label(true), "Close main menu");
    }
}
