//! Placeholder page for routes that exist in navigation but have no
//! feature behind them yet (cover letter generator, login).

use dioxus::prelude::*;

/// Props for the [`PlaceholderPage`] component.
#[derive(Props, Clone, PartialEq)]
pub struct PlaceholderPageProps {
    pub title: &'static str,
    pub blurb: &'static str,
}

/// A static "coming soon" card.
#[component]
pub fn PlaceholderPage(props: PlaceholderPageProps) -> Element {
    rsx! {
        main { class: "page page-narrow",
            div { class: "placeholder-card",
                h1 { "{props.title}" }
                p { "{props.blurb}" }
                p { class: "placeholder-soon", "Coming soon." }
            }
        }
    }
}
