//! Marketing landing page.

use dioxus::prelude::*;

use jword_ui::{FeaturesSection, HeroSection, MarqueeSection, Route};

/// Props for the [`HomePage`] component.
#[derive(Props, Clone, PartialEq)]
pub struct HomePageProps {
    /// Forwarded to the hero call-to-action buttons.
    pub on_navigate: EventHandler<Route>,
}

/// Hero, feature grid, and role marquee.
#[component]
pub fn HomePage(props: HomePageProps) -> Element {
    rsx! {
        main {
            HeroSection { on_navigate: props.on_navigate }
            FeaturesSection {}
            MarqueeSection {}
        }
    }
}
