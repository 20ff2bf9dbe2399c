//! Static homepage sections: hero, features, and marquee.

use dioxus::prelude::*;
use dioxus_free_icons::Icon;
use dioxus_free_icons::icons::ld_icons::{LdFileText, LdSearchCheck, LdWandSparkles};

use crate::route::Route;

/// Props for the [`HeroSection`] component.
#[derive(Props, Clone, PartialEq)]
pub struct HeroSectionProps {
    /// Called when a call-to-action button is clicked.
    pub on_navigate: EventHandler<Route>,
}

/// Landing hero with the headline and calls to action.
#[component]
pub fn HeroSection(props: HeroSectionProps) -> Element {
    let on_navigate = props.on_navigate;

    rsx! {
        section { class: "hero",
            h1 { class: "hero-title", "Land the job, not the rejection pile." }
            p { class: "hero-subtitle",
                "Analyze, score, and tailor your resume for any posting, "
                "right in your browser, nothing uploaded anywhere."
            }
            div { class: "hero-actions",
                button {
                    class: "btn-primary",
                    onclick: move |_| on_navigate.call(Route::Analyzer),
                    "Analyze my resume"
                }
                button {
                    class: "btn-secondary",
                    onclick: move |_| on_navigate.call(Route::Optimizer),
                    "Optimize for a job"
                }
            }
        }
    }
}

/// Glyph shown on a feature card.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum FeatureIcon {
    SearchCheck,
    WandSparkles,
    FileText,
}

impl FeatureIcon {
    fn render(self) -> Element {
        match self {
            Self::SearchCheck => rsx! { Icon { icon: LdSearchCheck, width: 32, height: 32 } },
            Self::WandSparkles => rsx! { Icon { icon: LdWandSparkles, width: 32, height: 32 } },
            Self::FileText => rsx! { Icon { icon: LdFileText, width: 32, height: 32 } },
        }
    }
}

/// One feature card: icon, title, blurb.
struct Feature {
    icon: FeatureIcon,
    title: &'static str,
    blurb: &'static str,
}

const FEATURES: [Feature; 3] = [
    Feature {
        icon: FeatureIcon::SearchCheck,
        title: "Instant analysis",
        blurb: "Upload a resume and get a score with concrete insights, with no account and no waiting.",
    },
    Feature {
        icon: FeatureIcon::WandSparkles,
        title: "Tailored optimization",
        blurb: "Describe the job you want and align your resume to the posting's language.",
    },
    Feature {
        icon: FeatureIcon::FileText,
        title: "Private by design",
        blurb: "Your document never leaves the browser. Previews are local, ephemeral, and gone on reload.",
    },
];

/// Three-card feature grid.
#[component]
pub fn FeaturesSection() -> Element {
    rsx! {
        section { class: "features",
            h2 { class: "features-title", "What you get" }
            div { class: "features-grid",
                for feature in &FEATURES {
                    div { class: "feature-card",
                        span { class: "feature-icon", {feature.icon.render()} }
                        h3 { class: "feature-title", "{feature.title}" }
                        p { class: "feature-blurb", "{feature.blurb}" }
                    }
                }
            }
        }
    }
}

/// Scrolling strip of role keywords.
const MARQUEE_ROLES: &[&str] = &[
    "Frontend Developer",
    "Data Analyst",
    "Product Manager",
    "UX Designer",
    "Backend Engineer",
    "DevOps Engineer",
    "QA Engineer",
    "Technical Writer",
];

/// Horizontal marquee of example roles.
#[component]
pub fn MarqueeSection() -> Element {
    rsx! {
        section { class: "marquee",
            div { class: "marquee-track",
                for role in MARQUEE_ROLES {
                    span { class: "marquee-item", "{role}" }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{FEATURES, FeatureIcon};

    #[test]
    fn each_feature_carries_its_own_icon() {
        let icons: Vec<_> = FEATURES.iter().map(|f| f.icon).collect();
        assert_eq!(
            icons,
            [
                FeatureIcon::SearchCheck,
                FeatureIcon::WandSparkles,
                FeatureIcon::FileText,
            ]
        );
    }

    #[test]
    fn analysis_card_pairs_with_search_icon() {
        let icon = FEATURES
            .iter()
            .find(|f| f.title == "Instant analysis")
            .map(|f| f.icon);
        assert_eq!(icon, Some(FeatureIcon::SearchCheck));
    }
}
