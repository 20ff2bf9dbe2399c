use dioxus::prelude::*;
use jword_ui::{Navbar, Route};

mod pages;

fn main() {
    dioxus::launch(app);
}

/// Root application component.
///
/// Owns the navigation signal and wires the navbar to the page area.
/// Pages are matched by route value, so switching routes unmounts the
/// old page component and its transient state (selected file, preview
/// resource, edit state) resets.
fn app() -> Element {
    let mut route = use_signal(Route::default);

    let on_navigate = move |next: Route| {
        route.set(next);
    };

    let page = match route() {
        Route::Home => rsx! {
            pages::HomePage { on_navigate: on_navigate }
        },
        Route::Analyzer => rsx! {
            pages::AnalyzerPage {}
        },
        Route::Optimizer => rsx! {
            pages::OptimizerPage {}
        },
        Route::CoverGen => rsx! {
            pages::PlaceholderPage {
                title: "Cover Letter Generator",
                blurb: "Generate a tailored cover letter from your resume and a job posting.",
            }
        },
        Route::Login => rsx! {
            pages::PlaceholderPage {
                title: "Log In",
                blurb: "Accounts are not available yet. Everything works without one.",
            }
        },
    };

    rsx! {
        style { dangerous_inner_html: include_str!("../assets/app.css") }

        div { class: "app-shell",
            Navbar { current: route(), on_navigate: on_navigate }
            {page}
        }
    }
}
