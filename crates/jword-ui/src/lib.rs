//! jword-ui: Browser I/O and Dioxus component library.
//!
//! Handles object-URL lifetimes for file previews, report downloads,
//! clipboard copies, blocking dialogs, and analytics events, and
//! provides the reusable UI components for the jword web application.

pub mod analytics;
pub mod clipboard;
pub mod components;
pub mod dialog;
pub mod download;
pub mod object_url;
pub mod route;

pub use components::{
    AnalysisHeader, AnalysisResults, FileDropZone, FilePreview, FeaturesSection, HeroSection,
    JobDetailsForm, MarqueeSection, Navbar,
};
pub use object_url::ObjectUrl;
pub use route::Route;
