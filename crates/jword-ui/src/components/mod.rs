//! Dioxus UI components for jword.
//!
//! Provides the drag-and-drop file zone, the preview panel with its
//! object-URL lifecycle, the analysis results list, the job details
//! form, the navbar, and the static homepage sections.

mod file_preview;
mod home;
mod insights;
mod job_details;
mod navbar;
mod upload;

pub use file_preview::FilePreview;
pub use home::{FeaturesSection, HeroSection, MarqueeSection};
pub use insights::{AnalysisHeader, AnalysisResults};
pub use job_details::JobDetailsForm;
pub use navbar::Navbar;
pub use upload::FileDropZone;
