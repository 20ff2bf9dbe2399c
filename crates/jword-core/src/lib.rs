//! jword-core: Domain model and page state machines.
//!
//! Platform-neutral types shared by the jword web application:
//! selected-file records and preview classification, the fixed insight
//! list shown on the analyzer, the downloadable analysis report, and
//! the job-details edit-state machine used by the optimizer.
//!
//! Nothing in this crate touches the browser, so all of it is testable
//! on the host.

pub mod file;
pub mod insight;
pub mod job;
pub mod report;

pub use file::{PreviewKind, SelectedFile};
pub use insight::{Insight, InsightKind};
pub use job::{EditState, JobDetails, JobField};
pub use report::AnalysisReport;
