//! One module per page. Each page owns its own transient state tree;
//! nothing is shared across pages or persisted.

mod analyzer;
mod home;
mod optimizer;
mod placeholder;

pub use analyzer::AnalyzerPage;
pub use home::HomePage;
pub use optimizer::OptimizerPage;
pub use placeholder::PlaceholderPage;
