pub mod aggregate;
pub mod seed;
pub mod store;

pub use aggregate::{ContentBlock, Inline, LabeledPair, ReportDocument, ReportError, Section, Subsection};
pub use store::{ReportStore, DEFAULT_REPORT_NAME, REPORT_STORE};
