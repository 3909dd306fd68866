//! Common types shared by every catalog record

pub mod record;

pub use record::{DomainRecord, RecordError, RecordKind};
