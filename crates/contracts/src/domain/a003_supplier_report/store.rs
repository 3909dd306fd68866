use super::aggregate::{ReportDocument, ReportError};
use super::seed::huntsman_report;
use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Report shown when the page is opened without a `name` parameter
pub const DEFAULT_REPORT_NAME: &str = "Huntsman";

/// Reports keyed by exact, case-sensitive supplier name
#[derive(Debug, Clone, Default)]
pub struct ReportStore {
    reports: HashMap<String, ReportDocument>,
}

/// Store populated once with every bundled report
pub static REPORT_STORE: Lazy<ReportStore> = Lazy::new(ReportStore::seeded);

impl ReportStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store with the bundled reports. Their anchors are checked in the unit tests.
    pub fn seeded() -> Self {
        Self {
            reports: HashMap::from([(DEFAULT_REPORT_NAME.to_string(), huntsman_report())]),
        }
    }

    pub fn insert(&mut self, name: impl Into<String>, doc: ReportDocument) -> Result<(), ReportError> {
        doc.validate()?;
        self.reports.insert(name.into(), doc);
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<&ReportDocument> {
        self.reports.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.reports.contains_key(name)
    }

    /// Report for `name`, or an empty placeholder document when there is none
    pub fn lookup(&self, name: &str) -> ReportDocument {
        self.get(name)
            .cloned()
            .unwrap_or_else(|| ReportDocument::not_found(name))
    }

    /// Names with a report, sorted
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.reports.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        self.reports.len()
    }

    pub fn is_empty(&self) -> bool {
        self.reports.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a003_supplier_report::aggregate::Section;

    #[test]
    fn test_lookup_huntsman() {
        let doc = REPORT_STORE.lookup("Huntsman");
        assert_eq!(doc.title, "Supplier Report: Huntsman");
        assert_eq!(doc.sections[0].id, "executive-summary");
        assert_eq!(doc.sections.len(), 11);
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        assert!(REPORT_STORE.contains("Huntsman"));
        let doc = REPORT_STORE.lookup("huntsman");
        assert_eq!(doc.title, "No report available for huntsman");
        assert!(doc.sections.is_empty());
    }

    #[test]
    fn test_lookup_missing() {
        let doc = REPORT_STORE.lookup("Nonexistent");
        assert_eq!(doc.title, "No report available for Nonexistent");
        assert_eq!(doc.sections.len(), 0);
    }

    #[test]
    fn test_lookup_returns_same_document_every_time() {
        assert_eq!(REPORT_STORE.lookup("Huntsman"), REPORT_STORE.lookup("Huntsman"));
    }

    #[test]
    fn test_bundled_reports_are_valid() {
        for name in REPORT_STORE.names() {
            assert!(REPORT_STORE.get(name).unwrap().validate().is_ok(), "{name}");
        }
    }

    #[test]
    fn test_seeded_names() {
        assert_eq!(REPORT_STORE.names(), vec!["Huntsman"]);
        assert_eq!(REPORT_STORE.len(), 1);
    }

    #[test]
    fn test_insert_rejects_duplicate_anchors() {
        let mut store = ReportStore::new();
        let doc = ReportDocument {
            title: "Supplier Report: Dup".into(),
            sections: vec![
                Section::new("logistics", "1. Logistics", vec![]),
                Section::new("logistics", "2. Logistics", vec![]),
            ],
        };
        assert!(store.insert("Dup", doc).is_err());
        assert!(store.is_empty());
        assert_eq!(store.lookup("Dup").title, "No report available for Dup");
    }
}
