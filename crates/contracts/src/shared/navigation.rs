//! Paths shared by the detail modal, the report page and the static host.

use crate::domain::a003_supplier_report::DEFAULT_REPORT_NAME;
use serde::Deserialize;

pub const SUPPLIERS_ROUTE: &str = "/suppliers";
pub const MATERIALS_ROUTE: &str = "/materials";
pub const REPORT_ROUTE: &str = "/suppliers/report";

/// Query parameter carrying the supplier name on [`REPORT_ROUTE`]
pub const REPORT_NAME_PARAM: &str = "name";

/// Page navigation provided by the host environment.
///
/// Both calls are fire-and-forget: nothing is returned to the caller.
pub trait NavigationHost {
    fn navigate_to(&self, path: &str);
    fn go_back(&self);
}

/// `/suppliers/report?name=<encoded name>`
pub fn report_path(name: &str) -> String {
    format!(
        "{}?{}={}",
        REPORT_ROUTE,
        REPORT_NAME_PARAM,
        urlencoding::encode(name)
    )
}

/// Query string of [`REPORT_ROUTE`]
#[derive(Debug, Default, Deserialize)]
pub struct ReportQuery {
    pub name: Option<String>,
}

impl ReportQuery {
    /// Parse a location search string, with or without the leading `?`.
    ///
    /// An unparsable query is treated as empty.
    pub fn from_search(search: &str) -> Self {
        serde_qs::from_str(search.trim_start_matches('?')).unwrap_or_default()
    }

    /// Requested supplier name, [`DEFAULT_REPORT_NAME`] when missing or empty
    pub fn report_name(self) -> String {
        self.name
            .filter(|name| !name.is_empty())
            .unwrap_or_else(|| DEFAULT_REPORT_NAME.to_string())
    }
}

/// Supplier name requested by a location search string such as `?name=Huntsman`.
///
/// `+` decodes to a space, percent escapes are decoded, and a missing or
/// empty parameter selects [`DEFAULT_REPORT_NAME`].
pub fn report_name_from_query(search: &str) -> String {
    ReportQuery::from_search(search).report_name()
}

/// Open the full report for `name` through the host
pub fn open_report(host: &dyn NavigationHost, name: &str) {
    host.navigate_to(&report_path(name));
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[derive(Default)]
    struct RecordingHost {
        visited: RefCell<Vec<String>>,
        back_calls: RefCell<usize>,
    }

    impl NavigationHost for RecordingHost {
        fn navigate_to(&self, path: &str) {
            self.visited.borrow_mut().push(path.to_string());
        }

        fn go_back(&self) {
            *self.back_calls.borrow_mut() += 1;
        }
    }

    #[test]
    fn test_report_path_encodes_name() {
        assert_eq!(report_path("Huntsman"), "/suppliers/report?name=Huntsman");
        assert_eq!(report_path("Acme & Co"), "/suppliers/report?name=Acme%20%26%20Co");
    }

    #[test]
    fn test_round_trip_special_characters() {
        for name in ["Acme & Co", "Dr. Reddy's", "A+B=C", "Müller 100%", "São Paulo/Rio #2"] {
            let path = report_path(name);
            let (_, search) = path.split_once('?').unwrap();
            assert_eq!(report_name_from_query(search), name);
        }
    }

    #[test]
    fn test_default_name() {
        assert_eq!(report_name_from_query(""), "Huntsman");
        assert_eq!(report_name_from_query("?"), "Huntsman");
        assert_eq!(report_name_from_query("?name="), "Huntsman");
        assert_eq!(report_name_from_query("?other=1"), "Huntsman");
    }

    #[test]
    fn test_report_query_parsing() {
        assert_eq!(ReportQuery::from_search("?a=1&name=BASF").name.as_deref(), Some("BASF"));
        assert_eq!(ReportQuery::from_search("name=Acme+%26+Co").name.as_deref(), Some("Acme & Co"));
        assert_eq!(ReportQuery::from_search("?other=1").name, None);
        assert_eq!(ReportQuery::from_search("").name, None);
    }

    #[test]
    fn test_parameter_name_is_case_sensitive() {
        assert_eq!(report_name_from_query("?NAME=BASF"), "Huntsman");
        assert_eq!(report_name_from_query("?name=BASF"), "BASF");
    }

    #[test]
    fn test_open_report_hands_path_to_host() {
        let host = RecordingHost::default();
        open_report(&host, "Acme & Co");
        assert_eq!(*host.visited.borrow(), vec!["/suppliers/report?name=Acme%20%26%20Co"]);
        assert_eq!(*host.back_calls.borrow(), 0);
        host.go_back();
        assert_eq!(*host.back_calls.borrow(), 1);
    }
}
