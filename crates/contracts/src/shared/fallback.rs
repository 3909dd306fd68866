//! Table-driven field resolution.
//!
//! A field is described by a label and an ordered list of candidate sources.
//! The first source that yields a present value wins, otherwise the field
//! shows [`NOT_AVAILABLE`]. Tables are `'static` so the whole policy is a
//! compile-time constant that tests can inspect.

/// Placeholder shown when no source yields a value
pub const NOT_AVAILABLE: &str = "N/A";

/// Candidate source for a field of record `R`
pub type FieldSource<R> = fn(&R) -> Option<String>;

/// One rendered field and where its value may come from
#[derive(Clone, Copy)]
pub struct FieldRule<R: 'static> {
    pub label: &'static str,
    pub sources: &'static [FieldSource<R>],
}

impl<R> FieldRule<R> {
    pub fn resolve(&self, record: &R) -> String {
        self.sources
            .iter()
            .find_map(|source| source(record))
            .unwrap_or_else(|| NOT_AVAILABLE.to_string())
    }
}

/// Numbered subgroup (e.g. "2.1 ...") of fields
#[derive(Clone, Copy)]
pub struct FieldGroupRule<R: 'static> {
    pub heading: &'static str,
    pub fields: &'static [FieldRule<R>],
}

/// Top-level section made of subgroups
#[derive(Clone, Copy)]
pub struct SectionRule<R: 'static> {
    pub heading: &'static str,
    pub groups: &'static [FieldGroupRule<R>],
}

/// Non-empty text, `None` otherwise
pub fn present(value: &str) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

/// Like [`present`] for optional values
pub fn present_opt(value: Option<&String>) -> Option<String> {
    value.and_then(|v| present(v))
}

/// Comma-joined list, `None` when the list is empty
pub fn joined(items: &[String]) -> Option<String> {
    present(&items.join(", "))
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Sample {
        primary: Option<String>,
        secondary: String,
        tags: Vec<String>,
    }

    fn primary(s: &Sample) -> Option<String> {
        present_opt(s.primary.as_ref())
    }

    fn secondary(s: &Sample) -> Option<String> {
        present(&s.secondary)
    }

    fn tags(s: &Sample) -> Option<String> {
        joined(&s.tags)
    }

    const RULE: FieldRule<Sample> = FieldRule {
        label: "Value",
        sources: &[primary, secondary],
    };

    #[test]
    fn test_first_present_source_wins() {
        let sample = Sample {
            primary: Some("first".into()),
            secondary: "second".into(),
            tags: vec![],
        };
        assert_eq!(RULE.resolve(&sample), "first");
    }

    #[test]
    fn test_empty_value_falls_through() {
        let sample = Sample {
            primary: Some(String::new()),
            secondary: "second".into(),
            tags: vec![],
        };
        assert_eq!(RULE.resolve(&sample), "second");
    }

    #[test]
    fn test_no_source_yields_placeholder() {
        let sample = Sample {
            primary: None,
            secondary: String::new(),
            tags: vec![],
        };
        assert_eq!(RULE.resolve(&sample), NOT_AVAILABLE);

        let no_sources: FieldRule<Sample> = FieldRule {
            label: "Empty",
            sources: &[],
        };
        assert_eq!(no_sources.resolve(&sample), "N/A");
    }

    #[test]
    fn test_joined() {
        let sample = Sample {
            primary: None,
            secondary: String::new(),
            tags: vec!["ISO 9001".into(), "REACH".into()],
        };
        assert_eq!(tags(&sample).as_deref(), Some("ISO 9001, REACH"));
        assert_eq!(joined(&[]), None);
    }
}
