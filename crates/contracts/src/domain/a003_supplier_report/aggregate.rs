use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use thiserror::Error;

// ============================================================================
// Content blocks
// ============================================================================

/// Inline run inside a paragraph
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Inline {
    Text(String),
    Strong(String),
    LineBreak,
}

impl Inline {
    pub fn text(s: impl Into<String>) -> Self {
        Inline::Text(s.into())
    }

    pub fn strong(s: impl Into<String>) -> Self {
        Inline::Strong(s.into())
    }
}

/// `label: text` line, rendered with the label emphasised
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabeledPair {
    pub label: String,
    pub text: String,
}

/// Presentation-ready content of a subsection.
///
/// The set is closed: renderers match on every variant and never receive
/// pre-rendered markup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum ContentBlock {
    Paragraph(Vec<Inline>),
    BulletList(Vec<String>),
    LabeledPairs(Vec<LabeledPair>),
}

impl ContentBlock {
    /// Single plain-text paragraph
    pub fn plain(text: impl Into<String>) -> Self {
        ContentBlock::Paragraph(vec![Inline::Text(text.into())])
    }

    pub fn bullets(items: &[&str]) -> Self {
        ContentBlock::BulletList(items.iter().map(|s| s.to_string()).collect())
    }

    pub fn pairs(pairs: &[(&str, &str)]) -> Self {
        ContentBlock::LabeledPairs(
            pairs
                .iter()
                .map(|(label, text)| LabeledPair {
                    label: label.to_string(),
                    text: text.to_string(),
                })
                .collect(),
        )
    }

    /// Text of the block without markup, one line per item
    pub fn plain_text(&self) -> String {
        match self {
            ContentBlock::Paragraph(inlines) => inlines
                .iter()
                .map(|inline| match inline {
                    Inline::Text(s) | Inline::Strong(s) => s.as_str(),
                    Inline::LineBreak => "\n",
                })
                .collect(),
            ContentBlock::BulletList(items) => items.join("\n"),
            ContentBlock::LabeledPairs(pairs) => pairs
                .iter()
                .map(|p| format!("{}: {}", p.label, p.text))
                .collect::<Vec<_>>()
                .join("\n"),
        }
    }
}

// ============================================================================
// Document tree
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subsection {
    pub subtitle: String,
    pub content: Vec<ContentBlock>,
}

impl Subsection {
    pub fn new(subtitle: impl Into<String>, content: Vec<ContentBlock>) -> Self {
        Self {
            subtitle: subtitle.into(),
            content,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    /// Anchor target, unique within a document
    pub id: String,
    pub title: String,
    pub subsections: Vec<Subsection>,
}

impl Section {
    pub fn new(id: impl Into<String>, title: impl Into<String>, subsections: Vec<Subsection>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            subsections,
        }
    }

    /// Fragment link to this section, e.g. `#executive-summary`
    pub fn anchor_href(&self) -> String {
        format!("#{}", self.id)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportDocument {
    pub title: String,
    pub sections: Vec<Section>,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReportError {
    #[error("section id '{id}' appears more than once in '{title}'")]
    DuplicateSectionId { title: String, id: String },
}

impl ReportDocument {
    /// Placeholder returned when no report exists for `name`
    pub fn not_found(name: &str) -> Self {
        Self {
            title: format!("No report available for {}", name),
            sections: Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    pub fn section(&self, id: &str) -> Option<&Section> {
        self.sections.iter().find(|s| s.id == id)
    }

    /// Section ids must be unique since they are used as anchors
    pub fn validate(&self) -> Result<(), ReportError> {
        let mut seen = HashSet::new();
        for section in &self.sections {
            if !seen.insert(section.id.as_str()) {
                return Err(ReportError::DuplicateSectionId {
                    title: self.title.clone(),
                    id: section.id.clone(),
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_document() {
        let doc = ReportDocument::not_found("Nonexistent");
        assert_eq!(doc.title, "No report available for Nonexistent");
        assert!(doc.is_empty());
        assert!(doc.validate().is_ok());
    }

    #[test]
    fn test_duplicate_section_ids_rejected() {
        let doc = ReportDocument {
            title: "Supplier Report: Test".into(),
            sections: vec![
                Section::new("overview", "1. Overview", vec![]),
                Section::new("overview", "2. Overview again", vec![]),
            ],
        };
        assert_eq!(
            doc.validate(),
            Err(ReportError::DuplicateSectionId {
                title: "Supplier Report: Test".into(),
                id: "overview".into(),
            })
        );
    }

    #[test]
    fn test_plain_text_of_blocks() {
        let paragraph = ContentBlock::Paragraph(vec![
            Inline::strong("ISO Certifications:"),
            Inline::text(" ISO 9001"),
            Inline::LineBreak,
            Inline::text("TSCA"),
        ]);
        assert_eq!(paragraph.plain_text(), "ISO Certifications: ISO 9001\nTSCA");

        let pairs = ContentBlock::pairs(&[("Domestic", "2-4 weeks"), ("International", "4-8 weeks")]);
        assert_eq!(pairs.plain_text(), "Domestic: 2-4 weeks\nInternational: 4-8 weeks");

        assert_eq!(ContentBlock::bullets(&["a", "b"]).plain_text(), "a\nb");
    }

    #[test]
    fn test_content_block_json_shape() {
        let block = ContentBlock::plain("Scope");
        let value = serde_json::to_value(&block).unwrap();
        assert_eq!(value["kind"], "paragraph");
        assert_eq!(value["value"][0]["kind"], "text");
        assert_eq!(value["value"][0]["value"], "Scope");
    }
}
