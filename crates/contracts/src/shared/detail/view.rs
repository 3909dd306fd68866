use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GroupTone {
    Neutral,
    /// Warning styling (risk alerts)
    Alert,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GroupLayout {
    /// Two-column field grid
    Grid,
    /// Fields one under another
    Stack,
    /// Subgroups side by side
    Columns,
}

impl GroupLayout {
    pub fn css_class(&self) -> &'static str {
        match self {
            GroupLayout::Grid => "detail-group__body detail-group__body--grid",
            GroupLayout::Stack => "detail-group__body detail-group__body--stack",
            GroupLayout::Columns => "detail-group__body detail-group__body--columns",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DetailField {
    pub label: String,
    pub value: String,
}

impl DetailField {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DetailBlock {
    Field(DetailField),
    Subgroup {
        heading: String,
        fields: Vec<DetailField>,
    },
    /// Bulleted list, items keyed by position
    List {
        label: Option<String>,
        items: Vec<String>,
    },
}

impl DetailBlock {
    pub fn field(label: impl Into<String>, value: impl Into<String>) -> Self {
        DetailBlock::Field(DetailField::new(label, value))
    }

    pub fn list(label: Option<&str>, items: &[String]) -> Self {
        DetailBlock::List {
            label: label.map(str::to_string),
            items: items.to_vec(),
        }
    }

    /// Every value shown by the block, in display order
    pub fn values(&self) -> Vec<&str> {
        match self {
            DetailBlock::Field(field) => vec![field.value.as_str()],
            DetailBlock::Subgroup { fields, .. } => fields.iter().map(|f| f.value.as_str()).collect(),
            DetailBlock::List { items, .. } => items.iter().map(String::as_str).collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DetailGroup {
    pub heading: String,
    pub tone: GroupTone,
    pub layout: GroupLayout,
    pub blocks: Vec<DetailBlock>,
}

impl DetailGroup {
    pub fn new(heading: impl Into<String>, layout: GroupLayout, blocks: Vec<DetailBlock>) -> Self {
        Self {
            heading: heading.into(),
            tone: GroupTone::Neutral,
            layout,
            blocks,
        }
    }

    pub fn alert(heading: impl Into<String>, blocks: Vec<DetailBlock>) -> Self {
        Self {
            heading: heading.into(),
            tone: GroupTone::Alert,
            layout: GroupLayout::Stack,
            blocks,
        }
    }

    pub fn values(&self) -> Vec<&str> {
        self.blocks.iter().flat_map(DetailBlock::values).collect()
    }
}

/// Presentation of one record, independent of how it is drawn
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DetailView {
    pub title: String,
    /// Target of the "View Full Report" action
    pub report_path: String,
    pub groups: Vec<DetailGroup>,
}

impl DetailView {
    pub fn headings(&self) -> Vec<&str> {
        self.groups.iter().map(|g| g.heading.as_str()).collect()
    }

    pub fn group(&self, heading: &str) -> Option<&DetailGroup> {
        self.groups.iter().find(|g| g.heading == heading)
    }

    /// Value of the first field labelled `label`, searching subgroups too
    pub fn field(&self, label: &str) -> Option<&str> {
        self.groups
            .iter()
            .flat_map(|g| g.blocks.iter())
            .find_map(|block| match block {
                DetailBlock::Field(f) if f.label == label => Some(f.value.as_str()),
                DetailBlock::Subgroup { fields, .. } => fields
                    .iter()
                    .find(|f| f.label == label)
                    .map(|f| f.value.as_str()),
                _ => None,
            })
    }

    pub fn values(&self) -> Vec<&str> {
        self.groups.iter().flat_map(DetailGroup::values).collect()
    }
}
