use crate::domain::a001_material::Material;
use crate::domain::a002_supplier::Supplier;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

/// Discriminant of a catalog record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecordKind {
    Material,
    Supplier,
}

impl RecordKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            RecordKind::Material => "material",
            RecordKind::Supplier => "supplier",
        }
    }
}

impl std::fmt::Display for RecordKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for RecordKind {
    type Err = RecordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "material" => Ok(RecordKind::Material),
            "supplier" => Ok(RecordKind::Supplier),
            other => Err(RecordError::UnknownKind(other.to_string())),
        }
    }
}

#[derive(Debug, Error)]
pub enum RecordError {
    #[error("unknown record type '{0}'")]
    UnknownKind(String),

    #[error("record data does not match type '{kind}': {source}")]
    ShapeMismatch {
        kind: RecordKind,
        #[source]
        source: serde_json::Error,
    },
}

/// A catalog record: exactly one of material or supplier.
///
/// Serialized as the `{"type": ..., "data": ...}` pair the detail modal is
/// opened with, so the tag always agrees with the payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data", rename_all = "lowercase")]
pub enum DomainRecord {
    Material(Material),
    Supplier(Supplier),
}

impl DomainRecord {
    /// Build a record from a separately supplied tag and payload.
    /// A payload that does not have the shape named by the tag is rejected.
    pub fn from_tagged_json(kind: RecordKind, data: serde_json::Value) -> Result<Self, RecordError> {
        let parsed = match kind {
            RecordKind::Material => serde_json::from_value(data).map(DomainRecord::Material),
            RecordKind::Supplier => serde_json::from_value(data).map(DomainRecord::Supplier),
        };
        parsed.map_err(|source| RecordError::ShapeMismatch { kind, source })
    }

    pub fn kind(&self) -> RecordKind {
        match self {
            DomainRecord::Material(_) => RecordKind::Material,
            DomainRecord::Supplier(_) => RecordKind::Supplier,
        }
    }

    pub fn id(&self) -> u32 {
        match self {
            DomainRecord::Material(m) => m.id,
            DomainRecord::Supplier(s) => s.id,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            DomainRecord::Material(m) => &m.name,
            DomainRecord::Supplier(s) => &s.name,
        }
    }
}

impl From<Material> for DomainRecord {
    fn from(material: Material) -> Self {
        DomainRecord::Material(material)
    }
}

impl From<Supplier> for DomainRecord {
    fn from(supplier: Supplier) -> Self {
        DomainRecord::Supplier(supplier)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_material::seed_materials;
    use crate::domain::a002_supplier::seed_suppliers;

    #[test]
    fn test_kind_parsing() {
        assert_eq!("material".parse::<RecordKind>().unwrap(), RecordKind::Material);
        assert_eq!("supplier".parse::<RecordKind>().unwrap(), RecordKind::Supplier);
        assert!(matches!(
            "Supplier".parse::<RecordKind>(),
            Err(RecordError::UnknownKind(tag)) if tag == "Supplier"
        ));
        assert_eq!(RecordKind::Material.to_string(), "material");
    }

    #[test]
    fn test_tagged_json_matching_shape() {
        let supplier = seed_suppliers().remove(0);
        let data = serde_json::to_value(&supplier).unwrap();
        let record = DomainRecord::from_tagged_json(RecordKind::Supplier, data).unwrap();
        assert_eq!(record.kind(), RecordKind::Supplier);
        assert_eq!(record.name(), "Huntsman");
        assert_eq!(record, DomainRecord::Supplier(supplier));
    }

    #[test]
    fn test_tagged_json_mismatched_shape_is_rejected() {
        let supplier = seed_suppliers().remove(0);
        let data = serde_json::to_value(&supplier).unwrap();
        let err = DomainRecord::from_tagged_json(RecordKind::Material, data).unwrap_err();
        assert!(matches!(err, RecordError::ShapeMismatch { kind: RecordKind::Material, .. }));

        let material = seed_materials().remove(0);
        let data = serde_json::to_value(&material).unwrap();
        assert!(DomainRecord::from_tagged_json(RecordKind::Supplier, data).is_err());
    }

    #[test]
    fn test_adjacent_tag_serialization() {
        let record = DomainRecord::from(seed_materials().remove(0));
        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(value["type"], "material");
        assert_eq!(value["data"]["name"], "Triethylamine");

        let back: DomainRecord = serde_json::from_value(value).unwrap();
        assert_eq!(back.id(), 1);
    }
}
