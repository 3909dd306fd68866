use serde::{Deserialize, Serialize};

// ============================================================================
// Nested groups
// ============================================================================

/// Physical and chemical characteristics of a material
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChemicalProfile {
    pub molecular_weight: String,
    pub purity: String,
    pub form: String,
    pub stability: String,
}

/// Manufacturing attributes.
///
/// The same shape is shared by materials and suppliers: a material fills
/// `process`, `quality` and `batch_size`, a supplier usually fills
/// `capabilities` and `capacities`. Every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Manufacturing {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub process: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quality: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub batch_size: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub capabilities: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub capacities: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SupplyRisk {
    pub level: String,
    #[serde(default)]
    pub factors: Vec<String>,
    pub mitigation: String,
}

// ============================================================================
// Aggregate Root
// ============================================================================

/// Raw material or intermediate tracked in the catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Material {
    pub id: u32,
    pub name: String,
    pub cas: String,
    pub grade: String,
    pub price: String,
    pub lead_time: String,
    pub chemical_profile: ChemicalProfile,
    #[serde(default)]
    pub manufacturing: Manufacturing,
    pub supply_risk: SupplyRisk,
    /// Display list only, entries are not resolved against the catalog
    #[serde(default)]
    pub substitutes: Vec<String>,
    /// Display list only, entries are not resolved against the catalog
    #[serde(default)]
    pub suppliers: Vec<String>,
}
