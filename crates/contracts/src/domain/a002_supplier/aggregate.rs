use crate::domain::a001_material::Manufacturing;
use serde::{Deserialize, Serialize};

// ============================================================================
// Required groups
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contract {
    pub length: String,
    pub expiry: String,
    pub terms: String,
    pub exclusivity: String,
    pub quality_metrics: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Geopolitical {
    pub region: String,
    #[serde(default)]
    pub trade_agreements: Vec<String>,
    pub political_stability: String,
    pub logistics_risk: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub additional_risk: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Financial {
    pub rating: String,
    pub market_cap: String,
    pub revenue: String,
}

/// ESG scores on a 0-100 scale
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Esg {
    pub environmental_score: f64,
    pub social_score: f64,
    pub governance_score: f64,
    #[serde(default)]
    pub certifications: Vec<String>,
}

// ============================================================================
// Optional groups
//
// Inner fields default to empty: an empty string or list is treated the same
// as a missing one when the detail view resolves fallbacks.
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    #[serde(default)]
    pub background: String,
    #[serde(default)]
    pub general_info: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GeographicPresence {
    #[serde(default)]
    pub locations: Vec<String>,
    #[serde(default)]
    pub infrastructure: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Quality {
    #[serde(default)]
    pub compliance: Vec<String>,
    #[serde(default)]
    pub quality_systems: String,
    #[serde(default)]
    pub audit_history: String,
    #[serde(default)]
    pub certifications: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pricing {
    #[serde(default)]
    pub structures: String,
    #[serde(default)]
    pub payment_terms: String,
    #[serde(default)]
    pub financial_stability: String,
    #[serde(default)]
    pub negotiation_levers: String,
    #[serde(default)]
    pub cost_transparency: String,
}

// ============================================================================
// Aggregate Root
// ============================================================================

/// Supplier (contract manufacturer or chemical producer)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Supplier {
    pub id: u32,
    pub name: String,
    pub region: String,
    pub contract: Contract,
    pub capacity: String,
    #[serde(default)]
    pub compliance: Vec<String>,
    pub risk_rating: String,
    pub geopolitical: Geopolitical,
    pub financial: Financial,
    pub esg: Esg,
    #[serde(default)]
    pub alternate_products: Vec<String>,
    #[serde(default)]
    pub risk_alerts: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile: Option<Profile>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub manufacturing: Option<Manufacturing>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub geographic_presence: Option<GeographicPresence>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quality: Option<Quality>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pricing: Option<Pricing>,
}

impl Supplier {
    pub fn has_risk_alerts(&self) -> bool {
        !self.risk_alerts.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn minimal_json() -> serde_json::Value {
        json!({
            "id": 3,
            "name": "Acme & Co",
            "region": "EU",
            "contract": {
                "length": "2 years",
                "expiry": "2026-06-30",
                "terms": "Net 45",
                "exclusivity": "None",
                "qualityMetrics": "98% OTIF"
            },
            "capacity": "5,000 MT/yr",
            "riskRating": "Low",
            "geopolitical": {
                "region": "Stable",
                "tradeAgreements": ["EU Single Market"],
                "politicalStability": "High",
                "logisticsRisk": "Low"
            },
            "financial": { "rating": "A-", "marketCap": "$2B", "revenue": "$900M" },
            "esg": {
                "environmentalScore": 72,
                "socialScore": 80,
                "governanceScore": 77.5,
                "certifications": ["EcoVadis Silver"]
            }
        })
    }

    #[test]
    fn test_optional_groups_absent() {
        let supplier: Supplier = serde_json::from_value(minimal_json()).unwrap();
        assert!(supplier.profile.is_none());
        assert!(supplier.manufacturing.is_none());
        assert!(supplier.geographic_presence.is_none());
        assert!(supplier.quality.is_none());
        assert!(supplier.pricing.is_none());
        assert!(!supplier.has_risk_alerts());
        assert!(supplier.alternate_products.is_empty());
        assert_eq!(supplier.esg.governance_score, 77.5);
    }

    #[test]
    fn test_partial_optional_group() {
        let mut value = minimal_json();
        value["quality"] = json!({ "auditHistory": "Clean FDA audit 2023" });
        let supplier: Supplier = serde_json::from_value(value).unwrap();
        let quality = supplier.quality.unwrap();
        assert_eq!(quality.audit_history, "Clean FDA audit 2023");
        assert!(quality.compliance.is_empty());
        assert!(quality.quality_systems.is_empty());
    }

    #[test]
    fn test_absent_groups_are_not_serialized() {
        let supplier: Supplier = serde_json::from_value(minimal_json()).unwrap();
        let value = serde_json::to_value(&supplier).unwrap();
        assert!(value.get("profile").is_none());
        assert!(value.get("pricing").is_none());
        assert_eq!(value["contract"]["qualityMetrics"], "98% OTIF");
    }
}
