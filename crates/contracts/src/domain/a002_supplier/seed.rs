use super::aggregate::*;
use crate::domain::a001_material::Manufacturing;

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// Suppliers shown in the catalog. Built once at startup, never mutated.
///
/// The records deliberately cover every shape the detail view handles:
/// fully populated optional groups, none at all, and a mix.
pub fn seed_suppliers() -> Vec<Supplier> {
    vec![huntsman(), basf(), acme()]
}

fn huntsman() -> Supplier {
    Supplier {
        id: 1,
        name: "Huntsman".into(),
        region: "North America".into(),
        contract: Contract {
            length: "3 years".into(),
            expiry: "2026-03-31".into(),
            terms: "Net 30-60".into(),
            exclusivity: "Non-exclusive".into(),
            quality_metrics: "≥95% quality acceptance".into(),
        },
        capacity: "Several hundred thousand MT/yr".into(),
        compliance: strings(&["ISO 9001", "TSCA", "REACH"]),
        risk_rating: "Medium".into(),
        geopolitical: Geopolitical {
            region: "Stable".into(),
            trade_agreements: strings(&["USMCA"]),
            political_stability: "High".into(),
            logistics_risk: "Medium (Gulf Coast storms)".into(),
            additional_risk: Some("US tariff changes on feedstocks".into()),
        },
        financial: Financial {
            rating: "BBB".into(),
            market_cap: "$5.1B".into(),
            revenue: "$6.1B".into(),
        },
        esg: Esg {
            environmental_score: 71.0,
            social_score: 68.0,
            governance_score: 74.0,
            certifications: strings(&["Responsible Care"]),
        },
        alternate_products: strings(&["Jeffamine D-230", "Specialty epoxy hardeners"]),
        risk_alerts: strings(&[
            "Hurricane season may disrupt Gulf Coast production",
            "Contract renewal due within 6 months",
        ]),
        profile: Some(Profile {
            background: "Founded by Jon Huntsman Sr. in 1970; grew through acquisitions in polyurethanes and advanced chemicals.".into(),
            general_info: "Publicly traded, headquartered in The Woodlands, Texas.".into(),
        }),
        manufacturing: Some(Manufacturing {
            capabilities: Some("Continuous-flow lines for high volume, batch setups for specialty chemistries".into()),
            capacities: Some("Polyurethanes: several hundred thousand MT/yr; amines: tens of thousands".into()),
            ..Default::default()
        }),
        geographic_presence: Some(GeographicPresence {
            locations: strings(&["USA", "Netherlands", "Germany", "China"]),
            infrastructure: "Distribution centers near the US Gulf Coast, European and Asian warehouses".into(),
        }),
        quality: Some(Quality {
            compliance: strings(&["ISO 9001", "TSCA", "REACH"]),
            quality_systems: "QA laboratories with automated in-process monitoring".into(),
            audit_history: "No major non-conformances in client audits".into(),
            certifications: strings(&["ISO 9001", "ISO 14001"]),
        }),
        pricing: Some(Pricing {
            structures: "Spot for commodity polyols, annual contracts for stable volumes".into(),
            payment_terms: "Net 30-60 days, early payment discounts".into(),
            financial_stability: "Financially stable, no major credit concerns".into(),
            negotiation_levers: "Volume-based rebates, index-linked adjustments".into(),
            cost_transparency: "Limited overhead disclosure, partial feedstock itemization".into(),
        }),
    }
}

fn basf() -> Supplier {
    Supplier {
        id: 2,
        name: "BASF".into(),
        region: "Europe".into(),
        contract: Contract {
            length: "2 years".into(),
            expiry: "2025-12-31".into(),
            terms: "Net 45".into(),
            exclusivity: "Preferred supplier".into(),
            quality_metrics: "99% on-spec deliveries".into(),
        },
        capacity: "1.2M MT/yr".into(),
        compliance: strings(&["ISO 9001", "REACH", "GMP"]),
        risk_rating: "Low".into(),
        geopolitical: Geopolitical {
            region: "Stable".into(),
            trade_agreements: strings(&["EU Single Market", "EU-Japan EPA"]),
            political_stability: "High".into(),
            logistics_risk: "Low".into(),
            additional_risk: None,
        },
        financial: Financial {
            rating: "A".into(),
            market_cap: "$45B".into(),
            revenue: "$75B".into(),
        },
        esg: Esg {
            environmental_score: 82.0,
            social_score: 79.0,
            governance_score: 85.0,
            certifications: strings(&["ISO 14001", "EcoVadis Gold"]),
        },
        alternate_products: strings(&["Triethylamine", "Pluronic F-127"]),
        risk_alerts: Vec::new(),
        profile: None,
        manufacturing: Some(Manufacturing {
            process: Some("Integrated Verbund production".into()),
            quality: Some("GMP-certified excipient plants".into()),
            ..Default::default()
        }),
        geographic_presence: None,
        quality: None,
        pricing: None,
    }
}

fn acme() -> Supplier {
    Supplier {
        id: 3,
        name: "Acme & Co".into(),
        region: "Asia Pacific".into(),
        contract: Contract {
            length: "1 year".into(),
            expiry: "2025-09-30".into(),
            terms: "Letter of credit".into(),
            exclusivity: "None".into(),
            quality_metrics: "CoA per batch".into(),
        },
        capacity: "8,000 MT/yr".into(),
        compliance: Vec::new(),
        risk_rating: "High".into(),
        geopolitical: Geopolitical {
            region: "Moderate".into(),
            trade_agreements: strings(&["RCEP"]),
            political_stability: "Medium".into(),
            logistics_risk: "High (port congestion)".into(),
            additional_risk: Some("Export licensing delays".into()),
        },
        financial: Financial {
            rating: "BB".into(),
            market_cap: "$300M".into(),
            revenue: "$210M".into(),
        },
        esg: Esg {
            environmental_score: 55.0,
            social_score: 61.0,
            governance_score: 58.5,
            certifications: Vec::new(),
        },
        alternate_products: Vec::new(),
        risk_alerts: strings(&["Single-site production"]),
        profile: Some(Profile {
            background: "Family-owned fine chemicals producer".into(),
            general_info: String::new(),
        }),
        manufacturing: None,
        geographic_presence: Some(GeographicPresence {
            locations: Vec::new(),
            infrastructure: "One plant with on-site tank farm".into(),
        }),
        quality: Some(Quality {
            audit_history: "First client audit scheduled".into(),
            ..Default::default()
        }),
        pricing: Some(Pricing {
            structures: "Spot only".into(),
            ..Default::default()
        }),
    }
}
