use super::aggregate::{ChemicalProfile, Manufacturing, Material, SupplyRisk};

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// Materials shown in the catalog. Built once at startup, never mutated.
pub fn seed_materials() -> Vec<Material> {
    vec![
        Material {
            id: 1,
            name: "Triethylamine".into(),
            cas: "121-44-8".into(),
            grade: "Pharma Grade".into(),
            price: "$4.10/kg".into(),
            lead_time: "3-4 weeks".into(),
            chemical_profile: ChemicalProfile {
                molecular_weight: "101.19 g/mol".into(),
                purity: "≥99.5%".into(),
                form: "Colorless liquid".into(),
                stability: "Stable under nitrogen, hygroscopic".into(),
            },
            manufacturing: Manufacturing {
                process: Some("Continuous amination of ethanol".into()),
                quality: Some("ISO 9001, cGMP-like controls".into()),
                batch_size: Some("20 MT".into()),
                ..Default::default()
            },
            supply_risk: SupplyRisk {
                level: "Medium".into(),
                factors: strings(&["Gulf Coast weather", "Feedstock volatility"]),
                mitigation: "Qualify a second European source".into(),
            },
            substitutes: strings(&["N,N-Diisopropylethylamine", "Pyridine"]),
            suppliers: strings(&["Huntsman", "BASF"]),
        },
        Material {
            id: 2,
            name: "Polyethylene Glycol 400".into(),
            cas: "25322-68-3".into(),
            grade: "USP/NF".into(),
            price: "$2.85/kg".into(),
            lead_time: "2-3 weeks".into(),
            chemical_profile: ChemicalProfile {
                molecular_weight: "380-420 g/mol".into(),
                purity: "≥99%".into(),
                form: "Viscous liquid".into(),
                stability: "Stable, avoid strong oxidizers".into(),
            },
            manufacturing: Manufacturing {
                process: Some("Ethylene oxide polymerization".into()),
                quality: Some("cGMP excipient line".into()),
                batch_size: Some("10 MT".into()),
                ..Default::default()
            },
            supply_risk: SupplyRisk {
                level: "Low".into(),
                factors: strings(&["Ethylene oxide pricing"]),
                mitigation: "Annual contract with index-linked pricing".into(),
            },
            substitutes: strings(&["PEG 300", "Propylene glycol"]),
            suppliers: strings(&["Dow", "Huntsman"]),
        },
        Material {
            id: 3,
            name: "Jeffamine D-230".into(),
            cas: "9046-10-0".into(),
            grade: "Technical".into(),
            price: "$6.40/kg".into(),
            lead_time: "4-6 weeks".into(),
            chemical_profile: ChemicalProfile {
                molecular_weight: "230 g/mol".into(),
                purity: "≥97%".into(),
                form: "Liquid".into(),
                stability: "Stable, absorbs CO2 from air".into(),
            },
            // Process details not disclosed by the producer
            manufacturing: Manufacturing::default(),
            supply_risk: SupplyRisk {
                level: "High".into(),
                factors: strings(&["Single producer", "Hazmat shipping", "Long ocean transit"]),
                mitigation: "Hold 6 weeks of safety stock".into(),
            },
            substitutes: Vec::new(),
            suppliers: strings(&["Huntsman"]),
        },
    ]
}
