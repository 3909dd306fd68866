//! Detail view model for catalog records.
//!
//! `build_detail_view` turns a [`DomainRecord`] into titled groups of
//! labelled values. It is total: missing optional data resolves through the
//! fallback tables in [`supplier`] or renders blank, never an error.

pub mod material;
pub mod supplier;
pub mod view;

pub use view::{DetailBlock, DetailField, DetailGroup, DetailView, GroupLayout, GroupTone};

use crate::domain::common::DomainRecord;
use crate::shared::navigation::report_path;

pub fn build_detail_view(record: &DomainRecord) -> DetailView {
    let groups = match record {
        DomainRecord::Material(m) => material::material_groups(m),
        DomainRecord::Supplier(s) => supplier::supplier_groups(s),
    };
    DetailView {
        title: record.name().to_string(),
        report_path: report_path(record.name()),
        groups,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_material::{seed_materials, Material};
    use crate::domain::a002_supplier::{seed_suppliers, Quality, Supplier};
    use crate::shared::fallback::NOT_AVAILABLE;

    fn material() -> Material {
        seed_materials().remove(0)
    }

    fn supplier(name: &str) -> Supplier {
        seed_suppliers()
            .into_iter()
            .find(|s| s.name == name)
            .unwrap()
    }

    /// Supplier with every optional group missing
    fn bare_supplier() -> Supplier {
        Supplier {
            profile: None,
            manufacturing: None,
            geographic_presence: None,
            quality: None,
            pricing: None,
            ..supplier("Huntsman")
        }
    }

    #[test]
    fn test_material_group_order() {
        let view = build_detail_view(&material().into());
        assert_eq!(
            view.headings(),
            vec!["Chemical Profile", "Manufacturing", "Supply Risk", "Substitutes & Suppliers"]
        );
        assert_eq!(view.title, "Triethylamine");
        assert_eq!(view.report_path, "/suppliers/report?name=Triethylamine");
    }

    #[test]
    fn test_material_values_appear_once_in_order() {
        let m = material();
        let view = build_detail_view(&m.clone().into());

        let mut expected = vec![
            m.chemical_profile.molecular_weight.clone(),
            m.chemical_profile.purity.clone(),
            m.chemical_profile.form.clone(),
            m.chemical_profile.stability.clone(),
            m.manufacturing.process.clone().unwrap(),
            m.manufacturing.quality.clone().unwrap(),
            m.manufacturing.batch_size.clone().unwrap(),
            m.supply_risk.level.clone(),
            m.supply_risk.factors.join(", "),
            m.supply_risk.mitigation.clone(),
        ];
        expected.extend(m.substitutes.iter().cloned());
        expected.extend(m.suppliers.iter().cloned());

        assert_eq!(view.values(), expected);
        for value in &expected {
            assert_eq!(view.values().iter().filter(|v| *v == value).count(), 1, "{value}");
        }
    }

    #[test]
    fn test_material_missing_manufacturing_is_blank() {
        let m = seed_materials().into_iter().find(|m| m.id == 3).unwrap();
        let view = build_detail_view(&m.into());
        assert_eq!(view.field("Process"), Some(""));
        assert_eq!(view.field("Quality"), Some(""));
        assert_eq!(view.field("Batch Size"), Some(""));

        let lists = &view.group("Substitutes & Suppliers").unwrap().blocks;
        assert_eq!(lists[0], DetailBlock::List { label: Some("Substitutes".into()), items: vec![] });
    }

    #[test]
    fn test_supplier_group_order() {
        let view = build_detail_view(&supplier("Huntsman").into());
        assert_eq!(
            view.headings(),
            vec![
                "Risk Alerts",
                "Contract Information",
                "Supplier Profiles",
                "Supplier Quality and Certifications",
                "Pricing and Contract Terms",
                "Financial & ESG",
                "Geopolitical Factors",
                "Alternate Products",
            ]
        );
    }

    #[test]
    fn test_risk_alerts_absent_when_empty() {
        let view = build_detail_view(&supplier("BASF").into());
        assert!(view.group("Risk Alerts").is_none());
        assert_eq!(view.groups[0].heading, "Contract Information");
    }

    #[test]
    fn test_risk_alerts_in_input_order() {
        let s = supplier("Huntsman");
        let view = build_detail_view(&s.clone().into());
        let alerts = view.group("Risk Alerts").unwrap();
        assert_eq!(alerts.tone, GroupTone::Alert);
        assert_eq!(alerts.values(), s.risk_alerts.iter().map(String::as_str).collect::<Vec<_>>());
    }

    #[test]
    fn test_full_supplier_uses_primary_sources() {
        let view = build_detail_view(&supplier("Huntsman").into());
        assert_eq!(view.field("General Info"), Some("Publicly traded, headquartered in The Woodlands, Texas."));
        assert_eq!(view.field("Locations"), Some("USA, Netherlands, Germany, China"));
        assert_eq!(view.field("Certifications"), Some("ISO 9001, ISO 14001"));
        assert_eq!(view.field("Payment Terms"), Some("Net 30-60 days, early payment discounts"));
        assert!(!view.values().contains(&NOT_AVAILABLE));
    }

    #[test]
    fn test_bare_supplier_falls_back_to_required_fields() {
        let s = bare_supplier();
        let view = build_detail_view(&s.clone().into());

        assert_eq!(view.field("Background"), Some("N/A"));
        assert_eq!(view.field("General Info"), Some("N/A"));
        assert_eq!(view.field("Capabilities"), Some("N/A"));
        assert_eq!(view.field("Capacities"), Some(s.capacity.as_str()));
        assert_eq!(view.field("Locations"), Some(s.region.as_str()));
        assert_eq!(view.field("Infrastructure"), Some("N/A"));
        assert_eq!(view.field("Compliance"), Some("ISO 9001, TSCA, REACH"));
        assert_eq!(view.field("Quality Systems"), Some("N/A"));
        assert_eq!(view.field("Audit History"), Some("N/A"));
        assert_eq!(view.field("Certifications"), Some("Responsible Care"));
        assert_eq!(view.field("Structures"), Some("N/A"));
        assert_eq!(view.field("Payment Terms"), Some(s.contract.terms.as_str()));
        assert_eq!(view.field("Financial Stability"), Some(s.financial.rating.as_str()));
        assert_eq!(view.field("Negotiation Levers"), Some("N/A"));
        assert_eq!(view.field("Cost Transparency"), Some("N/A"));
    }

    #[test]
    fn test_manufacturing_process_and_quality_as_fallbacks() {
        let view = build_detail_view(&supplier("BASF").into());
        assert_eq!(view.field("Capabilities"), Some("Integrated Verbund production"));
        assert_eq!(view.field("Capacities"), Some("1.2M MT/yr"));
        assert_eq!(view.field("Quality Systems"), Some("GMP-certified excipient plants"));
    }

    #[test]
    fn test_compliance_fallback_chain() {
        let s = Supplier {
            compliance: vec!["ISO 9001".into()],
            ..bare_supplier()
        };
        let view = build_detail_view(&s.into());
        assert_eq!(view.field("Compliance"), Some("ISO 9001"));

        let s = Supplier {
            compliance: vec![],
            ..bare_supplier()
        };
        let view = build_detail_view(&s.into());
        assert_eq!(view.field("Compliance"), Some("N/A"));

        // Present group with an empty list still falls through
        let s = Supplier {
            compliance: vec!["REACH".into()],
            quality: Some(Quality::default()),
            ..bare_supplier()
        };
        let view = build_detail_view(&s.into());
        assert_eq!(view.field("Compliance"), Some("REACH"));
    }

    #[test]
    fn test_partially_filled_groups() {
        let view = build_detail_view(&supplier("Acme & Co").into());
        assert_eq!(view.field("Background"), Some("Family-owned fine chemicals producer"));
        assert_eq!(view.field("General Info"), Some("N/A"));
        assert_eq!(view.field("Locations"), Some("Asia Pacific"));
        assert_eq!(view.field("Compliance"), Some("N/A"));
        assert_eq!(view.field("Certifications"), Some("N/A"));
        assert_eq!(view.field("Structures"), Some("Spot only"));
        assert_eq!(view.field("Payment Terms"), Some("Letter of credit"));
        assert_eq!(view.report_path, "/suppliers/report?name=Acme%20%26%20Co");

        let products = &view.group("Alternate Products").unwrap().blocks;
        assert_eq!(products, &vec![DetailBlock::List { label: None, items: vec![] }]);
    }

    #[test]
    fn test_financial_and_esg_columns() {
        let view = build_detail_view(&supplier("Acme & Co").into());
        let group = view.group("Financial & ESG").unwrap();
        assert_eq!(group.layout, GroupLayout::Columns);
        assert_eq!(group.values(), vec!["BB", "$300M", "$210M", "55", "61", "58.5"]);
    }

    #[test]
    fn test_geopolitical_fields() {
        let view = build_detail_view(&supplier("BASF").into());
        assert_eq!(view.field("Region Stability"), Some("Stable"));
        assert_eq!(view.field("Trade Agreements"), Some("EU Single Market, EU-Japan EPA"));
        assert_eq!(view.field("Logistics Risk"), Some("Low"));
    }

    #[test]
    fn test_fallback_tables_cover_every_profile_field() {
        let labels: Vec<&str> = supplier::SUPPLIER_PROFILE_SECTIONS
            .iter()
            .flat_map(|section| section.groups.iter())
            .flat_map(|group| group.fields.iter())
            .map(|field| field.label)
            .collect();
        assert_eq!(labels.len(), 15);
        assert!(supplier::SUPPLIER_PROFILE_SECTIONS
            .iter()
            .flat_map(|section| section.groups.iter())
            .flat_map(|group| group.fields.iter())
            .all(|field| !field.sources.is_empty() && field.sources.len() <= 2));
    }

    #[test]
    fn test_no_residue_between_records() {
        let first = supplier("Huntsman");
        let second = supplier("Acme & Co");

        let _ = build_detail_view(&first.clone().into());
        let view = build_detail_view(&second.into());

        assert_eq!(view.title, "Acme & Co");
        for leaked in [&first.contract.terms, &first.financial.rating, &first.risk_alerts[0]] {
            assert!(!view.values().contains(&leaked.as_str()), "{leaked}");
        }
    }

    #[test]
    fn test_view_for_each_seeded_record() {
        let records: Vec<DomainRecord> = seed_suppliers()
            .into_iter()
            .map(DomainRecord::from)
            .chain(seed_materials().into_iter().map(DomainRecord::from))
            .collect();
        for record in &records {
            let view = build_detail_view(record);
            assert_eq!(view.title, record.name());
            assert!(!view.groups.is_empty());
        }
    }
}
