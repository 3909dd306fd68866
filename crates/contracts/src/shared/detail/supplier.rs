use super::view::{DetailBlock, DetailField, DetailGroup, GroupLayout};
use crate::domain::a002_supplier::Supplier;
use crate::shared::fallback::{joined, present, present_opt, FieldGroupRule, FieldRule, SectionRule};

// ============================================================================
// Candidate sources
// ============================================================================

fn profile_background(s: &Supplier) -> Option<String> {
    s.profile.as_ref().and_then(|p| present(&p.background))
}

fn profile_general_info(s: &Supplier) -> Option<String> {
    s.profile.as_ref().and_then(|p| present(&p.general_info))
}

fn manufacturing_capabilities(s: &Supplier) -> Option<String> {
    s.manufacturing.as_ref().and_then(|m| present_opt(m.capabilities.as_ref()))
}

fn manufacturing_process(s: &Supplier) -> Option<String> {
    s.manufacturing.as_ref().and_then(|m| present_opt(m.process.as_ref()))
}

fn manufacturing_capacities(s: &Supplier) -> Option<String> {
    s.manufacturing.as_ref().and_then(|m| present_opt(m.capacities.as_ref()))
}

fn manufacturing_quality(s: &Supplier) -> Option<String> {
    s.manufacturing.as_ref().and_then(|m| present_opt(m.quality.as_ref()))
}

fn capacity(s: &Supplier) -> Option<String> {
    present(&s.capacity)
}

fn presence_locations(s: &Supplier) -> Option<String> {
    s.geographic_presence.as_ref().and_then(|g| joined(&g.locations))
}

fn presence_infrastructure(s: &Supplier) -> Option<String> {
    s.geographic_presence.as_ref().and_then(|g| present(&g.infrastructure))
}

fn region(s: &Supplier) -> Option<String> {
    present(&s.region)
}

fn quality_compliance(s: &Supplier) -> Option<String> {
    s.quality.as_ref().and_then(|q| joined(&q.compliance))
}

fn compliance(s: &Supplier) -> Option<String> {
    joined(&s.compliance)
}

fn quality_systems(s: &Supplier) -> Option<String> {
    s.quality.as_ref().and_then(|q| present(&q.quality_systems))
}

fn quality_audit_history(s: &Supplier) -> Option<String> {
    s.quality.as_ref().and_then(|q| present(&q.audit_history))
}

fn quality_certifications(s: &Supplier) -> Option<String> {
    s.quality.as_ref().and_then(|q| joined(&q.certifications))
}

fn esg_certifications(s: &Supplier) -> Option<String> {
    joined(&s.esg.certifications)
}

fn pricing_structures(s: &Supplier) -> Option<String> {
    s.pricing.as_ref().and_then(|p| present(&p.structures))
}

fn pricing_payment_terms(s: &Supplier) -> Option<String> {
    s.pricing.as_ref().and_then(|p| present(&p.payment_terms))
}

fn contract_terms(s: &Supplier) -> Option<String> {
    present(&s.contract.terms)
}

fn pricing_financial_stability(s: &Supplier) -> Option<String> {
    s.pricing.as_ref().and_then(|p| present(&p.financial_stability))
}

fn financial_rating(s: &Supplier) -> Option<String> {
    present(&s.financial.rating)
}

fn pricing_negotiation_levers(s: &Supplier) -> Option<String> {
    s.pricing.as_ref().and_then(|p| present(&p.negotiation_levers))
}

fn pricing_cost_transparency(s: &Supplier) -> Option<String> {
    s.pricing.as_ref().and_then(|p| present(&p.cost_transparency))
}

// ============================================================================
// Fallback tables
// ============================================================================

pub static SUPPLIER_PROFILES: SectionRule<Supplier> = SectionRule {
    heading: "Supplier Profiles",
    groups: &[
        FieldGroupRule {
            heading: "2.1 Company Background and General Information",
            fields: &[
                FieldRule { label: "Background", sources: &[profile_background] },
                FieldRule { label: "General Info", sources: &[profile_general_info] },
            ],
        },
        FieldGroupRule {
            heading: "2.2 Manufacturing Capabilities and Capacities",
            fields: &[
                FieldRule {
                    label: "Capabilities",
                    sources: &[manufacturing_capabilities, manufacturing_process],
                },
                FieldRule {
                    label: "Capacities",
                    sources: &[manufacturing_capacities, capacity],
                },
            ],
        },
        FieldGroupRule {
            heading: "2.3 Geographic Presence and Infrastructure",
            fields: &[
                FieldRule { label: "Locations", sources: &[presence_locations, region] },
                FieldRule { label: "Infrastructure", sources: &[presence_infrastructure] },
            ],
        },
    ],
};

pub static SUPPLIER_QUALITY: SectionRule<Supplier> = SectionRule {
    heading: "Supplier Quality and Certifications",
    groups: &[
        FieldGroupRule {
            heading: "3.1 Compliance with Industry Standards and Regulatory Bodies",
            fields: &[FieldRule { label: "Compliance", sources: &[quality_compliance, compliance] }],
        },
        FieldGroupRule {
            heading: "3.2 Quality Assurance and Control Systems",
            fields: &[FieldRule {
                label: "Quality Systems",
                sources: &[quality_systems, manufacturing_quality],
            }],
        },
        FieldGroupRule {
            heading: "3.3 Audit History and Certifications",
            fields: &[
                FieldRule { label: "Audit History", sources: &[quality_audit_history] },
                FieldRule {
                    label: "Certifications",
                    sources: &[quality_certifications, esg_certifications],
                },
            ],
        },
    ],
};

pub static SUPPLIER_PRICING: SectionRule<Supplier> = SectionRule {
    heading: "Pricing and Contract Terms",
    groups: &[
        FieldGroupRule {
            heading: "4.1 Pricing Structures (Spot vs. Contract)",
            fields: &[FieldRule { label: "Structures", sources: &[pricing_structures] }],
        },
        FieldGroupRule {
            heading: "4.2 Payment Terms and Financial Stability",
            fields: &[
                FieldRule {
                    label: "Payment Terms",
                    sources: &[pricing_payment_terms, contract_terms],
                },
                FieldRule {
                    label: "Financial Stability",
                    sources: &[pricing_financial_stability, financial_rating],
                },
            ],
        },
        FieldGroupRule {
            heading: "4.3 Negotiation Levers and Cost Transparency",
            fields: &[
                FieldRule { label: "Negotiation Levers", sources: &[pricing_negotiation_levers] },
                FieldRule { label: "Cost Transparency", sources: &[pricing_cost_transparency] },
            ],
        },
    ],
};

/// Sections resolved through fallback tables, in display order
pub static SUPPLIER_PROFILE_SECTIONS: [&SectionRule<Supplier>; 3] =
    [&SUPPLIER_PROFILES, &SUPPLIER_QUALITY, &SUPPLIER_PRICING];

fn resolve_section(rule: &SectionRule<Supplier>, s: &Supplier) -> DetailGroup {
    let blocks = rule
        .groups
        .iter()
        .map(|group| DetailBlock::Subgroup {
            heading: group.heading.to_string(),
            fields: group
                .fields
                .iter()
                .map(|field| DetailField::new(field.label, field.resolve(s)))
                .collect(),
        })
        .collect();
    DetailGroup::new(rule.heading, GroupLayout::Stack, blocks)
}

// ============================================================================
// Groups
// ============================================================================

pub fn supplier_groups(s: &Supplier) -> Vec<DetailGroup> {
    let mut groups = Vec::with_capacity(9);

    if s.has_risk_alerts() {
        groups.push(DetailGroup::alert(
            "Risk Alerts",
            vec![DetailBlock::list(None, &s.risk_alerts)],
        ));
    }

    let contract = &s.contract;
    groups.push(DetailGroup::new(
        "Contract Information",
        GroupLayout::Grid,
        vec![
            DetailBlock::field("Length", &contract.length),
            DetailBlock::field("Expiry", &contract.expiry),
            DetailBlock::field("Terms", &contract.terms),
            DetailBlock::field("Exclusivity", &contract.exclusivity),
            DetailBlock::field("Quality Metrics", &contract.quality_metrics),
        ],
    ));

    groups.extend(SUPPLIER_PROFILE_SECTIONS.iter().map(|rule| resolve_section(rule, s)));

    let financial = &s.financial;
    let esg = &s.esg;
    groups.push(DetailGroup::new(
        "Financial & ESG",
        GroupLayout::Columns,
        vec![
            DetailBlock::Subgroup {
                heading: "Financial".into(),
                fields: vec![
                    DetailField::new("Rating", &financial.rating),
                    DetailField::new("Market Cap", &financial.market_cap),
                    DetailField::new("Revenue", &financial.revenue),
                ],
            },
            DetailBlock::Subgroup {
                heading: "ESG Scores".into(),
                fields: vec![
                    DetailField::new("Environmental", esg.environmental_score.to_string()),
                    DetailField::new("Social", esg.social_score.to_string()),
                    DetailField::new("Governance", esg.governance_score.to_string()),
                ],
            },
        ],
    ));

    let geo = &s.geopolitical;
    groups.push(DetailGroup::new(
        "Geopolitical Factors",
        GroupLayout::Stack,
        vec![
            DetailBlock::field("Region Stability", &geo.region),
            DetailBlock::field("Trade Agreements", geo.trade_agreements.join(", ")),
            DetailBlock::field("Political Stability", &geo.political_stability),
            DetailBlock::field("Logistics Risk", &geo.logistics_risk),
        ],
    ));

    groups.push(DetailGroup::new(
        "Alternate Products",
        GroupLayout::Stack,
        vec![DetailBlock::list(None, &s.alternate_products)],
    ));

    groups
}
