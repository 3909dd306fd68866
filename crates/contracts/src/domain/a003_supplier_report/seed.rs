use super::aggregate::{ContentBlock, Inline, ReportDocument, Section, Subsection};

fn sub(subtitle: &str, content: Vec<ContentBlock>) -> Subsection {
    Subsection::new(subtitle, content)
}

fn pairs(pairs: &[(&str, &str)]) -> Vec<ContentBlock> {
    vec![ContentBlock::pairs(pairs)]
}

pub fn huntsman_report() -> ReportDocument {
    ReportDocument {
        title: "Supplier Report: Huntsman".into(),
        sections: vec![
            Section::new(
                "executive-summary",
                "1. Executive Summary",
                vec![
                    sub(
                        "1.1 Purpose and Scope",
                        vec![ContentBlock::plain(
                            "This report provides an in-depth evaluation of Huntsman, focusing on its capabilities in specialty chemicals, intermediates, and polymer solutions relevant to pharmaceutical and allied industries. It assesses operational stability, compliance, pricing structures, and potential risk factors that may impact reliable supply for pharma applications.",
                        )],
                    ),
                    sub(
                        "1.2 Key Highlights",
                        vec![ContentBlock::bullets(&[
                            "Headquarters: The Woodlands, Texas (USA), with a global presence",
                            "Product Lines: Specialty amines, polyurethanes, adhesives, possible synergy with pharma coatings or excipients",
                            "Contract Expiry: Multi-year agreements common for large-scale polymer or amine lines; recommended renewal ~6 months prior",
                            "Potential Disruptions: Gulf Coast storms, feedstock cost volatility, occasional shipping delays",
                        ])],
                    ),
                ],
            ),
            Section::new(
                "supplier-profiles",
                "2. Supplier Profiles",
                vec![
                    sub(
                        "2.1 Company Background and General Information",
                        pairs(&[
                            ("Founding & History", "Founded by Jon Huntsman Sr. in 1970; grew significantly via acquisitions in the polyurethanes and advanced chemicals space."),
                            ("Corporate Structure", "Publicly traded, with multiple business divisions (Polyurethanes, Performance Products, etc.)."),
                            ("Product Portfolio", "Wide range, including polyurethanes, specialty amines, epoxy-based solutions, some of which have relevance for pharmaceutical adhesives or advanced polymeric intermediates."),
                        ]),
                    ),
                    sub(
                        "2.2 Manufacturing Capabilities and Capacities",
                        pairs(&[
                            ("Production Facilities", "Major plants in the US (Gulf region), plus Europe and Asia expansions."),
                            ("Annual Capacity", "Large-scale polyurethanes (several hundred thousand metric tons), amines in the tens of thousands."),
                            ("Technology", "Combination of continuous-flow production for high-volume lines and batch setups for specialty chemistries."),
                        ]),
                    ),
                    sub(
                        "2.3 Geographic Presence and Infrastructure",
                        pairs(&[
                            ("Logistics Hubs", "Key distribution centers near the US Gulf Coast, plus warehouses in Europe (Netherlands, Germany) and Asia (China)."),
                            ("Export Reach", "Sizable shipments to North America, Europe, parts of Asia."),
                            ("Infrastructure Strengths", "Established shipping routes for chemicals, though occasionally subject to severe weather in the Gulf region."),
                        ]),
                    ),
                ],
            ),
            Section::new(
                "quality-certifications",
                "3. Supplier Quality and Certifications",
                vec![
                    sub(
                        "3.1 Compliance with Industry Standards and Regulatory Bodies",
                        vec![ContentBlock::Paragraph(vec![
                            Inline::strong("ISO Certifications:"),
                            Inline::text(" Many sites hold ISO 9001 for quality management. "),
                            Inline::strong("Pharma-Relevant Lines:"),
                            Inline::text(" Some lines follow cGMP-like protocols, but formal GMP certification is typically limited to specific specialty products. "),
                            Inline::strong("Regulatory Registrations:"),
                            Inline::text(" Compliance with TSCA (US) and REACH (EU) for major product lines."),
                        ])],
                    ),
                    sub(
                        "3.2 Quality Assurance and Control Systems",
                        pairs(&[
                            ("QA Laboratory", "Equipped to test polymer properties (viscosity, reactivity), amine purity, etc."),
                            ("In-Process Monitoring", "Automated systems track temperature, pressure, and flow rates in continuous production lines."),
                            ("Documentation", "Comprehensive batch records; CoAs generated for relevant shipments."),
                        ]),
                    ),
                    sub(
                        "3.3 Audit History and Certifications",
                        pairs(&[
                            ("Internal Audits", "Conducted regularly, focusing on EHS protocols and SOP adherence."),
                            ("External Audits", "Major industrial and some pharma clients have audited specialized lines with no major non-conformances reported."),
                            ("Future Plans", "Considering expansions of specialized lines that might lead to partial GMP certification if pharma demand arises."),
                        ]),
                    ),
                ],
            ),
            Section::new(
                "pricing-terms",
                "4. Pricing and Contract Terms",
                vec![
                    sub(
                        "4.1 Pricing Structures (Spot vs. Contract)",
                        pairs(&[
                            ("Spot Purchasing", "Common for commodity-based polyols or amines with short-term needs."),
                            ("Annual/Biannual Contracts", "Typically favored by larger clients for stable volumes and partial cost insulation (index-linked for feedstocks)."),
                        ]),
                    ),
                    sub(
                        "4.2 Payment Terms and Financial Stability",
                        pairs(&[
                            ("Standard Terms", "Net 30–60 days, with occasional discounts for early payment."),
                            ("Financial Health", "Huntsman remains financially stable; no major credit concerns."),
                            ("Contract Expiration", "Typically 2–3 years for key lines, recommended renewal ~6 months before end date."),
                        ]),
                    ),
                    sub(
                        "4.3 Negotiation Levers and Cost Transparency",
                        pairs(&[
                            ("Volume-Based Rebates", "Tiered discount structures for large annual volumes."),
                            ("Index-Linked Adjustments", "Tied to cost of raw materials (e.g., propylene, benzene, or other feedstocks)."),
                            ("Open-Book Elements", "Limited overhead disclosure; feedstock costs may be partially itemized for major strategic partners."),
                        ]),
                    ),
                ],
            ),
            Section::new(
                "supply-reliability",
                "5. Supply Reliability and Risks",
                vec![
                    sub(
                        "5.1 Historical Delivery Performance",
                        pairs(&[
                            ("On-Time Delivery (OTD)", "Averages 93–95% globally; some variability tied to US Gulf Coast disruptions."),
                            ("Lead Times", "Usually 2–4 weeks within North America; up to 6–8 weeks overseas."),
                        ]),
                    ),
                    sub(
                        "5.2 Risk Factors (Operational, Geopolitical, Environmental)",
                        pairs(&[
                            ("Operational", "Maintenance or expansions can temporarily reduce capacity."),
                            ("Geopolitical", "Primarily impacted by US trade policies or tariffs that can affect raw materials or exports."),
                            ("Environmental", "Gulf Coast storms (hurricanes) pose occasional shutdown or logistic challenges."),
                        ]),
                    ),
                    sub(
                        "5.3 Contingency Measures and Disaster Recovery Plans",
                        pairs(&[
                            ("Inventory Buffer", "Recommends a 2–3 week stock for critical SKUs due to weather unpredictability."),
                            ("Backup Production", "Some lines replicated in Europe or Asia for global customers."),
                            ("Emergency Logistics", "Maintains relationships with multiple freight providers to reroute or expedite if main routes are compromised."),
                        ]),
                    ),
                ],
            ),
            Section::new(
                "logistics",
                "6. Logistics and Transportation",
                vec![
                    sub(
                        "6.1 Shipping Methods and Hazardous Material Handling",
                        pairs(&[
                            ("Hazard Classification", "Many amines and intermediates classified as corrosive or flammable, necessitating UN-approved containers."),
                            ("Preferred Modes", "Road and rail within the US; sea freight for intercontinental shipments; air freight rarely used except for urgent deliveries."),
                        ]),
                    ),
                    sub(
                        "6.2 Freight and Logistics Costs",
                        pairs(&[
                            ("Baseline Freight", "Typically moderate in the US, with possible surcharges for hazmat materials."),
                            ("Additional Expenses", "Fuel adjustments, specialized containers if required for certain reactivity or temperature needs."),
                        ]),
                    ),
                    sub(
                        "6.3 Lead Times and Inventory Practices",
                        pairs(&[
                            ("Domestic", "2–4 weeks post-QC release."),
                            ("International", "4–8 weeks port-to-port, factoring shipping schedules."),
                            ("Consignment/Buffer", "Some VMI programs for large-volume customers, subject to contract terms."),
                        ]),
                    ),
                ],
            ),
            Section::new(
                "technical-support",
                "7. Technical Support and Innovation",
                vec![
                    sub(
                        "7.1 Technical Assistance and Customer Support Capabilities",
                        pairs(&[
                            ("Product Guidance", "Technical teams advise on amine usage, polymer formulations, or process optimization."),
                            ("Hotline", "Monday–Friday business hours, plus limited after-hours email support."),
                        ]),
                    ),
                    sub(
                        "7.2 Research and Development Focus",
                        pairs(&[
                            ("R&D", "Specialized in advanced amine chemistries, polymer enhancements, potential synergy with pharma coatings or adhesives."),
                            ("Collaboration", "Some joint projects with research institutions or industrial partners to develop novel polymer solutions."),
                        ]),
                    ),
                    sub(
                        "7.3 Collaboration Opportunities",
                        pairs(&[
                            ("Customized Formulations", "Willing to tailor polymer or amine specs for niche applications."),
                            ("Licensing", "Typically not licensed out; Huntsman prefers in-house production but might consider JV for large-scale expansions."),
                        ]),
                    ),
                ],
            ),
            Section::new(
                "sustainability",
                "8. Supplier Sustainability and Ethical Practices",
                vec![
                    sub(
                        "8.1 Environmental Responsibility and Initiatives",
                        pairs(&[
                            ("Emission Reductions", "Working to minimize VOCs and greenhouse gases, focusing on improved process efficiencies."),
                            ("Energy Optimization", "Some plants adopting combined heat and power (CHP) systems for better energy utilization."),
                            ("Waste Management", "Encourages solvent recycling and safe disposal compliance."),
                        ]),
                    ),
                    sub(
                        "8.2 Ethical Sourcing and Labor Practices",
                        pairs(&[
                            ("Code of Conduct", "Global standard addressing labor, anti-corruption; vendor checks for high-risk regions."),
                            ("Local Community Engagement", "Some philanthropic programs or scholarships in the Gulf Coast region."),
                        ]),
                    ),
                    sub(
                        "8.3 Corporate Social Responsibility (CSR) Programs",
                        pairs(&[
                            ("Public Reporting", "Annual sustainability updates highlight EHS progress, energy saving initiatives."),
                            ("Future Plans", "Evaluating broader alignment with frameworks like Responsible Care® or additional ESG disclosures."),
                        ]),
                    ),
                ],
            ),
            Section::new(
                "performance-reviews",
                "9. Performance Reviews and Supplier Ratings",
                vec![
                    sub(
                        "9.1 Supplier Performance Metrics",
                        pairs(&[
                            ("Quality Acceptance", "~95% for standardized amine lines, ~93% for specialized polymer formulations."),
                            ("Safety Record", "Minimal lost-time incidents, invests in extensive EHS training."),
                        ]),
                    ),
                    sub(
                        "9.2 Comparative Analysis and Ratings",
                        pairs(&[
                            ("Industry Standing", "Known for polyurethanes and amines, mid-tier or premium pricing."),
                            ("Competitor Benchmarking", "Some smaller specialists may undercut on cost but lack Huntsman’s scale or reliability."),
                        ]),
                    ),
                    sub(
                        "9.3 Customer Feedback and Case Studies",
                        pairs(&[
                            ("Case Study", "A major adhesives producer reported improved cure times using Huntsman’s amine hardeners, citing a 10% reduction in cycle time."),
                            ("Testimonials", "Positive on product consistency and decent lead times, though weather-related delays can occur."),
                        ]),
                    ),
                ],
            ),
            Section::new(
                "recommendations",
                "10. Recommendations and Supplier Selection Guidance",
                vec![
                    sub(
                        "10.1 Recommended Suppliers by Region and Grade",
                        pairs(&[
                            ("North America", "Strong option for polymer or amine supply with moderate lead times."),
                            ("Global", "Overseas shipments feasible but plan for ~6–8-week lead times and possible weather disruptions."),
                        ]),
                    ),
                    sub(
                        "10.2 Supplier Qualification Process",
                        pairs(&[
                            ("Initial Screening", "Confirm any cGMP-like process lines if relevant for pharmaceutical intermediates, request references."),
                            ("Site Audit", "Evaluate main US plant or relevant overseas sites."),
                            ("Pilot Orders", "Validate real-world lead times, QA processes, EHS compliance."),
                        ]),
                    ),
                    sub(
                        "10.3 Strategic Recommendations for Supplier Relationships",
                        pairs(&[
                            ("Monitor Contract End", "Typical 2–3-year contracts, initiate renewals ~6 months before expiration."),
                            ("Consider Weather Risk", "Maintain stock buffers or secondary suppliers for critical volumes."),
                            ("Collaborate on Custom Solutions", "If advanced amine or polymer formulations are required, Huntsman is open to co-development."),
                        ]),
                    ),
                ],
            ),
            Section::new(
                "appendices",
                "11. Appendices",
                vec![
                    sub(
                        "11.1 Supplier Contacts and Key Personnel",
                        vec![ContentBlock::Paragraph(vec![
                            Inline::text("[Name] - CEO/Managing Director"),
                            Inline::LineBreak,
                            Inline::text("[Name] - Head of Technical Services"),
                            Inline::LineBreak,
                            Inline::text("[Name] - Key Account Manager"),
                        ])],
                    ),
                    sub(
                        "11.2 Compliance Documentation Examples",
                        vec![ContentBlock::plain(
                            "ISO Certificates (e.g., ISO 9001), TSCA/REACH Registrations, EHS Permits (local, federal)",
                        )],
                    ),
                    sub(
                        "11.3 Sample Audit Reports and Questionnaires",
                        vec![ContentBlock::plain(
                            "Internal QA Audit Summaries, Client Audit Templates (for verifying polymer or amine lines)",
                        )],
                    ),
                ],
            ),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_huntsman_section_order() {
        let report = huntsman_report();
        let ids: Vec<&str> = report.sections.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(
            ids,
            vec![
                "executive-summary",
                "supplier-profiles",
                "quality-certifications",
                "pricing-terms",
                "supply-reliability",
                "logistics",
                "technical-support",
                "sustainability",
                "performance-reviews",
                "recommendations",
                "appendices",
            ]
        );
    }

    #[test]
    fn test_huntsman_anchors_unique() {
        assert!(huntsman_report().validate().is_ok());
    }

    #[test]
    fn test_huntsman_contents() {
        let doc = huntsman_report();
        assert!(doc.sections.iter().all(|s| s.subsections.len() >= 2));

        let highlights = &doc.section("executive-summary").unwrap().subsections[1];
        assert_eq!(highlights.subtitle, "1.2 Key Highlights");
        assert!(matches!(&highlights.content[0], ContentBlock::BulletList(items) if items.len() == 4));

        let contacts = &doc.section("appendices").unwrap().subsections[0];
        assert_eq!(
            contacts.content[0].plain_text(),
            "[Name] - CEO/Managing Director\n[Name] - Head of Technical Services\n[Name] - Key Account Manager"
        );
    }
}
