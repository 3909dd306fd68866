use super::view::{DetailBlock, DetailGroup, GroupLayout};
use crate::domain::a001_material::Material;

pub fn material_groups(m: &Material) -> Vec<DetailGroup> {
    let profile = &m.chemical_profile;
    let manufacturing = &m.manufacturing;
    let risk = &m.supply_risk;

    vec![
        DetailGroup::new(
            "Chemical Profile",
            GroupLayout::Grid,
            vec![
                DetailBlock::field("Molecular Weight", &profile.molecular_weight),
                DetailBlock::field("Purity", &profile.purity),
                DetailBlock::field("Form", &profile.form),
                DetailBlock::field("Stability", &profile.stability),
            ],
        ),
        // Blank when unknown, no fallback for materials
        DetailGroup::new(
            "Manufacturing",
            GroupLayout::Stack,
            vec![
                DetailBlock::field("Process", manufacturing.process.clone().unwrap_or_default()),
                DetailBlock::field("Quality", manufacturing.quality.clone().unwrap_or_default()),
                DetailBlock::field("Batch Size", manufacturing.batch_size.clone().unwrap_or_default()),
            ],
        ),
        DetailGroup::new(
            "Supply Risk",
            GroupLayout::Stack,
            vec![
                DetailBlock::field("Risk Level", &risk.level),
                DetailBlock::field("Risk Factors", risk.factors.join(", ")),
                DetailBlock::field("Mitigation Strategy", &risk.mitigation),
            ],
        ),
        DetailGroup::new(
            "Substitutes & Suppliers",
            GroupLayout::Stack,
            vec![
                DetailBlock::list(Some("Substitutes"), &m.substitutes),
                DetailBlock::list(Some("Associated Suppliers"), &m.suppliers),
            ],
        ),
    ]
}
