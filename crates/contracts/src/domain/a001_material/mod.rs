pub mod aggregate;
pub mod seed;

pub use aggregate::{ChemicalProfile, Manufacturing, Material, SupplyRisk};
pub use seed::seed_materials;
