pub mod aggregate;
pub mod seed;

pub use aggregate::{
    Contract, Esg, Financial, GeographicPresence, Geopolitical, Pricing, Profile, Quality,
    Supplier,
};
pub use seed::seed_suppliers;
