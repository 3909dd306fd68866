//! Domain records, view models and static data shared by the dashboard
//! frontend and its host binary.

pub mod domain;
pub mod shared;
