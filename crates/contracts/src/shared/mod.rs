pub mod detail;
pub mod fallback;
pub mod navigation;
