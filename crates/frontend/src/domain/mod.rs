pub mod a001_material;
pub mod a002_supplier;
pub mod a003_supplier_report;
