pub mod detail_modal;
pub mod icons;
pub mod modal;
pub mod navigation;
pub mod page_frame;
pub mod page_standard;
