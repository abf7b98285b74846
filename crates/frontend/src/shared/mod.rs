pub mod api_utils;
pub mod charts;
pub mod components;
pub mod icons;
pub mod page_frame;
pub mod page_standard;
