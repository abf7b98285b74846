pub mod api;
pub mod series;
pub mod ui;
