pub mod dto;
pub mod month;

pub use dto::*;
pub use month::MonthKey;
