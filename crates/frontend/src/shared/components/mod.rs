pub mod indicator_set;
pub mod stat_card;
