pub mod consolidator;
pub mod selection;
