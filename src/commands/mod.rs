pub mod list;
pub mod open;
