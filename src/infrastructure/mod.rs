pub mod catalog;
pub mod chaos;
