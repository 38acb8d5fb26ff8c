pub mod browser;
pub mod catalog;
pub mod collection;
pub mod engine;
pub mod types;
