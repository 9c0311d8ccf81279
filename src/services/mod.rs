pub mod grid;
pub mod mock;
pub mod settings;
pub mod timezone;
