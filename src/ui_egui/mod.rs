//! egui user interface.

pub mod app;
pub mod dialogs;
pub mod icon_rail;
pub mod side_panel;
pub mod theme;
pub mod timezone_picker;
pub mod top_bar;
pub mod views;

pub use app::CalendarApp;
