pub mod week_view;
