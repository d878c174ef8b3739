pub mod api;
pub mod file;
pub mod view;
