pub mod api;
pub mod config;
pub mod reducer;
pub mod wiki;
