pub mod app_config;
pub mod error;
pub mod grid;
pub mod table_format;
pub mod theme;
