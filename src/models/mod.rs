pub mod config;

pub use config::{GridConfig, LayoutConfig, CONFIG_ENV};
