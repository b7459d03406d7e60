pub mod accumulation;
pub mod colour;
pub mod config;
pub mod data;
pub mod settings;
pub mod viewport;
