pub mod analysis;
pub mod config;
pub mod container;
pub mod extract;
