pub mod config;
pub mod idea;
pub mod profile;
pub mod scoring;
mod serde_helpers;
