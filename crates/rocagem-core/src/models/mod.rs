//! Data models shared by the extraction and import layers.

pub mod area;
pub mod config;
