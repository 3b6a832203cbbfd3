//! Shared utility modules used across Orthos components.

pub mod debug;
pub mod text;
