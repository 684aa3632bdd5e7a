//! CLI command implementations

pub mod check;
pub mod fields;
pub mod list;
pub mod new;
pub mod render;
pub mod show;
