//! Core types and errors for CSS linear-gradient geometry.
//!
//! This crate provides the types shared by the parser and by renderers that consume it:
//! - Bounding box and gradient line types
//! - The output [`GradientDescriptor`]
//! - Error types

pub mod errors;
pub mod types;

pub use errors::*;
pub use types::*;

pub use glam::DVec2;
