//! Scrawl Core Types and Definitions
//!
//! This crate provides the foundational types shared by the Scrawl parser and
//! renderer. It includes:
//!
//! - **Geometry**: Basic geometric types ([`geometry`] module)
//! - **Colors**: Color handling with CSS color support ([`color::Color`])
//! - **Primitives**: The drawing primitives produced from an ASCII grid
//!   ([`primitive::Primitive`])
//! - **Draw**: Sketch-style rendering of primitives to SVG ([`draw`] module)

pub mod color;
pub mod draw;
pub mod geometry;
pub mod primitive;
