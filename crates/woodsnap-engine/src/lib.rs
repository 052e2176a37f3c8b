//! WoodSnap engine crate.
//!
//! This crate owns the drawing primitives used by the screenshot generator:
//! geometry, paints, the recorded draw stream, fonts, and the CPU rasterizer
//! that turns a draw stream into pixels.

pub mod logging;
pub mod coords;
pub mod paint;
pub mod scene;
pub mod text;
pub mod render;
