//! Tock engine crate.
//!
//! This crate owns the renderer-agnostic pieces used by higher layers:
//! geometry, paint, the recorded draw stream, frame timing, logging and a
//! CPU rasterizer that turns a draw stream into pixels.

pub mod time;

pub mod logging;
pub mod coords;
pub mod render;
pub mod paint;
pub mod scene;
