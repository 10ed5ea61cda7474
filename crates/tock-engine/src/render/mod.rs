//! CPU rendering subsystem.
//!
//! The rasterizer consumes `scene` draw streams and paints them into an RGBA pixmap.
//! Each shape has its own renderer module under `render::shapes`.
//!
//! Convention:
//! - geometry is in logical pixels (top-left origin, +Y down), one pixel per unit
//! - shapes are anti-aliased and blended source-over in paint order

mod rasterizer;
mod shapes;

pub use rasterizer::Rasterizer;
