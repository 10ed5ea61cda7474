//! Tock clock: an animated analog clock face on top of `tock-engine`.
//!
//! The hands start at 12 o'clock and sweep forward to a configured time of day.
//! Time-to-angle conversion and the sweep are pure; drawing goes through a
//! [`Painter`](painter::Painter) into an engine `DrawList`.
//!
//! # Quick start
//!
//! ```rust,ignore
//! use tock_clock::prelude::*;
//!
//! let mut clock = ClockWidget::new(ClockConfig::new(Time::new(10, 8, 42)));
//! clock.resize(320.0, 240.0);
//!
//! let mut draw_list = DrawList::new();
//! while clock.tick(Duration::from_millis(16)) {
//!     draw_list.clear();
//!     clock.paint(&mut Painter::new(&mut draw_list));
//!     // Pass draw_list to a renderer.
//! }
//! ```

pub mod angles;
pub mod animator;
pub mod config;
pub mod painter;
pub mod renderer;
pub mod time;
pub mod widget;

/// Everything a host needs to embed the clock.
pub mod prelude {
    pub use crate::angles::{convert, TimeDegree};
    pub use crate::animator::{interpolate, AnimationState, Easing, HandAnimator};
    pub use crate::config::{ClockColors, ClockConfig, ConfigError};
    pub use crate::painter::Painter;
    pub use crate::renderer::{ClockRenderer, DialGeometry};
    pub use crate::time::Time;
    pub use crate::widget::ClockWidget;

    pub use std::time::Duration;
    pub use tock_engine::coords::{Vec2, Viewport};
    pub use tock_engine::paint::Color;
    pub use tock_engine::scene::DrawList;
}
