//! Time subsystem.
//!
//! Provides stable, testable frame timing utilities without coupling to a host loop.
//! Intended usage:
//! - one `FrameClock` per animated surface
//! - call `tick()` once per frame to obtain `FrameTime`
//! - use `FrameClock::fixed` when frames are simulated rather than presented

mod frame_clock;

pub use frame_clock::{FrameClock, FrameTime};
