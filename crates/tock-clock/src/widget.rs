use std::time::Duration;

use tock_engine::coords::Viewport;

use crate::angles::TimeDegree;
use crate::animator::{AnimationState, HandAnimator};
use crate::config::ClockConfig;
use crate::painter::Painter;
use crate::renderer::ClockRenderer;

/// Animated clock face driven by a host loop.
///
/// The host owns the timer and the screen. It reports resizes, calls [`tick`] at
/// its frame interval and calls [`paint`] when it composes a frame. The widget
/// asks for a repaint through the callback registered with [`on_redraw`], once
/// per tick that moved the hands.
///
/// # Example
/// ```rust,ignore
/// let mut clock = ClockWidget::new(ClockConfig::new(Time::new(3, 0, 0)))
///     .on_redraw(|| window.request_redraw());
/// clock.resize(640.0, 480.0);
/// // per timer tick:
/// clock.tick(frame.dt);
/// ```
///
/// [`tick`]: Self::tick
/// [`paint`]: Self::paint
/// [`on_redraw`]: Self::on_redraw
pub struct ClockWidget {
    animator: HandAnimator,
    renderer: ClockRenderer,
    state: AnimationState,
    on_redraw: Option<Box<dyn FnMut()>>,
}

impl ClockWidget {
    pub fn new(config: ClockConfig) -> Self {
        let targets = TimeDegree::from(config.time);
        let animator = HandAnimator::new(targets, config.animation_duration())
            .with_easing(config.easing);
        let state = animator.state();

        log::info!(
            "clock set to {:02}:{:02}:{:02}, sweep {:?} ({:?})",
            config.time.hour,
            config.time.minute,
            config.time.second,
            animator.duration(),
            config.easing,
        );

        Self {
            animator,
            renderer: ClockRenderer::new(config.colors),
            state,
            on_redraw: None,
        }
    }

    /// Registers the redraw callback, replacing any previous one.
    pub fn on_redraw(mut self, f: impl FnMut() + 'static) -> Self {
        self.on_redraw = Some(Box::new(f));
        self
    }

    /// Resize notification from the host.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.renderer.resize(Viewport::new(width, height));
    }

    /// Advances the sweep by `dt`.
    ///
    /// Returns `true` when the hands moved and a redraw was requested.
    pub fn tick(&mut self, dt: Duration) -> bool {
        let Some(state) = self.animator.advance(dt) else {
            return false;
        };

        self.state = state;
        if self.animator.is_finished() {
            log::info!("clock sweep complete");
        }
        if let Some(f) = self.on_redraw.as_mut() {
            f();
        }
        true
    }

    /// Draws the current state.
    pub fn paint(&self, painter: &mut Painter<'_>) {
        self.renderer.render(painter, &self.state);
    }

    #[inline]
    pub fn state(&self) -> AnimationState {
        self.state
    }

    #[inline]
    pub fn is_animating(&self) -> bool {
        !self.animator.is_finished()
    }

    #[inline]
    pub fn animator(&self) -> &HandAnimator {
        &self.animator
    }

    #[inline]
    pub fn renderer(&self) -> &ClockRenderer {
        &self.renderer
    }
}
