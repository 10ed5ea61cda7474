use tock_engine::coords::{Rect, Vec2, Viewport};
use tock_engine::paint::Color;
use tock_engine::scene::{Border, LineCap, Stroke};

use crate::animator::AnimationState;
use crate::config::ClockColors;
use crate::painter::Painter;

/// Dial radius as a fraction of half the square bound; the rest is the inset
/// reserved for the indicator dots.
pub const RADIUS_FACTOR: f32 = 0.9;
pub const DIAL_STROKE_WIDTH: f32 = 5.0;
pub const INDICATOR_COUNT: u32 = 12;
pub const INDICATOR_STEP_DEG: f32 = 360.0 / INDICATOR_COUNT as f32;
/// Center cap radius as a fraction of the dial radius.
pub const CENTER_FACTOR: f32 = 0.1;

/// Static shape of one hand.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct HandStyle {
    /// Distance of the tip below the top of the dial, as a fraction of the radius.
    /// The tip sits at `top + radius * reach + inset` before rotation.
    pub reach: f32,
    pub width: f32,
}

pub const SECOND_HAND: HandStyle = HandStyle { reach: 0.1, width: 5.0 };
pub const MINUTE_HAND: HandStyle = HandStyle { reach: 0.3, width: 7.5 };
pub const HOUR_HAND: HandStyle = HandStyle { reach: 0.5, width: 10.0 };

/// Layout of the dial inside the current bound.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct DialGeometry {
    /// Square drawing area, anchored at the viewport origin.
    pub bounds: Rect,
    pub center: Vec2,
    pub radius: f32,
    /// Space between the dial outline and the edge of `bounds`.
    pub inset: f32,
}

impl DialGeometry {
    pub fn for_viewport(viewport: Viewport) -> Self {
        let bounds = viewport.rect().square_at_origin();
        let center = bounds.center();
        let half = bounds.size.x / 2.0;
        let radius = half * RADIUS_FACTOR;

        Self { bounds, center, radius, inset: half - radius }
    }

    /// Position of indicator `index` (1-based; 12 sits at 12 o'clock).
    pub fn indicator_center(&self, index: u32) -> Vec2 {
        let top = Vec2::new(self.center.x, self.bounds.origin.y + self.inset);
        top.rotated_about(self.center, INDICATOR_STEP_DEG * index as f32)
    }

    pub fn indicator_radius(&self) -> f32 {
        self.inset / 2.0
    }

    /// Tip of a hand rotated by `angle` degrees.
    pub fn hand_tip(&self, hand: HandStyle, angle: f32) -> Vec2 {
        let tip = Vec2::new(
            self.center.x,
            self.bounds.origin.y + self.radius * hand.reach + self.inset,
        );
        tip.rotated_about(self.center, angle)
    }

    pub fn center_radius(&self) -> f32 {
        self.radius * CENTER_FACTOR
    }
}

/// Draws the clock face for a given [`AnimationState`].
///
/// Draw order: dial, 12 indicators, second, minute and hour hands, center cap.
/// The output depends only on the colors, the last resize and the state passed in.
#[derive(Debug, Clone)]
pub struct ClockRenderer {
    colors: ClockColors,
    geometry: DialGeometry,
}

impl ClockRenderer {
    pub fn new(colors: ClockColors) -> Self {
        Self {
            colors,
            geometry: DialGeometry::for_viewport(Viewport::default()),
        }
    }

    /// Recomputes the square bound from the host's drawing area.
    pub fn resize(&mut self, viewport: Viewport) {
        self.geometry = DialGeometry::for_viewport(viewport);
        log::debug!(
            "clock resized to {}x{}: radius {}",
            viewport.width,
            viewport.height,
            self.geometry.radius
        );
    }

    #[inline]
    pub fn geometry(&self) -> DialGeometry {
        self.geometry
    }

    #[inline]
    pub fn colors(&self) -> &ClockColors {
        &self.colors
    }

    pub fn render(&self, painter: &mut Painter<'_>, state: &AnimationState) {
        let g = &self.geometry;

        painter.stroke_circle(
            g.center,
            g.radius,
            Border::new(DIAL_STROKE_WIDTH, self.colors.clock),
        );

        for i in 1..=INDICATOR_COUNT {
            painter.fill_solid_circle(
                g.indicator_center(i),
                g.indicator_radius(),
                self.colors.indicators,
            );
        }

        self.hand(painter, SECOND_HAND, state.angle_seconds, self.colors.second_hand);
        self.hand(painter, MINUTE_HAND, state.angle_minutes, self.colors.minute_hand);
        self.hand(painter, HOUR_HAND, state.angle_hours, self.colors.hour_hand);

        painter.fill_solid_circle(g.center, g.center_radius(), self.colors.clock);
    }

    fn hand(
        &self,
        painter: &mut Painter<'_>,
        style: HandStyle,
        angle: f32,
        color: Color,
    ) {
        let tip = self.geometry.hand_tip(style, angle);
        painter.line(
            self.geometry.center,
            tip,
            Stroke::new(style.width, color).with_cap(LineCap::Round),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tock_engine::scene::{DrawCmd, DrawList};

    fn close(a: Vec2, b: Vec2) -> bool {
        (a - b).length() < 1e-3
    }

    fn render(renderer: &ClockRenderer, state: AnimationState) -> DrawList {
        let mut list = DrawList::new();
        renderer.render(&mut Painter::new(&mut list), &state);
        list
    }

    fn sized(w: f32, h: f32) -> ClockRenderer {
        let mut r = ClockRenderer::new(ClockColors::default());
        r.resize(Viewport::new(w, h));
        r
    }

    // ── geometry ──────────────────────────────────────────────────────────

    #[test]
    fn bound_is_shorter_side() {
        let g = sized(200.0, 100.0).geometry();
        assert_eq!(g.bounds, Rect::new(0.0, 0.0, 100.0, 100.0));
        assert_eq!(g.center, Vec2::new(50.0, 50.0));
        assert!((g.radius - 45.0).abs() < 1e-4);
        assert!((g.inset - 5.0).abs() < 1e-4);
    }

    #[test]
    fn hand_reach_leaves_expected_lengths() {
        let g = sized(100.0, 100.0).geometry();
        // Unrotated hands point straight up; length = radius * (1 - reach).
        assert!(close(g.hand_tip(SECOND_HAND, 0.0), Vec2::new(50.0, 9.5)));
        assert!(close(g.hand_tip(MINUTE_HAND, 0.0), Vec2::new(50.0, 18.5)));
        assert!(close(g.hand_tip(HOUR_HAND, 0.0), Vec2::new(50.0, 27.5)));
    }

    #[test]
    fn hand_rotates_clockwise() {
        let g = sized(100.0, 100.0).geometry();
        // Hour hand length 22.5 pointing at 3 o'clock.
        assert!(close(g.hand_tip(HOUR_HAND, 90.0), Vec2::new(72.5, 50.0)));
    }

    #[test]
    fn twelfth_indicator_sits_at_top_of_dial() {
        let g = sized(100.0, 100.0).geometry();
        assert!(close(g.indicator_center(12), Vec2::new(50.0, 5.0)));
        assert!(close(g.indicator_center(3), Vec2::new(95.0, 50.0)));
        assert!((g.indicator_radius() - 2.5).abs() < 1e-4);
    }

    // ── draw stream ───────────────────────────────────────────────────────

    #[test]
    fn draws_dial_indicators_hands_and_center_in_order() {
        let list = render(&sized(200.0, 100.0), AnimationState::ZERO);
        let items = list.items();
        assert_eq!(items.len(), 1 + 12 + 3 + 1);

        let DrawCmd::Circle(dial) = &items[0].cmd else { panic!("dial must be a circle") };
        assert!((dial.radius - 45.0).abs() < 1e-4);
        assert!(dial.border.is_some());

        assert!(items[1..13].iter().all(|i| matches!(i.cmd, DrawCmd::Circle(_))));

        let widths: Vec<f32> = items[13..16]
            .iter()
            .map(|i| match &i.cmd {
                DrawCmd::Line(l) => l.stroke.width,
                DrawCmd::Circle(_) => panic!("hands must be lines"),
            })
            .collect();
        assert!(widths[0] < widths[1] && widths[1] < widths[2]);

        let DrawCmd::Circle(cap) = &items[16].cmd else { panic!("center must be a circle") };
        assert!((cap.radius - 4.5).abs() < 1e-4);
        assert!(cap.border.is_none());
        // Drawn last, so it is on top.
        assert!(items.iter().all(|i| i.key <= items[16].key));
    }

    #[test]
    fn hands_use_their_own_colors() {
        let red = Color::from_srgb_u8(255, 0, 0, 255);
        let green = Color::from_srgb_u8(0, 255, 0, 255);
        let blue = Color::from_srgb_u8(0, 0, 255, 255);
        let mut r = ClockRenderer::new(ClockColors {
            second_hand: red,
            minute_hand: green,
            hour_hand: blue,
            ..ClockColors::default()
        });
        r.resize(Viewport::new(100.0, 100.0));

        let list = render(&r, AnimationState::ZERO);
        let line_colors: Vec<Color> = list
            .items()
            .iter()
            .filter_map(|i| match &i.cmd {
                DrawCmd::Line(l) => Some(l.stroke.color),
                DrawCmd::Circle(_) => None,
            })
            .collect();
        assert_eq!(line_colors, vec![red, green, blue]);
    }

    #[test]
    fn rendering_twice_is_identical() {
        let r = sized(200.0, 100.0);
        let state = AnimationState { angle_seconds: 123.0, angle_minutes: 45.0, angle_hours: 6.0 };
        assert_eq!(render(&r, state), render(&r, state));
    }

    #[test]
    fn dial_stroke_does_not_inherit_hand_width() {
        let r = sized(100.0, 100.0);
        let first = render(&r, AnimationState::ZERO);
        let second = render(&r, AnimationState::ZERO);
        for list in [first, second] {
            let DrawCmd::Circle(dial) = &list.items()[0].cmd else { panic!() };
            assert_eq!(dial.border.as_ref().map(|b| b.width), Some(DIAL_STROKE_WIDTH));
        }
    }

    #[test]
    fn zero_size_is_safe() {
        let r = ClockRenderer::new(ClockColors::default());
        let list = render(&r, AnimationState::ZERO);
        let DrawCmd::Circle(dial) = &list.items()[0].cmd else { panic!() };
        assert_eq!(dial.radius, 0.0);
    }
}
