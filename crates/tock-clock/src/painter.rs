use tock_engine::coords::Vec2;
use tock_engine::paint::Color;
use tock_engine::scene::{Border, DrawList, Stroke, ZIndex};

/// Drawing surface passed to [`ClockRenderer::render`](crate::renderer::ClockRenderer::render).
///
/// Wraps the engine's `DrawList` with a small shape API. Each call records one
/// command on its own z-layer, so shapes stack in the order they are drawn.
/// Style is passed per call; the painter keeps no paint state between shapes.
pub struct Painter<'a> {
    draw_list: &'a mut DrawList,
    z: i32,
}

impl<'a> Painter<'a> {
    pub fn new(draw_list: &'a mut DrawList) -> Self {
        Self { draw_list, z: 0 }
    }

    // ── drawing ───────────────────────────────────────────────────────────

    /// Outline-only circle.
    pub fn stroke_circle(&mut self, center: Vec2, radius: f32, border: Border) {
        let z = self.next_z();
        self.draw_list.push_ring(z, center, radius, border);
    }

    /// Solid filled circle.
    pub fn fill_solid_circle(&mut self, center: Vec2, radius: f32, color: Color) {
        let z = self.next_z();
        self.draw_list.push_solid_circle(z, center, radius, color);
    }

    /// Straight line segment.
    pub fn line(&mut self, from: Vec2, to: Vec2, stroke: Stroke) {
        let z = self.next_z();
        self.draw_list.push_line(z, from, to, stroke);
    }

    // ── internal ──────────────────────────────────────────────────────────

    #[inline]
    fn next_z(&mut self) -> ZIndex {
        let z = ZIndex::new(self.z);
        self.z += 1;
        z
    }
}
