use anyhow::{Context, Result};
use resvg::tiny_skia::Pixmap;

use crate::coords::Viewport;
use crate::paint::Color;
use crate::scene::{DrawCmd, DrawList};

use super::shapes::{circle, common, line};

/// Paints draw lists into an owned RGBA pixmap.
///
/// The pixmap is sized to the viewport (rounded up to whole pixels) and reused
/// across frames; call [`clear`](Self::clear) before each frame.
pub struct Rasterizer {
    pixmap: Pixmap,
}

impl Rasterizer {
    /// Allocates a pixmap for `viewport`.
    ///
    /// Fails for empty or non-finite viewports.
    pub fn new(viewport: Viewport) -> Result<Self> {
        anyhow::ensure!(viewport.is_valid(), "viewport has zero size: {viewport:?}");

        let width = viewport.width.ceil() as u32;
        let height = viewport.height.ceil() as u32;
        let pixmap = Pixmap::new(width, height)
            .with_context(|| format!("failed to allocate {width}x{height} pixmap"))?;

        log::debug!("rasterizer allocated {width}x{height}");
        Ok(Self { pixmap })
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.pixmap.width()
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.pixmap.height()
    }

    /// Fills the whole pixmap with `color`.
    pub fn clear(&mut self, color: Color) {
        self.pixmap.fill(common::sk_color(color));
    }

    /// Paints every item of `draw_list` in paint order.
    pub fn render(&mut self, draw_list: &mut DrawList) {
        for item in draw_list.iter_in_paint_order() {
            match &item.cmd {
                DrawCmd::Circle(cmd) => circle::draw(&mut self.pixmap, cmd),
                DrawCmd::Line(cmd) => line::draw(&mut self.pixmap, cmd),
            }
        }
    }

    /// Straight-alpha RGBA bytes of one pixel, or `None` outside the pixmap.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        // The pixmap only bounds-checks the flat index, so a column past the
        // right edge would wrap onto the next row.
        if x >= self.width() || y >= self.height() {
            return None;
        }
        let p = self.pixmap.pixel(x, y)?.demultiply();
        Some([p.red(), p.green(), p.blue(), p.alpha()])
    }

    /// Straight-alpha RGBA bytes, row-major, suitable for image encoders.
    pub fn to_rgba8(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.pixmap.pixels().len() * 4);
        for p in self.pixmap.pixels() {
            let c = p.demultiply();
            out.extend_from_slice(&[c.red(), c.green(), c.blue(), c.alpha()]);
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::Vec2;
    use crate::scene::{Border, LineCap, Stroke, ZIndex};

    fn raster(w: f32, h: f32) -> Rasterizer {
        Rasterizer::new(Viewport::new(w, h)).unwrap()
    }

    #[test]
    fn rejects_empty_viewport() {
        assert!(Rasterizer::new(Viewport::new(0.0, 10.0)).is_err());
    }

    #[test]
    fn size_rounds_up() {
        let r = raster(10.5, 3.2);
        assert_eq!((r.width(), r.height()), (11, 4));
    }

    #[test]
    fn clear_fills_every_pixel() {
        let mut r = raster(4.0, 4.0);
        r.clear(Color::white());
        assert!(r.to_rgba8().chunks(4).all(|p| p == [255, 255, 255, 255]));
    }

    #[test]
    fn solid_circle_covers_center_only() {
        let mut r = raster(40.0, 40.0);
        r.clear(Color::white());

        let mut list = DrawList::new();
        list.push_solid_circle(ZIndex::new(0), Vec2::new(20.0, 20.0), 8.0, Color::black());
        r.render(&mut list);

        assert_eq!(r.pixel(20, 20), Some([0, 0, 0, 255]));
        assert_eq!(r.pixel(2, 2), Some([255, 255, 255, 255]));
    }

    #[test]
    fn ring_leaves_interior_untouched() {
        let mut r = raster(40.0, 40.0);
        r.clear(Color::white());

        let mut list = DrawList::new();
        list.push_ring(
            ZIndex::new(0),
            Vec2::new(20.0, 20.0),
            15.0,
            Border::new(4.0, Color::black()),
        );
        r.render(&mut list);

        assert_eq!(r.pixel(20, 20), Some([255, 255, 255, 255]));
        // On the outline, straight up from the center.
        assert_eq!(r.pixel(20, 5), Some([0, 0, 0, 255]));
    }

    #[test]
    fn later_items_paint_over_earlier_ones() {
        let mut r = raster(20.0, 20.0);
        r.clear(Color::white());

        let red = Color::from_srgb_u8(255, 0, 0, 255);
        let mut list = DrawList::new();
        list.push_solid_circle(ZIndex::new(0), Vec2::new(10.0, 10.0), 6.0, Color::black());
        list.push_line(
            ZIndex::new(1),
            Vec2::new(0.0, 10.0),
            Vec2::new(20.0, 10.0),
            Stroke::new(4.0, red).with_cap(LineCap::Butt),
        );
        r.render(&mut list);

        assert_eq!(r.pixel(10, 10), Some([255, 0, 0, 255]));
    }

    #[test]
    fn out_of_bounds_pixel_is_none() {
        let r = raster(4.0, 4.0);
        assert!(r.pixel(4, 0).is_none());
        assert!(r.pixel(0, 4).is_none());
        assert!(r.pixel(3, 3).is_some());
    }

    #[test]
    fn column_past_edge_does_not_wrap_to_next_row() {
        let mut r = raster(4.0, 4.0);
        r.clear(Color::white());

        let mut list = DrawList::new();
        list.push_solid_circle(ZIndex::new(0), Vec2::new(0.5, 1.5), 0.5, Color::black());
        r.render(&mut list);

        assert_ne!(r.pixel(0, 1), Some([255, 255, 255, 255]));
        assert_eq!(r.pixel(4, 0), None);
        assert_eq!(r.pixel(4, 2), None);
    }
}
