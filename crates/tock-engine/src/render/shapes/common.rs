//! Shared conversions used by all shape renderers.

use resvg::tiny_skia;

use crate::paint::Color;
use crate::scene::LineCap;

// ── paint ─────────────────────────────────────────────────────────────────

/// Anti-aliased solid paint for `color`.
pub(super) fn solid_paint(color: Color) -> tiny_skia::Paint<'static> {
    let [r, g, b, a] = color.to_srgb_u8();
    let mut paint = tiny_skia::Paint::default();
    paint.set_color_rgba8(r, g, b, a);
    paint.anti_alias = true;
    paint
}

pub(crate) fn sk_color(color: Color) -> tiny_skia::Color {
    let [r, g, b, a] = color.to_srgb_u8();
    tiny_skia::Color::from_rgba8(r, g, b, a)
}

// ── stroke ────────────────────────────────────────────────────────────────

pub(super) fn stroke(width: f32, cap: LineCap) -> tiny_skia::Stroke {
    tiny_skia::Stroke {
        width,
        line_cap: match cap {
            LineCap::Butt => tiny_skia::LineCap::Butt,
            LineCap::Round => tiny_skia::LineCap::Round,
            LineCap::Square => tiny_skia::LineCap::Square,
        },
        ..tiny_skia::Stroke::default()
    }
}
