use resvg::tiny_skia::{FillRule, PathBuilder, Pixmap, Transform};

use crate::scene::CircleCmd;

use super::common::{solid_paint, stroke};

/// Renderer for `DrawCmd::Circle`.
///
/// The interior is filled first, then the border is stroked centered on the outline.
/// Circles with a non-positive or non-finite radius are skipped.
pub(crate) fn draw(pixmap: &mut Pixmap, cmd: &CircleCmd) {
    if !(cmd.radius > 0.0 && cmd.radius.is_finite()) || !cmd.center.is_finite() {
        return;
    }

    let Some(path) = PathBuilder::from_circle(cmd.center.x, cmd.center.y, cmd.radius) else {
        log::debug!("circle renderer: degenerate path for {:?}; skipped", cmd.center);
        return;
    };

    if let Some(color) = cmd.paint.visible_color() {
        pixmap.fill_path(
            &path,
            &solid_paint(color),
            FillRule::Winding,
            Transform::identity(),
            None,
        );
    }

    if let Some(border) = &cmd.border {
        if border.width > 0.0 && !border.color.is_transparent() {
            pixmap.stroke_path(
                &path,
                &solid_paint(border.color),
                &stroke(border.width, Default::default()),
                Transform::identity(),
                None,
            );
        }
    }
}
