use resvg::tiny_skia::{PathBuilder, Pixmap, Transform};

use crate::scene::LineCmd;

use super::common::{solid_paint, stroke};

/// Renderer for `DrawCmd::Line`.
///
/// Zero-width or transparent strokes are skipped.
pub(crate) fn draw(pixmap: &mut Pixmap, cmd: &LineCmd) {
    let s = &cmd.stroke;
    if !(s.width > 0.0) || s.color.is_transparent() || !cmd.from.is_finite() || !cmd.to.is_finite()
    {
        return;
    }

    let mut pb = PathBuilder::new();
    pb.move_to(cmd.from.x, cmd.from.y);
    pb.line_to(cmd.to.x, cmd.to.y);
    let Some(path) = pb.finish() else {
        log::debug!("line renderer: degenerate segment at {:?}; skipped", cmd.from);
        return;
    };

    pixmap.stroke_path(
        &path,
        &solid_paint(s.color),
        &stroke(s.width, s.cap),
        Transform::identity(),
        None,
    );
}
