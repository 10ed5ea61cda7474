use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tock_clock::prelude::*;
use tock_engine::render::Rasterizer;

/// Turns widget frames into PNG files.
pub struct FrameWriter {
    draw_list: DrawList,
    raster: Rasterizer,
    background: Color,
}

impl FrameWriter {
    pub fn new(viewport: Viewport, background: Color) -> Result<Self> {
        Ok(Self {
            draw_list: DrawList::new(),
            raster: Rasterizer::new(viewport).context("failed to create frame rasterizer")?,
            background,
        })
    }

    /// Paints the widget's current state into the pixmap.
    pub fn paint(&mut self, clock: &ClockWidget) {
        self.draw_list.clear();
        clock.paint(&mut Painter::new(&mut self.draw_list));

        self.raster.clear(self.background);
        self.raster.render(&mut self.draw_list);
    }

    /// Paints and writes the current state to `path`.
    pub fn write(&mut self, clock: &ClockWidget, path: &Path) -> Result<()> {
        self.paint(clock);

        let (w, h) = (self.raster.width(), self.raster.height());
        let img = image::RgbaImage::from_raw(w, h, self.raster.to_rgba8())
            .context("pixmap size does not match its pixel buffer")?;
        img.save(path)
            .with_context(|| format!("failed to write {}", path.display()))?;

        log::debug!("wrote {}", path.display());
        Ok(())
    }
}

/// `dir/frame_000042.png`
pub fn frame_path(dir: &Path, index: u64) -> PathBuf {
    dir.join(format!("frame_{index:06}.png"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frame_names_are_zero_padded() {
        assert_eq!(frame_path(Path::new("out"), 42), Path::new("out/frame_000042.png"));
    }

    #[test]
    fn painted_frame_shows_dial_and_center() {
        let mut clock = ClockWidget::new(ClockConfig::new(Time::new(3, 0, 0)));
        clock.resize(100.0, 100.0);

        let mut writer = FrameWriter::new(Viewport::new(100.0, 100.0), Color::white()).unwrap();
        writer.paint(&clock);

        // Center cap is black, a point between the cap and the dial is background.
        assert_eq!(writer.raster.pixel(50, 50), Some([0, 0, 0, 255]));
        assert_eq!(writer.raster.pixel(25, 75), Some([255, 255, 255, 255]));
        // Dial outline at 9 o'clock.
        assert_eq!(writer.raster.pixel(5, 50), Some([0, 0, 0, 255]));
    }
}
