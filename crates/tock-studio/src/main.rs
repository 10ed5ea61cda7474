mod frames;

use std::cell::Cell;
use std::path::PathBuf;
use std::rc::Rc;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use tock_clock::prelude::*;
use tock_engine::logging::{init_logging, LoggingConfig};
use tock_engine::time::FrameClock;

use frames::{frame_path, FrameWriter};

/// Animate an analog clock sweeping to a time of day and write the result as PNG.
#[derive(Parser, Debug)]
#[command(name = "tock-studio", version, about)]
struct Args {
    #[arg(long)]
    hour: Option<i32>,

    #[arg(long)]
    minute: Option<i32>,

    #[arg(long)]
    second: Option<i32>,

    /// Clock option as NAME=VALUE, e.g. colorHourHand=#c03030 or duration=5 (repeatable)
    #[arg(short = 'o', long = "option", value_name = "NAME=VALUE")]
    options: Vec<String>,

    #[arg(long, default_value_t = 240.0)]
    width: f32,

    #[arg(long, default_value_t = 240.0)]
    height: f32,

    /// Animation ticks per second
    #[arg(long, default_value_t = 60)]
    fps: u32,

    /// Tick on the wall clock instead of a simulated timeline
    #[arg(long)]
    realtime: bool,

    /// Write every redrawn frame into this directory
    #[arg(long)]
    frames_dir: Option<PathBuf>,

    /// Only keep every Nth frame written to --frames-dir
    #[arg(long, default_value_t = 1)]
    frame_stride: u64,

    #[arg(long, default_value = "#ffffff")]
    background: String,

    /// Final frame
    #[arg(long, default_value = "clock.png")]
    out: PathBuf,

    /// Log filter in env_logger syntax (RUST_LOG wins when set)
    #[arg(long, default_value = "info")]
    log: String,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(LoggingConfig::with_filter(&args.log));

    let config = build_config(&args)?;
    let background = Color::from_hex(&args.background)
        .with_context(|| format!("invalid --background '{}'", args.background))?;
    let viewport = Viewport::new(args.width, args.height);

    let dirty = Rc::new(Cell::new(true));
    let mut clock = ClockWidget::new(config).on_redraw({
        let dirty = Rc::clone(&dirty);
        move || dirty.set(true)
    });
    clock.resize(viewport.width, viewport.height);

    let mut writer = FrameWriter::new(viewport, background)?;
    if let Some(dir) = &args.frames_dir {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("failed to create {}", dir.display()))?;
    }

    run(&args, &mut clock, &mut writer, &dirty)?;

    writer.write(&clock, &args.out)?;
    log::info!("final frame written to {}", args.out.display());
    Ok(())
}

fn build_config(args: &Args) -> Result<ClockConfig> {
    let mut config = ClockConfig::default();
    if let Some(h) = args.hour {
        config.time.hour = h;
    }
    if let Some(m) = args.minute {
        config.time.minute = m;
    }
    if let Some(s) = args.second {
        config.time.second = s;
    }
    for option in &args.options {
        config
            .apply_assignment(option)
            .with_context(|| format!("bad --option '{option}'"))?;
    }
    Ok(config)
}

/// Drives the widget until the sweep completes.
fn run(
    args: &Args,
    clock: &mut ClockWidget,
    writer: &mut FrameWriter,
    dirty: &Cell<bool>,
) -> Result<()> {
    let fps = args.fps.max(1);
    let interval = std::time::Duration::from_secs(1) / fps;
    let mut frame_clock = if args.realtime {
        FrameClock::new()
    } else {
        FrameClock::fixed_fps(fps)
    };
    let stride = args.frame_stride.max(1);

    let started = Instant::now();
    let mut written = 0u64;
    let mut last_decile = 0u32;

    if let Some(dir) = &args.frames_dir {
        writer.write(clock, &frame_path(dir, 0))?;
        written += 1;
    }

    while clock.is_animating() {
        let tick_start = Instant::now();
        let ft = frame_clock.tick();
        clock.tick(ft.dt);

        if dirty.replace(false) {
            if let Some(dir) = &args.frames_dir {
                let index = ft.frame_index + 1;
                if index % stride == 0 || !clock.is_animating() {
                    writer.write(clock, &frame_path(dir, index))?;
                    written += 1;
                }
            }
        }

        let decile = (clock.animator().progress() * 10.0) as u32;
        if decile > last_decile {
            last_decile = decile;
            log::info!("sweep {}% ({:?} animated)", decile * 10, ft.elapsed);
        }

        if args.realtime {
            std::thread::sleep(interval.saturating_sub(tick_start.elapsed()));
        }
    }

    log::info!(
        "sweep finished in {:.2?} wall time, {written} frame(s) written",
        started.elapsed()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(argv: &[&str]) -> ClockConfig {
        let args = Args::try_parse_from(std::iter::once("tock-studio").chain(argv.iter().copied()))
            .unwrap();
        build_config(&args).unwrap()
    }

    #[test]
    fn time_flags_set_the_clock() {
        let c = config(&["--hour", "3", "--minute", "15", "--second", "9"]);
        assert_eq!(c.time, Time::new(3, 15, 9));
    }

    #[test]
    fn options_apply_after_time_flags() {
        let c = config(&["--hour", "3", "-o", "hour=7", "--option", "minute=20"]);
        assert_eq!(c.time, Time::new(7, 20, 0));
    }

    #[test]
    fn bad_option_is_an_error() {
        let args = Args::try_parse_from(["tock-studio", "-o", "hour"]).unwrap();
        assert!(build_config(&args).is_err());
    }
}
