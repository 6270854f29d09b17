// File: crates/accrue-window/src/main.rs
// Summary: Live window host: ticks fire on wall-clock time, resizes rebuild the chart, frames are blitted via softbuffer.

use std::num::NonZeroU32;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use accrue_core::{theme, CsvFile, LayoutController, Settings, TickOutcome};
use accrue_render_skia::{RenderOptions, SkiaSurface};
use anyhow::{anyhow, Context, Result};
use clap::Parser;
use tracing::{debug, error, info};
use tracing_subscriber::EnvFilter;
use winit::dpi::PhysicalSize;
use winit::event::{Event, WindowEvent};
use winit::event_loop::{ControlFlow, EventLoop};
use winit::window::WindowBuilder;

#[derive(Parser, Debug)]
#[command(author, version, about = "Animate a cumulative CSV series in a window", long_about = None)]
struct Args {
    /// CSV with `Date` and `accumulate` columns. Overrides the config file.
    csv: Option<PathBuf>,

    /// Settings file (TOML).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Theme preset: light, dark or high-contrast-dark.
    #[arg(short, long)]
    theme: Option<String>,
}

type Controller = LayoutController<CsvFile, SkiaSurface>;

fn main() -> Result<()> {
    let args = Args::parse();
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();

    let mut settings = match &args.config {
        Some(path) => Settings::from_toml_file(path)
            .with_context(|| format!("failed to load settings '{}'", path.display()))?,
        None => Settings::default(),
    };
    if let Some(csv) = args.csv {
        settings.data = csv;
    }
    if let Some(name) = args.theme {
        settings.theme = name;
    }
    let opts = RenderOptions { theme: theme::find(&settings.theme), ..RenderOptions::default() };
    let background = pack(opts.theme.background.r, opts.theme.background.g, opts.theme.background.b);

    let event_loop = EventLoop::new();
    let window = WindowBuilder::new()
        .with_title("Accrue")
        .with_inner_size(winit::dpi::LogicalSize::new(accrue_core::types::CONTAINER_WIDTH, settings.height))
        .build(&event_loop)?;

    let context = unsafe { softbuffer::Context::new(&window) }.map_err(|e| anyhow!("softbuffer context: {e}"))?;
    let mut surface =
        unsafe { softbuffer::Surface::new(&context, &window) }.map_err(|e| anyhow!("softbuffer surface: {e}"))?;

    let source = CsvFile::new(&settings.data);
    let mut ctl: Controller = LayoutController::new(settings, source, SkiaSurface::new(opts));
    let start = Instant::now();
    let mut size = window.inner_size();
    if let Err(e) = ctl.build(size.width as f32, Duration::ZERO) {
        error!("initial build failed: {e:#}");
    }

    event_loop.run(move |event, _, cf| {
        match event {
            Event::WindowEvent { event, .. } => match event {
                WindowEvent::CloseRequested => {
                    *cf = ControlFlow::Exit;
                    return;
                }
                WindowEvent::Resized(new_size) => {
                    size = new_size;
                    match ctl.resize(size.width as f32, start.elapsed()) {
                        Ok(generation) => debug!(%generation, width = size.width, "rebuilt after resize"),
                        Err(e) => error!("rebuild failed: {e:#}"),
                    }
                    window.request_redraw();
                }
                _ => {}
            },
            Event::MainEventsCleared => match ctl.run_until(start.elapsed()) {
                Ok(outcomes) => {
                    if outcomes.iter().any(|o| matches!(o, TickOutcome::Drawn { .. })) {
                        window.request_redraw();
                    }
                    if outcomes.iter().any(|o| matches!(o, TickOutcome::Finished { .. })) {
                        info!("animation complete");
                    }
                }
                Err(e) => error!("tick failed: {e:#}"),
            },
            Event::RedrawRequested(_) => {
                if let Err(e) = present(&mut ctl, &mut surface, size, background) {
                    error!("present failed: {e:#}");
                }
            }
            _ => {}
        }

        if *cf != ControlFlow::Exit {
            *cf = match ctl.next_due() {
                Some(due) => ControlFlow::WaitUntil(start + due),
                None => ControlFlow::Wait,
            };
        }
    });
}

/// softbuffer pixel: 0RGB in a u32.
fn pack(r: u8, g: u8, b: u8) -> u32 {
    ((r as u32) << 16) | ((g as u32) << 8) | b as u32
}

fn present(
    ctl: &mut Controller,
    surface: &mut softbuffer::Surface,
    size: PhysicalSize<u32>,
    background: u32,
) -> Result<()> {
    let (Some(win_w), Some(win_h)) = (NonZeroU32::new(size.width), NonZeroU32::new(size.height)) else {
        return Ok(());
    };
    surface.resize(win_w, win_h).map_err(|e| anyhow!("resize buffer: {e}"))?;
    let (rgba, w, h, stride) = ctl.surface_mut().rgba8()?;

    let mut frame = surface.buffer_mut().map_err(|e| anyhow!("buffer: {e}"))?;
    frame.fill(background);
    let (win_w, win_h) = (win_w.get() as usize, win_h.get() as usize);
    let cols = (w as usize).min(win_w);
    for y in 0..(h as usize).min(win_h) {
        let src = &rgba[y * stride..y * stride + cols * 4];
        let dst = &mut frame[y * win_w..y * win_w + cols];
        for (out, px) in dst.iter_mut().zip(src.chunks_exact(4)) {
            *out = pack(px[0], px[1], px[2]);
        }
    }
    frame.present().map_err(|e| anyhow!("present: {e}"))?;
    Ok(())
}
