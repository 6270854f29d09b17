// File: crates/accrue/src/main.rs
// Summary: Loads settings and a CSV series, runs the animation on a virtual clock and writes frames to disk.

mod cli;

use std::io;
use std::path::{Path, PathBuf};
use std::thread;
use std::time::Duration;

use accrue_core::{format_currency, theme, CsvFile, LayoutController, Settings, Surface, SvgSurface, TickOutcome};
use accrue_render_skia::{RenderOptions, SkiaSurface};
use anyhow::{Context, Result};
use clap::Parser;
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

use crate::cli::{Cli, Format};

/// A surface whose current picture can be written to a file.
trait Export: Surface {
    const EXT: &'static str;
    fn export(&mut self, path: &Path) -> Result<()>;
}

impl Export for SkiaSurface {
    const EXT: &'static str = "png";
    fn export(&mut self, path: &Path) -> Result<()> {
        self.write_png(path)
    }
}

impl Export for SvgSurface {
    const EXT: &'static str = "svg";
    fn export(&mut self, path: &Path) -> Result<()> {
        std::fs::write(path, self.document())?;
        Ok(())
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).with_writer(io::stderr).try_init();

    let mut settings = match &cli.config {
        Some(path) => Settings::from_toml_file(path)
            .with_context(|| format!("failed to load settings '{}'", path.display()))?,
        None => Settings::default(),
    };
    if let Some(csv) = &cli.csv {
        settings.data = csv.clone();
    }
    if let Some(name) = &cli.theme {
        settings.theme = name.clone();
    }
    let theme = theme::find(&settings.theme);
    if !theme.name.eq_ignore_ascii_case(&settings.theme) {
        warn!(requested = %settings.theme, "unknown theme, using {}", theme.name);
    }
    info!(data = %settings.data.display(), theme = theme.name, width = cli.width, "starting");

    std::fs::create_dir_all(&cli.out)
        .with_context(|| format!("failed to create output dir '{}'", cli.out.display()))?;

    match cli.format {
        Format::Png => run(settings, SkiaSurface::new(RenderOptions { theme, ..RenderOptions::default() }), &cli),
        Format::Svg => run(settings, SvgSurface::new(theme), &cli),
    }
}

fn frame_path(dir: &Path, index: usize, ext: &str) -> PathBuf {
    dir.join(format!("frame_{index:04}.{ext}"))
}

fn run<S: Export>(settings: Settings, surface: S, cli: &Cli) -> Result<()> {
    let source = CsvFile::new(&settings.data);
    let mut ctl = LayoutController::new(settings, source, surface);

    let mut now = Duration::ZERO;
    ctl.build(cli.width, now)?;

    let mut drawn = 0usize;
    let mut last_written = None;
    let mut pending_resize = cli.resize_at;

    while let Some(due) = ctl.next_due() {
        if due > now {
            if cli.realtime {
                thread::sleep(due - now);
            }
            now = due;
        }

        for outcome in ctl.run_until(now)? {
            let TickOutcome::Drawn { visible, .. } = outcome else {
                continue;
            };
            drawn += 1;
            if cli.every > 0 && visible % cli.every == 0 {
                let path = frame_path(&cli.out, visible, S::EXT);
                ctl.surface_mut().export(&path)?;
                debug!(path = %path.display(), "frame written");
                last_written = Some(visible);
            }
        }

        if let Some(resize) = pending_resize.filter(|r| drawn >= r.tick) {
            pending_resize = None;
            last_written = None;
            ctl.resize(resize.width, now)?;
        }
    }

    let Some(session) = ctl.session() else {
        return Ok(());
    };
    let prefix = session.visible_prefix();
    let visible = prefix.len();
    let last = prefix.last().copied();

    if visible > 0 && last_written != Some(visible) {
        let path = frame_path(&cli.out, visible, S::EXT);
        ctl.surface_mut().export(&path)?;
        info!(path = %path.display(), "final frame written");
    }

    match last {
        Some(record) => {
            let label = format_currency(&ctl.settings().currency_prefix, record.accumulate);
            println!("{} {}", record.date, label);
        }
        None => warn!("no records to draw"),
    }
    Ok(())
}
