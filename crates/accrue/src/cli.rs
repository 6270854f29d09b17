// File: crates/accrue/src/cli.rs
// Summary: Command-line arguments.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

#[derive(Parser, Debug)]
#[command(author, version, about = "Animate a cumulative CSV series into chart frames", long_about = None)]
pub(crate) struct Cli {
    /// CSV with `Date` and `accumulate` columns. Overrides the config file.
    pub(crate) csv: Option<PathBuf>,

    /// Container width in pixels.
    #[arg(short, long, default_value_t = accrue_core::types::CONTAINER_WIDTH)]
    pub(crate) width: f32,

    /// Directory that receives the frames.
    #[arg(short, long, default_value = "target/out")]
    pub(crate) out: PathBuf,

    #[arg(short, long, value_enum, default_value_t = Format::Png)]
    pub(crate) format: Format,

    /// Write every n-th frame. 0 writes only the final frame.
    #[arg(short, long, default_value_t = 0)]
    pub(crate) every: usize,

    /// Settings file (TOML).
    #[arg(short, long)]
    pub(crate) config: Option<PathBuf>,

    /// Theme preset: light, dark or high-contrast-dark.
    #[arg(short, long)]
    pub(crate) theme: Option<String>,

    /// Sleep between ticks instead of running on a virtual clock.
    #[arg(long)]
    pub(crate) realtime: bool,

    /// Resize the container after the given number of drawn frames, as `<tick>:<width>`.
    #[arg(long, value_parser(parse_resize))]
    pub(crate) resize_at: Option<ResizeAt>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub(crate) enum Format {
    Png,
    Svg,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct ResizeAt {
    pub(crate) tick: usize,
    pub(crate) width: f32,
}

fn parse_resize(s: &str) -> Result<ResizeAt, String> {
    let (tick, width) = s.split_once(':').ok_or_else(|| format!("expected <tick>:<width>, got '{s}'"))?;
    let tick = tick.trim().parse::<usize>().map_err(|e| format!("bad tick '{tick}': {e}"))?;
    let width = width.trim().parse::<f32>().map_err(|e| format!("bad width '{width}': {e}"))?;
    if !width.is_finite() || width < 0.0 {
        return Err(format!("width must be a non-negative number, got {width}"));
    }
    Ok(ResizeAt { tick, width })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resize_spec_parses() {
        assert_eq!(parse_resize("12:640").unwrap(), ResizeAt { tick: 12, width: 640.0 });
        assert_eq!(parse_resize(" 0 : 320.5 ").unwrap(), ResizeAt { tick: 0, width: 320.5 });
        assert!(parse_resize("12").is_err());
        assert!(parse_resize("x:640").is_err());
        assert!(parse_resize("3:-1").is_err());
    }

    #[test]
    fn args_parse() {
        let cli = Cli::try_parse_from(["accrue", "data.csv", "--format", "svg", "--every", "5", "--resize-at", "3:400"])
            .unwrap();
        assert_eq!(cli.csv, Some(PathBuf::from("data.csv")));
        assert_eq!(cli.format, Format::Svg);
        assert_eq!(cli.every, 5);
        assert_eq!(cli.width, 960.0);
        assert_eq!(cli.resize_at, Some(ResizeAt { tick: 3, width: 400.0 }));
    }
}
