mod crossing;
mod error;
mod pipeline;
mod plot;
mod reader;
mod signal;
use std::path::{Path, PathBuf};
use anyhow::{Context, Result};
use plot::PlotStyle;
const OUTPUT_FILE: &str = "signals.png";
const STYLE_FILE: &str = "plotstyle.json";
/// Signal files live in the parent of the working directory, matching how
/// the plotting scripts were run from a subdirectory of the data.
fn input_dir() -> Result<PathBuf> {
    let cwd = std::env::current_dir().context("cannot determine working directory")?;
    Ok(cwd.parent().map(Path::to_path_buf).unwrap_or(cwd))
}
fn load_style(dir: &Path) -> Result<PlotStyle> {
    let path = dir.join(STYLE_FILE);
    if !path.exists() {
        return Ok(PlotStyle::default());
    }
    let text = std::fs::read_to_string(&path)
        .with_context(|| format!("cannot read {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("cannot parse {}", path.display()))
}
fn main() -> Result<()> {
    env_logger::init();
    let dir = input_dir()?;
    log::info!("scanning {} for signal files", dir.display());
    let signals = pipeline::collect_signals(&dir)?;
    for signal in &signals {
        log::info!(
            "{}: {} points, {} on the zero line",
            signal.name,
            signal.points.len(),
            signal.zero_points().count()
        );
    }
    let style = load_style(&dir)?;
    let png = plot::render_signals_png(&signals, &style)?;
    std::fs::write(OUTPUT_FILE, &png).with_context(|| format!("cannot write {OUTPUT_FILE}"))?;
    log::info!("wrote {OUTPUT_FILE} ({} signals)", signals.len());
    Ok(())
}
