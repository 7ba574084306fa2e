//! wordsphere-cli: command line host for the word cloud
//!
//! Commands:
//! - `run`: interactive terminal rendering (q / Esc quits, space pauses)
//! - `snapshot`: headless frames as JSON lines
//! - `measure`: preferred size and ring plan for the active settings

pub mod settings;

use std::io::Write;

use anyhow::{Context, Result};
use serde::Serialize;
use wordsphere::app::CloudRunner;
use wordsphere::{MeasureSpec, RecordingBackend, RenderBackend, RingPlan};

use settings::Settings;

/// Run the cloud interactively on the current terminal
pub fn run_interactive(settings: &Settings, words: Vec<String>) -> Result<()> {
    let cloud = settings.build_cloud(words)?;
    let mut runner = CloudRunner::new(cloud, settings.terminal.cells)
        .context("failed to initialise terminal")?
        .with_tick_rate(settings.terminal.tick_rate())
        .with_background(settings.terminal.background);

    runner.run().context("terminal session failed")
}

/// Tick `ticks` times without a terminal, then write the placed labels of
/// the final frame to `out` as JSON lines
pub fn write_snapshot<W: Write>(
    settings: &Settings,
    words: Vec<String>,
    ticks: u64,
    width: f64,
    height: f64,
    out: &mut W,
) -> Result<()> {
    let mut cloud = settings.build_cloud(words)?;
    for _ in 0..ticks {
        cloud.tick();
    }

    let mut backend = RecordingBackend::new(width, height);
    backend.begin_frame()?;
    cloud.render(&mut backend);
    backend.end_frame()?;

    for placed in backend.placed() {
        serde_json::to_writer(&mut *out, placed)?;
        writeln!(out)?;
    }
    tracing::debug!(ticks, labels = backend.placed().len(), "wrote snapshot");
    Ok(())
}

/// Size report for the `measure` command
#[derive(Debug, Serialize)]
pub struct MeasureReport {
    pub width: f64,
    pub height: f64,
    pub preferred_extent: f64,
    pub labels: usize,
    pub rings: RingPlan,
}

/// Measure the cloud; a given dimension is taken as exact
pub fn measure(
    settings: &Settings,
    words: Vec<String>,
    width: Option<f64>,
    height: Option<f64>,
) -> Result<MeasureReport> {
    let cloud = settings.build_cloud(words)?;
    let spec = |value: Option<f64>| value.map_or(MeasureSpec::Unspecified, MeasureSpec::Exactly);
    let (width, height) = cloud.measure(spec(width), spec(height));

    Ok(MeasureReport {
        width,
        height,
        preferred_extent: cloud.config().preferred_extent(),
        labels: cloud.labels().len(),
        rings: cloud.ring_plan(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(list: &[&str]) -> Vec<String> {
        list.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn test_snapshot_writes_one_line_per_label() {
        let settings = Settings::default();
        let mut out = Vec::new();
        write_snapshot(&settings, words(&["a", "b", "c"]), 10, 520.0, 520.0, &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 3);

        let first: serde_json::Value = serde_json::from_str(lines[0]).unwrap();
        assert_eq!(first["command"]["text"], "a");
        assert_eq!(first["command"]["color"], "white");
        assert!(first["command"].get("shadow").is_none());
        assert!(first["bounds"]["width"].as_f64().unwrap() > 0.0);
    }

    #[test]
    fn test_snapshot_reflects_rotation() {
        let settings = Settings::default();
        let mut before = Vec::new();
        let mut after = Vec::new();
        write_snapshot(&settings, words(&["x"]), 0, 520.0, 520.0, &mut before).unwrap();
        write_snapshot(&settings, words(&["x"]), 90, 520.0, 520.0, &mut after).unwrap();
        assert_ne!(before, after);
    }

    #[test]
    fn test_snapshot_of_empty_list_is_empty() {
        let mut out = Vec::new();
        write_snapshot(&Settings::default(), Vec::new(), 5, 100.0, 100.0, &mut out).unwrap();
        assert!(out.is_empty());
    }

    #[test]
    fn test_measure_report() {
        let report = measure(&Settings::default(), settings::demo_words(), None, Some(300.0)).unwrap();
        assert_eq!(report.width, 520.0);
        assert_eq!(report.height, 300.0);
        assert_eq!(report.labels, 50);
        assert_eq!(report.rings.ring_count, 8);
    }
}
