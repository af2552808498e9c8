//! Duration chart rendering.

use std::path::{Path, PathBuf};

use anyhow::Context;
use plotters::prelude::*;

use crate::error::Result;

/// Fixed chart file name, written into the working directory.
pub const CHART_FILE: &str = "audio_duration_graph.png";

/// 10 x 5 inch canvas at 300 dpi.
const CANVAS: (u32, u32) = (3000, 1500);

/// Renders a duration series to some artifact. The pipeline only knows
/// this seam; tests substitute a recorder.
pub trait SeriesRenderer {
    fn render(&self, durations: &[f64]) -> Result<()>;
}

/// Line-with-marker chart of the sorted durations, saved as a PNG.
/// Overwrites its output unconditionally.
#[derive(Debug, Clone)]
pub struct DurationChart {
    output: PathBuf,
}

impl DurationChart {
    pub fn new(output: impl Into<PathBuf>) -> Self {
        Self {
            output: output.into(),
        }
    }
}

impl Default for DurationChart {
    fn default() -> Self {
        Self::new(CHART_FILE)
    }
}

impl SeriesRenderer for DurationChart {
    fn render(&self, durations: &[f64]) -> Result<()> {
        draw(durations, &self.output)
            .with_context(|| format!("failed to render chart to {}", self.output.display()))?;
        println!("Chart saved as {}", self.output.display());
        Ok(())
    }
}

fn draw(durations: &[f64], path: &Path) -> anyhow::Result<()> {
    let root = BitMapBackend::new(path, CANVAS).into_drawing_area();
    root.fill(&WHITE)?;

    let x_max = durations.len().max(1) as f64;
    let y_max = durations.iter().fold(1.0_f64, |acc, d| acc.max(*d));
    let (y_lo, y_hi) = (-y_max * 0.05, y_max * 1.05);

    let mut chart = ChartBuilder::on(&root)
        .caption("Audio file durations", ("sans-serif", 56))
        .margin(30)
        .x_label_area_size(90)
        .y_label_area_size(110)
        .build_cartesian_2d(-0.5..x_max, y_lo..y_hi)?;

    chart
        .configure_mesh()
        .x_desc("Clip index")
        .y_desc("Duration (s)")
        .axis_desc_style(("sans-serif", 40))
        .label_style(("sans-serif", 30))
        .light_line_style(&RGBColor(210, 210, 210))
        .draw()?;

    let points: Vec<(f64, f64)> = durations
        .iter()
        .enumerate()
        .map(|(i, &d)| (i as f64, d))
        .collect();

    chart
        .draw_series(LineSeries::new(points.iter().copied(), BLUE.stroke_width(2)))?
        .label("Audio duration")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 30, y)], &BLUE));
    chart.draw_series(points.iter().map(|&p| Circle::new(p, 6, BLUE.filled())))?;

    // Reference lines through zero on both axes.
    chart.draw_series(std::iter::once(PathElement::new(
        vec![(-0.5, 0.0), (x_max, 0.0)],
        BLACK.stroke_width(3),
    )))?;
    chart.draw_series(std::iter::once(PathElement::new(
        vec![(0.0, y_lo), (0.0, y_hi)],
        BLACK.stroke_width(3),
    )))?;

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperRight)
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .label_font(("sans-serif", 32))
        .draw()?;

    root.present()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn renders_a_nontrivial_png() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("durations.png");

        DurationChart::new(&path)
            .render(&[0.5, 2.0, 12.5, 45.0, 93.0])
            .unwrap();

        let metadata = std::fs::metadata(&path).unwrap();
        assert!(metadata.len() > 1000, "suspiciously small chart file");
    }

    #[test]
    fn empty_series_still_produces_a_chart() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("empty.png");

        DurationChart::new(&path).render(&[]).unwrap();

        assert!(path.exists());
    }

    #[test]
    fn default_output_is_the_fixed_name() {
        assert_eq!(DurationChart::default().output, Path::new(CHART_FILE));
    }
}
