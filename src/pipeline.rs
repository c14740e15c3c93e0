//! Single-shot batch run: sample, rasterize, encode, persist.

use log::info;

use crate::bmp::encode_bmp_to_vec;
use crate::config::PlotConfig;
use crate::error::{Error, Result};
use crate::output::OutputRotation;
use crate::plot::render_plot;

/// What a run produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub width: u32,
    pub height: u32,
    pub samples: usize,
    pub control_points: usize,
    pub bytes_written: usize,
}

/// Render the configured plot and write it with backup rotation.
pub fn run(config: &PlotConfig) -> Result<RunSummary> {
    let buf = render_plot(config)?;
    let bytes = encode_bmp_to_vec(&buf).map_err(|e| Error::io(&config.output, e))?;

    OutputRotation::new(&config.output, &config.backup).write(&bytes)?;

    let summary = RunSummary {
        width: buf.width(),
        height: buf.height(),
        samples: config.resolution,
        control_points: config.control_points.len(),
        bytes_written: bytes.len(),
    };
    info!(
        "plotted degree-{} curve with {} samples on {}x{} canvas",
        summary.control_points - 1,
        summary.samples,
        summary.width,
        summary.height
    );
    Ok(summary)
}
