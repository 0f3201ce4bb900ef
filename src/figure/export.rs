//! Export of figure data to files that never overwrite earlier exports.

use super::{Figure, FigureContent, Image, PlotMode};
use crate::error::{RdplotError, Result};
use std::fmt;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// File format of exported figures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExportFormat {
    /// Figure data as CSV.
    #[default]
    Csv,
    /// Drawn figure as SVG.
    Svg,
}

impl ExportFormat {
    /// File extension.
    pub fn extension(self) -> &'static str {
        match self {
            Self::Csv => "csv",
            Self::Svg => "svg",
        }
    }
}

impl FromStr for ExportFormat {
    type Err = RdplotError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "csv" => Ok(Self::Csv),
            "svg" => Ok(Self::Svg),
            other => Err(RdplotError::InvalidConfig(format!("unknown export format '{}'", other))),
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

/// First free path `<dir>/<stem>-<mode>-<n>.<extension>`, counting `n` from 1.
///
/// `source` is the recording the figure was made from; its file stem names
/// the export.
pub fn export_path(dir: &Path, source: &Path, mode: PlotMode, extension: &str) -> PathBuf {
    let stem = source
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "figure".to_string());

    let mut count = 1;
    loop {
        let path = dir.join(format!("{}-{}-{}.{}", stem, mode.slug(), count, extension));
        if !path.exists() {
            return path;
        }
        count += 1;
    }
}

/// Write the data of `figure` as CSV.
///
/// Lines become `position,value` records, grids and greyscale images one
/// record per row, RGB images one `#rrggbb` cell per pixel.
pub fn write_figure_csv(figure: &Figure, writer: impl Write) -> Result<()> {
    let mut wtr = csv::WriterBuilder::new().flexible(true).from_writer(writer);

    match &figure.content {
        FigureContent::Line(values) => {
            for (i, v) in values.iter().enumerate() {
                wtr.write_record([i.to_string(), v.to_string()])?;
            }
        }
        FigureContent::Grid(grid) => {
            for row in grid.z.rows() {
                wtr.write_record(row.iter().map(|v| v.to_string()))?;
            }
        }
        FigureContent::Image(Image::Grey(raster)) => {
            for row in raster.rows() {
                wtr.write_record(row.iter().map(|v| v.to_string()))?;
            }
        }
        FigureContent::Image(Image::Rgb(raster)) => {
            for row in raster.outer_iter() {
                wtr.write_record(
                    row.outer_iter()
                        .map(|px| format!("#{:02x}{:02x}{:02x}", px[0], px[1], px[2])),
                )?;
            }
        }
    }

    wtr.flush()?;
    Ok(())
}

/// Write `figure` to the first free CSV path in `dir`, creating `dir` if needed.
pub fn export_figure(figure: &Figure, dir: &Path, source: &Path) -> Result<PathBuf> {
    fs::create_dir_all(dir)?;
    let path = export_path(dir, source, figure.mode, ExportFormat::Csv.extension());
    let file = File::create(&path).map_err(|e| RdplotError::file_open(path.clone(), e))?;
    write_figure_csv(figure, file)?;

    tracing::info!(path = %path.display(), mode = figure.mode.name(), "exported figure");
    Ok(path)
}
