//! rdplot - project recorded N-dimensional simulation data into figures.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use rdplot::data::{read_recording, Recording};
use rdplot::figure::{
    export_figure, export_figure_svg, plot_snapshot, plot_snapshot_sequence, plot_time_course,
    write_figure_csv, AxisLabels, ExportFormat, Figure, FigureContent, PlotRequest, PlotStyle,
};
use rdplot::projection::{all_candidates, build_projection_choices, Aggregation, ProjectionChoice};
use rdplot::util::{LineStyle, PlotConfig, DEFAULT_COLOR};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[derive(Parser, Debug)]
#[command(name = "rdplot")]
#[command(about = "Project recorded N-dimensional data into plot-ready figures", long_about = None)]
struct Args {
    /// Enable logging to specified file
    #[arg(long, global = true)]
    log: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Show the header, size and projection choices of a recording
    Info {
        /// Recorded CSV file
        file: PathBuf,
    },
    /// Figure of a single time step
    Snapshot {
        /// Recorded CSV file
        file: PathBuf,
        /// Time step to show
        #[arg(long, default_value_t = 0)]
        step: usize,
        #[command(flatten)]
        plot: PlotArgs,
    },
    /// Figure of all time steps
    TimeCourse {
        /// Recorded CSV file
        file: PathBuf,
        /// Time step to mark
        #[arg(long)]
        marker: Option<usize>,
        #[command(flatten)]
        plot: PlotArgs,
    },
    /// One figure per selected time step
    Sequence {
        /// Recorded CSV file
        file: PathBuf,
        /// First time step
        #[arg(long, default_value_t = 0)]
        start: usize,
        /// Distance between selected time steps
        #[arg(long, default_value_t = 1)]
        step_size: usize,
        /// Number of figures
        #[arg(long)]
        count: usize,
        #[command(flatten)]
        plot: PlotArgs,
    },
}

#[derive(clap::Args, Debug)]
struct PlotArgs {
    /// Axes to keep, e.g. "x_2" or "x_1, x_3"
    #[arg(long)]
    proj: Option<ProjectionChoice>,
    /// Reduction of eliminated axes: sum, average or maximum
    #[arg(long, default_value = "average")]
    method: Aggregation,
    /// Plot style: line, wireframe, surface, heatmap or image
    #[arg(long, default_value = "line")]
    style: PlotStyle,
    /// Line style: solid, dashed, dotted or "dash dot"
    #[arg(long, default_value = "solid")]
    line_style: LineStyle,
    /// Row/column stride of wireframe and surface plots
    #[arg(long, default_value_t = 1)]
    stride: usize,
    /// Edge line width of surface plots
    #[arg(long, default_value_t = 0.0)]
    surface_linewidth: f64,
    /// Lower end of the heatmap colour range
    #[arg(long)]
    vmin: Option<f64>,
    /// Upper end of the heatmap colour range
    #[arg(long)]
    vmax: Option<f64>,
    /// Line colour
    #[arg(long, default_value = DEFAULT_COLOR)]
    color: String,
    /// Time marker colour
    #[arg(long, default_value = DEFAULT_COLOR)]
    marker_color: String,
    /// Figure title
    #[arg(long)]
    title: Option<String>,
    /// X axis label
    #[arg(long)]
    x_label: Option<String>,
    /// Y axis label
    #[arg(long)]
    y_label: Option<String>,
    /// Z axis or colour bar label
    #[arg(long)]
    z_label: Option<String>,
    /// Directory receiving exported figures (CSV data is printed to stdout otherwise)
    #[arg(long)]
    out: Option<PathBuf>,
    /// Export format: csv (figure data) or svg (drawn figure, needs --out)
    #[arg(long, default_value = "csv")]
    format: ExportFormat,
}

impl PlotArgs {
    fn request(&self) -> PlotRequest {
        PlotRequest {
            style: self.style,
            projection: self.proj.unwrap_or_default(),
            method: self.method,
            labels: AxisLabels {
                x: self.x_label.clone(),
                y: self.y_label.clone(),
                z: self.z_label.clone(),
            },
            title: self.title.clone(),
            config: PlotConfig {
                stride: self.stride,
                surface_linewidth: self.surface_linewidth,
                line_style: self.line_style,
                color: self.color.clone(),
                marker_color: self.marker_color.clone(),
                vmin: self.vmin,
                vmax: self.vmax,
            },
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Set up logging if --log option is provided
    if let Some(log_path) = &args.log {
        let file = std::fs::File::create(log_path)
            .with_context(|| format!("Failed to open log file {}", log_path.display()))?;
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));
        let subscriber = FmtSubscriber::builder()
            .with_env_filter(filter)
            .with_ansi(false)
            .with_writer(Mutex::new(file))
            .finish();
        tracing::subscriber::set_global_default(subscriber)?;
        tracing::info!("Starting rdplot");
    }

    let res = run(args.command);

    if args.log.is_some() {
        tracing::info!("rdplot exited");
    }

    res
}

fn run(command: Command) -> Result<()> {
    match command {
        Command::Info { file } => {
            let recording = load(&file)?;
            print_info(&file, &recording);
        }
        Command::Snapshot { file, step, plot } => {
            let recording = load(&file)?;
            let figure = plot_snapshot(&recording, step, &plot.request())?;
            emit(&[figure], &file, &plot)?;
        }
        Command::TimeCourse { file, marker, plot } => {
            let recording = load(&file)?;
            let figure = plot_time_course(&recording, &plot.request(), marker)?;
            emit(&[figure], &file, &plot)?;
        }
        Command::Sequence {
            file,
            start,
            step_size,
            count,
            plot,
        } => {
            let recording = load(&file)?;
            let figures = plot_snapshot_sequence(&recording, &plot.request(), start, step_size, count)?;
            emit(&figures, &file, &plot)?;
        }
    }
    Ok(())
}

fn load(file: &Path) -> Result<Recording> {
    if !file.exists() {
        anyhow::bail!("Path not found: {}", file.display());
    }
    read_recording(file).with_context(|| format!("Failed to read recording {}", file.display()))
}

fn print_info(file: &Path, recording: &Recording) {
    let header = &recording.header;
    let ndim = recording.ndim();

    println!("file: {}", file.display());
    println!("kind: {}", header.kind);
    println!("element type: {}", header.element_type);
    println!("extents: {:?}", header.extents);
    println!("dimension: {}", ndim);
    println!("steps: {}", recording.steps());
    if let (Some(first), Some(last)) = (recording.times_ms.first(), recording.times_ms.last()) {
        println!("time: {}ms .. {}ms", first, last);
    }
    if let Some((min, max)) = recording.min_max() {
        println!("values: {} .. {}", min, max);
    }

    let candidates: Vec<String> = all_candidates(ndim).iter().map(ToString::to_string).collect();
    let choices: Vec<String> = build_projection_choices(ndim, &candidates)
        .iter()
        .map(ToString::to_string)
        .collect();
    println!("projections: {}", choices.join(" | "));
}

fn emit(figures: &[Figure], source: &Path, plot: &PlotArgs) -> Result<()> {
    if plot.out.is_none() && plot.format == ExportFormat::Svg {
        anyhow::bail!("SVG export needs an output directory (--out)");
    }
    for figure in figures {
        eprintln!("{}", describe(figure));
        match (plot.out.as_deref(), plot.format) {
            (Some(dir), ExportFormat::Csv) => {
                let path = export_figure(figure, dir, source)?;
                println!("{}", path.display());
            }
            (Some(dir), ExportFormat::Svg) => {
                let path = export_figure_svg(figure, dir, source)?;
                println!("{}", path.display());
            }
            (None, _) => write_figure_csv(figure, io::stdout().lock())?,
        }
    }
    Ok(())
}

fn describe(figure: &Figure) -> String {
    let mut text = format!("{} ({})", figure.mode.name(), figure.style);
    if let Some(step) = figure.step {
        text.push_str(&format!(" step {}", step));
    }
    if figure.projection != ProjectionChoice::None {
        text.push_str(&format!(" onto {} by {}", figure.projection, figure.method));
    }
    match &figure.content {
        FigureContent::Line(values) => text.push_str(&format!(": line of {}", values.len())),
        FigureContent::Grid(grid) => text.push_str(&format!(": grid {}x{}", grid.rows(), grid.cols())),
        FigureContent::Image(img) => {
            let (rows, cols) = img.dim();
            text.push_str(&format!(": image {}x{}", rows, cols));
        }
    }
    if let Some(marker) = &figure.marker {
        text.push_str(&format!(", marker at step {}", marker.step()));
    }
    text
}
