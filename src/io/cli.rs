//! Command-line interface: sizing, generation, planning and export of runs

use crate::algorithm::planner::{Plan, plan};
use crate::generation::ScenarioGenerator;
use crate::io::animation::export_wavefront_gif;
use crate::io::configuration::{
    ANIMATION_SUFFIX, DEFAULT_MIN_COLUMNS, DEFAULT_MIN_ROWS, DEFAULT_OBSTACLE_PERCENTAGE,
    DEFAULT_OUTPUT, DEFAULT_RUNS, GIF_FRAME_DELAY_MS, GridLimits,
};
use crate::io::error::{Result, invalid_parameter, terminal_error};
use crate::io::image::{RenderStyle, export_png, render_scenario};
use crate::io::progress::RunProgress;
use crate::io::prompt::GridSizePrompt;
use crate::io::text::{render_field, render_text};
use crate::spatial::grid::GridShape;
use crate::spatial::scenario::Scenario;
use clap::Parser;
use log::info;
use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

/// Smallest minimum row count that still leaves room for a destination region
const LOWEST_MIN_ROWS: usize = 3;
/// Smallest minimum column count that still leaves room for a destination region
const LOWEST_MIN_COLUMNS: usize = 2;

#[derive(Parser, Debug)]
#[command(name = "grassfire")]
#[command(
    author,
    version,
    about = "Plan shortest paths on random obstacle grids with a grassfire wavefront"
)]
/// Command-line arguments for the planner
pub struct Cli {
    /// Number of grid rows (prompted for when rows or columns are missing)
    #[arg(short, long)]
    pub rows: Option<usize>,

    /// Number of grid columns (prompted for when rows or columns are missing)
    #[arg(short, long)]
    pub cols: Option<usize>,

    /// Smallest accepted number of rows
    #[arg(long, default_value_t = DEFAULT_MIN_ROWS)]
    pub min_rows: usize,

    /// Smallest accepted number of columns
    #[arg(long, default_value_t = DEFAULT_MIN_COLUMNS)]
    pub min_cols: usize,

    /// Percentage of cells turned into obstacles
    #[arg(short = 'p', long = "obstacles", default_value_t = DEFAULT_OBSTACLE_PERCENTAGE)]
    pub obstacle_percentage: f64,

    /// Random seed for reproducible scenarios (drawn at random when absent)
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Number of scenarios to generate and plan
    #[arg(short = 'n', long, default_value_t = DEFAULT_RUNS)]
    pub runs: usize,

    /// Output PNG path; with several runs the run number is appended
    #[arg(short, long, value_name = "FILE", default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,

    /// Also write an animated GIF of the wavefront
    #[arg(short, long)]
    pub animate: bool,

    /// Print each grid and its distance field as text
    #[arg(short, long)]
    pub text: bool,

    /// Suppress progress output and informational logs
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Minimum grid dimensions
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if a minimum leaves no room for the
    /// destination region
    pub fn limits(&self) -> Result<GridLimits> {
        if self.min_rows < LOWEST_MIN_ROWS {
            return Err(invalid_parameter(
                "min_rows",
                &self.min_rows,
                &format!("must be at least {LOWEST_MIN_ROWS}"),
            ));
        }
        if self.min_cols < LOWEST_MIN_COLUMNS {
            return Err(invalid_parameter(
                "min_cols",
                &self.min_cols,
                &format!("must be at least {LOWEST_MIN_COLUMNS}"),
            ));
        }
        Ok(GridLimits {
            min_rows: self.min_rows,
            min_cols: self.min_cols,
        })
    }

    /// Grid shape given on the command line, `None` when it must be prompted for
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if a given size is below its minimum
    pub fn shape_from_args(&self, limits: GridLimits) -> Result<Option<GridShape>> {
        let (Some(rows), Some(cols)) = (self.rows, self.cols) else {
            return Ok(None);
        };
        if rows < limits.min_rows {
            return Err(invalid_parameter(
                "rows",
                &rows,
                &format!("must be at least {}", limits.min_rows),
            ));
        }
        if cols < limits.min_cols {
            return Err(invalid_parameter(
                "cols",
                &cols,
                &format!("must be at least {}", limits.min_cols),
            ));
        }
        GridShape::new(rows, cols).map(Some)
    }

    /// Default log filter for the chosen verbosity
    pub const fn log_filter(&self) -> &'static str {
        if self.quiet { "warn" } else { "info" }
    }

    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// PNG path of a run (zero-based index)
    pub fn image_path(&self, index: usize) -> PathBuf {
        if self.runs <= 1 {
            self.output.clone()
        } else {
            with_stem_suffix(&self.output, &format!("_{}", index + 1), None)
        }
    }

    /// GIF path of a run (zero-based index)
    pub fn animation_path(&self, index: usize) -> PathBuf {
        with_stem_suffix(&self.image_path(index), ANIMATION_SUFFIX, Some("gif"))
    }
}

fn with_stem_suffix(path: &Path, suffix: &str, extension: Option<&str>) -> PathBuf {
    let stem = path.file_stem().unwrap_or_default().to_string_lossy();
    let extension = match extension {
        Some(extension) => extension.to_string(),
        None => path
            .extension()
            .map_or_else(|| "png".to_string(), |e| e.to_string_lossy().into_owned()),
    };
    let name = format!("{stem}{suffix}.{extension}");

    if let Some(parent) = path.parent() {
        parent.join(name)
    } else {
        PathBuf::from(name)
    }
}

/// Result of one run
#[derive(Debug, Clone)]
pub struct RunSummary {
    /// Zero-based run index
    pub index: usize,
    /// Generated inputs
    pub scenario: Scenario,
    /// Distance field and path
    pub plan: Plan,
    /// PNG written for this run
    pub image_path: PathBuf,
    /// GIF written for this run, if animation was requested
    pub animation_path: Option<PathBuf>,
}

/// Orchestrates sizing, generation, planning and export for every run
pub struct RunProcessor {
    cli: Cli,
    style: RenderStyle,
}

impl RunProcessor {
    /// Create a processor with the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        Self {
            cli,
            style: RenderStyle::default(),
        }
    }

    /// Run against the process's standard input and output
    ///
    /// # Errors
    ///
    /// Returns an error if validation, prompting, generation or export fails
    pub fn process(&self) -> Result<Vec<RunSummary>> {
        let stdin = std::io::stdin();
        let stdout = std::io::stdout();
        self.process_with(stdin.lock(), stdout.lock())
    }

    /// Run with explicit prompt input and text output
    ///
    /// # Errors
    ///
    /// Returns an error if validation, prompting, generation or export fails
    pub fn process_with<R: BufRead, W: Write>(
        &self,
        input: R,
        mut output: W,
    ) -> Result<Vec<RunSummary>> {
        let limits = self.cli.limits()?;
        let shape = match self.cli.shape_from_args(limits)? {
            Some(shape) => shape,
            None => {
                let mut prompt = GridSizePrompt::new(input, &mut output, limits);
                prompt.prompt_grid_size()?
            }
        };

        self.style.image_dimensions(shape)?;

        let seed = self.cli.seed.unwrap_or_else(rand::random);
        info!(
            "planning {} run(s) on a {shape} grid with {}% obstacles, seed {seed}",
            self.cli.runs, self.cli.obstacle_percentage
        );

        let mut generator = ScenarioGenerator::new(seed);
        let mut progress = RunProgress::new(self.cli.runs, self.cli.should_show_progress());
        let mut summaries = Vec::with_capacity(self.cli.runs);

        for index in 0..self.cli.runs {
            let summary = self.process_run(index, shape, &mut generator, &mut output)?;
            progress.complete_run(summary.plan.is_reachable());
            summaries.push(summary);
        }

        progress.finish();
        info!(
            "{} of {} run(s) found a path",
            progress.reachable(),
            progress.completed()
        );
        Ok(summaries)
    }

    fn process_run<W: Write>(
        &self,
        index: usize,
        shape: GridShape,
        generator: &mut ScenarioGenerator,
        output: &mut W,
    ) -> Result<RunSummary> {
        let scenario = generator.generate(shape, self.cli.obstacle_percentage)?;
        info!("run {}: {scenario}", index + 1);
        let plan = plan(&scenario)?;

        let image_path = self.cli.image_path(index);
        export_png(
            &render_scenario(&scenario, &plan.path, self.style)?,
            &image_path,
        )?;
        info!("wrote {}", image_path.display());

        let animation_path = if self.cli.animate {
            let path = self.cli.animation_path(index);
            export_wavefront_gif(&scenario, &plan, self.style, &path, GIF_FRAME_DELAY_MS)?;
            info!("wrote {}", path.display());
            Some(path)
        } else {
            None
        };

        if self.cli.text {
            write!(output, "{}", render_text(&scenario, &plan.path))
                .and_then(|()| writeln!(output))
                .and_then(|()| write!(output, "{}", render_field(&plan.field)))
                .and_then(|()| writeln!(output))
                .map_err(|e| terminal_error("write text grid", e))?;
        }

        Ok(RunSummary {
            index,
            scenario,
            plan,
            image_path,
            animation_path,
        })
    }
}
