use clap::Parser;
use plotly::{
    Layout, Plot, Scatter,
    common::{ColorScale, ColorScalePalette, Mode, Title},
    contour::Contour,
};
use std::path::{Path, PathBuf};

use quadcheck_env::get_plots_dir;
use quadcheck_testfunctions::parse::parse_domain;
use quadcheck_testfunctions::{
    Domain, FunctionKind, IntegrationTestFunction, TestFunction, TestFunctionSpec, TestSuite,
    uniform_grid,
};

/// CLI arguments for plotting test functions
#[derive(Parser)]
#[command(name = "plot_functions")]
#[command(about = "Plot integration test functions with Plotly (1-D lines, 2-D contours)")]
struct Args {
    /// Height of the plot in pixels
    #[arg(short = 'H', long, default_value = "800")]
    height: usize,

    /// Width of the plot in pixels
    #[arg(short = 'W', long, default_value = "800")]
    width: usize,

    /// Number of grid nodes per axis
    #[arg(short, long, default_value = "100")]
    n: usize,

    /// Dimension of the plotted functions (1 or 2)
    #[arg(short, long, default_value = "1")]
    dim: usize,

    /// Domain override as "min,max" or "min,max;min,max"
    #[arg(long)]
    domain: Option<String>,

    /// Output directory for HTML files (default: $QUADCHECK_DIR/data_generated/plot_functions)
    #[arg(short, long)]
    output_dir: Option<String>,

    /// List of specific functions to plot (comma-separated), if empty plots all
    #[arg(short, long)]
    functions: Option<String>,

    /// JSON test suite to plot instead of the default functions
    #[arg(short, long)]
    suite: Option<String>,
}

fn build_functions(args: &Args) -> quadcheck_testfunctions::Result<Vec<TestFunction>> {
    if let Some(path) = &args.suite {
        return TestSuite::load(path)?.build();
    }

    let kinds: Vec<FunctionKind> = match &args.functions {
        Some(names) => names
            .split(',')
            .map(|name| name.parse())
            .collect::<quadcheck_testfunctions::Result<_>>()?,
        None => FunctionKind::ALL.to_vec(),
    };
    let domain: Option<Domain> = args
        .domain
        .as_deref()
        .map(|d| parse_domain(d, args.dim))
        .transpose()?;

    kinds
        .into_iter()
        .map(|kind| {
            TestFunctionSpec {
                dim: args.dim,
                domain: domain.clone(),
                ..TestFunctionSpec::new(kind)
            }
            .build()
        })
        .collect()
}

fn title(function: &TestFunction) -> String {
    match function.expected_result() {
        Some(expected) => format!(
            "Function: {} on {} (integral = {:.6})",
            function.name(),
            function.domain(),
            expected
        ),
        None => format!("Function: {} on {}", function.name(), function.domain()),
    }
}

fn plot_1d(function: &TestFunction, n: usize) -> quadcheck_testfunctions::Result<Plot> {
    let grid = uniform_grid(function.domain(), n)?;
    let values = function.integrand(&grid)?;

    let line = Scatter::new(grid.column(0).to_vec(), values.to_vec())
        .mode(Mode::Lines)
        .name(function.name());

    let mut plot = Plot::new();
    plot.add_trace(line);
    Ok(plot)
}

fn plot_2d(function: &TestFunction, n: usize) -> quadcheck_testfunctions::Result<Plot> {
    // rows (x_i, y_j) at i * n + j: y varies fastest
    let grid = uniform_grid(function.domain(), n)?;
    let values = function.integrand(&grid)?;

    let x_vals: Vec<f64> = grid.column(0).iter().step_by(n.max(1)).copied().collect();
    let y_vals: Vec<f64> = grid.column(1).iter().take(n).copied().collect();

    // z[row = y][col = x]
    let z_vals: Vec<Vec<f64>> = (0..y_vals.len())
        .map(|j| (0..x_vals.len()).map(|i| values[i * n + j]).collect())
        .collect();

    let contour = Contour::new(x_vals, y_vals, z_vals)
        .color_scale(ColorScale::Palette(ColorScalePalette::Viridis));

    let mut plot = Plot::new();
    plot.add_trace(contour);
    Ok(plot)
}

fn plot_function(
    function: &TestFunction,
    args: &Args,
    output_dir: &Path,
) -> Result<Option<PathBuf>, Box<dyn std::error::Error>> {
    let mut plot = match function.dim() {
        1 => plot_1d(function, args.n)?,
        2 => plot_2d(function, args.n)?,
        d => {
            log::warn!(
                "Skipping '{}': {}D input, plotting only supports 1D and 2D",
                function.name(),
                d
            );
            return Ok(None);
        }
    };

    let layout = Layout::new()
        .title(Title::with_text(&title(function)))
        .width(args.width)
        .height(args.height)
        .x_axis(plotly::layout::Axis::new().title(Title::with_text("x")))
        .y_axis(plotly::layout::Axis::new().title(Title::with_text(
            if function.dim() == 1 { "f(x)" } else { "y" },
        )));
    plot.set_layout(layout);

    let filename = output_dir.join(format!("{}_{}d.html", function.name(), function.dim()));
    plot.write_html(&filename);
    Ok(Some(filename))
}

fn run(args: &Args) -> Result<(), Box<dyn std::error::Error>> {
    let output_dir = match &args.output_dir {
        Some(dir) => PathBuf::from(dir),
        None => get_plots_dir()?,
    };
    std::fs::create_dir_all(&output_dir)?;

    let functions = build_functions(args)?;
    log::info!("Plotting {} functions with {} nodes per axis", functions.len(), args.n);

    for function in &functions {
        if let Some(path) = plot_function(function, args, &output_dir)? {
            log::info!("  Created plot: {}", path.display());
        }
    }

    println!("Plots saved to directory: {}", output_dir.display());
    Ok(())
}

fn main() {
    quadcheck_env::init_logging();
    let args = Args::parse();

    if let Err(e) = run(&args) {
        eprintln!("Error: {}", e);
        eprintln!("Set QUADCHECK_DIR to the project root or pass --output-dir.");
        std::process::exit(1);
    }
}
