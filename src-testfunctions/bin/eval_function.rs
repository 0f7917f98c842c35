use clap::Parser;
use quadcheck_testfunctions::parse::{parse_coeffs, parse_domain, parse_points};
use quadcheck_testfunctions::{
    FunctionKind, IntegrationTestFunction, TestFunction, TestFunctionSpec, TestSuite, uniform_grid,
};
use serde::Serialize;

/// CLI arguments for evaluating test functions
#[derive(Parser)]
#[command(name = "eval_function")]
#[command(about = "Evaluate integration test functions and report their closed-form integrals")]
struct Args {
    /// Test function name (polynomial, exponential, sinusoid)
    #[arg(short, long, default_value = "polynomial")]
    function: String,

    /// JSON test suite; overrides --function, --coeffs, --domain and --dim
    #[arg(short, long)]
    suite: Option<String>,

    /// Input dimension
    #[arg(short, long, default_value = "1")]
    dim: usize,

    /// Polynomial coefficients, lowest power first (e.g. "1,2,3")
    #[arg(short, long)]
    coeffs: Option<String>,

    /// Domain as "min,max" (replicated) or "min,max;min,max;..."
    #[arg(long)]
    domain: Option<String>,

    /// Expected integral value
    #[arg(short, long)]
    expected: Option<f64>,

    /// Points to evaluate: ';' between points, ',' between coordinates
    #[arg(short, long)]
    points: Option<String>,

    /// Evaluate on a uniform grid with this many nodes per axis when no points are given
    #[arg(short, long, default_value = "5")]
    grid: usize,
}

#[derive(Serialize)]
struct Report {
    name: String,
    dim: usize,
    domain: Vec<(f64, f64)>,
    order: Option<usize>,
    expected_result: Option<f64>,
    closed_form_integral: f64,
    points: Vec<Vec<f64>>,
    /// `evaluate` output per point: one value when the function sums
    /// across dimensions, one per coordinate otherwise
    values: Vec<Vec<f64>>,
    /// Per-point sum across dimensions
    integrand: Vec<f64>,
}

fn build_functions(args: &Args) -> quadcheck_testfunctions::Result<Vec<TestFunction>> {
    if let Some(path) = &args.suite {
        return TestSuite::load(path)?.build();
    }

    let kind: FunctionKind = args.function.parse()?;
    let spec = TestFunctionSpec {
        coeffs: args.coeffs.as_deref().map(parse_coeffs).transpose()?,
        dim: args.dim,
        domain: args
            .domain
            .as_deref()
            .map(|d| parse_domain(d, args.dim))
            .transpose()?,
        expected_result: args.expected,
        ..TestFunctionSpec::new(kind)
    };
    Ok(vec![spec.build()?])
}

fn report(function: &TestFunction, args: &Args) -> quadcheck_testfunctions::Result<Report> {
    let points = match &args.points {
        Some(p) => parse_points(p, function.dim())?,
        None => uniform_grid(function.domain(), args.grid)?,
    };
    let values = function.evaluate(&points)?;
    let integrand = function.integrand(&points)?;

    Ok(Report {
        name: function.name().to_string(),
        dim: function.dim(),
        domain: function.domain().bounds().to_vec(),
        order: function.order(),
        expected_result: function.expected_result(),
        closed_form_integral: function.closed_form_integral(),
        points: points.rows().into_iter().map(|row| row.to_vec()).collect(),
        values: values
            .outer_iter()
            .map(|row| row.iter().copied().collect())
            .collect(),
        integrand: integrand.to_vec(),
    })
}

fn run(args: &Args) -> Result<(), Box<dyn std::error::Error>> {
    let functions = build_functions(args)?;
    log::info!("evaluating {} test function(s)", functions.len());

    let reports = functions
        .iter()
        .map(|f| report(f, args))
        .collect::<quadcheck_testfunctions::Result<Vec<_>>>()?;

    println!("{}", serde_json::to_string_pretty(&reports)?);
    Ok(())
}

fn main() {
    quadcheck_env::init_logging();
    let args = Args::parse();

    if let Err(e) = run(&args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
