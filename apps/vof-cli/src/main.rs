use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use thiserror::Error;
use vof_config::{ConfigError, ConfigSource, FileSource};
use vof_core::Real;
use vof_core::units::m;
use vof_curvature::{CurvatureError, InterfaceProperties, MODEL_KEY, coeffs_key};
use vof_interface::{InterfaceError, InterfaceState};
use vof_mesh::{MeshError, SurfaceVectorField, Vector, VolScalarField, block_mesh};

#[derive(Parser)]
#[command(name = "vof-cli")]
#[command(about = "VOF interface curvature models", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List registered curvature model types
    Models,
    /// Check that a case file selects a valid model with valid coefficients
    Validate {
        /// Path to the case YAML or JSON file
        case_path: PathBuf,
    },
    /// Compute the curvature of a droplet with the case's model
    Curvature {
        /// Path to the case YAML or JSON file
        case_path: PathBuf,
        /// Cells per direction of the unit box
        #[arg(long, default_value_t = 64)]
        cells: usize,
        /// Droplet radius in metres
        #[arg(long, default_value_t = 0.3)]
        radius: f64,
        /// 2 for a circle in a single cell layer, 3 for a sphere
        #[arg(long, default_value_t = 2, value_parser = clap::value_parser!(u8).range(2..=3))]
        dim: u8,
    },
}

#[derive(Error, Debug)]
enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Mesh(#[from] MeshError),
    #[error(transparent)]
    Curvature(#[from] CurvatureError),
    #[error(transparent)]
    Interface(#[from] InterfaceError),
    #[error("Invalid argument: {0}")]
    InvalidArg(String),
}

type CliResult<T> = Result<T, CliError>;

fn main() -> CliResult<()> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Models => cmd_models(),
        Commands::Validate { case_path } => cmd_validate(&case_path),
        Commands::Curvature {
            case_path,
            cells,
            radius,
            dim,
        } => cmd_curvature(&case_path, cells, radius, dim),
    }
}

fn cmd_models() -> CliResult<()> {
    println!("Curvature model types:");
    for model_type in vof_curvature::model_types() {
        println!("  {} (coefficients: {})", model_type, coeffs_key(model_type));
    }
    Ok(())
}

fn cmd_validate(case_path: &Path) -> CliResult<()> {
    println!("Validating case: {}", case_path.display());
    let state = droplet_case(case_path, 8, 0.3, 2)?;
    let model = vof_curvature::select(&state)?;
    let root = state.config().load()?;
    println!("  {}: {}", MODEL_KEY, model.model_type());
    if root.contains_key(&coeffs_key(model.model_type())) {
        println!("  coefficients: {} entries", model.coeffs().len());
    } else {
        println!("  coefficients: defaults");
    }
    println!("✓ Case is valid");
    Ok(())
}

fn cmd_curvature(case_path: &Path, cells: usize, radius: f64, dim: u8) -> CliResult<()> {
    if !(radius > 0.0 && radius < 0.5) {
        return Err(CliError::InvalidArg(format!(
            "radius must lie in (0, 0.5), got {radius}"
        )));
    }
    let state = droplet_case(case_path, cells, radius, dim)?;
    let model = vof_curvature::select(&state)?;
    println!(
        "Computing curvature with '{}' on {} cells",
        model.model_type(),
        state.mesh().n_cells()
    );

    let mut k = VolScalarField::uniform(state.mesh(), 0.0);
    let mut n_hat_f = SurfaceVectorField::uniform(state.mesh(), Vector::zeros());
    model.compute_curvature(&mut k, &mut n_hat_f)?;

    let band: Vec<Real> = state
        .alpha()
        .internal()
        .iter()
        .zip(k.internal())
        .filter(|(a, _)| (0.3..0.7).contains(*a))
        .map(|(_, kv)| *kv)
        .collect();
    if band.is_empty() {
        println!("No interface cells; refine the mesh or enlarge the droplet");
        return Ok(());
    }
    let mean = band.iter().sum::<Real>() / band.len() as Real;
    let min = band.iter().copied().fold(Real::INFINITY, Real::min);
    let max = band.iter().copied().fold(Real::NEG_INFINITY, Real::max);
    let exact = Real::from(dim - 1) / radius;

    println!("  Interface cells: {}", band.len());
    println!("  Mean K: {:.4} 1/m (exact {:.4})", mean, exact);
    println!("  Range:  [{:.4}, {:.4}] 1/m", min, max);
    println!("  Error:  {:.2}%", 100.0 * (mean - exact).abs() / exact);
    Ok(())
}

/// Unit box with a centred droplet, configured from `case_path`.
fn droplet_case(
    case_path: &Path,
    cells: usize,
    radius: f64,
    dim: u8,
) -> CliResult<InterfaceState> {
    if cells == 0 {
        return Err(CliError::InvalidArg("cells must be positive".to_string()));
    }
    let h = 1.0 / cells as f64;
    let (counts, depth) = if dim == 2 {
        ([cells, cells, 1], h)
    } else {
        ([cells, cells, cells], 1.0)
    };
    let mesh = block_mesh(counts, [m(1.0), m(1.0), m(depth)])?;

    let width = 1.5 * h;
    let alpha = VolScalarField::from_fn(&mesh, |c| {
        let mut d = c - Vector::new(0.5, 0.5, 0.5);
        if dim == 2 {
            d.z = 0.0;
        }
        0.5 * (1.0 - ((d.norm() - radius) / width).tanh())
    });

    let source = FileSource::new(case_path);
    tracing::info!(case = %source.describe(), "loading case");
    let mut state = InterfaceState::new(mesh, alpha, Box::new(source))?;
    let wetted = state.load_contact_angles()?;
    if wetted > 0 {
        println!("  Contact angles on {} patch(es)", wetted);
    }
    Ok(state)
}
