use std::{ io::{ self, Write }, path::{ Path, PathBuf } };
use anyhow::Context;
use clap::Parser;
use tracing::{ info, warn };
use tracing_subscriber::EnvFilter;
use kspace::{
    config::Config,
    error::KError,
    hamiltonian::Assembly,
    solve::SampleSet,
    table::read_table,
};

// track the ground-state energy and the fit of the projected potential as the
// basis grows, stopping at the first size the samples cannot support

#[derive(Debug, Parser)]
#[command(
    name = "basis_sweep",
    about = "Ground-state convergence over increasing Fourier basis sizes",
    allow_negative_numbers = true
)]
struct Args {
    /// The path to the potential energy table
    #[arg(short, long, default_value = "potential_energy.dat")]
    input: PathBuf,

    /// The constant c in the equation
    #[arg(short, default_value_t = 5.0)]
    c: f64,

    /// Largest basis size to try
    #[arg(short = 'm', long, default_value_t = 15)]
    max_size: usize,

    /// Potential term of the Hamiltonian: broadcast, transposed, symmetrized,
    /// or projected
    #[arg(long, default_value = "broadcast")]
    assembly: Assembly,

    /// Smallest acceptable reciprocal condition number of the Gram matrix
    #[arg(long, default_value_t = 1e-12)]
    rcond_min: f64,
}

#[derive(Copy, Clone, Debug, PartialEq)]
struct Row {
    size: usize,
    e0: f64,
    residual: f64,
    rcond: f64,
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();
}

fn load(path: &Path) -> anyhow::Result<SampleSet> {
    read_table(path)
        .map_err(|err| {
            let stage = err.stage();
            anyhow::Error::new(err).context(format!("{stage} stage failed"))
        })
        .with_context(|| format!("could not load {}", path.display()))
}

fn sweep(samples: &SampleSet, args: &Args) -> anyhow::Result<Vec<Row>> {
    let mut rows: Vec<Row> = Vec::with_capacity(args.max_size);
    for size in 1..=args.max_size {
        let config = Config::new(args.c, size)
            .with_assembly(args.assembly)
            .with_rcond_min(args.rcond_min);
        let spectrum = match samples.solve(&config) {
            Ok(spectrum) => spectrum,
            Err(err @ KError::Singular { .. }) => {
                warn!(size, "stopping sweep: {err}");
                break;
            },
            Err(err) => {
                let stage = err.stage();
                return Err(err)
                    .with_context(|| format!("{stage} stage failed at size {size}"));
            },
        };
        let residual = spectrum.projection.residual(samples.get_V())?;
        info!(size, e0 = spectrum.energies[0], residual, "solved");
        rows.push(Row {
            size,
            e0: spectrum.energies[0],
            residual,
            rcond: spectrum.projection.rcond,
        });
    }
    Ok(rows)
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let args = Args::parse();
    let samples = load(&args.input)?;
    let rows = sweep(&samples, &args)?;
    if rows.len() < args.max_size {
        eprintln!(
            "gram matrix became singular at size {}; reporting {} sizes",
            rows.len() + 1,
            rows.len(),
        );
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();
    writeln!(out, "{:>4}  {:>18}  {:>12}  {:>10}", "size", "e0", "residual", "rcond")?;
    for row in rows.iter() {
        writeln!(
            out,
            "{:>4}  {:>+18.10e}  {:>12.4e}  {:>10.2e}",
            row.size, row.e0, row.residual, row.rcond,
        )?;
    }
    Ok(())
}
