use std::{ io::{ self, Write }, path::{ Path, PathBuf } };
use anyhow::Context;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;
use kspace::{
    config::Config,
    hamiltonian::Assembly,
    solve::SampleSet,
    table::read_table,
};

// solve for the lowest eigenstates of -c d²/dx² + V(x) with V read from a
// two-column table

#[derive(Debug, Parser)]
#[command(
    name = "fourier_tise",
    about = "Approximate TISE eigenstates in a truncated Fourier basis",
    allow_negative_numbers = true
)]
struct Args {
    /// The path to the potential energy table
    #[arg(short, long, default_value = "potential_energy.dat")]
    input: PathBuf,

    /// The constant c in the equation
    #[arg(short, default_value_t = 5.0)]
    c: f64,

    /// The size of the basis set
    #[arg(short, long, default_value_t = 3)]
    size: usize,

    /// Potential term of the Hamiltonian: broadcast, transposed, symmetrized,
    /// or projected
    #[arg(long, default_value = "broadcast")]
    assembly: Assembly,

    /// Smallest acceptable reciprocal condition number of the Gram matrix
    #[arg(long, default_value_t = 1e-12)]
    rcond_min: f64,

    /// Print every eigenpair instead of only the lowest
    #[arg(long)]
    all: bool,

    /// Print the residual of the projected potential on the samples
    #[arg(long)]
    residual: bool,
}

impl Args {
    fn config(&self) -> Config {
        Config::new(self.c, self.size)
            .with_assembly(self.assembly)
            .with_rcond_min(self.rcond_min)
    }
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

fn run<W: Write>(args: &Args, out: &mut W) -> anyhow::Result<()> {
    let samples = load(&args.input)?;
    info!(samples = samples.len(), path = %args.input.display(), "loaded table");

    let config = args.config();
    let spectrum = samples.solve(&config)
        .map_err(|err| {
            let stage = err.stage();
            anyhow::Error::new(err).context(format!("{stage} stage failed"))
        })?;
    info!(
        rcond = spectrum.projection.rcond,
        defect = spectrum.symmetry_defect(),
        "solved"
    );

    let gs = spectrum.ground_state();
    writeln!(out, "The lowest energy is: {}", gs.e)?;
    writeln!(
        out,
        "The coefficient for the basis set of the corresponding wavefunction \
        is: {}",
        gs.coeffs,
    )?;
    if args.all {
        for (n, sol) in spectrum.solutions().iter().enumerate() {
            writeln!(out, "{:>4}  {:>+18.10e}  {}", n, sol.e, sol.coeffs)?;
        }
    }
    if args.residual {
        let residual = spectrum.projection.residual(samples.get_V())?;
        writeln!(out, "Projection residual: {:.6e}", residual)?;
    }
    Ok(())
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let args = Args::parse();
    let stdout = io::stdout();
    run(&args, &mut stdout.lock())
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;
    use super::*;

    const TABLE: &str = concat!(
        env!("CARGO_MANIFEST_DIR"),
        "/../kspace/tests/data/potential_energy.dat",
    );

    #[test]
    fn command() { Args::command().debug_assert(); }

    #[test]
    fn defaults() {
        let args = Args::try_parse_from(["fourier_tise"]).unwrap();
        assert_eq!(args.input, PathBuf::from("potential_energy.dat"));
        assert_eq!(args.c, 5.0);
        assert_eq!(args.size, 3);
        assert_eq!(args.assembly, Assembly::Broadcast);
        assert!(!args.all && !args.residual);
        assert_eq!(args.config(), Config::default());
    }

    #[test]
    fn flags() {
        let args = Args::try_parse_from([
            "fourier_tise",
            "-i", "Path/To/The/File",
            "-c", "-2.5",
            "-s", "7",
            "--assembly", "projected",
        ]).unwrap();
        assert_eq!(args.input, PathBuf::from("Path/To/The/File"));
        assert_eq!(args.c, -2.5);
        assert_eq!(args.size, 7);
        assert!(args.config().assembly.is_projected());

        let args = Args::try_parse_from(
            ["fourier_tise", "--input", "f.dat", "--size", "4"]).unwrap();
        assert_eq!(args.size, 4);
        assert!(Args::try_parse_from(["fourier_tise", "-s", "three"]).is_err());
        assert!(
            Args::try_parse_from(["fourier_tise", "--assembly", "x"]).is_err());
    }

    #[test]
    fn prints_ground_state() {
        let args = Args::try_parse_from(
            ["fourier_tise", "-i", TABLE, "--all", "--residual"]).unwrap();
        let mut out: Vec<u8> = Vec::new();
        run(&args, &mut out).unwrap();
        let out = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = out.lines().collect();
        assert!(lines[0].starts_with("The lowest energy is: "));
        assert!(lines[1].starts_with("The coefficient for the basis set"));
        // two header lines, one line per eigenpair, one residual line
        assert_eq!(lines.len(), 2 + 3 + 1);
        assert!(lines[5].starts_with("Projection residual: "));
    }

    #[test]
    fn reports_stage() {
        let args = Args::try_parse_from(
            ["fourier_tise", "-i", TABLE, "-s", "0"]).unwrap();
        let err = run(&args, &mut Vec::new()).unwrap_err();
        assert!(format!("{err:#}").contains("configuration stage failed"));

        let args = Args::try_parse_from(
            ["fourier_tise", "-i", "/nonexistent/potential.dat"]).unwrap();
        let err = run(&args, &mut Vec::new()).unwrap_err();
        let msg = format!("{err:#}");
        assert!(msg.contains("could not load"));
        assert!(msg.contains("input stage failed"));
    }
}
