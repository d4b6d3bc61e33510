use std::f64::consts::TAU;
use kspace::{ config::Config, hamiltonian::Assembly, solve::SampleSet };

// quantum pendulum: V(x) = q (1 - cos x) on a single period

fn main() -> Result<(), Box<dyn std::error::Error>> {
    const Q: f64 = 4.0; // well depth
    const C: f64 = 0.5; // ħ²/2m in units of the period
    const NPOINTS: usize = 256;

    // one full period, right endpoint excluded so samples are equispaced
    let samples = SampleSet::new_range(
        (0.0, TAU - TAU / NPOINTS as f64 / 2.0, TAU / NPOINTS as f64),
        |x| Q * (1.0 - x.cos()),
    )?;
    println!("{} samples", samples.len());

    for assembly in [
        Assembly::Broadcast,
        Assembly::Transposed,
        Assembly::Symmetrized,
        Assembly::Projected,
    ] {
        println!("{assembly}:");
        for size in [1, 3, 5, 9, 15] {
            let config = Config::new(C, size).with_assembly(assembly);
            let spectrum = samples.solve(&config)?;
            let e: Vec<String>
                = spectrum.energies.iter()
                .take(3)
                .map(|ek| format!("{ek:+.6}"))
                .collect();
            println!(
                "  size = {size:>2}: E = [{}]; rcond = {:.2e}",
                e.join(", "),
                spectrum.projection.rcond,
            );
        }
    }

    let spectrum = samples.solve(&Config::new(C, 15))?;
    let gs = spectrum.ground_state();
    let psi = gs.wavefunction_normalized(&spectrum.basis, (0.0, TAU, 9));
    println!("ground state on a coarse grid: {psi:.4}");
    Ok(())
}
