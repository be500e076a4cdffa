use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;
use log::{debug, info};
use rand::{rngs::StdRng, SeedableRng};

use output::{create_output, read_csv, write_csv};
use sim::{
    galaxy::Galaxy,
    initial_parameters::InitialParameters,
    system::CollidingGalaxies,
    units::{Float, VELOCITY_TO_KM_PER_S},
};

mod output;
mod sim;

/// Generate a data set consisting of two galaxies colliding with each other.
#[derive(Parser, Debug)]
#[command(name = "generate_data", version)]
struct Args {
    /// The output filename containing the Cartesian state vectors in CSV format
    #[arg(short, long)]
    output: PathBuf,

    /// The number of particles in the data set (at most 200000)
    #[arg(short, long = "num_particles", visible_alias = "num-particles")]
    num_particles: u32,

    /// The ratio of particles between the large and small galaxy (0.0 = all particles are located in the large galaxy)
    #[arg(short, long, default_value_t = 0.2)]
    ratio: Float,

    /// Seed for the random number generator, drawn from the OS if omitted
    #[arg(short, long)]
    seed: Option<u64>,

    /// Read the written file back and compare it with the generated particles
    #[arg(long)]
    verify: bool,
}

impl From<&Args> for InitialParameters {
    fn from(args: &Args) -> Self {
        InitialParameters {
            body_count: args.num_particles,
            small_galaxy_ratio: args.ratio,
            seed: args.seed,
        }
    }
}

fn main() -> Result<()> {
    env_logger::init();
    run(&Args::parse())
}

fn run(args: &Args) -> Result<()> {
    let params = InitialParameters::from(args);
    // rejected parameters must not leave an empty output file behind
    params.validate()?;
    let file = create_output(&args.output)?;
    info!(
        "generating {} particles with ratio {} into {}",
        params.body_count,
        params.small_galaxy_ratio,
        args.output.display()
    );

    let mut rng = match params.seed {
        Some(seed) => {
            debug!("seeding random number generator with {}", seed);
            StdRng::seed_from_u64(seed)
        }
        None => StdRng::from_entropy(),
    };
    let system = CollidingGalaxies::generate(&params, &mut rng)?;
    info!(
        "large galaxy: {} particles within {} pc, small galaxy: {} particles within {} pc",
        system.large_galaxy_len(),
        Galaxy::LARGE.max_disk_radius(),
        system.small_galaxy_len(),
        Galaxy::SMALL.max_disk_radius()
    );

    if let Some(black_hole) = system.small_black_hole() {
        info!(
            "small black hole {} moves at {:.1} km/s",
            black_hole.index,
            black_hole.speed() * VELOCITY_TO_KM_PER_S
        );
    }
    info!("total mass: {:.1} solar masses", system.total_mass());

    write_csv(&system.bodies, BufWriter::new(file))?;
    info!("wrote {} particles to {}", system.bodies.len(), args.output.display());

    if args.verify {
        let file = File::open(&args.output)
            .with_context(|| format!("Failed to reopen {}", args.output.display()))?;
        if read_csv(BufReader::new(file))? != system.bodies {
            bail!("{} does not match the generated particles", args.output.display());
        }
        info!("verified {}", args.output.display());
    }
    Ok(())
}
