//! Generate a small sector and print it as JSON.
//!
//! ```text
//! RUST_LOG=debug cargo run -p star-system --example generate_sector -- [seed] [count] [config.toml]
//! ```

use rand::SeedableRng;
use rand_chacha::ChaChaRng;
use serde::Serialize;

use star_system::{GeneratorConfig, StarSystem, SystemOptions, generate_star_system};
use stellar::StellarTable;
use worlds::{
    StarportOptions, StarportRecord, WorldOptions, WorldRecord, generate_starport, generate_world,
};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SectorEntry {
    system: StarSystem,
    mainworld: WorldRecord,
    starport: StarportRecord,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let mut args = std::env::args().skip(1);
    let seed: u64 = args.next().map(|s| s.parse()).transpose()?.unwrap_or(42);
    let count: usize = args.next().map(|s| s.parse()).transpose()?.unwrap_or(4);
    let config = match args.next() {
        Some(path) => GeneratorConfig::from_path(path)?,
        None => GeneratorConfig::default(),
    };

    tracing::info!(seed, count, "Generating sector");

    let names = config.name_sequence();
    let mut rng = ChaChaRng::seed_from_u64(seed);
    let mut sector = Vec::with_capacity(count);

    for _ in 0..count {
        let system = generate_star_system(
            &mut rng,
            &names,
            StellarTable::standard(),
            &config,
            &SystemOptions::default(),
        )?;
        let mainworld = generate_world(
            &mut rng,
            &names,
            &WorldOptions {
                star_system_id: Some(system.metadata.identity.id),
                ..WorldOptions::default()
            },
        )?;
        let starport = generate_starport(&mut rng, &mainworld, &StarportOptions::default())?;

        tracing::info!(
            system = %system.metadata.display_name(),
            primary = %system.primary.stellar_type(),
            planets = system.planets.len(),
            starport = %starport.starport_class,
            "Generated entry"
        );
        sector.push(SectorEntry {
            system,
            mainworld,
            starport,
        });
    }

    println!("{}", serde_json::to_string_pretty(&sector)?);
    Ok(())
}
