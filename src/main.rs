use anyhow::Context;
use catalog::SiteCatalog;
use clap::Parser;
use console::Console;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::io;

mod catalog;
mod cli;
mod console;
mod errors;
mod logging;
mod map;
mod quiz;

fn main() -> anyhow::Result<()> {
    let args = cli::Args::parse();
    logging::init(&args).context("Failed to set up logging.")?;
    let settings = args.settings().context("Invalid game settings.")?;
    let catalog = match &args.catalog {
        Some(path) => SiteCatalog::load(path)
            .with_context(|| format!("Failed to load the catalog from `{}`.", path.display()))?,
        None => SiteCatalog::bundled().context("The bundled catalog is broken.")?,
    };
    if catalog.is_empty() {
        tracing::warn!(task = "startup", "The catalog has no sites, games can't be started.");
    }
    let rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    tracing::info!(
        task = "startup",
        sites_count = catalog.len(),
        max_distance_km = settings.max_distance_km(),
        quizzes_per_game = settings.quizzes_per_game(),
        seed = ?args.seed,
    );
    let mut console = Console::new(&catalog, settings, rng);
    console
        .run(io::stdin().lock(), io::stdout().lock())
        .context("Console I/O failed.")?;
    Ok(())
}
