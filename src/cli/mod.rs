use crate::errors::SettingsError;
use crate::map::consts::DEFAULT_MAX_DISTANCE_KM;
use crate::quiz::consts::QUIZZES_PER_GAME;
use crate::quiz::models::QuizSettings;
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::filter::LevelFilter;

/// Find world heritage sites on the map.
#[derive(Debug, Parser)]
#[command(name = "geoquiz", version)]
pub struct Args {
    /// JSON array or NDJSON file of `{name, latitude, longitude, url}` records.
    /// The bundled catalog is used when omitted.
    #[arg(long)]
    pub catalog: Option<PathBuf>,
    /// Guesses this far away (or further) score zero.
    #[arg(long)]
    #[arg(default_value_t = DEFAULT_MAX_DISTANCE_KM)]
    pub max_distance_km: f64,
    #[arg(long)]
    #[arg(default_value_t = QUIZZES_PER_GAME)]
    #[arg(value_parser = clap::value_parser!(u64).range(1..=QUIZZES_PER_GAME))]
    pub quizzes: u64,
    /// Makes site selection reproducible.
    #[arg(long)]
    pub seed: Option<u64>,
    /// Overridden by `RUST_LOG` when it is set.
    #[arg(long)]
    #[arg(default_value = "warn")]
    pub log_level: LevelFilter,
}

impl Args {
    pub fn settings(&self) -> Result<QuizSettings, SettingsError> {
        QuizSettings::new(self.max_distance_km, self.quizzes)
    }
}
