use crate::catalog::models::HeritageSite;
use crate::map::models::GeoPoint;
use crate::quiz::models::{QuizPhase, ScoreResult};

pub const HELP: &str = "\
Commands:
  start              start a new game
  mark <lat> <lng>   move the marker
  hint               show how far the marker is from the site
  answer             submit the marker's position
  guess <lat> <lng>  move the marker and submit it
  next               go to the next quiz
  reset              abandon the game
  status             show the game state
  sites              list the catalog
  quit               leave";

#[derive(Debug)]
pub enum ConsoleMessage<'a> {
    Title,
    QuizHeader {
        quiz_number: u64,
        quizzes_per_game: u64,
        site: &'a HeritageSite,
    },
    Marker(GeoPoint),
    Hint {
        distance_km: f64,
    },
    Answer(&'a ScoreResult),
    LastAnswer,
    GameFinished {
        total_score: f64,
    },
    GameReset,
    Status {
        phase: QuizPhase,
        site: Option<&'a HeritageSite>,
        quiz_number: u64,
        quizzes_per_game: u64,
        total_score: f64,
    },
    Sites(Vec<&'a HeritageSite>),
    Error(String),
}

impl ConsoleMessage<'_> {
    pub fn to_human_readable(&self) -> String {
        match self {
            Self::Title => "GeoQuizGame. Type `start` to play, `help` for commands.".to_string(),
            Self::QuizHeader {
                quiz_number,
                quizzes_per_game,
                site,
            } => format!(
                "Quiz {quiz_number}/{quizzes_per_game}: find {}!\nimage: {}",
                site.name, site.image_ref
            ),
            Self::Marker(marker) => format_coords(*marker),
            Self::Hint { distance_km } => format!("Distance: {distance_km:.2} km"),
            Self::Answer(result) => format!(
                "Score: {:.2} ({:.2} km away)\n{} is at {}, {}",
                result.score,
                result.distance_km,
                result.site_name,
                result.correct_location.lat(),
                result.correct_location.lng(),
            ),
            Self::LastAnswer => "That was the last quiz. Type `next` to see your total.".to_string(),
            Self::GameFinished { total_score } => {
                format!("Total score: {total_score:.2}\nType `start` to play again.")
            }
            Self::GameReset => "Game reset.".to_string(),
            Self::Status {
                phase,
                site,
                quiz_number,
                quizzes_per_game,
                total_score,
            } => match (phase, site) {
                (QuizPhase::InProgress, Some(site)) => format!(
                    "Game in progress, quiz {quiz_number}/{quizzes_per_game} ({}), score {total_score:.2}",
                    site.name
                ),
                _ => format!("Game {phase}, score {total_score:.2}"),
            },
            Self::Sites(sites) => {
                let mut lines = vec![format!("{} sites:", sites.len())];
                lines.extend(sites.iter().map(|site| format!("  {}", site.name)));
                lines.join("\n")
            }
            Self::Error(reason) => format!("Error: {reason}"),
        }
    }
}

/// Marker panel, six decimals right-aligned the way the map overlay shows them.
pub fn format_coords(point: GeoPoint) -> String {
    format!(
        "latitude: {:>12.6}\nlongitude:{:>12.6}",
        point.lat(),
        point.lng()
    )
}
