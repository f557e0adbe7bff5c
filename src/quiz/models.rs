use crate::errors::SettingsError;
use crate::map::consts::DEFAULT_MAX_DISTANCE_KM;
use crate::map::models::GeoPoint;
use crate::quiz::consts::QUIZZES_PER_GAME;
use serde::Serialize;
use std::fmt;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum QuizPhase {
    NotStarted,
    InProgress,
    Finished,
}

impl fmt::Display for QuizPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotStarted => write!(f, "not started"),
            Self::InProgress => write!(f, "in progress"),
            Self::Finished => write!(f, "finished"),
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct QuizSettings {
    max_distance_km: f64,
    quizzes_per_game: u64,
}

impl QuizSettings {
    pub fn new(max_distance_km: f64, quizzes_per_game: u64) -> Result<Self, SettingsError> {
        if !max_distance_km.is_finite() || max_distance_km <= 0.0 {
            return Err(SettingsError::MaxDistance(max_distance_km));
        }
        if !(1..=QUIZZES_PER_GAME).contains(&quizzes_per_game) {
            return Err(SettingsError::QuizzesPerGame {
                got: quizzes_per_game,
                max: QUIZZES_PER_GAME,
            });
        }
        Ok(QuizSettings {
            max_distance_km,
            quizzes_per_game,
        })
    }

    pub fn max_distance_km(&self) -> f64 {
        self.max_distance_km
    }

    pub fn quizzes_per_game(&self) -> u64 {
        self.quizzes_per_game
    }
}

impl Default for QuizSettings {
    fn default() -> Self {
        QuizSettings {
            max_distance_km: DEFAULT_MAX_DISTANCE_KM,
            quizzes_per_game: QUIZZES_PER_GAME,
        }
    }
}

/// Outcome of answering a quiz, as shown to the player.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreResult {
    pub site_name: String,
    pub guess: GeoPoint,
    pub correct_location: GeoPoint,
    pub distance_km: f64,
    pub score: f64,
    pub is_final_quiz: bool,
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum NextQuiz {
    /// `quiz_number` is 1-based.
    Continue { quiz_number: u64, site_index: usize },
    Finished { total_score: f64 },
}
