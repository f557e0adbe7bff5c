use crate::catalog::models::HeritageSite;
use crate::catalog::SiteCatalog;
use crate::errors::QuizError;
use crate::map::consts::INITIAL_MARKER;
use crate::map::models::GeoPoint;
use crate::map::{distance_km, score};
use crate::quiz::models::{NextQuiz, QuizPhase, QuizSettings, ScoreResult};
use rand::Rng;
use uuid::Uuid;

/// One playthrough of `quizzes_per_game` quizzes.
///
/// Every operation either succeeds or leaves the session untouched.
#[derive(Clone, Debug)]
pub struct QuizSession {
    id: Uuid,
    settings: QuizSettings,
    phase: QuizPhase,
    current_site_index: usize,
    quiz_count: u64,
    total_score: f64,
    marker: GeoPoint,
    answered: bool,
}

impl QuizSession {
    pub fn new(settings: QuizSettings) -> Self {
        QuizSession {
            id: Uuid::new_v4(),
            settings,
            phase: QuizPhase::NotStarted,
            current_site_index: 0,
            quiz_count: 0,
            total_score: 0.0,
            marker: INITIAL_MARKER,
            answered: false,
        }
    }

    /// Starts a new game and returns the index of the first site.
    pub fn start<R: Rng + ?Sized>(
        &mut self,
        catalog: &SiteCatalog,
        rng: &mut R,
    ) -> Result<usize, QuizError> {
        if self.phase == QuizPhase::InProgress {
            return Err(self.rejected("start"));
        }
        let site_index = catalog.random_index(rng)?;
        *self = QuizSession {
            phase: QuizPhase::InProgress,
            current_site_index: site_index,
            ..QuizSession::new(self.settings)
        };
        tracing::info!(
            task = "quiz_started",
            session_id = %self.id,
            site_index,
            quizzes_per_game = self.settings.quizzes_per_game(),
        );
        Ok(site_index)
    }

    pub fn submit_guess(
        &mut self,
        guess: GeoPoint,
        catalog: &SiteCatalog,
    ) -> Result<ScoreResult, QuizError> {
        if self.phase != QuizPhase::InProgress || self.answered {
            return Err(self.rejected("submit_guess"));
        }
        let site = self.site_in(catalog)?;
        let distance_km = distance_km(guess, site.location);
        let score = score(distance_km, self.settings.max_distance_km());
        let result = ScoreResult {
            site_name: site.name.clone(),
            guess,
            correct_location: site.location,
            distance_km,
            score,
            is_final_quiz: self.quiz_count + 1 == self.settings.quizzes_per_game(),
        };
        self.total_score += score;
        self.answered = true;
        tracing::info!(
            task = "guess_submitted",
            session_id = %self.id,
            quiz_number = self.quiz_count + 1,
            distance_km,
            score,
            total_score = self.total_score,
        );
        Ok(result)
    }

    pub fn next_quiz<R: Rng + ?Sized>(
        &mut self,
        catalog: &SiteCatalog,
        rng: &mut R,
    ) -> Result<NextQuiz, QuizError> {
        if self.phase != QuizPhase::InProgress {
            return Err(self.rejected("next_quiz"));
        }
        let quiz_count = self.quiz_count + 1;
        if quiz_count >= self.settings.quizzes_per_game() {
            self.quiz_count = quiz_count;
            self.phase = QuizPhase::Finished;
            tracing::info!(
                task = "quiz_finished",
                session_id = %self.id,
                total_score = self.total_score,
            );
            return Ok(NextQuiz::Finished {
                total_score: self.total_score,
            });
        }
        let site_index = catalog.random_index(rng)?;
        self.quiz_count = quiz_count;
        self.current_site_index = site_index;
        self.answered = false;
        tracing::debug!(
            task = "next_quiz",
            session_id = %self.id,
            quiz_number = quiz_count + 1,
            site_index,
        );
        Ok(NextQuiz::Continue {
            quiz_number: quiz_count + 1,
            site_index,
        })
    }

    pub fn reset(&mut self) {
        tracing::debug!(task = "quiz_reset", session_id = %self.id, phase = %self.phase);
        *self = QuizSession::new(self.settings);
    }

    /// Where the player's marker currently is. Map clicks and drags end up here.
    pub fn move_marker(&mut self, point: GeoPoint) {
        self.marker = point;
    }

    /// Distance from the marker to the current site, without scoring it.
    pub fn hint(&self, catalog: &SiteCatalog) -> Result<f64, QuizError> {
        if self.phase != QuizPhase::InProgress || self.answered {
            return Err(self.rejected("hint"));
        }
        let site = self.site_in(catalog)?;
        Ok(distance_km(self.marker, site.location))
    }

    pub fn current_site<'c>(&self, catalog: &'c SiteCatalog) -> Option<&'c HeritageSite> {
        match self.phase {
            QuizPhase::InProgress => catalog.get(self.current_site_index),
            _ => None,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn settings(&self) -> QuizSettings {
        self.settings
    }

    pub fn phase(&self) -> QuizPhase {
        self.phase
    }

    pub fn quiz_count(&self) -> u64 {
        self.quiz_count
    }

    pub fn total_score(&self) -> f64 {
        self.total_score
    }

    pub fn marker(&self) -> GeoPoint {
        self.marker
    }

    fn site_in<'c>(&self, catalog: &'c SiteCatalog) -> Result<&'c HeritageSite, QuizError> {
        // Only reachable when a different catalog is passed than the one the game started with.
        catalog
            .get(self.current_site_index)
            .ok_or(QuizError::UnknownSite {
                index: self.current_site_index,
            })
    }

    fn rejected(&self, operation: &'static str) -> QuizError {
        tracing::debug!(
            task = "invalid_transition",
            session_id = %self.id,
            operation,
            phase = %self.phase,
            answered = self.answered,
        );
        QuizError::InvalidStateTransition {
            operation,
            phase: self.phase,
        }
    }
}
