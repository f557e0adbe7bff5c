use crate::catalog::SiteCatalog;
use crate::errors::QuizError;
use crate::quiz::models::{NextQuiz, QuizSettings};
use crate::quiz::session::QuizSession;
use commands::Command;
use messages::{ConsoleMessage, HELP};
use rand::Rng;
use std::io::{self, BufRead, Write};

pub mod commands;
pub mod messages;

const PROMPT: &str = "> ";

/// Line-oriented stand-in for the map front end: owns the session and
/// turns typed commands into state machine calls.
pub struct Console<'c, R: Rng> {
    catalog: &'c SiteCatalog,
    session: QuizSession,
    rng: R,
}

enum Flow {
    Continue,
    Quit,
}

impl<'c, R: Rng> Console<'c, R> {
    pub fn new(catalog: &'c SiteCatalog, settings: QuizSettings, rng: R) -> Self {
        Console {
            catalog,
            session: QuizSession::new(settings),
            rng,
        }
    }

    #[cfg(test)]
    pub fn session(&self) -> &QuizSession {
        &self.session
    }

    /// Runs until `quit` or the end of input.
    pub fn run(&mut self, input: impl BufRead, mut output: impl Write) -> io::Result<()> {
        tracing::debug!(task = "console_started", session_id = %self.session.id());
        writeln!(output, "{}", ConsoleMessage::Title.to_human_readable())?;
        write!(output, "{PROMPT}")?;
        output.flush()?;
        for line in input.lines() {
            let line = line?;
            if !line.trim().is_empty() {
                let (flow, replies) = match line.parse::<Command>() {
                    Ok(command) => {
                        tracing::debug!(task = "console_command", command = command.name());
                        self.handle(command)
                    }
                    Err(err) => (
                        Flow::Continue,
                        vec![ConsoleMessage::Error(err.to_string()).to_human_readable()],
                    ),
                };
                for reply in replies {
                    writeln!(output, "{reply}")?;
                }
                if let Flow::Quit = flow {
                    return Ok(());
                }
            }
            write!(output, "{PROMPT}")?;
            output.flush()?;
        }
        writeln!(output)?;
        Ok(())
    }

    fn handle(&mut self, command: Command) -> (Flow, Vec<String>) {
        let replies = match command {
            Command::Start => self.start(),
            Command::Mark(point) => {
                self.session.move_marker(point);
                Ok(vec![ConsoleMessage::Marker(point).to_human_readable()])
            }
            Command::Hint => self
                .session
                .hint(self.catalog)
                .map(|distance_km| vec![ConsoleMessage::Hint { distance_km }.to_human_readable()]),
            Command::Answer => self.answer(),
            Command::Guess(point) => {
                self.session.move_marker(point);
                self.answer()
            }
            Command::Next => self.next(),
            Command::Reset => {
                self.session.reset();
                Ok(vec![
                    ConsoleMessage::GameReset.to_human_readable(),
                    ConsoleMessage::Title.to_human_readable(),
                ])
            }
            Command::Status => Ok(vec![self.status()]),
            Command::Sites => Ok(vec![
                ConsoleMessage::Sites(self.catalog.iter().collect()).to_human_readable()
            ]),
            Command::Help => Ok(vec![HELP.to_string()]),
            Command::Quit => return (Flow::Quit, vec![]),
        };
        let replies = replies
            .unwrap_or_else(|err| vec![ConsoleMessage::Error(err.to_string()).to_human_readable()]);
        (Flow::Continue, replies)
    }

    fn start(&mut self) -> Result<Vec<String>, QuizError> {
        let site_index = self.session.start(self.catalog, &mut self.rng)?;
        let mut replies = self.quiz_header(1, site_index)?;
        replies.push(ConsoleMessage::Marker(self.session.marker()).to_human_readable());
        Ok(replies)
    }

    fn answer(&mut self) -> Result<Vec<String>, QuizError> {
        let result = self
            .session
            .submit_guess(self.session.marker(), self.catalog)?;
        let mut replies = vec![ConsoleMessage::Answer(&result).to_human_readable()];
        if result.is_final_quiz {
            replies.push(ConsoleMessage::LastAnswer.to_human_readable());
        }
        Ok(replies)
    }

    fn next(&mut self) -> Result<Vec<String>, QuizError> {
        match self.session.next_quiz(self.catalog, &mut self.rng)? {
            NextQuiz::Continue {
                quiz_number,
                site_index,
            } => self.quiz_header(quiz_number, site_index),
            NextQuiz::Finished { total_score } => {
                Ok(vec![ConsoleMessage::GameFinished { total_score }.to_human_readable()])
            }
        }
    }

    fn quiz_header(&self, quiz_number: u64, site_index: usize) -> Result<Vec<String>, QuizError> {
        let site = self
            .catalog
            .get(site_index)
            .ok_or(QuizError::UnknownSite { index: site_index })?;
        Ok(vec![ConsoleMessage::QuizHeader {
            quiz_number,
            quizzes_per_game: self.session.settings().quizzes_per_game(),
            site,
        }
        .to_human_readable()])
    }

    fn status(&self) -> String {
        ConsoleMessage::Status {
            phase: self.session.phase(),
            site: self.session.current_site(self.catalog),
            quiz_number: self.session.quiz_count() + 1,
            quizzes_per_game: self.session.settings().quizzes_per_game(),
            total_score: self.session.total_score(),
        }
        .to_human_readable()
    }
}
