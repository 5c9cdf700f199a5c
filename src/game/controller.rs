use tracing::{debug, info};

use super::feedback::{Feedback, FeedbackKind, FeedbackSink};
use super::session::Session;
use crate::case::{Case, Catalog, Language};
use crate::error::GameError;
use crate::validator::validate;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Next,
    Prev,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Boundary {
    First,
    Last,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Navigation {
    Moved(usize),
    Boundary(Boundary),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Correct,
    Incorrect,
    /// The case was already solved; nothing was checked.
    AlreadySolved,
}

/// Drives a session through the catalog and reports every outcome to a sink.
pub struct Controller<S: FeedbackSink> {
    catalog: Catalog,
    session: Session,
    sink: S,
}

impl<S: FeedbackSink> Controller<S> {
    pub fn new(catalog: Catalog, language: Language, index: usize, sink: S) -> Result<Self, GameError> {
        let session = Session::new(language, index, catalog.get_case(language, index)?);
        let mut controller = Controller {
            catalog,
            session,
            sink,
        };
        controller.sink.clear();
        info!(%language, case = index, "game started");
        Ok(controller)
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    pub fn case(&self) -> &Case {
        self.session.case()
    }

    pub fn case_count(&self) -> usize {
        self.catalog.count(self.session.language())
    }

    pub fn start_case(&mut self, language: Language, index: usize) -> Result<(), GameError> {
        let case = self.catalog.get_case(language, index)?;
        self.session.load(language, index, case);
        self.sink.clear();
        info!(%language, case = index, title = %case.title, "case started");
        Ok(())
    }

    pub fn edit_buffer(&mut self, text: impl Into<String>) {
        let text = text.into();
        debug!(len = text.len(), "buffer edited");
        self.session.set_code(text);
    }

    pub fn switch_file(&mut self, kind: Language) {
        debug!(file = %kind, "file switched");
        self.session.set_current_file(kind);
    }

    pub fn submit(&mut self) -> Result<Verdict, GameError> {
        if self.session.solved() {
            return Ok(Verdict::AlreadySolved);
        }

        let submitted = self.session.code().trim();
        if submitted.is_empty() {
            self.sink.emit(Feedback::empty_submission());
            return Err(GameError::EmptySubmission);
        }

        let language = self.session.language();
        let expected = &self.session.case().expected_answer;
        if validate(language, expected, submitted) {
            let feedback = Feedback::correct(language, submitted, expected);
            self.session.set_solved(true);
            self.sink.emit(feedback);
            info!(%language, case = self.session.case_index(), "case solved");
            Ok(Verdict::Correct)
        } else {
            self.sink.emit(Feedback::incorrect(language));
            info!(%language, case = self.session.case_index(), "wrong answer");
            Ok(Verdict::Incorrect)
        }
    }

    /// Restores every file to the case's starting code.
    pub fn reset(&mut self) {
        self.session.restore_initial();
        self.session.set_solved(false);
        self.sink.clear();
        debug!(case = self.session.case_index(), "case reset");
    }

    pub fn navigate(&mut self, direction: Direction) -> Result<Navigation, GameError> {
        let index = self.session.case_index();
        let target = match direction {
            Direction::Next => index.checked_add(1).filter(|&i| i < self.case_count()),
            Direction::Prev => index.checked_sub(1),
        };

        match target {
            Some(target) => {
                self.start_case(self.session.language(), target)?;
                Ok(Navigation::Moved(target))
            }
            None => {
                let (boundary, body) = match direction {
                    Direction::Next => (Boundary::Last, "You've completed all cases!"),
                    Direction::Prev => (Boundary::First, "This is the first case!"),
                };
                info!(?boundary, "navigation boundary reached");
                self.sink.emit(Feedback::new(FeedbackKind::Notice, "Notice", body));
                Ok(Navigation::Boundary(boundary))
            }
        }
    }

    /// Toggles the hint; returns whether it is now visible.
    pub fn show_hint(&mut self) -> bool {
        let visible = self.session.toggle_hint();
        if visible {
            let hint = Feedback::hint(&self.session.case().hint);
            self.sink.emit(hint);
        }
        visible
    }
}
